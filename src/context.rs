//! Context tags threaded through the deparser.
//!
//! A [`Context`] is a small enum carried down through `deparse` recursion calls.
//! It only ever changes how a *leaf* renders (an identifier, a string constant, a
//! bare operator) — it never changes which clauses a statement emits. Keeping it
//! an enum instead of a handful of booleans matches the rest of this crate's
//! preference for closed, exhaustively-matched state over loose flags.

/// Steers leaf rendering inside [`crate::deparser::deparse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Context {
    /// Inside a `SELECT` target list or a `RETURNING` list: `ResTarget` renders
    /// as `val AS name` instead of `name = val`.
    Select,
    /// Inside the `SET` list of an `UPDATE` (including `ON CONFLICT DO UPDATE SET`
    /// without an `excluded.` reference): `ResTarget` renders as `name = val`.
    Update,
    /// Inside `ON CONFLICT DO UPDATE SET`: the bare identifier `excluded` is
    /// preserved upper-cased and unquoted; every other identifier is still quoted.
    Excluded,
    /// Rendering an `A_Const` payload string: becomes `'<escaped>'`.
    AConst,
    /// Rendering a function call name or argument keyword: emitted raw.
    FuncCall,
    /// Rendering a type name component: emitted raw.
    TypeName,
    /// Rendering a bare operator token: emitted raw.
    Operator,
    /// Rendering the right-hand side of `... AS name` in a `DefElem`-like spot.
    DefnameAs,
    /// Non-outermost position of a binary expression: forces parenthesization.
    Precedence,
}
