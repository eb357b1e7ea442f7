//! Tagged-union AST node model.
//!
//! The AST handed to this crate is a JSON-like tree produced by an external
//! PostgreSQL parser: every node is an object with exactly one key (its kind)
//! whose value is the payload. That shape is a structural match for serde's
//! default, externally-tagged enum representation, so [`Node`] derives
//! `Deserialize` with no custom code — `{"RangeVar": {"relname": "foo"}}`
//! deserializes directly into `Node::RangeVar(Box::new(RangeVar { relname:
//! "foo".into(), .. }))`. Primitive and marker nodes (`Integer`, `Null`,
//! `AStar`, ...) still carry a (possibly empty) payload object rather than
//! being bare unit variants, so the "exactly one key, one payload" contract
//! holds uniformly across every node kind.
//!
//! The real PostgreSQL grammar has well over a hundred node kinds; this model
//! carries the ~50 that the reference extractor and deparser in this crate
//! actually dispatch on (see `SPEC_FULL.md` §2/§4), plus the catch-all
//! [`Node::Unknown`] variant so kinds outside that set still deserialize
//! instead of failing the whole parse — the extractor silently skips them,
//! and the deparser reports them as [`crate::error::DeparseError::UnsupportedNode`].

pub mod clause;
pub mod ddl;
pub mod expr;
pub mod range;
pub mod stmt;

pub use clause::{CommonTableExpr, RoleSpec, SortBy, TypeName, WindowDef, WithClause};
pub use ddl::{
    conflict_action, constr_type, grant_objtype, AlterTableCmd, AlterTableStmt, ColumnDef,
    Constraint, CreateStmt, CreateTableAsStmt, CreateTrigStmt, DropStmt, GrantStmt, IndexStmt,
    InferClause, LockStmt, OnConflictClause, RefreshMatViewStmt, RuleStmt, TruncateStmt, ViewStmt,
};
pub use expr::{
    AArrayExpr, AConst, AIndices, AIndirection, AExpr, BoolExpr, BooleanTest, CaseExpr, CaseWhen,
    CoalesceExpr, CollateClause, ColumnRef, FuncCall, GroupingSet, MinMaxExpr, NullTest, ParamRef,
    ResTarget, RowExpr, SubLink, TypeCast,
};
pub use range::{
    Alias, IntoClause, JoinExpr, LockingClause, RangeFunction, RangeSubselect, RangeVar,
};
pub use stmt::{
    set_op, transaction_kind, CopyStmt, DeleteStmt, ExplainStmt, InsertStmt, SelectStmt,
    TransactionStmt, UpdateStmt, VacuumRelation, VacuumStmt,
};

use serde::{Deserialize, Serialize};

/// A top-level parse result is an ordered sequence of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawStmt {
    pub stmt: Node,
    #[serde(default)]
    pub stmt_location: i32,
    #[serde(default)]
    pub stmt_len: i32,
}

/// A node payload with no fields of its own, e.g. `Null` or `AStar`.
///
/// Declared as a struct (not a unit variant on [`Node`]) so it still
/// serializes as `{}` rather than collapsing to a bare string under serde's
/// externally-tagged representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Empty {}

/// `Integer` node payload. Postgres keeps integer constants as machine ints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegerNode {
    pub ival: i64,
}

/// `Float` node payload. Postgres keeps float constants as their original
/// source text to avoid lossy round-tripping through a binary float type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatNode {
    pub fval: String,
}

/// `String` node payload: an identifier or string-literal component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringNode {
    pub sval: String,
}

/// `Boolean` node payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BooleanNode {
    pub boolval: bool,
}

/// Every AST node kind the reference extractor or deparser dispatches on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Node {
    // --- Primitive value nodes ---
    Integer(IntegerNode),
    Float(FloatNode),
    String(StringNode),
    Boolean(BooleanNode),
    Null(Empty),
    /// `SetToDefault`: the bare `DEFAULT` keyword used as a value.
    SetToDefault(Empty),
    /// A marker for `*` in `SELECT *` / `foo.*`.
    AStar(Empty),
    /// An explicit list of nodes (e.g. the RHS of `x IN (a, b)`, or a
    /// multi-column `ROW(...)` comparison operand).
    List(Vec<Node>),

    // --- Statements ---
    RawStmt(Box<RawStmt>),
    SelectStmt(Box<SelectStmt>),
    InsertStmt(Box<InsertStmt>),
    UpdateStmt(Box<UpdateStmt>),
    DeleteStmt(Box<DeleteStmt>),
    CopyStmt(Box<CopyStmt>),
    ExplainStmt(Box<ExplainStmt>),
    TransactionStmt(Box<TransactionStmt>),
    VacuumStmt(Box<VacuumStmt>),

    // --- DDL ---
    CreateStmt(Box<CreateStmt>),
    AlterTableStmt(Box<AlterTableStmt>),
    IndexStmt(Box<IndexStmt>),
    CreateTrigStmt(Box<CreateTrigStmt>),
    RuleStmt(Box<RuleStmt>),
    ViewStmt(Box<ViewStmt>),
    CreateTableAsStmt(Box<CreateTableAsStmt>),
    RefreshMatViewStmt(Box<RefreshMatViewStmt>),
    TruncateStmt(Box<TruncateStmt>),
    LockStmt(Box<LockStmt>),
    GrantStmt(Box<GrantStmt>),
    DropStmt(Box<DropStmt>),

    // --- Expressions ---
    AExpr(Box<AExpr>),
    ColumnRef(Box<ColumnRef>),
    ParamRef(Box<ParamRef>),
    AConst(Box<AConst>),
    TypeCast(Box<TypeCast>),
    CollateClause(Box<CollateClause>),
    FuncCall(Box<FuncCall>),
    AIndices(Box<AIndices>),
    AIndirection(Box<AIndirection>),
    AArrayExpr(Box<AArrayExpr>),
    SubLink(Box<SubLink>),
    BoolExpr(Box<BoolExpr>),
    NullTest(Box<NullTest>),
    BooleanTest(Box<BooleanTest>),
    CaseExpr(Box<CaseExpr>),
    CaseWhen(Box<CaseWhen>),
    CoalesceExpr(Box<CoalesceExpr>),
    MinMaxExpr(Box<MinMaxExpr>),
    RowExpr(Box<RowExpr>),
    GroupingSet(Box<GroupingSet>),

    // --- Targets / ranges ---
    ResTarget(Box<ResTarget>),
    RangeVar(Box<RangeVar>),
    RangeSubselect(Box<RangeSubselect>),
    RangeFunction(Box<RangeFunction>),
    JoinExpr(Box<JoinExpr>),
    IntoClause(Box<IntoClause>),
    LockingClause(Box<LockingClause>),

    // --- Clauses ---
    SortBy(Box<SortBy>),
    WindowDef(Box<WindowDef>),
    WithClause(Box<WithClause>),
    CommonTableExpr(Box<CommonTableExpr>),
    OnConflictClause(Box<OnConflictClause>),
    InferClause(Box<InferClause>),
    TypeName(Box<TypeName>),
    RoleSpec(Box<RoleSpec>),
    Constraint(Box<Constraint>),
    ColumnDef(Box<ColumnDef>),
    AlterTableCmd(Box<AlterTableCmd>),
    VacuumRelation(Box<VacuumRelation>),

    /// Forward-compatibility catch-all for any kind not listed above.
    Unknown { kind: String, raw: serde_json::Value },
}

// `#[derive(Deserialize)]`'s externally-tagged support has no "unrecognized
// variant" escape hatch — an unknown key is a hard error. We want unknown
// kinds to deserialize into `Node::Unknown` instead (see the module docs), so
// `Node` gets a hand-written `Deserialize` that inspects the single-key
// object itself and falls back explicitly.
impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error as _;

        let value = serde_json::Value::deserialize(deserializer)?;
        let obj = value
            .as_object()
            .ok_or_else(|| D::Error::custom("expected a single-key object node"))?;
        let (kind, payload) = obj
            .iter()
            .next()
            .ok_or_else(|| D::Error::custom("node object has no kind key"))?;

        macro_rules! boxed {
            ($Variant:ident, $Ty:ty) => {
                if kind == stringify!($Variant) {
                    let inner: $Ty = serde_json::from_value(payload.clone()).map_err(D::Error::custom)?;
                    return Ok(Node::$Variant(Box::new(inner)));
                }
            };
        }
        macro_rules! plain {
            ($Variant:ident, $Ty:ty) => {
                if kind == stringify!($Variant) {
                    let inner: $Ty = serde_json::from_value(payload.clone()).map_err(D::Error::custom)?;
                    return Ok(Node::$Variant(inner));
                }
            };
        }

        plain!(Integer, IntegerNode);
        plain!(Float, FloatNode);
        plain!(String, StringNode);
        plain!(Boolean, BooleanNode);
        plain!(Null, Empty);
        plain!(SetToDefault, Empty);
        plain!(AStar, Empty);
        plain!(List, Vec<Node>);

        boxed!(RawStmt, RawStmt);
        boxed!(SelectStmt, SelectStmt);
        boxed!(InsertStmt, InsertStmt);
        boxed!(UpdateStmt, UpdateStmt);
        boxed!(DeleteStmt, DeleteStmt);
        boxed!(CopyStmt, CopyStmt);
        boxed!(ExplainStmt, ExplainStmt);
        boxed!(TransactionStmt, TransactionStmt);
        boxed!(VacuumStmt, VacuumStmt);

        boxed!(CreateStmt, CreateStmt);
        boxed!(AlterTableStmt, AlterTableStmt);
        boxed!(IndexStmt, IndexStmt);
        boxed!(CreateTrigStmt, CreateTrigStmt);
        boxed!(RuleStmt, RuleStmt);
        boxed!(ViewStmt, ViewStmt);
        boxed!(CreateTableAsStmt, CreateTableAsStmt);
        boxed!(RefreshMatViewStmt, RefreshMatViewStmt);
        boxed!(TruncateStmt, TruncateStmt);
        boxed!(LockStmt, LockStmt);
        boxed!(GrantStmt, GrantStmt);
        boxed!(DropStmt, DropStmt);

        boxed!(AExpr, AExpr);
        boxed!(ColumnRef, ColumnRef);
        boxed!(ParamRef, ParamRef);
        boxed!(AConst, AConst);
        boxed!(TypeCast, TypeCast);
        boxed!(CollateClause, CollateClause);
        boxed!(FuncCall, FuncCall);
        boxed!(AIndices, AIndices);
        boxed!(AIndirection, AIndirection);
        boxed!(AArrayExpr, AArrayExpr);
        boxed!(SubLink, SubLink);
        boxed!(BoolExpr, BoolExpr);
        boxed!(NullTest, NullTest);
        boxed!(BooleanTest, BooleanTest);
        boxed!(CaseExpr, CaseExpr);
        boxed!(CaseWhen, CaseWhen);
        boxed!(CoalesceExpr, CoalesceExpr);
        boxed!(MinMaxExpr, MinMaxExpr);
        boxed!(RowExpr, RowExpr);
        boxed!(GroupingSet, GroupingSet);

        boxed!(ResTarget, ResTarget);
        boxed!(RangeVar, RangeVar);
        boxed!(RangeSubselect, RangeSubselect);
        boxed!(RangeFunction, RangeFunction);
        boxed!(JoinExpr, JoinExpr);
        boxed!(IntoClause, IntoClause);
        boxed!(LockingClause, LockingClause);

        boxed!(SortBy, SortBy);
        boxed!(WindowDef, WindowDef);
        boxed!(WithClause, WithClause);
        boxed!(CommonTableExpr, CommonTableExpr);
        boxed!(OnConflictClause, OnConflictClause);
        boxed!(InferClause, InferClause);
        boxed!(TypeName, TypeName);
        boxed!(RoleSpec, RoleSpec);
        boxed!(Constraint, Constraint);
        boxed!(ColumnDef, ColumnDef);
        boxed!(AlterTableCmd, AlterTableCmd);
        boxed!(VacuumRelation, VacuumRelation);

        Ok(Node::Unknown {
            kind: kind.clone(),
            raw: payload.clone(),
        })
    }
}

impl Node {
    /// The `sval` of a `String` node, if that's what this is.
    pub fn as_str_node(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(&s.sval),
            _ => None,
        }
    }

    /// Flattens a node that may be a [`Node::List`] into its elements;
    /// a non-list node flattens to a single-element slice-like vec.
    ///
    /// Used by the extractor and deparser wherever the spec calls for
    /// "flatten sequences" (e.g. `A_Expr.rexpr` for `IN`/`BETWEEN`).
    pub fn flatten(node: &Node) -> Vec<&Node> {
        match node {
            Node::List(items) => items.iter().collect(),
            other => vec![other],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_round_trips_through_json_as_single_key_object() {
        let node = Node::RangeVar(Box::new(RangeVar {
            schemaname: None,
            relname: "foo".to_string(),
            inh: true,
            relpersistence: None,
            alias: None,
            location: 0,
        }));
        let json = serde_json::to_value(&node).unwrap();
        let obj = json.as_object().expect("node serializes as an object");
        assert_eq!(obj.len(), 1);
        assert!(obj.contains_key("RangeVar"));

        let back: Node = serde_json::from_value(json).unwrap();
        assert_eq!(back, node);
    }

    #[test]
    fn marker_nodes_serialize_as_empty_objects_not_bare_strings() {
        let json = serde_json::to_value(&Node::Null(Empty {})).unwrap();
        assert_eq!(json, serde_json::json!({"Null": {}}));
    }

    #[test]
    fn unknown_kind_deserializes_instead_of_failing() {
        let json = serde_json::json!({"SomeFutureNode": {"field": 1}});
        let node: Node = serde_json::from_value(json).unwrap();
        match node {
            Node::Unknown { kind, .. } => assert_eq!(kind, "SomeFutureNode"),
            other => panic!("expected Unknown, got {other:?}"),
        }
    }

    #[test]
    fn flatten_wraps_non_list_nodes() {
        let n = Node::Null(Empty {});
        assert_eq!(Node::flatten(&n), vec![&n]);
    }

    #[test]
    fn flatten_unwraps_list_nodes() {
        let a = Node::Null(Empty {});
        let b = Node::SetToDefault(Empty {});
        let list = Node::List(vec![a.clone(), b.clone()]);
        assert_eq!(Node::flatten(&list), vec![&a, &b]);
    }
}
