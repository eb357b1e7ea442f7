//! `pg_catalog` builtin type canonicalization table.
//!
//! Source of truth: `src/backend/utils/adt/format_type.c`'s `format_type_extended`,
//! restricted to the builtins this crate's type-name renderer (`crate::typename`)
//! needs to reproduce bit-exactly.

/// How a canonicalized builtin type renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinRendering {
    /// Render as this bare word; any typmods are ignored (Postgres does not
    /// surface them for this type, e.g. `int4` has no meaningful typmod).
    Bare(&'static str),
    /// Render as this word, followed by `(typmods)` when typmods are present.
    WithTypmods(&'static str),
    /// `pg_catalog.interval`: handled separately by `crate::typename::render_interval`.
    Interval,
}

/// Maps a `pg_catalog` builtin type name to its canonical rendering, or `None`
/// if `name` is not one of the builtins this renderer recognizes.
pub fn canonical_builtin_type(name: &str) -> Option<BuiltinRendering> {
    use BuiltinRendering::*;
    Some(match name {
        "bool" => Bare("boolean"),
        "int2" => Bare("smallint"),
        "int4" => Bare("int"),
        "int8" => Bare("bigint"),
        "real" | "float4" => Bare("real"),
        "float8" => Bare("double precision"),
        "time" => Bare("time"),
        "timetz" => Bare("time with time zone"),
        "timestamp" => Bare("timestamp"),
        "timestamptz" => Bare("timestamp with time zone"),
        "numeric" => WithTypmods("numeric"),
        "bpchar" => WithTypmods("char"),
        "varchar" => WithTypmods("varchar"),
        "interval" => Interval,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_builtins_resolve() {
        assert_eq!(canonical_builtin_type("int4"), Some(BuiltinRendering::Bare("int")));
        assert_eq!(
            canonical_builtin_type("bpchar"),
            Some(BuiltinRendering::WithTypmods("char"))
        );
        assert_eq!(canonical_builtin_type("interval"), Some(BuiltinRendering::Interval));
    }

    #[test]
    fn unknown_builtin_is_none() {
        assert_eq!(canonical_builtin_type("box"), None);
    }
}
