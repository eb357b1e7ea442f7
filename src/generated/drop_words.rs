//! `DROP <object-type> ...` keyword table.
//!
//! Source of truth: the `ObjectType` enum in `src/include/nodes/parsenodes.h`,
//! restricted to the object types `DropStmt` can carry.
pub fn drop_object_keyword(remove_type: &str) -> Option<&'static str> {
    Some(match remove_type {
        "OBJECT_TABLE" => "TABLE",
        "OBJECT_SEQUENCE" => "SEQUENCE",
        "OBJECT_VIEW" => "VIEW",
        "OBJECT_MATVIEW" => "MATERIALIZED VIEW",
        "OBJECT_INDEX" => "INDEX",
        "OBJECT_FOREIGN_TABLE" => "FOREIGN TABLE",
        "OBJECT_SCHEMA" => "SCHEMA",
        "OBJECT_TYPE" => "TYPE",
        "OBJECT_DOMAIN" => "DOMAIN",
        "OBJECT_RULE" => "RULE",
        "OBJECT_TRIGGER" => "TRIGGER",
        "OBJECT_FUNCTION" => "FUNCTION",
        "OBJECT_EXTENSION" => "EXTENSION",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_object_types_resolve() {
        assert_eq!(drop_object_keyword("OBJECT_TABLE"), Some("TABLE"));
        assert_eq!(drop_object_keyword("OBJECT_MATVIEW"), Some("MATERIALIZED VIEW"));
    }

    #[test]
    fn unknown_object_type_is_none() {
        assert_eq!(drop_object_keyword("OBJECT_TABLESPACE"), None);
    }
}
