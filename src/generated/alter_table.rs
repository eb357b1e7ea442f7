//! `ALTER TABLE` / `RENAME` subcommand dispatch table.
//!
//! Source of truth: the `AlterTableType` enum in
//! `src/include/nodes/parsenodes.h`. Only the subcommand kind is mapped here;
//! `crate::deparser::ddl` is responsible for rendering each subcommand's
//! arguments (column name, new type, constraint, ...) around the keyword this
//! table returns.
pub fn alter_table_subcommand_keyword(subtype: i32) -> Option<&'static str> {
    Some(match subtype {
        0 => "ADD COLUMN",
        1 => "DROP COLUMN",
        2 => "ALTER COLUMN TYPE",
        3 => "SET NOT NULL",
        4 => "DROP NOT NULL",
        5 => "SET DEFAULT",
        6 => "DROP DEFAULT",
        7 => "ADD CONSTRAINT",
        8 => "DROP CONSTRAINT",
        9 => "VALIDATE CONSTRAINT",
        10 => "RENAME COLUMN",
        11 => "RENAME CONSTRAINT",
        12 => "RENAME TO",
        13 => "SET SCHEMA",
        14 => "OWNER TO",
        15 => "SET TABLESPACE",
        16 => "ENABLE ROW LEVEL SECURITY",
        17 => "DISABLE ROW LEVEL SECURITY",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_subcommands_resolve() {
        assert_eq!(alter_table_subcommand_keyword(0), Some("ADD COLUMN"));
        assert_eq!(alter_table_subcommand_keyword(12), Some("RENAME TO"));
    }

    #[test]
    fn unknown_subcommand_is_none() {
        assert_eq!(alter_table_subcommand_keyword(999), None);
    }
}
