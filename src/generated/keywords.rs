//! The PostgreSQL reserved-keyword set.
//!
//! Source of truth: `src/include/parser/kwlist.h` in the PostgreSQL source tree,
//! filtered to the words whose category is `RESERVED_KEYWORD` or
//! `TYPE_FUNC_NAME_KEYWORD` — i.e. the words that are unsafe to use as a bare,
//! unquoted identifier in any position. `UNRESERVED_KEYWORD` and
//! `COL_NAME_KEYWORD` entries (e.g. `value`, `at`) are deliberately excluded:
//! Postgres itself accepts them unquoted as ordinary identifiers.
const RESERVED_KEYWORDS: &[&str] = &[
    "ALL",
    "ANALYSE",
    "ANALYZE",
    "AND",
    "ANY",
    "ARRAY",
    "AS",
    "ASC",
    "ASYMMETRIC",
    "BOTH",
    "CASE",
    "CAST",
    "CHECK",
    "COLLATE",
    "COLLATION",
    "COLUMN",
    "CONCURRENTLY",
    "CONSTRAINT",
    "CREATE",
    "CROSS",
    "CURRENT_CATALOG",
    "CURRENT_DATE",
    "CURRENT_ROLE",
    "CURRENT_SCHEMA",
    "CURRENT_TIME",
    "CURRENT_TIMESTAMP",
    "CURRENT_USER",
    "DEFAULT",
    "DEFERRABLE",
    "DESC",
    "DISTINCT",
    "DO",
    "ELSE",
    "END",
    "EXCEPT",
    "FALSE",
    "FETCH",
    "FOR",
    "FOREIGN",
    "FREEZE",
    "FROM",
    "FULL",
    "GRANT",
    "GROUP",
    "HAVING",
    "ILIKE",
    "IN",
    "INITIALLY",
    "INNER",
    "INTERSECT",
    "INTO",
    "IS",
    "ISNULL",
    "JOIN",
    "LATERAL",
    "LEADING",
    "LEFT",
    "LIKE",
    "LIMIT",
    "LOCALTIME",
    "LOCALTIMESTAMP",
    "NATURAL",
    "NOT",
    "NOTNULL",
    "NULL",
    "OFFSET",
    "ON",
    "ONLY",
    "OR",
    "ORDER",
    "OUTER",
    "OVERLAPS",
    "PLACING",
    "PRIMARY",
    "REFERENCES",
    "RETURNING",
    "RIGHT",
    "SELECT",
    "SESSION_USER",
    "SIMILAR",
    "SOME",
    "SYMMETRIC",
    "SYSTEM_USER",
    "TABLE",
    "TABLESAMPLE",
    "THEN",
    "TO",
    "TRAILING",
    "TRUE",
    "UNION",
    "UNIQUE",
    "USER",
    "USING",
    "VARIADIC",
    "VERBOSE",
    "WHEN",
    "WHERE",
    "WINDOW",
    "WITH",
    // TYPE_FUNC_NAME_KEYWORD
    "AUTHORIZATION",
    "BINARY",
    "COLLATION",
    "FREEZE",
    "ILIKE",
    "LEFT",
    "LIKE",
    "NATURAL",
    "OUTER",
    "OVERLAPS",
    "RIGHT",
    "SIMILAR",
    "VERBOSE",
];

/// Whether `upper` (already upper-cased by the caller) names a reserved word.
pub fn is_reserved_keyword(upper: &str) -> bool {
    RESERVED_KEYWORDS.contains(&upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_is_reserved() {
        assert!(is_reserved_keyword("SELECT"));
    }

    #[test]
    fn ordinary_word_is_not_reserved() {
        assert!(!is_reserved_keyword("FOO"));
        assert!(!is_reserved_keyword("VALUE"));
    }

    #[test]
    fn lookup_is_case_sensitive_on_the_caller_contract() {
        // The table stores upper-case forms; lower-case input is simply not found.
        // Callers are responsible for upper-casing first.
        assert!(!is_reserved_keyword("select"));
    }
}
