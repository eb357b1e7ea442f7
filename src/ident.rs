//! Identifier quoting rules.
//!
//! Every identifier is rendered double-quoted, with internal `"` doubled —
//! this is the current contract (`SPEC_FULL.md` §4.2), independent of
//! `escape_always`, of whether the raw text contains non-word characters, or
//! of whether it collides with a reserved keyword.

/// Renders `raw` as a SQL identifier: always double-quoted, with internal
/// `"` doubled.
pub fn quote_identifier(raw: &str, _escape_always: bool) -> String {
    format!("\"{}\"", raw.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("foo")]
    #[case("foo_bar")]
    #[case("_leading_underscore")]
    #[case("Foo")]
    #[case("foo bar")]
    #[case("foo-bar")]
    #[case("select")]
    #[case("SELECT")]
    fn always_quotes_regardless_of_shape(#[case] raw: &str) {
        assert_eq!(quote_identifier(raw, false), format!("\"{raw}\""));
    }

    #[test]
    fn escape_always_does_not_change_output() {
        assert_eq!(quote_identifier("foo", false), quote_identifier("foo", true));
    }

    #[test]
    fn quote_identifier_doubles_embedded_quotes() {
        assert_eq!(quote_identifier("weird\"name", false), "\"weird\"\"name\"");
    }
}
