//! Small string-building helpers shared across the deparser's renderers.

/// Wraps `text` in parentheses.
pub fn parenthesize(text: impl AsRef<str>) -> String {
    format!("({})", text.as_ref())
}

/// Escapes a string literal body: doubles embedded single quotes and wraps in
/// `'...'`. Used for `A_Const` string rendering.
pub fn quote_literal(raw: &str) -> String {
    format!("'{}'", raw.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parenthesize_wraps_text() {
        assert_eq!(parenthesize("a = 1"), "(a = 1)");
    }

    #[test]
    fn quote_literal_doubles_embedded_quotes() {
        assert_eq!(quote_literal("it's"), "'it''s'");
    }
}
