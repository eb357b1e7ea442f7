//! `TypeName` rendering: builtin canonicalization and interval typmod decoding.

use crate::ast::{Node, TypeName};
use crate::error::DeparseError;
use crate::generated::{canonical_builtin_type, decode_interval_typmod, INTERVAL_MASK_FULL};
use crate::generated::types::BuiltinRendering;

/// Renders a `TypeName` node to its SQL text.
///
/// `pg_catalog.<builtin>` names are canonicalized (`int4` -> `int`, etc.);
/// `pg_catalog.interval` is decoded via [`render_interval`]; any other name is
/// joined with `.` and gets a typmod list and array suffix appended verbatim.
/// Any other `pg_catalog` type that isn't in the canonicalization table is a
/// hard error (the spec calls this "fail-fast — catches drift").
pub fn render_type_name(type_name: &TypeName, escape_always: bool) -> Result<String, DeparseError> {
    let names: Vec<&str> = type_name
        .names
        .iter()
        .filter_map(Node::as_str_node)
        .collect();

    let mut rendered = if names.len() == 2 && names[0] == "pg_catalog" {
        let builtin = names[1];
        match canonical_builtin_type(builtin) {
            Some(BuiltinRendering::Bare(word)) => word.to_string(),
            Some(BuiltinRendering::WithTypmods(word)) => {
                format!("{word}{}", render_typmods(&type_name.typmods))
            }
            Some(BuiltinRendering::Interval) => render_interval(&type_name.typmods)?,
            None => {
                return Err(DeparseError::unsupported_type(format!(
                    "pg_catalog.{builtin}"
                )))
            }
        }
    } else {
        let joined = names
            .iter()
            .map(|n| crate::ident::quote_identifier(n, escape_always))
            .collect::<Vec<_>>()
            .join(".");
        format!("{joined}{}", render_typmods(&type_name.typmods))
    };

    if type_name.setof {
        rendered = format!("SETOF {rendered}");
    }
    for _ in &type_name.array_bounds {
        rendered.push_str("[]");
    }

    Ok(rendered)
}

fn render_typmods(typmods: &[Node]) -> String {
    if typmods.is_empty() {
        return String::new();
    }
    let parts: Vec<String> = typmods
        .iter()
        .filter_map(typmod_int)
        .map(|n| n.to_string())
        .collect();
    if parts.is_empty() {
        String::new()
    } else {
        format!("({})", parts.join(","))
    }
}

/// Decodes `pg_catalog.interval`'s typmod list: `typmods[0]` is the qualifier
/// bitmask; an optional `typmods[1]` is the seconds precision, which only
/// applies when the decoded qualifier set ends in `second`.
pub fn render_interval(typmods: &[Node]) -> Result<String, DeparseError> {
    let Some(mask) = typmods.first().and_then(typmod_int) else {
        return Ok("interval".to_string());
    };
    let mask = mask as i32;
    if mask == INTERVAL_MASK_FULL {
        return Ok("interval".to_string());
    }
    let Some(tokens) = decode_interval_typmod(mask) else {
        return Ok("interval".to_string());
    };

    let mut tokens: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    if typmods.len() == 2 && tokens.last().map(String::as_str) == Some("second") {
        if let Some(precision) = typmod_int(&typmods[1]) {
            *tokens.last_mut().expect("checked non-empty above") = format!("second({precision})");
        }
    }

    Ok(format!("interval {}", tokens.join(" to ")))
}

fn typmod_int(node: &Node) -> Option<i64> {
    match node {
        Node::Integer(i) => Some(i.ival),
        Node::AConst(a) => match a.val.as_deref() {
            Some(Node::Integer(i)) => Some(i.ival),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::IntegerNode;

    fn int_node(v: i64) -> Node {
        Node::Integer(IntegerNode { ival: v })
    }

    fn builtin_type(schema: &str, name: &str, typmods: Vec<Node>) -> TypeName {
        TypeName {
            names: vec![
                Node::String(crate::ast::StringNode {
                    sval: schema.to_string(),
                }),
                Node::String(crate::ast::StringNode {
                    sval: name.to_string(),
                }),
            ],
            type_oid: 0,
            setof: false,
            pct_type: false,
            typmods,
            typemod: -1,
            array_bounds: vec![],
            location: 0,
        }
    }

    #[test]
    fn canonicalizes_int4_to_int() {
        let tn = builtin_type("pg_catalog", "int4", vec![]);
        assert_eq!(render_type_name(&tn, false).unwrap(), "int");
    }

    #[test]
    fn numeric_keeps_typmods() {
        let tn = builtin_type("pg_catalog", "numeric", vec![int_node(10), int_node(2)]);
        assert_eq!(render_type_name(&tn, false).unwrap(), "numeric(10,2)");
    }

    #[test]
    fn unknown_pg_catalog_type_errors() {
        let tn = builtin_type("pg_catalog", "money", vec![]);
        assert!(render_type_name(&tn, false).is_err());
    }

    #[test]
    fn interval_plain_has_no_qualifier() {
        let tn = builtin_type("pg_catalog", "interval", vec![]);
        assert_eq!(render_type_name(&tn, false).unwrap(), "interval");
    }

    #[test]
    fn interval_day_to_second_with_precision() {
        // DAY_TO_SECOND mask, with explicit seconds precision.
        let mask = (1 << 3) | (1 << 10) | (1 << 11) | (1 << 12);
        let tn = builtin_type(
            "pg_catalog",
            "interval",
            vec![int_node(mask), int_node(3)],
        );
        assert_eq!(
            render_type_name(&tn, false).unwrap(),
            "interval day to second(3)"
        );
    }

    #[test]
    fn non_catalog_type_joins_names_with_dots() {
        let tn = TypeName {
            names: vec![
                Node::String(crate::ast::StringNode {
                    sval: "myschema".to_string(),
                }),
                Node::String(crate::ast::StringNode {
                    sval: "my_type".to_string(),
                }),
            ],
            type_oid: 0,
            setof: false,
            pct_type: false,
            typmods: vec![],
            typemod: -1,
            array_bounds: vec![],
            location: 0,
        };
        assert_eq!(
            render_type_name(&tn, false).unwrap(),
            r#""myschema"."my_type""#
        );
    }
}
