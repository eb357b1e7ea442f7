//! `FROM`-clause and join rendering.

use super::{deparse, DeparseCtx};
use crate::ast::{self, range::join_type, Node};
use crate::error::DeparseError;

pub(super) fn render_alias(alias: &ast::Alias, ctx: &DeparseCtx) -> String {
    let mut out = crate::ident::quote_identifier(&alias.aliasname, ctx.escape_always);
    if !alias.colnames.is_empty() {
        let cols: Vec<String> = alias
            .colnames
            .iter()
            .filter_map(Node::as_str_node)
            .map(|c| crate::ident::quote_identifier(c, ctx.escape_always))
            .collect();
        out.push_str(&format!("({})", cols.join(", ")));
    }
    out
}

pub(super) fn render_range_var(rv: &ast::RangeVar, ctx: &DeparseCtx) -> String {
    let mut out = String::new();
    if !rv.inh {
        out.push_str("ONLY ");
    }
    if let Some(schema) = &rv.schemaname {
        out.push_str(&crate::ident::quote_identifier(schema, ctx.escape_always));
        out.push('.');
    }
    out.push_str(&crate::ident::quote_identifier(&rv.relname, ctx.escape_always));
    if let Some(alias) = &rv.alias {
        out.push(' ');
        out.push_str(&render_alias(alias, ctx));
    }
    out
}

pub(super) fn render_range_subselect(
    rs: &ast::RangeSubselect,
    ctx: &DeparseCtx,
) -> Result<String, DeparseError> {
    let inner = deparse(&rs.subquery, None, ctx)?;
    let mut out = format!("({inner})");
    if rs.lateral {
        out = format!("LATERAL {out}");
    }
    if let Some(alias) = &rs.alias {
        out.push(' ');
        out.push_str(&render_alias(alias, ctx));
    }
    Ok(out)
}

pub(super) fn render_range_function(
    rf: &ast::RangeFunction,
    ctx: &DeparseCtx,
) -> Result<String, DeparseError> {
    let func_expr = rf
        .functions
        .first()
        .and_then(|entry| entry.first())
        .map(|n| deparse(n, None, ctx))
        .transpose()?
        .unwrap_or_default();

    let mut out = func_expr;
    if rf.ordinality {
        out.push_str(" WITH ORDINALITY");
    }
    if rf.lateral {
        out = format!("LATERAL {out}");
    }
    if let Some(alias) = &rf.alias {
        out.push(' ');
        out.push_str(&render_alias(alias, ctx));
    }
    Ok(out)
}

pub(super) fn render_join_expr(j: &ast::JoinExpr, ctx: &DeparseCtx) -> Result<String, DeparseError> {
    let larg = deparse(&j.larg, None, ctx)?;
    let rarg = deparse(&j.rarg, None, ctx)?;

    let is_cross = j.jointype == join_type::INNER && j.quals.is_none() && j.using_clause.is_none();

    let keyword = if j.jointype == join_type::INNER {
        if j.is_natural {
            "NATURAL JOIN"
        } else if is_cross {
            "CROSS JOIN"
        } else {
            "JOIN"
        }
    } else if j.jointype == join_type::LEFT {
        "LEFT JOIN"
    } else if j.jointype == join_type::FULL {
        "FULL JOIN"
    } else {
        "RIGHT JOIN"
    };

    let mut out = format!("{larg} {keyword} {rarg}");

    if let Some(quals) = &j.quals {
        out.push_str(" ON ");
        out.push_str(&deparse(quals, None, ctx)?);
    } else if let Some(using) = &j.using_clause {
        let cols: Vec<String> = using
            .iter()
            .filter_map(Node::as_str_node)
            .map(|c| crate::ident::quote_identifier(c, ctx.escape_always))
            .collect();
        out.push_str(&format!(" USING ({})", cols.join(", ")));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Alias;

    const DCTX: DeparseCtx = DeparseCtx {
        escape_always: false,
    };

    fn range_var(relname: &str) -> ast::RangeVar {
        ast::RangeVar {
            schemaname: None,
            relname: relname.to_string(),
            inh: true,
            relpersistence: None,
            alias: None,
            location: 0,
        }
    }

    #[test]
    fn only_is_emitted_when_not_inherited() {
        let mut rv = range_var("foo");
        rv.inh = false;
        assert_eq!(render_range_var(&rv, &DCTX), r#"ONLY "foo""#);
    }

    #[test]
    fn schema_qualified_with_alias() {
        let mut rv = range_var("bar");
        rv.schemaname = Some("s".to_string());
        rv.alias = Some(Alias {
            aliasname: "b".to_string(),
            colnames: vec![],
        });
        assert_eq!(render_range_var(&rv, &DCTX), r#""s"."bar" "b""#);
    }

    #[test]
    fn inner_join_with_no_quals_becomes_cross_join() {
        let j = ast::JoinExpr {
            jointype: join_type::INNER,
            is_natural: false,
            larg: Box::new(Node::RangeVar(Box::new(range_var("a")))),
            rarg: Box::new(Node::RangeVar(Box::new(range_var("b")))),
            using_clause: None,
            quals: None,
            alias: None,
        };
        assert_eq!(render_join_expr(&j, &DCTX).unwrap(), r#""a" CROSS JOIN "b""#);
    }

    #[test]
    fn left_join_renders_on_clause() {
        let quals = Node::ColumnRef(Box::new(crate::ast::ColumnRef {
            fields: vec![Node::String(crate::ast::StringNode {
                sval: "true".to_string(),
            })],
            location: 0,
        }));
        let j = ast::JoinExpr {
            jointype: join_type::LEFT,
            is_natural: false,
            larg: Box::new(Node::RangeVar(Box::new(range_var("a")))),
            rarg: Box::new(Node::RangeVar(Box::new(range_var("b")))),
            using_clause: None,
            quals: Some(Box::new(quals)),
            alias: None,
        };
        assert_eq!(
            render_join_expr(&j, &DCTX).unwrap(),
            r#""a" LEFT JOIN "b" ON "true""#
        );
    }
}
