//! `SelectStmt`, `ResTarget`, `WITH`, `ORDER BY`, window, and locking rendering.

use super::{deparse, DeparseCtx};
use crate::ast::{self, stmt::set_op, Node};
use crate::context::Context;
use crate::error::DeparseError;

pub(super) fn render_res_target(
    rt: &ast::ResTarget,
    propagated: Option<Context>,
    ctx: &DeparseCtx,
) -> Result<String, DeparseError> {
    let val = match &rt.val {
        Some(v) => deparse(v, propagated, ctx)?,
        None => String::new(),
    };

    match propagated {
        Some(Context::Select) => {
            let mut out = val;
            if let Some(name) = &rt.name {
                out.push_str(" AS ");
                out.push_str(&crate::ident::quote_identifier(name, ctx.escape_always));
            }
            Ok(out)
        }
        Some(Context::Update) | Some(Context::Excluded) => {
            let name = rt.name.as_deref().unwrap_or_default();
            let name = crate::ident::quote_identifier(name, ctx.escape_always);
            Ok(format!("{name} = {val}"))
        }
        other => Err(DeparseError::unsupported_restarget_context(format!(
            "{other:?}"
        ))),
    }
}

pub(super) fn render_sort_by(sb: &ast::SortBy, ctx: &DeparseCtx) -> Result<String, DeparseError> {
    use crate::ast::clause::{null_ordering, sort_dir};

    let mut out = deparse(&sb.node, None, ctx)?;
    match sb.sortby_dir {
        d if d == sort_dir::ASC => out.push_str(" ASC"),
        d if d == sort_dir::DESC => out.push_str(" DESC"),
        d if d == sort_dir::USING => {
            let op: Result<Vec<String>, DeparseError> = sb
                .use_op
                .iter()
                .map(|n| deparse(n, Some(Context::Operator), ctx))
                .collect();
            out.push_str(&format!(" USING {}", op?.join(".")));
        }
        _ => {}
    }
    match sb.sortby_nulls {
        n if n == null_ordering::FIRST => out.push_str(" NULLS FIRST"),
        n if n == null_ordering::LAST => out.push_str(" NULLS LAST"),
        _ => {}
    }
    Ok(out)
}

pub(super) fn render_window_def(w: &ast::WindowDef, ctx: &DeparseCtx) -> Result<String, DeparseError> {
    let mut parts = Vec::new();
    if let Some(refname) = &w.refname {
        parts.push(crate::ident::quote_identifier(refname, ctx.escape_always));
    }
    if !w.partition_clause.is_empty() {
        let rendered: Result<Vec<String>, DeparseError> = w
            .partition_clause
            .iter()
            .map(|n| deparse(n, None, ctx))
            .collect();
        parts.push(format!("PARTITION BY {}", rendered?.join(", ")));
    }
    if !w.order_clause.is_empty() {
        let rendered: Result<Vec<String>, DeparseError> =
            w.order_clause.iter().map(|n| render_order_item(n, ctx)).collect();
        parts.push(format!("ORDER BY {}", rendered?.join(", ")));
    }
    let inner = parts.join(" ");
    let rendered = format!("({inner})");
    if let Some(name) = &w.name {
        Ok(format!(
            "{} AS {}",
            crate::ident::quote_identifier(name, ctx.escape_always),
            rendered
        ))
    } else {
        Ok(rendered)
    }
}

fn render_order_item(node: &Node, ctx: &DeparseCtx) -> Result<String, DeparseError> {
    match node {
        Node::SortBy(sb) => render_sort_by(sb, ctx),
        other => deparse(other, None, ctx),
    }
}

pub(super) fn render_locking_clause(
    lc: &ast::LockingClause,
    ctx: &DeparseCtx,
) -> Result<String, DeparseError> {
    use crate::ast::range::lock_strength;

    let keyword = match lc.strength {
        s if s == lock_strength::FOR_UPDATE => "FOR UPDATE",
        s if s == lock_strength::FOR_NO_KEY_UPDATE => "FOR NO KEY UPDATE",
        s if s == lock_strength::FOR_SHARE => "FOR SHARE",
        _ => "FOR KEY SHARE",
    };
    let mut out = keyword.to_string();
    if !lc.locked_rels.is_empty() {
        let rendered: Result<Vec<String>, DeparseError> = lc
            .locked_rels
            .iter()
            .map(|n| deparse(n, None, ctx))
            .collect();
        out.push_str(&format!(" OF {}", rendered?.join(", ")));
    }
    Ok(out)
}

pub(super) fn render_with_clause(w: &ast::WithClause, ctx: &DeparseCtx) -> Result<String, DeparseError> {
    let rendered: Result<Vec<String>, DeparseError> = w
        .ctes
        .iter()
        .map(|n| match n {
            Node::CommonTableExpr(cte) => render_cte(cte, ctx),
            other => deparse(other, None, ctx),
        })
        .collect();
    let recursive = if w.recursive { "RECURSIVE " } else { "" };
    Ok(format!("WITH {recursive}{}", rendered?.join(", ")))
}

fn render_cte(cte: &ast::CommonTableExpr, ctx: &DeparseCtx) -> Result<String, DeparseError> {
    let name = crate::ident::quote_identifier(&cte.ctename, ctx.escape_always);
    let query = deparse(&cte.ctequery, None, ctx)?;
    if cte.aliascolnames.is_empty() {
        Ok(format!("{name} AS ({query})"))
    } else {
        let cols: Vec<String> = cte
            .aliascolnames
            .iter()
            .filter_map(Node::as_str_node)
            .map(|c| crate::ident::quote_identifier(c, ctx.escape_always))
            .collect();
        Ok(format!("{name}({}) AS ({query})", cols.join(", ")))
    }
}

pub(super) fn render_select_stmt(
    s: &ast::SelectStmt,
    ctx: &DeparseCtx,
) -> Result<String, DeparseError> {
    let mut output: Vec<String> = Vec::new();

    if let Some(with) = &s.with_clause {
        output.push(render_with_clause(with, ctx)?);
    }

    if s.op != set_op::NONE {
        let larg = deparse(s.larg.as_deref().expect("set op has larg"), None, ctx)?;
        let larg = if has_own_order(s.larg.as_deref()) {
            format!("({larg})")
        } else {
            larg
        };
        let rarg = deparse(s.rarg.as_deref().expect("set op has rarg"), None, ctx)?;
        let rarg = if has_own_order(s.rarg.as_deref()) {
            format!("({rarg})")
        } else {
            rarg
        };
        let keyword = match s.op {
            op if op == set_op::UNION => "UNION",
            op if op == set_op::INTERSECT => "INTERSECT",
            _ => "EXCEPT",
        };
        let all = if s.all { " ALL" } else { "" };
        output.push(format!("{larg} {keyword}{all} {rarg}"));
        return Ok(output.join(" "));
    }

    let mut select_line = "SELECT".to_string();
    if !s.distinct_clause.is_empty() {
        if matches!(s.distinct_clause.first(), Some(Node::Null(_))) {
            select_line.push_str(" DISTINCT");
        } else {
            let rendered: Result<Vec<String>, DeparseError> = s
                .distinct_clause
                .iter()
                .map(|n| deparse(n, None, ctx))
                .collect();
            select_line.push_str(&format!(" DISTINCT ON ({})", rendered?.join(", ")));
        }
    }
    let targets: Result<Vec<String>, DeparseError> = s
        .target_list
        .iter()
        .map(|n| deparse(n, Some(Context::Select), ctx))
        .collect();
    select_line.push(' ');
    select_line.push_str(&targets?.join(", "));
    output.push(select_line);

    if let Some(into) = &s.into_clause {
        output.push(format!("INTO {}", super::ddl::render_into_clause(into, ctx)?));
    }

    if !s.from_clause.is_empty() {
        let rendered: Result<Vec<String>, DeparseError> = s
            .from_clause
            .iter()
            .map(|n| deparse(n, None, ctx))
            .collect();
        output.push(format!("FROM {}", rendered?.join(", ")));
    }

    if let Some(w) = &s.where_clause {
        output.push(format!("WHERE {}", deparse(w, None, ctx)?));
    }

    if !s.values_lists.is_empty() {
        let rows: Result<Vec<String>, DeparseError> = s
            .values_lists
            .iter()
            .map(|row| {
                let items: Result<Vec<String>, DeparseError> = Node::flatten(row)
                    .into_iter()
                    .map(|n| deparse(n, None, ctx))
                    .collect();
                Ok(format!("({})", items?.join(", ")))
            })
            .collect();
        output.push(format!("VALUES {}", rows?.join(", ")));
    }

    if !s.group_clause.is_empty() {
        let rendered: Result<Vec<String>, DeparseError> = s
            .group_clause
            .iter()
            .map(|n| deparse(n, None, ctx))
            .collect();
        output.push(format!("GROUP BY {}", rendered?.join(", ")));
    }

    if let Some(h) = &s.having_clause {
        output.push(format!("HAVING {}", deparse(h, None, ctx)?));
    }

    if !s.sort_clause.is_empty() {
        let rendered: Result<Vec<String>, DeparseError> = s
            .sort_clause
            .iter()
            .map(|n| render_order_item(n, ctx))
            .collect();
        output.push(format!("ORDER BY {}", rendered?.join(", ")));
    }

    if let Some(limit) = &s.limit_count {
        output.push(format!("LIMIT {}", deparse(limit, None, ctx)?));
    }
    if let Some(offset) = &s.limit_offset {
        output.push(format!("OFFSET {}", deparse(offset, None, ctx)?));
    }

    if !s.locking_clause.is_empty() {
        let rendered: Result<Vec<String>, DeparseError> = s
            .locking_clause
            .iter()
            .map(|n| match n {
                Node::LockingClause(lc) => render_locking_clause(lc, ctx),
                other => deparse(other, None, ctx),
            })
            .collect();
        output.push(rendered?.join(" "));
    }

    Ok(output.join(" "))
}

fn has_own_order(node: Option<&Node>) -> bool {
    matches!(node, Some(Node::SelectStmt(s)) if !s.sort_clause.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{ColumnRef, RangeVar, ResTarget, StringNode};

    const DCTX: DeparseCtx = DeparseCtx {
        escape_always: false,
    };

    fn ident(name: &str) -> Node {
        Node::ColumnRef(Box::new(ColumnRef {
            fields: vec![Node::String(StringNode {
                sval: name.to_string(),
            })],
            location: 0,
        }))
    }

    fn target(name: &str) -> Node {
        Node::ResTarget(Box::new(ResTarget {
            name: None,
            indirection: vec![],
            val: Some(Box::new(ident(name))),
            location: 0,
        }))
    }

    fn range_var(relname: &str) -> Node {
        Node::RangeVar(Box::new(RangeVar {
            schemaname: None,
            relname: relname.to_string(),
            inh: true,
            relpersistence: None,
            alias: None,
            location: 0,
        }))
    }

    fn bare_select(targets: Vec<Node>, from: Vec<Node>) -> ast::SelectStmt {
        ast::SelectStmt {
            distinct_clause: vec![],
            into_clause: None,
            target_list: targets,
            from_clause: from,
            where_clause: None,
            group_clause: vec![],
            group_distinct: false,
            having_clause: None,
            window_clause: vec![],
            values_lists: vec![],
            sort_clause: vec![],
            limit_offset: None,
            limit_count: None,
            limit_option: 0,
            locking_clause: vec![],
            with_clause: None,
            op: 0,
            all: false,
            larg: None,
            rarg: None,
        }
    }

    #[test]
    fn with_clause_wraps_cte_in_select() {
        let cte = ast::CommonTableExpr {
            ctename: "recent".to_string(),
            aliascolnames: vec![],
            ctequery: Box::new(Node::SelectStmt(Box::new(bare_select(
                vec![target("a")],
                vec![range_var("foo")],
            )))),
            location: 0,
        };
        let mut select = bare_select(vec![target("a")], vec![range_var("recent")]);
        select.with_clause = Some(Box::new(ast::WithClause {
            ctes: vec![Node::CommonTableExpr(Box::new(cte))],
            recursive: false,
            location: 0,
        }));
        let out = render_select_stmt(&select, &DCTX).unwrap();
        assert_eq!(
            out,
            r#"WITH "recent" AS (SELECT "a" FROM "foo") SELECT "a" FROM "recent""#
        );
    }

    #[test]
    fn order_by_desc_nulls_last() {
        use crate::ast::clause::{null_ordering, sort_dir};

        let mut select = bare_select(vec![target("a")], vec![range_var("foo")]);
        select.sort_clause = vec![Node::SortBy(Box::new(ast::SortBy {
            node: Box::new(ident("a")),
            sortby_dir: sort_dir::DESC,
            sortby_nulls: null_ordering::LAST,
            use_op: vec![],
            location: 0,
        }))];
        let out = render_select_stmt(&select, &DCTX).unwrap();
        assert_eq!(
            out,
            r#"SELECT "a" FROM "foo" ORDER BY "a" DESC NULLS LAST"#
        );
    }

    #[test]
    fn union_all_joins_both_sides_without_leaf_clauses() {
        let mut select = bare_select(vec![], vec![]);
        select.op = set_op::UNION;
        select.all = true;
        select.larg = Some(Box::new(Node::SelectStmt(Box::new(bare_select(
            vec![target("a")],
            vec![range_var("foo")],
        )))));
        select.rarg = Some(Box::new(Node::SelectStmt(Box::new(bare_select(
            vec![target("a")],
            vec![range_var("bar")],
        )))));
        let out = render_select_stmt(&select, &DCTX).unwrap();
        assert_eq!(
            out,
            r#"SELECT "a" FROM "foo" UNION ALL SELECT "a" FROM "bar""#
        );
    }
}
