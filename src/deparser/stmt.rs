//! Top-level DML, `COPY`, `EXPLAIN`, `TRANSACTION`, and `VACUUM` rendering.

use super::{deparse, DeparseCtx};
use crate::ast::{self, stmt::transaction_kind, Node};
use crate::context::Context;
use crate::error::DeparseError;

pub(super) fn render_insert_stmt(i: &ast::InsertStmt, ctx: &DeparseCtx) -> Result<String, DeparseError> {
    let relation = super::range::render_range_var(&i.relation, ctx);
    let mut out = String::new();
    if let Some(with) = &i.with_clause {
        out.push_str(&super::select::render_with_clause(with, ctx)?);
        out.push(' ');
    }
    out.push_str(&format!("INSERT INTO {relation}"));

    if !i.cols.is_empty() {
        let cols: Vec<String> = i
            .cols
            .iter()
            .filter_map(|n| match n {
                Node::ResTarget(rt) => rt.name.as_deref(),
                _ => None,
            })
            .map(|c| crate::ident::quote_identifier(c, ctx.escape_always))
            .collect();
        out.push_str(&format!(" ({})", cols.join(", ")));
    }

    match &i.select_stmt {
        Some(select) => {
            out.push(' ');
            out.push_str(&deparse(select, None, ctx)?);
        }
        None => out.push_str(" DEFAULT VALUES"),
    }

    if let Some(onconflict) = &i.on_conflict_clause {
        out.push(' ');
        out.push_str(&super::ddl::render_on_conflict_clause(onconflict, ctx)?);
    }

    if !i.returning_list.is_empty() {
        let rendered: Result<Vec<String>, DeparseError> = i
            .returning_list
            .iter()
            .map(|n| deparse(n, Some(Context::Select), ctx))
            .collect();
        out.push_str(&format!(" RETURNING {}", rendered?.join(", ")));
    }

    Ok(out)
}

pub(super) fn render_update_stmt(u: &ast::UpdateStmt, ctx: &DeparseCtx) -> Result<String, DeparseError> {
    let relation = super::range::render_range_var(&u.relation, ctx);
    let mut out = String::new();
    if let Some(with) = &u.with_clause {
        out.push_str(&super::select::render_with_clause(with, ctx)?);
        out.push(' ');
    }
    out.push_str(&format!("UPDATE {relation} SET "));

    let targets: Result<Vec<String>, DeparseError> = u
        .target_list
        .iter()
        .map(|n| deparse(n, Some(Context::Update), ctx))
        .collect();
    out.push_str(&targets?.join(", "));

    if !u.from_clause.is_empty() {
        let rendered: Result<Vec<String>, DeparseError> = u
            .from_clause
            .iter()
            .map(|n| deparse(n, None, ctx))
            .collect();
        out.push_str(&format!(" FROM {}", rendered?.join(", ")));
    }

    if let Some(w) = &u.where_clause {
        out.push_str(&format!(" WHERE {}", deparse(w, None, ctx)?));
    }

    if !u.returning_list.is_empty() {
        let rendered: Result<Vec<String>, DeparseError> = u
            .returning_list
            .iter()
            .map(|n| deparse(n, Some(Context::Select), ctx))
            .collect();
        out.push_str(&format!(" RETURNING {}", rendered?.join(", ")));
    }

    Ok(out)
}

pub(super) fn render_delete_stmt(d: &ast::DeleteStmt, ctx: &DeparseCtx) -> Result<String, DeparseError> {
    let relation = super::range::render_range_var(&d.relation, ctx);
    let mut out = String::new();
    if let Some(with) = &d.with_clause {
        out.push_str(&super::select::render_with_clause(with, ctx)?);
        out.push(' ');
    }
    out.push_str(&format!("DELETE FROM {relation}"));

    if !d.using_clause.is_empty() {
        let rendered: Result<Vec<String>, DeparseError> = d
            .using_clause
            .iter()
            .map(|n| deparse(n, None, ctx))
            .collect();
        out.push_str(&format!(" USING {}", rendered?.join(", ")));
    }

    if let Some(w) = &d.where_clause {
        out.push_str(&format!(" WHERE {}", deparse(w, None, ctx)?));
    }

    if !d.returning_list.is_empty() {
        let rendered: Result<Vec<String>, DeparseError> = d
            .returning_list
            .iter()
            .map(|n| deparse(n, Some(Context::Select), ctx))
            .collect();
        out.push_str(&format!(" RETURNING {}", rendered?.join(", ")));
    }

    Ok(out)
}

pub(super) fn render_copy_stmt(c: &ast::CopyStmt, ctx: &DeparseCtx) -> Result<String, DeparseError> {
    let mut out = "COPY ".to_string();
    match (&c.relation, &c.query) {
        (Some(relation), _) => out.push_str(&super::range::render_range_var(relation, ctx)),
        (None, Some(query)) => out.push_str(&format!("({})", deparse(query, None, ctx)?)),
        (None, None) => {}
    }

    if !c.attlist.is_empty() {
        let cols: Vec<String> = c
            .attlist
            .iter()
            .filter_map(Node::as_str_node)
            .map(|col| crate::ident::quote_identifier(col, ctx.escape_always))
            .collect();
        out.push_str(&format!(" ({})", cols.join(", ")));
    }

    out.push_str(if c.is_from { " FROM " } else { " TO " });
    out.push_str(if c.is_program { "PROGRAM " } else { "" });
    out.push_str(match &c.filename {
        Some(f) => f,
        None => if c.is_from { "STDIN" } else { "STDOUT" },
    });

    Ok(out)
}

pub(super) fn render_explain_stmt(e: &ast::ExplainStmt, ctx: &DeparseCtx) -> Result<String, DeparseError> {
    let query = deparse(&e.query, None, ctx)?;
    Ok(format!("EXPLAIN {query}"))
}

pub(super) fn render_transaction_stmt(
    t: &ast::TransactionStmt,
    _ctx: &DeparseCtx,
) -> Result<String, DeparseError> {
    let keyword = match t.kind {
        k if k == transaction_kind::BEGIN => "BEGIN",
        k if k == transaction_kind::START => "START TRANSACTION",
        k if k == transaction_kind::COMMIT => "COMMIT",
        k if k == transaction_kind::ROLLBACK => "ROLLBACK",
        k if k == transaction_kind::SAVEPOINT => {
            return Ok(format!(
                "SAVEPOINT {}",
                t.savepoint_name.as_deref().unwrap_or_default()
            ))
        }
        k if k == transaction_kind::RELEASE => {
            return Ok(format!(
                "RELEASE SAVEPOINT {}",
                t.savepoint_name.as_deref().unwrap_or_default()
            ))
        }
        k if k == transaction_kind::ROLLBACK_TO => {
            return Ok(format!(
                "ROLLBACK TO SAVEPOINT {}",
                t.savepoint_name.as_deref().unwrap_or_default()
            ))
        }
        other => return Err(DeparseError::unsupported_transaction_kind(other)),
    };
    Ok(keyword.to_string())
}

pub(super) fn render_vacuum_stmt(v: &ast::VacuumStmt, ctx: &DeparseCtx) -> Result<String, DeparseError> {
    let keyword = if v.is_vacuumcmd { "VACUUM" } else { "ANALYZE" };
    if v.rels.is_empty() {
        return Ok(keyword.to_string());
    }
    let rendered: Result<Vec<String>, DeparseError> = v
        .rels
        .iter()
        .map(|n| match n {
            Node::VacuumRelation(vr) => Ok(super::range::render_range_var(&vr.relation, ctx)),
            other => deparse(other, None, ctx),
        })
        .collect();
    Ok(format!("{keyword} {}", rendered?.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{ColumnRef, OnConflictClause, RangeVar, ResTarget, StringNode};

    const DCTX: DeparseCtx = DeparseCtx {
        escape_always: false,
    };

    fn range_var(relname: &str) -> ast::RangeVar {
        RangeVar {
            schemaname: None,
            relname: relname.to_string(),
            inh: true,
            relpersistence: None,
            alias: None,
            location: 0,
        }
    }

    fn col(name: &str) -> Node {
        Node::ColumnRef(Box::new(ColumnRef {
            fields: vec![Node::String(StringNode {
                sval: name.to_string(),
            })],
            location: 0,
        }))
    }

    fn qualified_col(qualifier: &str, name: &str) -> Node {
        Node::ColumnRef(Box::new(ColumnRef {
            fields: vec![
                Node::String(StringNode {
                    sval: qualifier.to_string(),
                }),
                Node::String(StringNode {
                    sval: name.to_string(),
                }),
            ],
            location: 0,
        }))
    }

    fn col_target(name: &str) -> Node {
        Node::ResTarget(Box::new(ResTarget {
            name: Some(name.to_string()),
            indirection: vec![],
            val: Some(Box::new(col(name))),
            location: 0,
        }))
    }

    /// `INSERT INTO t(a) VALUES (1) ON CONFLICT (a) DO UPDATE SET a = excluded.a`
    #[test]
    fn insert_on_conflict_do_update_renders_excluded_uppercased() {
        let insert = ast::InsertStmt {
            relation: Box::new(range_var("t")),
            cols: vec![col_target("a")],
            select_stmt: Some(Box::new(Node::List(vec![]))),
            on_conflict_clause: Some(Box::new(OnConflictClause {
                action: crate::ast::conflict_action::UPDATE,
                infer: Some(Box::new(crate::ast::InferClause {
                    index_elems: vec![col("a")],
                    where_clause: None,
                    conname: None,
                })),
                target_list: vec![Node::ResTarget(Box::new(ResTarget {
                    name: Some("a".to_string()),
                    indirection: vec![],
                    val: Some(Box::new(qualified_col("excluded", "a"))),
                    location: 0,
                }))],
                where_clause: None,
                location: 0,
            })),
            returning_list: vec![],
            with_clause: None,
            r#override: 0,
        };
        let out = render_insert_stmt(&insert, &DCTX).unwrap();
        assert!(out.starts_with(r#"INSERT INTO "t" ("a")"#), "got: {out}");
        assert!(
            out.ends_with(r#"ON CONFLICT ("a") DO UPDATE SET "a" = EXCLUDED."a""#),
            "got: {out}"
        );
    }

    #[test]
    fn transaction_begin_renders_bare_keyword() {
        let t = ast::TransactionStmt {
            kind: transaction_kind::BEGIN,
            options: vec![],
            savepoint_name: None,
        };
        assert_eq!(render_transaction_stmt(&t, &DCTX).unwrap(), "BEGIN");
    }

    #[test]
    fn transaction_unknown_kind_errors() {
        let t = ast::TransactionStmt {
            kind: 999,
            options: vec![],
            savepoint_name: None,
        };
        assert!(render_transaction_stmt(&t, &DCTX).is_err());
    }
}
