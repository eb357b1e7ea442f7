//! DDL statement, constraint, and `ON CONFLICT` rendering.

use super::{deparse, DeparseCtx};
use crate::ast::{self, constr_type, Node};
use crate::context::Context;
use crate::error::DeparseError;

pub(super) fn render_into_clause(
    into: &ast::IntoClause,
    ctx: &DeparseCtx,
) -> Result<String, DeparseError> {
    let mut out = super::range::render_range_var(&into.rel, ctx);
    use crate::ast::range::on_commit;
    match into.on_commit {
        c if c == on_commit::DELETE_ROWS => out.push_str(" ON COMMIT DELETE ROWS"),
        c if c == on_commit::DROP => out.push_str(" ON COMMIT DROP"),
        _ => {}
    }
    Ok(out)
}

pub(super) fn render_constraint(c: &ast::Constraint, ctx: &DeparseCtx) -> Result<String, DeparseError> {
    let mut out = String::new();
    if let Some(name) = &c.conname {
        out.push_str(&format!(
            "CONSTRAINT {} ",
            crate::ident::quote_identifier(name, ctx.escape_always)
        ));
    }

    let keyword = match c.contype {
        t if t == constr_type::NULL => "NULL",
        t if t == constr_type::NOT_NULL => "NOT NULL",
        t if t == constr_type::DEFAULT => "DEFAULT",
        t if t == constr_type::CHECK => "CHECK",
        t if t == constr_type::PRIMARY => "PRIMARY KEY",
        t if t == constr_type::UNIQUE => "UNIQUE",
        t if t == constr_type::EXCLUSION => "EXCLUSION",
        t if t == constr_type::FOREIGN => "FOREIGN KEY",
        _ => "CHECK",
    };
    out.push_str(keyword);

    if matches!(c.contype, t if t == constr_type::CHECK || t == constr_type::DEFAULT) {
        if let Some(expr) = &c.raw_expr {
            let needs_parens = matches!(expr.as_ref(), Node::BoolExpr(_))
                || matches!(expr.as_ref(), Node::AExpr(a) if a.kind == crate::ast::expr::kind::OP);
            let rendered = deparse(expr, None, ctx)?;
            out.push(' ');
            out.push_str(&if needs_parens {
                format!("({rendered})")
            } else {
                rendered
            });
        }
    }

    if matches!(c.contype, t if t == constr_type::PRIMARY || t == constr_type::UNIQUE) && !c.keys.is_empty()
    {
        let cols: Vec<String> = c
            .keys
            .iter()
            .filter_map(Node::as_str_node)
            .map(|k| crate::ident::quote_identifier(k, ctx.escape_always))
            .collect();
        out.push_str(&format!(" ({})", cols.join(", ")));
    }

    if c.contype == constr_type::FOREIGN {
        if !c.fk_attrs.is_empty() {
            let cols: Vec<String> = c
                .fk_attrs
                .iter()
                .filter_map(Node::as_str_node)
                .map(|k| crate::ident::quote_identifier(k, ctx.escape_always))
                .collect();
            out.push_str(&format!(" ({})", cols.join(", ")));
        }
        if let Some(pktable) = &c.pktable {
            out.push_str(&format!(
                " REFERENCES {}",
                super::range::render_range_var(pktable, ctx)
            ));
            if !c.pk_attrs.is_empty() {
                let cols: Vec<String> = c
                    .pk_attrs
                    .iter()
                    .filter_map(Node::as_str_node)
                    .map(|k| crate::ident::quote_identifier(k, ctx.escape_always))
                    .collect();
                out.push_str(&format!(" ({})", cols.join(", ")));
            }
        }
    }

    Ok(out)
}

pub(super) fn render_column_def(c: &ast::ColumnDef, ctx: &DeparseCtx) -> Result<String, DeparseError> {
    let mut out = crate::ident::quote_identifier(&c.colname, ctx.escape_always);
    if let Some(type_name) = &c.type_name {
        out.push(' ');
        out.push_str(&crate::typename::render_type_name(
            type_name,
            ctx.escape_always,
        )?);
    }
    if let Some(default) = &c.raw_default {
        out.push_str(" DEFAULT ");
        out.push_str(&deparse(default, None, ctx)?);
    }
    for constraint in &c.constraints {
        if let Node::Constraint(con) = constraint {
            out.push(' ');
            out.push_str(&render_constraint(con, ctx)?);
        }
    }
    Ok(out)
}

pub(super) fn render_create_stmt(c: &ast::CreateStmt, ctx: &DeparseCtx) -> Result<String, DeparseError> {
    let relation = super::range::render_range_var(&c.relation, ctx);
    let if_not_exists = if c.if_not_exists { "IF NOT EXISTS " } else { "" };

    let elements: Result<Vec<String>, DeparseError> = c
        .table_elts
        .iter()
        .map(|n| match n {
            Node::ColumnDef(col) => render_column_def(col, ctx),
            Node::Constraint(con) => render_constraint(con, ctx),
            other => deparse(other, None, ctx),
        })
        .collect();

    let mut out = format!(
        "CREATE TABLE {if_not_exists}{relation} ({})",
        elements?.join(", ")
    );

    if !c.inh_relations.is_empty() {
        let rendered: Result<Vec<String>, DeparseError> = c
            .inh_relations
            .iter()
            .map(|n| deparse(n, None, ctx))
            .collect();
        out.push_str(&format!(" INHERITS ({})", rendered?.join(", ")));
    }

    Ok(out)
}

pub(super) fn render_alter_table_cmd(
    cmd: &ast::AlterTableCmd,
    ctx: &DeparseCtx,
) -> Result<String, DeparseError> {
    let keyword = crate::generated::alter_table_subcommand_keyword(cmd.subtype).unwrap_or("");
    let mut out = keyword.to_string();
    if let Some(name) = &cmd.name {
        out.push(' ');
        out.push_str(&crate::ident::quote_identifier(name, ctx.escape_always));
    }
    if let Some(def) = &cmd.def {
        out.push(' ');
        out.push_str(&match def.as_ref() {
            Node::ColumnDef(col) => render_column_def(col, ctx)?,
            Node::Constraint(con) => render_constraint(con, ctx)?,
            other => deparse(other, None, ctx)?,
        });
    }
    Ok(out)
}

pub(super) fn render_alter_table_stmt(
    a: &ast::AlterTableStmt,
    ctx: &DeparseCtx,
) -> Result<String, DeparseError> {
    let relation = super::range::render_range_var(&a.relation, ctx);
    let cmds: Result<Vec<String>, DeparseError> = a
        .cmds
        .iter()
        .map(|n| match n {
            Node::AlterTableCmd(cmd) => render_alter_table_cmd(cmd, ctx),
            other => deparse(other, None, ctx),
        })
        .collect();
    Ok(format!("ALTER TABLE {relation} {}", cmds?.join(", ")))
}

pub(super) fn render_index_stmt(i: &ast::IndexStmt, ctx: &DeparseCtx) -> Result<String, DeparseError> {
    let unique = if i.unique { "UNIQUE " } else { "" };
    let concurrently = if i.concurrent { "CONCURRENTLY " } else { "" };
    let if_not_exists = if i.if_not_exists { "IF NOT EXISTS " } else { "" };
    let name = i
        .idxname
        .as_deref()
        .map(|n| format!("{} ", crate::ident::quote_identifier(n, ctx.escape_always)))
        .unwrap_or_default();
    let relation = super::range::render_range_var(&i.relation, ctx);
    let params: Result<Vec<String>, DeparseError> = i
        .index_params
        .iter()
        .map(|n| deparse(n, None, ctx))
        .collect();
    Ok(format!(
        "CREATE {unique}INDEX {concurrently}{if_not_exists}{name}ON {relation} ({})",
        params?.join(", ")
    ))
}

/// Timing/event bits aren't decoded here (no frozen lookup table for
/// `TRIGGER_TYPE_*` exists in this crate yet); only the trigger name, table,
/// and function call are rendered.
pub(super) fn render_create_trig_stmt(
    t: &ast::CreateTrigStmt,
    ctx: &DeparseCtx,
) -> Result<String, DeparseError> {
    let name = crate::ident::quote_identifier(&t.trigname, ctx.escape_always);
    let relation = super::range::render_range_var(&t.relation, ctx);
    let funcname: Result<Vec<String>, DeparseError> = t
        .funcname
        .iter()
        .map(|n| deparse(n, Some(Context::FuncCall), ctx))
        .collect();
    Ok(format!(
        "CREATE TRIGGER {name} ON {relation} EXECUTE FUNCTION {}()",
        funcname?.join(".")
    ))
}

pub(super) fn render_rule_stmt(r: &ast::RuleStmt, ctx: &DeparseCtx) -> Result<String, DeparseError> {
    let relation = super::range::render_range_var(&r.relation, ctx);
    let name = crate::ident::quote_identifier(&r.rulename, ctx.escape_always);
    let event = match r.event {
        1 => "SELECT",
        2 => "UPDATE",
        3 => "INSERT",
        4 => "DELETE",
        _ => "SELECT",
    };
    let mut out = format!("CREATE RULE {name} AS ON {event} TO {relation}");
    if let Some(w) = &r.where_clause {
        out.push_str(&format!(" WHERE {}", deparse(w, None, ctx)?));
    }
    out.push_str(" DO ");
    if r.instead {
        out.push_str("INSTEAD ");
    }
    if r.actions.is_empty() {
        out.push_str("NOTHING");
    } else {
        let actions: Result<Vec<String>, DeparseError> =
            r.actions.iter().map(|n| deparse(n, None, ctx)).collect();
        out.push_str(&actions?.join("; "));
    }
    Ok(out)
}

pub(super) fn render_view_stmt(v: &ast::ViewStmt, ctx: &DeparseCtx) -> Result<String, DeparseError> {
    let or_replace = if v.replace { "OR REPLACE " } else { "" };
    let mut view = super::range::render_range_var(&v.view, ctx);
    if !v.aliases.is_empty() {
        let cols: Vec<String> = v
            .aliases
            .iter()
            .filter_map(Node::as_str_node)
            .map(|c| crate::ident::quote_identifier(c, ctx.escape_always))
            .collect();
        view.push_str(&format!(" ({})", cols.join(", ")));
    }
    let query = deparse(&v.query, None, ctx)?;
    Ok(format!("CREATE {or_replace}VIEW {view} AS {query}"))
}

pub(super) fn render_create_table_as_stmt(
    c: &ast::CreateTableAsStmt,
    ctx: &DeparseCtx,
) -> Result<String, DeparseError> {
    let if_not_exists = if c.if_not_exists { "IF NOT EXISTS " } else { "" };
    let into = render_into_clause(&c.into, ctx)?;
    let query = deparse(&c.query, None, ctx)?;
    Ok(format!(
        "CREATE TABLE {if_not_exists}{into} AS {query}"
    ))
}

pub(super) fn render_refresh_mat_view_stmt(
    r: &ast::RefreshMatViewStmt,
    ctx: &DeparseCtx,
) -> Result<String, DeparseError> {
    let concurrently = if r.concurrent { "CONCURRENTLY " } else { "" };
    let relation = super::range::render_range_var(&r.relation, ctx);
    let data = if r.skip_data {
        " WITH NO DATA"
    } else {
        ""
    };
    Ok(format!(
        "REFRESH MATERIALIZED VIEW {concurrently}{relation}{data}"
    ))
}

pub(super) fn render_truncate_stmt(
    t: &ast::TruncateStmt,
    ctx: &DeparseCtx,
) -> Result<String, DeparseError> {
    let rendered: Result<Vec<String>, DeparseError> = t
        .relations
        .iter()
        .map(|n| deparse(n, None, ctx))
        .collect();
    let mut out = format!("TRUNCATE TABLE {}", rendered?.join(", "));
    if t.restart_seqs {
        out.push_str(" RESTART IDENTITY");
    }
    Ok(out)
}

pub(super) fn render_lock_stmt(l: &ast::LockStmt, ctx: &DeparseCtx) -> Result<String, DeparseError> {
    let rendered: Result<Vec<String>, DeparseError> = l
        .relations
        .iter()
        .map(|n| deparse(n, None, ctx))
        .collect();
    let nowait = if l.nowait { " NOWAIT" } else { "" };
    Ok(format!("LOCK TABLE {}{nowait}", rendered?.join(", ")))
}

pub(super) fn render_grant_stmt(g: &ast::GrantStmt, ctx: &DeparseCtx) -> Result<String, DeparseError> {
    let verb = if g.is_grant { "GRANT" } else { "REVOKE" };
    let privileges = if g.privileges.is_empty() {
        "ALL".to_string()
    } else {
        let rendered: Result<Vec<String>, DeparseError> = g
            .privileges
            .iter()
            .map(|n| deparse(n, Some(Context::DefnameAs), ctx))
            .collect();
        rendered?.join(", ")
    };
    let objects: Result<Vec<String>, DeparseError> =
        g.objects.iter().map(|n| deparse(n, None, ctx)).collect();
    let grantees: Result<Vec<String>, DeparseError> = g
        .grantees
        .iter()
        .map(|n| deparse(n, None, ctx))
        .collect();
    let to_or_from = if g.is_grant { "TO" } else { "FROM" };
    Ok(format!(
        "{verb} {privileges} ON {} {to_or_from} {}",
        objects?.join(", "),
        grantees?.join(", ")
    ))
}

pub(super) fn render_drop_stmt(d: &ast::DropStmt, ctx: &DeparseCtx) -> Result<String, DeparseError> {
    let keyword = crate::generated::drop_object_keyword(&d.remove_type)
        .ok_or_else(|| DeparseError::unsupported_node("DropStmt.removeType", serde_json::json!(d.remove_type)))?;

    let objects: Result<Vec<String>, DeparseError> = d
        .objects
        .iter()
        .map(|n| {
            let parts: Vec<String> = Node::flatten(n)
                .into_iter()
                .filter_map(Node::as_str_node)
                .map(|s| crate::ident::quote_identifier(s, ctx.escape_always))
                .collect();
            Ok(parts.join("."))
        })
        .collect();

    let if_exists = if d.missing_ok { "IF EXISTS " } else { "" };
    let cascade = match d.behavior {
        1 => " CASCADE",
        _ => "",
    };
    Ok(format!(
        "DROP {keyword} {if_exists}{}{cascade}",
        objects?.join(", ")
    ))
}

pub(super) fn render_infer_clause(i: &ast::InferClause, ctx: &DeparseCtx) -> Result<String, DeparseError> {
    if let Some(conname) = &i.conname {
        return Ok(format!(
            "ON CONSTRAINT {}",
            crate::ident::quote_identifier(conname, ctx.escape_always)
        ));
    }
    let cols: Result<Vec<String>, DeparseError> = i
        .index_elems
        .iter()
        .map(|n| deparse(n, None, ctx))
        .collect();
    let mut out = format!("({})", cols?.join(", "));
    if let Some(w) = &i.where_clause {
        out.push_str(&format!(" WHERE {}", deparse(w, None, ctx)?));
    }
    Ok(out)
}

pub(super) fn render_on_conflict_clause(
    o: &ast::OnConflictClause,
    ctx: &DeparseCtx,
) -> Result<String, DeparseError> {
    use crate::ast::conflict_action;

    let mut out = "ON CONFLICT ".to_string();
    if let Some(infer) = &o.infer {
        out.push_str(&render_infer_clause(infer, ctx)?);
        out.push(' ');
    }

    if o.action == conflict_action::NOTHING {
        out.push_str("DO NOTHING");
        return Ok(out);
    }

    out.push_str("DO UPDATE SET ");
    let set_list: Result<Vec<String>, DeparseError> = o
        .target_list
        .iter()
        .map(|n| deparse(n, Some(Context::Excluded), ctx))
        .collect();
    out.push_str(&set_list?.join(", "));

    if let Some(w) = &o.where_clause {
        out.push_str(&format!(" WHERE {}", deparse(w, None, ctx)?));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::StringNode;

    const DCTX: DeparseCtx = DeparseCtx {
        escape_always: false,
    };

    fn dotted(parts: &[&str]) -> Node {
        Node::List(
            parts
                .iter()
                .map(|p| {
                    Node::String(StringNode {
                        sval: p.to_string(),
                    })
                })
                .collect(),
        )
    }

    /// `DROP TABLE a.b, c`
    #[test]
    fn drop_table_renders_dotted_comma_list() {
        let drop = ast::DropStmt {
            objects: vec![dotted(&["a", "b"]), dotted(&["c"])],
            remove_type: crate::ast::grant_objtype::TABLE.to_string(),
            behavior: 0,
            missing_ok: false,
            concurrent: false,
        };
        let out = render_drop_stmt(&drop, &DCTX).unwrap();
        assert_eq!(out, r#"DROP TABLE "a"."b", "c""#);
    }

    #[test]
    fn drop_table_if_exists_cascade() {
        let drop = ast::DropStmt {
            objects: vec![dotted(&["c"])],
            remove_type: crate::ast::grant_objtype::TABLE.to_string(),
            behavior: 1,
            missing_ok: true,
            concurrent: false,
        };
        let out = render_drop_stmt(&drop, &DCTX).unwrap();
        assert_eq!(out, r#"DROP TABLE IF EXISTS "c" CASCADE"#);
    }
}
