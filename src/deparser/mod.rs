//! Deparser: renders AST nodes back into SQL text.
//!
//! The public entry points are [`deparse_statements`] and [`deparse_node`].
//! Everything else is a `render_*` function in one of the submodules, called
//! from the central [`deparse`] dispatcher.

mod ddl;
mod expr;
mod range;
mod select;
mod stmt;
mod util;

use crate::ast::{self, Node};
use crate::context::Context;
use crate::error::DeparseError;

/// Knobs threaded through every renderer. Currently just the identifier
/// quoting policy; a struct (rather than a second parallel `bool` parameter
/// next to `Option<Context>`) leaves room to grow without touching every
/// `render_*` signature again.
#[derive(Debug, Clone, Copy)]
pub struct DeparseCtx {
    pub escape_always: bool,
}

/// Renders a full parse result (one or more statements) back into SQL text,
/// joined with `"; "`.
pub fn deparse_statements(stmts: &[ast::RawStmt], escape_always: bool) -> Result<String, DeparseError> {
    let ctx = DeparseCtx { escape_always };
    let rendered: Result<Vec<String>, DeparseError> = stmts
        .iter()
        .map(|raw| deparse(&raw.stmt, None, &ctx))
        .collect();
    Ok(rendered?.join("; "))
}

/// Renders a single node back into SQL text under an optional leaf-rendering
/// [`Context`].
pub fn deparse_node(
    node: &Node,
    ctx: Option<Context>,
    escape_always: bool,
) -> Result<String, DeparseError> {
    deparse(node, ctx, &DeparseCtx { escape_always })
}

pub(crate) fn deparse(
    node: &Node,
    ctx: Option<Context>,
    dctx: &DeparseCtx,
) -> Result<String, DeparseError> {
    match node {
        Node::Integer(i) => Ok(i.ival.to_string()),
        Node::Float(f) => Ok(f.fval.clone()),
        Node::Boolean(b) => Ok(if b.boolval { "true" } else { "false" }.to_string()),
        Node::Null(_) => Ok("NULL".to_string()),
        Node::SetToDefault(_) => Ok("DEFAULT".to_string()),
        Node::AStar(_) => Ok("*".to_string()),
        Node::List(items) => {
            let rendered: Result<Vec<String>, DeparseError> =
                items.iter().map(|n| deparse(n, ctx, dctx)).collect();
            Ok(rendered?.join(", "))
        }
        Node::String(s) => Ok(render_string_leaf(&s.sval, ctx, dctx)),

        Node::RawStmt(raw) => deparse(&raw.stmt, ctx, dctx),
        Node::SelectStmt(s) => select::render_select_stmt(s, dctx),
        Node::InsertStmt(i) => stmt::render_insert_stmt(i, dctx),
        Node::UpdateStmt(u) => stmt::render_update_stmt(u, dctx),
        Node::DeleteStmt(d) => stmt::render_delete_stmt(d, dctx),
        Node::CopyStmt(c) => stmt::render_copy_stmt(c, dctx),
        Node::ExplainStmt(e) => stmt::render_explain_stmt(e, dctx),
        Node::TransactionStmt(t) => stmt::render_transaction_stmt(t, dctx),
        Node::VacuumStmt(v) => stmt::render_vacuum_stmt(v, dctx),

        Node::CreateStmt(c) => ddl::render_create_stmt(c, dctx),
        Node::AlterTableStmt(a) => ddl::render_alter_table_stmt(a, dctx),
        Node::AlterTableCmd(c) => ddl::render_alter_table_cmd(c, dctx),
        Node::IndexStmt(i) => ddl::render_index_stmt(i, dctx),
        Node::CreateTrigStmt(t) => ddl::render_create_trig_stmt(t, dctx),
        Node::RuleStmt(r) => ddl::render_rule_stmt(r, dctx),
        Node::ViewStmt(v) => ddl::render_view_stmt(v, dctx),
        Node::CreateTableAsStmt(c) => ddl::render_create_table_as_stmt(c, dctx),
        Node::RefreshMatViewStmt(r) => ddl::render_refresh_mat_view_stmt(r, dctx),
        Node::TruncateStmt(t) => ddl::render_truncate_stmt(t, dctx),
        Node::LockStmt(l) => ddl::render_lock_stmt(l, dctx),
        Node::GrantStmt(g) => ddl::render_grant_stmt(g, dctx),
        Node::DropStmt(d) => ddl::render_drop_stmt(d, dctx),
        Node::ColumnDef(c) => ddl::render_column_def(c, dctx),
        Node::Constraint(c) => ddl::render_constraint(c, dctx),
        Node::OnConflictClause(o) => ddl::render_on_conflict_clause(o, dctx),
        Node::InferClause(i) => ddl::render_infer_clause(i, dctx),
        Node::IntoClause(i) => ddl::render_into_clause(i, dctx),

        Node::AExpr(a) => expr::render_a_expr(a, dctx, ctx),
        Node::ColumnRef(c) => expr::render_column_ref(c, ctx, dctx),
        Node::ParamRef(p) => Ok(format!("${}", p.number)),
        Node::AConst(a) => render_a_const(a, dctx),
        Node::TypeCast(t) => expr::render_type_cast(t, dctx),
        Node::CollateClause(c) => expr::render_collate_clause(c, dctx),
        Node::FuncCall(f) => expr::render_func_call(f, dctx),
        Node::AIndices(a) => expr::render_a_indices(a, dctx),
        Node::AIndirection(a) => expr::render_a_indirection(a, dctx),
        Node::AArrayExpr(a) => expr::render_a_array_expr(a, dctx),
        Node::SubLink(s) => expr::render_sub_link(s, dctx),
        Node::BoolExpr(b) => expr::render_bool_expr(b, dctx, ctx),
        Node::NullTest(n) => expr::render_null_test(n, dctx),
        Node::BooleanTest(b) => expr::render_boolean_test(b, dctx),
        Node::CaseExpr(c) => expr::render_case_expr(c, dctx),
        Node::CaseWhen(c) => {
            let expr = deparse(&c.expr, None, dctx)?;
            let result = deparse(&c.result, None, dctx)?;
            Ok(format!("WHEN {expr} THEN {result}"))
        }
        Node::CoalesceExpr(c) => expr::render_coalesce_expr(c, dctx),
        Node::MinMaxExpr(m) => expr::render_min_max_expr(m, dctx),
        Node::RowExpr(r) => expr::render_row_expr(r, dctx),
        Node::GroupingSet(g) => expr::render_grouping_set(g, dctx),

        Node::ResTarget(rt) => select::render_res_target(rt, ctx, dctx),
        Node::RangeVar(rv) => Ok(range::render_range_var(rv, dctx)),
        Node::RangeSubselect(rs) => range::render_range_subselect(rs, dctx),
        Node::RangeFunction(rf) => range::render_range_function(rf, dctx),
        Node::JoinExpr(j) => range::render_join_expr(j, dctx),
        Node::LockingClause(l) => select::render_locking_clause(l, dctx),

        Node::SortBy(sb) => select::render_sort_by(sb, dctx),
        Node::WindowDef(w) => select::render_window_def(w, dctx),
        Node::WithClause(w) => select::render_with_clause(w, dctx),
        Node::CommonTableExpr(cte) => {
            let name = crate::ident::quote_identifier(&cte.ctename, dctx.escape_always);
            let query = deparse(&cte.ctequery, None, dctx)?;
            Ok(format!("{name} AS ({query})"))
        }
        Node::TypeName(t) => crate::typename::render_type_name(t, dctx.escape_always),
        Node::RoleSpec(r) => Ok(render_role_spec(r, dctx)),
        Node::VacuumRelation(v) => Ok(range::render_range_var(&v.relation, dctx)),

        Node::Unknown { kind, raw } => Err(DeparseError::unsupported_node(kind.clone(), raw.clone())),
    }
}

fn render_string_leaf(sval: &str, ctx: Option<Context>, dctx: &DeparseCtx) -> String {
    match ctx {
        Some(Context::AConst) => util::quote_literal(sval),
        Some(Context::FuncCall) | Some(Context::TypeName) | Some(Context::Operator) | Some(Context::DefnameAs) => {
            sval.to_string()
        }
        Some(Context::Excluded) if sval.eq_ignore_ascii_case("excluded") => "EXCLUDED".to_string(),
        _ => crate::ident::quote_identifier(sval, dctx.escape_always),
    }
}

fn render_a_const(a: &ast::AConst, dctx: &DeparseCtx) -> Result<String, DeparseError> {
    if a.isnull {
        return Ok("NULL".to_string());
    }
    match &a.val {
        Some(v) => deparse(v, Some(Context::AConst), dctx),
        None => Ok("NULL".to_string()),
    }
}

fn render_role_spec(r: &ast::RoleSpec, dctx: &DeparseCtx) -> String {
    match r.roletype {
        1 => "CURRENT_USER".to_string(),
        2 => "SESSION_USER".to_string(),
        3 => "PUBLIC".to_string(),
        _ => r
            .rolename
            .as_deref()
            .map(|n| crate::ident::quote_identifier(n, dctx.escape_always))
            .unwrap_or_default(),
    }
}
