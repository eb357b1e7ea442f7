//! Expression-node rendering.

use super::util::parenthesize;
use super::{deparse, DeparseCtx};
use crate::ast::{self, expr::kind as aexpr_kind, expr::sub_link_type, Node};
use crate::context::Context;
use crate::error::DeparseError;

fn operator_name(name: &[Node], ctx: &DeparseCtx) -> Result<String, DeparseError> {
    let pieces: Result<Vec<String>, DeparseError> = name
        .iter()
        .map(|n| deparse(n, Some(Context::Operator), ctx))
        .collect();
    Ok(pieces?.join("."))
}

pub(super) fn render_a_expr(
    a: &ast::AExpr,
    ctx: &DeparseCtx,
    propagated: Option<Context>,
) -> Result<String, DeparseError> {
    let op = operator_name(&a.name, ctx)?;
    let inner_ctx = Some(Context::Precedence);

    let rendered = match a.kind {
        aexpr_kind::OP | aexpr_kind::DISTINCT | aexpr_kind::NOT_DISTINCT => {
            let lhs = match &a.lexpr {
                Some(l) => deparse(l, inner_ctx, ctx)?,
                None => String::new(),
            };
            let rhs = match &a.rexpr {
                Some(r) => deparse(r, inner_ctx, ctx)?,
                None => String::new(),
            };
            let op_text = match a.kind {
                aexpr_kind::DISTINCT => "IS DISTINCT FROM".to_string(),
                aexpr_kind::NOT_DISTINCT => "IS NOT DISTINCT FROM".to_string(),
                _ => op,
            };
            if lhs.is_empty() {
                format!("{op_text} {rhs}")
            } else {
                format!("{lhs} {op_text} {rhs}")
            }
        }
        aexpr_kind::OP_ANY => {
            let lhs = deparse(a.lexpr.as_deref().expect("ANY has lhs"), inner_ctx, ctx)?;
            let rhs = deparse(a.rexpr.as_deref().expect("ANY has rhs"), inner_ctx, ctx)?;
            format!("{lhs} {op} ANY({rhs})")
        }
        aexpr_kind::OP_ALL => {
            let lhs = deparse(a.lexpr.as_deref().expect("ALL has lhs"), inner_ctx, ctx)?;
            let rhs = deparse(a.rexpr.as_deref().expect("ALL has rhs"), inner_ctx, ctx)?;
            format!("{lhs} {op} ALL({rhs})")
        }
        aexpr_kind::NULLIF => {
            let lhs = deparse(a.lexpr.as_deref().expect("NULLIF has lhs"), inner_ctx, ctx)?;
            let rhs = deparse(a.rexpr.as_deref().expect("NULLIF has rhs"), inner_ctx, ctx)?;
            format!("NULLIF({lhs}, {rhs})")
        }
        aexpr_kind::IN => {
            let lhs = deparse(a.lexpr.as_deref().expect("IN has lhs"), inner_ctx, ctx)?;
            let items = render_flattened_list(a.rexpr.as_deref(), inner_ctx, ctx)?;
            let keyword = if op == "<>" { "NOT IN" } else { "IN" };
            format!("{lhs} {keyword} ({items})")
        }
        aexpr_kind::LIKE => {
            let lhs = deparse(a.lexpr.as_deref().expect("LIKE has lhs"), inner_ctx, ctx)?;
            let rhs = deparse(a.rexpr.as_deref().expect("LIKE has rhs"), inner_ctx, ctx)?;
            let keyword = if op == "!~~" { "NOT LIKE" } else { "LIKE" };
            format!("{lhs} {keyword} {rhs}")
        }
        aexpr_kind::ILIKE => {
            let lhs = deparse(a.lexpr.as_deref().expect("ILIKE has lhs"), inner_ctx, ctx)?;
            let rhs = deparse(a.rexpr.as_deref().expect("ILIKE has rhs"), inner_ctx, ctx)?;
            let keyword = if op == "!~~*" { "NOT ILIKE" } else { "ILIKE" };
            format!("{lhs} {keyword} {rhs}")
        }
        aexpr_kind::SIMILAR => {
            let lhs = deparse(a.lexpr.as_deref().expect("SIMILAR has lhs"), inner_ctx, ctx)?;
            let rhs = deparse(a.rexpr.as_deref().expect("SIMILAR has rhs"), inner_ctx, ctx)?;
            format!("{lhs} SIMILAR TO {rhs}")
        }
        aexpr_kind::BETWEEN | aexpr_kind::BETWEEN_SYM => {
            let lhs = deparse(a.lexpr.as_deref().expect("BETWEEN has lhs"), inner_ctx, ctx)?;
            let (lo, hi) = render_between_bounds(a.rexpr.as_deref(), inner_ctx, ctx)?;
            let symmetric = if a.kind == aexpr_kind::BETWEEN_SYM {
                " SYMMETRIC"
            } else {
                ""
            };
            format!("{lhs} BETWEEN{symmetric} {lo} AND {hi}")
        }
        aexpr_kind::NOT_BETWEEN | aexpr_kind::NOT_BETWEEN_SYM => {
            let lhs = deparse(a.lexpr.as_deref().expect("NOT BETWEEN has lhs"), inner_ctx, ctx)?;
            let (lo, hi) = render_between_bounds(a.rexpr.as_deref(), inner_ctx, ctx)?;
            let symmetric = if a.kind == aexpr_kind::NOT_BETWEEN_SYM {
                " SYMMETRIC"
            } else {
                ""
            };
            format!("{lhs} NOT BETWEEN{symmetric} {lo} AND {hi}")
        }
        other => return Err(DeparseError::unsupported_a_expr_kind(other)),
    };

    if propagated.is_some() {
        Ok(parenthesize(rendered))
    } else {
        Ok(rendered)
    }
}

fn render_between_bounds(
    rexpr: Option<&Node>,
    inner_ctx: Option<Context>,
    ctx: &DeparseCtx,
) -> Result<(String, String), DeparseError> {
    let items = rexpr.map(Node::flatten).unwrap_or_default();
    let lo = match items.first() {
        Some(n) => deparse(n, inner_ctx, ctx)?,
        None => String::new(),
    };
    let hi = match items.get(1) {
        Some(n) => deparse(n, inner_ctx, ctx)?,
        None => String::new(),
    };
    Ok((lo, hi))
}

fn render_flattened_list(
    node: Option<&Node>,
    inner_ctx: Option<Context>,
    ctx: &DeparseCtx,
) -> Result<String, DeparseError> {
    let Some(node) = node else {
        return Ok(String::new());
    };
    let rendered: Result<Vec<String>, DeparseError> = Node::flatten(node)
        .into_iter()
        .map(|n| deparse(n, inner_ctx, ctx))
        .collect();
    Ok(rendered?.join(", "))
}

pub(super) fn render_bool_expr(
    b: &ast::BoolExpr,
    ctx: &DeparseCtx,
    propagated: Option<Context>,
) -> Result<String, DeparseError> {
    const AND: i32 = 0;
    const OR: i32 = 1;
    const NOT: i32 = 2;

    // A_Expr (comparison/arithmetic) operands never need wrapping directly
    // under AND/OR/NOT — those bind loosest of all, so no precedence
    // ambiguity exists at this boundary. Passing a truthy context here would
    // make render_a_expr self-parenthesize unconditionally (its rule for
    // genuine A_Expr-in-A_Expr nesting), which over-parenthesizes the exact
    // case this spec's example walks through (`a = 1 AND (b = 2 OR c = 3)`).
    let child_ctx = |arg: &Node| {
        if matches!(arg, Node::AExpr(_)) {
            None
        } else {
            Some(Context::Precedence)
        }
    };

    if b.boolop == NOT {
        let arg = b.args.first().expect("NOT has exactly one arg");
        let rendered = deparse(arg, child_ctx(arg), ctx)?;
        return Ok(format!("NOT {rendered}"));
    }

    let joiner = if b.boolop == AND { " AND " } else { " OR " };
    let mut parts = Vec::with_capacity(b.args.len());
    for arg in &b.args {
        let mut rendered = deparse(arg, child_ctx(arg), ctx)?;
        let needs_parens = match arg {
            Node::BoolExpr(child) => {
                if b.boolop == AND {
                    child.boolop == OR
                } else {
                    child.boolop == AND || child.boolop == OR
                }
            }
            _ => false,
        };
        if needs_parens && !(rendered.starts_with('(') && rendered.ends_with(')')) {
            rendered = parenthesize(rendered);
        }
        parts.push(rendered);
    }
    let rendered = parts.join(joiner);
    if propagated.is_some() {
        Ok(parenthesize(rendered))
    } else {
        Ok(rendered)
    }
}

pub(super) fn render_func_call(f: &ast::FuncCall, ctx: &DeparseCtx) -> Result<String, DeparseError> {
    let names: Vec<&str> = f.funcname.iter().filter_map(Node::as_str_node).collect();
    if names == ["pg_catalog", "overlay"] && f.args.len() == 4 {
        let a = deparse(&f.args[0], None, ctx)?;
        let b = deparse(&f.args[1], None, ctx)?;
        let c = deparse(&f.args[2], None, ctx)?;
        let d = deparse(&f.args[3], None, ctx)?;
        return Ok(format!("OVERLAY({a} PLACING {b} FROM {c} FOR {d})"));
    }

    let name = names
        .iter()
        .map(|n| crate::ident::quote_identifier(n, ctx.escape_always))
        .collect::<Vec<_>>()
        .join(".");

    let args = if f.agg_star {
        "*".to_string()
    } else {
        let rendered: Result<Vec<String>, DeparseError> = f
            .args
            .iter()
            .map(|a| deparse(a, Some(Context::FuncCall), ctx))
            .collect();
        let distinct = if f.agg_distinct { "DISTINCT " } else { "" };
        format!("{distinct}{}", rendered?.join(", "))
    };

    let mut rendered = format!("{name}({args})");

    if let Some(filter) = &f.agg_filter {
        let cond = deparse(filter, None, ctx)?;
        rendered.push_str(&format!(" FILTER (WHERE {cond})"));
    }
    if let Some(over) = &f.over {
        let window = deparse(over, None, ctx)?;
        rendered.push_str(&format!(" OVER {window}"));
    }

    Ok(rendered)
}

pub(super) fn render_type_cast(tc: &ast::TypeCast, ctx: &DeparseCtx) -> Result<String, DeparseError> {
    let type_text = crate::typename::render_type_name(&tc.type_name, ctx.escape_always)?;
    if type_text == "boolean" {
        if let Node::AConst(aconst) = tc.arg.as_ref() {
            if let Some(Node::String(s)) = aconst.val.as_deref() {
                match s.sval.as_str() {
                    "t" => return Ok("true".to_string()),
                    "f" => return Ok("false".to_string()),
                    _ => {}
                }
            }
        }
    }
    let arg = deparse(&tc.arg, Some(Context::Precedence), ctx)?;
    Ok(format!("{arg}::{type_text}"))
}

pub(super) fn render_null_test(n: &ast::NullTest, ctx: &DeparseCtx) -> Result<String, DeparseError> {
    let arg = deparse(&n.arg, Some(Context::Precedence), ctx)?;
    if n.nulltesttype == 0 {
        Ok(format!("{arg} IS NULL"))
    } else {
        Ok(format!("{arg} IS NOT NULL"))
    }
}

pub(super) fn render_boolean_test(b: &ast::BooleanTest, ctx: &DeparseCtx) -> Result<String, DeparseError> {
    let arg = deparse(&b.arg, Some(Context::Precedence), ctx)?;
    let suffix = match b.booltesttype {
        0 => "IS TRUE",
        1 => "IS NOT TRUE",
        2 => "IS FALSE",
        3 => "IS NOT FALSE",
        4 => "IS UNKNOWN",
        5 => "IS NOT UNKNOWN",
        _ => "IS UNKNOWN",
    };
    Ok(format!("{arg} {suffix}"))
}

pub(super) fn render_case_expr(c: &ast::CaseExpr, ctx: &DeparseCtx) -> Result<String, DeparseError> {
    let mut out = "CASE".to_string();
    if let Some(arg) = &c.arg {
        out.push(' ');
        out.push_str(&deparse(arg, None, ctx)?);
    }
    for when in &c.args {
        if let Node::CaseWhen(cw) = when {
            out.push_str(" WHEN ");
            out.push_str(&deparse(&cw.expr, None, ctx)?);
            out.push_str(" THEN ");
            out.push_str(&deparse(&cw.result, None, ctx)?);
        }
    }
    if let Some(def) = &c.defresult {
        out.push_str(" ELSE ");
        out.push_str(&deparse(def, None, ctx)?);
    }
    out.push_str(" END");
    Ok(out)
}

pub(super) fn render_coalesce_expr(c: &ast::CoalesceExpr, ctx: &DeparseCtx) -> Result<String, DeparseError> {
    let rendered: Result<Vec<String>, DeparseError> =
        c.args.iter().map(|a| deparse(a, None, ctx)).collect();
    Ok(format!("COALESCE({})", rendered?.join(", ")))
}

pub(super) fn render_min_max_expr(m: &ast::MinMaxExpr, ctx: &DeparseCtx) -> Result<String, DeparseError> {
    let name = if m.op == 0 { "GREATEST" } else { "LEAST" };
    let rendered: Result<Vec<String>, DeparseError> =
        m.args.iter().map(|a| deparse(a, None, ctx)).collect();
    Ok(format!("{name}({})", rendered?.join(", ")))
}

pub(super) fn render_row_expr(r: &ast::RowExpr, ctx: &DeparseCtx) -> Result<String, DeparseError> {
    let rendered: Result<Vec<String>, DeparseError> =
        r.args.iter().map(|a| deparse(a, None, ctx)).collect();
    Ok(format!("ROW({})", rendered?.join(", ")))
}

pub(super) fn render_sub_link(s: &ast::SubLink, ctx: &DeparseCtx) -> Result<String, DeparseError> {
    let subselect = deparse(&s.subselect, None, ctx)?;
    match s.sub_link_type {
        sub_link_type::EXISTS => Ok(format!("EXISTS ({subselect})")),
        sub_link_type::ANY => {
            let testexpr = match &s.testexpr {
                Some(t) => deparse(t, Some(Context::Precedence), ctx)?,
                None => String::new(),
            };
            Ok(format!("{testexpr} IN ({subselect})"))
        }
        sub_link_type::ALL => {
            let testexpr = match &s.testexpr {
                Some(t) => deparse(t, Some(Context::Precedence), ctx)?,
                None => String::new(),
            };
            let op = operator_name(&s.oper_name, ctx)?;
            Ok(format!("{testexpr} {op} ALL ({subselect})"))
        }
        sub_link_type::ARRAY => Ok(format!("ARRAY({subselect})")),
        _ => Ok(parenthesize(subselect)),
    }
}

pub(super) fn render_column_ref(
    c: &ast::ColumnRef,
    propagated: Option<Context>,
    ctx: &DeparseCtx,
) -> Result<String, DeparseError> {
    // The EXCLUDED-recognition context is load-bearing on every field of a
    // qualified column reference (`excluded.a`), not just the whole node.
    let field_ctx = match propagated {
        Some(Context::Excluded) => Some(Context::Excluded),
        _ => None,
    };
    let rendered: Result<Vec<String>, DeparseError> = c
        .fields
        .iter()
        .map(|f| deparse(f, field_ctx, ctx))
        .collect();
    Ok(rendered?.join("."))
}

pub(super) fn render_a_indices(a: &ast::AIndices, ctx: &DeparseCtx) -> Result<String, DeparseError> {
    if a.is_slice {
        let lo = match &a.lidx {
            Some(n) => deparse(n, None, ctx)?,
            None => String::new(),
        };
        let hi = match &a.uidx {
            Some(n) => deparse(n, None, ctx)?,
            None => String::new(),
        };
        Ok(format!("[{lo}:{hi}]"))
    } else {
        let idx = match &a.uidx {
            Some(n) => deparse(n, None, ctx)?,
            None => String::new(),
        };
        Ok(format!("[{idx}]"))
    }
}

pub(super) fn render_a_indirection(a: &ast::AIndirection, ctx: &DeparseCtx) -> Result<String, DeparseError> {
    let mut out = deparse(&a.arg, Some(Context::Precedence), ctx)?;
    for item in &a.indirection {
        match item {
            Node::AStar(_) => out.push_str(".*"),
            Node::String(s) => {
                out.push('.');
                out.push_str(&crate::ident::quote_identifier(&s.sval, ctx.escape_always));
            }
            Node::AIndices(idx) => out.push_str(&render_a_indices(idx, ctx)?),
            other => out.push_str(&deparse(other, None, ctx)?),
        }
    }
    Ok(out)
}

pub(super) fn render_a_array_expr(a: &ast::AArrayExpr, ctx: &DeparseCtx) -> Result<String, DeparseError> {
    let rendered: Result<Vec<String>, DeparseError> =
        a.elements.iter().map(|e| deparse(e, None, ctx)).collect();
    Ok(format!("ARRAY[{}]", rendered?.join(", ")))
}

pub(super) fn render_collate_clause(c: &ast::CollateClause, ctx: &DeparseCtx) -> Result<String, DeparseError> {
    let arg = deparse(&c.arg, None, ctx)?;
    let collname: Result<Vec<String>, DeparseError> = c
        .collname
        .iter()
        .map(|n| deparse(n, Some(Context::TypeName), ctx))
        .collect();
    Ok(format!("{arg} COLLATE {}", collname?.join(".")))
}

pub(super) fn render_grouping_set(g: &ast::GroupingSet, ctx: &DeparseCtx) -> Result<String, DeparseError> {
    let rendered: Result<Vec<String>, DeparseError> =
        g.content.iter().map(|c| deparse(c, None, ctx)).collect();
    let inner = rendered?.join(", ");
    match g.kind {
        0 => Ok("()".to_string()),
        1 => Ok(format!("ROLLUP ({inner})")),
        2 => Ok(format!("CUBE ({inner})")),
        _ => Ok(format!("GROUPING SETS ({inner})")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{AConst, ColumnRef, StringNode};

    const DCTX: DeparseCtx = DeparseCtx {
        escape_always: false,
    };

    fn col(name: &str) -> Node {
        Node::ColumnRef(Box::new(ColumnRef {
            fields: vec![Node::String(StringNode {
                sval: name.to_string(),
            })],
            location: 0,
        }))
    }

    fn int_literal(v: i64) -> Node {
        Node::AConst(Box::new(AConst {
            val: Some(Box::new(Node::Integer(crate::ast::IntegerNode { ival: v }))),
            isnull: false,
            location: 0,
        }))
    }

    fn eq(lexpr: Node, rexpr: Node) -> Node {
        Node::AExpr(Box::new(ast::AExpr {
            kind: aexpr_kind::OP,
            name: vec![Node::String(StringNode {
                sval: "=".to_string(),
            })],
            lexpr: Some(Box::new(lexpr)),
            rexpr: Some(Box::new(rexpr)),
            location: 0,
        }))
    }

    fn bool_expr(boolop: i32, args: Vec<Node>) -> Node {
        Node::BoolExpr(Box::new(ast::BoolExpr {
            boolop,
            args,
            location: 0,
        }))
    }

    #[test]
    fn a_expr_renders_with_quoted_operands() {
        let node = eq(col("a"), int_literal(1));
        assert_eq!(deparse(&node, None, &DCTX).unwrap(), r#""a" = 1"#);
    }

    #[test]
    fn or_nested_under_and_is_parenthesized() {
        // `a = 1 AND (b = 2 OR c = 3)` — the OR must stay parenthesized so
        // precedence survives the round trip.
        const OR: i32 = 1;
        const AND: i32 = 0;
        let or_node = bool_expr(OR, vec![eq(col("b"), int_literal(2)), eq(col("c"), int_literal(3))]);
        let and_node = bool_expr(AND, vec![eq(col("a"), int_literal(1)), or_node]);
        let rendered = deparse(&and_node, None, &DCTX).unwrap();
        assert_eq!(rendered, r#""a" = 1 AND ("b" = 2 OR "c" = 3)"#);
    }

    #[test]
    fn and_nested_under_or_is_parenthesized() {
        const OR: i32 = 1;
        const AND: i32 = 0;
        let and_node = bool_expr(AND, vec![eq(col("a"), int_literal(1)), eq(col("b"), int_literal(2))]);
        let or_node = bool_expr(OR, vec![and_node, eq(col("c"), int_literal(3))]);
        let rendered = deparse(&or_node, None, &DCTX).unwrap();
        assert_eq!(rendered, r#"("a" = 1 AND "b" = 2) OR "c" = 3"#);
    }

    #[test]
    fn not_prepends_keyword_without_parens() {
        let not_node = bool_expr(2, vec![eq(col("a"), int_literal(1))]);
        assert_eq!(deparse(&not_node, None, &DCTX).unwrap(), r#"NOT "a" = 1"#);
    }

    #[test]
    fn in_list_renders_flattened_values() {
        let node = Node::AExpr(Box::new(ast::AExpr {
            kind: aexpr_kind::IN,
            name: vec![Node::String(StringNode { sval: "=".to_string() })],
            lexpr: Some(Box::new(col("a"))),
            rexpr: Some(Box::new(Node::List(vec![int_literal(1), int_literal(2)]))),
            location: 0,
        }));
        assert_eq!(deparse(&node, None, &DCTX).unwrap(), r#""a" IN (1, 2)"#);
    }

    #[test]
    fn not_in_list_renders_negated_keyword() {
        let node = Node::AExpr(Box::new(ast::AExpr {
            kind: aexpr_kind::IN,
            name: vec![Node::String(StringNode {
                sval: "<>".to_string(),
            })],
            lexpr: Some(Box::new(col("a"))),
            rexpr: Some(Box::new(Node::List(vec![int_literal(1), int_literal(2)]))),
            location: 0,
        }));
        assert_eq!(deparse(&node, None, &DCTX).unwrap(), r#""a" NOT IN (1, 2)"#);
    }

    fn like(lhs: Node, rhs: Node, op_name: &str) -> Node {
        Node::AExpr(Box::new(ast::AExpr {
            kind: aexpr_kind::LIKE,
            name: vec![Node::String(StringNode {
                sval: op_name.to_string(),
            })],
            lexpr: Some(Box::new(lhs)),
            rexpr: Some(Box::new(rhs)),
            location: 0,
        }))
    }

    #[test]
    fn like_renders_plain_keyword() {
        let node = like(col("a"), int_literal(1), "~~");
        assert_eq!(deparse(&node, None, &DCTX).unwrap(), r#""a" LIKE 1"#);
    }

    #[test]
    fn not_like_renders_negated_keyword() {
        let node = like(col("a"), int_literal(1), "!~~");
        assert_eq!(deparse(&node, None, &DCTX).unwrap(), r#""a" NOT LIKE 1"#);
    }

    #[test]
    fn not_ilike_renders_negated_keyword() {
        let node = Node::AExpr(Box::new(ast::AExpr {
            kind: aexpr_kind::ILIKE,
            name: vec![Node::String(StringNode {
                sval: "!~~*".to_string(),
            })],
            lexpr: Some(Box::new(col("a"))),
            rexpr: Some(Box::new(int_literal(1))),
            location: 0,
        }));
        assert_eq!(deparse(&node, None, &DCTX).unwrap(), r#""a" NOT ILIKE 1"#);
    }
}
