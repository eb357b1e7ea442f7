//! Reference extraction: the two-queue fixed-point walk that reports every
//! table a statement touches, classified by how it is used.

mod reference;

pub use reference::{Reference, ReferenceType};

use crate::ast::{
    AlterTableStmt, CommonTableExpr, CopyStmt, CreateStmt, CreateTableAsStmt, CreateTrigStmt,
    DeleteStmt, DropStmt, ExplainStmt, GrantStmt, IndexStmt, InsertStmt, JoinExpr, LockStmt, Node,
    RangeSubselect, RangeVar, RawStmt, RefreshMatViewStmt, RowExpr, RuleStmt, SelectStmt,
    TruncateStmt, UpdateStmt, VacuumStmt, ViewStmt, WithClause,
};
use indexmap::IndexSet;
use std::collections::{HashMap, VecDeque};

/// The result of extracting references from a sequence of statements.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, schemars::JsonSchema)]
pub struct ExtractResult {
    pub tables: IndexSet<Reference>,
    pub aliases: HashMap<String, String>,
    pub cte_names: IndexSet<String>,
}

/// A `FROM`-clause candidate with its pending reference classification. Kept
/// separate from `Node` so a statement's `RangeVar` (not wrapped in a `Node`)
/// can be queued without cloning it into one.
enum FromItem<'a> {
    Node(&'a Node),
    RangeVar(&'a RangeVar),
}

struct State<'a> {
    tables: IndexSet<Reference>,
    aliases: HashMap<String, String>,
    cte_names: IndexSet<String>,
    statements: VecDeque<&'a Node>,
    subselect_items: VecDeque<&'a Node>,
    from_clause_items: VecDeque<(FromItem<'a>, ReferenceType)>,
}

/// Extracts `{tables, aliases, cte_names}` from a parsed statement sequence.
///
/// Pure and total: unknown node kinds and missing optional fields are
/// silently skipped rather than erroring (see `SPEC_FULL.md` §4.1).
pub fn extract_references(stmts: &[RawStmt]) -> ExtractResult {
    let mut state = State {
        tables: IndexSet::new(),
        aliases: HashMap::new(),
        cte_names: IndexSet::new(),
        statements: VecDeque::new(),
        subselect_items: VecDeque::new(),
        from_clause_items: VecDeque::new(),
    };

    for stmt in stmts {
        state.statements.push_back(&stmt.stmt);
    }

    loop {
        let mut progressed = false;
        if let Some(stmt) = state.statements.pop_front() {
            progressed = true;
            dispatch_statement(stmt, &mut state);
        }
        if let Some(expr) = state.subselect_items.pop_front() {
            progressed = true;
            dispatch_subselect(expr, &mut state);
        }
        if !progressed {
            break;
        }
    }

    drain_from_clause_items(&mut state);

    ExtractResult {
        tables: state.tables,
        aliases: state.aliases,
        cte_names: state.cte_names,
    }
}

fn expand_with_clause<'a>(with: &'a WithClause, state: &mut State<'a>) {
    for cte_node in &with.ctes {
        if let Node::CommonTableExpr(cte) = cte_node {
            let cte: &'a CommonTableExpr = cte;
            state.cte_names.insert(cte.ctename.clone());
            state.statements.push_back(&cte.ctequery);
        }
    }
}

fn dispatch_statement<'a>(node: &'a Node, state: &mut State<'a>) {
    match node {
        Node::RawStmt(raw) => {
            let raw: &'a RawStmt = raw;
            state.statements.push_back(&raw.stmt);
        }

        Node::SelectStmt(select) => {
            let select: &'a SelectStmt = select;
            if select.op == crate::ast::set_op::NONE {
                for from_item in &select.from_clause {
                    if let Node::RangeSubselect(rs) = from_item {
                        let rs: &'a RangeSubselect = rs;
                        state.statements.push_back(&rs.subquery);
                    } else {
                        state
                            .from_clause_items
                            .push_back((FromItem::Node(from_item), ReferenceType::Select));
                    }
                }
                if let Some(with) = &select.with_clause {
                    expand_with_clause(with, state);
                }
            } else {
                if let Some(larg) = &select.larg {
                    state.statements.push_back(larg);
                }
                if let Some(rarg) = &select.rarg {
                    state.statements.push_back(rarg);
                }
            }
            harvest(&select.target_list, state);
            if let Some(w) = &select.where_clause {
                state.subselect_items.push_back(w);
            }
            harvest_sort_clause(&select.sort_clause, state);
            harvest(&select.group_clause, state);
            if let Some(h) = &select.having_clause {
                state.subselect_items.push_back(h);
            }
        }

        Node::InsertStmt(insert) => {
            let insert: &'a InsertStmt = insert;
            state
                .from_clause_items
                .push_back((FromItem::RangeVar(&insert.relation), ReferenceType::Dml));
            if let Some(select_stmt) = &insert.select_stmt {
                state.statements.push_back(select_stmt);
            }
            if let Some(with) = &insert.with_clause {
                expand_with_clause(with, state);
            }
        }

        Node::UpdateStmt(update) => {
            let update: &'a UpdateStmt = update;
            state
                .from_clause_items
                .push_back((FromItem::RangeVar(&update.relation), ReferenceType::Dml));
            if let Some(with) = &update.with_clause {
                expand_with_clause(with, state);
            }
            harvest(&update.target_list, state);
            if let Some(w) = &update.where_clause {
                state.subselect_items.push_back(w);
            }
        }

        Node::DeleteStmt(delete) => {
            let delete: &'a DeleteStmt = delete;
            state
                .from_clause_items
                .push_back((FromItem::RangeVar(&delete.relation), ReferenceType::Dml));
            if let Some(with) = &delete.with_clause {
                expand_with_clause(with, state);
            }
            if let Some(w) = &delete.where_clause {
                state.subselect_items.push_back(w);
            }
        }

        Node::CopyStmt(copy) => {
            let copy: &'a CopyStmt = copy;
            if let Some(relation) = &copy.relation {
                state
                    .from_clause_items
                    .push_back((FromItem::RangeVar(relation), ReferenceType::Dml));
            }
            if let Some(query) = &copy.query {
                state.statements.push_back(query);
            }
        }

        Node::AlterTableStmt(alter) => {
            let alter: &'a AlterTableStmt = alter;
            state
                .from_clause_items
                .push_back((FromItem::RangeVar(&alter.relation), ReferenceType::Ddl));
        }
        Node::CreateStmt(create) => {
            let create: &'a CreateStmt = create;
            state
                .from_clause_items
                .push_back((FromItem::RangeVar(&create.relation), ReferenceType::Ddl));
        }
        Node::IndexStmt(index) => {
            let index: &'a IndexStmt = index;
            state
                .from_clause_items
                .push_back((FromItem::RangeVar(&index.relation), ReferenceType::Ddl));
        }
        Node::CreateTrigStmt(trig) => {
            let trig: &'a CreateTrigStmt = trig;
            state
                .from_clause_items
                .push_back((FromItem::RangeVar(&trig.relation), ReferenceType::Ddl));
        }
        Node::RuleStmt(rule) => {
            let rule: &'a RuleStmt = rule;
            state
                .from_clause_items
                .push_back((FromItem::RangeVar(&rule.relation), ReferenceType::Ddl));
        }
        Node::RefreshMatViewStmt(refresh) => {
            let refresh: &'a RefreshMatViewStmt = refresh;
            state
                .from_clause_items
                .push_back((FromItem::RangeVar(&refresh.relation), ReferenceType::Ddl));
        }
        Node::ViewStmt(view) => {
            let view: &'a ViewStmt = view;
            state
                .from_clause_items
                .push_back((FromItem::RangeVar(&view.view), ReferenceType::Ddl));
            state.statements.push_back(&view.query);
        }

        Node::CreateTableAsStmt(cta) => {
            let cta: &'a CreateTableAsStmt = cta;
            state
                .from_clause_items
                .push_back((FromItem::RangeVar(&cta.into.rel), ReferenceType::Ddl));
            state.statements.push_back(&cta.query);
        }

        Node::TruncateStmt(truncate) => {
            let truncate: &'a TruncateStmt = truncate;
            for rel in &truncate.relations {
                state
                    .from_clause_items
                    .push_back((FromItem::Node(rel), ReferenceType::Ddl));
            }
        }
        Node::LockStmt(lock) => {
            let lock: &'a LockStmt = lock;
            for rel in &lock.relations {
                state
                    .from_clause_items
                    .push_back((FromItem::Node(rel), ReferenceType::Ddl));
            }
        }

        Node::VacuumStmt(vacuum) => {
            let vacuum: &'a VacuumStmt = vacuum;
            for rel in &vacuum.rels {
                if let Node::VacuumRelation(vr) = rel {
                    state
                        .from_clause_items
                        .push_back((FromItem::RangeVar(&vr.relation), ReferenceType::Ddl));
                }
            }
        }

        Node::GrantStmt(grant) => {
            let grant: &'a GrantStmt = grant;
            if grant.objtype == crate::ast::grant_objtype::TABLE {
                for object in &grant.objects {
                    state
                        .from_clause_items
                        .push_back((FromItem::Node(object), ReferenceType::Ddl));
                }
            }
            // COLUMN and SEQUENCE are elided; see DESIGN.md.
        }

        Node::DropStmt(drop) => {
            let drop: &'a DropStmt = drop;
            dispatch_drop_stmt(drop, state);
        }

        Node::ExplainStmt(explain) => {
            let explain: &'a ExplainStmt = explain;
            state.statements.push_back(&explain.query);
        }

        _ => {}
    }
}

fn dispatch_drop_stmt<'a>(drop: &'a DropStmt, state: &mut State<'a>) {
    use crate::generated::drop_object_keyword;

    let is_table = drop.remove_type == crate::ast::grant_objtype::TABLE;
    let is_rule_or_trigger = matches!(
        drop_object_keyword(&drop.remove_type),
        Some("RULE") | Some("TRIGGER")
    );
    if !is_table && !is_rule_or_trigger {
        return;
    }

    for object in &drop.objects {
        let mut parts: Vec<String> = Node::flatten(object)
            .into_iter()
            .filter_map(Node::as_str_node)
            .map(str::to_string)
            .collect();
        if parts.is_empty() {
            continue;
        }
        if is_rule_or_trigger {
            parts.pop();
        }
        let Some(relname) = parts.last().cloned() else {
            continue;
        };
        let schema = if parts.len() > 1 {
            Some(parts[..parts.len() - 1].join("."))
        } else {
            None
        };
        let name = parts.join(".");
        state.tables.insert(Reference {
            name,
            r#type: ReferenceType::Ddl,
            location: None,
            schema,
            relname,
            inh: None,
        });
    }
}

/// Pushes each item of `list` into `subselect_items` verbatim.
fn harvest<'a>(list: &'a [Node], state: &mut State<'a>) {
    for item in list {
        state.subselect_items.push_back(item);
    }
}

/// `sort_clause` entries are `SortBy` nodes; only their `.node` field can
/// carry a sub-select, so that's what gets queued (see `SPEC_FULL.md` §4.1).
fn harvest_sort_clause<'a>(list: &'a [Node], state: &mut State<'a>) {
    for item in list {
        if let Node::SortBy(sort_by) = item {
            state.subselect_items.push_back(&sort_by.node);
        }
    }
}

fn dispatch_subselect<'a>(node: &'a Node, state: &mut State<'a>) {
    match node {
        Node::AExpr(a_expr) => {
            if let Some(lexpr) = &a_expr.lexpr {
                for item in Node::flatten(lexpr) {
                    state.subselect_items.push_back(item);
                }
            }
            if let Some(rexpr) = &a_expr.rexpr {
                for item in Node::flatten(rexpr) {
                    state.subselect_items.push_back(item);
                }
            }
        }
        Node::BoolExpr(bool_expr) => {
            for arg in &bool_expr.args {
                state.subselect_items.push_back(arg);
            }
        }
        Node::ResTarget(res_target) => {
            if let Some(val) = &res_target.val {
                state.subselect_items.push_back(val);
            }
        }
        Node::SubLink(sub_link) => {
            state.statements.push_back(&sub_link.subselect);
        }
        _ => {}
    }
}

fn drain_from_clause_items(state: &mut State<'_>) {
    while let Some((item, ref_type)) = state.from_clause_items.pop_front() {
        match item {
            FromItem::RangeVar(rv) => handle_range_var(rv, ref_type, state),
            FromItem::Node(node) => match node {
                Node::JoinExpr(j) => {
                    let j: &JoinExpr = j;
                    state
                        .from_clause_items
                        .push_back((FromItem::Node(&j.larg), ref_type));
                    state
                        .from_clause_items
                        .push_back((FromItem::Node(&j.rarg), ref_type));
                }
                Node::RowExpr(r) => {
                    let r: &RowExpr = r;
                    for arg in &r.args {
                        state
                            .from_clause_items
                            .push_back((FromItem::Node(arg), ref_type));
                    }
                }
                Node::RangeSubselect(rs) => {
                    state
                        .from_clause_items
                        .push_back((FromItem::Node(&rs.subquery), ref_type));
                }
                Node::SelectStmt(s) => {
                    for entry in &s.from_clause {
                        state
                            .from_clause_items
                            .push_back((FromItem::Node(entry), ref_type));
                    }
                }
                Node::RangeVar(rv) => handle_range_var(rv, ref_type, state),
                _ => {}
            },
        }
    }
}

fn handle_range_var(rv: &RangeVar, ref_type: ReferenceType, state: &mut State<'_>) {
    if rv.schemaname.is_none() && state.cte_names.contains(&rv.relname) {
        return;
    }

    let name = match &rv.schemaname {
        Some(schema) => format!("{schema}.{}", rv.relname),
        None => rv.relname.clone(),
    };

    state.tables.insert(Reference {
        name: name.clone(),
        r#type: ref_type,
        location: Some(rv.location),
        schema: rv.schemaname.clone(),
        relname: rv.relname.clone(),
        inh: Some(rv.inh),
    });

    if let Some(alias) = &rv.alias {
        state.aliases.insert(alias.aliasname.clone(), name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Alias, ColumnRef, ResTarget, StringNode};

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

    fn select_a_from(relname: &str) -> RawStmt {
        let target = Node::ResTarget(Box::new(ResTarget {
            name: None,
            indirection: vec![],
            val: Some(Box::new(Node::ColumnRef(Box::new(ColumnRef {
                fields: vec![Node::String(StringNode {
                    sval: "a".to_string(),
                })],
                location: 0,
            })))),
            location: 0,
        }));
        RawStmt {
            stmt: Node::SelectStmt(Box::new(SelectStmt {
                distinct_clause: vec![],
                into_clause: None,
                target_list: vec![target],
                from_clause: vec![range_var(relname)],
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
            })),
            stmt_location: 0,
            stmt_len: 0,
        }
    }

    #[test]
    fn select_a_from_foo_extracts_one_select_reference() {
        let stmts = vec![select_a_from("foo")];
        let result = extract_references(&stmts);
        assert_eq!(result.tables.len(), 1);
        let r = &result.tables[0];
        assert_eq!(r.name, "foo");
        assert_eq!(r.r#type, ReferenceType::Select);
        assert!(result.aliases.is_empty());
        assert!(result.cte_names.is_empty());
    }

    #[test]
    fn cte_reference_is_not_emitted_as_table() {
        let mut stmt = select_a_from("c");
        let Node::SelectStmt(select) = &mut stmt.stmt else {
            unreachable!()
        };
        select.with_clause = Some(Box::new(WithClause {
            ctes: vec![Node::CommonTableExpr(Box::new(CommonTableExpr {
                ctename: "c".to_string(),
                aliascolnames: vec![],
                ctequery: Box::new(select_a_from("bar").stmt),
                location: 0,
            }))],
            recursive: false,
            location: 0,
        }));

        let result = extract_references(&[stmt]);
        assert!(result.cte_names.contains("c"));
        let names: Vec<&str> = result.tables.iter().map(|r| r.name.as_str()).collect();
        assert!(names.contains(&"bar"));
        assert!(!names.contains(&"c"));
    }

    #[test]
    fn alias_is_recorded_on_range_var() {
        let mut stmt = select_a_from("bar");
        let Node::SelectStmt(select) = &mut stmt.stmt else {
            unreachable!()
        };
        select.from_clause = vec![Node::RangeVar(Box::new(RangeVar {
            schemaname: None,
            relname: "bar".to_string(),
            inh: true,
            relpersistence: None,
            alias: Some(Alias {
                aliasname: "b".to_string(),
                colnames: vec![],
            }),
            location: 0,
        }))];

        let result = extract_references(&[stmt]);
        assert_eq!(result.aliases.get("b"), Some(&"bar".to_string()));
    }

    #[test]
    fn drop_table_dotted_names() {
        let drop = RawStmt {
            stmt: Node::DropStmt(Box::new(DropStmt {
                objects: vec![
                    Node::List(vec![
                        Node::String(StringNode {
                            sval: "a".to_string(),
                        }),
                        Node::String(StringNode {
                            sval: "b".to_string(),
                        }),
                    ]),
                    Node::List(vec![Node::String(StringNode {
                        sval: "c".to_string(),
                    })]),
                ],
                remove_type: crate::ast::grant_objtype::TABLE.to_string(),
                behavior: 0,
                missing_ok: false,
                concurrent: false,
            })),
            stmt_location: 0,
            stmt_len: 0,
        };

        let result = extract_references(&[drop]);
        let names: Vec<&str> = result.tables.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a.b", "c"]);
    }
}
