use pgast_core::ast::{ColumnRef, Node, RangeVar, RawStmt, ResTarget, SelectStmt, StringNode};
use pgast_core::extract_references;
use proptest::prelude::*;
use std::collections::HashSet;

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

fn select_from(relnames: &[String]) -> RawStmt {
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
            from_clause: relnames.iter().map(|n| range_var(n)).collect(),
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

proptest! {
    /// Termination: extraction over any finite `FROM` list always produces a
    /// result, regardless of how many names repeat.
    #[test]
    fn extraction_terminates_for_any_from_list(names in prop::collection::vec("[a-c]", 0..8)) {
        let stmt = select_from(&names);
        let _ = extract_references(&[stmt]);
    }

    /// Dedup: repeated identical `FROM` entries collapse to one tuple in
    /// `tables`, matching the unique-name count (`IndexSet` semantics).
    #[test]
    fn tables_has_no_duplicate_tuples(names in prop::collection::vec("[a-c]", 1..8)) {
        let stmt = select_from(&names);
        let result = extract_references(&[stmt]);

        let unique: HashSet<&String> = names.iter().collect();
        prop_assert_eq!(result.tables.len(), unique.len());

        let mut seen = HashSet::new();
        for r in &result.tables {
            prop_assert!(seen.insert((r.name.clone(), r.r#type)));
        }
    }

    /// Every alias key names a table that is either in `tables` or shadowed
    /// by a CTE of the same name.
    #[test]
    fn alias_targets_are_real_tables_or_cte_shadowed(names in prop::collection::vec("[a-c]", 0..8)) {
        let stmt = select_from(&names);
        let result = extract_references(&[stmt]);
        let table_names: HashSet<&str> = result.tables.iter().map(|r| r.name.as_str()).collect();
        for alias_target in result.aliases.values() {
            prop_assert!(
                table_names.contains(alias_target.as_str())
                    || result.cte_names.contains(alias_target.as_str())
            );
        }
    }
}
