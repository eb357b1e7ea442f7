//! Top-level statement payloads.

use super::Node;
use serde::{Deserialize, Serialize};

/// `SelectStmt.op` discriminators.
pub mod set_op {
    pub const NONE: i32 = 0;
    pub const UNION: i32 = 1;
    pub const INTERSECT: i32 = 2;
    pub const EXCEPT: i32 = 3;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectStmt {
    #[serde(default)]
    pub distinct_clause: Vec<Node>,
    pub into_clause: Option<Box<super::IntoClause>>,
    #[serde(default)]
    pub target_list: Vec<Node>,
    #[serde(default)]
    pub from_clause: Vec<Node>,
    pub where_clause: Option<Box<Node>>,
    #[serde(default)]
    pub group_clause: Vec<Node>,
    #[serde(default)]
    pub group_distinct: bool,
    pub having_clause: Option<Box<Node>>,
    #[serde(default)]
    pub window_clause: Vec<Node>,
    #[serde(default)]
    pub values_lists: Vec<Node>,
    #[serde(default)]
    pub sort_clause: Vec<Node>,
    pub limit_offset: Option<Box<Node>>,
    pub limit_count: Option<Box<Node>>,
    #[serde(default)]
    pub limit_option: i32,
    #[serde(default)]
    pub locking_clause: Vec<Node>,
    pub with_clause: Option<Box<super::WithClause>>,
    #[serde(default)]
    pub op: i32,
    #[serde(default)]
    pub all: bool,
    pub larg: Option<Box<Node>>,
    pub rarg: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertStmt {
    pub relation: Box<super::RangeVar>,
    #[serde(default)]
    pub cols: Vec<Node>,
    pub select_stmt: Option<Box<Node>>,
    pub on_conflict_clause: Option<Box<super::OnConflictClause>>,
    #[serde(default)]
    pub returning_list: Vec<Node>,
    pub with_clause: Option<Box<super::WithClause>>,
    #[serde(default)]
    pub r#override: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateStmt {
    pub relation: Box<super::RangeVar>,
    #[serde(default)]
    pub target_list: Vec<Node>,
    pub where_clause: Option<Box<Node>>,
    #[serde(default)]
    pub from_clause: Vec<Node>,
    #[serde(default)]
    pub returning_list: Vec<Node>,
    pub with_clause: Option<Box<super::WithClause>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteStmt {
    pub relation: Box<super::RangeVar>,
    #[serde(default)]
    pub using_clause: Vec<Node>,
    pub where_clause: Option<Box<Node>>,
    #[serde(default)]
    pub returning_list: Vec<Node>,
    pub with_clause: Option<Box<super::WithClause>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopyStmt {
    pub relation: Option<Box<super::RangeVar>>,
    #[serde(default)]
    pub attlist: Vec<Node>,
    pub query: Option<Box<Node>>,
    #[serde(default)]
    pub is_from: bool,
    #[serde(default)]
    pub is_program: bool,
    pub filename: Option<String>,
    #[serde(default)]
    pub options: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplainStmt {
    pub query: Box<Node>,
    #[serde(default)]
    pub options: Vec<Node>,
}

/// `TransactionStmt.kind` discriminators (`TransactionStmtKind`).
pub mod transaction_kind {
    pub const BEGIN: i32 = 0;
    pub const START: i32 = 1;
    pub const COMMIT: i32 = 2;
    pub const ROLLBACK: i32 = 3;
    pub const SAVEPOINT: i32 = 4;
    pub const RELEASE: i32 = 5;
    pub const ROLLBACK_TO: i32 = 6;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionStmt {
    #[serde(default)]
    pub kind: i32,
    #[serde(default)]
    pub options: Vec<Node>,
    pub savepoint_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VacuumRelation {
    pub relation: Box<super::RangeVar>,
    #[serde(default)]
    pub va_cols: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VacuumStmt {
    #[serde(default)]
    pub options: Vec<Node>,
    #[serde(default)]
    pub rels: Vec<Node>,
    #[serde(default)]
    pub is_vacuumcmd: bool,
}
