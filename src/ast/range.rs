//! Range (`FROM`-clause) and join node payloads.

use super::Node;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alias {
    pub aliasname: String,
    #[serde(default)]
    pub colnames: Vec<Node>,
}

/// `JoinExpr.jointype` discriminators.
pub mod join_type {
    pub const INNER: i32 = 0;
    pub const LEFT: i32 = 1;
    pub const FULL: i32 = 2;
    pub const RIGHT: i32 = 3;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeVar {
    pub schemaname: Option<String>,
    #[serde(default)]
    pub relname: String,
    #[serde(default = "default_true")]
    pub inh: bool,
    pub relpersistence: Option<String>,
    pub alias: Option<Alias>,
    #[serde(default)]
    pub location: i32,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeSubselect {
    #[serde(default)]
    pub lateral: bool,
    pub subquery: Box<Node>,
    pub alias: Option<Alias>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeFunction {
    #[serde(default)]
    pub lateral: bool,
    #[serde(default)]
    pub ordinality: bool,
    #[serde(default)]
    pub is_rowsfrom: bool,
    /// Each entry is `[func_expr, coldeflist]`; only `functions[0][0]` is
    /// deparsed (see `SPEC_FULL.md` §9 — multi-function `ROWS FROM` entries
    /// are not supported by this renderer).
    #[serde(default)]
    pub functions: Vec<Vec<Node>>,
    pub alias: Option<Alias>,
    #[serde(default)]
    pub coldeflist: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinExpr {
    #[serde(default)]
    pub jointype: i32,
    #[serde(default)]
    pub is_natural: bool,
    pub larg: Box<Node>,
    pub rarg: Box<Node>,
    pub using_clause: Option<Vec<Node>>,
    pub quals: Option<Box<Node>>,
    pub alias: Option<Alias>,
}

/// `IntoClause.on_commit` discriminators.
pub mod on_commit {
    pub const NOOP: i32 = 0;
    pub const DELETE_ROWS: i32 = 2;
    pub const DROP: i32 = 3;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntoClause {
    pub rel: Box<super::RangeVar>,
    #[serde(default)]
    pub col_names: Vec<Node>,
    #[serde(default)]
    pub on_commit: i32,
    pub table_space_name: Option<String>,
}

/// `LockingClause.strength` discriminators (`LockClauseStrength`).
pub mod lock_strength {
    pub const FOR_KEY_SHARE: i32 = 0;
    pub const FOR_SHARE: i32 = 1;
    pub const FOR_NO_KEY_UPDATE: i32 = 2;
    pub const FOR_UPDATE: i32 = 3;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LockingClause {
    #[serde(default)]
    pub strength: i32,
    #[serde(default)]
    pub locked_rels: Vec<Node>,
    #[serde(default)]
    pub wait_policy: i32,
}
