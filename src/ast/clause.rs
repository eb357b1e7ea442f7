//! `ORDER BY`, window, `WITH`, type-name, and role-spec payloads.

use super::Node;
use serde::{Deserialize, Serialize};

/// `SortBy.sortby_dir` discriminators.
pub mod sort_dir {
    pub const DEFAULT: i32 = 0;
    pub const ASC: i32 = 1;
    pub const DESC: i32 = 2;
    pub const USING: i32 = 3;
}

/// `SortBy.sortby_nulls` discriminators.
pub mod null_ordering {
    pub const DEFAULT: i32 = 0;
    pub const FIRST: i32 = 1;
    pub const LAST: i32 = 2;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortBy {
    pub node: Box<Node>,
    #[serde(default)]
    pub sortby_dir: i32,
    #[serde(default)]
    pub sortby_nulls: i32,
    #[serde(default)]
    pub use_op: Vec<Node>,
    #[serde(default)]
    pub location: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowDef {
    pub name: Option<String>,
    pub refname: Option<String>,
    #[serde(default)]
    pub partition_clause: Vec<Node>,
    #[serde(default)]
    pub order_clause: Vec<Node>,
    #[serde(default)]
    pub frame_options: i32,
    pub start_offset: Option<Box<Node>>,
    pub end_offset: Option<Box<Node>>,
    #[serde(default)]
    pub location: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithClause {
    #[serde(default)]
    pub ctes: Vec<Node>,
    #[serde(default)]
    pub recursive: bool,
    #[serde(default)]
    pub location: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommonTableExpr {
    pub ctename: String,
    #[serde(default)]
    pub aliascolnames: Vec<Node>,
    pub ctequery: Box<Node>,
    #[serde(default)]
    pub location: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeName {
    #[serde(default)]
    pub names: Vec<Node>,
    #[serde(default)]
    pub type_oid: i32,
    #[serde(default)]
    pub setof: bool,
    #[serde(default)]
    pub pct_type: bool,
    #[serde(default)]
    pub typmods: Vec<Node>,
    #[serde(default = "default_typmod")]
    pub typemod: i32,
    #[serde(default)]
    pub array_bounds: Vec<Node>,
    #[serde(default)]
    pub location: i32,
}

fn default_typmod() -> i32 {
    -1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleSpec {
    /// `ROLESPEC_CSTRING` (0) for a named role; other values name pseudo-roles
    /// such as `CURRENT_USER` / `SESSION_USER` / `PUBLIC`.
    #[serde(default)]
    pub roletype: i32,
    pub rolename: Option<String>,
    #[serde(default)]
    pub location: i32,
}
