//! DDL statement and constraint payloads.

use super::Node;
use serde::{Deserialize, Serialize};

/// `Constraint.contype` discriminators (`ConstrType`).
pub mod constr_type {
    pub const NULL: i32 = 0;
    pub const NOT_NULL: i32 = 1;
    pub const DEFAULT: i32 = 2;
    pub const CHECK: i32 = 4;
    pub const PRIMARY: i32 = 5;
    pub const UNIQUE: i32 = 6;
    pub const EXCLUSION: i32 = 7;
    pub const FOREIGN: i32 = 8;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    #[serde(default)]
    pub contype: i32,
    pub conname: Option<String>,
    pub raw_expr: Option<Box<Node>>,
    #[serde(default)]
    pub keys: Vec<Node>,
    #[serde(default)]
    pub fk_attrs: Vec<Node>,
    pub pktable: Option<Box<super::RangeVar>>,
    #[serde(default)]
    pub pk_attrs: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub colname: String,
    pub type_name: Option<Box<super::TypeName>>,
    #[serde(default)]
    pub constraints: Vec<Node>,
    pub raw_default: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateStmt {
    pub relation: Box<super::RangeVar>,
    #[serde(default)]
    pub table_elts: Vec<Node>,
    #[serde(default)]
    pub inh_relations: Vec<Node>,
    #[serde(default)]
    pub if_not_exists: bool,
}

/// `AlterTableCmd.subtype` discriminators (`AlterTableType`); see
/// `crate::generated::alter_table_subcommand_keyword` for the full table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlterTableCmd {
    #[serde(default)]
    pub subtype: i32,
    pub name: Option<String>,
    pub def: Option<Box<Node>>,
    #[serde(default)]
    pub missing_ok: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlterTableStmt {
    pub relation: Box<super::RangeVar>,
    #[serde(default)]
    pub cmds: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexStmt {
    pub idxname: Option<String>,
    pub relation: Box<super::RangeVar>,
    #[serde(default)]
    pub access_method: String,
    #[serde(default)]
    pub index_params: Vec<Node>,
    #[serde(default)]
    pub unique: bool,
    #[serde(default)]
    pub concurrent: bool,
    #[serde(default)]
    pub if_not_exists: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTrigStmt {
    pub trigname: String,
    pub relation: Box<super::RangeVar>,
    #[serde(default)]
    pub funcname: Vec<Node>,
    #[serde(default)]
    pub args: Vec<Node>,
    #[serde(default)]
    pub row: bool,
    #[serde(default)]
    pub timing: i32,
    #[serde(default)]
    pub events: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleStmt {
    pub relation: Box<super::RangeVar>,
    pub rulename: String,
    pub where_clause: Option<Box<Node>>,
    #[serde(default)]
    pub event: i32,
    #[serde(default)]
    pub instead: bool,
    #[serde(default)]
    pub actions: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewStmt {
    pub view: Box<super::RangeVar>,
    #[serde(default)]
    pub aliases: Vec<Node>,
    pub query: Box<Node>,
    #[serde(default)]
    pub replace: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTableAsStmt {
    pub query: Box<Node>,
    pub into: Box<super::IntoClause>,
    #[serde(default)]
    pub is_select_into: bool,
    #[serde(default)]
    pub if_not_exists: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshMatViewStmt {
    pub relation: Box<super::RangeVar>,
    #[serde(default)]
    pub concurrent: bool,
    #[serde(default)]
    pub skip_data: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TruncateStmt {
    #[serde(default)]
    pub relations: Vec<Node>,
    #[serde(default)]
    pub restart_seqs: bool,
    #[serde(default)]
    pub behavior: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LockStmt {
    #[serde(default)]
    pub relations: Vec<Node>,
    #[serde(default)]
    pub mode: i32,
    #[serde(default)]
    pub nowait: bool,
}

/// `GrantStmt.objtype` discriminators the extractor cares about. `TABLE` is
/// the only one that currently yields references — `COLUMN` and `SEQUENCE`
/// are elided (open question, see `DESIGN.md`).
pub mod grant_objtype {
    pub const TABLE: &str = "OBJECT_TABLE";
    pub const COLUMN: &str = "OBJECT_COLUMN";
    pub const SEQUENCE: &str = "OBJECT_SEQUENCE";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrantStmt {
    #[serde(default)]
    pub is_grant: bool,
    #[serde(default)]
    pub targtype: i32,
    #[serde(default)]
    pub objtype: String,
    #[serde(default)]
    pub objects: Vec<Node>,
    #[serde(default)]
    pub privileges: Vec<Node>,
    #[serde(default)]
    pub grantees: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropStmt {
    #[serde(default)]
    pub objects: Vec<Node>,
    #[serde(default)]
    pub remove_type: String,
    #[serde(default)]
    pub behavior: i32,
    #[serde(default)]
    pub missing_ok: bool,
    #[serde(default)]
    pub concurrent: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferClause {
    #[serde(default)]
    pub index_elems: Vec<Node>,
    pub where_clause: Option<Box<Node>>,
    pub conname: Option<String>,
}

/// `OnConflictClause.action` discriminators (`OnConflictAction`).
pub mod conflict_action {
    pub const NOTHING: i32 = 0;
    pub const UPDATE: i32 = 1;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnConflictClause {
    #[serde(default)]
    pub action: i32,
    pub infer: Option<Box<InferClause>>,
    #[serde(default)]
    pub target_list: Vec<Node>,
    pub where_clause: Option<Box<Node>>,
    #[serde(default)]
    pub location: i32,
}
