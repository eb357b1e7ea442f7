//! Expression node payloads.

use super::Node;
use serde::{Deserialize, Serialize};

/// `A_Expr.kind` discriminators (`A_Expr_Kind` in `parsenodes.h`).
pub mod kind {
    pub const OP: i32 = 0;
    pub const OP_ANY: i32 = 1;
    pub const OP_ALL: i32 = 2;
    pub const DISTINCT: i32 = 3;
    pub const NOT_DISTINCT: i32 = 4;
    pub const NULLIF: i32 = 5;
    pub const IN: i32 = 6;
    pub const LIKE: i32 = 7;
    pub const ILIKE: i32 = 8;
    pub const SIMILAR: i32 = 9;
    pub const BETWEEN: i32 = 10;
    pub const NOT_BETWEEN: i32 = 11;
    pub const BETWEEN_SYM: i32 = 12;
    pub const NOT_BETWEEN_SYM: i32 = 13;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AExpr {
    #[serde(default)]
    pub kind: i32,
    /// Qualified operator name, e.g. `["="]` or `["pg_catalog", "+"]`.
    #[serde(default)]
    pub name: Vec<Node>,
    pub lexpr: Option<Box<Node>>,
    pub rexpr: Option<Box<Node>>,
    #[serde(default)]
    pub location: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnRef {
    #[serde(default)]
    pub fields: Vec<Node>,
    #[serde(default)]
    pub location: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamRef {
    #[serde(default)]
    pub number: i32,
    #[serde(default)]
    pub location: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AConst {
    pub val: Option<Box<Node>>,
    #[serde(default)]
    pub isnull: bool,
    #[serde(default)]
    pub location: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeCast {
    pub arg: Box<Node>,
    pub type_name: Box<super::TypeName>,
    #[serde(default)]
    pub location: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollateClause {
    pub arg: Box<Node>,
    #[serde(default)]
    pub collname: Vec<Node>,
    #[serde(default)]
    pub location: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuncCall {
    #[serde(default)]
    pub funcname: Vec<Node>,
    #[serde(default)]
    pub args: Vec<Node>,
    #[serde(default)]
    pub agg_order: Vec<Node>,
    pub agg_filter: Option<Box<Node>>,
    pub over: Option<Box<Node>>,
    #[serde(default)]
    pub agg_distinct: bool,
    #[serde(default)]
    pub func_variadic: bool,
    #[serde(default)]
    pub agg_star: bool,
    #[serde(default)]
    pub location: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AIndices {
    #[serde(default)]
    pub is_slice: bool,
    pub lidx: Option<Box<Node>>,
    pub uidx: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AIndirection {
    pub arg: Box<Node>,
    #[serde(default)]
    pub indirection: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AArrayExpr {
    #[serde(default)]
    pub elements: Vec<Node>,
    #[serde(default)]
    pub location: i32,
}

/// `SubLink.sub_link_type` discriminators (`SubLinkType` in `parsenodes.h`).
pub mod sub_link_type {
    pub const EXISTS: i32 = 0;
    pub const ALL: i32 = 1;
    pub const ANY: i32 = 2;
    pub const ARRAY: i32 = 4;
    pub const EXPR: i32 = 5;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubLink {
    #[serde(default)]
    pub sub_link_type: i32,
    pub testexpr: Option<Box<Node>>,
    #[serde(default)]
    pub oper_name: Vec<Node>,
    pub subselect: Box<Node>,
    #[serde(default)]
    pub location: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoolExpr {
    /// 0 = AND, 1 = OR, 2 = NOT.
    #[serde(default)]
    pub boolop: i32,
    #[serde(default)]
    pub args: Vec<Node>,
    #[serde(default)]
    pub location: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NullTest {
    pub arg: Box<Node>,
    /// 0 = IS NULL, 1 = IS NOT NULL.
    #[serde(default)]
    pub nulltesttype: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BooleanTest {
    pub arg: Box<Node>,
    #[serde(default)]
    pub booltesttype: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseExpr {
    pub arg: Option<Box<Node>>,
    #[serde(default)]
    pub args: Vec<Node>,
    pub defresult: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseWhen {
    pub expr: Box<Node>,
    pub result: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoalesceExpr {
    #[serde(default)]
    pub args: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinMaxExpr {
    /// 0 = GREATEST, 1 = LEAST.
    #[serde(default)]
    pub op: i32,
    #[serde(default)]
    pub args: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowExpr {
    #[serde(default)]
    pub args: Vec<Node>,
    #[serde(default)]
    pub row_format: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupingSet {
    #[serde(default)]
    pub kind: i32,
    #[serde(default)]
    pub content: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResTarget {
    pub name: Option<String>,
    #[serde(default)]
    pub indirection: Vec<Node>,
    pub val: Option<Box<Node>>,
    #[serde(default)]
    pub location: i32,
}
