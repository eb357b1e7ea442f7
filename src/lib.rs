//! Reference extraction and deparsing for PostgreSQL parse trees.
//!
//! This crate takes the JSON-shaped AST produced by an external PostgreSQL
//! parser and provides two independent operations over it:
//!
//! - [`extract_references`] walks a parsed statement list and reports every
//!   table it touches, classified as `select`/`dml`/`ddl`, along with the
//!   alias map and CTE name set needed to tell a real table reference from a
//!   local one.
//! - [`deparse_statements`] / [`deparse_node`] render a parse tree back into
//!   SQL text.
//!
//! Neither operation parses SQL itself — the AST is the input contract.

pub mod ast;
pub mod context;
pub mod deparser;
pub mod error;
pub mod extractor;
pub mod generated;
pub mod ident;
pub mod typename;

pub use ast::{Node, RawStmt};
pub use context::Context;
pub use deparser::{deparse_node, deparse_statements};
pub use error::DeparseError;
pub use extractor::{extract_references, ExtractResult, Reference, ReferenceType};
