use serde::Serialize;

/// How a referenced table is used by the statement that names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceType {
    /// Read by a `SELECT`, `COPY ... TO`, or similar read-side reference.
    Select,
    /// The mutation target of `INSERT`/`UPDATE`/`DELETE`/`COPY ... FROM`.
    Dml,
    /// Named by a structural statement: `CREATE`/`ALTER`/`DROP`/`TRUNCATE`/
    /// `VACUUM`/`GRANT ... ON TABLE`/`LOCK`, or an index/trigger/rule/view.
    Ddl,
}

/// A single table reference discovered by [`crate::extractor::extract_references`].
///
/// `name` is `schema.relname` when `schema` is present, else just `relname`;
/// it's kept alongside the split fields because deparser-adjacent callers
/// often just want the one display string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, schemars::JsonSchema)]
pub struct Reference {
    pub name: String,
    pub r#type: ReferenceType,
    pub location: Option<i32>,
    pub schema: Option<String>,
    pub relname: String,
    pub inh: Option<bool>,
}
