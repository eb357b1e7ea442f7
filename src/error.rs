//! Error type for the deparser.
//!
//! The reference extractor never fails (unknown node kinds are silently
//! skipped, per its contract); only the deparser can fail, and only on a
//! node kind, type name, or enum discriminator it was not built to render.

use serde_json::Value;
use thiserror::Error;
#[cfg(feature = "tracing")]
use tracing::debug;

/// Failure to render an AST node as SQL text.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DeparseError {
    /// A node kind the deparser has no renderer for.
    #[error("unsupported node kind: {kind}")]
    UnsupportedNode { kind: String, payload: Value },

    /// A `pg_catalog` type name outside the canonicalization table.
    #[error("unsupported built-in type: {name}")]
    UnsupportedType { name: String },

    /// An `A_Expr.kind` discriminator outside the handled set.
    #[error("unsupported A_Expr kind: {kind}")]
    UnsupportedAExprKind { kind: i32 },

    /// A `ResTarget` reached with a context the renderer doesn't know how to
    /// format (only `SELECT` and `UPDATE` are supported).
    #[error("unsupported ResTarget context: {context}")]
    UnsupportedResTargetContext { context: String },

    /// A `TransactionStmt.kind` discriminator outside the handled set.
    #[error("unsupported transaction kind: {kind}")]
    UnsupportedTransactionKind { kind: i32 },
}

impl DeparseError {
    pub fn unsupported_node(kind: impl Into<String>, payload: Value) -> Self {
        let kind = kind.into();
        #[cfg(feature = "tracing")]
        debug!(%kind, "deparser hit unsupported node kind");
        Self::UnsupportedNode { kind, payload }
    }

    pub fn unsupported_type(name: impl Into<String>) -> Self {
        let name = name.into();
        #[cfg(feature = "tracing")]
        debug!(%name, "deparser hit unsupported built-in type");
        Self::UnsupportedType { name }
    }

    pub fn unsupported_a_expr_kind(kind: i32) -> Self {
        #[cfg(feature = "tracing")]
        debug!(kind, "deparser hit unsupported A_Expr kind");
        Self::UnsupportedAExprKind { kind }
    }

    pub fn unsupported_restarget_context(context: impl Into<String>) -> Self {
        let context = context.into();
        #[cfg(feature = "tracing")]
        debug!(%context, "deparser hit unsupported ResTarget context");
        Self::UnsupportedResTargetContext { context }
    }

    pub fn unsupported_transaction_kind(kind: i32) -> Self {
        #[cfg(feature = "tracing")]
        debug!(kind, "deparser hit unsupported transaction kind");
        Self::UnsupportedTransactionKind { kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_node_display() {
        let err = DeparseError::unsupported_node("FutureNode", serde_json::json!({}));
        assert_eq!(err.to_string(), "unsupported node kind: FutureNode");
    }

    #[test]
    fn unsupported_type_display() {
        let err = DeparseError::unsupported_type("pg_catalog.money");
        assert_eq!(
            err.to_string(),
            "unsupported built-in type: pg_catalog.money"
        );
    }

    #[test]
    fn unsupported_a_expr_kind_display() {
        let err = DeparseError::unsupported_a_expr_kind(99);
        assert_eq!(err.to_string(), "unsupported A_Expr kind: 99");
    }
}
