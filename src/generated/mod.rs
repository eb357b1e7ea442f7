//! Frozen lookup tables consumed by [`crate::ident`], [`crate::typename`] and
//! [`crate::deparser`].
//!
//! Unlike `generated/type_system.rs` in the sibling lineage crate, these tables
//! are not produced by a build-time codegen step: there is no external schema
//! file to regenerate them from, since they are fixed by the PostgreSQL grammar
//! itself. They are hand-transcribed once here and never change at runtime.

mod alter_table;
mod drop_words;
mod interval;
mod keywords;
pub mod types;

pub use alter_table::alter_table_subcommand_keyword;
pub use drop_words::drop_object_keyword;
pub use interval::{decode_interval_typmod, INTERVAL_MASK_FULL};
pub use keywords::is_reserved_keyword;
pub use types::canonical_builtin_type;
