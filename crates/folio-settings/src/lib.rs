//! Settings subsystem with a process-wide cache, visibility classes, and
//! per-key access control.
//!
//! # Architecture
//!
//! - **Cache** (`cache.rs`): full in-memory mirror of the store, the
//!   exclusive read path
//! - **Visibility** (`visibility.rs`): type filtering, derived entries, and
//!   result shaping
//! - **Access** (`access.rs`): per-key permission gate composing the
//!   visibility class rules with the external permission predicate
//! - **Service** (`service.rs`): Browse / Read / Edit orchestration
//!
//! # Consistency
//!
//! The store is read only to (re)populate the cache, never per request.
//! Edits authorize every key before any write, persist as one bulk call,
//! and write every affected key back into the cache before returning, so a
//! caller never observes a store/cache divergence.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod access;
pub mod cache;
pub mod prelude;
pub mod service;
pub mod types;
pub mod visibility;

pub use access::AccessControl;
pub use cache::SettingsCache;
pub use service::SettingsService;
pub use types::{BrowseOptions, EditRequest, ReadRequest, ResultMeta, SettingsResult};
pub use visibility::{VisibilityFilter, settings_filter};

// vim: ts=4
