//! Externally provided permission predicate.
//!
//! One method per (action, resource) pair. The settings core consults the
//! gate only for keys that are neither core-restricted nor blog-public, and
//! re-maps any failure into its own permission error.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::error::ClResult;
use crate::types::Context;

#[async_trait]
pub trait PermissionGate: Debug + Send + Sync {
	/// May the actor enumerate settings at all?
	async fn can_browse_settings(&self, ctx: &Context) -> ClResult<()>;

	/// May the actor read the named setting?
	async fn can_read_setting(&self, ctx: &Context, key: &str) -> ClResult<()>;

	/// May the actor overwrite the named setting?
	async fn can_edit_setting(&self, ctx: &Context, key: &str) -> ClResult<()>;
}

// vim: ts=4
