//! Resource schema validation, delegated to an external collaborator.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::error::ClResult;

#[async_trait]
pub trait SchemaValidator: Debug + Send + Sync {
	/// Validate `payload` against the schema of the named resource and return
	/// the (possibly normalized) payload.
	async fn check_object(
		&self,
		payload: &serde_json::Value,
		resource: &str,
	) -> ClResult<serde_json::Value>;
}

// vim: ts=4
