//! Common types used throughout the Folio platform.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

// Timestamp //
//***********//
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(pub i64);

impl std::fmt::Display for Timestamp {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

pub fn now() -> Timestamp {
	let res = SystemTime::now().duration_since(SystemTime::UNIX_EPOCH).unwrap_or_default();
	Timestamp(res.as_secs() as i64)
}

// Context //
//*********//

/// Caller context attached to settings requests.
///
/// `internal` marks a trusted in-process origin (bootstrap, scheduled jobs)
/// exempt from core-setting restrictions and from the permission gate.
/// Everything else is an external actor subject to full evaluation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Context {
	#[serde(default)]
	pub internal: bool,
	/// Opaque actor identity, used to tag writes
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub user: Option<Box<str>>,
}

impl Context {
	/// Trusted in-process context
	pub fn internal() -> Self {
		Self { internal: true, user: None }
	}

	/// External context acting as the given user
	pub fn external(user: impl Into<Box<str>>) -> Self {
		Self { internal: false, user: Some(user.into()) }
	}
}


// vim: ts=4
