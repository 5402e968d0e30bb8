//! Request and result types for the settings API surface.
//!
//! `read` and `edit` accept a shorthand and a full form; both are resolved
//! here, once, into a single canonical shape before entering the pipeline.

use serde::{Deserialize, Serialize};

use folio_types::settings_adapter::Setting;
use folio_types::types::Context;

/// Input to [`crate::SettingsService::browse`].
#[derive(Clone, Debug, Default, Deserialize)]
pub struct BrowseOptions {
	#[serde(default)]
	pub context: Option<Context>,
	/// Comma-separated type allow-list
	#[serde(rename = "type", default)]
	pub typ: Option<String>,
}

/// Input to [`crate::SettingsService::read`]: a bare key or `{ key, context }`.
#[derive(Clone, Debug)]
pub enum ReadRequest {
	Key(String),
	Full { key: String, context: Option<Context> },
}

impl ReadRequest {
	pub(crate) fn resolve(self) -> (String, Option<Context>) {
		match self {
			ReadRequest::Key(key) => (key, None),
			ReadRequest::Full { key, context } => (key, context),
		}
	}
}

impl From<&str> for ReadRequest {
	fn from(key: &str) -> Self {
		ReadRequest::Key(key.to_string())
	}
}

impl From<String> for ReadRequest {
	fn from(key: String) -> Self {
		ReadRequest::Key(key)
	}
}

impl From<(&str, Context)> for ReadRequest {
	fn from((key, context): (&str, Context)) -> Self {
		ReadRequest::Full { key: key.to_string(), context: Some(context) }
	}
}

/// One key/value pair submitted for edit. Values arrive as arbitrary JSON
/// and are normalized to strings by the pipeline.
#[derive(Clone, Debug, Deserialize)]
pub struct SettingInput {
	pub key: String,
	pub value: serde_json::Value,
}

/// Input to [`crate::SettingsService::edit`]: a single `(key, value)` pair
/// or a `{ settings: [...] }` batch.
#[derive(Clone, Debug)]
pub enum EditRequest {
	Single { key: String, value: serde_json::Value },
	Batch { settings: Vec<SettingInput> },
}

impl EditRequest {
	pub(crate) fn normalize(self) -> Vec<SettingInput> {
		match self {
			EditRequest::Single { key, value } => vec![SettingInput { key, value }],
			EditRequest::Batch { settings } => settings,
		}
	}
}

impl From<(&str, serde_json::Value)> for EditRequest {
	fn from((key, value): (&str, serde_json::Value)) -> Self {
		EditRequest::Single { key: key.to_string(), value }
	}
}

impl From<(&str, &str)> for EditRequest {
	fn from((key, value): (&str, &str)) -> Self {
		EditRequest::Single { key: key.to_string(), value: value.into() }
	}
}

impl From<Vec<SettingInput>> for EditRequest {
	fn from(settings: Vec<SettingInput>) -> Self {
		EditRequest::Batch { settings }
	}
}

/// Shaped response: the visible settings plus filter metadata.
#[derive(Clone, Debug, Serialize)]
pub struct SettingsResult {
	pub settings: Vec<Setting>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub meta: Option<ResultMeta>,
}

impl SettingsResult {
	/// First (or only) setting in the result
	pub fn first(&self) -> Option<&Setting> {
		self.settings.first()
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.settings.iter().any(|s| s.key.as_ref() == key)
	}
}

#[derive(Clone, Debug, Serialize)]
pub struct ResultMeta {
	pub filters: TypeFilter,
}

#[derive(Clone, Debug, Serialize)]
pub struct TypeFilter {
	#[serde(rename = "type")]
	pub typ: Box<str>,
}


// vim: ts=4
