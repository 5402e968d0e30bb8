//! Settings store adapter interface.
//!
//! The settings core treats persistence as an abstract store: bulk fetch and
//! bulk value-only update of existing records. Creating and deleting keys is
//! out of band (seed data), so the trait deliberately offers neither.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use std::{collections::BTreeMap, fmt::Debug};

use crate::error::{ClResult, Error};
use crate::types::Timestamp;

/// Visibility class of a setting, fixed at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingType {
	/// Accessible to trusted in-process callers only
	Core,
	/// Publicly readable without permission checks
	Blog,
	Theme,
	App,
	Private,
}

impl SettingType {
	pub fn as_str(&self) -> &'static str {
		match self {
			SettingType::Core => "core",
			SettingType::Blog => "blog",
			SettingType::Theme => "theme",
			SettingType::App => "app",
			SettingType::Private => "private",
		}
	}
}

impl std::fmt::Display for SettingType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl std::str::FromStr for SettingType {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"core" => Ok(SettingType::Core),
			"blog" => Ok(SettingType::Blog),
			"theme" => Ok(SettingType::Theme),
			"app" => Ok(SettingType::App),
			"private" => Ok(SettingType::Private),
			_ => Err(Error::ValidationError(format!("Unknown setting type: {}", s))),
		}
	}
}

/// A named, typed, string-valued configuration record.
///
/// `value` is always stored as a string; structured values are serialized
/// before storage and deserialized by consumers via [`Setting::parse`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Setting {
	pub key: Box<str>,
	pub value: Box<str>,
	#[serde(rename = "type")]
	pub typ: SettingType,
	#[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
	pub updated_at: Option<Timestamp>,
	#[serde(rename = "updatedBy", default, skip_serializing_if = "Option::is_none")]
	pub updated_by: Option<Box<str>>,
}

impl Setting {
	pub fn new(key: impl Into<Box<str>>, value: impl Into<Box<str>>, typ: SettingType) -> Self {
		Self { key: key.into(), value: value.into(), typ, updated_at: None, updated_by: None }
	}

	/// Deserialize a structured value
	pub fn parse<T: DeserializeOwned>(&self) -> ClResult<T> {
		serde_json::from_str(&self.value).map_err(|err| {
			Error::ValidationError(format!("Invalid value for setting '{}': {}", self.key, err))
		})
	}
}

/// Full key → Setting mapping held by the cache at an instant.
///
/// A BTreeMap keeps iteration deterministic, so repopulating from identical
/// store contents yields an identical snapshot.
pub type SettingsSnapshot = BTreeMap<Box<str>, Setting>;

/// A single value overwrite within a bulk edit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SettingUpdate {
	pub key: Box<str>,
	pub value: Box<str>,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ListOptions {
	pub typ: Option<SettingType>,
}

/// Write metadata threaded to the store on edits.
#[derive(Clone, Debug, Default)]
pub struct WriteOptions {
	/// Acting user; stamped onto the updated records
	pub user: Option<Box<str>>,
}

/// Durable settings store.
///
/// `update_settings` overwrites values of existing keys only, as one atomic
/// bulk call, and returns the updated records.
#[async_trait]
pub trait SettingsAdapter: Debug + Send + Sync {
	async fn list_settings(&self, opts: &ListOptions) -> ClResult<Vec<Setting>>;
	async fn update_settings(
		&self,
		updates: &[SettingUpdate],
		opts: &WriteOptions,
	) -> ClResult<Vec<Setting>>;
}


// vim: ts=4
