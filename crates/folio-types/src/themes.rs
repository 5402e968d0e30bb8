//! Theme package enumeration, delegated to an external collaborator.
//!
//! Used to compute the derived `availableThemes` entry in shaped settings
//! results. The catalog enumerates an in-memory package list, so the trait
//! is synchronous.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// An installed theme package, annotated against the active theme.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePackage {
	pub name: Box<str>,
	/// Parsed package metadata, when the theme ships any
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub package: Option<serde_json::Value>,
	#[serde(default)]
	pub active: bool,
}

impl ThemePackage {
	pub fn new(name: impl Into<Box<str>>) -> Self {
		Self { name: name.into(), package: None, active: false }
	}
}

pub trait ThemeCatalog: Debug + Send + Sync {
	/// List installed theme packages, marking the one matching `active`.
	fn filter_packages(&self, active: Option<&str>) -> Vec<ThemePackage>;
}


// vim: ts=4
