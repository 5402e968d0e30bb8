//! Visibility classification and result shaping.
//!
//! Settings are filtered by their `type` tag against a comma-separated
//! allow-list, and shaped results grow a derived `availableThemes` entry
//! whenever the snapshot being shaped carries an `activeTheme`. Derived
//! entries exist only in shaped results; they are never persisted.

use std::sync::Arc;

use folio_types::settings_adapter::{Setting, SettingType};
use folio_types::themes::ThemeCatalog;

use crate::types::{ResultMeta, SettingsResult, TypeFilter};

pub const ACTIVE_THEME_KEY: &str = "activeTheme";
pub const AVAILABLE_THEMES_KEY: &str = "availableThemes";

/// Keep the settings whose type is named in the comma-separated allow-list.
/// `None` passes everything. Matching is exact string equality; input
/// ordering is preserved.
pub fn settings_filter(settings: Vec<Setting>, filter: Option<&str>) -> Vec<Setting> {
	let Some(filter) = filter else {
		return settings;
	};
	let allowed: Vec<&str> = filter.split(',').collect();
	settings.into_iter().filter(|s| allowed.contains(&s.typ.as_str())).collect()
}

/// Shapes snapshots (or subsets) into API results.
#[derive(Clone, Debug)]
pub struct VisibilityFilter {
	themes: Arc<dyn ThemeCatalog>,
}

impl VisibilityFilter {
	pub fn new(themes: Arc<dyn ThemeCatalog>) -> Self {
		Self { themes }
	}

	/// Filter by type and attach filter metadata. The derived entry is
	/// computed against the pre-filter input, so it survives a type filter
	/// that would exclude `activeTheme` itself.
	pub fn settings_result(&self, settings: Vec<Setting>, filter: Option<&str>) -> SettingsResult {
		let active_theme =
			settings.iter().find(|s| s.key.as_ref() == ACTIVE_THEME_KEY).cloned();
		let mut shaped = settings_filter(settings, filter);
		if let Some(active) = active_theme {
			shaped.push(self.available_themes(&active));
		}
		SettingsResult {
			settings: shaped,
			meta: filter.map(|f| ResultMeta { filters: TypeFilter { typ: f.into() } }),
		}
	}

	fn available_themes(&self, active: &Setting) -> Setting {
		let packages = self.themes.filter_packages(Some(active.value.as_ref()));
		let value =
			serde_json::to_string(&packages).unwrap_or_else(|_| String::from("[]"));
		Setting::new(AVAILABLE_THEMES_KEY, value, SettingType::Theme)
	}
}


// vim: ts=4
