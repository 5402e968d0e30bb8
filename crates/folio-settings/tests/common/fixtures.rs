//! Fixture data and service builders

use std::sync::Arc;

use folio_settings::{SettingsCache, SettingsService};
use folio_types::settings_adapter::{ListOptions, Setting, SettingType, SettingsAdapter};

use super::adapters::{MemorySettingsAdapter, PassSchema, ScriptedGate, StaticThemes};

/// The snapshot most scenarios start from: one setting per visibility class
/// plus the active theme.
pub fn base_settings() -> Vec<Setting> {
	vec![
		Setting::new("activeTheme", "casper", SettingType::Theme),
		Setting::new("title", "My Blog", SettingType::Blog),
		Setting::new("description", "Thoughts, stories and ideas", SettingType::Blog),
		Setting::new("apiKey", "xyz", SettingType::Core),
		Setting::new("activeApps", "[]", SettingType::App),
	]
}

pub struct TestBed {
	pub service: SettingsService,
	pub store: Arc<MemorySettingsAdapter>,
	pub gate: Arc<ScriptedGate>,
	pub cache: Arc<SettingsCache>,
}

/// Build a service over an in-memory store and populate its cache.
pub async fn service_with(settings: Vec<Setting>, gate: ScriptedGate) -> TestBed {
	let store = Arc::new(MemorySettingsAdapter::with_settings(settings));
	let gate = Arc::new(gate);
	let cache = Arc::new(SettingsCache::new());
	let service = SettingsService::new(
		cache.clone(),
		store.clone() as Arc<dyn SettingsAdapter>,
		gate.clone(),
		Arc::new(PassSchema),
		Arc::new(StaticThemes(vec!["casper", "carbide"])),
	);
	service
		.refresh_cache(None, &ListOptions::default())
		.await
		.expect("cache population from a fresh in-memory store cannot fail");
	TestBed { service, store, gate, cache }
}

pub async fn base_bed() -> TestBed {
	service_with(base_settings(), ScriptedGate::default()).await
}
