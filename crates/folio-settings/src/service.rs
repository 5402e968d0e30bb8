//! Settings service: Browse / Read / Edit orchestration.
//!
//! All collaborators are injected; the service owns no global state. Within
//! one edit call the phases never interleave: authorization completes fully
//! before persistence begins, and persistence completes fully before the
//! cache is touched. Cache write-back is the final, non-skippable step, so
//! callers never observe a store that is newer than the cache.

use std::collections::HashSet;
use std::sync::Arc;

use folio_types::permission_gate::PermissionGate;
use folio_types::schema::SchemaValidator;
use folio_types::settings_adapter::{
	ListOptions, Setting, SettingType, SettingUpdate, SettingsAdapter, SettingsSnapshot,
	WriteOptions,
};
use folio_types::themes::ThemeCatalog;

use crate::access::AccessControl;
use crate::cache::SettingsCache;
use crate::prelude::*;
use crate::types::{BrowseOptions, EditRequest, ReadRequest, SettingsResult};
use crate::visibility::{AVAILABLE_THEMES_KEY, VisibilityFilter};

/// Pseudo-setting key used to tag an edit response's filter metadata.
const TYPE_PSEUDO_KEY: &str = "type";

pub struct SettingsService {
	cache: Arc<SettingsCache>,
	store: Arc<dyn SettingsAdapter>,
	access: AccessControl,
	visibility: VisibilityFilter,
	schema: Arc<dyn SchemaValidator>,
}

impl SettingsService {
	pub fn new(
		cache: Arc<SettingsCache>,
		store: Arc<dyn SettingsAdapter>,
		gate: Arc<dyn PermissionGate>,
		schema: Arc<dyn SchemaValidator>,
		themes: Arc<dyn ThemeCatalog>,
	) -> Self {
		Self {
			access: AccessControl::new(cache.clone(), gate),
			visibility: VisibilityFilter::new(themes),
			cache,
			store,
			schema,
		}
	}

	pub fn cache(&self) -> &Arc<SettingsCache> {
		&self.cache
	}

	/// Explicit cache (re)population: from the given records, or from the
	/// store when none are supplied. Used at process start and after
	/// out-of-band writes; edits keep the cache current on their own.
	pub async fn refresh_cache(
		&self,
		settings: Option<Vec<Setting>>,
		opts: &ListOptions,
	) -> ClResult<SettingsSnapshot> {
		let records = match settings {
			Some(records) => records,
			None => self.store.list_settings(opts).await?,
		};
		let count = self.cache.populate(records);
		info!("Settings cache refreshed, {} entries", count);
		Ok(self.cache.get_all())
	}

	/// List settings visible to the caller.
	///
	/// Without a context the caller is anonymous and sees blog settings
	/// only, bypassing access control entirely; browse never errors on a
	/// missing context.
	pub async fn browse(&self, opts: BrowseOptions) -> ClResult<SettingsResult> {
		let snapshot: Vec<Setting> = self.cache.get_all().into_values().collect();

		let Some(ctx) = opts.context else {
			return Ok(self
				.visibility
				.settings_result(snapshot, Some(SettingType::Blog.as_str())));
		};

		self.access.authorize_browse(&ctx).await?;
		let mut result = self.visibility.settings_result(snapshot, opts.typ.as_deref());
		if !ctx.internal {
			// Collection-level defense in depth beyond the per-key gate
			result.settings.retain(|s| s.typ != SettingType::Core);
		}
		Ok(result)
	}

	/// Read a single setting by key.
	pub async fn read(&self, req: impl Into<ReadRequest>) -> ClResult<SettingsResult> {
		let (key, context) = req.into().resolve();
		let setting =
			self.cache.get(&key).ok_or_else(|| Error::not_found_setting(&key))?;
		let ctx = context.unwrap_or_default();
		self.access.authorize_read(&ctx, &setting).await?;
		Ok(self.visibility.settings_result(vec![setting], None))
	}

	/// Edit one or more settings atomically.
	pub async fn edit(
		&self,
		req: impl Into<EditRequest>,
		context: Option<Context>,
	) -> ClResult<SettingsResult> {
		let ctx = context.unwrap_or_default();

		// Normalize values to their serialized string form and strip
		// pseudo-entries: `type` only tags the response filter, and the
		// derived `availableThemes` never reaches the store.
		let mut type_filter: Option<String> = None;
		let mut updates: Vec<SettingUpdate> = Vec::new();
		for input in req.into().normalize() {
			let value = normalize_value(input.value);
			match input.key.as_str() {
				TYPE_PSEUDO_KEY => type_filter = Some(value),
				AVAILABLE_THEMES_KEY => {
					debug!("Dropping derived entry '{}' from edit payload", input.key);
				}
				_ => updates.push(SettingUpdate { key: input.key.into(), value: value.into() }),
			}
		}

		// All keys must pass before any write is attempted
		let keys: Vec<&str> = updates.iter().map(|u| u.key.as_ref()).collect();
		self.access.authorize_edit_batch(&ctx, &keys).await?;

		let payload = serde_json::json!({ "settings": &updates });
		self.schema.check_object(&payload, "settings").await?;

		// Single atomic bulk write, tagged with the acting user
		let write_opts = WriteOptions { user: ctx.user.clone() };
		let records = self.store.update_settings(&updates, &write_opts).await?;

		// Canonical map from the returned records, first occurrence per key
		// wins, then write every key back into the cache before returning
		let mut seen: HashSet<Box<str>> = HashSet::with_capacity(records.len());
		let mut edited: Vec<Setting> = Vec::with_capacity(records.len());
		for record in records {
			if seen.insert(record.key.clone()) {
				edited.push(record);
			}
		}
		for setting in &edited {
			self.cache.set(setting.clone());
		}

		info!(
			"Settings edited: [{}] by {}",
			keys.join(", "),
			ctx.user.as_deref().unwrap_or("(internal)")
		);

		Ok(self.visibility.settings_result(edited, type_filter.as_deref()))
	}
}

impl std::fmt::Debug for SettingsService {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SettingsService").field("cache_entries", &self.cache.len()).finish()
	}
}

/// JSON strings pass through unchanged, everything else is JSON-serialized.
fn normalize_value(value: serde_json::Value) -> String {
	match value {
		serde_json::Value::String(s) => s,
		other => other.to_string(),
	}
}


// vim: ts=4
