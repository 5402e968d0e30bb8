//! Process-wide settings cache.
//!
//! The cache is the single source of truth for reads: the store is consulted
//! only to (re)populate it. Entries are replaced wholesale, never merged
//! field by field, so a stale field can never leak across edits.

use parking_lot::RwLock;

use folio_types::settings_adapter::{Setting, SettingsSnapshot};

use crate::prelude::*;

#[derive(Debug, Default)]
pub struct SettingsCache {
	inner: RwLock<SettingsSnapshot>,
}

impl SettingsCache {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get(&self, key: &str) -> Option<Setting> {
		self.inner.read().get(key).cloned()
	}

	/// Whole-entry replace keyed by `setting.key`
	pub fn set(&self, setting: Setting) {
		self.inner.write().insert(setting.key.clone(), setting);
	}

	pub fn get_all(&self) -> SettingsSnapshot {
		self.inner.read().clone()
	}

	/// Replace the whole cache from store records. Idempotent: identical
	/// input yields an identical snapshot. Returns the entry count.
	pub fn populate(&self, settings: impl IntoIterator<Item = Setting>) -> usize {
		let snapshot: SettingsSnapshot =
			settings.into_iter().map(|s| (s.key.clone(), s)).collect();
		let count = snapshot.len();
		*self.inner.write() = snapshot;
		debug!("Settings cache populated, {} entries", count);
		count
	}

	pub fn len(&self) -> usize {
		self.inner.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.inner.read().is_empty()
	}
}


// vim: ts=4
