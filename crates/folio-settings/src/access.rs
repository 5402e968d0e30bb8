//! Per-key access control.
//!
//! Policy, evaluated in order for every key:
//! 1. a key absent from the cache fails with not-found, before any
//!    permission reasoning;
//! 2. `core` settings are categorically inaccessible to external contexts;
//! 3. `blog` settings are readable by anyone (read/browse only);
//! 4. everything else is delegated to the external permission gate, whose
//!    denials and failures are re-mapped to domain permission errors.
//!
//! Internal contexts are trusted in-process callers and never consult the
//! gate.

use std::sync::Arc;

use folio_types::error::{
	CORE_ACCESS_EXTERNAL, NO_PERMISSION_BROWSE, NO_PERMISSION_EDIT, NO_PERMISSION_READ,
};
use folio_types::permission_gate::PermissionGate;
use folio_types::settings_adapter::{Setting, SettingType};

use crate::cache::SettingsCache;
use crate::prelude::*;

#[derive(Debug)]
pub struct AccessControl {
	cache: Arc<SettingsCache>,
	gate: Arc<dyn PermissionGate>,
}

impl AccessControl {
	pub fn new(cache: Arc<SettingsCache>, gate: Arc<dyn PermissionGate>) -> Self {
		Self { cache, gate }
	}

	pub async fn authorize_browse(&self, ctx: &Context) -> ClResult<()> {
		if ctx.internal {
			return Ok(());
		}
		self.gate
			.can_browse_settings(ctx)
			.await
			.map_err(|cause| denied(cause, NO_PERMISSION_BROWSE))
	}

	/// Authorize reading a setting already resolved from the cache.
	pub async fn authorize_read(&self, ctx: &Context, setting: &Setting) -> ClResult<()> {
		match setting.typ {
			SettingType::Core if !ctx.internal => {
				warn!("External context denied access to core setting '{}'", setting.key);
				Err(Error::PermissionDenied(CORE_ACCESS_EXTERNAL))
			}
			// Blog settings are the public-visibility default
			SettingType::Core | SettingType::Blog => Ok(()),
			_ if ctx.internal => Ok(()),
			_ => self
				.gate
				.can_read_setting(ctx, &setting.key)
				.await
				.map_err(|cause| denied(cause, NO_PERMISSION_READ)),
		}
	}

	/// Authorize a whole edit batch. Every key is checked independently and
	/// all must pass before the caller may persist anything; the blog
	/// read exemption does not apply to edits.
	pub async fn authorize_edit_batch(&self, ctx: &Context, keys: &[&str]) -> ClResult<()> {
		for key in keys {
			let setting =
				self.cache.get(key).ok_or_else(|| Error::not_found_setting(key))?;
			match setting.typ {
				SettingType::Core if !ctx.internal => {
					warn!("External context denied edit of core setting '{}'", key);
					return Err(Error::PermissionDenied(CORE_ACCESS_EXTERNAL));
				}
				_ if ctx.internal => {}
				_ => self
					.gate
					.can_edit_setting(ctx, key)
					.await
					.map_err(|cause| denied(cause, NO_PERMISSION_EDIT))?,
			}
		}
		Ok(())
	}
}

/// Re-map a gate denial or failure into the domain permission error. The
/// original cause is logged, never exposed to the caller.
fn denied(cause: Error, message: &'static str) -> Error {
	debug!("Permission gate refused: {}", cause);
	Error::PermissionDenied(message)
}


// vim: ts=4
