//! Error taxonomy shared across the platform.
//!
//! Failures detected by the settings core are terminal rejections of the
//! current call. Adapter-level details are logged where they occur and never
//! leak through the domain variants.

pub type ClResult<T> = std::result::Result<T, Error>;

/// Fixed message for core-setting access from a non-internal context.
pub const CORE_ACCESS_EXTERNAL: &str = "Attempted to access core setting from external context";
/// Fixed message for a browse denial from the permission gate.
pub const NO_PERMISSION_BROWSE: &str = "You do not have permission to browse settings.";
/// Fixed message for a read denial from the permission gate.
pub const NO_PERMISSION_READ: &str = "You do not have permission to read settings.";
/// Fixed message for an edit denial from the permission gate.
pub const NO_PERMISSION_EDIT: &str = "You do not have permission to edit settings.";

#[derive(Debug)]
pub enum Error {
	/// Referenced key is absent from the cache; the message names the key
	NotFound(String),
	/// Access denied; carries one of the fixed per-site messages above
	PermissionDenied(&'static str),
	/// Schema or payload validation rejected the request
	ValidationError(String),
	/// Invalid component configuration detected at construction time
	ConfigError(String),
	/// Persistence-layer failure (details logged at the adapter, not leaked)
	DbError,
	Internal(String),

	// externals
	Io(std::io::Error),
}

impl Error {
	/// Not-found error naming the missing setting key
	pub fn not_found_setting(key: &str) -> Self {
		Self::NotFound(format!("Problem finding setting: {}", key))
	}
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Error::NotFound(msg) => write!(f, "{}", msg),
			Error::PermissionDenied(msg) => write!(f, "{}", msg),
			Error::ValidationError(msg) => write!(f, "validation error: {}", msg),
			Error::ConfigError(msg) => write!(f, "configuration error: {}", msg),
			Error::DbError => write!(f, "database error"),
			Error::Internal(msg) => write!(f, "internal error: {}", msg),
			Error::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

impl std::error::Error for Error {}


// vim: ts=4
