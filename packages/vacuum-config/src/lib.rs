mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Credentials, Endpoint, Locale, Service};

use std::{fs, path::Path};

/// Reads, normalizes and validates the config file at `path`.
pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|source| Error::ReadConfig { path: path.to_path_buf(), source })?;

	parse(&raw, path)
}

/// Same as [`load`] for an already-read document. `origin` only labels errors.
pub fn parse(raw: &str, origin: &Path) -> Result<Config> {
	let mut cfg = toml::from_str::<Config>(raw)
		.map_err(|source| Error::ParseConfig { path: origin.to_path_buf(), source })?;

	normalize(&mut cfg);
	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}

	for (label, value) in [
		("credentials.key", &cfg.credentials.key),
		("credentials.secret", &cfg.credentials.secret),
		("credentials.tag", &cfg.credentials.tag),
	] {
		if value.trim().is_empty() {
			return Err(Error::Validation { message: format!("{label} must be non-empty.") });
		}
	}

	if cfg.endpoint.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "endpoint.timeout_ms must be greater than zero.".to_string(),
		});
	}

	for (name, value) in &cfg.endpoint.default_headers {
		if !value.is_string() {
			return Err(Error::Validation {
				message: format!("endpoint.default_headers.{name} must be a string."),
			});
		}
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	if cfg.endpoint.version.as_deref().map(|version| version.trim().is_empty()).unwrap_or(false) {
		cfg.endpoint.version = None;
	}
}
