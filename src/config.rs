//! Site configuration baked in at build time.
//!
//! The page is a static WASM bundle, so there is no runtime environment to
//! read. Values come from `option_env!` when `trunk build` runs:
//!
//! - `PIPELINE_SITE_API_BASE`: chat backend base URL, default `http://localhost:8000`
//! - `PIPELINE_SITE_CONTACT_EMAIL`: address offered when the chat backend fails

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::components::pipeline::REPLAY_COOLDOWN_MS;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
pub const DEFAULT_CONTACT_EMAIL: &str = "hello@example.com";
pub const DEFAULT_FOCUS_DELAY_MS: u64 = 350;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
	pub api_base: String,
	pub contact_email: String,
	pub replay_cooldown_ms: u64,
	pub focus_delay_ms: u64,
}

impl Default for SiteConfig {
	fn default() -> Self {
		Self::from_values(None, None)
	}
}

impl SiteConfig {
	/// Configuration captured from the build environment.
	pub fn from_build_env() -> Self {
		Self::from_values(
			option_env!("PIPELINE_SITE_API_BASE"),
			option_env!("PIPELINE_SITE_CONTACT_EMAIL"),
		)
	}

	fn from_values(api_base: Option<&str>, contact_email: Option<&str>) -> Self {
		let api_base = non_empty(api_base)
			.unwrap_or(DEFAULT_API_BASE)
			.trim_end_matches('/')
			.to_string();
		let contact_email = non_empty(contact_email).unwrap_or(DEFAULT_CONTACT_EMAIL).to_string();
		Self {
			api_base,
			contact_email,
			replay_cooldown_ms: REPLAY_COOLDOWN_MS,
			focus_delay_ms: DEFAULT_FOCUS_DELAY_MS,
		}
	}

	pub fn endpoint(&self, path: &str) -> String {
		format!("{}/{}", self.api_base, path.trim_start_matches('/'))
	}
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
	raw.map(str::trim).filter(|v| !v.is_empty())
}
