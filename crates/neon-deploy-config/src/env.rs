//! Environment snapshot the resolver reads from.
//!
//! The process environment is captured once and passed in explicitly, so
//! tests can supply synthetic environments without touching process globals.

use std::collections::HashMap;

/// RPC endpoint override applied to every network.
pub const NEON_PROXY_RPC_URL: &str = "NEON_PROXY_RPC_URL";
/// Per-network RPC overrides; take precedence over the shared variable.
pub const NEON_PROXY_RPC_URL_DEVNET: &str = "NEON_PROXY_RPC_URL_DEVNET";
pub const NEON_PROXY_RPC_URL_MAINNET: &str = "NEON_PROXY_RPC_URL_MAINNET";
/// Signing credential used for every network. No fallback.
pub const PRIVATE_KEY_SOLANA: &str = "PRIVATE_KEY_SOLANA";
/// Auxiliary Solana-native RPC endpoint.
pub const SOLANA_RPC_URL: &str = "SOLANA_RPC_URL";

/// Immutable snapshot of environment variables.
#[derive(Debug, Clone, Default)]
pub struct Environment {
	vars: HashMap<String, String>,
}

impl Environment {
	/// Snapshot the current process environment.
	pub fn from_process() -> Self {
		std::env::vars().collect()
	}

	/// Look up a variable. Present-but-empty values count as absent.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.vars
			.get(name)
			.map(String::as_str)
			.filter(|v| !v.is_empty())
	}

	pub fn is_set(&self, name: &str) -> bool {
		self.get(name).is_some()
	}
}

impl FromIterator<(String, String)> for Environment {
	fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
		Self {
			vars: iter.into_iter().collect(),
		}
	}
}

impl<const N: usize> From<[(&str, &str); N]> for Environment {
	fn from(pairs: [(&str, &str); N]) -> Self {
		pairs
			.into_iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}
}
