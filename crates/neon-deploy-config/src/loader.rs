//! Configuration loading from files and environment.

use crate::env::{
	Environment, NEON_PROXY_RPC_URL, NEON_PROXY_RPC_URL_DEVNET, NEON_PROXY_RPC_URL_MAINNET,
	PRIVATE_KEY_SOLANA, SOLANA_RPC_URL,
};
use crate::resolver::resolve;
use crate::types::DeploymentConfig;
use crate::ConfigError;
use neon_deploy_types::Network;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Configuration loader with environment variable overrides
pub struct ConfigLoader {
	file_path: Option<PathBuf>,
	environment: Environment,
}

impl ConfigLoader {
	pub fn new() -> Self {
		Self {
			file_path: None,
			environment: Environment::from_process(),
		}
	}

	pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
		self.file_path = Some(path.as_ref().to_path_buf());
		self
	}

	pub fn with_environment(mut self, environment: Environment) -> Self {
		self.environment = environment;
		self
	}

	/// Produce the validated deployment configuration.
	///
	/// With a file, the file supplies the base record and the environment
	/// overrides it. Without one, the record is resolved straight from the
	/// environment with the literal fallbacks.
	pub fn load(&self) -> Result<DeploymentConfig, ConfigError> {
		let config = match &self.file_path {
			Some(path) => {
				let mut config = self.load_from_file(path)?;
				self.apply_env_overrides(&mut config);
				config
			}
			None => resolve(&self.environment),
		};

		self.validate_config(&config)?;
		Ok(config)
	}

	fn load_from_file(&self, path: &Path) -> Result<DeploymentConfig, ConfigError> {
		info!("Loading configuration from {:?}", path);

		if !path.exists() {
			return Err(ConfigError::FileNotFound(path.display().to_string()));
		}
		let contents = std::fs::read_to_string(path)?;

		match path.extension().and_then(|s| s.to_str()) {
			Some("toml") => Self::from_toml(&contents),
			Some("json") => Self::from_json(&contents),
			_ => Err(ConfigError::ParseError(format!(
				"Unsupported config format: {}",
				path.display()
			))),
		}
	}

	/// Parse a TOML configuration document
	pub fn from_toml(contents: &str) -> Result<DeploymentConfig, ConfigError> {
		toml::from_str(contents).map_err(|e| ConfigError::ParseError(e.to_string()))
	}

	/// Parse a JSON configuration document
	pub fn from_json(contents: &str) -> Result<DeploymentConfig, ConfigError> {
		serde_json::from_str(contents).map_err(|e| ConfigError::ParseError(e.to_string()))
	}

	fn apply_env_overrides(&self, config: &mut DeploymentConfig) {
		let env = &self.environment;

		if let Some(url) = env.get(NEON_PROXY_RPC_URL) {
			debug!("Overriding every network RPC URL from environment");
			for endpoint in config.networks.values_mut() {
				endpoint.url = url.to_string();
			}
		}

		for (network, var) in [
			(Network::Devnet, NEON_PROXY_RPC_URL_DEVNET),
			(Network::Mainnet, NEON_PROXY_RPC_URL_MAINNET),
		] {
			if let Some(url) = env.get(var) {
				debug!("Overriding {} RPC URL from environment", network);
				if let Some(endpoint) = config.networks.get_mut(network.name()) {
					endpoint.url = url.to_string();
				}
			}
		}

		if let Some(key) = env.get(PRIVATE_KEY_SOLANA) {
			debug!("Overriding signing credential from environment");
			for endpoint in config.networks.values_mut() {
				endpoint.accounts = vec![key.to_string()];
			}
		}

		if let Some(url) = env.get(SOLANA_RPC_URL) {
			debug!("Overriding Solana RPC URL from environment");
			config.solana.rpc_url = url.to_string();
		}
	}

	fn validate_config(&self, config: &DeploymentConfig) -> Result<(), ConfigError> {
		for (name, endpoint) in &config.networks {
			url::Url::parse(&endpoint.url).map_err(|e| {
				ConfigError::ValidationError(format!("Invalid RPC URL for {}: {}", name, e))
			})?;

			if endpoint.accounts.len() > 1 {
				return Err(ConfigError::ValidationError(format!(
					"Network {} configures {} accounts, expected at most one",
					name,
					endpoint.accounts.len()
				)));
			}
		}

		url::Url::parse(&config.solana.rpc_url).map_err(|e| {
			ConfigError::ValidationError(format!("Invalid Solana RPC URL: {}", e))
		})?;

		let mut seen = HashSet::new();
		for (name, endpoint) in &config.networks {
			if !seen.insert(endpoint.chain_id) {
				return Err(ConfigError::ValidationError(format!(
					"Chain ID {} for {} is already used by another network",
					endpoint.chain_id, name
				)));
			}
		}

		Ok(())
	}
}

impl Default for ConfigLoader {
	fn default() -> Self {
		Self::new()
	}
}

/// Fail fast when the selected network has no signing credential.
///
/// Resolution deliberately leaves missing credentials alone; a deployment
/// command calls this before handing the record to the toolchain so the
/// failure names the variable instead of surfacing as an opaque signing
/// error downstream.
pub fn ensure_signer(config: &DeploymentConfig, network: Network) -> Result<(), ConfigError> {
	let endpoint = config.network(network).ok_or_else(|| {
		ConfigError::ValidationError(format!("Network {} is not configured", network))
	})?;

	if endpoint.accounts.is_empty() {
		return Err(ConfigError::EnvVarNotFound(PRIVATE_KEY_SOLANA.to_string()));
	}

	Ok(())
}
