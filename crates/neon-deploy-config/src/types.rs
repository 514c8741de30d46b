//! Configuration types handed to the external deploy toolchain.

use neon_deploy_types::{ChainId, Network};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Compiler version the contracts are pinned to.
pub const DEFAULT_COMPILER_VERSION: &str = "0.8.28";

/// Fallback RPC endpoints, used when no environment override is present.
pub const DEFAULT_DEVNET_RPC_URL: &str = "https://devnet.neonevm.org/sol";
pub const DEFAULT_MAINNET_RPC_URL: &str = "https://neon-proxy-mainnet.solana.p2p.org/sol";
pub const DEFAULT_SOLANA_RPC_URL: &str = "https://api.devnet.solana.com";

/// Complete deployment configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DeploymentConfig {
	/// Pinned contract compiler version
	pub compiler_version: String,
	/// Deployment targets, keyed by network name ("devnet", "mainnet")
	pub networks: HashMap<String, NetworkEndpoint>,
	/// Auxiliary Solana-native RPC settings
	pub solana: SolanaRpcConfig,
}

/// Connection parameters for one deployment target
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NetworkEndpoint {
	/// RPC endpoint URL
	pub url: String,
	/// Signing credentials; empty when no key is configured
	#[serde(default)]
	pub accounts: Vec<String>,
	/// Fixed chain ID of the target network
	pub chain_id: ChainId,
}

/// Auxiliary non-EVM RPC endpoint
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SolanaRpcConfig {
	/// Solana RPC endpoint URL
	pub rpc_url: String,
}

impl DeploymentConfig {
	/// Endpoint entry for a named network, if configured.
	pub fn network(&self, network: Network) -> Option<&NetworkEndpoint> {
		self.networks.get(network.name())
	}
}

impl Default for DeploymentConfig {
	fn default() -> Self {
		Self {
			compiler_version: DEFAULT_COMPILER_VERSION.to_string(),
			networks: HashMap::from([
				(Network::Devnet.name().to_string(), NetworkEndpoint::devnet()),
				(Network::Mainnet.name().to_string(), NetworkEndpoint::mainnet()),
			]),
			solana: SolanaRpcConfig::default(),
		}
	}
}

impl NetworkEndpoint {
	/// Neon devnet with the fallback endpoint and no credentials.
	pub fn devnet() -> Self {
		Self {
			url: DEFAULT_DEVNET_RPC_URL.to_string(),
			accounts: vec![],
			chain_id: ChainId::NEON_DEVNET,
		}
	}

	/// Neon mainnet with the fallback endpoint and no credentials.
	pub fn mainnet() -> Self {
		Self {
			url: DEFAULT_MAINNET_RPC_URL.to_string(),
			accounts: vec![],
			chain_id: ChainId::NEON_MAINNET,
		}
	}
}

impl Default for SolanaRpcConfig {
	fn default() -> Self {
		Self {
			rpc_url: DEFAULT_SOLANA_RPC_URL.to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_config() {
		let config = DeploymentConfig::default();
		assert_eq!(config.compiler_version, "0.8.28");
		assert_eq!(config.networks.len(), 2);
		assert_eq!(config.solana.rpc_url, DEFAULT_SOLANA_RPC_URL);

		let devnet = config.network(Network::Devnet).unwrap();
		assert_eq!(devnet.url, DEFAULT_DEVNET_RPC_URL);
		assert_eq!(devnet.chain_id, ChainId::NEON_DEVNET);
		assert!(devnet.accounts.is_empty());

		let mainnet = config.network(Network::Mainnet).unwrap();
		assert_eq!(mainnet.url, DEFAULT_MAINNET_RPC_URL);
		assert_eq!(mainnet.chain_id, ChainId::NEON_MAINNET);
		assert!(mainnet.accounts.is_empty());
	}

	#[test]
	fn test_endpoint_serialization() {
		let endpoint = NetworkEndpoint::devnet();
		let json = serde_json::to_string(&endpoint).unwrap();
		assert!(json.contains("\"chain_id\":245022926"));
		assert!(json.contains("\"accounts\":[]"));
	}

	#[test]
	fn test_accounts_default_when_omitted() {
		let json = r#"{"url": "https://devnet.neonevm.org/sol", "chain_id": 245022926}"#;
		let endpoint: NetworkEndpoint = serde_json::from_str(json).unwrap();
		assert!(endpoint.accounts.is_empty());
	}
}
