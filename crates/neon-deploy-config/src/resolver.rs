//! Pure construction of the deployment record from an environment snapshot.

use crate::env::{
	Environment, NEON_PROXY_RPC_URL, NEON_PROXY_RPC_URL_DEVNET, NEON_PROXY_RPC_URL_MAINNET,
	PRIVATE_KEY_SOLANA, SOLANA_RPC_URL,
};
use crate::types::{
	DeploymentConfig, NetworkEndpoint, SolanaRpcConfig, DEFAULT_COMPILER_VERSION,
	DEFAULT_DEVNET_RPC_URL, DEFAULT_MAINNET_RPC_URL, DEFAULT_SOLANA_RPC_URL,
};
use neon_deploy_types::Network;
use std::collections::HashMap;
use tracing::debug;

/// Build the deployment configuration from an environment snapshot.
///
/// Each field takes its environment value when present and non-empty, and
/// its literal fallback otherwise. The signing credential has no fallback:
/// when `PRIVATE_KEY_SOLANA` is unset the accounts list is simply empty.
/// This step never fails; `ConfigLoader` performs validation separately.
pub fn resolve(env: &Environment) -> DeploymentConfig {
	DeploymentConfig {
		compiler_version: DEFAULT_COMPILER_VERSION.to_string(),
		networks: HashMap::from([
			(
				Network::Devnet.name().to_string(),
				resolve_network(env, Network::Devnet),
			),
			(
				Network::Mainnet.name().to_string(),
				resolve_network(env, Network::Mainnet),
			),
		]),
		solana: SolanaRpcConfig {
			rpc_url: env
				.get(SOLANA_RPC_URL)
				.unwrap_or(DEFAULT_SOLANA_RPC_URL)
				.to_string(),
		},
	}
}

fn resolve_network(env: &Environment, network: Network) -> NetworkEndpoint {
	let (per_network_var, default_url) = match network {
		Network::Devnet => (NEON_PROXY_RPC_URL_DEVNET, DEFAULT_DEVNET_RPC_URL),
		Network::Mainnet => (NEON_PROXY_RPC_URL_MAINNET, DEFAULT_MAINNET_RPC_URL),
	};

	// Per-network override wins over the shared NEON_PROXY_RPC_URL, which
	// historically applied to every network at once.
	let url = env
		.get(per_network_var)
		.or_else(|| env.get(NEON_PROXY_RPC_URL))
		.unwrap_or(default_url)
		.to_string();

	let accounts = match env.get(PRIVATE_KEY_SOLANA) {
		Some(key) => {
			debug!("Using signing credential from environment for {}", network);
			vec![key.to_string()]
		}
		None => vec![],
	};

	NetworkEndpoint {
		url,
		accounts,
		chain_id: network.chain_id(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use neon_deploy_types::ChainId;

	#[test]
	fn test_empty_environment_yields_defaults() {
		let config = resolve(&Environment::default());

		let devnet = config.network(Network::Devnet).unwrap();
		assert_eq!(devnet.url, "https://devnet.neonevm.org/sol");
		assert_eq!(devnet.chain_id, ChainId::NEON_DEVNET);
		assert!(devnet.accounts.is_empty());

		let mainnet = config.network(Network::Mainnet).unwrap();
		assert_eq!(mainnet.url, "https://neon-proxy-mainnet.solana.p2p.org/sol");
		assert_eq!(mainnet.chain_id, ChainId::NEON_MAINNET);
		assert!(mainnet.accounts.is_empty());

		assert_eq!(config.solana.rpc_url, "https://api.devnet.solana.com");
	}

	#[test]
	fn test_shared_url_overrides_both_networks() {
		let env = Environment::from([(NEON_PROXY_RPC_URL, "https://custom.example/sol")]);
		let config = resolve(&env);

		assert_eq!(
			config.network(Network::Devnet).unwrap().url,
			"https://custom.example/sol"
		);
		assert_eq!(
			config.network(Network::Mainnet).unwrap().url,
			"https://custom.example/sol"
		);
	}

	#[test]
	fn test_per_network_url_takes_precedence() {
		let env = Environment::from([
			(NEON_PROXY_RPC_URL, "https://shared.example/sol"),
			(NEON_PROXY_RPC_URL_DEVNET, "https://dev.example/sol"),
		]);
		let config = resolve(&env);

		assert_eq!(
			config.network(Network::Devnet).unwrap().url,
			"https://dev.example/sol"
		);
		// Mainnet still follows the shared variable.
		assert_eq!(
			config.network(Network::Mainnet).unwrap().url,
			"https://shared.example/sol"
		);
	}

	#[test]
	fn test_private_key_populates_all_networks() {
		let env = Environment::from([(PRIVATE_KEY_SOLANA, "abc123")]);
		let config = resolve(&env);

		for network in Network::ALL {
			assert_eq!(
				config.network(network).unwrap().accounts,
				vec!["abc123".to_string()]
			);
		}
	}

	#[test]
	fn test_empty_string_values_behave_as_absent() {
		let env: Environment = [
			(NEON_PROXY_RPC_URL.to_string(), String::new()),
			(PRIVATE_KEY_SOLANA.to_string(), String::new()),
		]
		.into_iter()
		.collect();
		let config = resolve(&env);

		assert_eq!(
			config.network(Network::Devnet).unwrap().url,
			"https://devnet.neonevm.org/sol"
		);
		assert!(config.network(Network::Devnet).unwrap().accounts.is_empty());
	}

	#[test]
	fn test_chain_ids_fixed_under_any_environment() {
		let env = Environment::from([
			(NEON_PROXY_RPC_URL, "https://custom.example/sol"),
			(PRIVATE_KEY_SOLANA, "abc123"),
			(SOLANA_RPC_URL, "https://custom-sol.example"),
		]);
		let config = resolve(&env);

		assert_eq!(
			config.network(Network::Devnet).unwrap().chain_id,
			ChainId(245022926)
		);
		assert_eq!(
			config.network(Network::Mainnet).unwrap().chain_id,
			ChainId(245022934)
		);
	}

	#[test]
	fn test_resolution_is_idempotent() {
		let env = Environment::from([
			(NEON_PROXY_RPC_URL, "https://custom.example/sol"),
			(PRIVATE_KEY_SOLANA, "abc123"),
		]);
		assert_eq!(resolve(&env), resolve(&env));
	}

	#[test]
	fn test_full_override_scenario() {
		let env = Environment::from([
			(NEON_PROXY_RPC_URL, "https://custom.example/sol"),
			(PRIVATE_KEY_SOLANA, "abc123"),
			(SOLANA_RPC_URL, "https://custom-sol.example"),
		]);
		let config = resolve(&env);

		for network in Network::ALL {
			let endpoint = config.network(network).unwrap();
			assert_eq!(endpoint.url, "https://custom.example/sol");
			assert_eq!(endpoint.accounts, vec!["abc123".to_string()]);
		}
		assert_eq!(config.solana.rpc_url, "https://custom-sol.example");
	}
}
