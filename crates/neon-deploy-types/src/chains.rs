//! Chain and network identifiers for the Neon EVM deployment targets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Chain identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainId(pub u64);

impl ChainId {
	pub const NEON_DEVNET: Self = Self(245022926);
	pub const NEON_MAINNET: Self = Self(245022934);
}

impl fmt::Display for ChainId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl FromStr for ChainId {
	type Err = std::num::ParseIntError;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		Ok(ChainId(s.parse()?))
	}
}

/// Named deployment target on the Neon EVM proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
	Devnet,
	Mainnet,
}

impl Network {
	pub const ALL: [Self; 2] = [Self::Devnet, Self::Mainnet];

	/// Key used for this network in the configuration map.
	pub fn name(&self) -> &'static str {
		match self {
			Self::Devnet => "devnet",
			Self::Mainnet => "mainnet",
		}
	}

	/// Fixed chain ID for this network, independent of any environment.
	pub fn chain_id(&self) -> ChainId {
		match self {
			Self::Devnet => ChainId::NEON_DEVNET,
			Self::Mainnet => ChainId::NEON_MAINNET,
		}
	}
}

impl fmt::Display for Network {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

#[derive(Debug, Error)]
#[error("Unknown network: {0}")]
pub struct UnknownNetwork(pub String);

impl FromStr for Network {
	type Err = UnknownNetwork;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s {
			"devnet" => Ok(Self::Devnet),
			"mainnet" => Ok(Self::Mainnet),
			other => Err(UnknownNetwork(other.to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_chain_id_constants() {
		assert_eq!(ChainId::NEON_DEVNET.0, 245022926);
		assert_eq!(ChainId::NEON_MAINNET.0, 245022934);
		assert_ne!(ChainId::NEON_DEVNET, ChainId::NEON_MAINNET);
	}

	#[test]
	fn test_chain_id_display() {
		assert_eq!(ChainId(245022926).to_string(), "245022926");
		assert_eq!("245022934".parse::<ChainId>().unwrap(), ChainId::NEON_MAINNET);
	}

	#[test]
	fn test_network_names_and_ids() {
		assert_eq!(Network::Devnet.name(), "devnet");
		assert_eq!(Network::Mainnet.name(), "mainnet");
		assert_eq!(Network::Devnet.chain_id(), ChainId::NEON_DEVNET);
		assert_eq!(Network::Mainnet.chain_id(), ChainId::NEON_MAINNET);
	}

	#[test]
	fn test_network_from_str() {
		assert_eq!("devnet".parse::<Network>().unwrap(), Network::Devnet);
		assert_eq!("mainnet".parse::<Network>().unwrap(), Network::Mainnet);
		assert!("testnet".parse::<Network>().is_err());
	}
}
