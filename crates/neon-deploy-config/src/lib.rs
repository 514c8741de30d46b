//! Deployment configuration for the Neon EVM toolchain.
//!
//! Produces the immutable record the external build/deploy tool consumes:
//! a compiler version pin, per-network RPC endpoints and chain IDs, signing
//! credentials sourced from the environment, and an auxiliary Solana RPC
//! endpoint. Resolution itself never fails; validation is a separate,
//! opt-in step.

use thiserror::Error;

pub mod env;
pub mod loader;
pub mod resolver;
pub mod types;

pub use env::Environment;
pub use loader::ConfigLoader;
pub use resolver::resolve;
pub use types::{DeploymentConfig, NetworkEndpoint, SolanaRpcConfig};

#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("File not found: {0}")]
	FileNotFound(String),

	#[error("Parse error: {0}")]
	ParseError(String),

	#[error("Validation error: {0}")]
	ValidationError(String),

	#[error("Environment variable not found: {0}")]
	EnvVarNotFound(String),

	#[error("IO error: {0}")]
	IoError(#[from] std::io::Error),
}
