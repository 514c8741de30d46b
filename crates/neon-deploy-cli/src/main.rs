use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use neon_deploy_config::loader::ensure_signer;
use neon_deploy_config::{ConfigLoader, DeploymentConfig};
use neon_deploy_types::Network;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "neon-deploy")]
#[command(about = "Neon EVM deployment configuration tool", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Optional configuration file; the environment overrides it
	#[arg(short, long, value_name = "FILE")]
	config: Option<PathBuf>,

	#[arg(long, env = "NEON_DEPLOY_LOG_LEVEL", default_value = "info")]
	log_level: String,
}

#[derive(Subcommand)]
enum Commands {
	/// Print the resolved deployment configuration
	Show {
		#[arg(long, value_enum, default_value_t = OutputFormat::Toml)]
		format: OutputFormat,
	},
	/// Validate the resolved configuration
	Validate {
		/// Network the deployment is aimed at
		#[arg(long, default_value = "devnet")]
		network: Network,

		/// Also require a signing credential for the selected network
		#[arg(long)]
		require_signer: bool,
	},
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
	Toml,
	Json,
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	setup_tracing(&cli.log_level)?;

	let mut loader = ConfigLoader::new();
	if let Some(path) = &cli.config {
		loader = loader.with_file(path);
	}
	let config = loader.load().context("Failed to load configuration")?;

	match cli.command {
		Commands::Show { format } => show_config(&config, format),
		Commands::Validate {
			network,
			require_signer,
		} => validate_config(&config, network, require_signer),
	}
}

fn show_config(config: &DeploymentConfig, format: OutputFormat) -> Result<()> {
	let redacted = redact_credentials(config);

	let rendered = match format {
		OutputFormat::Toml => {
			toml::to_string_pretty(&redacted).context("Failed to render TOML")?
		}
		OutputFormat::Json => {
			serde_json::to_string_pretty(&redacted).context("Failed to render JSON")?
		}
	};
	println!("{}", rendered);

	Ok(())
}

fn validate_config(config: &DeploymentConfig, network: Network, require_signer: bool) -> Result<()> {
	info!("Configuration is valid");
	info!("Compiler version: {}", config.compiler_version);

	for target in Network::ALL {
		if let Some(endpoint) = config.network(target) {
			info!(
				"  {}: {} (chain ID {}, {} account(s))",
				target,
				endpoint.url,
				endpoint.chain_id,
				endpoint.accounts.len()
			);
		}
	}
	info!("Solana RPC: {}", config.solana.rpc_url);

	if require_signer {
		ensure_signer(config, network)
			.with_context(|| format!("Deployment to {} cannot sign transactions", network))?;
		info!("Signing credential present for {}", network);
	}

	Ok(())
}

/// Private keys never reach stdout.
fn redact_credentials(config: &DeploymentConfig) -> DeploymentConfig {
	let mut redacted = config.clone();
	for endpoint in redacted.networks.values_mut() {
		for account in endpoint.accounts.iter_mut() {
			*account = "<redacted>".to_string();
		}
	}
	redacted
}

fn setup_tracing(log_level: &str) -> Result<()> {
	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

	tracing_subscriber::registry()
		.with(env_filter)
		.with(tracing_subscriber::fmt::layer())
		.init();

	Ok(())
}
