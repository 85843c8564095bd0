use std::{path::PathBuf, str::FromStr};

use clap::{Parser, Subcommand, ValueEnum};
use delegation_client::{
    config::{parse_program_id, ENV_PROGRAM_ID, ENV_PROVIDER_URL, ENV_WALLET},
    errors::ClientResult,
    DelegationClientConfig, RpcCluster, RpcProviderConfig,
};
use solana_sdk::{commitment_config::CommitmentLevel, pubkey::Pubkey};

/// Command line arguments of the delegate CLI
#[derive(Parser, Debug)]
#[command(
    name = "delegate",
    about = "Initialize, inspect and withdraw from the delegated account \
             of a wallet"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    /// Cluster moniker (mainnet, testnet, devnet, localhost) or RPC URL
    #[arg(short, long, global = true, env = ENV_PROVIDER_URL)]
    pub url: Option<String>,

    /// Keypair file of the wallet that signs and pays
    #[arg(short, long, global = true, env = ENV_WALLET)]
    pub keypair: Option<PathBuf>,

    /// Id of the deployed delegation program
    #[arg(long, global = true, env = ENV_PROGRAM_ID)]
    pub program_id: Option<String>,

    #[arg(long, global = true, value_enum)]
    pub commitment: Option<Commitment>,

    #[arg(
        short,
        long,
        global = true,
        value_enum,
        default_value_t = OutputFormat::Text
    )]
    pub output: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the delegated account of the wallet, optionally depositing
    /// into it
    Initialize {
        /// Deposit in lamports
        #[arg(long, conflicts_with = "sol")]
        amount: Option<u64>,
        /// Deposit in whole SOL
        #[arg(long)]
        sol: Option<u64>,
    },
    /// Withdraw lamports from the delegated account of the wallet
    Withdraw {
        #[arg(long)]
        amount: u64,
    },
    /// Print the delegated account address of an owner
    FindDelegate {
        /// Defaults to the wallet
        #[arg(long, value_parser = parse_pubkey)]
        owner: Option<Pubkey>,
    },
    /// Fetch and print the delegated account of an owner
    Show {
        /// Defaults to the wallet
        #[arg(long, value_parser = parse_pubkey)]
        owner: Option<Pubkey>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commitment {
    Processed,
    Confirmed,
    Finalized,
}

impl From<Commitment> for CommitmentLevel {
    fn from(commitment: Commitment) -> Self {
        match commitment {
            Commitment::Processed => CommitmentLevel::Processed,
            Commitment::Confirmed => CommitmentLevel::Confirmed,
            Commitment::Finalized => CommitmentLevel::Finalized,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl CliArgs {
    /// Flags win over the environment which wins over the defaults.
    pub fn client_config(&self) -> ClientResult<DelegationClientConfig> {
        let mut config = DelegationClientConfig::development();
        if let Some(url) = &self.url {
            config.rpc_provider_config = RpcProviderConfig::new(
                RpcCluster::from_moniker_or_url(url),
                config.rpc_provider_config.commitment(),
            );
        }
        if let Some(commitment) = self.commitment {
            config.rpc_provider_config = RpcProviderConfig::new(
                config.rpc_provider_config.cluster().clone(),
                Some(commitment.into()),
            );
        }
        if let Some(keypair) = &self.keypair {
            config.keypair_path = keypair.clone();
        }
        if let Some(program_id) = &self.program_id {
            config.program_id = parse_program_id(program_id)?;
        }
        Ok(config)
    }
}

fn parse_pubkey(value: &str) -> Result<Pubkey, String> {
    Pubkey::from_str(value).map_err(|err| format!("{}: {}", value, err))
}
