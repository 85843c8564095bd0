use std::{env, path::PathBuf, str::FromStr};

use delegation_addresses::{
    cluster::RpcCluster, consts::DELEGATION_PROGRAM_ID,
};
use delegation_providers::rpc_provider_config::RpcProviderConfig;
use solana_sdk::{
    commitment_config::CommitmentLevel,
    pubkey::Pubkey,
    signature::{read_keypair_file, Keypair},
};

use crate::errors::{ClientError, ClientResult};

/// Cluster moniker or URL of the RPC node.
pub const ENV_PROVIDER_URL: &str = "ANCHOR_PROVIDER_URL";
/// Path of the keypair file that signs and pays.
pub const ENV_WALLET: &str = "ANCHOR_WALLET";
/// Base58 id of the deployed delegation program.
pub const ENV_PROGRAM_ID: &str = "DELEGATION_PROGRAM_ID";

const DEFAULT_KEYPAIR_PATH: &str = ".config/solana/id.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegationClientConfig {
    pub rpc_provider_config: RpcProviderConfig,
    pub program_id: Pubkey,
    pub keypair_path: PathBuf,
}

impl Default for DelegationClientConfig {
    fn default() -> Self {
        Self::development()
    }
}

impl DelegationClientConfig {
    pub fn development() -> Self {
        Self {
            rpc_provider_config: RpcProviderConfig::development(),
            program_id: DELEGATION_PROGRAM_ID,
            keypair_path: default_keypair_path(env::var("HOME").ok()),
        }
    }

    /// Reads the same variables the anchor tooling exports for its test
    /// runs and falls back to the local cluster, the default solana keypair
    /// and the deployed program id.
    pub fn from_env() -> ClientResult<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars<F>(get: F) -> ClientResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cluster = get(ENV_PROVIDER_URL)
            .map(|url| RpcCluster::from_moniker_or_url(&url))
            .unwrap_or_default();
        let keypair_path = get(ENV_WALLET)
            .map(PathBuf::from)
            .unwrap_or_else(|| default_keypair_path(get("HOME")));
        let program_id = match get(ENV_PROGRAM_ID) {
            Some(id) => parse_program_id(&id)?,
            None => DELEGATION_PROGRAM_ID,
        };
        Ok(Self {
            rpc_provider_config: RpcProviderConfig::new(
                cluster,
                Some(CommitmentLevel::Confirmed),
            ),
            program_id,
            keypair_path,
        })
    }

    pub fn read_keypair(&self) -> ClientResult<Keypair> {
        read_keypair_file(&self.keypair_path).map_err(|err| {
            ClientError::KeypairRead {
                path: self.keypair_path.clone(),
                reason: err.to_string(),
            }
        })
    }
}

pub fn parse_program_id(id: &str) -> ClientResult<Pubkey> {
    Pubkey::from_str(id.trim()).map_err(|err| {
        ClientError::InvalidConfig(format!(
            "Invalid program id '{}': {}",
            id, err
        ))
    })
}

fn default_keypair_path(home: Option<String>) -> PathBuf {
    home.map(PathBuf::from)
        .unwrap_or_default()
        .join(DEFAULT_KEYPAIR_PATH)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from_map(vars: &[(&str, &str)]) -> ClientResult<DelegationClientConfig> {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        DelegationClientConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = from_map(&[("HOME", "/home/solana")]).unwrap();
        assert_eq!(config.rpc_provider_config.url(), "http://localhost:8899");
        assert_eq!(config.program_id, DELEGATION_PROGRAM_ID);
        assert_eq!(
            config.keypair_path,
            PathBuf::from("/home/solana/.config/solana/id.json")
        );
    }

    #[test]
    fn test_overrides() {
        let program_id = Pubkey::new_unique();
        let config = from_map(&[
            (ENV_PROVIDER_URL, "devnet"),
            (ENV_WALLET, "/tmp/wallet.json"),
            (ENV_PROGRAM_ID, &program_id.to_string()),
        ])
        .unwrap();
        assert_eq!(config.rpc_provider_config.cluster(), &RpcCluster::Devnet);
        assert_eq!(config.keypair_path, PathBuf::from("/tmp/wallet.json"));
        assert_eq!(config.program_id, program_id);
    }

    #[test]
    fn test_custom_provider_url() {
        let config =
            from_map(&[(ENV_PROVIDER_URL, "http://127.0.0.1:8899")]).unwrap();
        assert_eq!(config.rpc_provider_config.url(), "http://127.0.0.1:8899");
        assert_eq!(
            config.rpc_provider_config.ws_url(),
            "ws://127.0.0.1:8900/"
        );
    }

    #[test]
    fn test_missing_keypair_file() {
        let config =
            from_map(&[(ENV_WALLET, "/nonexistent/delegate-wallet.json")])
                .unwrap();
        let res = config.read_keypair();
        assert!(matches!(res, Err(ClientError::KeypairRead { .. })));
    }

    #[test]
    fn test_invalid_program_id() {
        let res = from_map(&[(ENV_PROGRAM_ID, "not-a-pubkey")]);
        assert!(matches!(res, Err(ClientError::InvalidConfig(_))));
    }
}
