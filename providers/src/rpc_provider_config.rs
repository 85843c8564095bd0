use delegation_addresses::cluster::RpcCluster;
use solana_sdk::commitment_config::{CommitmentConfig, CommitmentLevel};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RpcProviderConfig {
    cluster: RpcCluster,
    commitment: Option<CommitmentLevel>,
}

impl RpcProviderConfig {
    pub fn new(
        cluster: RpcCluster,
        commitment: Option<CommitmentLevel>,
    ) -> Self {
        Self {
            cluster,
            commitment,
        }
    }

    pub fn development() -> Self {
        Self::new(RpcCluster::Development, Some(CommitmentLevel::Confirmed))
    }

    pub fn cluster(&self) -> &RpcCluster {
        &self.cluster
    }

    pub fn url(&self) -> &str {
        self.cluster.url()
    }

    pub fn ws_url(&self) -> &str {
        self.cluster.ws_url()
    }

    pub fn commitment(&self) -> Option<CommitmentLevel> {
        self.commitment
    }

    /// Confirmed unless configured otherwise since the integration flows
    /// read back what they just submitted.
    pub fn commitment_config(&self) -> CommitmentConfig {
        CommitmentConfig {
            commitment: self.commitment.unwrap_or(CommitmentLevel::Confirmed),
        }
    }
}
