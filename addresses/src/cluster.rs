use std::fmt;

use url::Url;

pub const MAINNET: &str = "https://api.mainnet-beta.solana.com";
pub const TESTNET: &str = "https://api.testnet.solana.com";
pub const DEVNET: &str = "https://api.devnet.solana.com";
pub const DEVELOPMENT: &str = "http://localhost:8899";

pub const WS_MAINNET: &str = "wss://api.mainnet-beta.solana.com/";
pub const WS_TESTNET: &str = "wss://api.testnet.solana.com/";
pub const WS_DEVNET: &str = "wss://api.devnet.solana.com/";
pub const WS_DEVELOPMENT: &str = "ws://localhost:8900";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RpcCluster {
    Mainnet,
    Testnet,
    Devnet,
    #[default]
    Development,
    Custom(String, String),
}

impl RpcCluster {
    pub fn url(&self) -> &str {
        match self {
            RpcCluster::Mainnet => MAINNET,
            RpcCluster::Testnet => TESTNET,
            RpcCluster::Devnet => DEVNET,
            RpcCluster::Development => DEVELOPMENT,
            RpcCluster::Custom(url, _) => url,
        }
    }

    pub fn ws_url(&self) -> &str {
        match self {
            RpcCluster::Mainnet => WS_MAINNET,
            RpcCluster::Testnet => WS_TESTNET,
            RpcCluster::Devnet => WS_DEVNET,
            RpcCluster::Development => WS_DEVELOPMENT,
            RpcCluster::Custom(_, ws_url) => ws_url,
        }
    }

    /// Resolves the monikers the solana tooling understands
    /// (`mainnet`, `testnet`, `devnet`, `localhost` and their one letter
    /// forms) and treats anything else as a custom http URL.
    pub fn from_moniker_or_url(value: &str) -> Self {
        match value.trim() {
            "m" | "mainnet" | "mainnet-beta" => RpcCluster::Mainnet,
            "t" | "testnet" => RpcCluster::Testnet,
            "d" | "devnet" => RpcCluster::Devnet,
            "l" | "localhost" | "localnet" => RpcCluster::Development,
            url => {
                let ws_url = ws_url_for(url);
                RpcCluster::Custom(url.to_string(), ws_url)
            }
        }
    }
}

impl fmt::Display for RpcCluster {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.url())
    }
}

/// Websocket endpoints conventionally listen on the port following the
/// http port. Values that don't parse as http(s) URLs are kept as is.
fn ws_url_for(http_url: &str) -> String {
    let mut url = match Url::parse(http_url) {
        Ok(url) => url,
        Err(_) => return http_url.to_string(),
    };
    let ws_scheme = match url.scheme() {
        "https" => "wss",
        "http" => "ws",
        _ => return http_url.to_string(),
    };
    let port = url.port();
    if url.set_scheme(ws_scheme).is_err() {
        return http_url.to_string();
    }
    if let Some(port) = port {
        if url.set_port(Some(port.saturating_add(1))).is_err() {
            return http_url.to_string();
        }
    }
    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monikers() {
        assert_eq!(RpcCluster::from_moniker_or_url("m"), RpcCluster::Mainnet);
        assert_eq!(
            RpcCluster::from_moniker_or_url("testnet"),
            RpcCluster::Testnet
        );
        assert_eq!(RpcCluster::from_moniker_or_url("d"), RpcCluster::Devnet);
        assert_eq!(
            RpcCluster::from_moniker_or_url("localhost"),
            RpcCluster::Development
        );
    }

    #[test]
    fn test_custom_url_with_port() {
        let cluster = RpcCluster::from_moniker_or_url("http://127.0.0.1:8899");
        assert_eq!(cluster.url(), "http://127.0.0.1:8899");
        assert_eq!(cluster.ws_url(), "ws://127.0.0.1:8900/");
    }

    #[test]
    fn test_custom_url_with_query() {
        let cluster =
            RpcCluster::from_moniker_or_url("http://127.0.0.1:8899?api-key=x");
        assert_eq!(cluster.url(), "http://127.0.0.1:8899?api-key=x");
        assert_eq!(cluster.ws_url(), "ws://127.0.0.1:8900/?api-key=x");
    }

    #[test]
    fn test_custom_url_uppercase_scheme() {
        let cluster =
            RpcCluster::from_moniker_or_url("HTTPS://rpc.example.com:8899");
        assert_eq!(cluster.ws_url(), "wss://rpc.example.com:8900/");
        let cluster = RpcCluster::from_moniker_or_url("HTTP://127.0.0.1:8899");
        assert_eq!(cluster.ws_url(), "ws://127.0.0.1:8900/");
    }

    #[test]
    fn test_custom_url_not_http() {
        let cluster = RpcCluster::from_moniker_or_url("not a url");
        assert_eq!(cluster.ws_url(), "not a url");
    }

    #[test]
    fn test_custom_url_without_port() {
        let cluster =
            RpcCluster::from_moniker_or_url("https://rpc.example.com/abc");
        assert_eq!(cluster.url(), "https://rpc.example.com/abc");
        assert_eq!(cluster.ws_url(), "wss://rpc.example.com/abc");
    }

    #[test]
    fn test_default_is_local_cluster() {
        assert_eq!(RpcCluster::default().url(), DEVELOPMENT);
    }
}
