use std::fmt;

use serde::{Deserialize, Serialize};
use solana_sdk::signature::Signature;

/// Confirmation handed back once the cluster accepted a submitted
/// operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct TransactionReceipt {
    pub signature: Signature,
}

impl TransactionReceipt {
    pub fn new(signature: Signature) -> Self {
        Self { signature }
    }

    /// A receipt carrying the all zero signature does not identify any
    /// transaction.
    pub fn is_empty(&self) -> bool {
        self.signature == Signature::default()
    }
}

impl From<Signature> for TransactionReceipt {
    fn from(signature: Signature) -> Self {
        Self::new(signature)
    }
}

impl fmt::Display for TransactionReceipt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.signature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_signature_is_empty() {
        assert!(TransactionReceipt::new(Signature::default()).is_empty());
        assert!(!TransactionReceipt::new(Signature::new_unique()).is_empty());
    }

    #[test]
    fn test_display_is_signature() {
        let signature = Signature::new_unique();
        let receipt = TransactionReceipt::from(signature);
        assert_eq!(receipt.to_string(), signature.to_string());
    }
}
