use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use crate::{
    discriminator::{account_discriminator, DISCRIMINATOR_LEN},
    errors::{CoreError, CoreResult},
};

/// Client side view of the account the delegation program keeps per owner
/// at the `["delegate", owner]` PDA.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct DelegatedAccount {
    /// The owner of this delegated account
    pub owner: Pubkey,
    /// Lamports currently delegated
    pub delegated_amount: u64,
    /// Unix timestamp of the last deposit
    pub last_deposit_time: i64,
    /// Bump seed of the PDA
    pub bump: u8,
}

// Pubkey is kept as raw bytes so the layout does not depend on the borsh
// version solana-sdk was built against.
#[derive(BorshSerialize, BorshDeserialize)]
struct DelegatedAccountData {
    owner: [u8; 32],
    delegated_amount: u64,
    last_deposit_time: i64,
    bump: u8,
}

impl DelegatedAccount {
    pub const NAME: &'static str = "DelegatedAccount";

    pub const LEN: usize = DISCRIMINATOR_LEN + // discriminator
        32 + // owner pubkey
        8 +  // delegated_amount
        8 +  // last_deposit_time
        1; // bump

    pub fn discriminator() -> [u8; DISCRIMINATOR_LEN] {
        account_discriminator(Self::NAME)
    }

    pub fn try_from_account_data(data: &[u8]) -> CoreResult<Self> {
        if data.len() < Self::LEN {
            return Err(CoreError::FailedToParseDelegatedAccount(format!(
                "Expected at least {} bytes, got {}",
                Self::LEN,
                data.len()
            )));
        }
        let (discriminator, mut body) = data.split_at(DISCRIMINATOR_LEN);
        if discriminator != Self::discriminator() {
            return Err(CoreError::FailedToParseDelegatedAccount(
                "Invalid account discriminator".to_string(),
            ));
        }
        // Anchor may allocate more space than the struct needs, the trailing
        // bytes are ignored.
        let state = DelegatedAccountData::deserialize(&mut body).map_err(
            |err| {
                CoreError::FailedToParseDelegatedAccount(format!(
                    "Failed to deserialize DelegatedAccount: {}",
                    err
                ))
            },
        )?;
        Ok(Self {
            owner: Pubkey::new_from_array(state.owner),
            delegated_amount: state.delegated_amount,
            last_deposit_time: state.last_deposit_time,
            bump: state.bump,
        })
    }

    pub fn try_to_account_data(&self) -> CoreResult<Vec<u8>> {
        let state = DelegatedAccountData {
            owner: self.owner.to_bytes(),
            delegated_amount: self.delegated_amount,
            last_deposit_time: self.last_deposit_time,
            bump: self.bump,
        };
        let mut data = Self::discriminator().to_vec();
        state.serialize(&mut data).map_err(|err| {
            CoreError::FailedToParseDelegatedAccount(format!(
                "Failed to serialize DelegatedAccount: {}",
                err
            ))
        })?;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> DelegatedAccount {
        DelegatedAccount {
            owner: Pubkey::new_from_array([3; 32]),
            delegated_amount: 1_000_000_000,
            last_deposit_time: 1_717_171_717,
            bump: 254,
        }
    }

    #[test]
    fn test_parse_account_data() {
        let mut data = vec![106, 234, 62, 132, 94, 177, 104, 82];
        data.extend_from_slice(&[3; 32]);
        data.extend_from_slice(&1_000_000_000u64.to_le_bytes());
        data.extend_from_slice(&1_717_171_717i64.to_le_bytes());
        data.push(254);
        assert_eq!(data.len(), DelegatedAccount::LEN);

        let parsed = DelegatedAccount::try_from_account_data(&data).unwrap();
        assert_eq!(parsed, account());
    }

    #[test]
    fn test_to_account_data_layout() {
        let data = account().try_to_account_data().unwrap();
        assert_eq!(data.len(), DelegatedAccount::LEN);
        assert_eq!(data[..8], DelegatedAccount::discriminator());
        assert_eq!(data[8..40], [3; 32]);
        assert_eq!(data[56], 254);
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let mut data = account().try_to_account_data().unwrap();
        data.extend_from_slice(&[0; 16]);
        let parsed = DelegatedAccount::try_from_account_data(&data).unwrap();
        assert_eq!(parsed, account());
    }

    #[test]
    fn test_too_short() {
        let data = account().try_to_account_data().unwrap();
        let res = DelegatedAccount::try_from_account_data(&data[..20]);
        assert!(matches!(
            res,
            Err(CoreError::FailedToParseDelegatedAccount(_))
        ));
    }

    #[test]
    fn test_wrong_discriminator() {
        let mut data = account().try_to_account_data().unwrap();
        data[0] ^= 0xff;
        let res = DelegatedAccount::try_from_account_data(&data);
        assert!(matches!(
            res,
            Err(CoreError::FailedToParseDelegatedAccount(msg)) if msg == "Invalid account discriminator"
        ));
    }
}
