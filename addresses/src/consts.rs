use solana_sdk::pubkey::Pubkey;

/// The seed of the delegated account PDA.
pub const DELEGATE: &[u8] = b"delegate";

/// Appended to every hash input when deriving a program address.
pub const PDA_MARKER: &[u8] = b"ProgramDerivedAddress";

/// Max length of a single seed in bytes.
pub const MAX_SEED_LEN: usize = 32;

/// Max number of seeds including the bump.
pub const MAX_SEEDS: usize = 16;

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// The bytes of the program ID of the delegation program
pub const DELEGATION_PROGRAM_ARRAY: [u8; 32] = [
    193, 79, 119, 11, 238, 106, 251, 156, 105, 217, 133, 161, 219, 44, 229,
    121, 18, 156, 30, 252, 198, 85, 190, 221, 216, 242, 201, 147, 37, 237,
    193, 160,
];

/// The program ID of the delegation program
pub const DELEGATION_PROGRAM_ID: Pubkey =
    Pubkey::new_from_array(DELEGATION_PROGRAM_ARRAY);

/// The address of the delegation program
/// NOTE: needs to be updated each time the [DELEGATION_PROGRAM_ARRAY] changes
pub const DELEGATION_PROGRAM_ADDR: &str =
    "E1bxy4HwKFjPARhVe7NjvoFtynN69C4xNA53uSwruHrP";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delegation_program_id() {
        assert_eq!(DELEGATION_PROGRAM_ADDR, DELEGATION_PROGRAM_ID.to_string());
    }

    #[test]
    fn test_seed_limits_match_runtime() {
        assert_eq!(MAX_SEED_LEN, solana_sdk::pubkey::MAX_SEED_LEN);
        assert_eq!(MAX_SEEDS, solana_sdk::pubkey::MAX_SEEDS);
    }
}
