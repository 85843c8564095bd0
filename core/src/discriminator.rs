use solana_sdk::hash::hash;

pub const DISCRIMINATOR_LEN: usize = 8;

/// Discriminator the anchor framework prefixes instruction data with.
pub fn instruction_discriminator(method: &str) -> [u8; DISCRIMINATOR_LEN] {
    sighash("global", method)
}

/// Discriminator the anchor framework prefixes account data with.
pub fn account_discriminator(account: &str) -> [u8; DISCRIMINATOR_LEN] {
    sighash("account", account)
}

fn sighash(namespace: &str, name: &str) -> [u8; DISCRIMINATOR_LEN] {
    let preimage = format!("{}:{}", namespace, name);
    let mut discriminator = [0u8; DISCRIMINATOR_LEN];
    discriminator.copy_from_slice(
        &hash(preimage.as_bytes()).to_bytes()[..DISCRIMINATOR_LEN],
    );
    discriminator
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_discriminators() {
        assert_eq!(
            instruction_discriminator("initialize_delegate"),
            [125, 157, 222, 88, 198, 191, 228, 86]
        );
        assert_eq!(
            instruction_discriminator("withdraw"),
            [183, 18, 70, 156, 148, 109, 161, 34]
        );
    }

    #[test]
    fn test_account_discriminator() {
        assert_eq!(
            account_discriminator("DelegatedAccount"),
            [106, 234, 62, 132, 94, 177, 104, 82]
        );
    }
}
