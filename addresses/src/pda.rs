use std::iter;

use log::*;
use paste::paste;
use solana_sdk::{hash::Hasher, pubkey::Pubkey};

use crate::{
    consts::{DELEGATE, MAX_SEEDS, MAX_SEED_LEN, PDA_MARKER},
    errors::{DerivationError, DerivationResult},
};

// -----------------
// Derivation
// -----------------

/// Hashes `seeds` (the bump already included as the last seed) together with
/// the program id and fails when the result is a valid ed25519 point, since
/// such an address could have a private key.
pub fn create_program_address(
    seeds: &[&[u8]],
    program_id: &Pubkey,
) -> DerivationResult<Pubkey> {
    if seeds.len() > MAX_SEEDS {
        return Err(DerivationError::TooManySeeds { count: seeds.len() });
    }
    check_seed_lengths(seeds)?;

    let mut hasher = Hasher::default();
    for seed in seeds {
        hasher.hash(seed);
    }
    hasher.hash(program_id.as_ref());
    hasher.hash(PDA_MARKER);
    let address = Pubkey::new_from_array(hasher.result().to_bytes());

    if address.is_on_curve() {
        Err(DerivationError::OnCurve)
    } else {
        Ok(address)
    }
}

/// Finds the canonical program derived address for `seeds`, trying bumps
/// from 255 down to 1 and returning the first one that lands off the curve.
pub fn derive_program_address(
    seeds: &[&[u8]],
    program_id: &Pubkey,
) -> DerivationResult<(Pubkey, u8)> {
    if seeds.is_empty() {
        return Err(DerivationError::NoSeeds);
    }
    // One slot is reserved for the bump.
    if seeds.len() >= MAX_SEEDS {
        return Err(DerivationError::TooManySeeds { count: seeds.len() });
    }
    check_seed_lengths(seeds)?;

    let (address, bump) = find_bump_with(|bump| {
        let bump_seed = [bump];
        let seeds_with_bump = seeds
            .iter()
            .copied()
            .chain(iter::once(&bump_seed[..]))
            .collect::<Vec<_>>();
        create_program_address(&seeds_with_bump, program_id)
    })?;
    trace!(
        "Derived {} (bump {}) for program {}",
        address,
        bump,
        program_id
    );
    Ok((address, bump))
}

fn check_seed_lengths(seeds: &[&[u8]]) -> DerivationResult<()> {
    match seeds
        .iter()
        .enumerate()
        .find(|(_, seed)| seed.len() > MAX_SEED_LEN)
    {
        Some((index, seed)) => Err(DerivationError::SeedTooLong {
            index,
            len: seed.len(),
        }),
        None => Ok(()),
    }
}

/// Bump 0 is never tried, same as `Pubkey::find_program_address`.
fn find_bump_with<F>(mut try_bump: F) -> DerivationResult<(Pubkey, u8)>
where
    F: FnMut(u8) -> DerivationResult<Pubkey>,
{
    for bump in (1..=u8::MAX).rev() {
        match try_bump(bump) {
            Ok(address) => return Ok((address, bump)),
            Err(DerivationError::OnCurve) => continue,
            Err(err) => return Err(err),
        }
    }
    Err(DerivationError::NoValidBumpFound)
}

// -----------------
// Seeds
// -----------------
macro_rules! seeds {
    ($prefix:ident, $bytes_const:expr) => {
        paste! {
            #[allow(clippy::needless_lifetimes)]
            pub fn [<$prefix _seeds>]<'a>(pda_id: &'a [u8]) -> [&'a [u8]; 2] {
                [$bytes_const, pda_id]
            }
            #[allow(clippy::needless_lifetimes)]
            pub fn [<$prefix _seeds_with_bump>]<'a>(pda_id: &'a [u8], bump: &'a [u8; 1]) -> [&'a [u8]; 3] {
                [$bytes_const, pda_id, bump]
            }
            #[allow(clippy::needless_lifetimes)]
            pub fn [<$prefix _seeds_from_pubkey>]<'a>(pda_id: &'a ::solana_sdk::pubkey::Pubkey) -> [&'a [u8]; 2] {
                [$bytes_const, pda_id.as_ref()]
            }
            #[allow(clippy::needless_lifetimes)]
            pub fn [<$prefix _seeds_with_bump_from_pubkey>]<'a>(
                pda_id: &'a ::solana_sdk::pubkey::Pubkey,
                bump: &'a [u8; 1],
            ) -> [&'a [u8]; 3] {
                [$bytes_const, pda_id.as_ref(), bump]
            }
        }
    };
}

// -----------------
// PDA
// -----------------
macro_rules! pda {
    ($prefix:ident) => {
        paste! {
            pub fn [<$prefix _pda_with_bump>](
                pda_id: &[u8],
                program_id: &::solana_sdk::pubkey::Pubkey,
            ) -> DerivationResult<(::solana_sdk::pubkey::Pubkey, u8)> {
                let seeds = [<$prefix _seeds>](pda_id);
                derive_program_address(&seeds, program_id)
            }
            pub fn [<$prefix _pda>](
                pda_id: &[u8],
                program_id: &::solana_sdk::pubkey::Pubkey,
            ) -> DerivationResult<::solana_sdk::pubkey::Pubkey> {
                [<$prefix _pda_with_bump>](pda_id, program_id).map(|(pda, _)| pda)
            }
            pub fn [<$prefix _pda_with_bump_from_pubkey>](
                pda_id: &::solana_sdk::pubkey::Pubkey,
                program_id: &::solana_sdk::pubkey::Pubkey,
            ) -> DerivationResult<(::solana_sdk::pubkey::Pubkey, u8)> {
                let seeds = [<$prefix _seeds_from_pubkey>](pda_id);
                derive_program_address(&seeds, program_id)
            }
            pub fn [<$prefix _pda_from_pubkey>](
                pda_id: &::solana_sdk::pubkey::Pubkey,
                program_id: &::solana_sdk::pubkey::Pubkey,
            ) -> DerivationResult<::solana_sdk::pubkey::Pubkey> {
                [<$prefix _pda_with_bump_from_pubkey>](pda_id, program_id).map(|(pda, _)| pda)
            }
        }
    };
}

seeds! { delegate, DELEGATE }
pda! { delegate }
