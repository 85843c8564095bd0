use delegation_addresses::{
    consts::DELEGATION_PROGRAM_ID, pda::delegate_pda_with_bump_from_pubkey,
};
use delegation_core::DelegatedAccount;
use solana_sdk::{account::Account, pubkey, pubkey::Pubkey, system_program};

/// Owner with an all zero key and the delegated account the program derives
/// for it.
pub fn zero_owner_delegate_ids() -> (Pubkey, Pubkey) {
    let owner = Pubkey::new_from_array([0; 32]);
    let delegated_account =
        pubkey!("2RLCEkDES9oUGG9FTJpRVozxVUBpGeos593G67iTp8Kk");
    (owner, delegated_account)
}

pub fn delegated_account_state(
    owner: &Pubkey,
    delegated_amount: u64,
) -> DelegatedAccount {
    let (_, bump) =
        delegate_pda_with_bump_from_pubkey(owner, &DELEGATION_PROGRAM_ID)
            .expect("delegate PDA should derive");
    DelegatedAccount {
        owner: *owner,
        delegated_amount,
        last_deposit_time: 1_700_000_000,
        bump,
    }
}

pub fn account_owned_by_delegation_program(state: &DelegatedAccount) -> Account {
    Account {
        owner: DELEGATION_PROGRAM_ID,
        lamports: state.delegated_amount,
        data: state
            .try_to_account_data()
            .expect("delegated account should serialize"),
        ..Account::default()
    }
}

pub fn account_owned_by_system_program() -> Account {
    Account {
        owner: system_program::id(),
        ..Account::default()
    }
}

pub fn account_with_data() -> Account {
    Account {
        owner: DELEGATION_PROGRAM_ID,
        data: vec![1, 2, 3, 4],
        ..Account::default()
    }
}
