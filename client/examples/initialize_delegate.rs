// Run via: cargo run --example initialize_delegate
//
// Expects a local validator with the delegation program deployed and a
// funded wallet, see `DelegationClientConfig::from_env` for the variables
// that point elsewhere.

use delegation_client::{
    DelegationClient, DelegationClientConfig, LAMPORTS_PER_SOL,
};

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = DelegationClientConfig::from_env().unwrap();
    let client = DelegationClient::try_new(config).unwrap();

    // 1. Initialize with a deposit of 1 SOL
    {
        let receipt = client
            .initialize_delegate(Some(LAMPORTS_PER_SOL))
            .await
            .unwrap();
        println!("Your transaction signature {}", receipt);
    }

    // 2. Find the delegate account of the wallet
    {
        let (delegate_account, bump) = client.own_delegate_account().unwrap();
        println!("Delegate account: {} (bump {})", delegate_account, bump);
    }

    // 3. Read back what was deposited
    {
        let state = client
            .fetch_delegate_account(&client.payer())
            .await
            .unwrap();
        println!("{:#?}", state);
    }
}
