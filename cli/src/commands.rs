use delegation_client::{
    find_delegate_account, DelegatedAccount, DelegationClient,
    TransactionReceipt, LAMPORTS_PER_SOL,
};
use log::*;
use serde_json::json;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};

use crate::{
    cli_args::{CliArgs, Commands, OutputFormat},
    errors::{CliError, CliResult},
};

pub async fn run(args: CliArgs) -> CliResult<()> {
    let config = args.client_config()?;
    debug!("Using {:?}", config);
    let output = args.output;

    match args.command {
        Commands::Initialize { amount, sol } => {
            let amount = deposit_amount(amount, sol)?;
            let client = DelegationClient::try_new(config)?;
            let receipt = client.initialize_delegate(amount).await?;
            print_receipt(output, &receipt)
        }
        Commands::Withdraw { amount } => {
            let client = DelegationClient::try_new(config)?;
            let receipt = client.withdraw(amount).await?;
            print_receipt(output, &receipt)
        }
        Commands::FindDelegate { owner } => {
            let owner = match owner {
                Some(owner) => owner,
                None => config.read_keypair()?.pubkey(),
            };
            let (address, bump) =
                find_delegate_account(&owner, &config.program_id)?;
            match output {
                OutputFormat::Text => {
                    println!("Delegate account: {}", address);
                    println!("Bump: {}", bump);
                }
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({
                        "owner": owner.to_string(),
                        "programId": config.program_id.to_string(),
                        "delegateAccount": address.to_string(),
                        "bump": bump,
                    }))?
                ),
            }
            Ok(())
        }
        Commands::Show { owner } => {
            // Reading needs no signature, a throwaway payer is enough when
            // the owner is given explicitly.
            let (owner, client) = match owner {
                Some(owner) => (
                    owner,
                    DelegationClient::new_with_payer(config, Keypair::new()),
                ),
                None => {
                    let client = DelegationClient::try_new(config)?;
                    (client.payer(), client)
                }
            };
            let state = client.fetch_delegate_account(&owner).await?;
            print_delegated_account(output, &owner, state.as_ref())
        }
    }
}

fn deposit_amount(
    lamports: Option<u64>,
    sol: Option<u64>,
) -> CliResult<Option<u64>> {
    match (lamports, sol) {
        (Some(lamports), _) => Ok(Some(lamports)),
        (None, Some(sol)) => sol
            .checked_mul(LAMPORTS_PER_SOL)
            .map(Some)
            .ok_or(CliError::DepositOverflow(sol)),
        (None, None) => Ok(None),
    }
}

fn print_receipt(
    output: OutputFormat,
    receipt: &TransactionReceipt,
) -> CliResult<()> {
    match output {
        OutputFormat::Text => {
            println!("Your transaction signature {}", receipt)
        }
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "signature": receipt.to_string(),
            }))?
        ),
    }
    Ok(())
}

fn print_delegated_account(
    output: OutputFormat,
    owner: &Pubkey,
    state: Option<&DelegatedAccount>,
) -> CliResult<()> {
    match (output, state) {
        (OutputFormat::Text, None) => {
            println!("No delegated account for {}", owner)
        }
        (OutputFormat::Text, Some(state)) => {
            println!("Owner: {}", state.owner);
            println!("Delegated amount: {} lamports", state.delegated_amount);
            println!("Last deposit time: {}", state.last_deposit_time);
            println!("Bump: {}", state.bump);
        }
        (OutputFormat::Json, state) => println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "owner": owner.to_string(),
                "delegatedAccount": state.map(|state| json!({
                    "delegatedAmount": state.delegated_amount,
                    "lastDepositTime": state.last_deposit_time,
                    "bump": state.bump,
                })),
            }))?
        ),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposit_amount() {
        assert_eq!(deposit_amount(None, None).unwrap(), None);
        assert_eq!(deposit_amount(Some(0), None).unwrap(), Some(0));
        assert_eq!(
            deposit_amount(None, Some(1)).unwrap(),
            Some(1_000_000_000)
        );
    }

    #[test]
    fn test_deposit_overflow() {
        assert!(matches!(
            deposit_amount(None, Some(u64::MAX)),
            Err(CliError::DepositOverflow(u64::MAX))
        ));
    }
}
