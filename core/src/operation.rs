use std::fmt;

use borsh::BorshSerialize;
use delegation_addresses::pda::delegate_pda_from_pubkey;
use serde::{Deserialize, Serialize};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};

use crate::{
    discriminator::{instruction_discriminator, DISCRIMINATOR_LEN},
    errors::{CoreError, CoreResult},
};

// -----------------
// DelegateOperation
// -----------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DelegateOperation {
    /// Creates the delegated account of the payer and credits it.
    /// - *amount*: lamports to deposit; `None` sends the instruction
    ///   without any argument which is not the same as depositing `0`
    InitializeDelegate { amount: Option<u64> },
    /// Moves lamports from the delegated account back to its owner.
    Withdraw { amount: u64 },
}

impl DelegateOperation {
    pub fn initialize_delegate(amount: Option<u64>) -> Self {
        Self::InitializeDelegate { amount }
    }

    pub fn withdraw(amount: u64) -> Self {
        Self::Withdraw { amount }
    }

    /// Name of the program method this operation invokes.
    pub fn method_name(&self) -> &'static str {
        match self {
            Self::InitializeDelegate { .. } => "initialize_delegate",
            Self::Withdraw { .. } => "withdraw",
        }
    }

    pub fn amount(&self) -> Option<u64> {
        match self {
            Self::InitializeDelegate { amount } => *amount,
            Self::Withdraw { amount } => Some(*amount),
        }
    }

    /// Instruction data: method discriminator followed by the borsh encoded
    /// amount if one is present.
    pub fn data(&self) -> CoreResult<Vec<u8>> {
        let mut data = Vec::with_capacity(DISCRIMINATOR_LEN + 8);
        data.extend_from_slice(&instruction_discriminator(self.method_name()));
        if let Some(amount) = self.amount() {
            BorshSerialize::serialize(&amount, &mut data).map_err(|err| {
                CoreError::FailedToEncodeInstruction(format!(
                    "{}: {}",
                    self, err
                ))
            })?;
        }
        Ok(data)
    }

    /// Both methods take the same accounts: the owner paying and signing,
    /// the owner's delegated account and the system program.
    pub fn instruction(
        &self,
        program_id: &Pubkey,
        owner: &Pubkey,
    ) -> CoreResult<Instruction> {
        let delegated_account = delegate_pda_from_pubkey(owner, program_id)?;
        Ok(Instruction {
            program_id: *program_id,
            accounts: vec![
                AccountMeta::new(*owner, true),
                AccountMeta::new(delegated_account, false),
                AccountMeta::new_readonly(system_program::id(), false),
            ],
            data: self.data()?,
        })
    }
}

impl fmt::Display for DelegateOperation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.amount() {
            Some(amount) => {
                write!(f, "{}(amount: {})", self.method_name(), amount)
            }
            None => write!(f, "{}()", self.method_name()),
        }
    }
}
