use std::sync::Mutex;

use async_trait::async_trait;
use delegation_core::{
    errors::{CoreError, CoreResult},
    DelegateOperation, TransactionExecutor, TransactionReceipt,
};
use solana_sdk::{
    instruction::Instruction, pubkey::Pubkey, signature::Signature,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ExecutedOperation {
    pub program_id: Pubkey,
    pub operation: DelegateOperation,
    pub instruction: Instruction,
    pub receipt: TransactionReceipt,
}

/// Records every operation it is asked to execute and confirms it with a
/// unique signature, unless told to reject submissions.
pub struct TransactionExecutorStub {
    payer: Pubkey,
    rejection: Option<String>,
    executed: Mutex<Vec<ExecutedOperation>>,
}

impl Default for TransactionExecutorStub {
    fn default() -> Self {
        Self::new(Pubkey::new_unique())
    }
}

impl TransactionExecutorStub {
    pub fn new(payer: Pubkey) -> Self {
        Self {
            payer,
            rejection: None,
            executed: Mutex::default(),
        }
    }

    pub fn rejecting(payer: Pubkey, reason: &str) -> Self {
        Self {
            rejection: Some(reason.to_string()),
            ..Self::new(payer)
        }
    }

    pub fn executed(&self) -> Vec<ExecutedOperation> {
        self.executed.lock().unwrap().clone()
    }
}

#[async_trait]
impl TransactionExecutor for TransactionExecutorStub {
    fn payer(&self) -> Pubkey {
        self.payer
    }

    async fn execute(
        &self,
        program_id: &Pubkey,
        operation: &DelegateOperation,
    ) -> CoreResult<TransactionReceipt> {
        let instruction = operation.instruction(program_id, &self.payer)?;
        if let Some(reason) = &self.rejection {
            return Err(CoreError::SubmissionRejected(reason.clone()));
        }
        let receipt = TransactionReceipt::new(Signature::new_unique());
        self.executed.lock().unwrap().push(ExecutedOperation {
            program_id: *program_id,
            operation: *operation,
            instruction,
            receipt,
        });
        Ok(receipt)
    }
}
