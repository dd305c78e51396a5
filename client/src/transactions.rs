use std::time::Duration;

use anyhow::Context;
use colored::Colorize;
use counter_interface::{
    error::CounterError,
    instructions::InstructionTag,
    state::{
        counter::CounterAccount,
        transmutable::load,
    },
};
use solana_address::Address;
use solana_client::{
    client_error::{
        ClientError,
        ClientErrorKind,
    },
    rpc_client::RpcClient,
    rpc_response::RpcSimulateTransactionResult,
};
use solana_commitment_config::CommitmentConfig;
use solana_compute_budget_interface::ComputeBudgetInstruction;
use solana_instruction::Instruction;
use solana_sdk::{
    message::Message,
    signature::{
        Keypair,
        Signature,
        Signer,
    },
    transaction::Transaction,
};

use crate::logs::{
    log_error,
    log_info,
    log_success,
    log_warning,
    LogColor,
};

pub const DEFAULT_RPC_URL: &str = "http://localhost:8899";
pub const DEFAULT_FUND_AMOUNT: u64 = 10_000_000_000;

/// How many times an airdrop's confirmation is polled before giving up.
const AIRDROP_CONFIRMATION_ATTEMPTS: usize = 10;
const AIRDROP_POLL_INTERVAL: Duration = Duration::from_millis(500);

pub struct SendTransactionConfig {
    pub compute_budget: Option<u32>,
    pub debug_logs: Option<bool>,
}

impl Default for SendTransactionConfig {
    fn default() -> Self {
        SendTransactionConfig {
            compute_budget: Default::default(),
            debug_logs: Some(true),
        }
    }
}

/// An [`RpcClient`] at `confirmed` commitment paired with the config used for every transaction
/// it sends.
pub struct CustomRpcClient {
    pub client: RpcClient,
    pub config: SendTransactionConfig,
}

impl Default for CustomRpcClient {
    fn default() -> Self {
        Self::new(DEFAULT_RPC_URL, SendTransactionConfig::default())
    }
}

impl CustomRpcClient {
    pub fn new(url: impl ToString, config: SendTransactionConfig) -> Self {
        Self {
            client: RpcClient::new_with_commitment(url.to_string(), CommitmentConfig::confirmed()),
            config,
        }
    }

    /// Airdrops [`DEFAULT_FUND_AMOUNT`] lamports to `account` and waits for confirmation.
    pub async fn fund_account(&self, account: &Address) -> anyhow::Result<()> {
        let airdrop_signature = self
            .client
            .request_airdrop(account, DEFAULT_FUND_AMOUNT)
            .context("Failed to request airdrop")?;

        for _ in 0..AIRDROP_CONFIRMATION_ATTEMPTS {
            if self
                .client
                .confirm_transaction(&airdrop_signature)
                .context("Couldn't confirm transaction")?
            {
                return Ok(());
            }
            tokio::time::sleep(AIRDROP_POLL_INTERVAL).await;
        }

        log_warning("Unconfirmed airdrop", airdrop_signature);
        Err(anyhow::Error::msg(format!(
            "Airdrop to {account} wasn't confirmed"
        )))
    }

    /// Sends `instructions` in one transaction where `signer` is both the fee payer and the only
    /// signer.
    pub async fn send_single_signer(
        &self,
        signer: &Keypair,
        instructions: impl AsRef<[Instruction]>,
    ) -> anyhow::Result<Signature> {
        self.send_and_confirm_txn(signer, &[], instructions.as_ref())
            .await
    }

    pub async fn send_and_confirm_txn(
        &self,
        payer: &Keypair,
        signers: &[&Keypair],
        instructions: &[Instruction],
    ) -> anyhow::Result<Signature> {
        let bh = self
            .client
            .get_latest_blockhash()
            .context("Couldn't fetch the latest blockhash")?;

        let SendTransactionConfig {
            compute_budget,
            debug_logs,
        } = self.config;

        let msg = Message::new(
            &[
                compute_budget.map_or(vec![], |budget| {
                    vec![
                        ComputeBudgetInstruction::set_compute_unit_limit(budget),
                        ComputeBudgetInstruction::set_compute_unit_price(1),
                    ]
                }),
                instructions.to_vec(),
            ]
            .concat(),
            Some(&payer.pubkey()),
        );

        let mut tx = Transaction::new_unsigned(msg);
        tx.try_sign(
            &std::iter::once(payer)
                .chain(signers.iter().cloned())
                .collect::<Vec<_>>(),
            bh,
        )
        .context("Couldn't sign the transaction")?;

        match self.client.send_and_confirm_transaction(&tx) {
            Ok(sig) => {
                if matches!(debug_logs, Some(true)) {
                    let sender_info =
                        format!("{}: {}", "sender".color(LogColor::Gray), payer.pubkey());
                    log_success("Signature", format!("{sig}\n{sender_info}"));
                }
                Ok(sig)
            }
            Err(error) => {
                log_instruction_error(&error, instructions);
                log_info("Payer", payer.pubkey());

                Err(error).context("Failed transaction submission")
            }
        }
    }

    /// Fetches the counter account and decodes its count.
    pub fn get_count(&self, counter: &Address) -> anyhow::Result<u32> {
        let data = self
            .client
            .get_account_data(counter)
            .with_context(|| format!("Couldn't fetch counter account {counter}"))?;

        // Safety: All bit patterns are valid.
        unsafe { load::<CounterAccount>(&data) }
            .map(CounterAccount::count)
            .map_err(|e| anyhow::Error::msg(format!("{counter}: {e}")))
    }
}

/// Logs the decoded [`CounterError`] and instruction tag for a preflight failure caused by the
/// counter program. Anything else is logged as a generic error.
pub fn log_instruction_error(error: &ClientError, instructions: &[Instruction]) {
    use solana_client::rpc_request::{
        RpcError::RpcResponseError,
        RpcResponseErrorData,
    };
    use solana_instruction_error::InstructionError;
    use solana_transaction_error::TransactionError;

    let kind = error.kind();
    let ClientErrorKind::RpcError(RpcResponseError {
        data:
            RpcResponseErrorData::SendTransactionPreflightFailure(RpcSimulateTransactionResult {
                err: Some(ui_err),
                ..
            }),
        ..
    }) = kind
    else {
        log_error("Generic error", error);
        return;
    };

    let TransactionError::InstructionError(ixn_idx, ixn_error) = ui_err.clone().into() else {
        log_error("Transaction error", error);
        return;
    };

    let Some(instruction) = instructions.get(ixn_idx as usize) else {
        log_error("Instruction error", ixn_error);
        return;
    };

    match ixn_error {
        InstructionError::Custom(code) if instruction.program_id == counter::ID => {
            let error = u8::try_from(code).ok().and_then(CounterError::from_repr);
            let tag = instruction
                .data
                .first()
                .and_then(|tag| InstructionTag::try_from(*tag).ok());
            match (tag, error) {
                (Some(tag), Some(error)) => log_error("Counter error", format!("({tag}, {error})")),
                _ => log_error("Unrecognized counter error", code),
            }
        }
        other => log_error("Instruction error", other),
    }
}
