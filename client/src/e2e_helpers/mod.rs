use anyhow::Context;
use counter_interface::{
    instructions::CounterInstruction,
    state::counter::COUNTER_ACCOUNT_SIZE,
};
use solana_address::Address;
use solana_sdk::{
    signature::{
        Keypair,
        Signature,
    },
    signer::Signer,
};

use crate::{
    context::counter::CounterContext,
    logs::{
        log_count_update,
        log_info,
    },
    transactions::CustomRpcClient,
};

pub mod test_accounts;

/// An end-to-end harness for a single counter account on a running validator.
///
/// The default payer funds the account creation and pays every transaction fee, while the counter
/// keypair co-signs each instruction as the counter's authority.
pub struct E2e {
    pub rpc: CustomRpcClient,
    pub counter: CounterContext,
    payer: Keypair,
    counter_keypair: Keypair,
}

impl E2e {
    /// Funds the default payer, then creates the 4-byte program-owned counter account for
    /// `counter_keypair` unless it already exists with the right owner and size.
    pub async fn new_counter(
        rpc: Option<CustomRpcClient>,
        counter_keypair: Keypair,
    ) -> anyhow::Result<Self> {
        let rpc = rpc.unwrap_or_default();
        let payer = test_accounts::default_payer().insecure_clone();
        rpc.fund_account(&payer.pubkey()).await?;

        let counter = CounterContext::new(counter_keypair.pubkey());

        match rpc.client.get_account(&counter.counter) {
            Ok(existing) => {
                if existing.owner != counter::ID || existing.data.len() != COUNTER_ACCOUNT_SIZE {
                    return Err(anyhow::Error::msg(format!(
                        "Account {} already exists but isn't a counter account",
                        counter.counter
                    )));
                }
                log_info("Reusing counter", counter.counter);
            }
            Err(_) => {
                let lamports = rpc
                    .client
                    .get_minimum_balance_for_rent_exemption(COUNTER_ACCOUNT_SIZE)
                    .context("Couldn't fetch the rent-exempt minimum")?;
                let create = counter.create_account(&payer.pubkey(), lamports);
                rpc.send_and_confirm_txn(&payer, &[&counter_keypair], &[create])
                    .await?;
            }
        }

        Ok(Self {
            rpc,
            counter,
            payer,
            counter_keypair,
        })
    }

    pub fn counter_address(&self) -> Address {
        self.counter.counter
    }

    pub fn view_count(&self) -> anyhow::Result<u32> {
        self.rpc.get_count(&self.counter.counter)
    }

    /// Sends `instruction` against the counter and logs the count before and after.
    pub async fn send(&self, instruction: CounterInstruction) -> anyhow::Result<Signature> {
        let before = self.view_count()?;
        let sig = self
            .rpc
            .send_and_confirm_txn(
                &self.payer,
                &[&self.counter_keypair],
                &[self.counter.instruction(instruction)],
            )
            .await?;
        log_count_update(instruction.tag(), before, self.view_count()?);

        Ok(sig)
    }

    pub async fn send_init(&self) -> anyhow::Result<Signature> {
        self.send(CounterInstruction::Init).await
    }

    pub async fn send_double(&self) -> anyhow::Result<Signature> {
        self.send(CounterInstruction::Double).await
    }

    pub async fn send_half(&self) -> anyhow::Result<Signature> {
        self.send(CounterInstruction::Half).await
    }

    pub async fn send_add(&self, amount: u32) -> anyhow::Result<Signature> {
        self.send(CounterInstruction::Add { amount }).await
    }

    pub async fn send_subtract(&self, amount: u32) -> anyhow::Result<Signature> {
        self.send(CounterInstruction::Subtract { amount }).await
    }
}
