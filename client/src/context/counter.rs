//! Counter-level context holding the counter account address and helpers for building every
//! instruction that targets it.

use counter_interface::{
    instructions::CounterInstruction,
    state::counter::COUNTER_ACCOUNT_SIZE,
};
use solana_address::Address;
use solana_instruction::Instruction;
use solana_system_interface::instruction::create_account;

#[derive(Clone, Copy, Debug)]
pub struct CounterContext {
    pub counter: Address,
}

impl CounterContext {
    pub const fn new(counter: Address) -> Self {
        Self { counter }
    }

    /// Builds the system program instruction that allocates the 4-byte counter account and
    /// assigns it to the counter program. Both `payer` and the counter account must sign.
    pub fn create_account(&self, payer: &Address, lamports: u64) -> Instruction {
        create_account(
            payer,
            &self.counter,
            lamports,
            COUNTER_ACCOUNT_SIZE as u64,
            &counter::ID,
        )
    }

    pub fn instruction(&self, instruction: CounterInstruction) -> Instruction {
        instruction.create_instruction(self.counter)
    }

    pub fn init(&self) -> Instruction {
        self.instruction(CounterInstruction::Init)
    }

    pub fn double(&self) -> Instruction {
        self.instruction(CounterInstruction::Double)
    }

    pub fn half(&self) -> Instruction {
        self.instruction(CounterInstruction::Half)
    }

    pub fn add(&self, amount: u32) -> Instruction {
        self.instruction(CounterInstruction::Add { amount })
    }

    pub fn subtract(&self, amount: u32) -> Instruction {
        self.instruction(CounterInstruction::Subtract { amount })
    }
}
