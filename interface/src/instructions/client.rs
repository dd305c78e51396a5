//! Client-side instruction builders for the counter program.

use solana_address::Address;
use solana_instruction::{
    AccountMeta,
    Instruction,
};

use crate::{
    instructions::CounterInstruction,
    program,
};

impl CounterInstruction {
    /// Builds the instruction targeting `counter`, which must sign and is written to.
    pub fn create_instruction(&self, counter: Address) -> Instruction {
        Instruction::new_with_bytes(
            program::ID,
            self.pack().as_ref(),
            std::vec![AccountMeta::new(counter, true)],
        )
    }
}
