#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod context;
mod debug;
mod instructions;
mod validation;

#[cfg(not(feature = "no-entrypoint"))]
mod entrypoint;

pub use counter_interface::program::ID;
use counter_interface::instructions::CounterInstruction;
use pinocchio::{
    AccountView,
    Address,
    ProgramResult,
};

use crate::instructions::process_update_count;

#[inline(always)]
pub fn process_instruction(
    _program_id: &Address,
    accounts: &[AccountView],
    instruction_data: &[u8],
) -> ProgramResult {
    let instruction = CounterInstruction::unpack(instruction_data)?;
    debug!("Instruction tag: {}", instruction.tag() as u8);

    process_update_count(accounts, &instruction)
}
