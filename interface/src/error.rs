use pinocchio::error::ProgramError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(
    any(test, feature = "client"),
    derive(strum_macros::FromRepr, strum_macros::EnumIter)
)]
#[repr(u8)]
pub enum CounterError {
    UnknownInstruction,
    MalformedInstruction,
    InvalidAccountData,
    MissingSignature,
    Overflow,
    Underflow,
    NotEnoughAccountKeys,
    InvalidAccountOwner,
    AccountNotWritable,
}

impl From<CounterError> for ProgramError {
    #[inline(always)]
    fn from(e: CounterError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl From<CounterError> for &'static str {
    fn from(value: CounterError) -> Self {
        match value {
            CounterError::UnknownInstruction => "Unknown instruction opcode",
            CounterError::MalformedInstruction => "Instruction data length doesn't match the opcode",
            CounterError::InvalidAccountData => "Counter account data must be exactly 4 bytes",
            CounterError::MissingSignature => "Counter account must sign the transaction",
            CounterError::Overflow => "Counter overflowed u32::MAX",
            CounterError::Underflow => "Counter can't go below zero",
            CounterError::NotEnoughAccountKeys => "No counter account was passed",
            CounterError::InvalidAccountOwner => "Counter account isn't owned by the program",
            CounterError::AccountNotWritable => "Counter account isn't writable",
        }
    }
}

#[cfg(not(target_os = "solana"))]
impl core::fmt::Display for CounterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub type CounterResult = Result<(), CounterError>;
