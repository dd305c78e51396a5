use crate::{
    error::CounterError,
    pack::Pack,
    state::transmutable::Transmutable,
};

pub mod amount;
#[cfg(feature = "client")]
pub mod client;

use amount::AmountInstructionData;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(test, derive(strum_macros::FromRepr, strum_macros::EnumIter))]
#[cfg_attr(feature = "client", derive(strum_macros::Display))]
pub enum InstructionTag {
    Init,
    Double,
    Half,
    Add,
    Subtract,
}

impl TryFrom<u8> for InstructionTag {
    type Error = CounterError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            // SAFETY: A valid enum variant is guaranteed with the match pattern.
            // All variants are checked in the exhaustive instruction tag test.
            0..5 => Ok(unsafe { core::mem::transmute::<u8, Self>(value) }),
            _ => Err(CounterError::UnknownInstruction),
        }
    }
}

/// A decoded counter instruction. Exactly one is applied per invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterInstruction {
    /// Sets the count to `1`, whatever it was before.
    Init,
    /// Doubles the count, failing on overflow.
    Double,
    /// Halves the count, truncating.
    Half,
    /// Adds `amount` to the count, failing on overflow.
    Add { amount: u32 },
    /// Subtracts `amount` from the count, failing if `amount` exceeds it.
    Subtract { amount: u32 },
}

/// The longest encoded instruction: a tag byte followed by a `u32` operand.
pub const MAX_INSTRUCTION_LEN: usize = 1 + AmountInstructionData::LEN;

impl CounterInstruction {
    pub fn tag(&self) -> InstructionTag {
        match self {
            Self::Init => InstructionTag::Init,
            Self::Double => InstructionTag::Double,
            Self::Half => InstructionTag::Half,
            Self::Add { .. } => InstructionTag::Add,
            Self::Subtract { .. } => InstructionTag::Subtract,
        }
    }

    /// Decodes raw instruction data. The tag byte is checked first, then the buffer length must
    /// match the tag exactly; trailing bytes are rejected.
    pub fn unpack(instruction_data: &[u8]) -> Result<Self, CounterError> {
        let [tag, remaining @ ..] = instruction_data else {
            return Err(CounterError::MalformedInstruction);
        };

        match InstructionTag::try_from(*tag)? {
            InstructionTag::Init => expect_untagged_empty(remaining).map(|_| Self::Init),
            InstructionTag::Double => expect_untagged_empty(remaining).map(|_| Self::Double),
            InstructionTag::Half => expect_untagged_empty(remaining).map(|_| Self::Half),
            InstructionTag::Add => Ok(Self::Add {
                amount: AmountInstructionData::unpack_untagged(remaining)?,
            }),
            InstructionTag::Subtract => Ok(Self::Subtract {
                amount: AmountInstructionData::unpack_untagged(remaining)?,
            }),
        }
    }

    pub fn pack(&self) -> PackedInstruction {
        let mut bytes = [0u8; MAX_INSTRUCTION_LEN];
        bytes[0] = self.tag() as u8;
        let len = match self {
            Self::Init | Self::Double | Self::Half => 1,
            Self::Add { amount } | Self::Subtract { amount } => {
                bytes[1..].copy_from_slice(&AmountInstructionData::new(*amount).pack());
                MAX_INSTRUCTION_LEN
            }
        };

        PackedInstruction { bytes, len }
    }

    /// The count after applying this instruction to `count`.
    ///
    /// `Half` and `Init` can't fail. `Double` and `Add` fail with [`CounterError::Overflow`] past
    /// `u32::MAX`, and `Subtract` fails with [`CounterError::Underflow`] below zero.
    #[inline(always)]
    pub fn next_count(&self, count: u32) -> Result<u32, CounterError> {
        match self {
            Self::Init => Ok(1),
            Self::Double => count.checked_mul(2).ok_or(CounterError::Overflow),
            Self::Half => Ok(count / 2),
            Self::Add { amount } => count.checked_add(*amount).ok_or(CounterError::Overflow),
            Self::Subtract { amount } => count.checked_sub(*amount).ok_or(CounterError::Underflow),
        }
    }
}

#[inline(always)]
fn expect_untagged_empty(remaining: &[u8]) -> Result<(), CounterError> {
    if remaining.is_empty() {
        Ok(())
    } else {
        Err(CounterError::MalformedInstruction)
    }
}

/// An encoded instruction held inline, since the longest one is only [`MAX_INSTRUCTION_LEN`]
/// bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PackedInstruction {
    bytes: [u8; MAX_INSTRUCTION_LEN],
    len: usize,
}

impl AsRef<[u8]> for PackedInstruction {
    fn as_ref(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}
