use core::mem::MaybeUninit;

use static_assertions::const_assert_eq;

use crate::{
    error::CounterError,
    pack::{
        write_bytes,
        Pack,
    },
    state::{
        transmutable::{
            load,
            Transmutable,
        },
        LeU32,
    },
};

/// The operand that follows the tag byte of the `Add` and `Subtract` instructions.
#[repr(C)]
pub struct AmountInstructionData {
    /// The amount to add to or subtract from the counter.
    amount: LeU32,
}

impl AmountInstructionData {
    pub fn new(amount: u32) -> Self {
        AmountInstructionData {
            amount: amount.to_le_bytes(),
        }
    }

    #[inline(always)]
    pub fn amount(&self) -> u32 {
        u32::from_le_bytes(self.amount)
    }

    /// Reads the operand from the instruction data remaining after the tag byte, which must be
    /// exactly [`AmountInstructionData::LEN`] bytes.
    #[inline(always)]
    pub fn unpack_untagged(remaining: &[u8]) -> Result<u32, CounterError> {
        // Safety: All bit patterns are valid.
        unsafe { load::<AmountInstructionData>(remaining) }
            .map(Self::amount)
            .or(Err(CounterError::MalformedInstruction))
    }
}

// Safety: All 4 bytes are written.
unsafe impl Pack<4> for AmountInstructionData {
    fn pack_into_slice(&self, dst: &mut [MaybeUninit<u8>; 4]) {
        write_bytes(&mut dst[0..4], &self.amount);
    }
}

// Safety:
//
// - Stable layout with `#[repr(C)]`.
// - `size_of` and `align_of` are checked below.
// - All bit patterns are valid.
unsafe impl Transmutable for AmountInstructionData {
    const LEN: usize = 4;
}

const_assert_eq!(
    AmountInstructionData::LEN,
    size_of::<AmountInstructionData>()
);
const_assert_eq!(1, align_of::<AmountInstructionData>());
