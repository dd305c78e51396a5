use static_assertions::const_assert_eq;

use crate::{
    error::CounterResult,
    instructions::CounterInstruction,
    state::{
        transmutable::Transmutable,
        LeU32,
        U32_SIZE,
    },
};

pub const COUNTER_ACCOUNT_SIZE: usize = U32_SIZE;

/// The counter account's data: a bare little-endian `u32` with no header or discriminant.
///
/// A freshly allocated account is zero-filled by the runtime and reads as a count of `0`.
#[repr(C)]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CounterAccount {
    /// The u32 count as LE bytes.
    count: LeU32,
}

// Safety:
//
// - Stable layout with `#[repr(C)]`.
// - `size_of` and `align_of` are checked below.
// - All bit patterns are valid.
unsafe impl Transmutable for CounterAccount {
    const LEN: usize = COUNTER_ACCOUNT_SIZE;
}

const_assert_eq!(CounterAccount::LEN, size_of::<CounterAccount>());
const_assert_eq!(1, align_of::<CounterAccount>());

impl CounterAccount {
    pub const fn new(count: u32) -> Self {
        Self {
            count: count.to_le_bytes(),
        }
    }

    #[inline(always)]
    pub fn count(&self) -> u32 {
        u32::from_le_bytes(self.count)
    }

    #[inline(always)]
    pub fn set_count(&mut self, count: u32) {
        self.count = count.to_le_bytes();
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8; COUNTER_ACCOUNT_SIZE] {
        &self.count
    }

    /// Applies `instruction` to the stored count. The stored bytes are only replaced if the
    /// transition succeeds.
    #[inline(always)]
    pub fn apply(&mut self, instruction: &CounterInstruction) -> CounterResult {
        let next = instruction.next_count(self.count())?;
        self.set_count(next);
        Ok(())
    }
}
