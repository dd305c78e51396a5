pub mod counter;
pub mod transmutable;

pub const U32_SIZE: usize = core::mem::size_of::<u32>();

/// A little-endian `u32` stored as raw bytes so that containing structs stay align 1.
pub type LeU32 = [u8; U32_SIZE];
