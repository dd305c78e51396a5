use core::mem::MaybeUninit;

pub const UNINIT_BYTE: MaybeUninit<u8> = MaybeUninit::uninit();

/// # Safety
///
/// Implementor must guarantee `pack_into_slice` writes all `LEN` bytes.
pub unsafe trait Pack<const LEN: usize>: Sized {
    /// Pack into a buffer of size LEN without zero initializing the buffer, then return the buffer.
    fn pack(&self) -> [u8; LEN] {
        let mut dst = [UNINIT_BYTE; LEN];
        self.pack_into_slice(&mut dst);

        // Safety: All LEN bytes were initialized in `pack_into_slice`.
        unsafe { *(dst.as_ptr() as *const [u8; LEN]) }
    }

    #[doc(hidden)]
    /// Pack into a destination slice of maybe uninitialized bytes of LEN length.
    fn pack_into_slice(&self, dst: &mut [MaybeUninit<u8>; LEN]);
}

/// Writes bytes from a source slice into an uninitialized destination buffer.
///
/// Caller must ensure `src.len() == dst.len()`. A partially written `dst` isn't immediate
/// undefined behavior, but reading it back as initialized bytes is.
///
/// # Example
/// ```
/// use core::mem::MaybeUninit;
/// use counter_interface::pack::{write_bytes, UNINIT_BYTE};
///
/// // An `Add(7)` instruction: [opcode, operand, operand, operand, operand]
/// let mut message = [UNINIT_BYTE; 5];
/// write_bytes(&mut message[0..1], &[3]);
/// write_bytes(&mut message[1..5], &7u32.to_le_bytes());
///
/// // All 5 bytes were explicitly written to.
/// let bytes: &[u8] = unsafe { core::slice::from_raw_parts(message.as_ptr() as *const u8, 5) };
/// assert_eq!(bytes, &[3, 7, 0, 0, 0]);
/// ```
///
/// From pinocchio's `[no_std]` library:
/// <https://github.com/anza-xyz/pinocchio/blob/3044aaf5ea7eac01adc754d4bdf93c21c6e54d42/programs/token/src/lib.rs#L13>
#[inline(always)]
pub fn write_bytes(dst: &mut [MaybeUninit<u8>], src: &[u8]) {
    debug_assert_eq!(
        src.len(),
        dst.len(),
        "tried to `write_bytes` with mismatched src/dst lengths"
    );
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        d.write(*s);
    }
}
