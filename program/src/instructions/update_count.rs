use counter_interface::instructions::CounterInstruction;
use pinocchio::{
    AccountView,
    ProgramResult,
};

use crate::{
    context::update_count_context::UpdateCountContext,
    debug,
};

/// Validates the counter account and applies `instruction` to its count.
pub fn process_update_count(
    accounts: &[AccountView],
    instruction: &CounterInstruction,
) -> ProgramResult {
    let ctx = UpdateCountContext::load(accounts)?;
    ctx.counter.apply(instruction)?;

    debug!("Counter updated");

    Ok(())
}

#[cfg(test)]
mod tests {
    use counter_interface::{
        error::CounterError,
        instructions::CounterInstruction,
        program,
    };
    use pinocchio::{
        error::ProgramError,
        AccountView,
        Address,
        ProgramResult,
    };
    use solana_account_view::RuntimeAccount;

    use crate::process_instruction;

    /// The runtime account header followed directly by its data, the way the runtime lays out
    /// each serialized account.
    #[repr(C)]
    struct MockAccount<const N: usize> {
        runtime: RuntimeAccount,
        data: [u8; N],
    }

    impl<const N: usize> MockAccount<N> {
        fn new(data: [u8; N]) -> Self {
            Self {
                runtime: RuntimeAccount {
                    // Not borrowed.
                    borrow_state: u8::MAX,
                    is_signer: 1,
                    is_writable: 1,
                    executable: 0,
                    resize_delta: 0,
                    address: Address::new_from_array([9u8; 32]),
                    owner: program::ID,
                    lamports: 1_000_000,
                    data_len: N as u64,
                },
                data,
            }
        }

        fn signer(mut self, is_signer: bool) -> Self {
            self.runtime.is_signer = is_signer as u8;
            self
        }

        fn writable(mut self, is_writable: bool) -> Self {
            self.runtime.is_writable = is_writable as u8;
            self
        }

        fn owner(mut self, owner: Address) -> Self {
            self.runtime.owner = owner;
            self
        }

        fn process(&mut self, instruction_data: &[u8]) -> ProgramResult {
            let raw = core::ptr::addr_of_mut!(*self).cast::<RuntimeAccount>();
            // Safety: `raw` points at a runtime account header immediately followed by `N` bytes
            // of data, and outlives the view.
            let accounts = [unsafe { AccountView::new_unchecked(raw) }];
            process_instruction(&program::ID, &accounts, instruction_data)
        }
    }

    fn err(e: CounterError) -> ProgramResult {
        Err(ProgramError::from(e))
    }

    #[test]
    fn scenario_writes_little_endian_counts() {
        let mut counter = MockAccount::new([0u8; 4]);

        let steps = [
            (CounterInstruction::Init, [1, 0, 0, 0]),
            (CounterInstruction::Double, [2, 0, 0, 0]),
            (CounterInstruction::Half, [1, 0, 0, 0]),
            (CounterInstruction::Add { amount: 5 }, [6, 0, 0, 0]),
            (CounterInstruction::Subtract { amount: 3 }, [3, 0, 0, 0]),
            (CounterInstruction::Subtract { amount: 3 }, [0, 0, 0, 0]),
        ];

        for (instruction, expected) in steps {
            assert_eq!(counter.process(instruction.pack().as_ref()), Ok(()));
            assert_eq!(counter.data, expected);
        }

        assert_eq!(
            counter.process(CounterInstruction::Subtract { amount: 1 }.pack().as_ref()),
            err(CounterError::Underflow)
        );
        assert_eq!(counter.data, [0, 0, 0, 0]);
    }

    #[test]
    fn init_resets_an_initialized_counter() {
        let mut counter = MockAccount::new(1_234_567u32.to_le_bytes());
        assert_eq!(counter.process(&[0]), Ok(()));
        assert_eq!(counter.data, [1, 0, 0, 0]);
    }

    #[test]
    fn overflow_leaves_data_unchanged() {
        let mut counter = MockAccount::new(u32::MAX.to_le_bytes());
        assert_eq!(counter.process(&[1]), err(CounterError::Overflow));
        assert_eq!(counter.process(&[3, 1, 0, 0, 0]), err(CounterError::Overflow));
        assert_eq!(counter.data, u32::MAX.to_le_bytes());
    }

    #[test]
    fn missing_signature_is_rejected() {
        let mut counter = MockAccount::new([7, 0, 0, 0]).signer(false);
        assert_eq!(counter.process(&[0]), err(CounterError::MissingSignature));
        assert_eq!(counter.data, [7, 0, 0, 0]);
    }

    #[test]
    fn foreign_owner_is_rejected() {
        let mut counter =
            MockAccount::new([7, 0, 0, 0]).owner(Address::new_from_array([0u8; 32]));
        assert_eq!(counter.process(&[1]), err(CounterError::InvalidAccountOwner));
        assert_eq!(counter.data, [7, 0, 0, 0]);
    }

    #[test]
    fn read_only_account_is_rejected() {
        let mut counter = MockAccount::new([7, 0, 0, 0]).writable(false);
        assert_eq!(counter.process(&[2]), err(CounterError::AccountNotWritable));
        assert_eq!(counter.data, [7, 0, 0, 0]);
    }

    #[test]
    fn wrong_data_length_is_rejected() {
        let mut short = MockAccount::new([0u8; 3]);
        assert_eq!(short.process(&[0]), err(CounterError::InvalidAccountData));
        assert_eq!(short.data, [0u8; 3]);

        let mut long = MockAccount::new([0u8; 8]);
        assert_eq!(long.process(&[0]), err(CounterError::InvalidAccountData));
        assert_eq!(long.data, [0u8; 8]);

        let mut empty = MockAccount::new([]);
        assert_eq!(empty.process(&[0]), err(CounterError::InvalidAccountData));
    }

    #[test]
    fn malformed_instruction_data_is_rejected_before_accounts() {
        let mut counter = MockAccount::new([7, 0, 0, 0]).signer(false);
        assert_eq!(counter.process(&[5]), err(CounterError::UnknownInstruction));
        assert_eq!(counter.process(&[3]), err(CounterError::MalformedInstruction));
        assert_eq!(counter.process(&[0, 0]), err(CounterError::MalformedInstruction));
        assert_eq!(counter.data, [7, 0, 0, 0]);
    }

    #[test]
    fn no_accounts_is_rejected() {
        assert_eq!(
            process_instruction(&program::ID, &[], &[0]),
            err(CounterError::NotEnoughAccountKeys)
        );
    }
}
