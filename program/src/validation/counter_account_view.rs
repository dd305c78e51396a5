use counter_interface::{
    error::CounterError,
    instructions::CounterInstruction,
    program,
    state::{
        counter::CounterAccount,
        transmutable::{
            load_mut,
            Transmutable,
        },
    },
};
use pinocchio::{
    AccountView,
    ProgramResult,
};

/// A counter account that has passed every check required before its data is written to.
#[derive(Clone)]
pub struct CounterAccountView<'a> {
    pub account: &'a AccountView,
}

impl<'a> CounterAccountView<'a> {
    /// Checks, in order, that the account:
    /// - signed the transaction
    /// - is owned by this program
    /// - is writable
    /// - holds exactly [`CounterAccount::LEN`] bytes of data
    #[inline(always)]
    pub fn new(account: &'a AccountView) -> Result<CounterAccountView<'a>, CounterError> {
        if !account.is_signer() {
            return Err(CounterError::MissingSignature);
        }

        if !account.owned_by(&program::ID) {
            return Err(CounterError::InvalidAccountOwner);
        }

        if !account.is_writable() {
            return Err(CounterError::AccountNotWritable);
        }

        if account.data_len() != CounterAccount::LEN {
            return Err(CounterError::InvalidAccountData);
        }

        Ok(Self { account })
    }

    /// Applies `instruction` to the account's count. The data is only written if the transition
    /// succeeds, so a failed instruction leaves the previous four bytes in place.
    #[inline(always)]
    pub fn apply(&self, instruction: &CounterInstruction) -> ProgramResult {
        let mut data = self.account.try_borrow_mut()?;
        // Safety: All bit patterns are valid.
        let counter = unsafe { load_mut::<CounterAccount>(&mut data) }?;
        counter.apply(instruction)?;

        Ok(())
    }
}
