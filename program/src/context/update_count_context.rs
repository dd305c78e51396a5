//! See [`UpdateCountContext`].

use counter_interface::error::CounterError;
use pinocchio::AccountView;

use crate::validation::counter_account_view::CounterAccountView;

/// The account context shared by every counter instruction. The first account is the counter;
/// any accounts after it are ignored.
#[derive(Clone)]
pub struct UpdateCountContext<'a> {
    pub counter: CounterAccountView<'a>,
}

impl<'a> UpdateCountContext<'a> {
    pub fn load(accounts: &'a [AccountView]) -> Result<UpdateCountContext<'a>, CounterError> {
        let [counter, ..] = accounts else {
            return Err(CounterError::NotEnoughAccountKeys);
        };

        Ok(Self {
            counter: CounterAccountView::new(counter)?,
        })
    }
}
