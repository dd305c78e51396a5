use std::collections::HashMap;

use counter_interface::state::{
    counter::CounterAccount,
    transmutable::load,
};
use mollusk_svm::MolluskContext;
use solana_account::Account;
use solana_address::Address;

pub trait CounterTestHelper {
    fn counter_data(&self, counter: &Address) -> Vec<u8>;

    fn view_count(&self, counter: &Address) -> u32;
}

impl CounterTestHelper for MolluskContext<HashMap<Address, Account>> {
    fn counter_data(&self, counter: &Address) -> Vec<u8> {
        let account_store = self.account_store.borrow();

        account_store
            .get(counter)
            .unwrap_or_else(|| panic!("Counter account {counter} doesn't exist"))
            .data
            .clone()
    }

    fn view_count(&self, counter: &Address) -> u32 {
        let data = self.counter_data(counter);
        // Safety: All bit patterns are valid.
        unsafe { load::<CounterAccount>(&data) }
            .map(CounterAccount::count)
            .expect("Account data isn't valid for a counter account")
    }
}
