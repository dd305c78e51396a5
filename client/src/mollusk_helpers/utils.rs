use counter_interface::state::counter::CounterAccount;
use solana_account::Account;
use solana_address::Address;
use solana_sdk::rent::Rent;
use solana_system_interface::program as system_program;

/// Create the data necessary to send to [`mollusk_svm::MolluskContext`] to mock a funded account.
pub fn create_mock_user_account(address: Address, lamport_balance: u64) -> (Address, Account) {
    (
        address,
        Account {
            lamports: lamport_balance,
            data: vec![],
            owner: system_program::ID,
            executable: false,
            rent_epoch: 0,
        },
    )
}

/// Mocks a rent-exempt counter account owned by the counter program holding `count`.
pub fn create_counter_account(address: Address, count: u32) -> (Address, Account) {
    create_counter_account_with_data(address, CounterAccount::new(count).as_bytes().to_vec())
}

/// Mocks a rent-exempt account owned by the counter program with arbitrary data, e.g. to exercise
/// data length validation.
pub fn create_counter_account_with_data(address: Address, data: Vec<u8>) -> (Address, Account) {
    (
        address,
        Account {
            lamports: Rent::default().minimum_balance(data.len()),
            data,
            owner: counter::ID,
            executable: false,
            rent_epoch: 0,
        },
    )
}
