use std::{
    collections::HashMap,
    path::PathBuf,
};

use mollusk_svm::{
    Mollusk,
    MolluskContext,
};
use solana_account::Account;
use solana_address::Address;

pub mod checks;
pub mod helper_trait;
pub mod utils;

/// Converts an input deploy file to a program name used by the [`Mollusk::new`] function.
///
/// Requires the full file name; for example, `counter.so` would return the absolute path version
/// of `../target/deploy/counter`, which is exactly what [`Mollusk::new`] expects.
fn deploy_file_to_program_name(program_name: &str) -> String {
    PathBuf::from(env!("CARGO_WORKSPACE_DIR"))
        .join("target/deploy/")
        .join(program_name)
        .canonicalize()
        .map(|p| {
            p.to_str()
                .expect("Path should convert to a &str")
                .strip_suffix(".so")
                .expect("Deploy file should have an `.so` suffix")
                .to_string()
        })
        .expect("Should create relative target/deploy/ path")
}

/// Creates and returns a [`MolluskContext`] with the counter program loaded and the passed
/// accounts already created.
pub fn new_counter_mollusk_context(
    accounts: Vec<(Address, Account)>,
) -> MolluskContext<HashMap<Address, Account>> {
    let mollusk = Mollusk::new(&counter::ID, &deploy_file_to_program_name("counter.so"));

    // Create mollusk context with the simple hashmap implementation for the AccountStore.
    let context = mollusk.with_context(HashMap::new());

    // Create each account passed in at its respective address using the specified account data.
    for (address, account) in accounts {
        context.account_store.borrow_mut().insert(address, account);
    }

    context
}
