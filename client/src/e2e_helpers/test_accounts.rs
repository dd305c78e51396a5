macro_rules! acc_keypair_fn {
    ($fn_name:ident, $b58:literal) => {
        #[inline]
        pub fn $fn_name() -> &'static ::solana_sdk::signature::Keypair {
            static KP: ::std::sync::LazyLock<::solana_sdk::signature::Keypair> =
                ::std::sync::LazyLock::new(|| {
                    ::solana_sdk::signature::Keypair::from_base58_string($b58)
                });

            ::std::sync::LazyLock::force(&KP)
        }
    };
}

/// Deterministic keypairs for local testing and the walkthrough example.
#[rustfmt::skip]
mod unformatted {
    acc_keypair_fn!(default_payer, "43cktcHNQxWtbzrxgEazqDVnibDLGHtkVeYX6YpvzhWC2FzWSjrnr7geDua8GY9ESbVJQyPjFDwyooh35UqRMMaB");
    acc_keypair_fn!(counter_1, "FjBXvY613p358mEW9S7sJoSFjrN8Q5ZrQy1RHWiT7fkWYaS6xoNNvPyfBhmvUVT2mEad1DfQE2sPQZg1gQywPgp");
}

pub use unformatted::*;
