#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod instructions;
pub mod pack;
pub mod state;

pub mod program {
    solana_address::declare_id!("2U6o8hrpY33r6ZmLDdiPxMEqsq9jDJ2Z83SzsZ7mJu1X");
}
