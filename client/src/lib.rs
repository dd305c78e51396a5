//! Client-side utilities for driving the counter program, either over RPC against a validator or
//! in-process through `mollusk-svm`.

pub mod context;
pub mod e2e_helpers;
pub mod logs;
pub mod mollusk_helpers;
pub mod transactions;

pub use logs::LogColor;
