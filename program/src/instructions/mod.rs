pub mod update_count;

pub use update_count::process_update_count;
