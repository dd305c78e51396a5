pub mod update_count_context;
