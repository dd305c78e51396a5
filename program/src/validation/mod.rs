pub mod counter_account_view;
