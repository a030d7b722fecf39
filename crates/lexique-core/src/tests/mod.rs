mod filter_tests;
mod select_tests;
