mod line_item_tests;
mod logic_tests;
mod utils;
