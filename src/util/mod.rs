pub mod parse;

pub use parse::{parse_flag, parse_int_or_one};
