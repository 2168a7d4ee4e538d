//! Various configuration options to control id3edit

mod parse_options;

pub use parse_options::{ParseOptions, ParsingMode};
