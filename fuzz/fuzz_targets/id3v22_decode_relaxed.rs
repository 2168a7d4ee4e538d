#![no_main]

use id3edit::config::{ParseOptions, ParsingMode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
	let _ = id3edit::decode_with_options(
		&data,
		ParseOptions::new().parsing_mode(ParsingMode::Relaxed),
	);
});
