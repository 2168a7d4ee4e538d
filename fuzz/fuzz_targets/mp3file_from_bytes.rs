#![no_main]

use id3edit::config::ParseOptions;
use id3edit::file::Mp3File;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
	if let Ok(mut file) = Mp3File::from_bytes(data, ParseOptions::new()) {
		file.tag_mut().set_title("Bar title");
		let _ = file.mp3_data();
	}
});
