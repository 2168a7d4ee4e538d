#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
	let Ok(tag) = id3edit::decode(&data) else {
		return;
	};

	let encoded = id3edit::encode(&tag).unwrap();
	assert_eq!(id3edit::decode(&encoded).unwrap(), tag);
});
