/// Decode a single-byte text payload
///
/// ID3v2.2 text frames are null-delimited on both ends (the leading byte being the text
/// encoding), so nulls are trimmed from both sides. Payloads that are valid UTF-8 are read as
/// such, since that is what we write. Anything else is treated as Latin-1.
pub(crate) fn decode_text(bytes: &[u8]) -> String {
	let trimmed = trim_nulls(bytes);
	match std::str::from_utf8(trimmed) {
		Ok(text) => text.to_owned(),
		Err(_) => latin1_decode(trimmed),
	}
}

/// Same as [`decode_text`], but only trims trailing nulls
///
/// Used for the lyrics payload, where the descriptor has already been skipped.
pub(crate) fn decode_text_terminated(bytes: &[u8]) -> String {
	let end = bytes.iter().rposition(|b| *b != 0).map_or(0, |pos| pos + 1);
	let trimmed = &bytes[..end];
	match std::str::from_utf8(trimmed) {
		Ok(text) => text.to_owned(),
		Err(_) => latin1_decode(trimmed),
	}
}

fn latin1_decode(bytes: &[u8]) -> String {
	bytes.iter().map(|c| char::from(*c)).collect::<String>()
}

fn trim_nulls(bytes: &[u8]) -> &[u8] {
	let Some(start) = bytes.iter().position(|b| *b != 0) else {
		return &[];
	};

	// Can't fail, there's at least one non-null byte
	let end = bytes.iter().rposition(|b| *b != 0).map_or(start, |pos| pos + 1);
	&bytes[start..end]
}
