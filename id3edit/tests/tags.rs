#![allow(missing_docs)]

use id3edit::error::Id3v2ErrorKind;
use id3edit::prelude::*;
use id3edit::{decode, decode_with_options, encode};

fn frame(id: &[u8; 3], content: &[u8]) -> Vec<u8> {
	let mut frame = id.to_vec();
	frame.extend_from_slice(&(content.len() as u32).to_be_bytes()[1..]);
	frame.extend_from_slice(content);
	frame
}

fn tag_with_size(size: u32, frames: &[u8]) -> Vec<u8> {
	let mut tag = b"ID3\x02\x00\x00".to_vec();
	tag.extend_from_slice(&size.synch().unwrap().to_be_bytes());
	tag.extend_from_slice(frames);
	tag
}

fn tag(frames: &[u8]) -> Vec<u8> {
	tag_with_size(frames.len() as u32, frames)
}

fn full_tag() -> Id3v22Tag {
	let mut tag = Id3v22Tag::new();
	tag.set_artist("Foo artist");
	tag.set_title("Bar title");
	tag.set_album("Baz album");
	tag.set_composer("Qux composer");
	tag.set_track_number("3/12");
	tag.set_year("1984");
	tag.set_copyright("(C) 1984 Someone");
	tag.set_publisher("Some label");
	tag.set_lyrics("First line\nSecond line");
	tag.set_artwork_from_bytes(b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR".to_vec(), ArtworkFormat::Png);
	tag
}

#[test_log::test]
fn artist_only() {
	let bytes = tag(&frame(b"TP1", b"\0Artist\0"));
	let tag = decode(&bytes).unwrap();

	assert_eq!(tag.artist(), "Artist");
	for role in &FrameRole::TEXT_ROLES[1..] {
		assert_eq!(tag.text(*role), "", "{role:?} should be empty");
	}
	assert_eq!(tag.lyrics(), "");
	assert!(tag.artwork().is_none());
}

#[test_log::test]
fn round_trip() {
	let tag = full_tag();
	let bytes = encode(&tag).unwrap();

	assert_eq!(decode(&bytes).unwrap(), tag);
}

#[test_log::test]
fn round_trip_jpeg() {
	let mut tag = Id3v22Tag::new();
	tag.set_title("Bar title");
	tag.set_artwork_from_bytes(vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10], ArtworkFormat::Jpeg);

	let decoded = decode(&encode(&tag).unwrap()).unwrap();
	assert_eq!(decoded, tag);
	assert_eq!(decoded.artwork_format(), Some(ArtworkFormat::Jpeg));
}

#[test_log::test]
fn round_trip_printable_ascii() {
	let printable = (b' '..=b'~').map(char::from).collect::<String>();

	let mut tag = Id3v22Tag::new();
	for role in FrameRole::TEXT_ROLES {
		tag.set_text(role, printable.as_str());
	}
	tag.set_lyrics(printable.as_str());

	assert_eq!(decode(&encode(&tag).unwrap()).unwrap(), tag);
}

#[test_log::test]
fn idempotent() {
	// Latin-1 text, an unknown frame, and padding
	let mut frames = frame(b"TT2", b"\0Caf\xE9\0");
	frames.extend(frame(b"COM", b"\0engcomment\0"));
	frames.extend(frame(b"TP1", b"\0Artist"));
	frames.extend(frame(b"PIC", b"\0JPG\x03\0\xFF\xD8"));
	frames.extend([0; 32]);

	let first = decode(&tag(&frames)).unwrap();
	assert_eq!(first.title(), "Café");
	assert_eq!(first.artist(), "Artist");

	let second = decode(&encode(&first).unwrap()).unwrap();
	assert_eq!(first, second);
}

#[test_log::test]
fn empty_tag_encodes_to_nothing() {
	assert!(encode(&Id3v22Tag::new()).unwrap().is_empty());

	let mut tag = full_tag();
	for role in FrameRole::TEXT_ROLES {
		tag.set_text(role, "");
	}
	tag.remove_lyrics();
	tag.remove_artwork();
	assert!(encode(&tag).unwrap().is_empty());
}

#[test_log::test]
fn padding_stops_reading() {
	let mut frames = frame(b"TP1", b"\0Artist\0");
	frames.extend([0; 6]);
	// Inside the declared size, but after the padding
	frames.extend(frame(b"TT2", b"\0Title\0"));

	let tag = decode(&tag(&frames)).unwrap();
	assert_eq!(tag.artist(), "Artist");
	assert_eq!(tag.title(), "");
}

#[test_log::test]
fn short_padding_at_end_of_buffer() {
	// Fewer padding bytes than a frame header still count as padding
	for padding_len in 1..6 {
		let mut frames = frame(b"TP1", b"\0Artist\0");
		frames.extend(vec![0; padding_len]);

		let tag = decode(&tag(&frames)).unwrap();
		assert_eq!(tag.artist(), "Artist");
	}
}

#[test_log::test]
fn declared_size_limits_frames() {
	let mut frames = frame(b"TP1", b"\0Artist\0");
	let artist_len = frames.len() as u32;
	frames.extend(frame(b"TT2", b"\0Title\0"));

	let tag = decode(&tag_with_size(artist_len, &frames)).unwrap();
	assert_eq!(tag.artist(), "Artist");
	assert_eq!(tag.title(), "");
}

#[test_log::test]
fn artwork_format_detection() {
	for marker in 0..=u8::MAX {
		let content = [0, marker, b'P', b'G', 0, 0, 0xAB];
		let tag = decode(&tag(&frame(b"PIC", &content))).unwrap();

		let expected = if marker == b'J' {
			ArtworkFormat::Jpeg
		} else {
			ArtworkFormat::Png
		};
		assert_eq!(tag.artwork_format(), Some(expected));
		assert_eq!(tag.artwork().unwrap().data(), &[0xAB]);
	}
}

#[test_log::test]
fn not_a_tag() {
	let inputs: [&[u8]; 5] = [
		b"",
		b"ID",
		b"\xFF\xFB\x90\x64",
		b"ID3\x03\x00\x00\x00\x00\x00\x0ATIT2\x00\x00\x00\x02\x00\x00\x00X",
		b"ID3\x04\x00",
	];

	for bytes in inputs {
		assert!(decode(bytes).unwrap().is_empty());
	}
}

#[test_log::test]
fn truncated_header() {
	let err = decode(b"ID3\x02\x00\x00\x00").unwrap_err();
	assert!(matches!(
		err.id3v2_kind(),
		Some(Id3v2ErrorKind::TruncatedInput { .. })
	));
}

#[test_log::test]
fn truncated_frame_header() {
	// Declares 10 bytes, only has 3
	let bytes = tag_with_size(10, b"TP1");

	let err = decode(&bytes).unwrap_err();
	assert_eq!(
		err.id3v2_kind(),
		Some(&Id3v2ErrorKind::TruncatedInput {
			offset: 10,
			needed: 6,
			available: 3,
		})
	);
}

#[test_log::test]
fn relaxed_keeps_earlier_frames() {
	let mut frames = frame(b"TP1", b"\0Artist\0");
	frames.extend(frame(b"TAL", b"\0Album\0"));
	// Claims far more than is there
	frames.extend(b"TT2\x00\x10\x00\0Title\0");

	let bytes = tag(&frames);
	assert!(decode(&bytes).is_err());

	let tag = decode_with_options(
		&bytes,
		ParseOptions::new().parsing_mode(ParsingMode::Relaxed),
	)
	.unwrap();
	assert_eq!(tag.artist(), "Artist");
	assert_eq!(tag.album(), "Album");
	assert_eq!(tag.title(), "");
}

#[test_log::test]
fn zero_length_frame() {
	let mut frames = frame(b"TP1", b"");
	frames.extend([0; 4]);

	let err = decode(&tag(&frames)).unwrap_err();
	assert_eq!(
		err.id3v2_kind(),
		Some(&Id3v2ErrorKind::ZeroLengthFrame(*b"TP1"))
	);
}

#[test_log::test]
fn encoded_layout() {
	let mut tag = Id3v22Tag::new();
	tag.set_year("2001");

	let bytes = encode(&tag).unwrap();
	assert_eq!(&bytes[..6], b"ID3\x02\x00\x00");
	assert!(bytes[6..10].iter().all(|b| *b <= 0x7F));
	assert_eq!(
		u32::from_be_bytes([bytes[6], bytes[7], bytes[8], bytes[9]]).unsynch() as usize,
		bytes.len() - 10
	);
	assert_eq!(&bytes[10..], b"TYE\x00\x00\x06\x002001\x00");
}
