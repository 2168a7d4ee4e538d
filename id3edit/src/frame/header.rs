use crate::error::Result;
use crate::macros::id3v2_err;
use crate::util::checked_slice;

use std::io::Write;

use byteorder::{BigEndian, ByteOrder, WriteBytesExt};

/// Largest value the 24-bit frame size field can hold
pub(crate) const MAX_FRAME_SIZE: u32 = 0xFF_FFFF;

/// An ID3v2.2 frame header
///
/// ID3v2.2 frames have no flags, only a 3 byte ID followed by a plain (not synchsafe) 24-bit
/// big-endian size. The size excludes the header itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct FrameHeader {
	pub(crate) id: [u8; 3],
	pub(crate) size: u32,
}

impl FrameHeader {
	pub(crate) const LEN: usize = 6;

	/// Read a frame header from `bytes` at `offset`
	///
	/// Returns `None` when padding starts at `offset`. Padding is recognized from the frame ID
	/// alone, so it may run up to the end of `bytes` without room for a full header.
	pub(crate) fn parse(bytes: &[u8], offset: usize) -> Result<Option<Self>> {
		let remaining = bytes.get(offset..).unwrap_or_default();
		if is_padding(remaining) {
			return Ok(None);
		}

		let header = checked_slice(bytes, offset, Self::LEN)?;

		let id = [header[0], header[1], header[2]];
		let size = BigEndian::read_u24(&header[3..]);

		Ok(Some(Self { id, size }))
	}

	/// Length of the whole frame, header included
	pub(crate) fn total_len(self) -> usize {
		Self::LEN + self.size as usize
	}

	/// Write a frame header for `content_len` bytes of content
	pub(crate) fn write<W>(id: [u8; 3], content_len: usize, writer: &mut W) -> Result<()>
	where
		W: Write,
	{
		let size = match u32::try_from(content_len) {
			Ok(size) if size <= MAX_FRAME_SIZE => size,
			_ => id3v2_err!(@BAIL SizeOverflow(content_len as u64)),
		};

		writer.write_all(&id)?;
		writer.write_u24::<BigEndian>(size)?;

		Ok(())
	}
}

// A frame ID of all zeros marks the start of padding
fn is_padding(remaining: &[u8]) -> bool {
	let id_len = remaining.len().min(3);
	id_len > 0 && remaining[..id_len].iter().all(|b| *b == 0)
}

#[cfg(test)]
mod tests {
	use super::{FrameHeader, MAX_FRAME_SIZE};
	use crate::error::Id3v2ErrorKind;

	#[test_log::test]
	fn parse_frame_header() {
		let bytes = [0xFF, b'T', b'T', b'2', 0x01, 0x02, 0x03, 0xAA];
		let header = FrameHeader::parse(&bytes, 1).unwrap().unwrap();

		assert_eq!(&header.id, b"TT2");
		assert_eq!(header.size, 0x01_0203);
		assert_eq!(header.total_len(), 0x01_0203 + 6);
	}

	#[test_log::test]
	fn parse_padding() {
		assert_eq!(FrameHeader::parse(&[0; 6], 0).unwrap(), None);

		// Padding doesn't need room for a full header
		for len in 1..6 {
			let bytes = vec![0; len];
			assert_eq!(FrameHeader::parse(&bytes, 0).unwrap(), None);
		}

		// A zero size alone isn't padding
		assert!(FrameHeader::parse(b"TP1\0\0\0", 0).unwrap().is_some());
	}

	#[test_log::test]
	fn parse_at_end_of_buffer() {
		let err = FrameHeader::parse(b"TP1", 3).unwrap_err();
		assert_eq!(
			err.id3v2_kind(),
			Some(&Id3v2ErrorKind::TruncatedInput {
				offset: 3,
				needed: 6,
				available: 0,
			})
		);
	}

	#[test_log::test]
	fn parse_truncated_header() {
		let err = FrameHeader::parse(b"TT2\0\0", 0).unwrap_err();
		assert_eq!(
			err.id3v2_kind(),
			Some(&Id3v2ErrorKind::TruncatedInput {
				offset: 0,
				needed: 6,
				available: 5,
			})
		);
	}

	#[test_log::test]
	fn write_frame_header() {
		let mut out = Vec::new();
		FrameHeader::write(*b"TP1", 8, &mut out).unwrap();
		assert_eq!(out, [b'T', b'P', b'1', 0, 0, 8]);

		out.clear();
		FrameHeader::write(*b"PIC", MAX_FRAME_SIZE as usize, &mut out).unwrap();
		assert_eq!(out, [b'P', b'I', b'C', 0xFF, 0xFF, 0xFF]);
	}

	#[test_log::test]
	fn write_oversized_frame_header() {
		let mut out = Vec::new();
		let err = FrameHeader::write(*b"PIC", MAX_FRAME_SIZE as usize + 1, &mut out).unwrap_err();

		assert_eq!(
			err.id3v2_kind(),
			Some(&Id3v2ErrorKind::SizeOverflow(u64::from(MAX_FRAME_SIZE) + 1))
		);
		assert!(out.is_empty());
	}
}
