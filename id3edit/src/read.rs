//! The ID3v2.2 decoder

use crate::config::{ParseOptions, ParsingMode};
use crate::error::Result;
use crate::frame::header::FrameHeader;
use crate::frame::{FrameRole, lookup};
use crate::header::{HEADER_LEN, Id3v22Header};
use crate::macros::id3v2_err;
use crate::picture::{Artwork, ArtworkFormat};
use crate::tag::Id3v22Tag;
use crate::util::checked_slice;
use crate::util::text::{decode_text, decode_text_terminated};

/// Offset of the image format marker from the start of a `PIC` frame
const ARTWORK_MARKER_OFFSET: usize = FrameHeader::LEN + 1;

/// Decode the ID3v2.2 tag at the start of `bytes`
///
/// This is [`decode_with_options`] with the default [`ParseOptions`].
///
/// # Errors
///
/// See [`decode_with_options`]
///
/// # Examples
///
/// ```rust
/// use id3edit::decode;
///
/// # fn main() -> id3edit::error::Result<()> {
/// let bytes = b"ID3\x02\x00\x00\x00\x00\x00\x0E\
///               TP1\x00\x00\x08\x00Artist\x00";
///
/// let tag = decode(bytes)?;
/// assert_eq!(tag.artist(), "Artist");
/// assert_eq!(tag.title(), "");
///
/// // No tag at all is not an error
/// assert!(decode(b"\xFF\xFB\x90\x00")?.is_empty());
/// # Ok(()) }
/// ```
pub fn decode(bytes: &[u8]) -> Result<Id3v22Tag> {
	decode_with_options(bytes, ParseOptions::new())
}

/// Decode the ID3v2.2 tag at the start of `bytes`
///
/// If `bytes` doesn't start with an ID3v2.2 tag, an empty [`Id3v22Tag`] is returned.
///
/// # Errors
///
/// The tag is present but corrupt:
///
/// * The header, a frame header, or a frame's content extends past the end of `bytes`
/// * A frame declares a size of zero
///
/// With [`ParsingMode::Relaxed`], a corrupt frame only ends the decode, and everything read
/// before it is kept.
pub fn decode_with_options(bytes: &[u8], parse_options: ParseOptions) -> Result<Id3v22Tag> {
	let Some(header) = Id3v22Header::parse(bytes)? else {
		return Ok(Id3v22Tag::default());
	};

	parse_id3v22(bytes, header, parse_options)
}

pub(crate) fn parse_id3v22(
	bytes: &[u8],
	header: Id3v22Header,
	parse_options: ParseOptions,
) -> Result<Id3v22Tag> {
	log::debug!("Parsing ID3v2.2 tag, size: {}", header.size);

	let mut tag = Id3v22Tag::default();

	// Relative to the end of the header
	let declared_size = header.size as usize;
	let mut cursor = 0;

	while cursor < declared_size {
		let offset = HEADER_LEN + cursor;

		let parsed = match ParsedFrame::read(bytes, offset, parse_options) {
			Ok(parsed) => parsed,
			Err(err) => match parse_options.parsing_mode {
				ParsingMode::Strict => return Err(err),
				ParsingMode::Relaxed => {
					log::warn!("Failed to read frame at offset {}, stopping: {}", offset, err);
					break;
				},
			},
		};

		match parsed {
			ParsedFrame::Next { role, frame } => {
				cursor += frame.len();
				store_frame(&mut tag, role, frame);
			},
			// Unknown frames, or ones we were told to ignore
			ParsedFrame::Skip { size } => cursor += size,
			// Padding, nothing of interest past this point
			ParsedFrame::Eof => break,
		}
	}

	Ok(tag)
}

enum ParsedFrame<'a> {
	Next {
		role: FrameRole,
		/// The entire frame, header included
		frame: &'a [u8],
	},
	Skip {
		size: usize,
	},
	Eof,
}

impl<'a> ParsedFrame<'a> {
	fn read(bytes: &'a [u8], offset: usize, parse_options: ParseOptions) -> Result<Self> {
		// Assume we just started reading padding
		let Some(header) = FrameHeader::parse(bytes, offset)? else {
			log::trace!("Found padding at offset {}", offset);
			return Ok(Self::Eof);
		};

		if header.size == 0 {
			id3v2_err!(@BAIL ZeroLengthFrame(header.id));
		}

		let frame = checked_slice(bytes, offset, header.total_len())?;

		let Some(role) = lookup(header.id) else {
			log::trace!(
				"Skipping unknown frame `{}`, size: {}",
				String::from_utf8_lossy(&header.id),
				header.size
			);
			return Ok(Self::Skip { size: frame.len() });
		};

		if role == FrameRole::Artwork && !parse_options.read_cover_art {
			log::trace!("Skipping artwork, size: {}", header.size);
			return Ok(Self::Skip { size: frame.len() });
		}

		if frame.len() < role.content_offset() {
			id3v2_err!(@BAIL TruncatedInput {
				offset,
				needed: role.content_offset(),
				available: frame.len(),
			});
		}

		log::trace!(
			"Reading frame `{}`, size: {}",
			String::from_utf8_lossy(&header.id),
			header.size
		);

		Ok(Self::Next { role, frame })
	}
}

fn store_frame(tag: &mut Id3v22Tag, role: FrameRole, frame: &[u8]) {
	let content = &frame[role.content_offset()..];

	if role == FrameRole::Artwork {
		let format = ArtworkFormat::from_marker(frame[ARTWORK_MARKER_OFFSET]);

		if tag.artwork.is_some() {
			log::warn!("Replaced frame with ID \"PIC\" by a frame with the same ID");
		}

		tag.artwork = Some(Artwork::new(content.to_vec(), format));
		return;
	}

	let value = if role == FrameRole::Lyrics {
		decode_text_terminated(content)
	} else {
		decode_text(content)
	};

	if let Some(field) = tag.text_mut(role) {
		if !field.is_empty() {
			log::warn!(
				"Replaced frame with ID \"{}\" by a frame with the same ID",
				String::from_utf8_lossy(&role.id())
			);
		}

		*field = value;
	}
}
