//! The ID3v2.2 encoder

use crate::error::Result;
use crate::frame::FrameRole;
use crate::frame::header::FrameHeader;
use crate::header::{HEADER_LEN, Id3v22Header};
use crate::picture::Artwork;
use crate::tag::Id3v22Tag;

use std::io::Write;

/// Written before the lyrics: text encoding, language, and an empty description
const LYRICS_DESCRIPTOR: [u8; 5] = [0, b'e', b'n', b'g', 0];

/// Encode `tag` as an ID3v2.2 tag
///
/// Frames are written in a fixed order: the text frames (see [`FrameRole::TEXT_ROLES`]), the
/// lyrics, then the artwork. Empty fields are not written.
///
/// If there is nothing to write, the result is empty rather than a bare header.
///
/// # Errors
///
/// * A single frame is larger than the 24-bit frame size field allows
/// * The tag is larger than the 28-bit tag size field allows
///
/// # Examples
///
/// ```rust
/// use id3edit::encode;
/// use id3edit::tag::Id3v22Tag;
///
/// # fn main() -> id3edit::error::Result<()> {
/// assert!(encode(&Id3v22Tag::new())?.is_empty());
///
/// let mut tag = Id3v22Tag::new();
/// tag.set_artist("Artist");
///
/// let bytes = encode(&tag)?;
/// assert_eq!(bytes, b"ID3\x02\x00\x00\x00\x00\x00\x0ETP1\x00\x00\x08\x00Artist\x00");
/// # Ok(()) }
/// ```
pub fn encode(tag: &Id3v22Tag) -> Result<Vec<u8>> {
	let mut frames = Vec::new();

	for role in FrameRole::TEXT_ROLES {
		let value = tag.text(role);
		if value.is_empty() {
			continue;
		}

		write_text_frame(role, value, &mut frames)?;
	}

	if !tag.lyrics.is_empty() {
		write_lyrics_frame(&tag.lyrics, &mut frames)?;
	}

	if let Some(artwork) = &tag.artwork {
		write_artwork_frame(artwork, &mut frames)?;
	}

	if frames.is_empty() {
		log::debug!("Tag is empty, nothing to write");
		return Ok(Vec::new());
	}

	let header = Id3v22Header::for_content_len(frames.len())?;
	log::debug!("Writing ID3v2.2 tag, size: {}", header.size);

	let mut tag_bytes = Vec::with_capacity(HEADER_LEN + frames.len());
	header.write_to(&mut tag_bytes)?;
	tag_bytes.extend_from_slice(&frames);

	Ok(tag_bytes)
}

fn write_text_frame<W>(role: FrameRole, value: &str, writer: &mut W) -> Result<()>
where
	W: Write,
{
	let text = value.as_bytes();

	// The content must be null-delimited on both ends
	let leading_null = text.first() != Some(&0);
	let trailing_null = text.last() != Some(&0);
	let content_len = text.len() + usize::from(leading_null) + usize::from(trailing_null);

	log::trace!(
		"Writing frame `{}`, size: {}",
		String::from_utf8_lossy(&role.id()),
		content_len
	);

	FrameHeader::write(role.id(), content_len, writer)?;
	if leading_null {
		writer.write_all(&[0])?;
	}
	writer.write_all(text)?;
	if trailing_null {
		writer.write_all(&[0])?;
	}

	Ok(())
}

fn write_lyrics_frame<W>(lyrics: &str, writer: &mut W) -> Result<()>
where
	W: Write,
{
	let content_len = LYRICS_DESCRIPTOR.len() + lyrics.len();
	log::trace!("Writing frame `ULT`, size: {}", content_len);

	FrameHeader::write(FrameRole::Lyrics.id(), content_len, writer)?;
	writer.write_all(&LYRICS_DESCRIPTOR)?;
	writer.write_all(lyrics.as_bytes())?;

	Ok(())
}

fn write_artwork_frame<W>(artwork: &Artwork, writer: &mut W) -> Result<()>
where
	W: Write,
{
	let descriptor = artwork.format.descriptor();
	let content_len = descriptor.len() + artwork.data.len();
	log::trace!(
		"Writing frame `PIC`, format: {}, size: {}",
		artwork.format,
		content_len
	);

	FrameHeader::write(FrameRole::Artwork.id(), content_len, writer)?;
	writer.write_all(&descriptor)?;
	writer.write_all(&artwork.data)?;

	Ok(())
}
