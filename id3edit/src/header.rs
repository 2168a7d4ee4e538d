//! The ID3v2.2 tag header

use crate::error::Result;
use crate::macros::id3v2_err;
use crate::util::checked_slice;
use crate::util::synchsafe::SynchsafeInteger;

use std::io::Write;

use byteorder::{BigEndian, ByteOrder, WriteBytesExt};

/// The tag identifier every ID3v2 tag starts with
pub const ID3V2_MAGIC: [u8; 3] = *b"ID3";
/// The only major version this crate reads and writes
pub const ID3V22_MAJOR_VERSION: u8 = 2;
/// Size of the tag header
pub const HEADER_LEN: usize = 10;

const FLAG_UNSYNCHRONISATION: u8 = 0x80;
const FLAG_COMPRESSION: u8 = 0x40;

/// An ID3v2.2 tag header
///
/// ```text
/// +-------+---------+----------+-------+------------------+
/// | "ID3" | 0x02    | revision | flags | synchsafe size   |
/// | 3     | 1       | 1        | 1     | 4                |
/// +-------+---------+----------+-------+------------------+
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Id3v22Header {
	/// The revision byte, always written as `0`
	pub revision: u8,
	/// The raw flags byte
	///
	/// Neither unsynchronisation nor compression is supported, so these are only reported.
	pub flags: u8,
	/// The size of the tag contents (**DOES NOT INCLUDE THE HEADER**)
	pub size: u32,
}

impl Id3v22Header {
	/// Look for an ID3v2.2 header at the start of `bytes`
	///
	/// A buffer that doesn't start with an ID3v2.2 tag is not an error, and simply results in `None`.
	///
	/// # Errors
	///
	/// `bytes` starts with an ID3v2.2 magic and version, but is too short to hold the rest of the header
	///
	/// # Examples
	///
	/// ```rust
	/// use id3edit::header::Id3v22Header;
	///
	/// # fn main() -> id3edit::error::Result<()> {
	/// let header = Id3v22Header::parse(b"ID3\x02\x00\x00\x00\x00\x01\x00")?;
	/// assert_eq!(header.map(|header| header.size), Some(128));
	///
	/// // ID3v2.3 tags are not ID3v2.2 tags
	/// assert!(Id3v22Header::parse(b"ID3\x03\x00\x00\x00\x00\x01\x00")?.is_none());
	/// # Ok(()) }
	/// ```
	pub fn parse(bytes: &[u8]) -> Result<Option<Self>> {
		if bytes.len() < 4 || bytes[..3] != ID3V2_MAGIC {
			log::debug!("No ID3v2 tag found");
			return Ok(None);
		}

		if bytes[3] != ID3V22_MAJOR_VERSION {
			log::debug!("Found an ID3v2.{} tag, expected ID3v2.2", bytes[3]);
			return Ok(None);
		}

		log::debug!("Parsing ID3v2.2 header");

		let header = checked_slice(bytes, 0, HEADER_LEN)?;

		let revision = header[4];
		let flags = header[5];

		if flags & FLAG_UNSYNCHRONISATION == FLAG_UNSYNCHRONISATION {
			log::warn!("Tag is marked as unsynchronised, reading it as-is");
		}

		// No compression scheme was ever decided on for ID3v2.2
		if flags & FLAG_COMPRESSION == FLAG_COMPRESSION {
			log::warn!("Tag is marked as compressed, reading it as-is");
		}

		if header[6..].iter().any(|b| b & 0x80 == 0x80) {
			log::warn!("Tag size is not synchsafe, ignoring the high bits");
		}

		let size = BigEndian::read_u32(&header[6..]).unsynch();

		Ok(Some(Self {
			revision,
			flags,
			size,
		}))
	}

	/// Create a header for `content_len` bytes of frames
	///
	/// # Errors
	///
	/// `content_len` doesn't fit in a synchsafe integer (`0x0FFF_FFFF`)
	pub fn for_content_len(content_len: usize) -> Result<Self> {
		let Ok(size) = u32::try_from(content_len) else {
			id3v2_err!(@BAIL SizeOverflow(content_len as u64));
		};

		// Only checking that it fits
		size.synch()?;

		Ok(Self {
			revision: 0,
			flags: 0,
			size,
		})
	}

	/// Write the header to `writer`
	///
	/// # Errors
	///
	/// * The size doesn't fit in a synchsafe integer
	/// * [`std::io::Error`]
	pub fn write_to<W>(self, writer: &mut W) -> Result<()>
	where
		W: Write,
	{
		let size = self.size.synch()?;

		writer.write_all(&ID3V2_MAGIC)?;
		writer.write_u8(ID3V22_MAJOR_VERSION)?;
		writer.write_u8(self.revision)?;
		writer.write_u8(self.flags)?;
		writer.write_u32::<BigEndian>(size)?;

		Ok(())
	}

	/// The total size of the tag, including the header
	pub fn full_tag_size(self) -> usize {
		self.size as usize + HEADER_LEN
	}
}
