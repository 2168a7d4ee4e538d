//! Read and write ID3v2.2 tags in MP3 files.
//!
//! An ID3v2.2 tag sits at the very start of an MP3 file: a 10 byte header followed by a series of
//! frames, each holding a single field. id3edit understands the common text frames, the lyrics,
//! and a single piece of artwork. Everything else is skipped when reading, and dropped when
//! writing.
//!
//! # Examples
//!
//! ## Working with raw tags
//!
//! ```rust
//! # fn main() -> id3edit::error::Result<()> {
//! use id3edit::picture::ArtworkFormat;
//! use id3edit::tag::Id3v22Tag;
//!
//! let mut tag = Id3v22Tag::new();
//! tag.set_artist("Foo artist");
//! tag.set_track_number("1/10");
//! tag.set_artwork_from_bytes(vec![0xFF, 0xD8, 0xFF, 0xE0], ArtworkFormat::Jpeg);
//!
//! let bytes = id3edit::encode(&tag)?;
//! assert_eq!(id3edit::decode(&bytes)?, tag);
//! # Ok(()) }
//! ```
//!
//! ## Editing a file
//!
//! ```rust,no_run
//! # fn main() -> id3edit::error::Result<()> {
//! use id3edit::config::ParseOptions;
//! use id3edit::file::Mp3File;
//!
//! let mut file = Mp3File::open("song.mp3", ParseOptions::new())?;
//! file.tag_mut().set_album("Bar album");
//! file.tag_mut().remove_lyrics();
//!
//! file.save()?;
//! # Ok(()) }
//! ```
//!
//! # Notes on the format
//!
//! * The tag size is a 28-bit synchsafe integer (see [`util::synchsafe`]), frame sizes are plain
//!   24-bit integers.
//! * Text is read as UTF-8 when valid, and Latin-1 otherwise. It is always written as UTF-8.
//! * Unsynchronisation and compression are not supported. The flags are reported, but the tag is
//!   read as-is.

pub mod config;
pub mod error;
pub mod file;
pub mod frame;
pub mod header;
pub(crate) mod macros;
pub mod picture;
pub mod read;
pub mod tag;
pub mod util;
pub mod write;

pub use crate::file::Mp3File;
pub use crate::read::{decode, decode_with_options};
pub use crate::tag::Id3v22Tag;
pub use crate::write::encode;

pub mod prelude {
	//! A prelude for commonly used items in the library.
	//!
	//! This module is intended to be wildcard imported.
	//!
	//! ```rust
	//! use id3edit::prelude::*;
	//! ```

	pub use crate::config::{ParseOptions, ParsingMode};
	pub use crate::file::Mp3File;
	pub use crate::frame::FrameRole;
	pub use crate::picture::{ArtworkFormat, ImageEncoder};
	pub use crate::tag::Id3v22Tag;
	pub use crate::util::synchsafe::SynchsafeInteger;
}
