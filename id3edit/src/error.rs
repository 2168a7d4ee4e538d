//! Contains the errors that can arise within id3edit
//!
//! The primary error is [`Id3EditError`]. The type of error is determined by [`ErrorKind`].
//!
//! Note that a buffer without an ID3v2.2 tag is *not* an error, decoding it simply yields an
//! empty [`Id3v22Tag`](crate::tag::Id3v22Tag).

use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, Id3EditError>`
pub type Result<T> = std::result::Result<T, Id3EditError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	// File related errors
	/// Attempted to open a file that doesn't have an `mp3` extension
	NotAnMp3,
	/// Attempted to save an [`Mp3File`](crate::file::Mp3File) that has no destination path
	NoPathSet,

	// Picture related errors
	/// The injected [`ImageEncoder`](crate::picture::ImageEncoder) failed to encode the artwork
	ImageEncoding(String),

	// Tag related errors
	/// Errors that arise while reading/writing ID3v2.2 tags
	Id3v2(Id3v2Error),

	// Conversions for external errors
	/// Represents all cases of [`std::io::Error`].
	Io(std::io::Error),
}

/// The types of errors that can occur while interacting with ID3v2.2 tags
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Id3v2ErrorKind {
	/// Arises when a header, frame header, or frame payload would extend past the end of the buffer
	TruncatedInput {
		/// Offset into the buffer the read started at
		offset: usize,
		/// Number of bytes the read needed
		needed: usize,
		/// Number of bytes the buffer actually had past `offset`
		available: usize,
	},
	/// Arises when a frame with a non-padding ID declares no content while more tag data remains
	///
	/// This is only an error with [`ParsingMode::Strict`](crate::config::ParsingMode::Strict).
	ZeroLengthFrame([u8; 3]),
	/// Arises when the tag, or a single frame, is too large for its size field
	///
	/// The tag size is limited to 28 bits (`0x0FFF_FFFF`), and frame sizes to 24 bits (`0xFF_FFFF`).
	SizeOverflow(u64),
}

impl Display for Id3v2ErrorKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::TruncatedInput {
				offset,
				needed,
				available,
			} => write!(
				f,
				"Input is truncated, needed {needed} bytes at offset {offset}, only {available} \
				 available"
			),
			Self::ZeroLengthFrame(id) => write!(
				f,
				"Frame `{}` has a size of zero",
				String::from_utf8_lossy(id)
			),
			Self::SizeOverflow(size) => {
				write!(f, "Content size ({size} bytes) does not fit in its size field")
			},
		}
	}
}

/// An error that arises while interacting with an ID3v2.2 tag
pub struct Id3v2Error {
	kind: Id3v2ErrorKind,
}

impl Id3v2Error {
	/// Create a new `Id3v2Error` from an [`Id3v2ErrorKind`]
	#[must_use]
	pub const fn new(kind: Id3v2ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`Id3v2ErrorKind`]
	pub fn kind(&self) -> &Id3v2ErrorKind {
		&self.kind
	}
}

impl Debug for Id3v2Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "ID3v2: {:?}", self.kind)
	}
}

impl Display for Id3v2Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "ID3v2: {}", self.kind)
	}
}

/// Errors that could occur within id3edit
pub struct Id3EditError {
	pub(crate) kind: ErrorKind,
}

impl Id3EditError {
	/// Create an `Id3EditError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3edit::error::{ErrorKind, Id3EditError};
	///
	/// let not_an_mp3 = Id3EditError::new(ErrorKind::NotAnMp3);
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3edit::error::{ErrorKind, Id3EditError};
	///
	/// let no_path = Id3EditError::new(ErrorKind::NoPathSet);
	/// if let ErrorKind::NoPathSet = no_path.kind() {
	/// 	println!("Where should this be saved?");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}

	/// Returns the [`Id3v2ErrorKind`], if this error came from the tag codec
	pub fn id3v2_kind(&self) -> Option<&Id3v2ErrorKind> {
		match &self.kind {
			ErrorKind::Id3v2(err) => Some(err.kind()),
			_ => None,
		}
	}
}

impl std::error::Error for Id3EditError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match &self.kind {
			ErrorKind::Io(err) => Some(err),
			_ => None,
		}
	}
}

impl Debug for Id3EditError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl From<Id3v2Error> for Id3EditError {
	fn from(input: Id3v2Error) -> Self {
		Self {
			kind: ErrorKind::Id3v2(input),
		}
	}
}

impl From<std::io::Error> for Id3EditError {
	fn from(input: std::io::Error) -> Self {
		Self {
			kind: ErrorKind::Io(input),
		}
	}
}

impl Display for Id3EditError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			// Conversions
			ErrorKind::Io(ref err) => write!(f, "{err}"),

			ErrorKind::NotAnMp3 => write!(f, "File does not have an `mp3` extension"),
			ErrorKind::NoPathSet => write!(f, "No path is set, unable to save the file"),
			ErrorKind::ImageEncoding(ref message) => {
				write!(f, "Picture: failed to encode artwork: {message}")
			},
			ErrorKind::Id3v2(ref id3v2_err) => write!(f, "{id3v2_err}"),
		}
	}
}
