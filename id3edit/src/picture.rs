//! Artwork handling
//!
//! An ID3v2.2 tag carries at most one picture, stored as either PNG or JPEG data. Converting a
//! decoded image into either of those is left to the caller, through [`ImageEncoder`].

use std::fmt::{Display, Formatter};

/// The quality factor handed to an [`ImageEncoder`]
pub const ARTWORK_QUALITY: f32 = 0.5;

/// The image format of the artwork
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ArtworkFormat {
	/// PNG image
	#[default]
	Png,
	/// JPEG image
	Jpeg,
}

impl ArtworkFormat {
	/// Classify the artwork from the first letter of the `PIC` image format field
	///
	/// Only `'J'` denotes JPEG, anything else is read as PNG.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3edit::picture::ArtworkFormat;
	///
	/// assert_eq!(ArtworkFormat::from_marker(b'J'), ArtworkFormat::Jpeg);
	/// assert_eq!(ArtworkFormat::from_marker(b'P'), ArtworkFormat::Png);
	/// assert_eq!(ArtworkFormat::from_marker(b'G'), ArtworkFormat::Png);
	/// ```
	pub fn from_marker(marker: u8) -> Self {
		match marker {
			b'J' => Self::Jpeg,
			_ => Self::Png,
		}
	}

	/// The `PIC` frame descriptor written before the image data
	///
	/// This is the text encoding, the 3 character image format, the picture type, and an empty
	/// description.
	pub(crate) fn descriptor(self) -> [u8; 6] {
		match self {
			Self::Png => [0, b'P', b'N', b'G', 0, 0],
			Self::Jpeg => [0, b'J', b'P', b'G', 0, 0],
		}
	}

	/// Get the MIME type of the format
	///
	/// # Examples
	///
	/// ```rust
	/// use id3edit::picture::ArtworkFormat;
	///
	/// assert_eq!(ArtworkFormat::Jpeg.mime_type(), "image/jpeg");
	/// ```
	pub fn mime_type(self) -> &'static str {
		match self {
			Self::Png => "image/png",
			Self::Jpeg => "image/jpeg",
		}
	}

	/// Get the file extension of the format
	pub fn ext(self) -> &'static str {
		match self {
			Self::Png => "png",
			Self::Jpeg => "jpg",
		}
	}
}

impl Display for ArtworkFormat {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.mime_type())
	}
}

/// Encoded artwork, ready to be written as-is
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artwork {
	pub(crate) data: Vec<u8>,
	pub(crate) format: ArtworkFormat,
}

impl Artwork {
	/// Create a new `Artwork` from already encoded image data
	pub fn new(data: Vec<u8>, format: ArtworkFormat) -> Self {
		Self { data, format }
	}

	/// The encoded image data
	pub fn data(&self) -> &[u8] {
		&self.data
	}

	/// The image format
	pub fn format(&self) -> ArtworkFormat {
		self.format
	}

	/// Consumes the `Artwork`, returning its data
	pub fn into_data(self) -> Vec<u8> {
		self.data
	}
}

/// A capability to turn an image into encoded PNG or JPEG data
///
/// id3edit has no image support of its own, see [`Id3v22Tag::set_artwork_from_image`](crate::tag::Id3v22Tag::set_artwork_from_image).
///
/// # Examples
///
/// ```rust
/// use id3edit::picture::{ArtworkFormat, ImageEncoder};
///
/// /// Images that are already encoded, just copy them over
/// struct Passthrough;
///
/// impl ImageEncoder for Passthrough {
/// 	type Image = [u8];
/// 	type Error = std::convert::Infallible;
///
/// 	fn encode(
/// 		&self,
/// 		image: &[u8],
/// 		_format: ArtworkFormat,
/// 		_quality: f32,
/// 	) -> Result<Vec<u8>, Self::Error> {
/// 		Ok(image.to_vec())
/// 	}
/// }
/// ```
pub trait ImageEncoder {
	/// The decoded image type this encoder accepts
	type Image: ?Sized;
	/// The error returned when encoding fails
	type Error: Display;

	/// Encode `image` as `format`
	///
	/// `quality` is in the range `0.0..=1.0`, and only has meaning for lossy formats.
	///
	/// # Errors
	///
	/// Implementation specific
	fn encode(
		&self,
		image: &Self::Image,
		format: ArtworkFormat,
		quality: f32,
	) -> Result<Vec<u8>, Self::Error>;
}
