//! The in-memory ID3v2.2 tag

use crate::error::Result;
use crate::frame::FrameRole;
use crate::macros::err;
use crate::picture::{ARTWORK_QUALITY, Artwork, ArtworkFormat, ImageEncoder};

// Usage:
//
// impl_accessor! {
//     [field name] => "ID";
// }
//
// Multi-word names are separated by spaces, and joined with `_` for the method and field names.
macro_rules! impl_accessor {
	($([$name:tt $($other:tt)*] => $id:tt;)+) => {
		paste::paste! {
			$(
				#[doc = "Returns the " $name $(" " $other)* " (`" $id "`), or an empty string if it isn't set"]
				pub fn [<$name $(_ $other)*>](&self) -> &str {
					&self.[<$name $(_ $other)*>]
				}

				#[doc = "Sets the " $name $(" " $other)* " (`" $id "`)"]
				///
				/// An empty value is the same as removing it.
				pub fn [<set_ $name $(_ $other)*>](&mut self, value: impl Into<String>) {
					self.[<$name $(_ $other)*>] = value.into();
				}

				#[doc = "Removes the " $name $(" " $other)* " (`" $id "`)"]
				pub fn [<remove_ $name $(_ $other)*>](&mut self) {
					self.[<$name $(_ $other)*>].clear();
				}
			)+
		}
	}
}

/// An ID3v2.2 tag
///
/// Every field holds a single value, and an empty string means the field is absent. Absent fields
/// are not written.
///
/// # Examples
///
/// ```rust
/// use id3edit::tag::Id3v22Tag;
///
/// let mut tag = Id3v22Tag::new();
/// assert!(tag.is_empty());
///
/// tag.set_artist("Foo artist");
/// tag.set_title("Bar title");
///
/// assert_eq!(tag.artist(), "Foo artist");
/// assert_eq!(tag.album(), "");
/// ```
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Id3v22Tag {
	pub(crate) artist: String,
	pub(crate) title: String,
	pub(crate) album: String,
	pub(crate) composer: String,
	pub(crate) track_number: String,
	pub(crate) year: String,
	pub(crate) copyright: String,
	pub(crate) publisher: String,
	pub(crate) lyrics: String,
	pub(crate) artwork: Option<Artwork>,
}

impl Id3v22Tag {
	/// Create a new empty `Id3v22Tag`
	pub fn new() -> Self {
		Self::default()
	}

	impl_accessor!(
		[artist]       => "TP1";
		[title]        => "TT2";
		[album]        => "TAL";
		[composer]     => "TCM";
		[track number] => "TRK";
		[year]         => "TYE";
		[copyright]    => "TCR";
		[publisher]    => "TPB";
		[lyrics]       => "ULT";
	);

	/// Get the text stored for a [`FrameRole`]
	///
	/// [`FrameRole::Artwork`] and [`FrameRole::Header`] hold no text, and always return an empty string.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3edit::frame::FrameRole;
	/// use id3edit::tag::Id3v22Tag;
	///
	/// let mut tag = Id3v22Tag::new();
	/// tag.set_text(FrameRole::Year, "1984");
	///
	/// assert_eq!(tag.text(FrameRole::Year), "1984");
	/// assert_eq!(tag.year(), "1984");
	/// ```
	pub fn text(&self, role: FrameRole) -> &str {
		match role {
			FrameRole::Artist => &self.artist,
			FrameRole::Title => &self.title,
			FrameRole::Album => &self.album,
			FrameRole::Composer => &self.composer,
			FrameRole::TrackNumber => &self.track_number,
			FrameRole::Year => &self.year,
			FrameRole::Copyright => &self.copyright,
			FrameRole::Publisher => &self.publisher,
			FrameRole::Lyrics => &self.lyrics,
			FrameRole::Artwork | FrameRole::Header => "",
		}
	}

	/// Set the text stored for a [`FrameRole`]
	///
	/// This does nothing for [`FrameRole::Artwork`] and [`FrameRole::Header`].
	pub fn set_text(&mut self, role: FrameRole, value: impl Into<String>) {
		if let Some(field) = self.text_mut(role) {
			*field = value.into();
		}
	}

	pub(crate) fn text_mut(&mut self, role: FrameRole) -> Option<&mut String> {
		match role {
			FrameRole::Artist => Some(&mut self.artist),
			FrameRole::Title => Some(&mut self.title),
			FrameRole::Album => Some(&mut self.album),
			FrameRole::Composer => Some(&mut self.composer),
			FrameRole::TrackNumber => Some(&mut self.track_number),
			FrameRole::Year => Some(&mut self.year),
			FrameRole::Copyright => Some(&mut self.copyright),
			FrameRole::Publisher => Some(&mut self.publisher),
			FrameRole::Lyrics => Some(&mut self.lyrics),
			FrameRole::Artwork | FrameRole::Header => None,
		}
	}

	/// Returns the artwork, if there is any
	pub fn artwork(&self) -> Option<&Artwork> {
		self.artwork.as_ref()
	}

	/// Returns the format of the artwork, if there is any
	pub fn artwork_format(&self) -> Option<ArtworkFormat> {
		self.artwork.as_ref().map(Artwork::format)
	}

	/// Removes the artwork, returning it
	pub fn remove_artwork(&mut self) -> Option<Artwork> {
		self.artwork.take()
	}

	/// Store already encoded image data as the artwork
	///
	/// `data` is written as-is, it is up to the caller to make sure it is actually `format`.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3edit::picture::ArtworkFormat;
	/// use id3edit::tag::Id3v22Tag;
	///
	/// let mut tag = Id3v22Tag::new();
	/// tag.set_artwork_from_bytes(vec![0xFF, 0xD8, 0xFF], ArtworkFormat::Jpeg);
	///
	/// assert_eq!(tag.artwork_format(), Some(ArtworkFormat::Jpeg));
	/// ```
	pub fn set_artwork_from_bytes(&mut self, data: Vec<u8>, format: ArtworkFormat) {
		self.artwork = Some(Artwork::new(data, format));
	}

	/// Encode `image` with `encoder`, and store the result as the artwork
	///
	/// The image is encoded at a quality of [`ARTWORK_QUALITY`].
	///
	/// # Errors
	///
	/// The encoder failed, see [`ErrorKind::ImageEncoding`](crate::error::ErrorKind::ImageEncoding).
	/// The existing artwork is left untouched in this case.
	pub fn set_artwork_from_image<E>(
		&mut self,
		encoder: &E,
		image: &E::Image,
		format: ArtworkFormat,
	) -> Result<()>
	where
		E: ImageEncoder,
	{
		let data = match encoder.encode(image, format, ARTWORK_QUALITY) {
			Ok(data) => data,
			Err(e) => err!(ImageEncoding(e.to_string())),
		};

		self.set_artwork_from_bytes(data, format);
		Ok(())
	}

	/// Whether the tag has nothing to write
	pub fn is_empty(&self) -> bool {
		self.artwork.is_none() && self.lyrics.is_empty() && self.text_is_empty()
	}

	fn text_is_empty(&self) -> bool {
		FrameRole::TEXT_ROLES
			.iter()
			.all(|role| self.text(*role).is_empty())
	}
}

#[cfg(test)]
mod tests {
	use super::Id3v22Tag;
	use crate::error::ErrorKind;
	use crate::frame::FrameRole;
	use crate::picture::{ARTWORK_QUALITY, ArtworkFormat, ImageEncoder};

	use std::cell::Cell;

	struct Solid {
		quality: Cell<Option<f32>>,
	}

	impl ImageEncoder for Solid {
		type Image = u8;
		type Error = String;

		fn encode(
			&self,
			image: &u8,
			format: ArtworkFormat,
			quality: f32,
		) -> Result<Vec<u8>, Self::Error> {
			self.quality.set(Some(quality));
			match format {
				ArtworkFormat::Png => Ok(vec![*image; 4]),
				ArtworkFormat::Jpeg => Err(String::from("no JPEG support")),
			}
		}
	}

	#[test_log::test]
	fn accessors() {
		let mut tag = Id3v22Tag::new();

		tag.set_track_number("3/12");
		assert_eq!(tag.track_number(), "3/12");
		assert_eq!(tag.text(FrameRole::TrackNumber), "3/12");
		assert!(!tag.is_empty());

		tag.remove_track_number();
		assert_eq!(tag.track_number(), "");
		assert!(tag.is_empty());
	}

	#[test_log::test]
	fn roles_map_to_fields() {
		let mut tag = Id3v22Tag::new();
		for role in FrameRole::TEXT_ROLES.into_iter().chain([FrameRole::Lyrics]) {
			tag.set_text(role, format!("{role:?}"));
		}

		assert_eq!(tag.artist(), "Artist");
		assert_eq!(tag.title(), "Title");
		assert_eq!(tag.album(), "Album");
		assert_eq!(tag.composer(), "Composer");
		assert_eq!(tag.track_number(), "TrackNumber");
		assert_eq!(tag.year(), "Year");
		assert_eq!(tag.copyright(), "Copyright");
		assert_eq!(tag.publisher(), "Publisher");
		assert_eq!(tag.lyrics(), "Lyrics");

		tag.set_text(FrameRole::Artwork, "ignored");
		tag.set_text(FrameRole::Header, "ignored");
		assert_eq!(tag.text(FrameRole::Artwork), "");
		assert!(tag.artwork().is_none());
	}

	#[test_log::test]
	fn artwork_from_image() {
		let encoder = Solid {
			quality: Cell::new(None),
		};

		let mut tag = Id3v22Tag::new();
		tag.set_artwork_from_image(&encoder, &7, ArtworkFormat::Png)
			.unwrap();

		assert_eq!(encoder.quality.get(), Some(ARTWORK_QUALITY));
		assert_eq!(tag.artwork().unwrap().data(), &[7, 7, 7, 7]);
		assert_eq!(tag.artwork_format(), Some(ArtworkFormat::Png));
	}

	#[test_log::test]
	fn artwork_from_image_failure() {
		let encoder = Solid {
			quality: Cell::new(None),
		};

		let mut tag = Id3v22Tag::new();
		tag.set_artwork_from_bytes(vec![1, 2, 3], ArtworkFormat::Png);

		let err = tag
			.set_artwork_from_image(&encoder, &7, ArtworkFormat::Jpeg)
			.unwrap_err();
		assert!(matches!(err.kind(), ErrorKind::ImageEncoding(message) if message == "no JPEG support"));

		// Untouched
		assert_eq!(tag.artwork().unwrap().data(), &[1, 2, 3]);

		let removed = tag.remove_artwork().unwrap();
		assert_eq!(removed.into_data(), vec![1, 2, 3]);
		assert!(tag.is_empty());
	}
}
