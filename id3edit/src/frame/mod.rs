//! The ID3v2.2 frame catalog
//!
//! Every frame we understand is described by a single [`FrameDescriptor`] in [`FRAME_CATALOG`].
//! The descriptor ties the 3 byte frame ID to its [`FrameRole`] and the number of bytes that
//! precede the payload, counted from the start of the frame (the 6 byte frame header included).
//!
//! | Role          | ID    | Content offset |
//! |---------------|-------|----------------|
//! | Artist        | `TP1` | 6              |
//! | Title         | `TT2` | 6              |
//! | Album         | `TAL` | 6              |
//! | Composer      | `TCM` | 6              |
//! | Track number  | `TRK` | 6              |
//! | Year          | `TYE` | 6              |
//! | Copyright     | `TCR` | 6              |
//! | Publisher     | `TPB` | 6              |
//! | Lyrics        | `ULT` | 11             |
//! | Artwork       | `PIC` | 12             |
//! | Header        | `ID3` | 10             |

pub(crate) mod header;

/// The semantic role of a frame
///
/// `Header` is not a frame, but shares the catalog so its ID and size live next to the others.
/// [`lookup`] never classifies a frame as `Header`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum FrameRole {
	/// Lead artist (`TP1`)
	Artist,
	/// Title (`TT2`)
	Title,
	/// Album (`TAL`)
	Album,
	/// Composer (`TCM`)
	Composer,
	/// Track number, possibly in the form `N/M` (`TRK`)
	TrackNumber,
	/// Year (`TYE`)
	Year,
	/// Copyright message (`TCR`)
	Copyright,
	/// Publisher (`TPB`)
	Publisher,
	/// Unsynchronised lyrics (`ULT`)
	Lyrics,
	/// Attached picture (`PIC`)
	Artwork,
	/// The tag header (`ID3`)
	Header,
}

/// A single catalog entry
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameDescriptor {
	/// The raw frame identifier
	pub id: [u8; 3],
	/// The role of frames with this identifier
	pub role: FrameRole,
	/// Number of bytes preceding the payload, from the start of the frame
	pub content_offset: usize,
}

/// Offset of the payload in text frames (the frame header)
pub const TEXT_CONTENT_OFFSET: usize = 6;
/// Offset of the payload in `ULT` frames (frame header + encoding + language + empty description)
pub const LYRICS_CONTENT_OFFSET: usize = 11;
/// Offset of the payload in `PIC` frames (frame header + encoding + format + type + empty description)
pub const ARTWORK_CONTENT_OFFSET: usize = 12;
/// Size of the tag header
pub const HEADER_CONTENT_OFFSET: usize = 10;

/// Every known frame, indexed by [`FrameRole`]
pub static FRAME_CATALOG: [FrameDescriptor; 11] = [
	FrameDescriptor::new(*b"TP1", FrameRole::Artist, TEXT_CONTENT_OFFSET),
	FrameDescriptor::new(*b"TT2", FrameRole::Title, TEXT_CONTENT_OFFSET),
	FrameDescriptor::new(*b"TAL", FrameRole::Album, TEXT_CONTENT_OFFSET),
	FrameDescriptor::new(*b"TCM", FrameRole::Composer, TEXT_CONTENT_OFFSET),
	FrameDescriptor::new(*b"TRK", FrameRole::TrackNumber, TEXT_CONTENT_OFFSET),
	FrameDescriptor::new(*b"TYE", FrameRole::Year, TEXT_CONTENT_OFFSET),
	FrameDescriptor::new(*b"TCR", FrameRole::Copyright, TEXT_CONTENT_OFFSET),
	FrameDescriptor::new(*b"TPB", FrameRole::Publisher, TEXT_CONTENT_OFFSET),
	FrameDescriptor::new(*b"ULT", FrameRole::Lyrics, LYRICS_CONTENT_OFFSET),
	FrameDescriptor::new(*b"PIC", FrameRole::Artwork, ARTWORK_CONTENT_OFFSET),
	FrameDescriptor::new(*b"ID3", FrameRole::Header, HEADER_CONTENT_OFFSET),
];

impl FrameDescriptor {
	const fn new(id: [u8; 3], role: FrameRole, content_offset: usize) -> Self {
		Self {
			id,
			role,
			content_offset,
		}
	}
}

impl FrameRole {
	/// The single-value text roles, in the order they are written
	pub const TEXT_ROLES: [FrameRole; 8] = [
		FrameRole::Artist,
		FrameRole::Title,
		FrameRole::Album,
		FrameRole::Composer,
		FrameRole::TrackNumber,
		FrameRole::Year,
		FrameRole::Copyright,
		FrameRole::Publisher,
	];

	/// The catalog entry for this role
	pub fn descriptor(self) -> &'static FrameDescriptor {
		// The catalog is declared in discriminant order
		&FRAME_CATALOG[self as usize]
	}

	/// The raw frame identifier
	///
	/// # Examples
	///
	/// ```rust
	/// use id3edit::frame::FrameRole;
	///
	/// assert_eq!(&FrameRole::Artist.id(), b"TP1");
	/// ```
	pub fn id(self) -> [u8; 3] {
		self.descriptor().id
	}

	/// Number of bytes preceding the payload, from the start of the frame
	///
	/// # Examples
	///
	/// ```rust
	/// use id3edit::frame::FrameRole;
	///
	/// assert_eq!(FrameRole::Title.content_offset(), 6);
	/// assert_eq!(FrameRole::Lyrics.content_offset(), 11);
	/// assert_eq!(FrameRole::Artwork.content_offset(), 12);
	/// ```
	pub fn content_offset(self) -> usize {
		self.descriptor().content_offset
	}

	/// Whether this is one of [`FrameRole::TEXT_ROLES`]
	pub const fn is_text(self) -> bool {
		!matches!(
			self,
			FrameRole::Lyrics | FrameRole::Artwork | FrameRole::Header
		)
	}
}

/// Classify a frame by its identifier
///
/// # Examples
///
/// ```rust
/// use id3edit::frame::{lookup, FrameRole};
///
/// assert_eq!(lookup(*b"TT2"), Some(FrameRole::Title));
///
/// // Unknown frames, and the tag header, have no role
/// assert_eq!(lookup(*b"COM"), None);
/// assert_eq!(lookup(*b"ID3"), None);
/// ```
pub fn lookup(id: [u8; 3]) -> Option<FrameRole> {
	FRAME_CATALOG
		.iter()
		.find(|descriptor| descriptor.id == id && descriptor.role != FrameRole::Header)
		.map(|descriptor| descriptor.role)
}
