//! Reading and writing tags in MP3 files
//!
//! [`Mp3File`] ties the codec to the file it came from. The tag is decoded once on open, edited in
//! memory, and written back in front of the untouched audio on [`Mp3File::save`].

use crate::config::ParseOptions;
use crate::error::Result;
use crate::header::Id3v22Header;
use crate::macros::err;
use crate::read::parse_id3v22;
use crate::tag::Id3v22Tag;
use crate::write::encode;

use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// An MP3 file and its ID3v2.2 tag
///
/// # Examples
///
/// ```rust,no_run
/// use id3edit::config::ParseOptions;
/// use id3edit::file::Mp3File;
///
/// # fn main() -> id3edit::error::Result<()> {
/// let mut file = Mp3File::open("song.mp3", ParseOptions::new())?;
/// println!("Artist: {}", file.tag().artist());
///
/// file.tag_mut().set_title("New title");
/// file.save()?;
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct Mp3File {
	path: Option<PathBuf>,
	data: Vec<u8>,
	/// Length of the tag at the start of `data`, header included
	existing_tag_len: usize,
	tag: Id3v22Tag,
}

impl Mp3File {
	/// Read the MP3 file at `path`
	///
	/// The file is also the destination for [`Mp3File::save`]. With
	/// [`ParseOptions::read_tags`] disabled, the existing tag is not read, and will be replaced
	/// entirely when saving.
	///
	/// # Errors
	///
	/// * [`std::io::Error`], for example if the file doesn't exist
	/// * `path` doesn't have an `mp3` extension
	/// * The existing tag is corrupt, see [`decode_with_options`](crate::read::decode_with_options)
	pub fn open<P>(path: P, parse_options: ParseOptions) -> Result<Self>
	where
		P: AsRef<Path>,
	{
		let path = path.as_ref();
		log::debug!("Opening {}", path.display());

		let data = std::fs::read(path)?;

		if !has_mp3_extension(path) {
			err!(NotAnMp3);
		}

		let mut file = Self::from_bytes(data, parse_options)?;
		file.path = Some(path.to_path_buf());

		Ok(file)
	}

	/// Read an MP3 file from memory
	///
	/// The result has no path, see [`Mp3File::set_path`].
	///
	/// # Errors
	///
	/// The existing tag is corrupt, see [`decode_with_options`](crate::read::decode_with_options)
	///
	/// # Examples
	///
	/// ```rust
	/// use id3edit::config::ParseOptions;
	/// use id3edit::file::Mp3File;
	///
	/// # fn main() -> id3edit::error::Result<()> {
	/// let audio = vec![0xFF, 0xFB, 0x90, 0x00];
	///
	/// let mut file = Mp3File::from_bytes(audio.clone(), ParseOptions::new())?;
	/// assert!(file.tag().is_empty());
	///
	/// file.tag_mut().set_artist("Artist");
	///
	/// let data = file.mp3_data()?;
	/// assert!(data.starts_with(b"ID3\x02"));
	/// assert!(data.ends_with(&audio));
	/// # Ok(()) }
	/// ```
	pub fn from_bytes(data: Vec<u8>, parse_options: ParseOptions) -> Result<Self> {
		let (header, existing_tag_len) = match Id3v22Header::parse(&data) {
			// A tag claiming to be larger than the file is all tag
			Ok(header) => (
				header,
				header.map_or(0, |header| header.full_tag_size().min(data.len())),
			),
			// The header can only fail to parse when it runs past the end of the data
			Err(err) if !parse_options.read_tags => {
				log::warn!("Existing tag is unreadable, it will be replaced: {}", err);
				(None, data.len())
			},
			Err(err) => return Err(err),
		};

		let tag = match header {
			Some(header) if parse_options.read_tags => parse_id3v22(&data, header, parse_options)?,
			Some(_) => {
				log::debug!("Not reading the existing tag, it will be replaced");
				Id3v22Tag::default()
			},
			None => Id3v22Tag::default(),
		};

		Ok(Self {
			path: None,
			data,
			existing_tag_len,
			tag,
		})
	}

	/// The path the file is saved to
	pub fn path(&self) -> Option<&Path> {
		self.path.as_deref()
	}

	/// Change the path the file is saved to
	pub fn set_path<P>(&mut self, path: P)
	where
		P: Into<PathBuf>,
	{
		self.path = Some(path.into());
	}

	/// Returns a reference to the tag
	pub fn tag(&self) -> &Id3v22Tag {
		&self.tag
	}

	/// Returns a mutable reference to the tag
	pub fn tag_mut(&mut self) -> &mut Id3v22Tag {
		&mut self.tag
	}

	/// The bytes that [`Mp3File::save`] writes
	///
	/// This is the encoded tag, followed by the original data with its old ID3v2.2 tag removed.
	/// If the tag is empty, there is nothing to write, and the original data is returned as-is.
	///
	/// # Errors
	///
	/// The tag can't be encoded, see [`encode`]
	pub fn mp3_data(&self) -> Result<Vec<u8>> {
		let tag_bytes = encode(&self.tag)?;
		if tag_bytes.is_empty() {
			return Ok(self.data.clone());
		}

		let audio = &self.data[self.existing_tag_len..];

		let mut data = Vec::with_capacity(tag_bytes.len() + audio.len());
		data.extend_from_slice(&tag_bytes);
		data.extend_from_slice(audio);

		Ok(data)
	}

	/// Write the file back to its path
	///
	/// The new contents are written to a temporary file in the same directory first, which then
	/// replaces the original. The permissions of the replaced file are kept.
	///
	/// # Errors
	///
	/// * No path is set
	/// * The tag can't be encoded, see [`encode`]
	/// * [`std::io::Error`]
	pub fn save(&self) -> Result<()> {
		let Some(path) = self.path.as_deref() else {
			err!(NoPathSet);
		};

		let data = self.mp3_data()?;
		log::debug!("Saving {} bytes to {}", data.len(), path.display());

		let dir = match path.parent() {
			Some(parent) if !parent.as_os_str().is_empty() => parent,
			_ => Path::new("."),
		};

		let mut temp_file = NamedTempFile::new_in(dir)?;
		temp_file.write_all(&data)?;

		// Temporary files are created owner-only, keep whatever the replaced file had
		if let Ok(metadata) = std::fs::metadata(path) {
			temp_file.as_file().set_permissions(metadata.permissions())?;
		}

		temp_file.as_file().sync_all()?;
		temp_file.persist(path).map_err(|e| e.error)?;

		Ok(())
	}
}

fn has_mp3_extension(path: &Path) -> bool {
	path.extension()
		.and_then(OsStr::to_str)
		.is_some_and(|ext| ext.eq_ignore_ascii_case("mp3"))
}
