/// Options to control how id3edit parses a tag
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ParseOptions {
	pub(crate) parsing_mode: ParsingMode,
	pub(crate) read_tags: bool,
	pub(crate) read_cover_art: bool,
}

impl Default for ParseOptions {
	/// The default implementation for `ParseOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// ParseOptions {
	/// 	parsing_mode: ParsingMode::Strict,
	/// 	read_tags: true,
	/// 	read_cover_art: true,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

impl ParseOptions {
	/// Default parsing mode
	pub const DEFAULT_PARSING_MODE: ParsingMode = ParsingMode::Strict;

	/// Creates a new `ParseOptions`, alias for `Default` implementation
	///
	/// See also: [`ParseOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3edit::config::ParseOptions;
	///
	/// let parsing_options = ParseOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			parsing_mode: Self::DEFAULT_PARSING_MODE,
			read_tags: true,
			read_cover_art: true,
		}
	}

	/// The parsing mode to use, see [`ParsingMode`] for details
	///
	/// # Examples
	///
	/// ```rust
	/// use id3edit::config::{ParseOptions, ParsingMode};
	///
	/// // By default, `parsing_mode` is ParsingMode::Strict. Here, we'll take whatever we can get.
	/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Relaxed);
	/// ```
	pub fn parsing_mode(&mut self, parsing_mode: ParsingMode) -> Self {
		self.parsing_mode = parsing_mode;
		*self
	}

	/// Whether or not to read an existing tag
	///
	/// When disabled, an [`Mp3File`](crate::file::Mp3File) starts out with an empty tag, and any
	/// existing tag is replaced when the file is saved.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3edit::config::ParseOptions;
	///
	/// // I'm going to overwrite everything anyway!
	/// let parsing_options = ParseOptions::new().read_tags(false);
	/// ```
	pub fn read_tags(&mut self, read_tags: bool) -> Self {
		self.read_tags = read_tags;
		*self
	}

	/// Whether or not to read cover art
	///
	/// # Examples
	///
	/// ```rust
	/// use id3edit::config::ParseOptions;
	///
	/// // Reading cover art is expensive, and I do not need it!
	/// let parsing_options = ParseOptions::new().read_cover_art(false);
	/// ```
	pub fn read_cover_art(&mut self, read_cover_art: bool) -> Self {
		self.read_cover_art = read_cover_art;
		*self
	}
}

/// The parsing strictness mode
///
/// This affects how the decoder reacts to a tag that is present but structurally broken.
///
/// A buffer that simply has no ID3v2.2 tag is never an error, regardless of the mode.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[non_exhaustive]
pub enum ParsingMode {
	/// Any structural corruption aborts the decode with an error
	///
	/// This includes:
	///
	/// * A frame header or payload that extends past the end of the buffer
	/// * A frame that declares a size of zero
	#[default]
	Strict,
	/// Stop at the first corrupt frame and keep everything decoded up to that point
	///
	/// A warning is logged for the frame that ended the decode.
	Relaxed,
}
