// Shorthand for return Err(Id3EditError::new(ErrorKind::Foo))
//
// Usage:
// - err!(Variant)          -> return Err(Id3EditError::new(ErrorKind::Variant))
// - err!(Variant(Message)) -> return Err(Id3EditError::new(ErrorKind::Variant(Message)))
macro_rules! err {
	($variant:ident) => {
		return Err(crate::error::Id3EditError::new(
			crate::error::ErrorKind::$variant,
		))
	};
	($variant:ident($reason:expr)) => {
		return Err(crate::error::Id3EditError::new(
			crate::error::ErrorKind::$variant($reason),
		))
	};
}

// Shorthand for Id3v2Error::new(Id3v2ErrorKind::Foo).into()
//
// Usage:
//
// - id3v2_err!(Variant(...))
// - id3v2_err!(Variant { ... })
//
// or bail:
//
// - id3v2_err!(@BAIL Variant(...))
macro_rules! id3v2_err {
	(@BAIL $($kind:tt)+) => {
		return Err(id3v2_err!($($kind)+))
	};
	($($kind:tt)+) => {
		Into::<crate::error::Id3EditError>::into(crate::error::Id3v2Error::new(
			crate::error::Id3v2ErrorKind::$($kind)+,
		))
	};
}

pub(crate) use {err, id3v2_err};
