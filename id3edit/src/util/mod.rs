//! Various utilities used throughout id3edit

pub mod synchsafe;
pub(crate) mod text;

use crate::error::Result;
use crate::macros::id3v2_err;

/// Borrow `needed` bytes of `bytes`, starting at `offset`
///
/// Every read the decoder performs goes through this, so a short buffer surfaces as
/// [`Id3v2ErrorKind::TruncatedInput`](crate::error::Id3v2ErrorKind::TruncatedInput) rather
/// than a panic.
pub(crate) fn checked_slice(bytes: &[u8], offset: usize, needed: usize) -> Result<&[u8]> {
	let available = bytes.len().saturating_sub(offset);
	match offset.checked_add(needed) {
		Some(end) if end <= bytes.len() => Ok(&bytes[offset..end]),
		_ => Err(id3v2_err!(TruncatedInput {
			offset,
			needed,
			available,
		})),
	}
}

#[cfg(test)]
mod tests {
	use super::checked_slice;
	use crate::error::Id3v2ErrorKind;

	#[test_log::test]
	#[allow(trivial_casts)]
	fn checked_slice_in_bounds() {
		let bytes = [1, 2, 3, 4, 5];
		assert_eq!(checked_slice(&bytes, 1, 3).unwrap(), &[2, 3, 4]);
		assert_eq!(checked_slice(&bytes, 5, 0).unwrap(), &[] as &[u8]);
	}

	#[test_log::test]
	fn checked_slice_out_of_bounds() {
		let bytes = [1, 2, 3, 4, 5];

		let err = checked_slice(&bytes, 3, 4).unwrap_err();
		assert_eq!(
			err.id3v2_kind(),
			Some(&Id3v2ErrorKind::TruncatedInput {
				offset: 3,
				needed: 4,
				available: 2,
			})
		);

		let err = checked_slice(&bytes, 10, 1).unwrap_err();
		assert_eq!(
			err.id3v2_kind(),
			Some(&Id3v2ErrorKind::TruncatedInput {
				offset: 10,
				needed: 1,
				available: 0,
			})
		);

		assert!(checked_slice(&bytes, usize::MAX, 2).is_err());
	}
}
