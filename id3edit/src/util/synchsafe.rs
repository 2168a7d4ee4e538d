//! Utilities for working with synchsafe integers
//!
//! A synchsafe integer keeps the most significant bit of every byte cleared, so the encoded
//! value can never be mistaken for an MPEG frame sync (`0xFF 0xE0`). ID3v2.2 uses it for the
//! tag size in the header, leaving 28 usable bits in 4 bytes.

use crate::error::Result;
use crate::macros::id3v2_err;

/// An integer that can be converted to and from synchsafe variants
pub trait SynchsafeInteger: Sized {
	/// Create a synchsafe integer
	///
	/// # Errors
	///
	/// `self` doesn't fit in <`INTEGER_TYPE::BITS - size_of::<INTEGER_TYPE>()`> bits
	///
	/// # Examples
	///
	/// ```rust
	/// use id3edit::util::synchsafe::SynchsafeInteger;
	///
	/// # fn main() -> id3edit::error::Result<()> {
	/// // Maximum value we can represent in a synchsafe u32
	/// let unsynch_number = 0xFFF_FFFF_u32;
	/// let synch_number = unsynch_number.synch()?;
	///
	/// // Each byte should have 7 set bits and an MSB of 0
	/// assert_eq!(synch_number, 0b01111111_01111111_01111111_01111111_u32);
	/// # Ok(()) }
	/// ```
	fn synch(self) -> Result<Self>;

	/// Unsynchronise a synchsafe integer
	///
	/// The most significant bit of each byte is ignored.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3edit::util::synchsafe::SynchsafeInteger;
	///
	/// # fn main() -> id3edit::error::Result<()> {
	/// let unsynch_number = 0xFFF_FFFF_u32;
	/// let synch_number = unsynch_number.synch()?;
	///
	/// // Now, our re-unsynchronized number should match our original
	/// let re_unsynch_number = synch_number.unsynch();
	/// assert_eq!(re_unsynch_number, unsynch_number);
	/// # Ok(()) }
	/// ```
	fn unsynch(self) -> Self;
}

impl SynchsafeInteger for u32 {
	fn synch(self) -> Result<Self> {
		const MAXIMUM_INTEGER: u32 = {
			let num_bytes = core::mem::size_of::<u32>();
			// 7 bits are available per byte, shave off 1 bit per byte
			u32::MAX >> num_bytes
		};

		if self > MAXIMUM_INTEGER {
			id3v2_err!(@BAIL SizeOverflow(u64::from(self)));
		}

		Ok((self & 0x7F)
			| ((self & (0x7F << 7)) << 1)
			| ((self & (0x7F << 14)) << 2)
			| ((self & (0x7F << 21)) << 3))
	}

	fn unsynch(self) -> Self {
		((self & 0x7F00_0000) >> 3) | ((self & 0x7F_0000) >> 2) | ((self & 0x7F00) >> 1) | (self & 0x7F)
	}
}
