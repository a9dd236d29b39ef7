//! Big-endian packing primitives.
//!
//! Every multi-byte scalar in the wire format is defined in terms of these
//! two pairs: `pack32`/`unpack32` for signed 32-bit fields and
//! `pack64`/`unpack64` for raw 64-bit words (used for float bit patterns).
//! Byte order is most-significant byte first, always.  There is no runtime
//! negotiation and no host-order fast path.

use byteorder::{BigEndian, ByteOrder};

/// Encode a signed 32-bit integer as 4 big-endian bytes.
#[inline]
pub fn pack32(val: i32) -> [u8; 4] {
    let mut buf = [0u8; 4];
    BigEndian::write_i32(&mut buf, val);
    buf
}

/// Decode 4 big-endian bytes as a signed 32-bit integer.
#[inline]
pub fn unpack32(buf: [u8; 4]) -> i32 {
    BigEndian::read_i32(&buf)
}

/// Encode an unsigned 64-bit word as 8 big-endian bytes.
#[inline]
pub fn pack64(val: u64) -> [u8; 8] {
    let mut buf = [0u8; 8];
    BigEndian::write_u64(&mut buf, val);
    buf
}

/// Decode 8 big-endian bytes as an unsigned 64-bit word.
#[inline]
pub fn unpack64(buf: [u8; 8]) -> u64 {
    BigEndian::read_u64(&buf)
}
