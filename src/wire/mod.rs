//! Scalar wire codec: the read/write operations compiler metadata files are
//! built from.
//!
//! # Wire layout
//! All integers are big-endian; see [`pack`] for the packing primitives.
//!
//! | wire type       | layout                                                  |
//! |-----------------|---------------------------------------------------------|
//! | byte            | 1 byte verbatim                                         |
//! | bool            | 1 byte; written as 0/1, read back unvalidated           |
//! | int32           | 4 bytes, two's-complement                               |
//! | float64         | 8 bytes, raw IEEE-754 binary64 bit pattern              |
//! | nullable bytes  | `int32 -1` ⇒ absent; else `int32 len` + `len` raw bytes |
//! | fixed bytes     | `int32`-width length (unsigned on decode) + raw bytes   |
//!
//! String payloads are opaque: embedded zero bytes are preserved and no
//! UTF-8 validation is performed.  Field ordering and record framing belong
//! to the caller: the serializers that walk symbol tables and declaration
//! lists emit fields one at a time in a fixed, schema-defined order.
//!
//! # Streams
//! Operations are generic over [`std::io::Read`] / [`std::io::Write`]; the
//! only state crossing calls is the stream's own cursor.  No seeking is ever
//! performed, so any sequential channel works: a `File`, a `Cursor<Vec<u8>>`,
//! a pipe.
//!
//! # Failure discipline
//! A partial transfer is never silently accepted.  Reads go through
//! `read_exact` (or a `take`-bounded read with an explicit length check), so
//! end-of-stream inside a value surfaces as an error rather than a short
//! result.  Decoded length fields are validated before any allocation:
//! negative where only the `-1` sentinel is legal ⇒ [`WireError::CorruptLength`],
//! above [`MAX_LEN`] ⇒ [`WireError::LengthOverflow`], longer than the stream
//! can supply ⇒ [`WireError::Truncated`].

pub mod pack;

use std::io::{self, Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use thiserror::Error;

/// Upper bound on any single decoded length-prefixed payload: 256 MiB.
///
/// Far above any real symbol-table record, far below what a corrupt length
/// field could otherwise make the decoder allocate.
pub const MAX_LEN: u32 = 256 * 1024 * 1024;

// ── Error type ───────────────────────────────────────────────────────────────

#[derive(Error, Debug)]
pub enum WireError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// A length field was negative where only the `-1` absent-sentinel is
    /// a legal non-length value.
    #[error("corrupt length field: {0}")]
    CorruptLength(i32),
    /// A length exceeded the largest value this side will encode or decode.
    #[error("length {len} exceeds the {max}-byte limit")]
    LengthOverflow { len: u64, max: u64 },
    /// The stream ended inside a declared payload.
    #[error("stream ended inside a {want}-byte payload after {got} bytes")]
    Truncated { want: u32, got: usize },
}

// ── Single bytes and booleans ────────────────────────────────────────────────

pub fn write_byte<W: Write>(mut w: W, val: u8) -> Result<(), WireError> {
    w.write_u8(val)?;
    Ok(())
}

pub fn read_byte<R: Read>(mut r: R) -> Result<u8, WireError> {
    Ok(r.read_u8()?)
}

/// Write a boolean as a single `0`/`1` byte.
pub fn write_bool<W: Write>(w: W, val: bool) -> Result<(), WireError> {
    write_byte(w, val as u8)
}

/// Read a boolean byte, returned raw and unvalidated.
///
/// Writers only ever emit 0 or 1, but any other byte value round-trips as
/// itself rather than being normalized.  Callers wanting a `bool` compare
/// against zero.
pub fn read_bool<R: Read>(r: R) -> Result<u8, WireError> {
    read_byte(r)
}

// ── Fixed-width scalars ──────────────────────────────────────────────────────

pub fn write_int32<W: Write>(mut w: W, val: i32) -> Result<(), WireError> {
    w.write_all(&pack::pack32(val))?;
    Ok(())
}

pub fn read_int32<R: Read>(mut r: R) -> Result<i32, WireError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(pack::unpack32(buf))
}

/// Write a float as its raw IEEE-754 binary64 bit pattern, big-endian.
///
/// NaN payloads and signed zeros survive unchanged.  This is a bit-pattern
/// format, not a portable float serialization for hosts whose native doubles
/// are not IEEE-754 binary64.
pub fn write_float64<W: Write>(mut w: W, val: f64) -> Result<(), WireError> {
    w.write_all(&pack::pack64(val.to_bits()))?;
    Ok(())
}

pub fn read_float64<R: Read>(mut r: R) -> Result<f64, WireError> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(f64::from_bits(pack::unpack64(buf)))
}

// ── Length-prefixed byte runs ────────────────────────────────────────────────

/// Write an optional byte run: `int32 -1` for `None`, else length + payload.
pub fn write_nullable_bytes<W: Write>(mut w: W, val: Option<&[u8]>) -> Result<(), WireError> {
    match val {
        None => write_int32(&mut w, -1),
        Some(bytes) => write_len_bytes(&mut w, bytes),
    }
}

/// Read an optional byte run.
///
/// A length of exactly `-1` is the absent sentinel; any other negative
/// length is [`WireError::CorruptLength`].
pub fn read_nullable_bytes<R: Read>(mut r: R) -> Result<Option<Vec<u8>>, WireError> {
    let len = read_int32(&mut r)?;
    if len == -1 {
        return Ok(None);
    }
    if len < 0 {
        return Err(WireError::CorruptLength(len));
    }
    Ok(Some(read_payload(r, len as u32)?))
}

/// Write an always-present byte run: `int32` length + payload.
///
/// Lengths that do not fit the signed 32-bit length field are rejected here
/// rather than wrapping on the wire.
pub fn write_len_bytes<W: Write>(mut w: W, val: &[u8]) -> Result<(), WireError> {
    if val.len() > i32::MAX as usize {
        return Err(WireError::LengthOverflow {
            len: val.len() as u64,
            max: i32::MAX as u64,
        });
    }
    write_int32(&mut w, val.len() as i32)?;
    w.write_all(val)?;
    Ok(())
}

/// Read an always-present byte run.
///
/// The 4-byte length field is interpreted as unsigned and bounded by
/// [`MAX_LEN`] before anything is allocated.
pub fn read_len_bytes<R: Read>(mut r: R) -> Result<Vec<u8>, WireError> {
    let len = r.read_u32::<BigEndian>()?;
    read_payload(r, len)
}

/// Read exactly `len` payload bytes, bounded by `MAX_LEN` and by what the
/// stream can actually supply.
fn read_payload<R: Read>(r: R, len: u32) -> Result<Vec<u8>, WireError> {
    if len > MAX_LEN {
        return Err(WireError::LengthOverflow {
            len: len as u64,
            max: MAX_LEN as u64,
        });
    }
    // take() keeps the allocation proportional to bytes actually delivered,
    // so a corrupt length cannot force a giant up-front reservation.
    let mut buf = Vec::new();
    r.take(len as u64).read_to_end(&mut buf)?;
    if buf.len() != len as usize {
        return Err(WireError::Truncated {
            want: len,
            got: buf.len(),
        });
    }
    Ok(buf)
}
