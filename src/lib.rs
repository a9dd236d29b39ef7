//! Binary persistence primitives for compiler metadata files.
//!
//! Two independent pieces: the [`wire`] codec (big-endian scalar read/write
//! operations over any sequential byte stream) and [`Seq`], the growable
//! sequence program-data lists are accumulated in before encoding and
//! rebuilt into after decoding.  Higher-level serializers own the field
//! ordering; this crate owns the byte-exact value encodings.

pub mod seq;
pub mod wire;

pub use seq::{Seq, SeqError};
pub use wire::{WireError, MAX_LEN};
