//! # LSM-Tree Internal Keys
//!
//! Every read path, write path, memtable, SSTable and compaction step of an
//! LSM engine works on *internal keys*, never on raw user keys. An internal
//! key fuses the user key with the sequence number of the write and the kind
//! of write (value or tombstone):
//!
//! ```text
//! ┌────────────────────┬──────────────────────────────────────┐
//! │ user key (var)     │ trailer: (sequence << 8) | type (8B) │
//! └────────────────────┴──────────────────────────────────────┘
//! ```
//!
//! The trailer is stored little-endian. Many versions of the same user key
//! coexist; they sort newest first, which is what snapshot reads and
//! compaction rely on.
//!
//! ## Two extraction tiers
//! - [`extract_user_key`] / [`InternalKey::user_key`]: unchecked, for keys
//!   the engine built itself. Hot comparator path.
//! - [`parse_internal_key`] / [`decode_trailer`]: checked, for bytes read
//!   back from disk. Malformed input is an [`Error::Corruption`], not a panic.

pub mod comparator;
pub mod error;
pub mod key;
pub mod types;

pub use comparator::{BytewiseComparator, Comparator, InternalKeyComparator};
pub use error::{Error, Result};
pub use key::{
    InternalKey, ParsedInternalKey, decode_trailer, extract_user_key, parse_internal_key,
    write_internal_key,
};
pub use types::{MAX_SEQUENCE_NUMBER, SEEK_VALUE_TYPE, SequenceNumber, ValueType};
