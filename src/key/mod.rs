pub mod trailer;

use std::cmp::Ordering;
use std::fmt;
use std::io::Write;

use log::debug;

use crate::error::{Error, Result};
use crate::types::{SEEK_VALUE_TYPE, SequenceNumber, ValueType};
use trailer::{
    MAX_TRAILER_BYTES, TRAILER_SIZE, decode_trailer_bytes, encode_trailer,
    pack_sequence_and_type, unpack_sequence_and_type,
};

/// An encoded internal key: `user_key ++ le64((sequence << 8) | type)`.
///
/// Built once at write time and never mutated afterwards. Every way of
/// obtaining an `InternalKey` guarantees at least 8 bytes and a valid value
/// type, so the accessors below never fail.
///
/// `Ord` is the engine order with a bytewise user comparator:
/// user key ascending, then sequence descending, then type descending.
/// Use [`InternalKeyComparator`](crate::InternalKeyComparator) for a custom
/// user key order.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct InternalKey(Vec<u8>);

impl InternalKey {
    /// Build an internal key from its parts.
    ///
    /// # Panics
    /// Panics if `sequence` exceeds `MAX_SEQUENCE_NUMBER`.
    pub fn new(user_key: &[u8], sequence: SequenceNumber, value_type: ValueType) -> Self {
        Self::with_trailer(user_key, encode_trailer(pack_sequence_and_type(sequence, value_type)))
    }

    pub fn from_parsed(parsed: &ParsedInternalKey<'_>) -> Self {
        Self::new(parsed.user_key, parsed.sequence, parsed.value_type)
    }

    /// Probe key for a lookup of `user_key` as of snapshot `sequence`.
    ///
    /// Seeking to it lands on the newest version with a sequence
    /// `<= sequence`, skipping everything written after the snapshot.
    pub fn for_seek(user_key: &[u8], sequence: SequenceNumber) -> Self {
        Self::new(user_key, sequence, SEEK_VALUE_TYPE)
    }

    /// Key that sorts before every version of `user_key`.
    pub fn max_for(user_key: &[u8]) -> Self {
        Self::with_trailer(user_key, MAX_TRAILER_BYTES)
    }

    /// Adopt bytes that came from outside the process (an SSTable block,
    /// the manifest, a recovery scan). They are validated first.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        parse_internal_key(&bytes)?;
        Ok(InternalKey(bytes))
    }

    fn with_trailer(user_key: &[u8], trailer: [u8; TRAILER_SIZE]) -> Self {
        let mut buf = Vec::with_capacity(user_key.len() + TRAILER_SIZE);
        buf.extend_from_slice(user_key);
        buf.extend_from_slice(&trailer);
        InternalKey(buf)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Encoded length, trailer included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: an internal key carries at least its trailer.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn user_key(&self) -> &[u8] {
        extract_user_key(&self.0)
    }

    /// The packed (sequence, type) trailer.
    pub fn trailer(&self) -> u64 {
        raw_trailer(&self.0)
    }

    pub fn sequence(&self) -> SequenceNumber {
        unpack_sequence_and_type(self.trailer()).0
    }

    pub fn value_type(&self) -> ValueType {
        let (_, ty) = unpack_sequence_and_type(self.trailer());
        match ValueType::from_u8(ty) {
            Some(value_type) => value_type,
            None => unreachable!("internal key holds unvalidated type byte {ty:#04x}"),
        }
    }

    /// Structured view borrowing this key's buffer.
    pub fn parse(&self) -> ParsedInternalKey<'_> {
        ParsedInternalKey {
            user_key: self.user_key(),
            sequence: self.sequence(),
            value_type: self.value_type(),
        }
    }
}

impl Ord for InternalKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.user_key()
            .cmp(other.user_key())
            .then_with(|| other.trailer().cmp(&self.trailer()))
    }
}

impl PartialOrd for InternalKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl AsRef<[u8]> for InternalKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<InternalKey> for Vec<u8> {
    fn from(key: InternalKey) -> Self {
        key.0
    }
}

impl fmt::Debug for InternalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InternalKey({})", self.parse())
    }
}

/// A decoded internal key. Borrows the user key from the encoded buffer it
/// was parsed from; call [`to_internal_key`](Self::to_internal_key) to keep
/// it past that buffer's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedInternalKey<'a> {
    pub user_key: &'a [u8],
    pub sequence: SequenceNumber,
    pub value_type: ValueType,
}

impl<'a> ParsedInternalKey<'a> {
    pub fn new(user_key: &'a [u8], sequence: SequenceNumber, value_type: ValueType) -> Self {
        ParsedInternalKey {
            user_key,
            sequence,
            value_type,
        }
    }

    /// Copy into an owned, encoded key.
    pub fn to_internal_key(&self) -> InternalKey {
        InternalKey::from_parsed(self)
    }

    /// Size of the encoded form.
    pub fn encoded_len(&self) -> usize {
        self.user_key.len() + TRAILER_SIZE
    }
}

impl fmt::Display for ParsedInternalKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' @ {} : {:?}",
            self.user_key.escape_ascii(),
            self.sequence,
            self.value_type
        )
    }
}

/// Append an encoded internal key to `w` without building an intermediate
/// buffer. Used by block/table builders.
///
/// # Panics
/// Panics if `sequence` exceeds `MAX_SEQUENCE_NUMBER`; nothing is written.
pub fn write_internal_key<W: Write>(
    w: &mut W,
    user_key: &[u8],
    sequence: SequenceNumber,
    value_type: ValueType,
) -> Result<()> {
    let trailer = encode_trailer(pack_sequence_and_type(sequence, value_type));
    w.write_all(user_key)?;
    w.write_all(&trailer)?;
    Ok(())
}

/// User key part of an encoded internal key, without validation.
///
/// Only for keys known to be well formed (built by this process or already
/// parsed). Bytes of unknown origin go through [`parse_internal_key`].
///
/// # Panics
/// Panics if `key` is shorter than the 8-byte trailer.
#[inline]
pub fn extract_user_key(key: &[u8]) -> &[u8] {
    assert!(
        key.len() >= TRAILER_SIZE,
        "internal key too short: {} bytes",
        key.len()
    );
    &key[..key.len() - TRAILER_SIZE]
}

/// Trailer of a key already known to be at least 8 bytes.
#[inline]
pub(crate) fn raw_trailer(key: &[u8]) -> u64 {
    let split = key.len() - TRAILER_SIZE;
    decode_trailer_bytes(key[split..].try_into().unwrap())
}

/// Decode the trailer of untrusted bytes.
///
/// Returns `None` if `key` is shorter than 8 bytes or its type byte is not
/// a known [`ValueType`]. Never panics.
pub fn decode_trailer(key: &[u8]) -> Option<(SequenceNumber, ValueType)> {
    let split = key.len().checked_sub(TRAILER_SIZE)?;
    let bytes: &[u8; TRAILER_SIZE] = key[split..].try_into().ok()?;
    let (sequence, ty) = unpack_sequence_and_type(decode_trailer_bytes(bytes));
    Some((sequence, ValueType::from_u8(ty)?))
}

/// Parse untrusted bytes into their parts.
///
/// This is the entry point for anything read back from storage: a short
/// buffer or an unknown type byte is reported as [`Error::Corruption`].
pub fn parse_internal_key(key: &[u8]) -> Result<ParsedInternalKey<'_>> {
    match decode_trailer(key) {
        Some((sequence, value_type)) => Ok(ParsedInternalKey {
            user_key: &key[..key.len() - TRAILER_SIZE],
            sequence,
            value_type,
        }),
        None => {
            let reason = if key.len() < TRAILER_SIZE {
                format!("internal key too short: {} bytes", key.len())
            } else {
                // Low byte of a little-endian trailer comes first.
                format!(
                    "invalid value type {:#04x} in internal key",
                    key[key.len() - TRAILER_SIZE]
                )
            };
            debug!("rejecting internal key '{}': {reason}", key.escape_ascii());
            Err(Error::Corruption(reason))
        }
    }
}
