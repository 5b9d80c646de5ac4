/// Raw user key bytes.
pub type UserKey = Vec<u8>;

/// Sequence number assigned to each write by the engine's allocator.
///
/// Only the low 56 bits are usable: the trailer packs the value type into
/// the low byte.
pub type SequenceNumber = u64;

/// Largest sequence number that fits in a trailer.
pub const MAX_SEQUENCE_NUMBER: SequenceNumber = (1 << 56) - 1;

/// Distinguishes puts from deletes inside an internal key.
/// A Deletion is a tombstone: the key isn't removed, it's marked as deleted
/// until compaction proves no snapshot can still see the older versions.
///
/// The discriminants are part of the on-disk format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueType {
    /// A delete (tombstone marker).
    Deletion = 0x00,
    /// A normal put operation.
    Value = 0x01,
}

/// Value type used when building a seek (probe) key.
///
/// It is the largest valid tag, so for a fixed sequence the probe sorts
/// before every real entry at that sequence (tags sort descending).
pub const SEEK_VALUE_TYPE: ValueType = ValueType::Value;

impl ValueType {
    /// Decode a tag byte. Anything outside the known tags is `None`.
    pub fn from_u8(byte: u8) -> Option<Self> {
        match byte {
            0x00 => Some(ValueType::Deletion),
            0x01 => Some(ValueType::Value),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn is_deletion(self) -> bool {
        self == ValueType::Deletion
    }
}
