use crate::types::{MAX_SEQUENCE_NUMBER, SEEK_VALUE_TYPE, SequenceNumber, ValueType};

/// Size of the packed (sequence, type) trailer at the end of every internal key.
pub const TRAILER_SIZE: usize = 8;

/// Largest representable trailer: newest possible version, any type.
/// Used as the "end of all versions" sentinel.
pub const MAX_TRAILER: u64 = (MAX_SEQUENCE_NUMBER << 8) | SEEK_VALUE_TYPE as u64;

/// `MAX_TRAILER` in its on-disk byte order.
pub const MAX_TRAILER_BYTES: [u8; TRAILER_SIZE] = MAX_TRAILER.to_le_bytes();

/// Pack a sequence number and value type into a trailer.
///
/// ```text
/// bit 63                          8 7        0
/// ┌────────────────────────────────┬──────────┐
/// │ sequence (56 bits)             │ type (8) │
/// └────────────────────────────────┴──────────┘
/// ```
///
/// # Panics
/// Panics if `sequence > MAX_SEQUENCE_NUMBER`. That can only mean the
/// sequence allocator overflowed, and clamping would silently corrupt
/// the key order.
#[inline]
pub fn pack_sequence_and_type(sequence: SequenceNumber, value_type: ValueType) -> u64 {
    assert!(
        sequence <= MAX_SEQUENCE_NUMBER,
        "sequence number {sequence} exceeds maximum {MAX_SEQUENCE_NUMBER}"
    );
    (sequence << 8) | value_type as u64
}

/// Split a trailer back into (sequence, raw type byte).
///
/// Never fails: the type byte is returned unchecked. Callers holding bytes
/// of unknown provenance go through `decode_trailer` instead.
#[inline]
pub fn unpack_sequence_and_type(trailer: u64) -> (SequenceNumber, u8) {
    (trailer >> 8, (trailer & 0xff) as u8)
}

#[inline]
pub fn encode_trailer(trailer: u64) -> [u8; TRAILER_SIZE] {
    trailer.to_le_bytes()
}

#[inline]
pub fn decode_trailer_bytes(bytes: &[u8; TRAILER_SIZE]) -> u64 {
    u64::from_le_bytes(*bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_layout() {
        assert_eq!(pack_sequence_and_type(0, ValueType::Deletion), 0);
        assert_eq!(pack_sequence_and_type(0, ValueType::Value), 1);
        assert_eq!(pack_sequence_and_type(42, ValueType::Value), 10753);
        assert_eq!(pack_sequence_and_type(1, ValueType::Deletion), 0x100);
    }

    #[test]
    fn unpack_keeps_raw_type_byte() {
        // Type 0x07 isn't a valid ValueType, but unpacking doesn't care.
        assert_eq!(unpack_sequence_and_type((9 << 8) | 0x07), (9, 0x07));
    }

    #[test]
    fn max_trailer_constants() {
        assert_eq!(MAX_TRAILER, 0xFFFF_FFFF_FFFF_FF01);
        assert_eq!(MAX_TRAILER_BYTES, [0x01, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(
            pack_sequence_and_type(MAX_SEQUENCE_NUMBER, SEEK_VALUE_TYPE),
            MAX_TRAILER
        );
    }

    #[test]
    fn trailer_bytes_are_little_endian() {
        let bytes = encode_trailer(10753);
        assert_eq!(bytes, [0x01, 0x2A, 0, 0, 0, 0, 0, 0]);
        assert_eq!(decode_trailer_bytes(&bytes), 10753);
    }

    #[test]
    #[should_panic(expected = "exceeds maximum")]
    fn pack_rejects_oversized_sequence() {
        pack_sequence_and_type(MAX_SEQUENCE_NUMBER + 1, ValueType::Value);
    }
}
