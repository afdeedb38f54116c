//! Packed unsigned integers.
//!
//! A value is split into 7-bit groups, most significant group first. Every
//! group but the last is written as-is with the high bit clear; the last group
//! has the high bit set and terminates the value.
//!
//! ```text
//!        0 -> 80
//!        3 -> 83
//!      127 -> ff
//!      128 -> 01 80
//!      300 -> 02 ac
//! u64::MAX -> 01 7f 7f 7f 7f 7f 7f 7f 7f ff
//! ```

pub const GROUP_BITS: u32 = 7;
pub const GROUP_MASK: u8 = 0x7f;
pub const LAST_GROUP: u8 = 0x80;

/// Longest possible encoding of a `u64`.
pub const MAX_PACKED_LEN: usize = 10;

/// Number of bytes `value` occupies once packed.
pub fn packed_len(value: u64) -> usize {
    let bits = u64::BITS - value.leading_zeros();
    (bits.div_ceil(GROUP_BITS) as usize).max(1)
}

/// Packs `value` into `buf` and returns the used prefix.
pub fn pack(value: u64, buf: &mut [u8; MAX_PACKED_LEN]) -> &[u8] {
    let len = packed_len(value);
    for (i, byte) in buf[..len].iter_mut().enumerate() {
        let shift = (len - 1 - i) as u32 * GROUP_BITS;
        *byte = (value >> shift) as u8 & GROUP_MASK;
    }
    buf[len - 1] |= LAST_GROUP;
    &buf[..len]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packed(value: u64) -> Vec<u8> {
        let mut buf = [0; MAX_PACKED_LEN];
        pack(value, &mut buf).to_vec()
    }

    #[test]
    fn known_layouts() {
        assert_eq!(packed(0), [0x80]);
        assert_eq!(packed(3), [0x83]);
        assert_eq!(packed(127), [0xff]);
        assert_eq!(packed(128), [0x01, 0x80]);
        assert_eq!(packed(300), [0x02, 0xac]);
        assert_eq!(
            packed(u64::MAX),
            [0x01, 0x7f, 0x7f, 0x7f, 0x7f, 0x7f, 0x7f, 0x7f, 0x7f, 0xff]
        );
    }

    #[test]
    fn length_steps_at_group_boundaries() {
        for groups in 1..MAX_PACKED_LEN as u32 {
            let largest = (1u64 << (groups * GROUP_BITS)) - 1;
            assert_eq!(packed_len(largest), groups as usize);
            assert_eq!(packed_len(largest + 1), groups as usize + 1);
        }
        assert_eq!(packed_len(u64::MAX), MAX_PACKED_LEN);
    }

    #[test]
    fn length_is_monotonic() {
        let mut previous = packed_len(0);
        let mut value = 1u64;
        while let Some(next) = value.checked_mul(3) {
            for v in [value - 1, value, value + 1] {
                let len = packed_len(v);
                assert!(len >= previous, "{v} packed shorter than a smaller value");
                previous = len;
            }
            value = next;
        }
    }
}
