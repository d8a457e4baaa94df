use std::fmt;
use std::ops::BitXor;
use zeroize::Zeroize;

/// A 128-bit big-endian register, used for the ICM offset and counter.
///
/// From the high-order to the low-order byte, the register is laid out as:
///
/// ```text
///  0                   8              14      16
/// +-------------------+---------------+-------+
/// |  nonce / salt     | packet index  |  ctr  |
/// +-------------------+---------------+-------+
/// ```
///
/// The block counter `ctr` is advanced by the CTR engine for every 16-byte block of keystream.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Zeroize)]
pub struct V128([u8; 16]);

impl V128 {
    /// Length of the register in bytes.
    pub const LEN: usize = 16;

    /// The all-zero register.
    pub const ZERO: V128 = V128([0; 16]);

    /// Creates a register from its big-endian bytes.
    pub const fn from_bytes(bytes: [u8; 16]) -> V128 {
        V128(bytes)
    }

    /// Returns the big-endian bytes of the register.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns the 16-bit block counter field (the two lowest-order bytes).
    pub fn block_counter(&self) -> u16 {
        u16::from_be_bytes([self.0[14], self.0[15]])
    }

    /// Returns the 48-bit packet index field.
    pub fn packet_index(&self) -> u64 {
        let mut index = [0; 8];
        index[2..].copy_from_slice(&self.0[8..14]);
        u64::from_be_bytes(index)
    }

    /// Builds a per-packet nonce with `packet_index` in the packet index field and zeros elsewhere.
    ///
    /// Only the low 48 bits of `packet_index` are used.
    pub fn from_packet_index(packet_index: u64) -> V128 {
        let mut bytes = [0; 16];
        bytes[8..14].copy_from_slice(&packet_index.to_be_bytes()[2..]);
        V128(bytes)
    }

    pub(crate) fn load_salt(&mut self, salt: &[u8]) {
        debug_assert_eq!(salt.len(), 14);
        self.0[..14].copy_from_slice(salt);
        self.0[14] = 0;
        self.0[15] = 0;
    }
}

impl BitXor for V128 {
    type Output = V128;

    fn bitxor(self, rhs: V128) -> V128 {
        let mut out = [0; 16];
        for (o, (a, b)) in out.iter_mut().zip(self.0.iter().zip(rhs.0.iter())) {
            *o = a ^ b;
        }
        V128(out)
    }
}

impl From<[u8; 16]> for V128 {
    fn from(bytes: [u8; 16]) -> V128 {
        V128(bytes)
    }
}

impl fmt::Display for V128 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for V128 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "V128({})", self)
    }
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;
    use super::*;

    #[test]
    fn test_xor() {
        let a = V128::from_bytes(hex!("f0f1f2f3f4f5f6f7f8f9fafbfcfd0000"));
        let b = V128::from_bytes(hex!("000000000000000000000000000000ff"));
        assert_eq!(a ^ b, V128::from_bytes(hex!("f0f1f2f3f4f5f6f7f8f9fafbfcfd00ff")));
        assert_eq!(a ^ a, V128::ZERO);
        assert_eq!(a ^ V128::ZERO, a);
    }

    #[test]
    fn test_load_salt() {
        let mut reg = V128::from_bytes([0xaa; 16]);
        reg.load_salt(&hex!("f0f1f2f3f4f5f6f7f8f9fafbfcfd"));
        assert_eq!(reg.as_bytes(), &hex!("f0f1f2f3f4f5f6f7f8f9fafbfcfd0000"));
        assert_eq!(reg.block_counter(), 0);
    }

    #[test]
    fn test_fields() {
        let reg = V128::from_packet_index(0x0000_1234_5678_9abc);
        assert_eq!(reg.as_bytes(), &hex!("0000000000000000123456789abc0000"));
        assert_eq!(reg.packet_index(), 0x1234_5678_9abc);
        assert_eq!(reg.block_counter(), 0);

        // bits above 48 are dropped
        assert_eq!(V128::from_packet_index(0xffff_0000_0000_0001).packet_index(), 1);
    }

    #[test]
    fn test_display() {
        let reg = V128::from_bytes(hex!("000102030405060708090a0b0c0d0e0f"));
        assert_eq!(reg.to_string(), "000102030405060708090a0b0c0d0e0f");
        assert_eq!(format!("{:?}", reg), "V128(000102030405060708090a0b0c0d0e0f)");
    }
}
