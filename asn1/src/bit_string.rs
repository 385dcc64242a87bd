use std::{fmt::Display, str::FromStr};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitString {
    unused: u8,
    data: Vec<u8>,
}

impl BitString {
    /// Creates a BitString from packed octets and the count of unused
    /// trailing bits in the last octet.
    pub fn new(unused: u8, data: Vec<u8>) -> Result<Self> {
        if unused > 7 || (data.is_empty() && unused != 0) {
            return Err(Error::BitStringUnusedBitsOutOfRange(unused));
        }
        Ok(BitString { unused, data })
    }

    /// Packs `bits` MSB first, zero padding the last octet.
    pub fn from_bits(bits: &[bool]) -> Self {
        let mut data = vec![0u8; bits.len().div_ceil(8)];
        for (i, _) in bits.iter().enumerate().filter(|(_, bit)| **bit) {
            data[i / 8] |= 0x80 >> (i % 8);
        }
        let unused = ((8 - bits.len() % 8) % 8) as u8;
        BitString { unused, data }
    }

    /// Whole octets, no unused bits.
    pub fn from_bytes(data: &[u8]) -> Self {
        BitString {
            unused: 0,
            data: data.to_vec(),
        }
    }

    pub fn unused_bits(&self) -> u8 {
        self.unused
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn bit_len(&self) -> usize {
        self.data.len() * 8 - self.unused as usize
    }

    /// Unused-bits octet followed by the packed data.
    pub fn to_der_content(&self) -> Vec<u8> {
        let mut content = Vec::with_capacity(self.data.len() + 1);
        content.push(self.unused);
        content.extend_from_slice(&self.data);
        content
    }
}

impl TryFrom<&[u8]> for BitString {
    type Error = Error;

    // Parses DER content octets, not raw data; see `from_bytes` for that.
    fn try_from(value: &[u8]) -> Result<Self> {
        match value.split_first() {
            Some((&unused, data)) => BitString::new(unused, data.to_vec()),
            None => Err(Error::BitStringNoData),
        }
    }
}

impl FromStr for BitString {
    type Err = Error;

    /// Parses a string of `0` and `1` characters.
    fn from_str(s: &str) -> Result<Self> {
        let bits = s
            .bytes()
            .enumerate()
            .map(|(position, byte)| match byte {
                b'0' => Ok(false),
                b'1' => Ok(true),
                byte => Err(Error::InvalidCharacter { position, byte }),
            })
            .collect::<Result<Vec<bool>>>()?;
        Ok(BitString::from_bits(&bits))
    }
}

impl Display for BitString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, byte) in self.data.iter().enumerate() {
            if i == self.data.len() - 1 && self.unused > 0 {
                let bit_count = 8 - self.unused as usize;
                write!(f, "{:0bit_count$b}", byte >> self.unused)?;
            } else {
                write!(f, "{:08b}", byte)?;
            }
        }
        Ok(())
    }
}
