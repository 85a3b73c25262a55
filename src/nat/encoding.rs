//! Big-endian byte conversions for [`Nat`].

use crate::{Limb, Nat, Word};

#[cfg(feature = "serde")]
use serdect::serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Nat {
    /// Interpret `buf` as a big-endian unsigned integer.
    pub fn from_be_slice(buf: &[u8]) -> Nat {
        Self::from_be_slice_zcap(buf, 0)
    }

    /// Constant-time [`Nat::from_be_slice`], padded to `zcap` limbs.
    pub fn ct_from_be_slice(buf: &[u8], zcap: usize) -> Nat {
        Self::from_be_slice_zcap(buf, zcap)
    }

    pub(crate) fn from_be_slice_zcap(buf: &[u8], zcap: usize) -> Nat {
        let n = (buf.len() + Limb::BYTES - 1) / Limb::BYTES;
        let mut z = Nat::zero();
        z.resize_for(n, zcap);

        let mut k = 0;
        let mut s = 0u32;
        let mut d: Word = 0;
        for i in (0..buf.len()).rev() {
            d |= (buf[i] as Word) << s;
            s += 8;
            if s == Limb::BITS {
                z.limbs[k] = Limb(d);
                k += 1;
                s = 0;
                d = 0;
            }
        }
        if k < z.limbs.len() {
            z.limbs[k] = Limb(d);
        }

        z.cnorm(zcap);
        z
    }

    /// Write the value into `buf` using big-endian encoding, filling from
    /// the tail. Returns the offset of the first non-zero byte (so
    /// `buf[i..]` is the minimal encoding).
    ///
    /// `buf` must hold at least `nlimbs() * Limb::BYTES` bytes.
    pub fn write_be_bytes(&self, buf: &mut [u8]) -> usize {
        assert!(
            buf.len() >= self.limbs.len() * Limb::BYTES,
            "buffer too small"
        );

        let mut i = buf.len();
        for d in &self.limbs {
            let mut d = d.0;
            for _ in 0..Limb::BYTES {
                i -= 1;
                buf[i] = d as u8;
                d >>= 8;
            }
        }

        while i < buf.len() && buf[i] == 0 {
            i += 1;
        }
        i
    }

    /// The value as a big-endian byte vector of `nlimbs() * Limb::BYTES`
    /// bytes, leading zeros included. Zero encodes as the empty vector.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut out = vec![0u8; self.limbs.len() * Limb::BYTES];
        self.write_be_bytes(&mut out);
        out
    }
}

#[cfg(feature = "serde")]
impl Serialize for Nat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut bytes = self.to_be_bytes();
        let i = bytes.len() - (self.bit_len() as usize + 7) / 8;
        bytes.drain(..i);
        serdect::slice::serialize_hex_lower_or_bin(&bytes, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Nat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes: Vec<u8> = serdect::slice::deserialize_hex_or_bin_vec(deserializer)?;
        Ok(Nat::from_be_slice(&bytes))
    }
}
