use core::fmt;

/// A four-character code, as stored in the `dwFourCC` field of a DDS pixel format.
///
/// The code is kept as the raw 4 bytes read from the file. Codes this crate knows
/// about are available as associated constants; anything else is still representable,
/// since plenty of files in the wild carry zeroes or vendor codes in this field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct FourCC(pub [u8; 4]);

impl FourCC {
    /// BC1.
    pub const DXT1: FourCC = FourCC(*b"DXT1");
    /// BC2 with premultiplied alpha.
    pub const DXT2: FourCC = FourCC(*b"DXT2");
    /// BC2.
    pub const DXT3: FourCC = FourCC(*b"DXT3");
    /// BC3 with premultiplied alpha.
    pub const DXT4: FourCC = FourCC(*b"DXT4");
    /// BC3.
    pub const DXT5: FourCC = FourCC(*b"DXT5");
    /// Marks the presence of the DX10 extended header.
    pub const DX10: FourCC = FourCC(*b"DX10");
    /// BC4 (unsigned), ATI naming.
    pub const ATI1: FourCC = FourCC(*b"ATI1");
    /// BC4 (unsigned).
    pub const BC4U: FourCC = FourCC(*b"BC4U");
    /// BC4 (signed).
    pub const BC4S: FourCC = FourCC(*b"BC4S");
    /// BC5 (unsigned), ATI naming.
    pub const ATI2: FourCC = FourCC(*b"ATI2");
    /// BC5 (unsigned).
    pub const BC5U: FourCC = FourCC(*b"BC5U");
    /// BC5 (signed).
    pub const BC5S: FourCC = FourCC(*b"BC5S");
    /// Packed `R8G8_B8G8`.
    pub const RGBG: FourCC = FourCC(*b"RGBG");
    /// Packed `G8R8_G8B8`.
    pub const GRGB: FourCC = FourCC(*b"GRGB");
    /// Packed YUV 4:2:2.
    pub const YUY2: FourCC = FourCC(*b"YUY2");

    /// Creates a code from its raw bytes.
    #[inline]
    pub const fn new(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Creates a code from the little-endian `u32` it is stored as.
    #[inline]
    pub const fn from_u32(value: u32) -> Self {
        Self(value.to_le_bytes())
    }

    /// Returns the code as the little-endian `u32` it is stored as.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        u32::from_le_bytes(self.0)
    }

    /// Returns the raw bytes of the code.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Whether the code names one of the legacy BC1-BC3 block formats.
    pub fn is_compressed(self) -> bool {
        matches!(
            self,
            Self::DXT1 | Self::DXT2 | Self::DXT3 | Self::DXT4 | Self::DXT5
        )
    }
}

impl From<[u8; 4]> for FourCC {
    fn from(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Non-printable bytes are common (zeroed fields), escape them.
        for &byte in &self.0 {
            if byte.is_ascii_graphic() || byte == b' ' {
                write!(f, "{}", byte as char)?;
            } else {
                write!(f, "\\x{byte:02X}")?;
            }
        }
        Ok(())
    }
}
