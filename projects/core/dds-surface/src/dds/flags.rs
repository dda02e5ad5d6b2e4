//! Bitmask fields of the DDS header, decoded as sets of known flags.
//!
//! Decoding is lenient: bits that belong to no known flag are dropped. Writers have
//! historically left vendor specific stray bits in these fields.

use super::constants::*;
use core::fmt;
use core::marker::PhantomData;
use derive_enum_all_values::AllValues;

/// A single named bit (or group of bits) within a header bitmask field.
pub trait Flag: Copy + fmt::Debug + 'static {
    /// The bits this flag occupies.
    fn bits(self) -> u32;

    /// Every flag of this kind, in declaration order.
    fn known() -> &'static [Self];
}

/// A set of [`Flag`]s decoded from a raw header field.
///
/// Only membership is meaningful. Iteration yields flags in declaration order.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlagSet<F> {
    bits: u32,
    _flag: PhantomData<F>,
}

impl<F: Flag> FlagSet<F> {
    /// The empty set.
    pub const fn empty() -> Self {
        Self {
            bits: 0,
            _flag: PhantomData,
        }
    }

    /// Decodes a raw field, keeping every known flag whose bits are all present.
    pub fn from_bits_lenient(raw: u32) -> Self {
        F::known()
            .iter()
            .copied()
            .filter(|flag| raw & flag.bits() == flag.bits())
            .collect()
    }

    /// Whether `flag` is in the set.
    #[inline]
    pub fn contains(&self, flag: F) -> bool {
        self.bits & flag.bits() == flag.bits()
    }

    /// Adds `flag` to the set.
    #[inline]
    pub fn insert(&mut self, flag: F) {
        self.bits |= flag.bits();
    }

    /// Raw value of the known flags in the set.
    #[inline]
    pub fn bits(&self) -> u32 {
        self.bits
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterates over the flags in the set.
    pub fn iter(&self) -> impl Iterator<Item = F> + '_ {
        F::known().iter().copied().filter(|flag| self.contains(*flag))
    }
}

impl<F: Flag> Default for FlagSet<F> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<F: Flag> FromIterator<F> for FlagSet<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        let mut set = Self::empty();
        for flag in iter {
            set.insert(flag);
        }
        set
    }
}

impl<F: Flag> fmt::Debug for FlagSet<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

macro_rules! header_flags {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $bits:expr, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl Flag for $name {
            #[inline]
            fn bits(self) -> u32 {
                match self {
                    $( Self::$variant => $bits, )+
                }
            }

            #[inline]
            fn known() -> &'static [Self] {
                Self::all_values()
            }
        }
    };
}

header_flags! {
    /// Flags of the header's `flags` field, declaring which members hold valid data.
    pub enum HeaderFlag {
        /// Required in every file.
        Caps = DDSD_CAPS,
        /// Required in every file.
        Height = DDSD_HEIGHT,
        /// Required in every file.
        Width = DDSD_WIDTH,
        /// Pitch is provided for an uncompressed texture.
        Pitch = DDSD_PITCH,
        /// Required in every file.
        PixelFormat = DDSD_PIXELFORMAT,
        /// Required in a mipmapped texture.
        MipMapCount = DDSD_MIPMAPCOUNT,
        /// Pitch is provided for a compressed texture.
        LinearSize = DDSD_LINEARSIZE,
        /// Required in a depth texture.
        Depth = DDSD_DEPTH,
    }
}

header_flags! {
    /// Flags of the header's `caps` field.
    pub enum Capability {
        /// The file contains more than one surface (mipmap, cube map or mipmapped volume).
        Complex = DDSCAPS_COMPLEX,
        /// Required.
        Texture = DDSCAPS_TEXTURE,
        /// The file contains a mipmap chain.
        MipMap = DDSCAPS_MIPMAP,
    }
}

header_flags! {
    /// Flags of the header's `caps2` field.
    pub enum Capability2 {
        CubeMap = DDSCAPS2_CUBEMAP,
        CubeMapPositiveX = DDSCAPS2_CUBEMAP_POSITIVEX,
        CubeMapNegativeX = DDSCAPS2_CUBEMAP_NEGATIVEX,
        CubeMapPositiveY = DDSCAPS2_CUBEMAP_POSITIVEY,
        CubeMapNegativeY = DDSCAPS2_CUBEMAP_NEGATIVEY,
        CubeMapPositiveZ = DDSCAPS2_CUBEMAP_POSITIVEZ,
        CubeMapNegativeZ = DDSCAPS2_CUBEMAP_NEGATIVEZ,
        Volume = DDSCAPS2_VOLUME,
    }
}

header_flags! {
    /// Flags of the pixel format's `flags` field, saying which of its members are meaningful.
    pub enum PixelFormatFlag {
        /// Texture contains alpha data; the alpha mask is valid.
        AlphaPixels = DDPF_ALPHAPIXELS,
        /// Alpha-only uncompressed data (older files).
        Alpha = DDPF_ALPHA,
        /// Compressed data; the FourCC is valid.
        FourCC = DDPF_FOURCC,
        /// Uncompressed RGB data; bit count and RGB masks are valid.
        Rgb = DDPF_RGB,
        /// YUV uncompressed data (older files).
        Yuv = DDPF_YUV,
        /// Single channel uncompressed data (older files).
        Luminance = DDPF_LUMINANCE,
        BumpLuminance = DDPF_BUMPLUMINANCE,
        /// Signed bump map data.
        BumpDuDv = DDPF_BUMPDUDV,
    }
}
