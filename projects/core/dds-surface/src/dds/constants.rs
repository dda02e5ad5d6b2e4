//! DDS layout constants.
//!
//! Offsets are absolute from the start of the file, i.e. they include the 4 byte magic.

/// Magic header for DDS files ('DDS ' read as a little-endian u32).
pub const DDS_MAGIC: u32 = 0x20534444;

/// Magic header for DDS files, as raw bytes.
pub const DDS_MAGIC_BYTES: [u8; 4] = *b"DDS ";

/// Size of the magic.
pub(crate) const DDS_MAGIC_SIZE: usize = 4;

/// Size of the magic plus the primary header.
pub const DDS_HEADER_SIZE: usize = 0x80;

/// Size of the primary header alone, as declared by its `size` field in well formed files.
pub(crate) const DDS_PRIMARY_HEADER_SIZE: usize = DDS_HEADER_SIZE - DDS_MAGIC_SIZE;

// Primary header field offsets
pub(crate) const DDS_SIZE_OFFSET: usize = 0x04;
pub(crate) const DDS_FLAGS_OFFSET: usize = 0x08;
pub(crate) const DDS_HEIGHT_OFFSET: usize = 0x0C;
pub(crate) const DDS_WIDTH_OFFSET: usize = 0x10;
pub(crate) const DDS_PITCH_OR_LINEAR_SIZE_OFFSET: usize = 0x14;
pub(crate) const DDS_DEPTH_OFFSET: usize = 0x18;
pub(crate) const DDS_MIPMAP_COUNT_OFFSET: usize = 0x1C;
// 11 reserved u32 between 0x20 and 0x4C
pub(crate) const DDS_CAPS_OFFSET: usize = 0x6C;
pub(crate) const DDS_CAPS2_OFFSET: usize = 0x70;
// caps3, caps4 and one reserved u32 up to 0x80

// DDS pixel format offsets (the 32-byte DDSPIXELFORMAT structure at offset 0x4C)
pub(crate) const DDS_PIXELFORMAT_OFFSET: usize = 0x4C;
pub(crate) const DDS_PIXELFORMAT_FLAGS_OFFSET: usize = 0x50;
pub(crate) const DDS_PIXELFORMAT_FOURCC_OFFSET: usize = 0x54;
pub(crate) const DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET: usize = 0x58;
pub(crate) const DDS_PIXELFORMAT_RBITMASK_OFFSET: usize = 0x5C;
pub(crate) const DDS_PIXELFORMAT_GBITMASK_OFFSET: usize = 0x60;
pub(crate) const DDS_PIXELFORMAT_BBITMASK_OFFSET: usize = 0x64;
pub(crate) const DDS_PIXELFORMAT_ABITMASK_OFFSET: usize = 0x68;

/// Offset of the DX10 header, present when the pixel format's FourCC is 'DX10'.
pub(crate) const DX10_HEADER_OFFSET: usize = 0x80;
pub const DX10_HEADER_SIZE: usize = 20;

// DX10 header field offsets, relative to [`DX10_HEADER_OFFSET`]
pub(crate) const DX10_FORMAT_OFFSET: usize = 0x00;
pub(crate) const DX10_RESOURCE_DIMENSION_OFFSET: usize = 0x04;
pub(crate) const DX10_MISC_FLAG_OFFSET: usize = 0x08;
pub(crate) const DX10_ARRAY_SIZE_OFFSET: usize = 0x0C;
pub(crate) const DX10_MISC_FLAGS2_OFFSET: usize = 0x10;

// DDS header flags
pub(crate) const DDSD_CAPS: u32 = 0x1;
pub(crate) const DDSD_HEIGHT: u32 = 0x2;
pub(crate) const DDSD_WIDTH: u32 = 0x4;
pub(crate) const DDSD_PITCH: u32 = 0x8;
pub(crate) const DDSD_PIXELFORMAT: u32 = 0x1000;
pub(crate) const DDSD_MIPMAPCOUNT: u32 = 0x20000;
pub(crate) const DDSD_LINEARSIZE: u32 = 0x80000;
pub(crate) const DDSD_DEPTH: u32 = 0x800000;

// DDS pixel format flags
pub(crate) const DDPF_ALPHAPIXELS: u32 = 0x1;
pub(crate) const DDPF_ALPHA: u32 = 0x2;
pub(crate) const DDPF_FOURCC: u32 = 0x4;
pub(crate) const DDPF_RGB: u32 = 0x40;
pub(crate) const DDPF_YUV: u32 = 0x200;
pub(crate) const DDPF_LUMINANCE: u32 = 0x20000;
pub(crate) const DDPF_BUMPLUMINANCE: u32 = 0x40000;
pub(crate) const DDPF_BUMPDUDV: u32 = 0x80000;

// DDS caps
pub(crate) const DDSCAPS_COMPLEX: u32 = 0x8;
pub(crate) const DDSCAPS_TEXTURE: u32 = 0x1000;
pub(crate) const DDSCAPS_MIPMAP: u32 = 0x400000;

// DDS caps2
pub(crate) const DDSCAPS2_CUBEMAP: u32 = 0x200;
pub(crate) const DDSCAPS2_CUBEMAP_POSITIVEX: u32 = 0x400;
pub(crate) const DDSCAPS2_CUBEMAP_NEGATIVEX: u32 = 0x800;
pub(crate) const DDSCAPS2_CUBEMAP_POSITIVEY: u32 = 0x1000;
pub(crate) const DDSCAPS2_CUBEMAP_NEGATIVEY: u32 = 0x2000;
pub(crate) const DDSCAPS2_CUBEMAP_POSITIVEZ: u32 = 0x4000;
pub(crate) const DDSCAPS2_CUBEMAP_NEGATIVEZ: u32 = 0x8000;
pub(crate) const DDSCAPS2_VOLUME: u32 = 0x200000;
