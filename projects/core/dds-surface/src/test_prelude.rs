//! Common test imports and DDS fixture builders.
#![allow(unused_imports)]

pub use rstest::rstest;

pub use crate::dds::constants::*;
use crate::mips::LevelSize;
use dds_surface_formats::{DxgiFormat, FourCC};
use endian_writer::{EndianWriter, LittleEndianWriter};

/// Total size of DDS header + DX10 header.
pub const DDS_DX10_TOTAL_HEADER_SIZE: usize = DDS_HEADER_SIZE + DX10_HEADER_SIZE;

/// Encodes the 5 fields of a DX10 header.
pub fn dx10_block(fields: [u32; 5]) -> [u8; DX10_HEADER_SIZE] {
    let mut data = [0u8; DX10_HEADER_SIZE];
    let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
    for (x, value) in fields.into_iter().enumerate() {
        unsafe { writer.write_u32_at(value, (x * 4) as isize) };
    }
    data
}

/// Builds DDS files byte by byte.
///
/// Defaults to a single level `TEXTURE` with an empty pixel format and no payload.
#[derive(Debug, Clone)]
pub struct DdsBuilder {
    width: u32,
    height: u32,
    depth: u32,
    pitch_or_linear_size: u32,
    mip_map_count: u32,
    header_flags: Option<u32>,
    caps: u32,
    caps2: u32,
    pf_flags: u32,
    four_cc: FourCC,
    bit_count: u32,
    masks: [u32; 4],
    dx10: Option<[u32; 5]>,
    payload: Vec<u8>,
    payload_rule: Option<LevelSize>,
}

impl DdsBuilder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            depth: 0,
            pitch_or_linear_size: 0,
            mip_map_count: 1,
            header_flags: None,
            caps: DDSCAPS_TEXTURE,
            caps2: 0,
            pf_flags: 0,
            four_cc: FourCC::default(),
            bit_count: 0,
            masks: [0; 4],
            dx10: None,
            payload: Vec::new(),
            payload_rule: None,
        }
    }

    pub fn mip_map_count(mut self, mip_map_count: u32) -> Self {
        self.mip_map_count = mip_map_count;
        self
    }

    pub fn caps(mut self, caps: u32) -> Self {
        self.caps = caps;
        self
    }

    pub fn caps2(mut self, caps2: u32) -> Self {
        self.caps2 = caps2;
        self
    }

    pub fn depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn pitch_or_linear_size(mut self, value: u32) -> Self {
        self.pitch_or_linear_size = value;
        self
    }

    /// Overrides the header flags derived from the other fields.
    pub fn header_flags(mut self, flags: u32) -> Self {
        self.header_flags = Some(flags);
        self
    }

    pub fn pixel_format(mut self, flags: u32, bit_count: u32, masks: [u32; 4]) -> Self {
        self.pf_flags = flags;
        self.bit_count = bit_count;
        self.masks = masks;
        self
    }

    /// Uncompressed RGB, with `ALPHAPIXELS` when the alpha mask is non-zero.
    pub fn rgb(self, bit_count: u32, masks: [u32; 4]) -> Self {
        let alpha = if masks[3] != 0 { DDPF_ALPHAPIXELS } else { 0 };
        self.pixel_format(DDPF_RGB | alpha, bit_count, masks)
    }

    pub fn four_cc(mut self, four_cc: FourCC) -> Self {
        self.pf_flags = DDPF_FOURCC;
        self.four_cc = four_cc;
        self
    }

    /// A DX10 header for a 2D texture of the given format.
    pub fn dx10(self, format: DxgiFormat) -> Self {
        self.dx10_raw([format.raw(), 3, 0, 1, 0])
    }

    /// A DX10 header with arbitrary raw field values.
    pub fn dx10_raw(mut self, fields: [u32; 5]) -> Self {
        self.dx10 = Some(fields);
        self.four_cc(FourCC::DX10)
    }

    pub fn payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = payload;
        self.payload_rule = None;
        self
    }

    /// Appends one run of bytes per mip level, sized with `rule`.
    /// Level `n` is filled with the byte `n + 1`.
    pub fn payload_for(mut self, rule: LevelSize) -> Self {
        self.payload_rule = Some(rule);
        self
    }

    fn generated_payload(&self, rule: LevelSize) -> Vec<u8> {
        let mut payload = Vec::new();
        let (mut width, mut height) = (self.width, self.height);
        let mut level = 0;
        while level < self.mip_map_count && (width > 0 || height > 0) {
            let size = rule.level_bytes(width.max(1), height.max(1)).unwrap();
            payload.extend(core::iter::repeat_n(level as u8 + 1, size as usize));
            width >>= 1;
            height >>= 1;
            level += 1;
        }
        payload
    }

    pub fn build(&self) -> Vec<u8> {
        let header_len = match self.dx10 {
            Some(_) => DDS_DX10_TOTAL_HEADER_SIZE,
            None => DDS_HEADER_SIZE,
        };
        let mut data = vec![0u8; header_len];

        let flags = self.header_flags.unwrap_or_else(|| {
            let mut flags =
                DDSD_CAPS | DDSD_HEIGHT | DDSD_WIDTH | DDSD_PIXELFORMAT | DDSD_LINEARSIZE;
            if self.mip_map_count > 1 {
                flags |= DDSD_MIPMAPCOUNT;
            }
            if self.depth > 0 {
                flags |= DDSD_DEPTH;
            }
            flags
        });

        let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
        unsafe {
            writer.write_u32_at(DDS_MAGIC, 0);
            writer.write_u32_at(DDS_PRIMARY_HEADER_SIZE as u32, DDS_SIZE_OFFSET as isize);
            writer.write_u32_at(flags, DDS_FLAGS_OFFSET as isize);
            writer.write_u32_at(self.height, DDS_HEIGHT_OFFSET as isize);
            writer.write_u32_at(self.width, DDS_WIDTH_OFFSET as isize);
            writer.write_u32_at(
                self.pitch_or_linear_size,
                DDS_PITCH_OR_LINEAR_SIZE_OFFSET as isize,
            );
            writer.write_u32_at(self.depth, DDS_DEPTH_OFFSET as isize);
            writer.write_u32_at(self.mip_map_count, DDS_MIPMAP_COUNT_OFFSET as isize);

            writer.write_u32_at(32, DDS_PIXELFORMAT_OFFSET as isize);
            writer.write_u32_at(self.pf_flags, DDS_PIXELFORMAT_FLAGS_OFFSET as isize);
            writer.write_u32_at(self.four_cc.to_u32(), DDS_PIXELFORMAT_FOURCC_OFFSET as isize);
            writer.write_u32_at(self.bit_count, DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET as isize);
            writer.write_u32_at(self.masks[0], DDS_PIXELFORMAT_RBITMASK_OFFSET as isize);
            writer.write_u32_at(self.masks[1], DDS_PIXELFORMAT_GBITMASK_OFFSET as isize);
            writer.write_u32_at(self.masks[2], DDS_PIXELFORMAT_BBITMASK_OFFSET as isize);
            writer.write_u32_at(self.masks[3], DDS_PIXELFORMAT_ABITMASK_OFFSET as isize);

            writer.write_u32_at(self.caps, DDS_CAPS_OFFSET as isize);
            writer.write_u32_at(self.caps2, DDS_CAPS2_OFFSET as isize);
        }

        if let Some(fields) = self.dx10 {
            data[DX10_HEADER_OFFSET..].copy_from_slice(&dx10_block(fields));
        }

        match self.payload_rule {
            Some(rule) => data.extend(self.generated_payload(rule)),
            None => data.extend_from_slice(&self.payload),
        }
        data
    }
}
