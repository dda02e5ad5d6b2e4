use super::constants::*;

/// Determines if the given data likely represents a DDS file.
///
/// Checks the `"DDS "` magic at offset 0 and that the full primary header fits.
/// For a full decode, use [`decode`].
///
/// [`decode`]: crate::decode
#[inline(always)]
pub fn likely_dds(data: &[u8]) -> bool {
    data.len() >= DDS_HEADER_SIZE
        && u32::from_le_bytes([data[0], data[1], data[2], data[3]]) == DDS_MAGIC
}
