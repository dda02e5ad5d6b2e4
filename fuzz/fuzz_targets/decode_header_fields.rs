#![no_main]

// Random bytes rarely get past the magic and size checks. This target writes
// fuzzed field values into an otherwise well formed header so the format
// resolution and mip planning paths get exercised.

use dds_surface::{decode, MemoryCursor};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct HeaderFields {
    pub flags: u32,
    pub height: u16,
    pub width: u16,
    pub mip_map_count: u8,
    pub pf_flags: u32,
    pub four_cc: [u8; 4],
    pub bit_count: u32,
    pub masks: [u32; 4],
    pub caps: u32,
    pub dx10: Option<[u32; 5]>,
    pub payload_len: u16,
}

const HEADER_SIZE: usize = 0x80;
const FOURCC_OFFSET: usize = 0x54;

fn put(data: &mut [u8], offset: usize, value: u32) {
    data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

fuzz_target!(|fields: HeaderFields| {
    let mut data = vec![0u8; HEADER_SIZE];
    data[..4].copy_from_slice(b"DDS ");
    put(&mut data, 0x04, 124);
    put(&mut data, 0x08, fields.flags);
    put(&mut data, 0x0C, fields.height as u32);
    put(&mut data, 0x10, fields.width as u32);
    put(&mut data, 0x1C, fields.mip_map_count as u32);
    put(&mut data, 0x4C, 32);
    put(&mut data, 0x50, fields.pf_flags);
    put(&mut data, 0x58, fields.bit_count);
    put(&mut data, 0x5C, fields.masks[0]);
    put(&mut data, 0x60, fields.masks[1]);
    put(&mut data, 0x64, fields.masks[2]);
    put(&mut data, 0x68, fields.masks[3]);
    put(&mut data, 0x6C, fields.caps);

    match fields.dx10 {
        Some(dx10) => {
            data[FOURCC_OFFSET..FOURCC_OFFSET + 4]
                .copy_from_slice(b"DX10");
            for value in dx10 {
                data.extend_from_slice(&value.to_le_bytes());
            }
        }
        None => data[FOURCC_OFFSET..FOURCC_OFFSET + 4]
            .copy_from_slice(&fields.four_cc),
    }
    data.resize(data.len() + fields.payload_len as usize, 0xAB);

    if let Ok(surface) = decode(MemoryCursor::new(&data[..])) {
        for level in &surface {
            let _ = level.read();
        }
    }
});
