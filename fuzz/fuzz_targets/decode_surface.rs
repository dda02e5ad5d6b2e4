#![no_main]

// Feeds arbitrary bytes to the decoder. Decoding may fail, but must never panic,
// and every planned level must either read in full or report an error.

use dds_surface::{decode, MemoryCursor};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(surface) = decode(MemoryCursor::new(data)) else {
        return;
    };

    let mut previous_end = surface.metadata().payload_offset;
    for level in &surface {
        // Levels are contiguous and in order.
        assert_eq!(level.offset(), previous_end);
        previous_end = level.offset() + level.size() as u64;

        if let Ok(bytes) = level.read() {
            assert_eq!(bytes.len(), level.size());
            assert_eq!(&data[level.offset() as usize..previous_end as usize], &bytes[..]);
        }
    }
});
