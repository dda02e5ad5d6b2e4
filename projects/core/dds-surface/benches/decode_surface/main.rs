use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dds_surface::{decode, DxgiFormat, MemoryCursor};
use std::hint::black_box;

// Builds a square DX10 BC7 file with a full mip chain.
fn generate_dx10_bc7(size: u32) -> Vec<u8> {
    let mip_count = 32 - size.leading_zeros();
    let mut data = vec![0u8; 148];
    let mut put = |offset: usize, value: u32| {
        data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
    };

    put(0x00, u32::from_le_bytes(*b"DDS "));
    put(0x04, 124);
    put(0x08, 0x1 | 0x2 | 0x4 | 0x1000 | 0x20000 | 0x80000);
    put(0x0C, size);
    put(0x10, size);
    put(0x1C, mip_count);
    put(0x4C, 32);
    put(0x50, 0x4);
    put(0x54, u32::from_le_bytes(*b"DX10"));
    put(0x6C, 0x1000 | 0x8 | 0x400000);
    put(0x80, DxgiFormat::BC7_UNORM.raw());
    put(0x84, 3);
    put(0x8C, 1);

    let mut dim = size;
    for level in 0..mip_count {
        let blocks = dim.div_ceil(4) as usize;
        data.extend((0..blocks * blocks * 16).map(|x| (x as u32 ^ level) as u8));
        dim = (dim >> 1).max(1);
    }
    data
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Decode DDS Surface");

    for size in [64u32, 512, 2048].iter() {
        let input = generate_dx10_bc7(*size);
        group.throughput(Throughput::Bytes(input.len() as u64));

        // Headers and mip plan only.
        group.bench_with_input(BenchmarkId::new("decode", size), &input, |b, input| {
            b.iter(|| decode(MemoryCursor::new(black_box(&input[..]))).map(|s| s.len()));
        });

        // Headers, mip plan and every level's bytes.
        group.bench_with_input(BenchmarkId::new("decode_and_read", size), &input, |b, input| {
            b.iter(|| {
                let surface = decode(MemoryCursor::new(black_box(&input[..])))?;
                surface
                    .iter()
                    .try_fold(0usize, |total, mip| Ok::<_, dds_surface::DecodeError>(total + mip.read()?.len()))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
