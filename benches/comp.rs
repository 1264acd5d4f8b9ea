//! Comparison against the `crc` crate's table-driven implementations.

use core::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

const CASES: &[(&str, usize)] = &[("xs", 64), ("s", 256), ("m", 4 * 1024), ("l", 64 * 1024), ("xl", 1024 * 1024)];

fn make_data(len: usize) -> Vec<u8> {
  (0..len).map(|i| (i as u8).wrapping_mul(31).wrapping_add((i >> 8) as u8)).collect()
}

fn bench_crc32_comp(c: &mut Criterion) {
  let ours = bitcrc::catalog::CRC_32_ISO_HDLC.crc();
  let reference = crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC);

  let mut group = c.benchmark_group("comp/crc32-iso-hdlc");
  for &(label, size) in CASES {
    let data = make_data(size);
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::new("bitcrc", label), &data, |b, data| {
      b.iter(|| black_box(ours.checksum(black_box(data))));
    });

    group.bench_with_input(BenchmarkId::new("crc", label), &data, |b, data| {
      b.iter(|| black_box(reference.checksum(black_box(data))));
    });
  }
  group.finish();
}

fn bench_crc64_comp(c: &mut Criterion) {
  let ours = bitcrc::catalog::CRC_64_XZ.crc();
  let reference = crc::Crc::<u64>::new(&crc::CRC_64_XZ);

  let mut group = c.benchmark_group("comp/crc64-xz");
  for &(label, size) in CASES {
    let data = make_data(size);
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::new("bitcrc", label), &data, |b, data| {
      b.iter(|| black_box(ours.checksum(black_box(data))));
    });

    group.bench_with_input(BenchmarkId::new("crc", label), &data, |b, data| {
      b.iter(|| black_box(reference.checksum(black_box(data))));
    });
  }
  group.finish();
}

criterion_group!(benches, bench_crc32_comp, bench_crc64_comp);
criterion_main!(benches);
