use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use cbc_cts::{CbcEncrypter, CtsEncrypter, DummyCipher, Format};

const MESSAGE_LEN: usize = 64 * 1024 + 7;

fn bench_modes(c: &mut Criterion) {
    let cipher = DummyCipher::new(b"bench-key-16byte", 16);
    let iv = [0u8; 16];

    let mut group = c.benchmark_group("encrypt");
    group.throughput(Throughput::Bytes(MESSAGE_LEN as u64));

    group.bench_function("cbc_aligned", |b| {
        let mut buf = vec![0u8; MESSAGE_LEN - 7];
        b.iter(|| {
            let mut enc = CbcEncrypter::new(&cipher, &iv).unwrap();
            enc.process(black_box(&mut buf)).unwrap();
        })
    });

    for format in [Format::Cs1, Format::Cs3] {
        group.bench_function(format!("cts_{format:?}"), |b| {
            let mut buf = vec![0u8; MESSAGE_LEN];
            b.iter(|| {
                let mut enc = CtsEncrypter::new(&cipher, &iv, format).unwrap();
                enc.process(black_box(&mut buf)).unwrap();
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_modes);
criterion_main!(benches);
