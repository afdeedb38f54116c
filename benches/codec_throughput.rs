use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn codec_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed-width integers");
    group.bench_function("int32 x 1000", |b| {
        b.iter(|| int_record_call(black_box(1000)));
    });
    group.finish();

    let mut group = c.benchmark_group("byte buffers");
    for len in [16, 4096, 65536] {
        let payload = vec![0xa5; len];
        group.bench_function(format!("prefixed {len}"), |b| {
            b.iter(|| bytes_call::<true>(black_box(&payload)));
        });
        group.bench_function(format!("trailing {len}"), |b| {
            b.iter(|| bytes_call::<false>(black_box(&payload)));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("text");
    let text = "héllo wörld ".repeat(64);
    group.bench_function("utf8 768 bytes", |b| {
        b.iter(|| text_call(black_box(&text)));
    });
    group.finish();
}

extern crate recordcodec;
use recordcodec::codecs::{Int32, PrefixedBytes, TrailingBytes, Utf8Text};
use recordcodec::{ByteSink, ByteSource, Serializer, deserialize_from_bytes, serialize_to_bytes};

fn int_record_call(count: i32) {
    let mut sink = ByteSink::new();
    sink.hint_capacity(count as usize * 4);
    for value in 0..count {
        Int32.serialize(&mut sink, &value).unwrap();
    }
    let bytes = sink.into_bytes();

    let mut source = ByteSource::new(&bytes);
    for value in 0..count {
        assert_eq!(Int32.deserialize(&mut source).unwrap(), value);
    }
}

fn bytes_call<const PREFIXED: bool>(payload: &Vec<u8>) {
    let decoded = if PREFIXED {
        let bytes = serialize_to_bytes(payload, &PrefixedBytes).unwrap();
        deserialize_from_bytes(&bytes, &PrefixedBytes).unwrap()
    } else {
        let bytes = serialize_to_bytes(payload, &TrailingBytes).unwrap();
        deserialize_from_bytes(&bytes, &TrailingBytes).unwrap()
    };
    assert_eq!(decoded.len(), payload.len());
}

fn text_call(text: &String) {
    let bytes = serialize_to_bytes(text, &Utf8Text).unwrap();
    let decoded = deserialize_from_bytes(&bytes, &Utf8Text).unwrap();
    assert_eq!(&decoded, text);
}

criterion_group!(benches, codec_benchmark);
criterion_main!(benches);
