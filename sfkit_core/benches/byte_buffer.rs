use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use sfkit_core::{
	byte_iterator::{ByteIterator, parse_number_as},
	io::{ValueReader, ValueReaderSlice, ValueWriter, ValueWriterBlob},
};
use std::hint::black_box;

const VALUE_COUNT: usize = 1_000_000;

fn bench_write_f64(c: &mut Criterion) {
	c.bench_function("ValueWriterBlob write_f64", |b| {
		b.iter(|| {
			let mut writer = ValueWriterBlob::new_le();
			for i in 0..VALUE_COUNT {
				writer.write_f64(i as f64).unwrap();
			}
			black_box(writer.into_blob())
		});
	});
}

fn bench_read_f64(c: &mut Criterion) {
	let mut writer = ValueWriterBlob::new_be();
	for i in 0..VALUE_COUNT {
		writer.write_f64(i as f64).unwrap();
	}
	let blob = writer.into_blob();
	c.bench_function("ValueReaderSlice read_f64", |b| {
		b.iter(|| {
			let mut reader = ValueReaderSlice::new_be(blob.as_slice());
			let mut sum = 0.0;
			while reader.has_remaining() {
				sum += reader.read_f64().unwrap();
			}
			black_box(sum)
		});
	});
}

fn bench_parse_numbers(c: &mut Criterion) {
	let text = (0..100_000).map(|i| format!("{}.{} ", i, i % 97)).collect::<String>();
	c.bench_function("ByteIterator parse_number_as<f64>", |b| {
		b.iter_batched(
			|| ByteIterator::from_str(&text),
			|mut iter| {
				while iter.peek().is_some() {
					black_box(parse_number_as::<f64>(&mut iter).unwrap());
					iter.skip_whitespace();
				}
			},
			BatchSize::SmallInput,
		);
	});
}

criterion_group!(benches, bench_write_f64, bench_read_f64, bench_parse_numbers);
criterion_main!(benches);
