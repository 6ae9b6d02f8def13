use criterion::{black_box, criterion_group, criterion_main, Criterion};
use circuitfile::format::{parse, serialize};
use circuitfile::property::{IntegerValidator, SharedValidator, TextValidator};
use circuitfile::{CircuitDescriptor, ComponentDescriptor, PropertyDescriptor, WireDescriptor};
use std::sync::Arc;

const VERSION: u32 = 1;

fn build_circuits(count: usize) -> Vec<CircuitDescriptor> {
    let text: SharedValidator = Arc::new(TextValidator);
    let integer: SharedValidator = Arc::new(IntegerValidator);

    (0..count)
        .map(|i| {
            let mut circuit = CircuitDescriptor::new(format!("circuit{}", i));
            for j in 0..50 {
                circuit = circuit
                    .with_component(
                        ComponentDescriptor::new("wiring.Pin", j, j * 2)
                            .with_property(
                                PropertyDescriptor::new("bits", 8i64)
                                    .with_validator(integer.clone()),
                            )
                            .with_property(
                                PropertyDescriptor::new("label", format!("P{}", j))
                                    .with_validator(text.clone()),
                            ),
                    )
                    .with_wire(WireDescriptor::new(j, j, 3, j % 2 == 0));
            }
            circuit
        })
        .collect()
}

fn bench_serialize(c: &mut Criterion) {
    let circuits = build_circuits(10);
    c.bench_function("serialize", |b| {
        b.iter(|| serialize(black_box(&circuits), black_box(VERSION)));
    });
}

fn bench_parse(c: &mut Criterion) {
    let text = serialize(&build_circuits(10), VERSION).unwrap();
    c.bench_function("parse", |b| {
        b.iter(|| parse(black_box(&text), black_box(VERSION)));
    });
}

criterion_group!(benches, bench_serialize, bench_parse);
criterion_main!(benches);
