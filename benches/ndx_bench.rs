use criterion::{black_box, criterion_group, criterion_main, Criterion};
use molndx::prelude::*;

// Index with a few large groups, similar to a solvated protein system
fn make_groups() -> (IndexTable, Vec<String>) {
    let names = vec![
        "System".to_owned(),
        "Protein".to_owned(),
        "SOL".to_owned(),
        "Protein_&_SOL".to_owned(),
    ];
    let groups = IndexTable::from([
        (names[0].clone(), (1..=200_000).collect()),
        (names[1].clone(), (1..=20_000).collect()),
        (names[2].clone(), (20_001..=200_000).collect()),
        (names[3].clone(), (1..=200_000).step_by(3).collect()),
    ]);
    (groups, names)
}

fn ndx_write(c: &mut Criterion) {
    let (groups, names) = make_groups();
    c.bench_function("write ndx", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(2_000_000);
            write_ndx(black_box(&groups), &mut out, Some(names.as_slice())).unwrap();
            out
        })
    });
}

fn ndx_read(c: &mut Criterion) {
    let (groups, names) = make_groups();
    let mut text = Vec::new();
    write_ndx(&groups, &mut text, Some(names.as_slice())).unwrap();

    c.bench_function("read ndx", |b| {
        b.iter(|| read_ndx(black_box(text.as_slice())).unwrap())
    });
}

criterion_group!(benches, ndx_read, ndx_write);
criterion_main!(benches);
