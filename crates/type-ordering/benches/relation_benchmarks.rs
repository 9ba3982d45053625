//! # Relation Benchmarks
//!
//! ```bash
//! cargo bench --package type-ordering --bench relation_benchmarks
//! ```

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use type_ordering::{relation_table, TypeOrderingOracle, TypeTag};

fn bench_relate(c: &mut Criterion) {
    let oracle = TypeOrderingOracle::new();

    c.bench_function("relate/all_pairs", |b| {
        b.iter(|| {
            for type1 in TypeTag::ALL {
                for type2 in TypeTag::ALL {
                    black_box(oracle.relate(black_box(type1), black_box(type2)));
                }
            }
        })
    });

    c.bench_function("relate/table_lookup", |b| {
        let table = relation_table();
        b.iter(|| {
            for type1 in TypeTag::ALL {
                for type2 in TypeTag::ALL {
                    black_box(table.get(black_box(type1), black_box(type2)));
                }
            }
        })
    });
}

fn bench_all_relations(c: &mut Criterion) {
    let oracle = TypeOrderingOracle::new();
    c.bench_function("all_relations", |b| b.iter(|| black_box(oracle.all_relations())));
}

criterion_group!(benches, bench_relate, bench_all_relations);
criterion_main!(benches);
