use criterion::{criterion_group, criterion_main};


criterion_group!(
    benches,
    session::bench_process_line,
    session::bench_process_batch,
    session::bench_tokenize
);
criterion_main!(benches);
