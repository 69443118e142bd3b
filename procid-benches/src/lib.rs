//! Benchmarks for `procid`. See `benches/`.
