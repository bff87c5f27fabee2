pub mod bench_csv;
pub mod status_log;

pub use bench_csv::{parse_bench_csv, parse_bench_csv_str};
pub use status_log::{parse_alloc_log, parse_alloc_records};
