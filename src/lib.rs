pub mod models;
pub mod output;
pub mod parsers;
pub mod processors;
pub mod utils;

// 주요 기능 재내보내기(re-exporting)
pub use models::{BenchmarkRow, LogRecord, ModeChart, Series, StatusField};
pub use output::{generate_bench_charts, write_records, PlottersConfig};
pub use parsers::{parse_alloc_log, parse_bench_csv};
pub use processors::{analyze_alloc_log, build_mode_charts, AllocTotals, MixedLabel};
