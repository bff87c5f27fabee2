mod alloc_record;
mod bench_row;
mod series;

pub use alloc_record::{FieldList, LogRecord, StatusField};
pub use bench_row::BenchmarkRow;
pub use series::{ModeChart, Series};
