use crate::models::BenchmarkRow;
use crate::utils::read_to_string_auto;
use csv::{ReaderBuilder, Trim};
use std::error::Error;
use std::path::Path;

/// Load a benchmark result CSV (`mode,key_size,value_size,threads,ops`).
pub fn parse_bench_csv<P: AsRef<Path>>(csv_file: P) -> Result<Vec<BenchmarkRow>, Box<dyn Error>> {
    let csv_file = csv_file.as_ref();
    let content = read_to_string_auto(csv_file)
        .map_err(|e| format!("cannot read {}: {e}", csv_file.display()))?;
    parse_bench_csv_str(&content)
}

/// CSV 텍스트를 BenchmarkRow 목록으로 변환 (헤더 필수)
pub fn parse_bench_csv_str(content: &str) -> Result<Vec<BenchmarkRow>, Box<dyn Error>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: BenchmarkRow = result?;
        rows.push(row);
    }

    Ok(rows)
}
