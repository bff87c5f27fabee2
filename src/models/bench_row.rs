use serde::Deserialize;

/// 벤치마크 CSV의 한 행
///
/// Columns are matched by header name. `ratio` (write percentage) is only
/// present in CSVs written by the benchmark driver; other extra columns such
/// as `duration` are ignored.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BenchmarkRow {
    pub mode: String,
    pub key_size: u64,
    pub value_size: u64,
    pub threads: u64,
    pub ops: f64,
    #[serde(default)]
    pub ratio: Option<u8>,
}
