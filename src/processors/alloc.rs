use crate::log_info;
use crate::models::LogRecord;
use crate::output::write_records;
use crate::parsers::parse_alloc_log;
use crate::utils::constants::{ALLOC_DUMP_FILE, FREE_DUMP_FILE};
use std::fmt;
use std::io;
use std::path::Path;

/// 전체 레코드의 할당/해제 크기 합계
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllocTotals {
    pub total_alloc: i128,
    pub total_free: i128,
}

impl fmt::Display for AllocTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "total_alloc {} total_free {}",
            self.total_alloc, self.total_free
        )
    }
}

/// Stable sort, largest allocated size first.
pub fn sort_by_alloc(records: &mut [LogRecord]) {
    records.sort_by(|a, b| b.alloc_size().cmp(&a.alloc_size()));
}

/// Stable sort, largest freed size first.
pub fn sort_by_free(records: &mut [LogRecord]) {
    records.sort_by(|a, b| b.free_size().cmp(&a.free_size()));
}

/// Sum of field 1 and field 3 over all records.
pub fn summarize(records: &[LogRecord]) -> io::Result<AllocTotals> {
    let overflow = |what: &str| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{what} overflows a 128-bit integer"),
        )
    };

    let mut totals = AllocTotals::default();
    for record in records {
        totals.total_alloc = totals
            .total_alloc
            .checked_add(record.alloc_size())
            .ok_or_else(|| overflow("total_alloc"))?;
        totals.total_free = totals
            .total_free
            .checked_add(record.free_size())
            .ok_or_else(|| overflow("total_free"))?;
    }
    Ok(totals)
}

/// 할당 추적 로그를 파싱해 alloc.txt / free.txt 를 out_dir에 저장하고 합계를 반환
pub fn analyze_alloc_log<P: AsRef<Path>, Q: AsRef<Path>>(
    log_file: P,
    out_dir: Q,
) -> io::Result<AllocTotals> {
    let log_file = log_file.as_ref();
    let out_dir = out_dir.as_ref();

    log_info!("Parsing allocation log: {}", log_file.display());
    let mut records = parse_alloc_log(log_file)?;
    log_info!("Parsed {} records", records.len());

    let alloc_path = out_dir.join(ALLOC_DUMP_FILE);
    sort_by_alloc(&mut records);
    write_records(&alloc_path, &records)?;
    log_info!("Records sorted by alloc size saved to: {}", alloc_path.display());

    // alloc 순으로 정렬된 상태에서 다시 정렬 (동률은 alloc 순서 유지)
    let free_path = out_dir.join(FREE_DUMP_FILE);
    sort_by_free(&mut records);
    write_records(&free_path, &records)?;
    log_info!("Records sorted by free size saved to: {}", free_path.display());

    summarize(&records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatusField;
    use std::fs;

    fn record(alloc: i128, free: i128, context: &str) -> LogRecord {
        LogRecord::new(
            vec![
                StatusField::new("nr_alloc", 1),
                StatusField::new("alloc_size", alloc),
                StatusField::new("nr_free", 1),
                StatusField::new("free_size", free),
            ],
            context.to_string(),
        )
        .unwrap()
    }

    #[test]
    fn test_summarize() {
        let records = vec![record(500, 300, "a"), record(20, 70, "b"), record(0, 5, "c")];
        let totals = summarize(&records).unwrap();
        assert_eq!(totals.total_alloc, 520);
        assert_eq!(totals.total_free, 375);
        assert_eq!(totals.to_string(), "total_alloc 520 total_free 375");
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(summarize(&[]).unwrap().to_string(), "total_alloc 0 total_free 0");
    }

    #[test]
    fn test_summarize_beyond_i64() {
        // usize 크기 두 개의 합은 i64 범위를 넘음
        let near_max = i64::MAX as i128 - 807;
        let records = vec![
            record(near_max, 18446744073709551000, "a"),
            record(near_max, 1, "b"),
        ];
        let totals = summarize(&records).unwrap();
        assert_eq!(totals.total_alloc, 18446744073709550000);
        assert_eq!(totals.total_free, 18446744073709551001);
        assert_eq!(
            totals.to_string(),
            "total_alloc 18446744073709550000 total_free 18446744073709551001"
        );
    }

    #[test]
    fn test_summarize_overflow_is_error() {
        let records = vec![record(i128::MAX, 0, "a"), record(1, 0, "b")];
        let err = summarize(&records).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_sort_orders_are_non_increasing_and_stable() {
        let mut records = vec![
            record(10, 1, "first"),
            record(30, 1, "second"),
            record(10, 9, "third"),
        ];

        sort_by_alloc(&mut records);
        let contexts: Vec<&str> = records.iter().map(|r| r.context()).collect();
        assert_eq!(contexts, vec!["second", "first", "third"]);

        sort_by_free(&mut records);
        let contexts: Vec<&str> = records.iter().map(|r| r.context()).collect();
        assert_eq!(contexts, vec!["third", "second", "first"]);
        assert!(records.windows(2).all(|w| w[0].free_size() >= w[1].free_size()));
    }

    #[test]
    fn test_analyze_alloc_log_end_to_end() {
        let dir = std::env::temp_dir().join(format!("benchtrace_analyze_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let log_path = dir.join("x.log");
        fs::write(
            &log_path,
            "\
2025-06-01T10:00:00 INFO myalloc /root/mace/src/a.rs:1
/root/mace/src/a.rs:11
Status { nr_alloc: 1, alloc_size: 100, nr_free: 1, free_size: 900 }
/root/mace/src/b.rs:22
Status { nr_alloc: 2, alloc_size: 700, nr_free: 0, free_size: 0 }
/root/mace/src/c.rs:33
Status { nr_alloc: 4, alloc_size: 300, nr_free: 3, free_size: 200 }
",
        )
        .unwrap();

        let totals = analyze_alloc_log(&log_path, &dir).unwrap();
        assert_eq!(totals.total_alloc, 1100);
        assert_eq!(totals.total_free, 1100);

        let alloc = fs::read_to_string(dir.join(ALLOC_DUMP_FILE)).unwrap();
        let b = alloc.find("mace/src/b.rs:22").unwrap();
        let c = alloc.find("mace/src/c.rs:33").unwrap();
        let a = alloc.find("mace/src/a.rs:11").unwrap();
        assert!(b < c && c < a);
        assert!(alloc.starts_with(
            "[('nr_alloc', 2), ('alloc_size', 700), ('nr_free', 0), ('free_size', 0)]\n"
        ));

        let free = fs::read_to_string(dir.join(FREE_DUMP_FILE)).unwrap();
        let b = free.find("mace/src/b.rs:22").unwrap();
        let c = free.find("mace/src/c.rs:33").unwrap();
        let a = free.find("mace/src/a.rs:11").unwrap();
        assert!(a < c && c < b);
        assert_eq!(alloc.len(), free.len());

        fs::remove_dir_all(&dir).ok();
    }
}
