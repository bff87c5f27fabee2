use crate::models::{FieldList, LogRecord};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// `<fields>\n<context>\n` 형식의 레코드 블록
pub fn format_record(record: &LogRecord) -> String {
    format!("{}\n{}\n", FieldList(record.fields()), record.context())
}

/// Write records in the given order, one block per record.
pub fn write_records<P: AsRef<Path>>(path: P, records: &[LogRecord]) -> io::Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| {
        io::Error::new(e.kind(), format!("cannot create {}: {e}", path.display()))
    })?;
    let mut writer = BufWriter::new(file);

    for record in records {
        writer.write_all(format_record(record).as_bytes())?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatusField;
    use std::fs;

    fn sample() -> LogRecord {
        LogRecord::new(
            vec![
                StatusField::new("a", 1),
                StatusField::new("alloc_size", 500),
                StatusField::new("b", 2),
                StatusField::new("free_size", 300),
            ],
            "mace/src/x.rs:1\nmace/src/y.rs:2\n".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn test_format_record() {
        assert_eq!(
            format_record(&sample()),
            "[('a', 1), ('alloc_size', 500), ('b', 2), ('free_size', 300)]\n\
             mace/src/x.rs:1\nmace/src/y.rs:2\n\n"
        );
    }

    #[test]
    fn test_write_records_matches_format() {
        let path = std::env::temp_dir().join(format!("benchtrace_dump_{}.txt", std::process::id()));
        let records = vec![sample(), sample()];
        write_records(&path, &records).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, format_record(&records[0]).repeat(2));

        fs::remove_file(&path).ok();
    }
}
