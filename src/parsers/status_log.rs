use crate::models::{LogRecord, StatusField};
use crate::utils::constants::{
    CONTEXT_MARKER, INFO_MARKER, MIN_LINE_CHARS, STATUS_MARKER, STATUS_OFFSET,
};
use crate::utils::open_encoded_reader;
use std::io::{self, BufRead};
use std::path::Path;

const READ_BUFFER_SIZE: usize = 64 * 1024;

/// 할당 추적 로그 라인의 타입
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind<'a> {
    /// `INFO` 헤더 라인 (무시)
    Skip,
    /// 레코드 앞에 쌓이는 호출 위치 라인
    Context(&'a str),
    /// `Status` 마커 뒤의 key: value 페이로드
    Status(&'a str),
}

/// Classify one raw line (terminator included).
///
/// Context lines keep only the text from the first `mace` onwards, the whole
/// line when it starts with `mace`, and only the last character (normally
/// the line terminator) when the marker is missing.
pub fn classify_line(line: &str) -> LineKind<'_> {
    if line.contains(INFO_MARKER) {
        return LineKind::Skip;
    }

    if let Some(pos) = line.find(STATUS_MARKER) {
        let payload = line.get(pos + STATUS_OFFSET..).unwrap_or("");
        return LineKind::Status(payload);
    }

    LineKind::Context(extract_context(line))
}

/// 노이즈 접두사를 잘라낸 컨텍스트 텍스트
pub fn extract_context(line: &str) -> &str {
    match line.find(CONTEXT_MARKER) {
        Some(0) => line,
        Some(pos) => &line[pos..],
        None => line
            .char_indices()
            .next_back()
            .map_or("", |(i, _)| &line[i..]),
    }
}

/// Parse the text after the `Status` marker into its ordered fields.
///
/// Accepts both `Status { a: 1, b: 2 }` and `Status: {a: 1, b: 2}`.
pub fn parse_status_fields(payload: &str) -> io::Result<Vec<StatusField>> {
    let cleaned = payload.trim();
    let cleaned = cleaned.strip_prefix(':').unwrap_or(cleaned).trim();
    let cleaned = cleaned.trim_matches(|c| c == '{' || c == '}');

    cleaned
        .split(',')
        .map(|chunk| {
            let (key, value) = chunk.split_once(": ").ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("status field without ': ' separator: {:?}", chunk),
                )
            })?;
            let value = value.trim().parse::<i128>().map_err(|e| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("status field {:?} has non-integer value {:?}: {e}", key.trim(), value),
                )
            })?;
            Ok(StatusField::new(key.trim(), value))
        })
        .collect()
}

/// Group the lines of an allocation trace into records.
///
/// Reading stops at the first line shorter than ten characters, which also
/// covers end of input. Context collected after the last `Status` line is
/// dropped.
pub fn parse_alloc_records<R: BufRead>(mut reader: R) -> io::Result<Vec<LogRecord>> {
    let mut records = Vec::new();
    let mut context = String::new();
    let mut line = String::new();
    let mut line_no = 0usize;

    loop {
        line.clear();
        reader.read_line(&mut line)?;
        line_no += 1;

        if line.chars().count() < MIN_LINE_CHARS {
            break;
        }

        match classify_line(&line) {
            LineKind::Skip => continue,
            LineKind::Context(text) => context.push_str(text),
            LineKind::Status(payload) => {
                let record = parse_status_fields(payload)
                    .and_then(|fields| LogRecord::new(fields, std::mem::take(&mut context)))
                    .map_err(|e| io::Error::new(e.kind(), format!("line {line_no}: {e}")))?;
                records.push(record);
            }
        }
    }

    Ok(records)
}

/// 로그 파일을 열어 레코드 목록으로 파싱
pub fn parse_alloc_log<P: AsRef<Path>>(log_file: P) -> io::Result<Vec<LogRecord>> {
    let log_file = log_file.as_ref();
    let reader = open_encoded_reader(log_file, READ_BUFFER_SIZE).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!("cannot open log file {}: {e}", log_file.display()),
        )
    })?;
    parse_alloc_records(reader)
}
