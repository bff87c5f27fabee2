use crate::utils::constants::{ALLOC_FIELD_INDEX, FREE_FIELD_INDEX};
use std::fmt::{self, Write};
use std::io;

/// `Status` 라인의 key: value 한 쌍
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusField {
    pub name: String,
    pub value: i128,
}

impl StatusField {
    pub fn new(name: impl Into<String>, value: i128) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// One block of the allocation trace: the call-site lines that precede a
/// `Status` line, and the fields parsed from that line.
///
/// Fields are positional. Index 1 is read as the allocated size and index 3
/// as the freed size, whatever their names are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    fields: Vec<StatusField>,
    context: String,
}

impl LogRecord {
    pub fn new(fields: Vec<StatusField>, context: String) -> io::Result<Self> {
        if fields.len() <= FREE_FIELD_INDEX {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "status line has {} fields, at least {} required",
                    fields.len(),
                    FREE_FIELD_INDEX + 1
                ),
            ));
        }
        Ok(Self { fields, context })
    }

    pub fn fields(&self) -> &[StatusField] {
        &self.fields
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn alloc_size(&self) -> i128 {
        self.fields[ALLOC_FIELD_INDEX].value
    }

    pub fn free_size(&self) -> i128 {
        self.fields[FREE_FIELD_INDEX].value
    }
}

/// 필드 리스트를 튜플 리스트 형태로 출력: `[('nr_alloc', 3), ('alloc_size', 4096)]`
///
/// Names are quoted the way a Python `repr` of a string quotes them, so the
/// dumps diff cleanly against the older analysis script's output.
pub struct FieldList<'a>(pub &'a [StatusField]);

/// Python 문자열 repr: 기본은 작은따옴표, `'`만 있고 `"`가 없으면 큰따옴표
fn write_py_str(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    f.write_char(quote)?;
    for c in s.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => write!(f, "\\{c}")?,
            c if (c as u32) < 0x100 && c.is_control() => write!(f, "\\x{:02x}", c as u32)?,
            c if c.is_control() => write!(f, "\\u{:04x}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char(quote)
}

impl fmt::Display for FieldList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, field) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str("(")?;
            write_py_str(f, &field.name)?;
            write!(f, ", {})", field.value)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(values: &[(&str, i128)]) -> Vec<StatusField> {
        values.iter().map(|(k, v)| StatusField::new(*k, *v)).collect()
    }

    #[test]
    fn test_positional_sizes() {
        let record = LogRecord::new(
            fields(&[("a", 1), ("alloc_size", 500), ("b", 2), ("free_size", 300)]),
            String::new(),
        )
        .unwrap();
        assert_eq!(record.alloc_size(), 500);
        assert_eq!(record.free_size(), 300);
    }

    #[test]
    fn test_names_are_not_matched() {
        let record =
            LogRecord::new(fields(&[("x", 9), ("y", 8), ("z", 7), ("w", 6)]), String::new())
                .unwrap();
        assert_eq!(record.alloc_size(), 8);
        assert_eq!(record.free_size(), 6);
    }

    #[test]
    fn test_too_few_fields_rejected() {
        let err = LogRecord::new(fields(&[("a", 1), ("b", 2), ("c", 3)]), String::new())
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_field_list_display() {
        let list = fields(&[("nr_alloc", 3), ("alloc_size", 4096)]);
        assert_eq!(
            FieldList(&list).to_string(),
            "[('nr_alloc', 3), ('alloc_size', 4096)]"
        );
    }

    #[test]
    fn test_field_list_python_quoting() {
        let list = fields(&[
            ("it's", 1),
            ("say \"hi\" it's", 2),
            ("back\\slash", 3),
            ("tab\tname", 4),
            ("bell\u{7}", 5),
        ]);
        assert_eq!(
            FieldList(&list).to_string(),
            r#"[("it's", 1), ('say "hi" it\'s', 2), ('back\\slash', 3), ('tab\tname', 4), ('bell\x07', 5)]"#
        );
    }
}
