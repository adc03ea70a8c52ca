use crate::domain::model::{
    BaseRecord, FieldKind, FieldSpec, Header, BASE_FIELDS, DEPARTMENT, EMAIL, HOURS_WORKED, ID, NAME,
};
use crate::utils::error::{ReportError, Result};
use csv::{ReaderBuilder, StringRecord};

/// Parses an integer, falling back to 0 for anything that is not one.
pub fn parse_int_or_default(raw: &str) -> i64 {
    raw.trim().parse::<i64>().unwrap_or(0)
}

pub fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Splits file content into lines on every line boundary, `\r\n` counting as one.
/// A trailing boundary does not produce an extra empty line.
pub fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = content.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&content[start..i]);
        start = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                start = j + 1;
            }
        }
    }

    if start < content.len() {
        lines.push(&content[start..]);
    }
    lines
}

/// Splits one line on `delimiter`. Quotes carry no meaning; they stay in the values.
pub fn split_line(line: &str, delimiter: u8) -> Result<Vec<String>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .delimiter(delimiter)
        .from_reader(line.as_bytes());

    let mut record = StringRecord::new();
    if !reader.read_record(&mut record)? {
        return Ok(vec![String::new()]);
    }
    Ok(record.iter().map(str::to_string).collect())
}

/// Where each base field sits in one file, resolved once from its header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    pub base_positions: Vec<(FieldSpec, usize)>,
    pub extra_index: Option<usize>,
    pub hours_index: Option<usize>,
}

impl ColumnLayout {
    pub fn from_header(header: &Header) -> Self {
        let base_positions = BASE_FIELDS
            .iter()
            .filter_map(|field| header.position(field.name).map(|index| (*field, index)))
            .collect();

        Self {
            base_positions,
            extra_index: header.extra_index(),
            hours_index: header.position(HOURS_WORKED),
        }
    }
}

/// Source location of a row, for error reporting.
#[derive(Debug, Clone, Copy)]
pub struct RowLocation<'a> {
    pub path: &'a str,
    pub line: usize,
}

/// Extracts the base fields of one data row.
///
/// Base columns missing from the header keep their default. A text field whose
/// column lies past the end of the row fails the row; `hours_worked` falls back
/// to 0 in that case, as it does for non-numeric values.
pub fn parse_row(
    layout: &ColumnLayout,
    values: &[String],
    location: RowLocation<'_>,
) -> Result<BaseRecord> {
    let mut record = BaseRecord::default();

    for (field, index) in &layout.base_positions {
        let raw = values.get(*index);

        match field.kind {
            FieldKind::Integer => {
                let parsed = raw.map(|v| parse_int_or_default(v)).unwrap_or(0);
                if raw.is_none() {
                    tracing::debug!(
                        "{}:{}: {} missing, defaulting to 0",
                        location.path,
                        location.line,
                        field.name
                    );
                }
                set_integer(&mut record, field.name, parsed);
            }
            FieldKind::Text => {
                let value = raw.ok_or_else(|| ReportError::MissingColumnError {
                    path: location.path.to_string(),
                    line: location.line,
                    column: field.name.to_string(),
                    index: *index,
                    width: values.len(),
                })?;
                set_text(&mut record, field.name, value.clone());
            }
        }
    }

    Ok(record)
}

fn set_text(record: &mut BaseRecord, name: &str, value: String) {
    match name {
        ID => record.id = value,
        EMAIL => record.email = value,
        NAME => record.name = value,
        DEPARTMENT => record.department = value,
        _ => {}
    }
}

fn set_integer(record: &mut BaseRecord, name: &str, value: i64) {
    if name == HOURS_WORKED {
        record.hours_worked = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn location() -> RowLocation<'static> {
        RowLocation {
            path: "data.csv",
            line: 2,
        }
    }

    fn full_layout() -> ColumnLayout {
        ColumnLayout::from_header(&Header::new([
            "id",
            "email",
            "name",
            "department",
            "hours_worked",
            "hourly_rate",
        ]))
    }

    #[test]
    fn test_parse_int_or_default() {
        assert_eq!(parse_int_or_default("160"), 160);
        assert_eq!(parse_int_or_default(" 42 "), 42);
        assert_eq!(parse_int_or_default("-5"), -5);
        assert_eq!(parse_int_or_default("+7"), 7);
        assert_eq!(parse_int_or_default("abc"), 0);
        assert_eq!(parse_int_or_default("1.5"), 0);
        assert_eq!(parse_int_or_default(""), 0);
    }

    #[test]
    fn test_split_lines_on_every_boundary() {
        assert_eq!(split_lines(""), Vec::<&str>::new());
        assert_eq!(split_lines("\n"), vec![""]);
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\r\nb\r\n"), vec!["a", "b"]);
        assert_eq!(split_lines("1,2,3\rX\n"), vec!["1,2,3", "X"]);
        assert_eq!(split_lines("a\r\rb"), vec!["a", "", "b"]);
        assert_eq!(split_lines("a\u{2028}b\u{0c}c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_line_keeps_quotes_and_empty_values() {
        assert_eq!(split_line("a,,b,", b',').unwrap(), strings(&["a", "", "b", ""]));
        assert_eq!(
            split_line("\"x,y\",z", b',').unwrap(),
            strings(&["\"x", "y\"", "z"])
        );
        assert_eq!(split_line("a;b", b';').unwrap(), strings(&["a", "b"]));
    }

    #[test]
    fn test_layout_from_header() {
        let layout = full_layout();

        assert_eq!(layout.base_positions.len(), 5);
        assert_eq!(layout.extra_index, Some(5));
        assert_eq!(layout.hours_index, Some(4));
    }

    #[test]
    fn test_layout_follows_header_positions() {
        let layout = ColumnLayout::from_header(&Header::new(["rate", "name", "id"]));

        assert_eq!(layout.extra_index, Some(0));
        assert_eq!(layout.hours_index, None);
        assert_eq!(
            layout
                .base_positions
                .iter()
                .map(|(f, i)| (f.name, *i))
                .collect::<Vec<_>>(),
            vec![("id", 2), ("name", 1)]
        );
    }

    #[test]
    fn test_parse_row_valid() {
        let values = strings(&["1", "alice@example.com", "Alice Johnson", "Marketing", "160", "50"]);
        let record = parse_row(&full_layout(), &values, location()).unwrap();

        assert_eq!(record.id, "1");
        assert_eq!(record.email, "alice@example.com");
        assert_eq!(record.name, "Alice Johnson");
        assert_eq!(record.department, "Marketing");
        assert_eq!(record.hours_worked, 160);
    }

    #[test]
    fn test_parse_row_non_numeric_hours_defaults_to_zero() {
        let values = strings(&["1", "a@b.c", "A", "Ops", "lots", "50"]);
        let record = parse_row(&full_layout(), &values, location()).unwrap();

        assert_eq!(record.hours_worked, 0);
    }

    #[test]
    fn test_parse_row_short_hours_defaults_to_zero() {
        let values = strings(&["1", "a@b.c", "A", "Ops"]);
        let record = parse_row(&full_layout(), &values, location()).unwrap();

        assert_eq!(record.hours_worked, 0);
        assert_eq!(record.department, "Ops");
    }

    #[test]
    fn test_parse_row_short_text_field_is_fatal() {
        let values = strings(&["1", "a@b.c"]);
        let err = parse_row(&full_layout(), &values, location()).unwrap_err();

        match err {
            ReportError::MissingColumnError {
                column,
                index,
                width,
                line,
                ..
            } => {
                assert_eq!(column, "name");
                assert_eq!(index, 2);
                assert_eq!(width, 2);
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_row_absent_column_keeps_default() {
        let layout = ColumnLayout::from_header(&Header::new(["id", "name", "hours_worked"]));
        let values = strings(&["7", "Dana", "12"]);
        let record = parse_row(&layout, &values, location()).unwrap();

        assert_eq!(record.id, "7");
        assert_eq!(record.email, "");
        assert_eq!(record.department, "");
        assert_eq!(record.hours_worked, 12);
    }

    #[test]
    fn test_parse_row_keeps_text_verbatim() {
        let values = strings(&["1", " a@b.c ", "Zoë Ñúñez", "研發", "8", "1"]);
        let record = parse_row(&full_layout(), &values, location()).unwrap();

        assert_eq!(record.email, " a@b.c ");
        assert_eq!(record.name, "Zoë Ñúñez");
        assert_eq!(record.department, "研發");
    }
}
