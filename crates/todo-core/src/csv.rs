//! Minimal comma-separated values codec.
//!
//! Writing follows the usual minimal quoting rule: a field is wrapped in
//! double quotes only when it contains a comma, a quote or a line break, and
//! inner quotes are doubled. Reading accepts the same, plus `\n`, `\r\n` or
//! bare `\r` row terminators and quoted fields spanning several lines.
//!
//! # Examples
//!
//! ```
//! use todo_core::csv::{encode_row, parse};
//!
//! let line = encode_row(&["a,b", "say \"hi\"", "plain"]);
//! assert_eq!(line, "\"a,b\",\"say \"\"hi\"\"\",plain\r\n");
//!
//! let records = parse(&line);
//! assert_eq!(records[0].fields, ["a,b", "say \"hi\"", "plain"]);
//! ```

use std::borrow::Cow;

/// Row terminator used when writing.
pub const ROW_TERMINATOR: &str = "\r\n";

/// One parsed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-indexed line on which the row starts.
    pub line: usize,
    /// Unescaped field values. Empty for a blank line.
    pub fields: Vec<String>,
}

impl Record {
    /// Returns `true` if the row came from a blank line.
    #[inline]
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Encodes one row, including the trailing [`ROW_TERMINATOR`].
#[must_use]
pub fn encode_row(fields: &[&str]) -> String {
    let mut output = String::new();
    write_row(&mut output, fields);
    output
}

/// Appends one encoded row to `output`.
pub fn write_row(output: &mut String, fields: &[&str]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            output.push(',');
        }
        output.push_str(&escape(field));
    }
    output.push_str(ROW_TERMINATOR);
}

/// Quotes a field if it contains a delimiter, quote or line break.
fn escape(s: &str) -> Cow<'_, str> {
    if s.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", s.replace('"', "\"\"")).into()
    } else {
        s.into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    FieldStart,
    Unquoted,
    Quoted,
    AfterQuote,
}

/// Splits a whole document into rows.
///
/// Parsing never fails. Stray characters after a closing quote are kept as
/// part of the field and an unterminated quoted field runs to the end of the
/// input; callers decide what to do with rows that look wrong.
#[must_use]
pub fn parse(text: &str) -> Vec<Record> {
    let mut records = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut state = State::FieldStart;
    let mut line = 1;
    let mut start_line = 1;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if state == State::Quoted {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => state = State::AfterQuote,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if state == State::FieldStart => state = State::Quoted,
            ',' => {
                fields.push(std::mem::take(&mut field));
                state = State::FieldStart;
            }
            '\r' | '\n' => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                // A blank line has no fields at all rather than one empty field.
                if state != State::FieldStart || !fields.is_empty() {
                    fields.push(std::mem::take(&mut field));
                }
                records.push(Record {
                    line: start_line,
                    fields: std::mem::take(&mut fields),
                });
                state = State::FieldStart;
                line += 1;
                start_line = line;
            }
            _ => {
                field.push(c);
                state = State::Unquoted;
            }
        }
    }

    if state != State::FieldStart || !fields.is_empty() {
        fields.push(field);
        records.push(Record {
            line: start_line,
            fields,
        });
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(text: &str) -> Vec<Vec<String>> {
        parse(text).into_iter().map(|r| r.fields).collect()
    }

    #[test]
    fn test_encode_plain_row() {
        assert_eq!(encode_row(&["a", "b", "c"]), "a,b,c\r\n");
    }

    #[test]
    fn test_encode_quotes_when_needed() {
        assert_eq!(
            encode_row(&["has,comma", "has \"quote\"", "line\nbreak", "cr\rhere", ""]),
            "\"has,comma\",\"has \"\"quote\"\"\",\"line\nbreak\",\"cr\rhere\",\r\n"
        );
    }

    #[test]
    fn test_encode_leaves_spaces_unquoted() {
        assert_eq!(encode_row(&[" padded ", "x"]), " padded ,x\r\n");
    }

    #[test]
    fn test_parse_simple_rows() {
        assert_eq!(fields("a,b\r\nc,d\r\n"), [["a", "b"], ["c", "d"]]);
    }

    #[test]
    fn test_parse_without_trailing_newline() {
        assert_eq!(fields("a,b\nc,d"), [["a", "b"], ["c", "d"]]);
    }

    #[test]
    fn test_parse_trailing_empty_field() {
        assert_eq!(fields("a,\n"), [["a", ""]]);
        assert_eq!(fields("a,"), [["a", ""]]);
    }

    #[test]
    fn test_parse_quoted_fields() {
        let rows = fields("\"a,b\",\"say \"\"hi\"\"\",c\n");
        assert_eq!(rows, [["a,b", "say \"hi\"", "c"]]);
    }

    #[test]
    fn test_parse_quoted_line_break_keeps_start_line() {
        let records = parse("h\n\"two\nlines\",x\nlast,y\n");
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].fields, ["two\nlines", "x"]);
        assert_eq!(records[1].line, 2);
        assert_eq!(records[2].line, 4);
    }

    #[test]
    fn test_parse_blank_lines() {
        let records = parse("a\n\nb\n");
        assert_eq!(records.len(), 3);
        assert!(records[1].is_blank());
        assert_eq!(records[2].line, 3);
    }

    #[test]
    fn test_parse_empty_quoted_field_is_not_blank() {
        let records = parse("\"\"\n");
        assert_eq!(records[0].fields, [""]);
        assert!(!records[0].is_blank());
    }

    #[test]
    fn test_parse_quote_inside_unquoted_field_is_literal() {
        assert_eq!(fields("ab\"c,d\n"), [["ab\"c", "d"]]);
    }

    #[test]
    fn test_parse_text_after_closing_quote_is_kept() {
        assert_eq!(fields("\"ab\"c,d\n"), [["abc", "d"]]);
    }

    #[test]
    fn test_parse_unterminated_quote_runs_to_end() {
        assert_eq!(fields("\"abc,d\n"), [["abc,d\n"]]);
    }

    #[test]
    fn test_parse_reads_back_encoded_rows() {
        let values = ["x,y", "\"q\"", "multi\r\nline", " spaced "];
        let records = parse(&encode_row(&values));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].fields, values);
    }
}
