//! CSV tokenizer: comma separator, RFC 4180-style double-quote quoting.
//!
//! A field that begins with a quote is read in quoted mode, where the
//! separator and line breaks are literal and a doubled quote escapes the
//! quote character. A quote appearing mid-way through an unquoted field is
//! taken literally. Rows end at LF, CRLF, or a lone CR.

use crate::error::{Result, TabrecError};

/// Field separator
pub const DELIMITER: char = ',';

/// Quote character; doubled inside a quoted field to escape itself
pub const QUOTE: char = '"';

enum State {
    /// At the beginning of a field (start of row or just past a separator).
    FieldStart,
    /// Inside an unquoted field.
    Unquoted,
    /// Inside a quoted field.
    Quoted,
    /// Just past the closing quote of a quoted field.
    QuoteClosed,
}

/// Tokenize CSV text into rows of fields.
///
/// Blank rows (no characters between two row terminators) are skipped.
/// Returns [`TabrecError::MalformedInput`] for an unterminated quoted field
/// or for stray characters between a closing quote and the next separator
/// or row terminator; row numbers in errors are 1-based physical rows.
pub fn tokenize(input: &str) -> Result<Vec<Vec<String>>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut state = State::FieldStart;
    let mut row: u64 = 1;
    let mut quote_opened_at: u64 = 1;

    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        match state {
            State::FieldStart => match ch {
                QUOTE => {
                    quote_opened_at = row;
                    state = State::Quoted;
                }
                DELIMITER => fields.push(String::new()),
                '\r' | '\n' => {
                    if ch == '\r' && chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    row += 1;
                    if !fields.is_empty() {
                        // trailing separator before the terminator
                        fields.push(String::new());
                        rows.push(std::mem::take(&mut fields));
                    }
                }
                _ => {
                    field.push(ch);
                    state = State::Unquoted;
                }
            },
            State::Unquoted => match ch {
                DELIMITER => {
                    fields.push(std::mem::take(&mut field));
                    state = State::FieldStart;
                }
                '\r' | '\n' => {
                    if ch == '\r' && chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    row += 1;
                    fields.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut fields));
                    state = State::FieldStart;
                }
                _ => field.push(ch),
            },
            State::Quoted => match ch {
                QUOTE => {
                    if chars.peek() == Some(&QUOTE) {
                        chars.next();
                        field.push(QUOTE);
                    } else {
                        state = State::QuoteClosed;
                    }
                }
                '\n' => {
                    field.push(ch);
                    row += 1;
                }
                _ => field.push(ch),
            },
            State::QuoteClosed => match ch {
                DELIMITER => {
                    fields.push(std::mem::take(&mut field));
                    state = State::FieldStart;
                }
                '\r' | '\n' => {
                    if ch == '\r' && chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    row += 1;
                    fields.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut fields));
                    state = State::FieldStart;
                }
                _ => {
                    return Err(TabrecError::MalformedInput {
                        row,
                        reason: format!("unexpected character {:?} after closing quote", ch),
                    });
                }
            },
        }
    }

    match state {
        State::Quoted => Err(TabrecError::MalformedInput {
            row: quote_opened_at,
            reason: "unterminated quoted field at end of input".to_string(),
        }),
        State::Unquoted | State::QuoteClosed => {
            fields.push(field);
            rows.push(fields);
            Ok(rows)
        }
        State::FieldStart => {
            if !fields.is_empty() {
                fields.push(field);
                rows.push(fields);
            }
            Ok(rows)
        }
    }
}
