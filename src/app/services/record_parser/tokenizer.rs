//! Line splitting and field tokenization
//!
//! Delimiter detection looks at the header line only and is deliberately
//! naive (not quote-aware); the chosen delimiter then applies to every line.

use crate::constants::BOM;

/// Split text into non-blank lines, accepting `\n` and `\r\n` endings
///
/// A leading byte-order mark is removed from the first line.
pub fn split_lines(raw_text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = raw_text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !is_blank(line))
        .collect();

    if let Some(first) = lines.first_mut() {
        *first = strip_bom(*first);
    }

    lines
}

/// Remove a leading byte-order mark if present
pub fn strip_bom(line: &str) -> &str {
    line.strip_prefix(BOM).unwrap_or(line)
}

fn is_blank(line: &str) -> bool {
    line.chars().all(|c| c.is_whitespace() || c == BOM)
}

/// Choose `;` when it splits the header into strictly more segments than `,`
pub fn detect_delimiter(header_line: &str) -> char {
    let semicolon_segments = header_line.split(';').count();
    let comma_segments = header_line.split(',').count();

    if semicolon_segments > comma_segments {
        ';'
    } else {
        ','
    }
}

/// Split one line into cleaned fields
///
/// `"` toggles quoting, `""` inside quotes is a literal quote, and the
/// delimiter only separates fields outside quotes. Each field is then
/// trimmed and loses one leading and one trailing `"` if present.
pub fn split_line(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '"' {
            if in_quotes && chars.peek() == Some(&'"') {
                current.push('"');
                chars.next();
            } else {
                in_quotes = !in_quotes;
            }
        } else if c == delimiter && !in_quotes {
            fields.push(clean_field(&current));
            current.clear();
        } else {
            current.push(c);
        }
    }
    fields.push(clean_field(&current));

    fields
}

fn clean_field(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('"').unwrap_or(trimmed);
    trimmed.to_string()
}
