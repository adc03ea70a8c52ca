use std::fmt::Write as _;

/// Renders values as a bracketed list of quoted string literals, e.g. `['1', 'Alice']`.
pub fn format_trace_line(values: &[String]) -> String {
    let mut line = String::from("[");
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            line.push_str(", ");
        }
        push_quoted(&mut line, value);
    }
    line.push(']');
    line
}

fn push_quoted(out: &mut String, value: &str) {
    let quote = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };

    out.push(quote);
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if !is_printable(c) => push_escaped(out, c),
            c => out.push(c),
        }
    }
    out.push(quote);
}

/// Control, separator (other than the plain space), format and private-use
/// characters are shown escaped.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    if c.is_control() || c.is_whitespace() {
        return false;
    }
    !matches!(
        c,
        '\u{ad}'
            | '\u{600}'..='\u{605}'
            | '\u{61c}'
            | '\u{6dd}'
            | '\u{70f}'
            | '\u{180e}'
            | '\u{200b}'..='\u{200f}'
            | '\u{202a}'..='\u{202e}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206f}'
            | '\u{feff}'
            | '\u{fff9}'..='\u{fffb}'
            | '\u{e000}'..='\u{f8ff}'
            | '\u{f0000}'..='\u{10ffff}'
    )
}

fn push_escaped(out: &mut String, c: char) {
    let code = c as u32;
    let _ = if code < 0x100 {
        write!(out, "\\x{:02x}", code)
    } else if code < 0x10000 {
        write!(out, "\\u{:04x}", code)
    } else {
        write!(out, "\\U{:08x}", code)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(values: &[&str]) -> String {
        let values: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        format_trace_line(&values)
    }

    #[test]
    fn test_plain_values() {
        assert_eq!(
            line(&["1", "alice@example.com", "Alice Johnson", "Marketing", "160", "50", "8000"]),
            "['1', 'alice@example.com', 'Alice Johnson', 'Marketing', '160', '50', '8000']"
        );
    }

    #[test]
    fn test_empty_list_and_empty_value() {
        assert_eq!(line(&[]), "[]");
        assert_eq!(line(&["", "x"]), "['', 'x']");
    }

    #[test]
    fn test_quote_selection() {
        assert_eq!(line(&["O'Brien"]), "[\"O'Brien\"]");
        assert_eq!(line(&["say \"hi\""]), "['say \"hi\"']");
        assert_eq!(line(&["it's \"x\""]), "['it\\'s \"x\"']");
    }

    #[test]
    fn test_escapes_and_non_ascii() {
        assert_eq!(line(&["a\\b"]), "['a\\\\b']");
        assert_eq!(line(&["a\tb"]), "['a\\tb']");
        assert_eq!(line(&["Zoë 研發"]), "['Zoë 研發']");
    }

    #[test]
    fn test_non_printable_characters_are_escaped() {
        assert_eq!(line(&["A\u{a0}B"]), "['A\\xa0B']");
        assert_eq!(line(&["a\u{200b}b"]), "['a\\u200bb']");
        assert_eq!(line(&["\u{feff}x"]), "['\\ufeffx']");
        assert_eq!(line(&["a\u{7f}"]), "['a\\x7f']");
        assert_eq!(line(&["\u{f0000}"]), "['\\U000f0000']");
        assert_eq!(line(&["a b"]), "['a b']");
    }
}
