//! Low-level helpers for emitting RTF control words and escaped text.
//!
//! All serializers in this crate build their output in a `String` buffer and
//! go through these helpers so the token syntax lives in one place.

/// Append a parameterless control word (`\word`).
#[inline]
pub(crate) fn push_control_word(out: &mut String, word: &str) {
    out.push('\\');
    out.push_str(word);
}

/// Append a control word carrying an integer parameter (`\word123`).
#[inline]
pub(crate) fn push_control_param<I: itoa::Integer>(out: &mut String, word: &str, param: I) {
    let mut buffer = itoa::Buffer::new();
    push_control_word(out, word);
    out.push_str(buffer.format(param));
}

/// Append `count` spaces of indentation.
#[inline]
pub(crate) fn push_indent(out: &mut String, count: usize) {
    out.extend(std::iter::repeat_n(' ', count));
}

/// Append plain text with RTF escaping applied.
///
/// Backslashes and braces are escaped, newlines become `\line ` and tabs
/// `\tab ` (the space ends the control word). Anything outside ASCII is
/// written as `\uN?` using signed UTF-16 code units, so astral characters
/// become surrogate pairs.
pub(crate) fn push_escaped_text(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '\n' => out.push_str("\\line "),
            '\t' => out.push_str("\\tab "),
            c if c.is_ascii() => out.push(c),
            c => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    push_control_param(out, "u", *unit as i16);
                    out.push('?');
                }
            },
        }
    }
}
