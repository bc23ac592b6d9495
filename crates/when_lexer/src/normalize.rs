use std::borrow::Cow;

/// Lowercases `input` one character at a time.
///
/// A character is replaced only when its lowercase form is a single character
/// of the same UTF-8 width (`İ` lowercases to two characters and `Ω` (U+2126)
/// to a narrower one; both are kept verbatim). Every offset into the folded
/// text is therefore also a valid offset into `input`, and slicing `input` at a
/// token's span always recovers that token's original casing.
///
/// Input that is already folded is returned borrowed.
pub fn fold_case(input: &str) -> Cow<'_, str> {
    let Some(first) = input.char_indices().find(|&(_, c)| fold_char(c) != c) else {
        return Cow::Borrowed(input);
    };

    let (start, _) = first;
    let mut out = String::with_capacity(input.len());
    out.push_str(&input[..start]);
    out.extend(input[start..].chars().map(fold_char));

    debug_assert_eq!(out.len(), input.len());
    Cow::Owned(out)
}

fn fold_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) if l.len_utf8() == c.len_utf8() => l,
        _ => c,
    }
}
