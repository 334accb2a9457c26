use alloc::string::String;

/// A `\u`/`\U` escape naming something that is not a Unicode scalar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct InvalidEscape;

/// Decodes ECHAR and UCHAR escapes in the body of a string literal.
pub(crate) fn unescape_literal(txt: &str) -> Result<String, InvalidEscape> {
    unescape(txt, true)
}

/// Decodes UCHAR escapes in the body of an IRI reference.
pub(crate) fn unescape_iri(txt: &str) -> Result<String, InvalidEscape> {
    unescape(txt, false)
}

/// Drops the backslash of `\`-escapes in a local name. `%XX` stays as is.
pub(crate) fn unescape_local(txt: &str) -> String {
    let mut out = String::with_capacity(txt.len());
    let mut chars = txt.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.extend(chars.next()),
            _ => out.push(c),
        }
    }
    out
}

fn unescape(txt: &str, echar: bool) -> Result<String, InvalidEscape> {
    let mut out = String::with_capacity(txt.len());
    let mut rest = txt;
    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        let escape = &rest[pos + 1..];
        let (chr, len) = match escape.as_bytes().first() {
            Some(b'b') if echar => ('\x08', 1),
            Some(b'f') if echar => ('\x0C', 1),
            Some(b'n') if echar => ('\n', 1),
            Some(b'r') if echar => ('\r', 1),
            Some(b't') if echar => ('\t', 1),
            Some(b'"') if echar => ('"', 1),
            Some(b'\'') if echar => ('\'', 1),
            Some(b'\\') if echar => ('\\', 1),
            _ => unescape_numeric(escape)?,
        };
        out.push(chr);
        rest = &escape[len..];
    }
    out.push_str(rest);
    Ok(out)
}

fn unescape_numeric(txt: &str) -> Result<(char, usize), InvalidEscape> {
    let digits = match txt.as_bytes().first() {
        Some(b'u') => 4,
        Some(b'U') => 8,
        _ => return Err(InvalidEscape),
    };
    let hex = txt.get(1..=digits).ok_or(InvalidEscape)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(InvalidEscape);
    }
    let cp = u32::from_str_radix(hex, 16).map_err(|_| InvalidEscape)?;
    let chr = char::from_u32(cp).ok_or(InvalidEscape)?;
    Ok((chr, digits + 1))
}
