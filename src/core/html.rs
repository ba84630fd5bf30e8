// src/core/html.rs
//
// Tolerant, case-insensitive tag-block scanning. No DOM, no selectors;
// page specs slice out the blocks they know about and strip the rest.

/// Find the next `open`..`close` tag block at or after byte offset `from`.
///
/// Matching is ASCII case-insensitive. When `open` ends in a letter or digit
/// it only matches a complete tag name: `"<th"` matches `<th>` and
/// `<th scope="col">` but not `<thead>`. Returns byte offsets
/// (start of opener, end just past the closer).
pub fn next_tag_block_ci(s: &str, open: &str, close: &str, from: usize) -> Option<(usize, usize)> {
    let lc = s.to_ascii_lowercase();
    let open_lc = open.to_ascii_lowercase();
    let close_lc = close.to_ascii_lowercase();
    let bare_name = open_lc.chars().last().is_some_and(|c| c.is_ascii_alphanumeric());

    let mut at = from;
    loop {
        let start = lc.get(at..)?.find(&open_lc)? + at;
        let after = start + open_lc.len();

        // "<th" inside "<thead": the tag name keeps going, so keep scanning.
        if bare_name
            && matches!(lc.as_bytes().get(after), Some(c) if c.is_ascii_alphanumeric())
        {
            at = start + 1;
            continue;
        }

        let open_end = s[start..].find('>')? + start + 1;
        let end_rel = lc[open_end..].find(&close_lc)?;
        return Some((start, open_end + end_rel + close_lc.len()));
    }
}

/// Inner text of a full tag block: everything between the opener's `>` and
/// the closer's `<`.
pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return s!(&block[oe + 1..cs]);
            }
        }
    }
    s!()
}

/// Drop every `<...>` span and collapse the remaining whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}

/// Pull an attribute value out of a tag opener:
/// `tag_attr(r#"<a class="x" href="/y">"#, "href")` → `Some("/y")`.
/// Handles double-quoted, single-quoted and unquoted values.
pub fn tag_attr(opener: &str, name: &str) -> Option<String> {
    let lc = opener.to_ascii_lowercase();
    let needle = join!(name, "=");
    let at = lc.find(&needle)? + needle.len();

    let val = opener[at..].trim_start();
    let (quote, skip) = match val.as_bytes().first() {
        Some(b'"') => ('"', 1),
        Some(b'\'') => ('\'', 1),
        _ => ('\0', 0),
    };
    let val = &val[skip..];
    let end = if quote != '\0' {
        val.find(quote)?
    } else {
        val.find(|c: char| c.is_ascii_whitespace() || c == '>')
            .unwrap_or(val.len())
    };
    Some(s!(&val[..end]))
}
