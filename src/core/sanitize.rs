// src/core/sanitize.rs

/// Decode the handful of entities the site actually emits.
/// `&amp;` goes last so "&amp;lt;" doesn't decode twice.
pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Drop every ASCII digit, keep everything else untouched.
pub fn strip_digits(s: &str) -> String {
    s.chars().filter(|c| !c.is_ascii_digit()).collect()
}

/// Word-capitalize: a letter at the start or following any non-letter is
/// uppercased, the rest lowercased. Digits count as word breaks, so
/// "san francisco 49ers" → "San Francisco 49Ers".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_letter = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_letter = true;
        } else {
            out.push(ch);
            prev_letter = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entities_decode_amp_last() {
        assert_eq!(normalize_entities("A&nbsp;&amp;&nbsp;M"), "A & M");
        assert_eq!(normalize_entities("&amp;lt;"), "&lt;");
    }

    #[test]
    fn ws_collapses_runs_and_trims() {
        assert_eq!(normalize_ws("  a \t b\n\nc "), "a b c");
    }

    #[test]
    fn digits_are_stripped_nothing_else() {
        assert_eq!(strip_digits("Mahomes15"), "Mahomes");
        assert_eq!(strip_digits("O'Brien"), "O'Brien");
        assert_eq!(strip_digits("1a2b3"), "ab");
    }

    #[test]
    fn title_case_breaks_on_non_letters() {
        assert_eq!(title_case("kansas city chiefs"), "Kansas City Chiefs");
        assert_eq!(title_case("san francisco 49ers"), "San Francisco 49Ers");
        assert_eq!(title_case("WASHINGTON commanders"), "Washington Commanders");
    }
}
