//! URL normalization.
//!
//! A cleaned URL has no zero-width characters, no surrounding whitespace, no
//! trailing slash, and no leading scheme. Cleaning is pure and idempotent.

/// Returns `true` for the zero-width characters removed during cleaning
/// (U+200B..U+200D and the BOM, U+FEFF).
fn is_zero_width(c: char) -> bool {
    matches!(c, '\u{200B}'..='\u{200D}' | '\u{FEFF}')
}

/// Strips `prefix` from the start of `s`, ASCII case-insensitively.
fn strip_prefix_ignore_ascii_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    match s.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => Some(&s[prefix.len()..]),
        _ => None,
    }
}

/// One normalization pass, in fixed order: zero-width removal, whitespace
/// trim, trailing-slash strip, then scheme strip (`https://` before
/// `http://`, each at most once).
fn clean_once(url: &str) -> String {
    let no_zero_width: String = url.chars().filter(|c| !is_zero_width(*c)).collect();
    let stripped = no_zero_width.trim().trim_end_matches('/');
    let after_https = strip_prefix_ignore_ascii_case(stripped, "https://").unwrap_or(stripped);
    let after_http =
        strip_prefix_ignore_ascii_case(after_https, "http://").unwrap_or(after_https);
    after_http.to_string()
}

/// Normalizes a URL.
///
/// Removes zero-width characters anywhere in the string, surrounding
/// whitespace, trailing slashes, and a leading `http://`/`https://` scheme
/// (case-insensitive, `https` checked first). The pass repeats until a fixed
/// point, which makes the function idempotent even for degenerate inputs
/// with stacked scheme prefixes.
pub fn clean_url(url: &str) -> String {
    let mut current = clean_once(url);
    loop {
        let next = clean_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}
