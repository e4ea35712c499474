//! Track resolver
//!
//! Derives the ordered list of candidate URLs to attempt for one track
//! identifier. Deployments have served the same files under different
//! prefixes (`/music/` vs `/assets/audio/`), with and without a leading
//! slash, and with filenames containing spaces and non-ASCII characters,
//! so each shape variant is also offered percent-encoded.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters kept literal by component encoding: the RFC 2396 "mark" set.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Full-URI encoding additionally keeps the reserved separators literal.
const FULL_URI: &AsciiSet = &COMPONENT
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'#');

/// Alternate asset layout prefix substitution
const MUSIC_PREFIX: &str = "/music/";
const ASSETS_PREFIX: &str = "/assets/audio/";

/// Build the ordered, deduplicated candidate URL list for a track identifier
///
/// Absolute `http(s)://` identifiers are returned as-is, alone: remote hosts
/// are assumed reachable exactly as given. Anything else yields the shape
/// variants (leading-slash toggles, asset-layout alias), each also in
/// full-URI-encoded and segment-encoded form.
///
/// Never fails and never returns an empty list; the literal input is always
/// among the candidates.
pub fn candidates(track: &str) -> Vec<String> {
    if is_absolute_http(track) {
        return vec![track.to_string()];
    }

    let no_slash = track.strip_prefix('/').unwrap_or(track);
    let alias = track.replacen(MUSIC_PREFIX, ASSETS_PREFIX, 1);
    let alias_no_slash = alias.strip_prefix('/').unwrap_or(&alias).to_string();

    let raw = [
        no_slash.to_string(),
        track.to_string(),
        format!("/{no_slash}"),
        no_slash.to_string(),
        alias.clone(),
        format!("/{alias_no_slash}"),
        alias_no_slash,
    ];

    let mut out: Vec<String> = Vec::with_capacity(raw.len() * 3);
    out.extend(raw.iter().cloned());
    out.extend(raw.iter().map(|u| encode_full_uri(u)));
    out.extend(raw.iter().map(|u| encode_segments(u)));

    dedup_preserving_order(out)
}

/// Case-insensitive check for an absolute `http://` or `https://` URL
fn is_absolute_http(track: &str) -> bool {
    // get() rather than indexing: a multi-byte character inside the first
    // few bytes must read as "not absolute", not split a char boundary
    let has_prefix = |prefix: &str| {
        track
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    };
    has_prefix("http://") || has_prefix("https://")
}

/// Percent-encode a whole path, keeping reserved separators literal
fn encode_full_uri(path: &str) -> String {
    utf8_percent_encode(path, FULL_URI).to_string()
}

/// Percent-encode every path segment after the first
///
/// The first segment stays literal so a deliberately unencoded prefix
/// survives, while later segments tolerate reserved characters in
/// filenames.
fn encode_segments(path: &str) -> String {
    path.split('/')
        .enumerate()
        .map(|(i, seg)| {
            if i == 0 {
                seg.to_string()
            } else {
                utf8_percent_encode(seg, COMPONENT).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn absolute_url_is_sole_candidate() {
        let list = candidates("https://cdn.example.com/music/a.mp3");
        assert_eq!(list, ["https://cdn.example.com/music/a.mp3"]);

        // Scheme matching is case-insensitive
        let list = candidates("HTTP://cdn.example.com/a.mp3");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn relative_path_includes_alias_and_encoded_variants() {
        let list = candidates("/music/neutral/x.mp3");

        assert!(list.contains(&"/assets/audio/neutral/x.mp3".to_string()));
        assert!(list.contains(&"/music/neutral/x.mp3".to_string()));
        assert!(list.contains(&"music/neutral/x.mp3".to_string()));
        // ASCII-clean paths encode to themselves, so the full-URI variant
        // is present as the literal path; a reserved-character file shows
        // the encoding actually happens.
        let list = candidates("/music/neutral/my song #2.mp3");
        assert!(list.contains(&"/music/neutral/my%20song%20#2.mp3".to_string()));
        assert!(list.contains(&"/music/neutral/my%20song%20%232.mp3".to_string()));
    }

    #[test]
    fn non_ascii_filenames_are_percent_encoded() {
        let list = candidates("/music/neutral/乌梅子酱 2.mp3");
        assert!(list
            .iter()
            .any(|c| c.starts_with("/music/neutral/%E4%B9%8C")));
        // At least one variant is fully ASCII-safe for a strict static server
        assert!(list.iter().any(|c| c.is_ascii() && !c.contains(' ')));
    }

    #[test]
    fn multibyte_leading_characters_never_panic_scheme_detection() {
        // Filenames can start with characters wider than one byte; slicing
        // the first bytes for the scheme check must tolerate them.
        for input in ["乌梅子酱 2.mp3", "héllo.mp3", "🎵🕴.mp3", "乌http://"] {
            let list = candidates(input);
            assert!(list.contains(&input.to_string()));
            assert!(list.len() > 1, "{input} is not an absolute URL");
        }
    }

    #[test]
    fn candidates_are_deduplicated() {
        let list = candidates("/music/neutral/a.mp3");
        let mut sorted = list.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), list.len());
    }

    #[test]
    fn literal_input_is_always_present() {
        for input in ["", "x", "/music/a.mp3", "plain.mp3", "weird//path"] {
            assert!(candidates(input).contains(&input.to_string()));
        }
    }

    #[test]
    fn alias_substitutes_only_the_first_occurrence() {
        let list = candidates("/music/loop/music/a.mp3");
        assert!(list.contains(&"/assets/audio/loop/music/a.mp3".to_string()));
        assert!(!list.iter().any(|c| c.contains("/assets/audio/loop/assets")));
    }

    proptest! {
        #[test]
        fn never_empty(input in ".*") {
            prop_assert!(!candidates(&input).is_empty());
        }

        #[test]
        fn absolute_urls_stay_singular(rest in "[a-z0-9./-]{1,40}") {
            let url = format!("https://{rest}");
            prop_assert_eq!(candidates(&url), vec![url]);
        }

        #[test]
        fn contains_literal_input(input in "[^\r\n]{0,60}") {
            prop_assert!(candidates(&input).contains(&input));
        }
    }
}
