pub fn is_extended_whitespace(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{2060}' | '\u{FEFF}')
}

pub fn remove_all_internal_whitespace(text: &str) -> String {
    text.chars()
        .filter(|ch| !is_extended_whitespace(*ch))
        .collect()
}

pub fn collapse_internal_whitespace(text: &str) -> String {
    text.split(is_extended_whitespace)
        .filter(|token| !token.is_empty())
        .collect::<Vec<&str>>()
        .join(" ")
}

pub fn trim_extended(text: &str) -> &str {
    text.trim_matches(is_extended_whitespace)
}

pub fn is_blank(text: &str) -> bool {
    text.chars().all(is_extended_whitespace)
}
