use anyhow::{Context, Result};
use regex::Regex;

const URL_CHAR_CLASS: &str = r"[A-Za-z0-9\-._~:/?#\[\]@!$&'()*+,;=%]";

const SPAN_TRAILING_PUNCTUATION: [char; 12] =
    ['(', ')', '[', ']', '{', '}', ',', ';', '!', '?', '"', '\''];

pub struct PunctuationConverter {
    exempt_regex: Regex,
}

#[derive(Debug, Default, Clone, Copy)]
struct QuoteState {
    double_open: bool,
    single_open: bool,
}

impl PunctuationConverter {
    pub fn new() -> Result<Self> {
        let pattern = format!(
            r"(?i:https?|ftp)://{url}+|[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(?:\.[A-Za-z0-9\-]+)*\.[A-Za-z]{{2,}}|(?:[A-Za-z0-9\-]+\.)+[A-Za-z]{{2,}}(?:/{url}*)?|\d+(?:[:\-]\d+)+",
            url = URL_CHAR_CLASS
        );
        let exempt_regex =
            Regex::new(&pattern).context("failed to compile punctuation exemption regex")?;

        Ok(Self { exempt_regex })
    }

    pub fn latin_to_cjk(&self, text: &str) -> String {
        let mut output = String::with_capacity(text.len() + text.len() / 2);
        let mut state = QuoteState::default();
        let mut cursor = 0usize;

        for span in self.exempt_regex.find_iter(text) {
            convert_plain_segment(&text[cursor..span.start()], &mut state, &mut output);
            let exempt = exempt_text(span.as_str());
            output.push_str(exempt);
            cursor = span.start() + exempt.len();
        }
        convert_plain_segment(&text[cursor..], &mut state, &mut output);

        output
    }

    #[cfg(test)]
    pub(crate) fn exempt_spans<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.exempt_regex
            .find_iter(text)
            .map(|span| exempt_text(span.as_str()))
            .collect()
    }
}

fn exempt_text(span: &str) -> &str {
    span.trim_end_matches(&SPAN_TRAILING_PUNCTUATION[..])
}

fn convert_plain_segment(segment: &str, state: &mut QuoteState, output: &mut String) {
    let chars = segment.chars().collect::<Vec<char>>();
    let mut index = 0usize;

    while index < chars.len() {
        let ch = chars[index];
        match ch {
            '-' | '.' => {
                let run = chars[index..].iter().take_while(|value| **value == ch).count();
                match (ch, run) {
                    ('-', 1) => output.push('－'),
                    ('-', _) => output.push_str("——"),
                    ('.', run) if run >= 3 => output.push('…'),
                    _ => (0..run).for_each(|_| output.push('.')),
                }
                index += run;
                continue;
            }
            '"' => {
                output.push(if state.double_open { '”' } else { '“' });
                state.double_open = !state.double_open;
            }
            '\'' => {
                output.push(if state.single_open { '’' } else { '‘' });
                state.single_open = !state.single_open;
            }
            ':' => output.push('：'),
            other => output.push(ascii_to_fullwidth(other).unwrap_or(other)),
        }
        index += 1;
    }
}

fn ascii_to_fullwidth(ch: char) -> Option<char> {
    let mapped = match ch {
        ',' => '，',
        ';' => '；',
        '?' => '？',
        '!' => '！',
        '(' => '（',
        ')' => '）',
        '[' => '【',
        ']' => '】',
        '{' => '｛',
        '}' => '｝',
        '%' => '％',
        '~' => '～',
        '$' => '＄',
        '#' => '＃',
        '@' => '＠',
        '\\' => '＼',
        '^' => '＾',
        '_' => '＿',
        _ => return None,
    };
    Some(mapped)
}

pub fn convert_cjk_time_punctuation_to_latin(text: &str) -> String {
    let chars = text.chars().collect::<Vec<char>>();
    let mut output = String::with_capacity(text.len());

    for (index, ch) in chars.iter().enumerate() {
        let flanked_by_digits = index > 0
            && chars[index - 1].is_ascii_digit()
            && chars
                .get(index + 1)
                .map(|next| next.is_ascii_digit())
                .unwrap_or(false);

        match ch {
            '：' if flanked_by_digits => output.push(':'),
            '－' | '—' | '–' if flanked_by_digits => output.push('-'),
            other => output.push(*other),
        }
    }

    output
}
