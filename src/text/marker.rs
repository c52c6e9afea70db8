use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

use super::whitespace::{is_extended_whitespace, remove_all_internal_whitespace};

const WS: &str = r"[\s\x{200B}-\x{200D}\x{2060}\x{FEFF}]";
const CIRCLED_CLASS: &str = "[①-⑳⓫-⓴]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    NumericDot,
    NumericParen,
    CjkNumeralComma,
    Parenthesized,
    Circled,
    LetterDot,
    Article,
    Year,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerRank {
    Level1,
    Level2,
    NonOrdinal,
}

impl MarkerKind {
    pub fn rank(self) -> MarkerRank {
        match self {
            Self::NumericDot
            | Self::NumericParen
            | Self::CjkNumeralComma
            | Self::Parenthesized
            | Self::Article => MarkerRank::Level1,
            Self::Circled | Self::LetterDot => MarkerRank::Level2,
            Self::Year | Self::None => MarkerRank::NonOrdinal,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::NumericDot => "numeric_dot",
            Self::NumericParen => "numeric_paren",
            Self::CjkNumeralComma => "cjk_numeral_comma",
            Self::Parenthesized => "parenthesized",
            Self::Circled => "circled",
            Self::LetterDot => "letter_dot",
            Self::Article => "article",
            Self::Year => "year",
            Self::None => "none",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadingMarker {
    pub kind: MarkerKind,
    pub label: String,
    pub prefix_len: usize,
}

impl LeadingMarker {
    fn none() -> Self {
        Self {
            kind: MarkerKind::None,
            label: String::new(),
            prefix_len: 0,
        }
    }

    pub fn is_ordinal(&self) -> bool {
        self.kind.rank() != MarkerRank::NonOrdinal
    }
}

struct MarkerRule {
    kind: MarkerKind,
    regex: Regex,
    accepts: fn(&str, &str) -> bool,
}

pub struct MarkerRecognizer {
    rules: Vec<MarkerRule>,
    explicit_level1_regex: Regex,
}

impl MarkerRecognizer {
    pub fn new() -> Result<Self> {
        let rule_table: [(MarkerKind, &str, fn(&str, &str) -> bool); 8] = [
            (MarkerKind::Year, r"\d{4}年度?", accept_any),
            (MarkerKind::NumericParen, r"\d+[)）]", accept_any),
            (MarkerKind::NumericDot, r"\d+[.．、]?", accept_after_number),
            (MarkerKind::CjkNumeralComma, r"[一二三四五六七八九十百零〇两]+、", accept_any),
            (
                MarkerKind::Parenthesized,
                r"[(（][0-9一二三四五六七八九十]{1,2}[)）]、?",
                accept_any,
            ),
            (MarkerKind::Circled, CIRCLED_CLASS, accept_any),
            (MarkerKind::LetterDot, r"[A-Za-z][.．)）]?", accept_after_letter),
            (MarkerKind::Article, r"第\s*\d+\s*条?", accept_after_article),
        ];

        let mut rules = Vec::with_capacity(rule_table.len());
        for (kind, body, accepts) in rule_table {
            let regex = Regex::new(&format!("^{WS}*(?P<marker>{body}){WS}*"))
                .with_context(|| format!("failed to compile {} marker regex", kind.as_str()))?;
            rules.push(MarkerRule {
                kind,
                regex,
                accepts,
            });
        }

        let explicit_level1_regex =
            Regex::new(r"^[(（]\d+[)）]").context("failed to compile level-1 input regex")?;

        Ok(Self {
            rules,
            explicit_level1_regex,
        })
    }

    pub fn match_leading_marker(&self, line: &str) -> LeadingMarker {
        for rule in &self.rules {
            let Some(captures) = rule.regex.captures(line) else {
                continue;
            };
            let (Some(whole), Some(marker)) = (captures.get(0), captures.name("marker")) else {
                continue;
            };
            if !(rule.accepts)(marker.as_str(), &line[marker.end()..]) {
                continue;
            }

            return LeadingMarker {
                kind: rule.kind,
                label: marker.as_str().to_string(),
                prefix_len: whole.end(),
            };
        }

        LeadingMarker::none()
    }

    pub fn starts_with_ordinal(&self, line: &str) -> bool {
        self.match_leading_marker(line).is_ordinal()
    }

    pub fn starts_with_year(&self, line: &str) -> bool {
        self.match_leading_marker(line).kind == MarkerKind::Year
    }

    pub fn strip_leading_marker(&self, line: &str) -> String {
        let marker = self.match_leading_marker(line);
        if marker.is_ordinal() {
            debug!(kind = marker.kind.as_str(), label = %marker.label, "stripped leading marker");
            remove_all_internal_whitespace(&line[marker.prefix_len..])
        } else {
            remove_all_internal_whitespace(line)
        }
    }

    pub fn is_explicit_level1(&self, compact_line: &str) -> bool {
        self.explicit_level1_regex.is_match(compact_line)
    }

    pub fn is_explicit_level2(&self, compact_line: &str) -> bool {
        compact_line.chars().next().map(is_circled).unwrap_or(false)
    }
}

pub fn is_circled(ch: char) -> bool {
    matches!(ch, '①'..='⑳' | '⓫'..='⓴')
}

pub fn circled_numeral(value: usize) -> String {
    if (1..=20).contains(&value) {
        if let Some(ch) = char::from_u32(0x2460 + value as u32 - 1) {
            return ch.to_string();
        }
    }
    format!("[{value}]")
}

fn accept_any(_marker: &str, _rest: &str) -> bool {
    true
}

fn accept_after_number(_marker: &str, rest: &str) -> bool {
    // `25年`, `3.5亿`, `2024-2025`, `9:30` are quantities, not list markers.
    !rest.chars().next().is_some_and(|ch| {
        ch.is_ascii_digit()
            || matches!(
                ch,
                '年' | '月' | '日' | '号' | '-' | '－' | ':' | '：' | '.' | '．' | '%' | '％'
            )
    })
}

fn accept_after_letter(marker: &str, rest: &str) -> bool {
    // A bare letter only counts when whitespace follows it: `Alpha`, `A轮`.
    if marker.chars().count() > 1 {
        return true;
    }
    rest.chars().next().is_none_or(is_extended_whitespace)
}

fn accept_after_article(_marker: &str, rest: &str) -> bool {
    // `第2批` is a batch, not an article.
    !rest
        .chars()
        .next()
        .is_some_and(|ch| matches!(ch, '批' | '届' | '季' | '期' | '次' | '名' | '章' | '年'))
}

pub fn ends_with_cjk_colon(text: &str) -> bool {
    text.trim_end_matches(is_extended_whitespace).ends_with('：')
}
