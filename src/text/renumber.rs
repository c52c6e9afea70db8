use serde::Serialize;

use super::marker::{MarkerRecognizer, circled_numeral, ends_with_cjk_colon};
use super::punctuation::PunctuationConverter;
use super::whitespace::{is_blank, remove_all_internal_whitespace};

const TERMINAL_PUNCTUATION: [char; 9] = ['.', ',', ';', '!', '?', '。', '？', '！', '；'];

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NumberingScheme {
    Level1Flat,
    Level2Flat,
    TwoLevelNested,
}

impl NumberingScheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Level1Flat => "level1",
            Self::Level2Flat => "level2",
            Self::TwoLevelNested => "two_level",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailingPunctuation {
    Period,
    ColonPreserved,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberedItem {
    pub sequence_index: usize,
    pub rendered_marker: String,
    pub content: String,
    pub trailing_punctuation: TrailingPunctuation,
}

impl NumberedItem {
    pub fn render(&self) -> String {
        format!("{}{}", self.rendered_marker, self.content)
    }
}

#[derive(Debug, Clone)]
enum RenderedLine {
    Heading(String),
    Item(NumberedItem),
}

impl RenderedLine {
    fn render(&self) -> String {
        match self {
            Self::Heading(text) => text.clone(),
            Self::Item(item) => item.render(),
        }
    }
}

pub fn standardize_end_punctuation(content: &str) -> String {
    if content.ends_with('：') {
        return content.to_string();
    }
    let mut standardized = content
        .trim_end_matches(|ch: char| TERMINAL_PUNCTUATION.contains(&ch))
        .to_string();
    standardized.push('。');
    standardized
}

fn trailing_kind(content: &str) -> TrailingPunctuation {
    if content.ends_with('：') {
        TrailingPunctuation::ColonPreserved
    } else {
        TrailingPunctuation::Period
    }
}

pub fn renumber_list(text: &str, scheme: NumberingScheme, markers: &MarkerRecognizer) -> String {
    build_rendered_lines(text, scheme, markers)
        .iter()
        .map(RenderedLine::render)
        .collect::<Vec<String>>()
        .join("\n")
}

pub fn numbered_items(
    text: &str,
    scheme: NumberingScheme,
    markers: &MarkerRecognizer,
) -> Vec<NumberedItem> {
    build_rendered_lines(text, scheme, markers)
        .into_iter()
        .filter_map(|line| match line {
            RenderedLine::Item(item) => Some(item),
            RenderedLine::Heading(_) => None,
        })
        .collect()
}

fn build_rendered_lines(
    text: &str,
    scheme: NumberingScheme,
    markers: &MarkerRecognizer,
) -> Vec<RenderedLine> {
    let mut rendered = Vec::<RenderedLine>::new();
    let mut level1 = 1usize;
    let mut level2 = 1usize;
    let mut first_line = true;

    for raw_line in text.lines() {
        let compact = remove_all_internal_whitespace(raw_line);
        if compact.is_empty() {
            continue;
        }

        let content = standardize_end_punctuation(&markers.strip_leading_marker(raw_line));
        let trailing_punctuation = trailing_kind(&content);
        let is_first = std::mem::replace(&mut first_line, false);

        match scheme {
            NumberingScheme::Level1Flat | NumberingScheme::Level2Flat => {
                if is_first && ends_with_cjk_colon(&compact) && !markers.starts_with_ordinal(raw_line)
                {
                    rendered.push(RenderedLine::Heading(compact));
                    continue;
                }

                let rendered_marker = if scheme == NumberingScheme::Level1Flat {
                    format!("（{level1}）")
                } else {
                    circled_numeral(level1)
                };
                rendered.push(RenderedLine::Item(NumberedItem {
                    sequence_index: level1,
                    rendered_marker,
                    content,
                    trailing_punctuation,
                }));
                level1 += 1;
            }
            NumberingScheme::TwoLevelNested => {
                let explicit_level1 = markers.is_explicit_level1(&compact);
                let explicit_level2 = markers.is_explicit_level2(&compact);
                let ends_with_colon = ends_with_cjk_colon(&compact);
                let is_level1 = explicit_level1
                    || (ends_with_colon && !explicit_level2)
                    || (!explicit_level1 && !explicit_level2 && !ends_with_colon);

                if is_level1 {
                    rendered.push(RenderedLine::Item(NumberedItem {
                        sequence_index: level1,
                        rendered_marker: format!("（{level1}）"),
                        content,
                        trailing_punctuation,
                    }));
                    level1 += 1;
                    level2 = 1;
                } else {
                    rendered.push(RenderedLine::Item(NumberedItem {
                        sequence_index: level2,
                        rendered_marker: circled_numeral(level2),
                        content,
                        trailing_punctuation,
                    }));
                    level2 += 1;
                }
            }
        }
    }

    rendered
}

pub fn strip_markers(
    text: &str,
    markers: &MarkerRecognizer,
    punctuation: &PunctuationConverter,
) -> String {
    text.lines()
        .filter(|line| !is_blank(line))
        .map(|line| {
            let content = markers.strip_leading_marker(line);
            standardize_end_punctuation(&punctuation.latin_to_cjk(&content))
        })
        .collect::<Vec<String>>()
        .join("\n\n")
}

pub fn append_line_break_markers(text: &str) -> String {
    text.lines()
        .map(remove_all_internal_whitespace)
        .filter(|line| !line.is_empty())
        .map(|line| format!("{line}<br>"))
        .collect::<Vec<String>>()
        .join("\n")
}
