use anyhow::{Context, Result};
use regex::Regex;

use super::marker::MarkerRecognizer;
use super::punctuation::{PunctuationConverter, convert_cjk_time_punctuation_to_latin};
use super::whitespace::{is_blank, remove_all_internal_whitespace};

const SEGMENT_END: [char; 5] = ['。', '？', '！', '；', '：'];

pub struct SmartProcessor {
    line_break_tag_regex: Regex,
}

impl SmartProcessor {
    pub fn new() -> Result<Self> {
        let line_break_tag_regex =
            Regex::new(r"(?i)<br\s*/?>").context("failed to compile <br> tag regex")?;
        Ok(Self {
            line_break_tag_regex,
        })
    }

    pub fn process(
        &self,
        text: &str,
        markers: &MarkerRecognizer,
        punctuation: &PunctuationConverter,
    ) -> String {
        let without_tags = self.line_break_tag_regex.replace_all(text, "");
        let converted =
            punctuation.latin_to_cjk(&convert_cjk_time_punctuation_to_latin(&without_tags));

        let lines = converted
            .lines()
            .filter(|line| !is_blank(line))
            .collect::<Vec<&str>>();
        let flattened = remove_all_internal_whitespace(&lines.concat());

        let has_prefixes = lines
            .iter()
            .any(|line| markers.starts_with_ordinal(line) || markers.starts_with_year(line));
        if !has_prefixes {
            return flattened;
        }

        split_before_items(&flattened, markers).join("\n")
    }
}

fn split_before_items(flattened: &str, markers: &MarkerRecognizer) -> Vec<String> {
    let mut segments = Vec::<String>::new();
    let mut segment_start = 0usize;

    for (index, ch) in flattened.char_indices() {
        if !SEGMENT_END.contains(&ch) {
            continue;
        }
        let boundary = index + ch.len_utf8();
        let rest = &flattened[boundary..];
        if rest.is_empty() {
            continue;
        }

        let starts_item = markers.starts_with_ordinal(rest)
            || (rest.starts_with("20") && markers.starts_with_year(rest));
        if starts_item {
            segments.push(flattened[segment_start..boundary].to_string());
            segment_start = boundary;
        }
    }

    if segment_start < flattened.len() {
        segments.push(flattened[segment_start..].to_string());
    }

    segments.retain(|segment| !segment.is_empty());
    segments
}
