use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;

use super::whitespace::trim_extended;

mod core_text;
mod location;
mod session;
mod verbs;

pub use location::{extract_raw_location, format_location};
pub use session::{CycleOutcome, TitleSession};
pub use verbs::{CyclableVerbs, DEFAULT_VERB};

pub const FIXED_PROGRAM_TITLE: &str = "市级引导区县科技发展专项资金项目";

const BATCH_BODY: &str = r"第[一二三四五六七八九十百零〇两\d]+(?:批|届|季度)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleFields {
    pub year: Option<String>,
    pub raw_location: Option<String>,
    pub formatted_location: String,
    pub batch: Option<String>,
    pub core_text: String,
    pub initial_verb: String,
}

impl TitleFields {
    pub fn is_fixed(&self) -> bool {
        self.initial_verb.is_empty()
    }

    pub fn suffix(&self, default_year: &str) -> String {
        let year = self.year.as_deref().unwrap_or(default_year);
        let mut location_and_batch = self.formatted_location.clone();
        if let Some(batch) = &self.batch {
            if !location_and_batch.is_empty() {
                location_and_batch.push('丨');
            }
            location_and_batch.push_str(batch);
        }
        format!("（{year}{location_and_batch}）")
    }

    pub fn render_with_verb(&self, verb: &str, default_year: &str) -> String {
        format!("{}{}{}", self.core_text, verb, self.suffix(default_year))
    }
}

pub struct TitleExtractor {
    year_range_regex: Regex,
    year_regex: Regex,
    batch_regex: Regex,
    batch_removal_regex: Regex,
    book_title_regex: Regex,
    empty_parens_regex: Regex,
    leading_location_regex: Regex,
    verbs: CyclableVerbs,
}

impl TitleExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            year_range_regex: Regex::new(r"(\d{4}-\d{4})年")
                .context("failed to compile year range regex")?,
            year_regex: Regex::new(r"(\d{4})年").context("failed to compile year regex")?,
            batch_regex: Regex::new(BATCH_BODY).context("failed to compile batch regex")?,
            batch_removal_regex: Regex::new(&format!(r"[\s(（]*(?P<batch>{BATCH_BODY})[\s)）]*"))
                .context("failed to compile batch removal regex")?,
            book_title_regex: Regex::new(r"《([^》]+)》")
                .context("failed to compile book title regex")?,
            empty_parens_regex: Regex::new(r"[(（]\s*[)）]")
                .context("failed to compile empty parentheses regex")?,
            leading_location_regex: Regex::new(
                r"^\p{Han}{1,8}?(?:高新技术产业开发区|经济技术开发区|开发区|科技园|市|省|区|县|镇)",
            )
            .context("failed to compile leading location regex")?,
            verbs: CyclableVerbs::new(),
        })
    }

    pub fn verbs(&self) -> &CyclableVerbs {
        &self.verbs
    }

    pub fn extract_year(&self, text: &str) -> Option<String> {
        self.year_range_regex
            .captures(text)
            .or_else(|| self.year_regex.captures(text))
            .and_then(|captures| captures.get(1))
            .map(|year| year.as_str().to_string())
    }

    pub fn extract_batch(&self, text: &str) -> Option<String> {
        self.batch_regex
            .find(text)
            .map(|batch| batch.as_str().to_string())
    }

    pub fn extract(&self, raw_title: &str) -> TitleFields {
        let raw = trim_extended(raw_title);
        let year = self.extract_year(raw);
        let raw_location = extract_raw_location(raw);
        let batch = self.extract_batch(raw);
        let formatted_location = format_location(raw_location.as_deref());

        let (core_text, initial_verb) = if raw.contains(FIXED_PROGRAM_TITLE) {
            (FIXED_PROGRAM_TITLE.to_string(), String::new())
        } else {
            let core_text = self.extract_core_text(
                raw,
                year.as_deref(),
                raw_location.as_deref(),
                batch.as_deref(),
            );
            let initial_verb = self.verbs.detect(raw).unwrap_or(DEFAULT_VERB).to_string();
            (core_text, initial_verb)
        };

        TitleFields {
            year,
            raw_location,
            formatted_location,
            batch,
            core_text,
            initial_verb,
        }
    }
}
