use serde::Serialize;

use crate::text::title::{CycleOutcome, TitleFields};
use crate::text::{FlaggedKeyword, NumberedItem};

#[derive(Debug, Clone, Serialize)]
pub struct TransformReport {
    pub report_version: u32,
    pub pipeline: String,
    pub generated_at: String,
    pub input_line_count: usize,
    pub output_line_count: usize,
    pub output: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<NumberedItem>,
    pub flagged_keywords: Vec<FlaggedKeyword>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TitleCycleStep {
    pub press: usize,
    pub verb: String,
    pub title: String,
    pub outcome: CycleOutcome,
    pub advisory: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TitleReport {
    pub report_version: u32,
    pub generated_at: String,
    pub input: String,
    pub default_year: String,
    pub fields: TitleFields,
    pub title: String,
    pub cycles: Vec<TitleCycleStep>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<String>,
    pub flagged_keywords: Vec<FlaggedKeyword>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlagReport {
    pub report_version: u32,
    pub generated_at: String,
    pub flagged_count: usize,
    pub flagged_keywords: Vec<FlaggedKeyword>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuickCopyReport {
    pub report_version: u32,
    pub phrases: Vec<String>,
}
