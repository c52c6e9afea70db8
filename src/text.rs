use anyhow::Result;

mod flags;
mod marker;
mod punctuation;
mod renumber;
mod segment;
mod smart;
#[cfg(test)]
mod tests;
pub mod title;
mod whitespace;

pub use flags::{FlaggedKeyword, KeywordScanner};
pub use marker::MarkerRecognizer;
pub use punctuation::{PunctuationConverter, convert_cjk_time_punctuation_to_latin};
pub use renumber::{NumberedItem, NumberingScheme, numbered_items};
pub use smart::SmartProcessor;
pub use whitespace::{is_blank, trim_extended};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Pipeline {
    Renumber(NumberingScheme),
    StripMarkers,
    AppendLineBreaks,
    Segment,
    Smart,
    Punctuation { time_to_latin: bool },
}

impl Pipeline {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Renumber(scheme) => scheme.as_str(),
            Self::StripMarkers => "delete",
            Self::AppendLineBreaks => "add_br",
            Self::Segment => "segment",
            Self::Smart => "smart",
            Self::Punctuation { .. } => "punct",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    EmptyInput,
    Rendered(String),
}

pub struct TextEngine {
    pub markers: MarkerRecognizer,
    pub punctuation: PunctuationConverter,
    pub smart: SmartProcessor,
    pub keywords: KeywordScanner,
    pub titles: title::TitleExtractor,
}

impl TextEngine {
    pub fn new() -> Result<Self> {
        Ok(Self {
            markers: MarkerRecognizer::new()?,
            punctuation: PunctuationConverter::new()?,
            smart: SmartProcessor::new()?,
            keywords: KeywordScanner::new()?,
            titles: title::TitleExtractor::new()?,
        })
    }

    pub fn run(&self, pipeline: Pipeline, text: &str) -> PipelineOutcome {
        if is_blank(text) {
            return PipelineOutcome::EmptyInput;
        }

        let rendered = match pipeline {
            Pipeline::Renumber(scheme) => renumber::renumber_list(text, scheme, &self.markers),
            Pipeline::StripMarkers => {
                renumber::strip_markers(text, &self.markers, &self.punctuation)
            }
            Pipeline::AppendLineBreaks => renumber::append_line_break_markers(text),
            Pipeline::Segment => segment::segment_paragraphs(text, &self.markers),
            Pipeline::Smart => self.smart.process(text, &self.markers, &self.punctuation),
            Pipeline::Punctuation { time_to_latin } => {
                if time_to_latin {
                    self.punctuation
                        .latin_to_cjk(&convert_cjk_time_punctuation_to_latin(text))
                } else {
                    self.punctuation.latin_to_cjk(text)
                }
            }
        };

        PipelineOutcome::Rendered(rendered)
    }

    pub fn find_flagged_keywords(&self, text: &str) -> Vec<FlaggedKeyword> {
        self.keywords.find_flagged_keywords(text)
    }
}
