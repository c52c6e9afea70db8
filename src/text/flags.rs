use std::collections::HashSet;

use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;

pub const WATCHED_KEYWORDS: [&str; 8] = [
    "我省", "我市", "我区", "我局", "我县", "本指南", "本通知", "本指引",
];

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FlaggedKeyword {
    pub line_number: usize,
    pub token: String,
}

pub struct KeywordScanner {
    attachment_regex: Regex,
}

impl KeywordScanner {
    pub fn new() -> Result<Self> {
        let attachment_regex = Regex::new(r"附件\s*[0-9０-９一二三四五六七八九十]+")
            .context("failed to compile attachment reference regex")?;
        Ok(Self { attachment_regex })
    }

    pub fn find_flagged_keywords(&self, text: &str) -> Vec<FlaggedKeyword> {
        let mut seen = HashSet::<FlaggedKeyword>::new();
        let mut flagged = Vec::<FlaggedKeyword>::new();

        for (index, line) in text.lines().enumerate() {
            let mut hits = Vec::<(usize, String)>::new();
            for keyword in WATCHED_KEYWORDS {
                hits.extend(
                    line.match_indices(keyword)
                        .map(|(offset, token)| (offset, token.to_string())),
                );
            }
            hits.extend(
                self.attachment_regex
                    .find_iter(line)
                    .map(|found| (found.start(), found.as_str().to_string())),
            );
            hits.sort_by_key(|(offset, _)| *offset);

            for (_, token) in hits {
                let entry = FlaggedKeyword {
                    line_number: index + 1,
                    token,
                };
                if seen.insert(entry.clone()) {
                    flagged.push(entry);
                }
            }
        }

        flagged
    }
}
