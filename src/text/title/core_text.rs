use std::cmp::Reverse;

use tracing::debug;

use super::TitleExtractor;
use super::location::{DIRECT_MUNICIPALITIES, is_plausible_place, short_location_name};
use super::verbs::{CyclableVerbs, RECOGNITION_KEYWORDS, REDUNDANT_PHRASES};
use crate::text::whitespace::{collapse_internal_whitespace, is_extended_whitespace, trim_extended};

const CONTENT_START_MARKERS: [&str; 10] = [
    "关于", "组织申报", "开展", "受理", "申报", "征集", "印发", "通知", "通告", "方案",
];

const ISSUER_SUFFIXES: [char; 7] = ['局', '厅', '委', '办', '府', '会', '心'];

/// Longest first.
const LEADING_FILLERS: [&str; 17] = [
    "关于组织申报",
    "关于开展",
    "关于受理",
    "关于申报",
    "组织申报",
    "组织开展",
    "受理",
    "开展",
    "申报",
    "征集",
    "印发",
    "通知",
    "通告",
    "方案",
    "关于",
    "做好",
    "组织",
];

/// Longest first.
const CLOSING_MARKERS: [&str; 11] = [
    "政策的通知",
    "工作的通知",
    "申报指南",
    "实施方案",
    "遴选工作",
    "申报工作",
    "申请指南",
    "的通知",
    "的通告",
    "的方案",
    "的公告",
];

const LEVEL_KEYWORDS: [&str; 3] = ["市级", "区级", "省级"];

const PROJECT_KEYWORD: &str = "项目";

impl TitleExtractor {
    pub(super) fn extract_core_text(
        &self,
        raw: &str,
        year: Option<&str>,
        location: Option<&str>,
        batch: Option<&str>,
    ) -> String {
        let working = self.working_text(raw);
        let mut core = truncate_at_closing_marker(&working);

        if let Some(year) = year {
            core = remove_year(&core, year);
        }
        core = remove_stray_year_remnants(&core);
        if let Some(location) = location {
            core = remove_location(&core, location);
        }
        if let Some(batch) = batch {
            core = self.remove_batch(&core, batch);
        }
        core = self.remove_empty_parens(&core);

        if !LEVEL_KEYWORDS.iter().any(|keyword| core.starts_with(*keyword)) {
            core = self.strip_leading_location(&core);
        }

        core = truncate_after_project(&core);
        core = remove_funding_vocabulary(&core, &self.verbs);
        core = self.remove_empty_parens(&core);

        collapse_internal_whitespace(&core)
    }

    fn working_text(&self, raw: &str) -> String {
        let quoted = self
            .book_title_regex
            .captures(raw)
            .and_then(|captures| captures.get(1))
            .map(|inner| inner.as_str());

        let located = match quoted {
            Some(inner) => trim_extended(inner),
            None => match content_start(raw) {
                Some(start) => trim_extended(&raw[start..]),
                None => trim_extended(raw),
            },
        };

        strip_leading_fillers(located)
    }

    fn remove_batch(&self, text: &str, batch: &str) -> String {
        let cleaned = self
            .batch_removal_regex
            .replace_all(text, |captures: &regex::Captures<'_>| {
                if &captures["batch"] == batch {
                    String::new()
                } else {
                    captures[0].to_string()
                }
            });
        trim_extended(&cleaned).to_string()
    }

    fn remove_empty_parens(&self, text: &str) -> String {
        trim_extended(&self.empty_parens_regex.replace_all(text, "")).to_string()
    }

    fn strip_leading_location(&self, text: &str) -> String {
        match self.leading_location_regex.find(text) {
            Some(found) if is_plausible_place(found.as_str()) => {
                debug!(location = found.as_str(), "stripped leading location");
                trim_extended(&text[found.end()..]).to_string()
            }
            _ => text.to_string(),
        }
    }
}

fn content_start(raw: &str) -> Option<usize> {
    CONTENT_START_MARKERS
        .iter()
        .flat_map(|marker| raw.match_indices(*marker).map(|(index, _)| index))
        .filter(|index| {
            let prefix = &raw[..*index];
            *index == 0
                || prefix.ends_with(is_extended_whitespace)
                || prefix
                    .trim_end_matches(is_extended_whitespace)
                    .ends_with(&ISSUER_SUFFIXES[..])
        })
        .min()
}

fn strip_leading_fillers(text: &str) -> String {
    let mut current = text;
    while let Some(filler) = LEADING_FILLERS
        .iter()
        .find(|filler| current.starts_with(**filler))
    {
        current = trim_extended(&current[filler.len()..]);
    }
    current.to_string()
}

fn truncate_at_closing_marker(text: &str) -> String {
    let earliest = CLOSING_MARKERS
        .iter()
        .filter_map(|marker| text.find(*marker).map(|index| (index, *marker)))
        .min_by_key(|(index, _)| *index);

    match earliest {
        Some((index, marker)) => {
            debug!(marker, "truncated title at closing marker");
            trim_extended(&text[..index]).to_string()
        }
        None => text.to_string(),
    }
}

fn remove_year(text: &str, year: &str) -> String {
    let cleaned = text
        .replace(&format!("{year}年度"), "")
        .replace(&format!("{year}年"), "")
        .replace(year, "");
    trim_extended(&cleaned).to_string()
}

fn remove_stray_year_remnants(text: &str) -> String {
    let cleaned = text.replace("年度", "");
    trim_extended(cleaned.trim_start_matches(&['年', '度'][..])).to_string()
}

fn remove_location(text: &str, location: &str) -> String {
    let mut forms = vec![location];
    for city in DIRECT_MUNICIPALITIES {
        if let Some(district) = location.strip_prefix(city) {
            if !district.is_empty() {
                forms.push(city);
                forms.push(district);
                forms.push(short_location_name(district));
            }
        }
    }
    forms.push(short_location_name(location));

    forms.retain(|form| form.chars().count() >= 2);
    forms.sort_by(|left, right| right.len().cmp(&left.len()).then(left.cmp(right)));
    forms.dedup();

    let cleaned = forms
        .iter()
        .fold(text.to_string(), |current, form| current.replace(*form, ""));
    trim_extended(&cleaned).to_string()
}

fn truncate_after_project(text: &str) -> String {
    match text.find(PROJECT_KEYWORD) {
        Some(index) => trim_extended(&text[..index + PROJECT_KEYWORD.len()]).to_string(),
        None => text.to_string(),
    }
}

fn remove_funding_vocabulary(text: &str, verbs: &CyclableVerbs) -> String {
    let mut words = Vec::<&str>::new();
    for word in verbs.iter().chain(REDUNDANT_PHRASES.iter().copied()) {
        if !words.contains(&word) {
            words.push(word);
        }
    }
    words.sort_by_key(|word| Reverse(word.chars().count()));
    words.retain(|word| !is_recognition_fragment(word, verbs));

    let mut current = text.to_string();
    loop {
        let mut removed_any = false;
        for word in &words {
            if current.contains(*word) {
                current = trim_extended(&current.replace(*word, "")).to_string();
                removed_any = true;
            }
        }
        if !removed_any {
            break;
        }
    }

    current
}

fn is_recognition_fragment(word: &str, verbs: &CyclableVerbs) -> bool {
    RECOGNITION_KEYWORDS.iter().any(|keyword| {
        *keyword == word
            || (keyword.contains(word)
                && keyword.chars().count() > word.chars().count()
                && !verbs.contains(word))
    })
}
