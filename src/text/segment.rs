use super::marker::MarkerRecognizer;
use super::whitespace::{collapse_internal_whitespace, is_blank, trim_extended};

const SENTENCE_END: [char; 4] = ['。', '？', '！', '；'];

pub fn segment_paragraphs(text: &str, markers: &MarkerRecognizer) -> String {
    let lines = text
        .lines()
        .filter(|line| !is_blank(line))
        .map(trim_extended)
        .collect::<Vec<&str>>();

    let paragraphs = if lines.iter().any(|line| markers.starts_with_ordinal(line)) {
        group_by_markers(&lines, markers)
    } else {
        split_sentences(&lines.join(""))
    };

    paragraphs
        .iter()
        .map(|paragraph| ensure_sentence_end(&collapse_internal_whitespace(paragraph)))
        .filter(|paragraph| !paragraph.is_empty())
        .collect::<Vec<String>>()
        .join("\n")
}

fn group_by_markers(lines: &[&str], markers: &MarkerRecognizer) -> Vec<String> {
    let mut paragraphs = Vec::<String>::new();

    for line in lines {
        match paragraphs.last_mut() {
            Some(current) if !markers.starts_with_ordinal(line) => current.push_str(line),
            _ => paragraphs.push((*line).to_string()),
        }
    }

    paragraphs
}

pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::<String>::new();
    let mut current = String::new();

    for ch in text.chars() {
        current.push(ch);
        if SENTENCE_END.contains(&ch) {
            let sentence = trim_extended(&current).to_string();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            current.clear();
        }
    }

    let tail = trim_extended(&current);
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }

    sentences
}

fn ensure_sentence_end(paragraph: &str) -> String {
    if paragraph.is_empty()
        || paragraph.ends_with(|ch: char| SENTENCE_END.contains(&ch) || ch == '：')
    {
        return paragraph.to_string();
    }
    format!("{paragraph}。")
}
