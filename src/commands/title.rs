use anyhow::{Result, bail};
use tracing::{debug, info, warn};

use crate::cli::TitleArgs;
use crate::commands::flags::report_flagged_keywords;
use crate::model::{TitleCycleStep, TitleReport};
use crate::text::{TextEngine, trim_extended};
use crate::text::title::TitleSession;
use crate::util::{current_year_string, now_utc_string, read_input, write_json_pretty, write_output};

pub fn run(args: TitleArgs) -> Result<()> {
    let default_year = match args.default_year.clone() {
        Some(year) => validate_year(year)?,
        None => current_year_string(),
    };

    let engine = TextEngine::new()?;
    let input = read_input(args.io.input.as_deref())?;

    let Some(raw_title) = first_title_line(&input) else {
        warn!("输入内容为空");
        return Ok(());
    };

    let report = build_report(&engine, raw_title, &default_year, args.cycle, args.all_verbs);
    report_flagged_keywords(&report.flagged_keywords);

    if args.io.json {
        write_json_pretty(args.io.output.as_deref(), &report)?;
    } else {
        let mut lines = vec![report.title.clone()];
        lines.extend(report.variants.iter().cloned());
        write_output(args.io.output.as_deref(), &lines.join("\n"))?;
    }

    info!(
        title = %report.title,
        cycles = report.cycles.len(),
        "标题生成成功"
    );

    Ok(())
}

pub(crate) fn build_report(
    engine: &TextEngine,
    raw_title: &str,
    default_year: &str,
    cycle: usize,
    all_verbs: bool,
) -> TitleReport {
    let fields = engine.titles.extract(raw_title);
    debug!(
        year = ?fields.year,
        raw_location = ?fields.raw_location,
        batch = ?fields.batch,
        core_text = %fields.core_text,
        initial_verb = %fields.initial_verb,
        "title fields extracted"
    );

    let mut session = TitleSession::start(&fields, default_year, engine.titles.verbs());
    let mut cycles = Vec::new();
    for press in 1..=cycle {
        let (next, outcome) = session.cycle_verb();
        session = next;
        info!(press, verb = session.current_verb(), "{}", outcome.advisory());
        cycles.push(TitleCycleStep {
            press,
            verb: session.current_verb().to_string(),
            title: session.title(),
            outcome,
            advisory: outcome.advisory().to_string(),
        });
    }

    let variants = if all_verbs && !fields.is_fixed() {
        engine
            .titles
            .verbs()
            .iter()
            .map(|verb| fields.render_with_verb(verb, default_year))
            .collect()
    } else {
        Vec::new()
    };

    TitleReport {
        report_version: 1,
        generated_at: now_utc_string(),
        input: raw_title.to_string(),
        default_year: default_year.to_string(),
        title: session.title(),
        fields,
        cycles,
        variants,
        flagged_keywords: engine.find_flagged_keywords(raw_title),
    }
}

pub(crate) fn first_title_line(input: &str) -> Option<&str> {
    input
        .lines()
        .map(trim_extended)
        .find(|line| !line.is_empty())
}

pub(crate) fn validate_year(year: String) -> Result<String> {
    let year = year.trim().to_string();
    if year.len() != 4 || !year.chars().all(|ch| ch.is_ascii_digit()) {
        bail!("default year must be four digits, got {year:?}");
    }
    Ok(year)
}
