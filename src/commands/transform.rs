use anyhow::Result;
use tracing::{info, warn};

use crate::cli::IoArgs;
use crate::commands::count_lines;
use crate::commands::flags::report_flagged_keywords;
use crate::model::TransformReport;
use crate::text::{NumberedItem, Pipeline, PipelineOutcome, TextEngine, numbered_items};
use crate::util::{now_utc_string, read_input, write_json_pretty, write_output};

pub fn run(pipeline: Pipeline, args: IoArgs) -> Result<()> {
    let engine = TextEngine::new()?;
    let input = read_input(args.input.as_deref())?;

    let Some(report) = build_report(&engine, pipeline, &input) else {
        warn!(pipeline = pipeline.as_str(), "输入内容为空");
        return Ok(());
    };

    report_flagged_keywords(&report.flagged_keywords);

    if args.json {
        write_json_pretty(args.output.as_deref(), &report)?;
    } else {
        write_output(args.output.as_deref(), &report.output)?;
    }

    info!(
        pipeline = pipeline.as_str(),
        input_lines = report.input_line_count,
        output_lines = report.output_line_count,
        "转换成功"
    );

    Ok(())
}

pub(crate) fn build_report(
    engine: &TextEngine,
    pipeline: Pipeline,
    input: &str,
) -> Option<TransformReport> {
    let output = match engine.run(pipeline, input) {
        PipelineOutcome::EmptyInput => return None,
        PipelineOutcome::Rendered(output) => output,
    };

    let items: Vec<NumberedItem> = match pipeline {
        Pipeline::Renumber(scheme) => numbered_items(input, scheme, &engine.markers),
        _ => Vec::new(),
    };

    Some(TransformReport {
        report_version: 1,
        pipeline: pipeline.as_str().to_string(),
        generated_at: now_utc_string(),
        input_line_count: count_lines(input),
        output_line_count: count_lines(&output),
        output,
        items,
        flagged_keywords: engine.find_flagged_keywords(input),
    })
}
