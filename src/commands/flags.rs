use anyhow::Result;
use tracing::{info, warn};

use crate::cli::IoArgs;
use crate::model::FlagReport;
use crate::text::{FlaggedKeyword, TextEngine, is_blank};
use crate::util::{now_utc_string, read_input, write_json_pretty, write_output};

pub fn run(args: IoArgs) -> Result<()> {
    let engine = TextEngine::new()?;
    let input = read_input(args.input.as_deref())?;

    if is_blank(&input) {
        warn!("输入内容为空");
        return Ok(());
    }

    let flagged_keywords = engine.find_flagged_keywords(&input);
    report_flagged_keywords(&flagged_keywords);

    if args.json {
        let report = FlagReport {
            report_version: 1,
            generated_at: now_utc_string(),
            flagged_count: flagged_keywords.len(),
            flagged_keywords,
        };
        write_json_pretty(args.output.as_deref(), &report)?;
    } else {
        write_output(
            args.output.as_deref(),
            &render_flagged_keywords(&flagged_keywords),
        )?;
    }

    Ok(())
}

pub(crate) fn report_flagged_keywords(flagged_keywords: &[FlaggedKeyword]) {
    if flagged_keywords.is_empty() {
        return;
    }

    for flagged in flagged_keywords {
        warn!(
            line = flagged.line_number,
            token = %flagged.token,
            "检测到需要注意的关键词"
        );
    }
    info!(count = flagged_keywords.len(), "请确认上述关键词后再复制");
}

pub(crate) fn render_flagged_keywords(flagged_keywords: &[FlaggedKeyword]) -> String {
    if flagged_keywords.is_empty() {
        return "未发现需要注意的关键词".to_string();
    }

    flagged_keywords
        .iter()
        .map(|flagged| format!("第{}行：{}", flagged.line_number, flagged.token))
        .collect::<Vec<_>>()
        .join("\n")
}
