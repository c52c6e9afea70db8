use anyhow::Result;
use tracing::info;

use crate::cli::QuickCopyArgs;
use crate::model::QuickCopyReport;
use crate::util::{write_json_pretty, write_output};

pub const QUICK_COPY_PHRASES: [&str; 13] = [
    "符合条件的申报主体认定为XXX。",
    "符合条件的专家纳入专家库。",
    "按有关规定给予补助。",
    "申报主体应为",
    "申报主体需符合以下条件：",
    "申报主体需符合以下条件之一：",
    "详见相关文件《》。",
    "详见相关文件《附件材料》。",
    "详见本通知附件。",
    "按要求提供。",
    "加盖公章。",
    "具体包含以下材料：",
    "〔2025〕",
];

pub fn run(args: QuickCopyArgs) -> Result<()> {
    if args.json {
        let report = QuickCopyReport {
            report_version: 1,
            phrases: QUICK_COPY_PHRASES.iter().map(|phrase| phrase.to_string()).collect(),
        };
        write_json_pretty(args.output.as_deref(), &report)?;
    } else {
        write_output(args.output.as_deref(), &QUICK_COPY_PHRASES.join("\n"))?;
    }

    info!(count = QUICK_COPY_PHRASES.len(), "quick-copy phrases written");
    Ok(())
}
