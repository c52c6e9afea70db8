use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Datelike, Local, SecondsFormat, Utc};
use serde::Serialize;

pub fn now_utc_string() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn current_year_string() -> String {
    Local::now().year().to_string()
}

pub fn ensure_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("failed to create directory: {}", path.display()))
}

pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read input file: {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read input from stdin")?;
            Ok(buffer)
        }
    }
}

pub fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
                ensure_directory(parent)?;
            }
            let mut file = File::create(path)
                .with_context(|| format!("failed to create output file: {}", path.display()))?;
            file.write_all(text.as_bytes())
                .with_context(|| format!("failed to write output file: {}", path.display()))?;
            file.write_all(b"\n")
                .with_context(|| format!("failed to finalize output file: {}", path.display()))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .context("failed to write to stdout")?;
            stdout.write_all(b"\n").context("failed to write to stdout")?;
        }
    }

    Ok(())
}

pub fn write_json_pretty<T: Serialize>(path: Option<&Path>, value: &T) -> Result<()> {
    let data = serde_json::to_string_pretty(value).context("failed to serialize json report")?;
    write_output(path, &data)
}
