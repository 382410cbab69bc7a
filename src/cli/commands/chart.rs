use crate::chart::html::write_chart;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::summarize;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Chart { out } = cmd {
        let summary = summarize(Path::new(&cfg.csv_file))?;

        if summary.is_empty() {
            warning("No categorized events with a numeric duration, nothing to chart.");
            return Ok(());
        }

        let chart_file = out.as_deref().unwrap_or(&cfg.chart_file);
        write_chart(Path::new(chart_file), &summary)?;
        success(format!("Chart saved to {}", chart_file));
    }
    Ok(())
}
