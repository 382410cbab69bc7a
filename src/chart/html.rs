use crate::errors::AppResult;
use crate::export::csv::ensure_parent;
use crate::models::category::CategorySummary;
use serde_json::json;
use std::fs;
use std::path::Path;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
const CHART_TITLE: &str = "Total Duration by Event Category";

/// Write a standalone HTML bar chart: one bar per category, summed hours
/// on the y-axis, labeled on the bar and on hover. Data goes through
/// serde_json so titles and values never get spliced into the markup.
pub fn write_chart(path: &Path, summary: &CategorySummary) -> AppResult<()> {
    let categories: Vec<u64> = summary.iter().map(|(c, _)| c).collect();
    let hours: Vec<f64> = summary.iter().map(|(_, h)| h).collect();

    let data = json!([{
        "type": "bar",
        "x": categories,
        "y": hours,
        "texttemplate": "Cat: %{x}<br>Hours: %{y:.2f}",
        "textposition": "outside",
        "hovertemplate": "Category: %{x}<br>Total Duration: %{y:.2f} hours",
    }]);

    let layout = json!({
        "title": { "text": CHART_TITLE, "x": 0.5 },
        "xaxis": { "title": { "text": "Event Category" }, "type": "category" },
        "yaxis": { "title": { "text": "Total Duration (hours)" } },
        "font": { "size": 14 },
        "bargap": 0.3,
    });

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{cdn}"></script>
</head>
<body>
<div id="chart"></div>
<script>
Plotly.newPlot("chart", {data}, {layout});
</script>
</body>
</html>
"#,
        title = CHART_TITLE,
        cdn = PLOTLY_CDN,
        data = data,
        layout = layout,
    );

    ensure_parent(path)?;
    fs::write(path, html)?;
    Ok(())
}
