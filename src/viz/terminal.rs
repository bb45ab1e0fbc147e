use crate::domain::model::{ChartKind, ChartSpec};
use crate::domain::ports::ChartBackend;
use crate::utils::error::Result;

const BAR_WIDTH: usize = 40;

/// Chart backend that draws into stdout. Bars are `#` runs scaled to
/// the largest value; pies become a percentage table.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalCharts;

impl TerminalCharts {
    pub fn new() -> Self {
        Self
    }
}

impl ChartBackend for TerminalCharts {
    fn render(&self, chart: &ChartSpec) -> Result<()> {
        match chart.kind {
            ChartKind::Bar => render_bar(chart),
            ChartKind::Pie => render_pie(chart),
        }
        Ok(())
    }
}

fn print_title(chart: &ChartSpec) {
    println!();
    println!("{}", chart.title);
    println!("{}", "=".repeat(chart.title.chars().count()));
    if let (Some(x_label), Some(y_label)) = (&chart.x_label, &chart.y_label) {
        println!("{} by {}", y_label, x_label);
    }
}

fn label_width(chart: &ChartSpec) -> usize {
    chart
        .series
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0)
}

fn render_bar(chart: &ChartSpec) {
    print_title(chart);

    let max = chart
        .series
        .iter()
        .map(|(_, value)| *value)
        .max()
        .unwrap_or(0)
        .max(1);
    let width = label_width(chart);

    for (label, value) in &chart.series {
        let bar_len = ((*value as f64 / max as f64) * BAR_WIDTH as f64).round() as usize;
        println!(
            "{:>width$} | {} {}",
            label,
            "#".repeat(bar_len),
            value,
            width = width
        );
    }
}

fn render_pie(chart: &ChartSpec) {
    print_title(chart);

    let total: u64 = chart.series.iter().map(|(_, value)| *value).sum();
    let width = label_width(chart);

    for (label, value) in &chart.series {
        let percent = if total > 0 {
            *value as f64 * 100.0 / total as f64
        } else {
            0.0
        };
        println!(
            "{:>width$} | {:>5.1}% ({})",
            label,
            percent,
            value,
            width = width
        );
    }
}
