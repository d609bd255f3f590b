use credit_risk_engine::{ChartSpec, SeriesPoint};

/// Score covered by one text row.
const ROW_STEP: u32 = 10;
/// Characters between two consecutive points.
const COL_WIDTH: usize = 5;
const MARKER: char = 'o';
const TRACE: char = '.';

fn row_of(spec: &ChartSpec, score: f64) -> usize {
    let clamped = score.clamp(f64::from(spec.y_min), f64::from(spec.y_max));
    ((clamped - f64::from(spec.y_min)) / f64::from(ROW_STEP)).round() as usize
}

/// Plot area as text rows, top row first.
pub fn plot_area(spec: &ChartSpec, points: &[SeriesPoint]) -> Vec<String> {
    let rows = ((spec.y_max - spec.y_min) / ROW_STEP) as usize + 1;
    let width = points.len().saturating_sub(1) * COL_WIDTH + 1;
    let mut grid = vec![vec![' '; width]; rows];

    for (i, pair) in points.windows(2).enumerate() {
        let (a, b) = (f64::from(pair[0].risk_score), f64::from(pair[1].risk_score));
        let start = i * COL_WIDTH;
        for offset in 0..=COL_WIDTH {
            let t = offset as f64 / COL_WIDTH as f64;
            grid[row_of(spec, a + (b - a) * t)][start + offset] = TRACE;
        }
    }
    if spec.markers {
        for (i, point) in points.iter().enumerate() {
            grid[row_of(spec, f64::from(point.risk_score))][i * COL_WIDTH] = MARKER;
        }
    }

    grid.iter().rev().map(|row| row.iter().collect()).collect()
}

/// Full chart: title, y-axis title, plot with tick labels, x ticks and title.
pub fn line_chart(spec: &ChartSpec, points: &[SeriesPoint]) -> Vec<String> {
    let area = plot_area(spec, points);
    let top = spec.y_min + ROW_STEP * (area.len() as u32).saturating_sub(1);
    let mut lines = vec![spec.title.to_string(), format!("  {}", spec.y_label)];

    for (i, row) in area.iter().enumerate() {
        let tick = top - ROW_STEP * i as u32;
        lines.push(format!("{tick:>5} |{}", row.trim_end()));
    }

    let width = area.first().map_or(1, |r| r.chars().count());
    lines.push(format!("{:>5} +{}", "", "-".repeat(width)));

    let mut ticks = String::new();
    for (i, point) in points.iter().enumerate() {
        let col = i * COL_WIDTH;
        while ticks.len() < col {
            ticks.push(' ');
        }
        ticks.push_str(&point.days_overdue.to_string());
    }
    lines.push(format!("{:>5}  {ticks}", ""));
    lines.push(format!("{:>5}  {:^width$}", "", spec.x_label));
    lines
}
