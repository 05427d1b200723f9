//! Terminal line chart.
//!
//! Draws projected points on a character grid with the mood labels as the
//! y axis. Rank 5 sits on the top row and rank 1 on the bottom row.

use super::ChartPoint;
use crate::mood::Mood;

const MARKER: char = '●';
const TRACE: char = '·';
const MIN_WIDTH: usize = 2;
const MIN_HEIGHT: usize = 5;

/// Renders `points` into a plot area of `width` columns by `height` rows.
///
/// Sizes below 2 columns or 5 rows are raised to those minimums so each rank
/// keeps its own row.
pub fn render(points: &[ChartPoint], width: usize, height: usize) -> String {
    let width = width.max(MIN_WIDTH);
    let height = height.max(MIN_HEIGHT);
    let mut grid = vec![vec![' '; width]; height];

    let cells: Vec<(usize, usize)> = points
        .iter()
        .map(|p| (column_for(p.x, width), row_for(p.y, height)))
        .collect();

    for pair in cells.windows(2) {
        let ((c0, r0), (c1, r1)) = (pair[0], pair[1]);
        if c1 <= c0 {
            continue;
        }
        let span = (c1 - c0) as f64;
        for col in c0..=c1 {
            let t = (col - c0) as f64 / span;
            let row = (r0 as f64 + (r1 as f64 - r0 as f64) * t).round() as usize;
            if grid[row][col] == ' ' {
                grid[row][col] = TRACE;
            }
        }
    }

    for &(col, row) in &cells {
        grid[row][col] = MARKER;
    }

    let gutter = Mood::ALL
        .iter()
        .map(|m| m.label().chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (row_index, row) in grid.iter().enumerate() {
        let label = Mood::ALL
            .iter()
            .find(|m| row_for(m.rank(), height) == row_index)
            .map(|m| m.label())
            .unwrap_or("");
        let line: String = row.iter().collect();
        out.push_str(&format!("{:>gutter$} │{}\n", label, line.trim_end()));
    }
    out.push_str(&format!("{:>gutter$} └{}\n", "", "─".repeat(width)));
    out
}

fn column_for(x: f64, width: usize) -> usize {
    let col = (x.clamp(0.0, 1.0) * (width - 1) as f64).round() as usize;
    col.min(width - 1)
}

fn row_for(rank: u8, height: usize) -> usize {
    let rank = rank.clamp(Mood::MIN_RANK, Mood::MAX_RANK);
    let span = (Mood::MAX_RANK - Mood::MIN_RANK) as f64;
    let from_top = (Mood::MAX_RANK - rank) as f64 / span;
    (from_top * (height - 1) as f64).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plot_rows(rendered: &str) -> Vec<String> {
        rendered
            .lines()
            .map(|line| line.split('│').nth(1).unwrap_or("").to_string())
            .collect()
    }

    #[test]
    fn test_rising_line() {
        let points = vec![ChartPoint { x: 0.0, y: 1 }, ChartPoint { x: 1.0, y: 5 }];
        let rendered = render(&points, 5, 5);
        let rows = plot_rows(&rendered);

        assert_eq!(rows[0], "    ●");
        assert_eq!(rows[1], "   ·");
        assert_eq!(rows[2], "  ·");
        assert_eq!(rows[3], " ·");
        assert_eq!(rows[4], "●");
    }

    #[test]
    fn test_axis_labels() {
        let points = vec![ChartPoint { x: 0.0, y: 3 }, ChartPoint { x: 1.0, y: 3 }];
        let rendered = render(&points, 10, 5);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("Très bien │"));
        assert!(lines[2].trim_start().starts_with("Moyen │●"));
        assert!(lines[4].trim_start().starts_with("Stressé │"));
        assert!(lines[5].contains('└'));
    }

    #[test]
    fn test_taller_chart_leaves_unlabelled_rows() {
        let points = vec![ChartPoint { x: 0.0, y: 5 }, ChartPoint { x: 1.0, y: 5 }];
        let rendered = render(&points, 4, 9);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 10);
        assert!(lines[0].starts_with("Très bien │●"));
        assert!(lines[1].trim_start().starts_with('│'));
        assert!(lines[2].trim_start().starts_with("Bien │"));
    }

    #[test]
    fn test_sizes_are_clamped() {
        let points = vec![ChartPoint { x: 0.0, y: 2 }, ChartPoint { x: 1.0, y: 4 }];
        let rendered = render(&points, 0, 0);
        assert_eq!(rendered.lines().count(), MIN_HEIGHT + 1);
    }
}
