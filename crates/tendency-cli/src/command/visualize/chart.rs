use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Style},
    symbols::Marker,
    widgets::{Axis, Block, Chart, Dataset, GraphType, LegendPosition, Widget},
};
use tendency_analysis::engine::{ColumnStatistics, Statistic};
use tendency_stats::histogram::Histogram;

/// Histogram of one column with a vertical marker per statistic.
pub(super) struct DistributionChart<'a> {
    pub name: &'a str,
    pub histogram: &'a Histogram,
    pub stats: &'a ColumnStatistics,
    pub selected: bool,
}

pub(super) fn marker_color(statistic: Statistic) -> Color {
    match statistic {
        Statistic::Mean => Color::Red,
        Statistic::Median => Color::Green,
        Statistic::Mode => Color::Blue,
    }
}

/// One point per bin: `(bin center, count)`.
#[expect(clippy::cast_precision_loss)]
fn bar_points(histogram: &Histogram) -> Vec<(f64, f64)> {
    histogram
        .bins
        .iter()
        .map(|bin| (bin.center(), bin.count as f64))
        .collect()
}

/// Top of the Y axis, leaving headroom above the tallest bar.
#[expect(clippy::cast_precision_loss)]
fn y_upper_bound(histogram: &Histogram) -> f64 {
    (histogram.max_count().max(1) as f64 * 1.1).ceil()
}

/// X range covering every bin and every marker.
fn x_bounds(histogram: &Histogram, stats: &ColumnStatistics) -> [f64; 2] {
    let bins_start = histogram.bins.first().map_or(f64::NAN, |bin| bin.range.start);
    let bins_end = histogram.bins.last().map_or(f64::NAN, |bin| bin.range.end);
    // f64::min/max ignore NaN operands
    let (lo, hi) = stats
        .iter()
        .fold((bins_start, bins_end), |(lo, hi), (_, v)| {
            (lo.min(v), hi.max(v))
        });
    if !(lo.is_finite() && hi.is_finite()) {
        return [0.0, 1.0];
    }
    if hi - lo <= 0.0 {
        return [lo - 0.5, hi + 0.5];
    }
    [lo, hi]
}

impl Widget for DistributionChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let bars = bar_points(self.histogram);
        let y_max = y_upper_bound(self.histogram);
        let markers =
            Statistic::ALL.map(|s| (s, [(self.stats.get(s), 0.0), (self.stats.get(s), y_max)]));

        let mut datasets = vec![
            Dataset::default()
                .marker(Marker::HalfBlock)
                .graph_type(GraphType::Bar)
                .style(Style::default().fg(Color::Gray))
                .data(&bars),
        ];
        datasets.extend(markers.iter().map(|(statistic, line)| {
            Dataset::default()
                .name(statistic.label())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(marker_color(*statistic)))
                .data(line)
        }));

        let x_bounds = x_bounds(self.histogram, self.stats);
        let x_axis = Axis::default().bounds(x_bounds).labels([
            format!("{:.2}", x_bounds[0]),
            format!("{:.2}", f64::midpoint(x_bounds[0], x_bounds[1])),
            format!("{:.2}", x_bounds[1]),
        ]);
        let y_axis = Axis::default()
            .bounds([0.0, y_max])
            .labels(["0".to_owned(), format!("{y_max:.0}")]);

        let border_style = if self.selected {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let chart = Chart::new(datasets)
            .block(
                Block::bordered()
                    .border_style(border_style)
                    .title(format!("Distribuzione di {}", self.name)),
            )
            .x_axis(x_axis)
            .y_axis(y_axis)
            .legend_position(Some(LegendPosition::TopRight))
            .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

        Widget::render(chart, area, buf);
    }
}
