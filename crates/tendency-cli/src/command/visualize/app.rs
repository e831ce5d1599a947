use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Text},
    widgets::{Block, Paragraph},
};
use tendency_analysis::{
    dataset::Dataset,
    engine::{ColumnStatistics, StatisticsResult},
};
use tendency_stats::histogram::Histogram;

use super::chart::{self, DistributionChart};

const GRID_COLUMNS: usize = 2;

#[derive(Debug)]
struct ColumnView<'a> {
    name: &'a str,
    stats: &'a ColumnStatistics,
    histogram: Histogram,
}

/// Terminal viewer showing one histogram per column.
#[derive(Debug)]
pub(super) struct DistributionViewer<'a> {
    columns: Vec<ColumnView<'a>>,
    selected: usize,
    zoomed: bool,
    should_exit: bool,
}

impl<'a> DistributionViewer<'a> {
    pub(super) fn new(
        dataset: &'a Dataset,
        result: &'a StatisticsResult,
        num_bins: usize,
    ) -> Self {
        let columns = result
            .iter()
            .filter_map(|(name, stats)| {
                let values = dataset.column(name)?;
                Some(ColumnView {
                    name,
                    stats,
                    histogram: Histogram::new(values.iter().copied(), num_bins),
                })
            })
            .collect();
        Self {
            columns,
            selected: 0,
            zoomed: false,
            should_exit: false,
        }
    }

    /// Runs the viewer until the user quits.
    pub(super) fn run(mut self) -> io::Result<()> {
        ratatui::run(|terminal| {
            while !self.should_exit {
                terminal.draw(|frame| self.draw(frame))?;
                self.handle_event(&event::read()?);
            }
            Ok(())
        })
    }

    fn handle_event(&mut self, event: &Event) {
        let Some(key) = event.as_key_event() else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }
        let len = self.columns.len();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_exit = true,
            KeyCode::Char('z') | KeyCode::Enter => self.zoomed = !self.zoomed,
            KeyCode::Left | KeyCode::Char('h') if len > 0 => {
                self.selected = self.selected.checked_sub(1).unwrap_or(len - 1);
            }
            KeyCode::Right | KeyCode::Char('l') if len > 0 => {
                self.selected = (self.selected + 1) % len;
            }
            KeyCode::Up | KeyCode::Char('k') if self.selected >= GRID_COLUMNS => {
                self.selected -= GRID_COLUMNS;
            }
            KeyCode::Down | KeyCode::Char('j') if self.selected + GRID_COLUMNS < len => {
                self.selected += GRID_COLUMNS;
            }
            _ => {}
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let [main_area, help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());

        if self.zoomed {
            self.draw_zoomed(frame, main_area);
        } else {
            self.draw_grid(frame, main_area);
        }

        let zoom_action = if self.zoomed { "Grid" } else { "Zoom" };
        let help_text = Text::from(format!(
            "←/→/↑/↓: Select | z/Enter: {zoom_action} | q/Esc: Quit"
        ))
        .style(Style::default().fg(Color::DarkGray))
        .centered();
        frame.render_widget(help_text, help_area);
    }

    fn draw_grid(&self, frame: &mut Frame, area: Rect) {
        let num_rows = self.columns.len().div_ceil(GRID_COLUMNS);
        let rows = Layout::vertical(vec![Constraint::Fill(1); num_rows]).split(area);
        for (row_idx, row_area) in rows.iter().enumerate() {
            let cells = Layout::horizontal([Constraint::Fill(1); GRID_COLUMNS]).split(*row_area);
            for (col_idx, cell_area) in cells.iter().enumerate() {
                let idx = row_idx * GRID_COLUMNS + col_idx;
                if let Some(chart) = self.chart(idx) {
                    frame.render_widget(chart, *cell_area);
                }
            }
        }
    }

    fn draw_zoomed(&self, frame: &mut Frame, area: Rect) {
        let Some(column) = self.columns.get(self.selected) else {
            return;
        };
        let [stats_area, chart_area] =
            Layout::horizontal([Constraint::Length(24), Constraint::Fill(1)]).areas(area);

        let mut lines = column
            .stats
            .iter()
            .map(|(statistic, value)| {
                Line::styled(
                    format!("  {:<8} {value:10.2}", format!("{}:", statistic.label())),
                    Style::default().fg(chart::marker_color(statistic)),
                )
            })
            .collect::<Vec<_>>();
        lines.push(Line::raw(format!(
            "  {:<8} {:10}",
            "Valori:",
            column.histogram.total_count()
        )));
        let paragraph = Paragraph::new(lines).block(Block::bordered().title(column.name));

        frame.render_widget(paragraph, stats_area);
        if let Some(chart) = self.chart(self.selected) {
            frame.render_widget(chart, chart_area);
        }
    }

    fn chart(&self, idx: usize) -> Option<DistributionChart<'_>> {
        let column = self.columns.get(idx)?;
        Some(DistributionChart {
            name: column.name,
            histogram: &column.histogram,
            stats: column.stats,
            selected: idx == self.selected,
        })
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn fixture() -> (Dataset, StatisticsResult) {
        let dataset = Dataset::from_columns([
            ("A", vec![1.0, 2.0, 3.0]),
            ("B", vec![4.0, 4.0, 5.0]),
            ("C", vec![0.5]),
        ])
        .unwrap();
        let result = tendency_analysis::engine::StatisticsEngine::new()
            .compute(&dataset)
            .unwrap();
        (dataset, result)
    }

    #[test]
    fn test_one_view_per_column() {
        let (dataset, result) = fixture();
        let viewer = DistributionViewer::new(&dataset, &result, 20);
        let names = viewer.columns.iter().map(|c| c.name).collect::<Vec<_>>();
        assert_eq!(names, ["A", "B", "C"]);
        assert_eq!(viewer.columns[1].histogram.total_count(), 3);
    }

    #[test]
    fn test_selection_moves_through_grid() {
        let (dataset, result) = fixture();
        let mut viewer = DistributionViewer::new(&dataset, &result, 20);

        viewer.handle_event(&key(KeyCode::Left));
        assert_eq!(viewer.selected, 2);
        viewer.handle_event(&key(KeyCode::Right));
        assert_eq!(viewer.selected, 0);
        viewer.handle_event(&key(KeyCode::Down));
        assert_eq!(viewer.selected, 2);
        // No row below the last one
        viewer.handle_event(&key(KeyCode::Down));
        assert_eq!(viewer.selected, 2);
        viewer.handle_event(&key(KeyCode::Char('k')));
        assert_eq!(viewer.selected, 0);
    }

    #[test]
    fn test_zoom_and_quit() {
        let (dataset, result) = fixture();
        let mut viewer = DistributionViewer::new(&dataset, &result, 20);

        viewer.handle_event(&key(KeyCode::Char('z')));
        assert!(viewer.zoomed);
        viewer.handle_event(&key(KeyCode::Enter));
        assert!(!viewer.zoomed);
        assert!(!viewer.should_exit);
        viewer.handle_event(&key(KeyCode::Esc));
        assert!(viewer.should_exit);
    }

    #[test]
    fn test_draw_grid_and_zoomed() {
        let (dataset, result) = fixture();
        let mut viewer = DistributionViewer::new(&dataset, &result, 20);
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();

        terminal.draw(|frame| viewer.draw(frame)).unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        for name in ["A", "B", "C"] {
            assert!(text.contains(&format!("Distribuzione di {name}")));
        }

        viewer.handle_event(&key(KeyCode::Right));
        viewer.handle_event(&key(KeyCode::Char('z')));
        terminal.draw(|frame| viewer.draw(frame)).unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        assert!(text.contains("Distribuzione di B"));
        assert!(!text.contains("Distribuzione di A"));
        assert!(text.contains("Moda:"));
    }
}
