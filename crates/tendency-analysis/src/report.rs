//! Textual statistics report
//!
//! [`ReportFormatter::render`] produces the following layout, with one block
//! per column in result order:
//!
//! ```text
//! REPORT ANALISI STATISTICA
//! ==================================================
//!
//! Variabile: <column>
//!   Media:   <mean>
//!   Mediana: <median>
//!   Moda:    <mode>
//! --------------------------------------------------
//! ```
//!
//! Values are printed with two decimals. Results holding a NaN or infinite
//! statistic are rejected instead of being formatted.

use std::fmt;

use crate::engine::{ColumnStatistics, Statistic, StatisticsResult};

/// Title line of the report.
pub const REPORT_TITLE: &str = "REPORT ANALISI STATISTICA";

const RULE_WIDTH: usize = 50;

/// Error raised when a statistic cannot be printed as a number.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
#[display("Non-finite {statistic} ({value}) in column '{column}'")]
pub struct NonFiniteValueError {
    pub column: String,
    pub statistic: Statistic,
    pub value: f64,
}

/// Returns an error for the first NaN or infinite statistic in `result`.
///
/// Columns are checked in result order, and within a column in mean, median,
/// mode order.
pub fn ensure_finite(result: &StatisticsResult) -> Result<(), NonFiniteValueError> {
    for (column, stats) in result.iter() {
        if let Some((statistic, value)) = stats.iter().find(|(_, v)| !v.is_finite()) {
            return Err(NonFiniteValueError {
                column: column.to_owned(),
                statistic,
                value,
            });
        }
    }
    Ok(())
}

/// Renders a [`StatisticsResult`] as a plain-text report.
///
/// # Examples
///
/// ```
/// use tendency_analysis::{
///     engine::{ColumnStatistics, StatisticsResult},
///     report::ReportFormatter,
/// };
///
/// let result = [("A", ColumnStatistics::new(2.0, 2.0, 1.0))]
///     .into_iter()
///     .collect::<StatisticsResult>();
/// let report = ReportFormatter::new().render(&result).unwrap();
/// assert!(report.contains("Variabile: A\n  Media:   2.00\n"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportFormatter;

impl ReportFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Renders the whole report, or nothing if any statistic is non-finite.
    pub fn render(&self, result: &StatisticsResult) -> Result<String, NonFiniteValueError> {
        ensure_finite(result)?;
        Ok(Report(result).to_string())
    }
}

struct Report<'a>(&'a StatisticsResult);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{REPORT_TITLE}")?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(f)?;
        for (column, stats) in self.0.iter() {
            write_column(f, column, stats)?;
        }
        Ok(())
    }
}

fn write_column(f: &mut fmt::Formatter<'_>, column: &str, stats: &ColumnStatistics) -> fmt::Result {
    writeln!(f, "Variabile: {column}")?;
    writeln!(f, "  Media:   {:.2}", stats.mean())?;
    writeln!(f, "  Mediana: {:.2}", stats.median())?;
    writeln!(f, "  Moda:    {:.2}", stats.mode())?;
    writeln!(f, "{}", "-".repeat(RULE_WIDTH))
}
