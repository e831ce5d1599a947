//! Per-column statistics over tabular numeric data
//!
//! This crate turns a column-oriented dataset into a mean/median/mode summary
//! per column and renders that summary as a plain-text report.
//!
//! # Overview
//!
//! The pipeline is compute-then-present:
//!
//! 1. **Build a Dataset** ([`dataset::Dataset`]): ordered, uniquely named numeric columns
//! 2. **Compute Statistics** ([`engine::StatisticsEngine`]): one
//!    [`engine::ColumnStatistics`] per column, collected in an immutable
//!    [`engine::StatisticsResult`]
//! 3. **Render a Report** ([`report::ReportFormatter`]): deterministic text, rejecting
//!    non-finite statistics
//!
//! Numeric primitives come from [`tendency_stats`]; this crate adds names,
//! ordering and error reporting on top of them.
//!
//! # Examples
//!
//! ```
//! use tendency_analysis::{
//!     dataset::Dataset, engine::StatisticsEngine, report::ReportFormatter,
//! };
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//!
//! let dataset = Dataset::from_columns([
//!     ("Altezza", vec![170.0, 182.0, 175.0, 175.0]),
//!     ("Peso", vec![65.0, 80.0, 72.0]),
//! ])?;
//!
//! let result = StatisticsEngine::new().compute(&dataset)?;
//! assert_eq!(result.get("Altezza").unwrap().mode(), 175.0);
//!
//! let report = ReportFormatter::new().render(&result)?;
//! assert!(report.starts_with("REPORT ANALISI STATISTICA\n"));
//! print!("{report}");
//! # Ok(())
//! # }
//! ```

pub mod dataset;
pub mod engine;
pub mod report;
