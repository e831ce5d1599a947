//! Numeric primitives for the Tendency project.
//!
//! This crate works on plain slices of `f64` values and knows nothing about
//! columns or datasets:
//!
//! - **Central tendency**: mean, median and mode, with a deterministic
//!   smallest-value-wins tie-break for the mode
//! - **Histogram generation**: equal-width frequency distributions
//!
//! # Modules
//!
//! - [`descriptive`]: Mean, median and mode
//! - [`histogram`]: Histogram construction for visualizing data distributions
//!
//! # Examples
//!
//! ## Computing central tendency
//!
//! ```
//! use tendency_stats::descriptive::CentralTendency;
//!
//! let values = [1.0, 2.0, 3.0];
//! let stats = CentralTendency::new(values).unwrap();
//! assert_eq!(stats.mean, 2.0);
//! assert_eq!(stats.median, 2.0);
//! // Every value occurs once, so the smallest one is the mode
//! assert_eq!(stats.mode, 1.0);
//! ```
//!
//! ## Creating a histogram
//!
//! ```
//! use tendency_stats::histogram::Histogram;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! let histogram = Histogram::new(values, 5);
//! assert_eq!(histogram.bins.len(), 5);
//! assert_eq!(histogram.total_count(), 10);
//! ```

pub mod descriptive;
pub mod histogram;
