//! # u-timestudy
//!
//! Statistical analysis of element durations captured in a motion-and-time
//! study: descriptive summary, confidence interval on the mean, process
//! capability, individuals control limits, histogram and outlier flags.
//!
//! The engine is pure: it takes a sequence of durations plus a validated
//! configuration and returns a [`report::TimeStudyReport`]. It performs no
//! I/O, rendering or persistence.
//!
//! ## Modules
//!
//! - [`sample`] — Duration validation (drops NaN, infinite, non-positive entries)
//! - [`descriptive`] — Count, mean, median, standard deviation, range, CV
//! - [`confidence`] — Student-t interval on the mean (90/95/99%)
//! - [`capability`] — Cp, Cpk, Cpu, Cpl, Cpm against specification limits
//! - [`spc`] — Individuals / moving-range control limits
//! - [`distribution`] — Equal-width histogram
//! - [`outlier`] — IQR (Tukey) fence outlier flagging
//! - [`report`] — Configuration and the combined [`report::analyze`] entry point
//! - [`estimate`] — Available / insufficient tagged results
//! - [`error`] — Configuration errors
//!
//! ## Quick Start
//!
//! ```
//! use u_timestudy::capability::SpecLimits;
//! use u_timestudy::report::{analyze, AnalysisConfig};
//!
//! let config = AnalysisConfig::new(SpecLimits::new(10.0, 14.0).unwrap());
//! let cycles = [12.1, 11.8, 12.6, 13.0, 11.9, 12.2, 12.4, 12.0, 11.7, 12.3];
//! let report = analyze(cycles, &config);
//!
//! let summary = report.summary.available().unwrap();
//! assert_eq!(summary.count, 10);
//! assert!(report.confidence_interval.is_available());
//! assert!(report.control_limits.is_available());
//! ```
//!
//! ## Insufficient data vs. invalid configuration
//!
//! Thin data is never an error: each component independently returns
//! [`estimate::Estimate::Insufficient`]. Invalid configuration (unsupported
//! confidence level, `LSL >= USL`, zero buckets) is rejected up front with a
//! [`error::ConfigError`].

pub mod capability;
pub mod confidence;
pub mod descriptive;
pub mod distribution;
pub mod error;
pub mod estimate;
pub mod outlier;
pub mod report;
pub mod sample;
pub mod spc;
