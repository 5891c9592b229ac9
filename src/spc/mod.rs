//! Statistical process control for a time-ordered duration series.
//!
//! - [`individuals_chart`] — Individuals and moving-range (I-MR) limits
//!
//! Unlike the other analyses, the result depends on the order in which the
//! cycles were recorded.
//!
//! # References
//!
//! - Montgomery, D.C. (2019). *Introduction to Statistical Quality Control*, 8th ed.
//! - ASTM E2587 — Standard Practice for Use of Control Charts

mod chart;
mod individuals;

pub use chart::ControlLimits;
pub use individuals::{individuals_chart, IndividualsChart, D4_MR, E2};
