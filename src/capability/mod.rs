//! Process capability of a timed element against specification limits.
//!
//! # Indices
//!
//! - **Cp** — Potential capability (spread vs tolerance)
//! - **Cpu**, **Cpl** — One-sided capability toward each limit
//! - **Cpk** — Actual capability, `min(Cpu, Cpl)`
//! - **Cpm** — Taguchi capability (deviation from target)
//!
//! A process is judged capable when `Cpk >= `[`CAPABLE_CPK`].
//!
//! # References
//!
//! - Montgomery (2019), *Introduction to Statistical Quality Control*, 8th ed.

mod indices;
mod limits;

pub use indices::{process_capability, CapabilityIndices, CapabilityVerdict, CAPABLE_CPK};
pub use limits::SpecLimits;
