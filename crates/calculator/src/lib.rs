//! # FundWise SIP Calculator
//!
//! This crate projects the outcome of a Systematic Investment Plan: a fixed
//! contribution paid at the start of every month, compounding at a nominal
//! annual rate.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** A pure logic crate. It depends only on `core-types` and
//!   knows nothing about forms, charts or currency formatting.
//! - **Stateless Calculation:** `SipEngine` takes a `SipInput` and returns a
//!   `SipResult` in full precision. Rounding is left to the presentation layer,
//!   so repeated calls are bit-identical.
//!
//! ## Public API
//!
//! - `SipEngine` / `compute_sip`: the annuity-due projection.
//! - `SipError`: explicit signal for non-finite inputs and overflow.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{compute_sip, SipEngine, MONTHS_PER_YEAR};
pub use error::SipError;
