//! # FundWise Presentation
//!
//! The thin layer between the pure core and whatever displays it. Nothing in
//! here computes financial values; it only turns `SipResult`s, laid-out arcs
//! and recommendation responses into display strings and SVG markup, and
//! tracks the small bits of page state (menus, the goal form).

pub mod currency;
pub mod navigation;
pub mod recommendation;
pub mod summary;
pub mod svg;

pub use currency::{abbreviate_inr, format_inr, group_indian, round_rupees, RUPEE};
pub use navigation::{ClickTarget, FormView, NavigationState, RecommendationForm};
pub use recommendation::{
    allocation_explanation, fund_sections, legend_entries, metric_label, recommendation_header,
    FundCard, FundSection, LegendEntry,
};
pub use summary::{period_label, SipSummary};
pub use svg::{escape_xml, render_donut_svg, segment_label};

/// The single message shown when the recommendation service cannot be reached
/// or answers with something unusable.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";
