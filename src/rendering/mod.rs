//! Output rendering - from computed structures to console or JSON output.
//!
//! The graph and ranking stages return plain data; these modules own every
//! display decision (colors, layout, serialization), so the outbound
//! contract of the core stays presentation-free.

mod colors;
mod report;

pub use colors::Colorizer;
pub use report::RunReport;
