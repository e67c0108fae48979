pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{ColorKey, Theme};
pub use error::CoreError;
pub use structs::{
    parse_amount, parse_years, AllocationSlice, ArcDescriptor, SipInput, SipResult,
};
