//! Calculator input records, boundary clamping and scenario loading

mod data;
pub mod bounds;
pub mod loader;

pub use data::{Gender, TermInput, RopInput, PuaInput, EstateInput};
pub use bounds::{Clamp, Clamped, ClampWarning, FieldRange, InputBounds};
pub use loader::{load_requests, load_requests_from_reader, parse_requests};
