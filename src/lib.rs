mod adaptive_array;
mod element;
mod error;
mod policy;

pub use adaptive_array::{AdaptiveArray, Iter};
pub use element::{CloneOps, ElementOps, FnOps};
pub use error::{ArrayError, Result};
pub use policy::{ArrayConfig, GrowthPolicy};
