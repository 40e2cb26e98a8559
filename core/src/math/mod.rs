pub mod search;
pub mod viewport;

pub use search::{lower_bound, lower_bound_by};
pub use viewport::ViewportMapper;
