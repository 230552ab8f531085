mod core;
mod ids;

pub use self::core::*;
pub use ids::*;
