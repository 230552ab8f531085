pub mod errors;
pub mod guard;
pub mod types;

pub use errors::{ConfigError, MidwayError};
pub use guard::AssertBehaviour;
pub use types::{BannerIndex, EntityId, PlayerId, RideId, ScreenCoords, ScreenRect, ScreenSize};

pub type Result<T> = std::result::Result<T, MidwayError>;
