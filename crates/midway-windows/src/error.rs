use crate::registry::WindowHandle;

/// Errors from the manager's checked accessors.
#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("window handle {0} has expired")]
    HandleExpired(WindowHandle),

    #[error("no window can be opened for {0}")]
    Unroutable(String),
}

pub type Result<T> = std::result::Result<T, WindowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = WindowError::HandleExpired(WindowHandle(7));
        assert_eq!(err.to_string(), "window handle #7 has expired");

        let err = WindowError::Unroutable("class Ride".into());
        assert_eq!(err.to_string(), "no window can be opened for class Ride");
    }
}
