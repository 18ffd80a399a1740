use std::fmt;

/// The offscreen drawing surface could not be acquired.
///
/// Never fatal: the backdrop simply stays invisible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceError {
    /// Width or height is zero.
    EmptyViewport { width: u32, height: u32 },
    /// The RGBA buffer would not fit in memory.
    TooLarge { width: u32, height: u32 },
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyViewport { width, height } => {
                write!(f, "cannot create a {width}x{height} surface: viewport is empty")
            }
            Self::TooLarge { width, height } => {
                write!(f, "cannot allocate a {width}x{height} RGBA surface")
            }
        }
    }
}

impl std::error::Error for SurfaceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_dimensions() {
        let err = SurfaceError::EmptyViewport { width: 0, height: 480 };
        assert!(err.to_string().contains("0x480"));
    }
}
