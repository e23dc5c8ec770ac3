use std::path::{Path, PathBuf};

pub type DemoreelResult<T> = Result<T, DemoreelError>;

#[derive(thiserror::Error, Debug)]
pub enum DemoreelError {
    #[error("Missing: {}", path.display())]
    MissingFrame { path: PathBuf },

    #[error("validation error: {0}")]
    Validation(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DemoreelError {
    pub fn missing_frame(path: impl AsRef<Path>) -> Self {
        Self::MissingFrame {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    pub fn is_missing_frame(&self) -> bool {
        matches!(self, Self::MissingFrame { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_frame_displays_literal_path() {
        let err = DemoreelError::missing_frame("/tmp/frames/frame-7.png");
        assert_eq!(err.to_string(), "Missing: /tmp/frames/frame-7.png");
        assert!(err.is_missing_frame());
    }

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            DemoreelError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            DemoreelError::encode("x")
                .to_string()
                .contains("encode error:")
        );
        assert!(!DemoreelError::encode("x").is_missing_frame());
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = DemoreelError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
