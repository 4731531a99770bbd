// Copyright @yucwang 2026

use std::fmt;
use std::path::Path;

#[derive(Debug)]
pub enum BlockError {
    Decode { path: String, reason: String },
    Config(String),
    DegenerateTexture { width: usize, height: usize },
    Write { path: String, reason: String },
}

impl BlockError {
    pub fn decode<P: AsRef<Path>>(path: P, reason: impl fmt::Display) -> Self {
        BlockError::Decode {
            path: path.as_ref().display().to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn write<P: AsRef<Path>>(path: P, reason: impl fmt::Display) -> Self {
        BlockError::Write {
            path: path.as_ref().display().to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn config(reason: impl Into<String>) -> Self {
        BlockError::Config(reason.into())
    }
}

impl fmt::Display for BlockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockError::Decode { path, reason } => write!(f, "failed to decode texture {}: {}", path, reason),
            BlockError::Config(reason) => write!(f, "invalid configuration: {}", reason),
            BlockError::DegenerateTexture { width, height } => {
                write!(f, "degenerate texture: {}x{} has no texels", width, height)
            }
            BlockError::Write { path, reason } => write!(f, "failed to write {}: {}", path, reason),
        }
    }
}

impl std::error::Error for BlockError {}

pub type Result<T> = std::result::Result<T, BlockError>;

#[cfg(test)]
mod tests {
    use super::BlockError;

    #[test]
    fn test_messages_name_the_failure() {
        let err = BlockError::decode("missing.png", "No such file or directory");
        assert_eq!(err.to_string(), "failed to decode texture missing.png: No such file or directory");

        let err = BlockError::DegenerateTexture { width: 0, height: 4 };
        assert!(err.to_string().contains("0x4"));

        let err = BlockError::config("face resolution must be at least 2, got 1");
        assert!(err.to_string().starts_with("invalid configuration"));
    }
}
