use std::path::{Path, PathBuf};

use thiserror::Error;

/// IO 操作共通の結果型。
pub type IoResult<T> = Result<T, IoError>;

/// Core.IO 互換エラー。
#[derive(Debug, Clone, Error)]
#[error("{kind:?}: {message}")]
pub struct IoError {
    kind: IoErrorKind,
    message: String,
    path: Option<PathBuf>,
}

impl IoError {
    pub fn new(kind: IoErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            path: None,
        }
    }

    /// 対象パスをエラーへ付与する。
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn kind(&self) -> IoErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn from_std(error: std::io::Error) -> Self {
        IoError::new(IoErrorKind::from(error.kind()), error.to_string())
    }
}

/// 仕様に沿った IO エラー種別。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoErrorKind {
    NotFound,
    PermissionDenied,
    InvalidInput,
    UnexpectedEof,
    Interrupted,
    Other,
}

impl From<std::io::ErrorKind> for IoErrorKind {
    fn from(value: std::io::ErrorKind) -> Self {
        match value {
            std::io::ErrorKind::NotFound => Self::NotFound,
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            std::io::ErrorKind::InvalidInput | std::io::ErrorKind::InvalidData => {
                Self::InvalidInput
            }
            std::io::ErrorKind::UnexpectedEof => Self::UnexpectedEof,
            std::io::ErrorKind::Interrupted => Self::Interrupted,
            _ => Self::Other,
        }
    }
}
