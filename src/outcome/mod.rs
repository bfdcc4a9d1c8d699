//! Core.Outcome の実装。
//! 失敗し得る操作の結果を `Success`/`Failure` の二変種で表現する。

use std::error::Error as StdError;
use std::fmt;

/// 失敗し得る操作の結果。構築後は不変で、必ずどちらか一方の変種を取る。
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    Success(T),
    Failure(ErrorValue),
}

impl<T> Outcome<T> {
    /// 成功値から構築する。
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// メッセージから失敗を構築する。
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(ErrorValue::new(message))
    }

    /// `Success` かどうか。
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// `Failure` かどうか。
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// 成功値を取り出す。`Failure` に対して呼び出した場合はパニックする。
    pub fn into_success(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => {
                panic!("Outcome::into_success called on a Failure: {error}")
            }
        }
    }

    /// エラー値を取り出す。`Success` に対して呼び出した場合はパニックする。
    pub fn into_failure(self) -> ErrorValue {
        match self {
            Self::Failure(error) => error,
            Self::Success(_) => panic!("Outcome::into_failure called on a Success"),
        }
    }

    /// パニックしない成功値アクセサ。
    pub fn try_success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// パニックしないエラー値アクセサ。
    pub fn try_failure(self) -> Option<ErrorValue> {
        match self {
            Self::Failure(error) => Some(error),
            Self::Success(_) => None,
        }
    }

    /// 成功値への参照を返す。
    pub fn success_ref(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// エラー値への参照を返す。
    pub fn failure_ref(&self) -> Option<&ErrorValue> {
        match self {
            Self::Failure(error) => Some(error),
            Self::Success(_) => None,
        }
    }
}

impl<T> From<Result<T, ErrorValue>> for Outcome<T> {
    fn from(value: Result<T, ErrorValue>) -> Self {
        match value {
            Ok(inner) => Self::Success(inner),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, ErrorValue> {
    fn from(value: Outcome<T>) -> Self {
        match value {
            Outcome::Success(inner) => Ok(inner),
            Outcome::Failure(error) => Err(error),
        }
    }
}

/// メッセージのみを保持する不透明なエラー値。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorValue {
    message: String,
}

impl ErrorValue {
    /// メッセージからエラー値を生成する。
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// メッセージを参照する。
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl StdError for ErrorValue {}
