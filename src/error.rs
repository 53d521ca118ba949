// src/error.rs
//
// 有理数型のエラー定義
// 生成・演算・パースで起こりうる失敗をすべてここに集約する。
// 失敗時に 0 などの既定値を返すことはしない。

use std::fmt;
use num_bigint::ParseBigIntError;

pub type Result<T> = std::result::Result<T, RationalError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RationalError {
    /// 分母がゼロの生成、またはゼロによる除算
    DivisionByZero,
    /// テキストが `整数` / `整数/整数` の形になっていない
    ParseError { input: String, reason: String },
}

impl RationalError {
    /// パースエラーを生成する
    pub fn parse_error(input: &str, reason: &str) -> Self {
        RationalError::ParseError {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, RationalError::DivisionByZero)
    }
}

impl fmt::Display for RationalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RationalError::DivisionByZero => write!(f, "Division by zero"),
            RationalError::ParseError { input, reason } => {
                write!(f, "Cannot parse '{}' as a rational: {}", input, reason)
            },
        }
    }
}

impl std::error::Error for RationalError {}


/// BigInt のパース失敗（元テキストは呼び出し側で補う）
impl From<ParseBigIntError> for RationalError {
    fn from(e: ParseBigIntError) -> Self {
        RationalError::ParseError {
            input: String::new(),
            reason: e.to_string(),
        }
    }
}
