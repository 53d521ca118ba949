// src/types/parse.rs
//
// テキストからのパース
//
// 受け付ける形式は "整数" と "整数/整数" のみ。
// 小数 ("0.5") や指数表記 ("1e3") は受け付けない。

use std::str::FromStr;

use num_bigint::BigInt;

use super::rational::Rational;
use crate::error::{RationalError, Result};

impl FromStr for Rational {
    type Err = RationalError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(RationalError::parse_error(s, "empty input"));
        }

        match s.split_once('/') {
            Some((num, den)) => {
                if den.contains('/') {
                    trace_normalize!("parse: more than one '/' in {:?}", s);
                    return Err(RationalError::parse_error(s, "more than one '/'"));
                }
                let numerator = parse_integer(s, num)?;
                let denominator = parse_integer(s, den)?;
                Rational::new(numerator, denominator)
            }
            None => Ok(Rational::from_integer(parse_integer(s, s)?)),
        }
    }
}

/// 符号付き10進整数のパース
///
/// `input` はエラー報告用の元テキスト、`segment` はその一部。
pub(crate) fn parse_integer(input: &str, segment: &str) -> Result<BigInt> {
    let digits = segment.strip_prefix(|c: char| c == '-' || c == '+').unwrap_or(segment);

    if digits.is_empty() {
        trace_normalize!("parse: empty segment in {:?}", input);
        return Err(RationalError::parse_error(input, "empty integer segment"));
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        trace_normalize!("parse: non-numeric segment {:?} in {:?}", segment, input);
        return Err(RationalError::parse_error(
            input,
            &format!("'{}' is not a decimal integer", segment),
        ));
    }

    BigInt::from_str(segment).map_err(|e| RationalError::parse_error(input, &e.to_string()))
}
