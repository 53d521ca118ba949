// src/types/json.rs
//
// serde / JSON 変換
//
// 有理数は表示形式の文字列 ("13/122", "-2") としてシリアライズする。
// 逆変換は文字列と JSON 整数を受け付ける。浮動小数点数は受け付けない。

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::rational::Rational;
use crate::error::{RationalError, Result};

impl Serialize for Rational {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct RationalVisitor;

impl<'de> Visitor<'de> for RationalVisitor {
    type Value = Rational;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a rational as \"n\" or \"n/d\", or an integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Rational, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Rational, E> {
        Ok(Rational::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Rational, E> {
        Ok(Rational::from(v))
    }
}

impl<'de> Deserialize<'de> for Rational {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(RationalVisitor)
    }
}

pub fn to_json(val: &Rational) -> serde_json::Value {
    serde_json::Value::String(val.to_string())
}

pub fn from_json(json_val: serde_json::Value) -> Result<Rational> {
    match json_val {
        serde_json::Value::String(s) => s.parse(),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Rational::from(i))
            } else if let Some(u) = n.as_u64() {
                Ok(Rational::from(u))
            } else {
                Err(RationalError::parse_error(&n.to_string(), "not an integer"))
            }
        }
        other => Err(RationalError::parse_error(
            &other.to_string(),
            "expected a string or an integer",
        )),
    }
}
