// src/wasm_api.rs
//
// JavaScript 向けの公開 API
//
// BigInt は JS 側へ10進文字列で渡す。エラーは表示文字列で返す。

use std::cmp::Ordering;

use wasm_bindgen::prelude::*;

use crate::types::parse_integer;
use crate::types::rational::Rational;

#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct JsRational {
    inner: Rational,
}

#[wasm_bindgen]
impl JsRational {
    #[wasm_bindgen(constructor)]
    pub fn new(numerator: &str, denominator: &str) -> Result<JsRational, String> {
        let num = parse_integer(numerator, numerator).map_err(|e| e.to_string())?;
        let den = parse_integer(denominator, denominator).map_err(|e| e.to_string())?;
        Rational::new(num, den)
            .map(JsRational::from)
            .map_err(|e| e.to_string())
    }

    #[wasm_bindgen]
    pub fn parse(text: &str) -> Result<JsRational, String> {
        Rational::parse(text)
            .map(JsRational::from)
            .map_err(|e| e.to_string())
    }

    #[wasm_bindgen]
    pub fn add(&self, other: &JsRational) -> JsRational {
        JsRational::from(&self.inner + &other.inner)
    }

    #[wasm_bindgen]
    pub fn sub(&self, other: &JsRational) -> JsRational {
        JsRational::from(&self.inner - &other.inner)
    }

    #[wasm_bindgen]
    pub fn mul(&self, other: &JsRational) -> JsRational {
        JsRational::from(&self.inner * &other.inner)
    }

    #[wasm_bindgen]
    pub fn div(&self, other: &JsRational) -> Result<JsRational, String> {
        (&self.inner / &other.inner)
            .map(JsRational::from)
            .map_err(|e| e.to_string())
    }

    #[wasm_bindgen]
    pub fn neg(&self) -> JsRational {
        JsRational::from(-&self.inner)
    }

    /// -1, 0, 1 を返す（Array.prototype.sort の比較関数向け）
    #[wasm_bindgen]
    pub fn compare(&self, other: &JsRational) -> i32 {
        match self.inner.cmp(&other.inner) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    #[wasm_bindgen(js_name = inRange)]
    pub fn in_range(&self, start: &JsRational, end: &JsRational) -> bool {
        self.inner.is_within(&start.inner.range_to(&end.inner))
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_text(&self) -> String {
        self.inner.to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn numerator(&self) -> String {
        self.inner.numerator().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn denominator(&self) -> String {
        self.inner.denominator().to_string()
    }

    /// [分子, 分母] の文字列配列
    #[wasm_bindgen]
    pub fn parts(&self) -> js_sys::Array {
        let arr = js_sys::Array::new();
        arr.push(&JsValue::from_str(&self.numerator()));
        arr.push(&JsValue::from_str(&self.denominator()));
        arr
    }

    #[wasm_bindgen(js_name = toJSON)]
    pub fn to_json(&self) -> Result<JsValue, String> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| e.to_string())
    }
}

impl JsRational {
    pub fn as_rational(&self) -> &Rational {
        &self.inner
    }
}

impl From<Rational> for JsRational {
    fn from(inner: Rational) -> Self {
        JsRational { inner }
    }
}
