// src/types/display.rs
//
// 有理数の表示
//
// 分母が1なら分子のみ ("2")、それ以外は "分子/分母" ("-1/2")。
// この出力はそのまま parse で読み戻せる。

use std::fmt;

use super::interval::RationalRange;
use super::rational::Rational;

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

impl fmt::Display for RationalRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start(), self.end())
    }
}
