// src/types/mod.rs
//
// 有理数型とその周辺
//
// | 入力テキスト     | 内部表現 (分子, 分母) | 表示     |
// |------------------|-----------------------|----------|
// | 42               | (42, 1)               | 42       |
// | 117/1098         | (13, 122)             | 13/122   |
// | -2/4             | (-1, 2)               | -1/2     |
// | 1/-2             | (-1, 2)               | -1/2     |
// | 0/7              | (0, 1)                | 0        |
// | 1/0              | DivisionByZero        |          |

pub mod rational;
pub mod interval;
pub mod json;
mod ops;
mod convert;
mod parse;
mod display;

pub(crate) use self::parse::parse_integer;
