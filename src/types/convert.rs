// src/types/convert.rs
//
// 整数型からの変換
//
// 単一の整数は分母1として常に成功する (From)。
// 整数の組は分母ゼロがありうるので TryFrom。

use std::convert::TryFrom;

use num_bigint::BigInt;

use super::rational::Rational;
use crate::error::RationalError;

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Rational::from_integer(value)
    }
}

impl From<&BigInt> for Rational {
    fn from(value: &BigInt) -> Self {
        Rational::from_integer(value.clone())
    }
}

macro_rules! define_from_primitive {
    ($($t:ident),*) => {
        $(
            impl From<$t> for Rational {
                fn from(value: $t) -> Self {
                    Rational::from_integer(value)
                }
            }
        )*
    };
}

define_from_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl TryFrom<(BigInt, BigInt)> for Rational {
    type Error = RationalError;

    fn try_from((numerator, denominator): (BigInt, BigInt)) -> Result<Self, Self::Error> {
        Rational::new(numerator, denominator)
    }
}

impl TryFrom<(i64, i64)> for Rational {
    type Error = RationalError;

    fn try_from((numerator, denominator): (i64, i64)) -> Result<Self, Self::Error> {
        Rational::div_by(numerator, denominator)
    }
}
