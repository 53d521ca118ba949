// src/types/ops.rs
//
// 演算子トレイトの実装
//
// 実体は Rational の名前付きメソッド（add / subtract / multiply / divide / negate）。
// ここでは所有値・参照のすべての組み合わせをそれらへ委譲するだけ。
// 除算だけはゼロ除算を報告するため Output = Result<Rational> になる。

use std::iter::{Product, Sum};
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};

use super::rational::Rational;
use crate::error::Result;

macro_rules! forward_binop {
    ($imp:ident, $method:ident, $inherent:ident, $out:ty) => {
        impl $imp<&Rational> for &Rational {
            type Output = $out;

            fn $method(self, rhs: &Rational) -> Self::Output {
                Rational::$inherent(self, rhs)
            }
        }

        impl $imp<Rational> for Rational {
            type Output = $out;

            fn $method(self, rhs: Rational) -> Self::Output {
                Rational::$inherent(&self, &rhs)
            }
        }

        impl $imp<&Rational> for Rational {
            type Output = $out;

            fn $method(self, rhs: &Rational) -> Self::Output {
                Rational::$inherent(&self, rhs)
            }
        }

        impl $imp<Rational> for &Rational {
            type Output = $out;

            fn $method(self, rhs: Rational) -> Self::Output {
                Rational::$inherent(self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add, add, Rational);
forward_binop!(Sub, sub, subtract, Rational);
forward_binop!(Mul, mul, multiply, Rational);
forward_binop!(Div, div, divide, Result<Rational>);

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Rational::from_integer(0)
    }

    fn is_zero(&self) -> bool {
        Rational::is_zero(self)
    }
}

impl One for Rational {
    fn one() -> Self {
        Rational::from_integer(1)
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Rational::zero(), |acc, x| Rational::add(&acc, &x))
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.fold(Rational::zero(), |acc, x| Rational::add(&acc, x))
    }
}

impl Product for Rational {
    fn product<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Rational::one(), |acc, x| acc.multiply(&x))
    }
}

impl<'a> Product<&'a Rational> for Rational {
    fn product<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.fold(Rational::one(), |acc, x| acc.multiply(x))
    }
}
