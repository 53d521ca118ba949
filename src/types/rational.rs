// src/types/rational.rs
//
// 任意精度の有理数型
//
// 分子・分母はともに BigInt。生成時に必ず正規化され、以後は変更されない。
//
//   - 分母は正（符号は分子が持つ）
//   - gcd(|分子|, 分母) == 1
//   - ゼロは常に 0/1
//
// 正規化済みなので、構造的等価 (derive(PartialEq)) がそのまま値の等価になる。

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;

use crate::error::{RationalError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: BigInt,
    denominator: BigInt,
}

impl Rational {
    /// 分子と分母から正規化済みの有理数を生成します
    ///
    /// 分母がゼロの場合は `DivisionByZero` を返します。
    pub fn new(numerator: BigInt, denominator: BigInt) -> Result<Self> {
        if denominator.is_zero() {
            trace_normalize!("new: zero denominator (numerator = {})", numerator);
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self::normalize(numerator, denominator))
    }

    /// 整数 n を n/1 として生成します
    pub fn from_integer<T: Into<BigInt>>(value: T) -> Self {
        Rational {
            numerator: value.into(),
            denominator: BigInt::one(),
        }
    }

    /// 小さな整数の組から生成する簡易コンストラクタ (`1 divBy 2` 相当)
    pub fn div_by(numerator: i64, denominator: i64) -> Result<Self> {
        Self::new(BigInt::from(numerator), BigInt::from(denominator))
    }

    /// テキスト (`"n"` または `"n/d"`) から生成します
    pub fn parse(text: &str) -> Result<Self> {
        text.parse()
    }

    /// 呼び出し側で分母が非ゼロであることが保証されている場合の正規化
    fn normalize(mut numerator: BigInt, mut denominator: BigInt) -> Self {
        debug_assert!(!denominator.is_zero());

        if numerator.is_zero() {
            return Rational {
                numerator,
                denominator: BigInt::one(),
            };
        }

        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }

        let common = numerator.gcd(&denominator);
        if !common.is_one() {
            trace_normalize!("normalize: {}/{} reduced by {}", numerator, denominator, common);
            numerator /= &common;
            denominator /= &common;
        }

        Rational { numerator, denominator }
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// (分子, 分母) に分解します
    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numerator, self.denominator)
    }

    // --- 四則演算 ---
    // 演算子トレイト (ops.rs) はすべてここに委譲する。

    /// 加算: (a/b) + (c/d) = (ad + cb) / bd
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Rational) -> Rational {
        trace_arith!("add: {} + {}", self, other);
        // 整数同士: 分母の乗算とGCDを省略
        if self.denominator.is_one() && other.denominator.is_one() {
            return Rational::from_integer(&self.numerator + &other.numerator);
        }
        Self::normalize(
            &self.numerator * &other.denominator + &other.numerator * &self.denominator,
            &self.denominator * &other.denominator,
        )
    }

    /// 減算: (a/b) - (c/d) = (ad - cb) / bd
    pub fn subtract(&self, other: &Rational) -> Rational {
        trace_arith!("subtract: {} - {}", self, other);
        if self.denominator.is_one() && other.denominator.is_one() {
            return Rational::from_integer(&self.numerator - &other.numerator);
        }
        Self::normalize(
            &self.numerator * &other.denominator - &other.numerator * &self.denominator,
            &self.denominator * &other.denominator,
        )
    }

    /// 乗算: (a/b) × (c/d) = ac / bd
    pub fn multiply(&self, other: &Rational) -> Rational {
        trace_arith!("multiply: {} * {}", self, other);
        Self::normalize(
            &self.numerator * &other.numerator,
            &self.denominator * &other.denominator,
        )
    }

    /// 除算: (a/b) ÷ (c/d) = ad / bc
    ///
    /// c がゼロの場合は `DivisionByZero` を返します。
    pub fn divide(&self, other: &Rational) -> Result<Rational> {
        trace_arith!("divide: {} / {}", self, other);
        if other.is_zero() {
            trace_normalize!("divide: {} by zero", self);
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self::normalize(
            &self.numerator * &other.denominator,
            &self.denominator * &other.numerator,
        ))
    }

    /// 符号反転: -(a/b) = (-a)/b
    pub fn negate(&self) -> Rational {
        Rational {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }

    // --- 判定 ---

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// 分母が1かどうか
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    pub fn is_positive(&self) -> bool {
        self.numerator.is_positive()
    }

    /// 符号を -1, 0, 1 の有理数で返します
    pub fn signum(&self) -> Rational {
        Rational::from_integer(self.numerator.signum())
    }

    // --- 派生演算 ---

    pub fn abs(&self) -> Rational {
        Rational {
            numerator: self.numerator.abs(),
            denominator: self.denominator.clone(),
        }
    }

    /// 逆数: b/a（ゼロは `DivisionByZero`）
    pub fn recip(&self) -> Result<Rational> {
        if self.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self::normalize(self.denominator.clone(), self.numerator.clone()))
    }

    /// 整数乗
    ///
    /// 既約分数のべき乗は既約のままなので、GCDは再計算しない。
    /// 負の指数は逆数のべき乗として扱う。
    /// 計算量は指数に比例して増える（±1 と 0 以外で巨大な指数は避けること）。
    pub fn pow(&self, exponent: i32) -> Result<Rational> {
        let base = if exponent < 0 { self.recip()? } else { self.clone() };
        let e = exponent.unsigned_abs();
        Ok(Rational {
            numerator: base.numerator.pow(e),
            denominator: base.denominator.pow(e),
        })
    }

    /// 負の無限大方向への丸め
    pub fn floor(&self) -> Rational {
        if self.is_integer() {
            return self.clone();
        }
        Rational::from_integer(self.numerator.div_floor(&self.denominator))
    }

    /// 正の無限大方向への丸め
    pub fn ceil(&self) -> Rational {
        if self.is_integer() {
            return self.clone();
        }
        Rational::from_integer(self.numerator.div_ceil(&self.denominator))
    }

    /// ゼロ方向への丸め
    pub fn trunc(&self) -> Rational {
        if self.is_integer() {
            return self.clone();
        }
        Rational::from_integer(&self.numerator / &self.denominator)
    }

    /// 四捨五入（0.5 は 0 から遠い方向へ）
    ///
    /// floor(|x| + 1/2) = (2|a| + b) div 2b を計算し、符号を戻す。
    pub fn round(&self) -> Rational {
        if self.is_integer() {
            return self.clone();
        }
        let two = BigInt::from(2);
        let magnitude = (&self.numerator.abs() * &two + &self.denominator) / (&two * &self.denominator);
        if self.is_negative() {
            Rational::from_integer(-magnitude)
        } else {
            Rational::from_integer(magnitude)
        }
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // 整数同士の場合は乗算をスキップ
        if self.denominator.is_one() && other.denominator.is_one() {
            return self.numerator.cmp(&other.numerator);
        }
        // 分母はともに正なので a/b <=> c/d は a*d <=> c*b と同値
        let lhs = &self.numerator * &other.denominator;
        let rhs = &other.numerator * &self.denominator;
        lhs.cmp(&rhs)
    }
}
