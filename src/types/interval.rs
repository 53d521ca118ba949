// src/types/interval.rs
//
// 閉区間 [start, end]
//
// 端点の並べ替えはしない。start > end の区間は空として扱う。

use std::ops::{Bound, RangeBounds, RangeInclusive};

use serde::{Deserialize, Serialize};

use super::rational::Rational;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RationalRange {
    start: Rational,
    end: Rational,
}

impl RationalRange {
    pub fn new(start: Rational, end: Rational) -> Self {
        RationalRange { start, end }
    }

    pub fn start(&self) -> &Rational {
        &self.start
    }

    /// 区間の終端（含む）
    pub fn end(&self) -> &Rational {
        &self.end
    }

    /// start <= value <= end
    pub fn contains(&self, value: &Rational) -> bool {
        &self.start <= value && value <= &self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn into_inner(self) -> (Rational, Rational) {
        (self.start, self.end)
    }
}

impl From<RangeInclusive<Rational>> for RationalRange {
    fn from(range: RangeInclusive<Rational>) -> Self {
        let (start, end) = range.into_inner();
        RationalRange { start, end }
    }
}

impl RangeBounds<Rational> for RationalRange {
    fn start_bound(&self) -> Bound<&Rational> {
        Bound::Included(&self.start)
    }

    fn end_bound(&self) -> Bound<&Rational> {
        Bound::Included(&self.end)
    }
}

impl Rational {
    /// self..end の閉区間を作ります
    pub fn range_to(&self, end: &Rational) -> RationalRange {
        RationalRange::new(self.clone(), end.clone())
    }

    /// self が range に含まれるかどうか (`x in a..b`)
    pub fn is_within(&self, range: &RationalRange) -> bool {
        range.contains(self)
    }
}
