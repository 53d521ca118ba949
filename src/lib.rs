//! 任意精度整数にもとづく厳密な有理数型
//!
//! ```
//! use ratio_core::Rational;
//!
//! let half = Rational::div_by(1, 2).unwrap();
//! let third = Rational::div_by(1, 3).unwrap();
//!
//! assert_eq!((&half + &third).to_string(), "5/6");
//! assert_eq!("117/1098".parse::<Rational>().unwrap().to_string(), "13/122");
//! assert!(half.is_within(&third.range_to(&Rational::div_by(2, 3).unwrap())));
//! ```

#[macro_use]
mod trace;

pub mod error;
pub mod types;
pub mod wasm_api;

pub use error::{RationalError, Result};
pub use types::interval::RationalRange;
pub use types::json::{from_json, to_json};
pub use types::rational::Rational;
pub use wasm_api::JsRational;
