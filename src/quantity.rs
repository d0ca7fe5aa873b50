//! # Quantity Model
//!
//! Exact numeric amounts as they appear in recipes: nothing at all, whole
//! numbers, decimals, and fractions (including mixed numbers and Unicode
//! vulgar fractions such as "⅔").
//!
//! ## Usage
//!
//! ```rust
//! use pantry::quantity::{Fraction, Quantity};
//!
//! let a = Quantity::from_string("1½");
//! let b = Quantity::from_string("1/2");
//! assert_eq!(a + b, Quantity::Integer(2));
//!
//! let third = Fraction::new(1, 3).map(Quantity::Fraction).unwrap();
//! assert_eq!(third.to_string(), "⅓");
//! ```

use crate::measurement_patterns::{
    expand_vulgar_fractions, vulgar_glyph, DECIMAL_REGEX, FRACTION_REGEX, INTEGER_REGEX,
    MIXED_NUMBER_REGEX,
};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, Mul};
use std::str::FromStr;

/// Greatest common divisor of the absolute values; `gcd(0, n) == n`
pub fn gcd(x: i64, y: i64) -> i64 {
    let (mut a, mut b) = (x.abs(), y.abs());
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Least common multiple, computed through the GCD; `None` on overflow
pub fn lcm(x: i64, y: i64) -> Option<i64> {
    if x == 0 || y == 0 {
        return Some(0);
    }
    (x / gcd(x, y)).checked_mul(y).and_then(i64::checked_abs)
}

/// A fraction with a guaranteed non-zero divisor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FractionParts")]
pub struct Fraction {
    dividend: i64,
    divisor: i64,
}

#[derive(Deserialize)]
struct FractionParts {
    dividend: i64,
    divisor: i64,
}

impl TryFrom<FractionParts> for Fraction {
    type Error = String;

    fn try_from(parts: FractionParts) -> Result<Self, Self::Error> {
        Fraction::new(parts.dividend, parts.divisor)
            .ok_or_else(|| format!("fraction {}/0 has a zero divisor", parts.dividend))
    }
}

impl Fraction {
    /// Create a fraction, refusing a zero divisor
    pub fn new(dividend: i64, divisor: i64) -> Option<Self> {
        if divisor == 0 {
            None
        } else {
            Some(Self { dividend, divisor })
        }
    }

    pub fn dividend(&self) -> i64 {
        self.dividend
    }

    pub fn divisor(&self) -> i64 {
        self.divisor
    }

    /// Approximate value as a float
    pub fn as_float(&self) -> f64 {
        self.dividend as f64 / self.divisor as f64
    }

    /// Collapse to `Integer` when whole, otherwise keep the fraction as-is
    fn into_quantity(self) -> Quantity {
        if self.dividend % self.divisor == 0 {
            Quantity::Integer(self.dividend / self.divisor)
        } else {
            Quantity::Fraction(self)
        }
    }

    /// Lowest terms with a positive divisor, collapsed to `Integer` when whole
    fn reduced_quantity(dividend: i64, divisor: i64) -> Quantity {
        let g = gcd(dividend, divisor);
        let sign = if divisor < 0 { -1 } else { 1 };
        match Fraction::new(sign * dividend / g, sign * divisor / g) {
            Some(fraction) => fraction.into_quantity(),
            None => Quantity::None,
        }
    }

    fn add_integer(self, integer: i64) -> Quantity {
        match integer
            .checked_mul(self.divisor)
            .and_then(|scaled| scaled.checked_add(self.dividend))
        {
            Some(dividend) => Fraction {
                dividend,
                divisor: self.divisor,
            }
            .into_quantity(),
            None => Quantity::Float(self.as_float() + integer as f64),
        }
    }

    fn add_fraction(self, other: Fraction) -> Quantity {
        let Some(divisor) = lcm(self.divisor, other.divisor) else {
            return Quantity::Float(self.as_float() + other.as_float());
        };
        let lhs = (divisor / self.divisor).checked_mul(self.dividend);
        let rhs = (divisor / other.divisor).checked_mul(other.dividend);
        match lhs.zip(rhs).and_then(|(l, r)| l.checked_add(r)) {
            Some(dividend) => Fraction { dividend, divisor }.into_quantity(),
            None => Quantity::Float(self.as_float() + other.as_float()),
        }
    }
}

/// A recipe amount
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub enum Quantity {
    /// No amount given (e.g. "salt")
    #[default]
    None,
    /// Whole number (e.g. "2 eggs")
    Integer(i64),
    /// Decimal amount (e.g. "1.5 lb")
    Float(f64),
    /// Exact fractional amount (e.g. "1 3/4 cups" is 7/4)
    Fraction(Fraction),
}

impl Quantity {
    /// Parse a single quantity token.
    ///
    /// Unicode vulgar fractions are expanded first, then the text is matched
    /// against integer, decimal, fraction and mixed-number forms in that order.
    /// Anything else yields `Quantity::None`.
    pub fn from_string(s: &str) -> Quantity {
        let expanded = expand_vulgar_fractions(s.trim());
        let text = expanded.trim();

        if INTEGER_REGEX.is_match(text) {
            return text.parse().map(Quantity::Integer).unwrap_or_default();
        }
        if DECIMAL_REGEX.is_match(text) {
            return text.parse().map(Quantity::Float).unwrap_or_default();
        }
        if let Some(captures) = FRACTION_REGEX.captures(text) {
            let dividend = captures[1].parse::<i64>().ok();
            let divisor = captures[2].parse::<i64>().ok();
            return dividend
                .zip(divisor)
                .and_then(|(d, v)| Fraction::new(d, v))
                .map(Quantity::Fraction)
                .unwrap_or_default();
        }
        if let Some(captures) = MIXED_NUMBER_REGEX.captures(text) {
            let whole = captures[1].parse::<i64>().ok();
            let dividend = captures[2].parse::<i64>().ok();
            let divisor = captures[3].parse::<i64>().ok();
            return match (whole, dividend, divisor) {
                (Some(w), Some(d), Some(v)) => w
                    .checked_mul(v)
                    .and_then(|scaled| scaled.checked_add(d))
                    .and_then(|total| Fraction::new(total, v))
                    .map(Quantity::Fraction)
                    .unwrap_or_default(),
                _ => Quantity::None,
            };
        }

        Quantity::None
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Quantity::None)
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Quantity::Integer(_))
    }

    /// Approximate value as a float; `None` counts as zero
    pub fn as_float(&self) -> f64 {
        match self {
            Quantity::None => 0.0,
            Quantity::Integer(i) => *i as f64,
            Quantity::Float(f) => *f,
            Quantity::Fraction(fraction) => fraction.as_float(),
        }
    }
}

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Quantity::None, Quantity::None) => true,
            (Quantity::Integer(a), Quantity::Integer(b)) => a == b,
            (Quantity::Float(a), Quantity::Float(b)) => a.to_bits() == b.to_bits(),
            (Quantity::Fraction(a), Quantity::Fraction(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Quantity {}

impl Hash for Quantity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Quantity::None => {}
            Quantity::Integer(i) => i.hash(state),
            Quantity::Float(f) => f.to_bits().hash(state),
            Quantity::Fraction(fraction) => fraction.hash(state),
        }
    }
}

impl Add for Quantity {
    type Output = Quantity;

    fn add(self, rhs: Quantity) -> Quantity {
        match (self, rhs) {
            (Quantity::None, q) | (q, Quantity::None) => q,
            (Quantity::Integer(a), Quantity::Integer(b)) => match a.checked_add(b) {
                Some(sum) => Quantity::Integer(sum),
                None => Quantity::Float(a as f64 + b as f64),
            },
            (Quantity::Float(a), b) => Quantity::Float(a + b.as_float()),
            (a, Quantity::Float(b)) => Quantity::Float(a.as_float() + b),
            (Quantity::Integer(i), Quantity::Fraction(f))
            | (Quantity::Fraction(f), Quantity::Integer(i)) => f.add_integer(i),
            (Quantity::Fraction(a), Quantity::Fraction(b)) => a.add_fraction(b),
        }
    }
}

impl AddAssign for Quantity {
    fn add_assign(&mut self, rhs: Quantity) {
        *self = *self + rhs;
    }
}

impl Mul<i64> for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: i64) -> Quantity {
        match self {
            Quantity::None => Quantity::None,
            Quantity::Integer(i) => match i.checked_mul(rhs) {
                Some(product) => Quantity::Integer(product),
                None => Quantity::Float(i as f64 * rhs as f64),
            },
            Quantity::Float(f) => Quantity::Float(f * rhs as f64),
            Quantity::Fraction(f) => match f.dividend.checked_mul(rhs) {
                Some(dividend) => Fraction::reduced_quantity(dividend, f.divisor),
                None => Quantity::Float(f.as_float() * rhs as f64),
            },
        }
    }
}

impl Div<i64> for Quantity {
    type Output = Quantity;

    fn div(self, rhs: i64) -> Quantity {
        if rhs == 0 {
            return self;
        }
        match self {
            Quantity::None => Quantity::None,
            Quantity::Integer(i) if i.checked_rem(rhs) == Some(0) => Quantity::Integer(i / rhs),
            Quantity::Integer(i) => Quantity::Float(i as f64 / rhs as f64),
            Quantity::Float(f) => Quantity::Float(f / rhs as f64),
            Quantity::Fraction(f) => match f.divisor.checked_mul(rhs) {
                Some(divisor) => Fraction::reduced_quantity(f.dividend, divisor),
                None => Quantity::Float(f.as_float() / rhs as f64),
            },
        }
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: f64) -> Quantity {
        match self {
            Quantity::None => Quantity::None,
            q => Quantity::Float(q.as_float() * rhs),
        }
    }
}

impl Div<f64> for Quantity {
    type Output = Quantity;

    fn div(self, rhs: f64) -> Quantity {
        match self {
            Quantity::None => Quantity::None,
            q if rhs == 0.0 => q,
            q => Quantity::Float(q.as_float() / rhs),
        }
    }
}

impl FromStr for Quantity {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Quantity::from_string(s))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::None => Ok(()),
            Quantity::Integer(i) => write!(f, "{}", i),
            Quantity::Float(x) => write!(f, "{:.1}", x),
            Quantity::Fraction(fraction) => {
                let divisor = fraction.divisor;
                let mut dividend = fraction.dividend;
                if dividend > divisor {
                    let whole = dividend / divisor;
                    dividend %= divisor;
                    if dividend == 0 {
                        return write!(f, "{}", whole);
                    }
                    write!(f, "{} ", whole)?;
                }
                match vulgar_glyph(dividend, divisor) {
                    Some(glyph) => write!(f, "{}", glyph),
                    None => write!(f, "{}/{}", dividend, divisor),
                }
            }
        }
    }
}
