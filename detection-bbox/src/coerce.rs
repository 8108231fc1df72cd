//! Lossy conversion of raw inputs into box coordinates and scores.

use crate::common::*;

/// Values that can be coerced into a coordinate (`i64`) or a probability (`f64`).
///
/// Floats are truncated toward zero when coerced into coordinates. Strings are
/// parsed after trimming surrounding whitespace. JSON values are coerced
/// according to their kind, and anything other than numbers and strings is
/// rejected.
pub trait Coerce {
    fn coerce_i64(&self) -> Option<i64>;

    fn coerce_f64(&self) -> Option<f64>;
}

macro_rules! impl_coerce_for_primitive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Coerce for $ty {
                fn coerce_i64(&self) -> Option<i64> {
                    ToPrimitive::to_i64(self)
                }

                fn coerce_f64(&self) -> Option<f64> {
                    ToPrimitive::to_f64(self)
                }
            }
        )*
    };
}

impl_coerce_for_primitive!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl Coerce for R64 {
    fn coerce_i64(&self) -> Option<i64> {
        self.raw().coerce_i64()
    }

    fn coerce_f64(&self) -> Option<f64> {
        Some(self.raw())
    }
}

impl Coerce for str {
    fn coerce_i64(&self) -> Option<i64> {
        self.trim().parse().ok()
    }

    fn coerce_f64(&self) -> Option<f64> {
        self.trim().parse().ok()
    }
}

impl Coerce for String {
    fn coerce_i64(&self) -> Option<i64> {
        self.as_str().coerce_i64()
    }

    fn coerce_f64(&self) -> Option<f64> {
        self.as_str().coerce_f64()
    }
}

impl Coerce for Number {
    fn coerce_i64(&self) -> Option<i64> {
        if let Some(value) = self.as_i64() {
            return Some(value);
        }
        if self.is_u64() {
            // too large for i64
            return None;
        }
        self.as_f64()?.coerce_i64()
    }

    fn coerce_f64(&self) -> Option<f64> {
        self.as_f64()
    }
}

impl Coerce for Value {
    fn coerce_i64(&self) -> Option<i64> {
        match self {
            Value::Number(number) => number.coerce_i64(),
            Value::String(text) => text.coerce_i64(),
            _ => None,
        }
    }

    fn coerce_f64(&self) -> Option<f64> {
        match self {
            Value::Number(number) => number.coerce_f64(),
            Value::String(text) => text.coerce_f64(),
            _ => None,
        }
    }
}

impl<T> Coerce for &T
where
    T: Coerce + ?Sized,
{
    fn coerce_i64(&self) -> Option<i64> {
        (**self).coerce_i64()
    }

    fn coerce_f64(&self) -> Option<f64> {
        (**self).coerce_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use serde_json::json;

    #[test]
    fn coerce_numbers() {
        assert_eq!(7u8.coerce_i64(), Some(7));
        assert_eq!(u64::MAX.coerce_i64(), None);
        assert_eq!(12.9f64.coerce_i64(), Some(12));
        assert_eq!((-12.9f32).coerce_i64(), Some(-12));
        assert_eq!(f64::NAN.coerce_i64(), None);
        assert_eq!(f64::INFINITY.coerce_i64(), None);
        assert_abs_diff_eq!(1i32.coerce_f64().unwrap(), 1.0);
    }

    #[test]
    fn coerce_strings() {
        assert_eq!(" 42 ".coerce_i64(), Some(42));
        assert_eq!("4.2".coerce_i64(), None);
        assert_eq!("abc".coerce_i64(), None);
        assert_abs_diff_eq!("0.25".coerce_f64().unwrap(), 0.25);
        assert_eq!(String::from("-3").coerce_i64(), Some(-3));
        assert_eq!("".coerce_f64(), None);
    }

    #[test]
    fn coerce_json_values() {
        assert_eq!(json!(100).coerce_i64(), Some(100));
        assert_eq!(json!(100.7).coerce_i64(), Some(100));
        assert_eq!(json!("100").coerce_i64(), Some(100));
        assert_eq!(json!(u64::MAX).coerce_i64(), None);
        assert_eq!(json!(null).coerce_i64(), None);
        assert_eq!(json!(true).coerce_f64(), None);
        assert_eq!(json!([1, 2]).coerce_f64(), None);
        assert_abs_diff_eq!(json!(0.5).coerce_f64().unwrap(), 0.5);
    }
}
