//! Bounds-checked element access.

use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayIndexError {
    NotAnArray,
    NotInteger,
    OutOfBounds,
}

impl Display for ArrayIndexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAnArray => write!(f, "Input is not a valid array"),
            Self::NotInteger => write!(f, "Index must be an integer"),
            Self::OutOfBounds => write!(f, "Index out of bounds"),
        }
    }
}

impl Error for ArrayIndexError {}

/// Index types accepted by `get_element`.
pub trait ElementIndex {
    /// Converts to a signed position, rejecting fractional values.
    fn to_position(self) -> Result<i128, ArrayIndexError>;
}

macro_rules! integer_index {
    ($($ty:ty),*) => {
        $(impl ElementIndex for $ty {
            fn to_position(self) -> Result<i128, ArrayIndexError> {
                Ok(i128::from(self))
            }
        })*
    };
}

integer_index!(i8, i16, i32, i64, u8, u16, u32, u64);

impl ElementIndex for usize {
    fn to_position(self) -> Result<i128, ArrayIndexError> {
        i128::try_from(self).map_err(|_| ArrayIndexError::OutOfBounds)
    }
}

impl ElementIndex for isize {
    fn to_position(self) -> Result<i128, ArrayIndexError> {
        i128::try_from(self).map_err(|_| ArrayIndexError::OutOfBounds)
    }
}

impl ElementIndex for f64 {
    fn to_position(self) -> Result<i128, ArrayIndexError> {
        if !self.is_finite() || self.fract() != 0.0 {
            return Err(ArrayIndexError::NotInteger);
        }
        // Integral finite floats beyond i128 are out of bounds anyway.
        if self.abs() > 1e30 {
            return Err(ArrayIndexError::OutOfBounds);
        }
        Ok(self as i128)
    }
}

/// Returns the element at `index`.
///
/// # Errors
/// - `NotInteger` for fractional, NaN or infinite float indices.
/// - `OutOfBounds` for negative indices or indices `>= items.len()`.
pub fn get_element<T, I: ElementIndex>(items: &[T], index: I) -> Result<&T, ArrayIndexError> {
    let position = index.to_position()?;
    usize::try_from(position)
        .ok()
        .and_then(|position| items.get(position))
        .ok_or(ArrayIndexError::OutOfBounds)
}

/// Dynamically typed variant of `get_element` over JSON values.
///
/// # Errors
/// - `NotAnArray` when `items` is not a JSON array.
/// - `NotInteger` when `index` is not a JSON number with an integral value.
/// - `OutOfBounds` as for `get_element`.
pub fn get_value_element<'a>(items: &'a Value, index: &Value) -> Result<&'a Value, ArrayIndexError> {
    let items = items.as_array().ok_or(ArrayIndexError::NotAnArray)?;
    match index {
        Value::Number(number) => {
            if let Some(value) = number.as_i64() {
                get_element(items, value)
            } else if let Some(value) = number.as_u64() {
                get_element(items, value)
            } else {
                get_element(items, number.as_f64().unwrap_or(f64::NAN))
            }
        }
        _ => Err(ArrayIndexError::NotInteger),
    }
}
