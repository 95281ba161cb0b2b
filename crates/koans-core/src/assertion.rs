//! The assertion primitive used by every koan

use crate::error::AssertionFailure;
use std::fmt::Debug;

/// Assert that `actual` equals `expected`.
///
/// Equality is `PartialEq`: element-wise and order-sensitive for sequences,
/// plain value equality for scalars. On mismatch the failure carries both
/// values and the optional message; nothing else happens.
///
/// ```
/// use koans_core::assert_equal;
///
/// assert!(assert_equal(6, 1 + 2 + 3, None).is_ok());
/// assert!(assert_equal(vec![1, 2], vec![2, 1], Some("order")).is_err());
/// ```
pub fn assert_equal<T>(expected: T, actual: T, message: Option<&str>) -> Result<(), AssertionFailure>
where
    T: PartialEq + Debug,
{
    if expected == actual {
        Ok(())
    } else {
        Err(AssertionFailure::new(expected, actual, message))
    }
}

/// Assert equality inside a koan body, returning early with the failure.
///
/// Expands to [`assert_equal`] followed by `?`, so it can only be used in a
/// function whose error type converts from [`AssertionFailure`].
///
/// ```
/// use koans_core::{koan_assert_eq, KoanResult};
///
/// fn sum_koan() -> KoanResult {
///     let sum: i32 = [1, 2, 3].iter().sum();
///     koan_assert_eq!(6, sum);
///     koan_assert_eq!(6, sum, "sum of {:?}", [1, 2, 3]);
///     Ok(())
/// }
///
/// assert!(sum_koan().is_ok());
/// ```
#[macro_export]
macro_rules! koan_assert_eq {
    ($expected:expr, $actual:expr $(,)?) => {
        $crate::assertion::assert_equal($expected, $actual, None)?
    };
    ($expected:expr, $actual:expr, $($msg:tt)+) => {
        $crate::assertion::assert_equal($expected, $actual, Some(&format!($($msg)+)))?
    };
}
