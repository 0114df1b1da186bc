//! Numeric type classes shared by ranges and conversions

mod sealed {
    pub trait Sealed {}
}

/// Primitive integer types.
///
/// Sealed: implemented for every built-in signed and unsigned integer.
pub trait Integer:
    sealed::Sealed + Copy + Ord + std::fmt::Debug + std::fmt::Display + std::hash::Hash + 'static
{
    const ZERO: Self;
    const ONE: Self;
    const MIN: Self;
    const MAX: Self;

    fn checked_add(self, rhs: Self) -> Option<Self>;
    fn to_f64(self) -> f64;
    /// Truncating conversion; callers check the range first.
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Integer for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
