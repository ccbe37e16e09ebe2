//! Integer helpers missing from std.

/// Integer exponentiation by squaring. Wraps on overflow; callers in this
/// crate only ever raise 7 to exponents that fit i64.
#[inline]
#[must_use]
pub(crate) fn ipow(mut base: i64, mut exp: i64) -> i64 {
  if exp < 0 {
    if base == 1 {
      return 1;
    }
    if base == -1 {
      return if exp % 2 == 0 { 1 } else { -1 };
    }
    return 0;
  }

  let mut result: i64 = 1;
  loop {
    if exp & 1 != 0 {
      result = result.wrapping_mul(base);
    }
    exp >>= 1;
    if exp == 0 {
      break;
    }
    base = base.wrapping_mul(base);
  }
  result
}
