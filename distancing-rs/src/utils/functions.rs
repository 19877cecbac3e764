use crate::prelude::{Count, Real};

/// Round to the nearest integer, resolving ties to the even neighbour
/// (banker's rounding). Values outside the range of Count saturate and NaN
/// maps to zero.
#[inline]
pub fn round_half_even(x: Real) -> Count {
    x.round_ties_even() as Count
}

/// Format an integer with commas separating groups of thousands, as in
/// "4,523,356".
pub fn group_thousands(n: Count) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    return out;
}
