//! The high-precision floating strategy.
//!
//! The input is scaled into `[1, 10)` through the decimal power table,
//! the half-ulp rounding boundaries are tracked as a pair of `Hp`
//! values, and digits are emitted for as long as both boundaries agree
//! on them. The digit after the boundaries diverge is read off the
//! interval midpoint.
//!
//! `convert` on its own can still pick a wrong final digit when the
//! scaled value sits close enough to a rounding boundary; the
//! enumerated patch table in `corrections` covers exactly those inputs.
//! `convert_checked` instead brackets the interval from both sides and
//! reports whether the result is provably the shortest form.

use crate::decoder;
use crate::hp::{self, Hp};
use crate::table::{LOOKUP, LOOKUP_LEN};

/// First table index whose offset term degrades into the subnormal
/// range (around `10^-292`).
const SPLIT_MIN: i16 = 600;

/// How far up the table the split product reaches for its first factor.
const SPLIT_SHIFT: i16 = 250;

/// `10^-250` with a full-precision offset.
const TEN_M250: Hp = Hp {
    val: 1e-250,
    off: -5.39995372538839e-267,
};

/// Interval bracket width for `convert_checked`.
const EPSILON: f64 = 8.77e-15;

/// Table index from the binary exponent, via `log10(2) ~ 0.30103`. The
/// estimate can be a decade off; the scaling loops absorb that.
fn seed_index(v: f64) -> i16 {
    let e = decoder::binary_exponent(v);
    let k = (307.0 + e as f64 * 0.30103) as i16;
    if k < 20 {
        20
    } else if k >= LOOKUP_LEN {
        LOOKUP_LEN - 1
    } else {
        k
    }
}

/// `LOOKUP[k] * v`. Entries past `SPLIT_MIN` cannot carry their own
/// offset, so the product runs through a better-conditioned entry and a
/// `10^-250` correction factor instead.
fn scale(k: i16, v: f64) -> Hp {
    if k >= SPLIT_MIN {
        let w = hp::prod(LOOKUP[(k - SPLIT_SHIFT) as usize], v);
        hp::wide_prod(w, TEN_M250)
    } else {
        hp::prod(LOOKUP[k as usize], v)
    }
}

pub(crate) fn convert(v: f64, buf: &mut [u8]) -> (usize, i16) {
    debug_assert!(v > 0.0 && v.is_finite());

    let k = seed_index(v);
    let mut mid = scale(k, v);
    let lten = LOOKUP[k as usize].val;
    let mut ten = 1.0;
    let mut exp = k - 307;

    while mid.gte10() {
        exp += 1;
        mid.div10();
        ten /= 10.0;
    }
    while mid.lt1() {
        exp -= 1;
        mid.mul10();
        ten *= 10.0;
    }

    let mut high = Hp::new(
        mid.val,
        mid.off + decoder::upgap(v) * lten * ten / 2.0,
    );
    let mut low = Hp::new(
        mid.val,
        mid.off + (decoder::next_down(v) - v) * lten * ten / 2.0,
    );
    high.normalize();
    low.normalize();

    // the boundary offsets can push the pair across a decade edge
    while high.gte10() {
        exp += 1;
        high.div10();
        low.div10();
    }
    while high.lt1() {
        exp -= 1;
        high.mul10();
        low.mul10();
    }

    let mut len = 0;
    while len + 1 < buf.len() {
        let mut hdig = high.val as i32;
        if high.val == hdig as f64 && high.off < 0.0 {
            hdig -= 1;
        }
        let mut ldig = low.val as i32;
        if low.val == ldig as f64 && low.off < 0.0 {
            ldig -= 1;
        }
        if ldig != hdig {
            break;
        }

        buf[len] = b'0' + hdig as u8;
        len += 1;
        high.val -= hdig as f64;
        low.val -= ldig as f64;
        high.mul10();
        low.mul10();
    }

    let mdig = ((high.val + low.val) / 2.0 + 0.5) as u8;
    buf[len] = b'0' + mdig;
    len += 1;

    (len, exp)
}

pub(crate) fn convert_checked(v: f64, buf: &mut [u8]) -> (usize, i16, bool) {
    debug_assert!(v > 0.0 && v.is_finite());

    let k = seed_index(v);
    let mut mid = scale(k, v);
    let lten = LOOKUP[k as usize].val;
    let mut ten = 1.0;
    let mut exp = k - 307;

    while mid.gte10() {
        exp += 1;
        mid.div10();
        ten /= 10.0;
    }
    while mid.lt1() {
        exp -= 1;
        mid.mul10();
        ten *= 10.0;
    }

    let up = decoder::upgap(v) * lten * ten;
    let down = (decoder::next_down(v) - v) * lten * ten;
    let mut inhi = Hp::new(mid.val, mid.off + up / (2.0 + EPSILON));
    let mut inlo = Hp::new(mid.val, mid.off + down / (2.0 + EPSILON));
    let mut outhi = Hp::new(mid.val, mid.off + up / (2.0 - EPSILON));
    let mut outlo = Hp::new(mid.val, mid.off + down / (2.0 - EPSILON));
    inhi.normalize();
    inlo.normalize();
    outhi.normalize();
    outlo.normalize();

    while inhi.gte10() {
        exp += 1;
        inhi.div10();
        inlo.div10();
        outhi.div10();
        outlo.div10();
    }
    while inhi.lt1() {
        exp -= 1;
        inhi.mul10();
        inlo.mul10();
        outhi.mul10();
        outlo.mul10();
    }

    let mut opt = true;
    let mut len = 0;
    while (inhi.val != 0.0 || inhi.off != 0.0) && len < buf.len() {
        let mut hdig = inhi.val as i32;
        inhi.val -= hdig as f64;
        if inhi.val == 0.0 && inhi.off < 0.0 {
            hdig -= 1;
            inhi.val += 1.0;
        }

        let mut ldig = inlo.val as i32;
        inlo.val -= ldig as f64;
        if inlo.val == 0.0 && inlo.off < 0.0 {
            ldig -= 1;
            inlo.val += 1.0;
        }

        buf[len] = b'0' + hdig as u8;
        len += 1;
        if ldig != hdig {
            break;
        }

        // a digit the widened interval does not force may not be optimal
        let mut hdig = outhi.val as i32;
        outhi.val -= hdig as f64;
        if outhi.val == 0.0 && outhi.off < 0.0 {
            hdig -= 1;
            outhi.val += 1.0;
        }

        let mut ldig = outlo.val as i32;
        outlo.val -= ldig as f64;
        if outlo.val == 0.0 && outlo.off < 0.0 {
            ldig -= 1;
            outlo.val += 1.0;
        }

        if ldig != hdig {
            opt = false;
        }

        inhi.mul10();
        inlo.mul10();
        outhi.mul10();
        outlo.mul10();
    }

    (len, exp, opt)
}
