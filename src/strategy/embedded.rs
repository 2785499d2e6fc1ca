//! Table-free conversion.
//!
//! Scales the input one decade at a time instead of going through the
//! power table, so the only static data it needs is code. The widened
//! interval guard makes the result round-trip safe on any input, at the
//! cost of occasionally emitting a digit or two beyond the shortest
//! form.

use crate::decoder;
use crate::hp::Hp;

/// Interval narrowing guard; absorbs the error accumulated by the
/// decade-stepping loops.
const EPSILON: f64 = 0.000_000_1;

pub(crate) fn convert(v: f64, buf: &mut [u8]) -> (usize, i16) {
    debug_assert!(v > 0.0 && v.is_finite());

    let mut exp: i16 = 1;
    let mut ten = 1.0;

    let mut mid = Hp::new(v, 0.0);
    while mid.gte10() && exp < 308 {
        exp += 1;
        mid.div10();
        ten /= 10.0;
    }
    while mid.lt1() && exp > -307 {
        exp -= 1;
        mid.mul10();
        ten *= 10.0;
    }

    let mut inhi = Hp::new(
        mid.val,
        mid.off + decoder::upgap(v) * ten / (2.0 + EPSILON),
    );
    let mut inlo = Hp::new(
        mid.val,
        mid.off + (decoder::next_down(v) - v) * ten / (2.0 + EPSILON),
    );
    inhi.normalize();
    inlo.normalize();

    while inhi.gte10() {
        exp += 1;
        inhi.div10();
        inlo.div10();
    }
    while inhi.lt1() {
        exp -= 1;
        inhi.mul10();
        inlo.mul10();
    }

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

        inhi.mul10();
        inlo.mul10();
    }

    (len, exp)
}
