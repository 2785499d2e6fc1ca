//! Double-double arithmetic.
//!
//! An `Hp` is the unevaluated sum `val + off` of two doubles, good for
//! roughly 106 bits of precision. All operations assume the default
//! IEEE-754 round-to-nearest-even mode; the digit generation loops in
//! `strategy` are wrong under any other rounding mode.

/// High-precision pair. The represented value is exactly `val + off`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Hp {
    pub(crate) val: f64,
    pub(crate) off: f64,
}

/// Mask selecting the upper 26 mantissa bits, for the Veltkamp split.
const SPLIT_MASK: u64 = 0xFFFF_FFFF_F800_0000;

fn split(d: f64) -> (f64, f64) {
    let hi = f64::from_bits(d.to_bits() & SPLIT_MASK);
    (hi, d - hi)
}

impl Hp {
    pub(crate) fn new(val: f64, off: f64) -> Hp {
        Hp { val, off }
    }

    /// Fold the accumulated error into the main term. Afterwards `off` is
    /// at most half an ulp of `val`, with the represented sum unchanged.
    pub(crate) fn normalize(&mut self) {
        let val = self.val;
        self.val += self.off;
        self.off += val - self.val;
    }

    /// Multiply by ten in place. `10x = 8x + 2x` holds exactly, which
    /// recovers the rounding error of the widened product.
    pub(crate) fn mul10(&mut self) {
        let val = self.val;
        self.val *= 10.0;
        self.off *= 10.0;

        let mut off = self.val;
        off -= val * 8.0;
        off -= val * 2.0;

        self.off -= off;
        self.normalize();
    }

    /// Divide by ten in place, recovering the error the same way.
    pub(crate) fn div10(&mut self) {
        let mut val = self.val;
        self.val /= 10.0;
        self.off /= 10.0;

        val -= self.val * 8.0;
        val -= self.val * 2.0;

        self.off += val / 10.0;
        self.normalize();
    }

    /// `true` when the represented sum is at least ten.
    pub(crate) fn gte10(&self) -> bool {
        self.val > 10.0 || (self.val == 10.0 && self.off >= 0.0)
    }

    /// `true` when the represented sum is below one.
    pub(crate) fn lt1(&self) -> bool {
        self.val < 1.0 || (self.val == 1.0 && self.off < 0.0)
    }
}

/// Product of a pair and a plain double via the Dekker split. Each
/// half-product of the 26-bit halves is exact, so `e` reconstructs the
/// rounding error of `val * d` without a fused multiply-add.
pub(crate) fn prod(a: Hp, d: f64) -> Hp {
    let (hi, lo) = split(a.val);
    let (hi2, lo2) = split(d);

    let p = a.val * d;
    let e = ((hi * hi2 - p) + lo * hi2 + hi * lo2) + lo * lo2;

    Hp::new(p, a.off * d + e)
}

/// Full pair-times-pair product. Only used where a single scaling entry
/// cannot carry its own offset (see `table`).
pub(crate) fn wide_prod(a: Hp, b: Hp) -> Hp {
    let mut r = prod(a, b.val);
    r.off += a.val * b.off + a.off * b.off;
    r.normalize();
    r
}
