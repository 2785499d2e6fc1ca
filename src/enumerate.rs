//! Offline proof enumerator.
//!
//! The floating strategy can only misjudge the final digit when the
//! scaled input lands within a provable distance of a digit-rounding
//! boundary. For a binade `[2^e, 2^(e+1))` that distance condition is a
//! linear congruence over the mantissa index, and this module walks its
//! solutions with exact integer arithmetic: build the minimal positive
//! and negative drift lists, steer an initial residue toward zero, then
//! exhaustively expand every index whose residue stays inside the bound.
//!
//! The runtime converters never touch this code. It exists to produce
//! (and in tests, to cross-check) the patch table in `corrections`: run
//! every candidate through the uncorrected strategy, compare against a
//! correctly-rounded reference, and store the disagreements in level
//! order.

use alloc::vec::Vec;
use core::cmp::Ordering;

use num_bigint::{BigInt, Sign};
use num_traits::Zero;

const LOG10_2: f64 = 0.30102999566398119521;
const LOG10_5: f64 = 0.69897000433601880479;

/// Decimal digits a 17-digit target keeps in play; see the paper's
/// Theorem 4 for the `- D + 2` slack in the formulas below.
const D: i32 = 17;

/// One achievable residue drift: advancing the mantissa index by `idx`
/// moves the residue by `val`.
pub struct Shift {
    pub idx: u64,
    pub val: BigInt,
}

/// Diophantine search parameters for one binade.
pub struct Params {
    pub delta: BigInt,
    pub m0: BigInt,
    pub alpha: BigInt,
    pub tau: BigInt,
    pub p: u32,
}

impl Params {
    /// Parameters for the binade `[2^e, 2^(e+1))`.
    ///
    /// Large exponents scale down through `10^n`, leaving residues mod
    /// `5^n`; small ones scale up, leaving residues mod a power of two.
    /// Subnormal binades carry their reduced precision in `p`.
    pub fn for_exponent(e: i32) -> Params {
        if e >= 128 {
            let p = 52u32;
            let n = ((e + 1) as f64 * LOG10_2) as i32 - D + 2;
            let delta = BigInt::from(79) << (e - 2 * p as i32 - n) as usize;
            let alpha = BigInt::from(1) << (e - p as i32 - n) as usize;
            let tau = BigInt::from(5).pow(n as u32);
            let m0 = ((BigInt::from(1) << (e - n) as usize)
                + (BigInt::from(1) << (e - p as i32 - n - 1) as usize))
                % &tau;
            Params { delta, m0, alpha, tau, p }
        } else {
            let p = if e >= -1022 { 52u32 } else { (e + 1074) as u32 };
            let d = ((p + 1) as f64 * LOG10_2) as i32 + 2;
            let n = ((-e + p as i32 + 1) as f64 * LOG10_5
                + (p + 1) as f64 * LOG10_2) as i32
                - d
                + 2;
            let nprime = p as i32 + 1 - e - n;
            debug_assert!(nprime >= 0, "e={}", e);
            let nprime = nprime as u32;
            let tau = BigInt::from(1) << n as usize;
            let five = BigInt::from(5).pow(nprime);
            let alpha = (&five * 2) % &tau;
            let m0 = (((BigInt::from(1) << (p + 1) as usize) + 1) * &five) % &tau;
            let delta = if p >= 1 {
                (&five * 79) >> (p - 1) as usize
            } else {
                &five * 79 * 2
            };
            Params { delta, m0, alpha, tau, p }
        }
    }
}

fn cmpabs(a: &BigInt, b: &BigInt) -> Ordering {
    a.magnitude().cmp(b.magnitude())
}

/// Largest-magnitude entry strictly smaller in magnitude than `val`.
/// Lists are ordered by decreasing magnitude.
fn smaller(list: &[Shift], val: &BigInt) -> Option<usize> {
    let mut lo = 0isize;
    let mut hi = list.len() as isize - 1;
    while lo <= hi {
        let m = ((lo + hi) / 2) as usize;
        match cmpabs(&list[m].val, val) {
            Ordering::Greater => lo = m as isize + 1,
            Ordering::Less => hi = m as isize - 1,
            Ordering::Equal => {
                return if m + 1 < list.len() { Some(m + 1) } else { None };
            }
        }
    }
    let lo = lo as usize;
    if lo < list.len() {
        Some(lo)
    } else {
        None
    }
}

/// Largest-magnitude entry no larger in magnitude than `val`.
fn atmost(list: &[Shift], val: &BigInt) -> Option<usize> {
    let mut lo = 0isize;
    let mut hi = list.len() as isize - 1;
    while lo <= hi {
        let m = ((lo + hi) / 2) as usize;
        match cmpabs(&list[m].val, val) {
            Ordering::Greater => lo = m as isize + 1,
            Ordering::Less => hi = m as isize - 1,
            Ordering::Equal => return Some(m),
        }
    }
    let lo = lo as usize;
    if lo < list.len() {
        Some(lo)
    } else {
        None
    }
}

/// Mantissa indices whose residue `m0 + idx * alpha (mod tau)` stays
/// within `delta` of zero.
pub fn proof_enum(params: &Params) -> Vec<u64> {
    let Params { delta, m0, alpha, tau, p } = params;
    let limit = 1u64 << *p;

    let first = alpha % tau;
    let mut up = Vec::new();
    let mut down = Vec::new();
    up.push(Shift { idx: 1, val: first.clone() });
    down.push(Shift { idx: 1, val: first - tau });

    // optimal drift list construction
    loop {
        let (idx, val) = {
            let (from, within) = if up.last().unwrap().idx <= down.last().unwrap().idx {
                (up.last().unwrap(), &down)
            } else {
                (down.last().unwrap(), &up)
            };
            let other = within.last().unwrap();
            let gap = &other.val - &from.val;
            let s = match smaller(within, &gap) {
                Some(s) => &within[s],
                None => break,
            };
            (from.idx + s.idx, &from.val + &s.val)
        };

        if val.sign() != Sign::Minus {
            up.push(Shift { idx, val: val.clone() });
        }
        if val.sign() != Sign::Plus {
            down.push(Shift { idx, val: val.clone() });
        }
        if idx >= limit || val.is_zero() {
            break;
        }
    }

    // steer the initial residue toward zero
    let mut idx = 0u64;
    let mut v = m0 % tau;
    let wrapped = &v - tau;
    if cmpabs(&wrapped, &v) == Ordering::Less {
        v = wrapped;
    }
    let mut stuck = false;
    while cmpabs(&v, delta) == Ordering::Greater && idx < limit {
        let list = if v.sign() == Sign::Minus { &up } else { &down };
        match atmost(list, &(&v * 2)) {
            Some(s) => {
                idx += list[s].idx;
                v += &list[s].val;
            }
            None => {
                stuck = true;
                break;
            }
        }
    }

    let mut out = Vec::new();
    if stuck || idx >= limit || cmpabs(&v, delta) == Ordering::Greater {
        return out;
    }

    // exhaustively expand around the hit
    let mut seen = alloc::collections::BTreeSet::new();
    seen.insert(idx);
    let mut points = Vec::new();
    points.push((idx, v));
    let mut i = 0;
    while i < points.len() {
        let (pidx, pval) = (points[i].0, points[i].1.clone());
        i += 1;
        out.push(pidx);

        for list in &[&up, &down] {
            for s in list.iter().rev() {
                let nval = &pval + &s.val;
                if cmpabs(&nval, delta) == Ordering::Greater {
                    break;
                }
                let nidx = pidx + s.idx;
                if nidx < limit && seen.insert(nidx) {
                    points.push((nidx, nval));
                }
            }
        }
    }
    out
}

/// Bit patterns of the candidate doubles in the binade of `e`, covering
/// each enumerated index and its upper neighbor.
pub fn candidates(e: i32) -> Vec<u64> {
    let params = Params::for_exponent(e);
    let base = if e >= -1022 {
        ((e + 1023) as u64) << 52
    } else {
        1u64 << params.p
    };

    let mut out = Vec::new();
    for idx in proof_enum(&params) {
        for k in &[idx, idx + 1] {
            let pattern = base + k;
            if (pattern >> 52) < 0x7FF {
                out.push(pattern);
            }
        }
    }
    out.sort_unstable();
    out.dedup();
    out
}

/// Sorted-array position of the root of a complete binary search tree
/// over `n` elements.
pub fn level_order_root(n: usize) -> usize {
    if n <= 1 {
        return 0;
    }
    let h = 63 - (n as u64).leading_zeros();
    let m = 1usize << h;
    (m / 2 - 1) + core::cmp::min(m / 2, n - m + 1)
}

/// Permutation taking level-order slots to sorted positions; used when
/// emitting the correction table.
pub fn level_order(n: usize) -> Vec<usize> {
    fn rec(lo: usize, hi: usize, pos: usize, out: &mut [usize]) {
        if lo >= hi {
            return;
        }
        let r = lo + level_order_root(hi - lo);
        out[pos] = r;
        rec(lo, r, 2 * pos + 1, out);
        rec(r + 1, hi, 2 * pos + 2, out);
    }

    let mut out = alloc::vec![0usize; n];
    rec(0, n, 0, &mut out);
    out
}
