//! This crate converts positive finite `f64` values to the shortest
//! decimal digit string that parses back to exactly the same double,
//! using the Errol family of algorithms ("Printing Floating-Point
//! Numbers: An Always Correct Method" by Marc Andrysco, Ranjit Jhala
//! and Sorin Lerner).
//!
//! The conversion works on a decomposed representation: the digits
//! `d1 d2 .. dn` are written into a caller-supplied buffer without a
//! decimal point, sign or exponent marker, and the returned exponent
//! `exp` places the value as `0.d1d2..dn * 10^exp`. Building an actual
//! string (choosing `1.25e20` over `125 * 10^18`, localizing the
//! separator, padding) is left to the caller, which is the point: the
//! hard part is getting the digits right, not printing them.
//!
//! Three converters are exposed, all of them allocation-free:
//!
//! - [`convert_shortest`] is the primary entry. It picks an exact fast
//!   path for inputs that still have integral structure (`[16, 2^53)`
//!   and `[2^53, 2^128)`), and otherwise runs the high-precision
//!   floating strategy patched by a precomputed correction table. The
//!   result is always the shortest round-tripping form, matching a
//!   correctly-rounded reference digit for digit.
//! - [`convert_checked`] runs the floating strategy uncorrected and
//!   additionally reports whether the output is provably shortest;
//!   callers can fall back to a big-integer algorithm on `false`.
//! - [`convert_embedded`] needs no lookup tables at all. Its output
//!   always round-trips but may be a digit or two longer than the
//!   shortest form. Useful where the tables are too much to carry.
//!
//! The [`DtoaFloat`] extension trait wraps the converters with sign and
//! class handling for callers that start from a raw `f64`.
//!
//! # Example
//!
//! ```
//! use errol::DtoaFloat as _;
//!
//! let mut buf = [0; errol::SHORTEST_BUF_LEN];
//!
//! let (digits, exp) = errol::convert_shortest(1.25e20, &mut buf);
//! assert_eq!((digits, exp), (&b"125"[..], 21));
//!
//! // the trait classifies the value first
//! let formatted = (-0.00401f64).dtoa_shortest(&mut buf);
//! assert_eq!(formatted, errol::Formatted::Finite(true, b"401", -2));
//! assert_eq!(f64::NAN.dtoa_shortest(&mut buf), errol::Formatted::Nan);
//! ```
//!
//! # Floating-point environment
//!
//! Every strategy leans on IEEE-754 double arithmetic in the default
//! round-to-nearest-even mode. Changing the rounding mode through
//! `fesetround` or running under a flush-to-zero FPU invalidates the
//! digit generation; there is no runtime detection for it.

#![deny(
    rust_2018_idioms,
    trivial_numeric_casts,
    unreachable_pub,
    unused_must_use,
    unused_qualifications
)]
#![no_std]

#[cfg(test)]
extern crate std;

#[cfg(feature = "enumerate")]
extern crate alloc;

mod corrections;
mod decoder;
mod hp;
mod strategy;
mod table;

#[cfg(feature = "enumerate")]
pub mod enumerate;

#[cfg(test)]
mod tests;

mod sealed {
    pub trait Sealed {}
}

/// Minimum buffer size for every converter: seventeen significant
/// digits plus carry and scan headroom.
pub const SHORTEST_BUF_LEN: usize = 32;

/// Shortest round-trip conversion of a positive finite double.
///
/// Writes the significant digits into `buf` and returns them along with
/// the decimal exponent; the represented value is
/// `0.<digits> * 10^exp`. The digits never carry a leading or trailing
/// zero.
///
/// `buf` must be at least [`SHORTEST_BUF_LEN`] bytes. `v` must be
/// positive, finite and nonzero; use [`DtoaFloat`] when the input still
/// needs classifying.
///
/// # Example
///
/// ```
/// let mut buf = [0; errol::SHORTEST_BUF_LEN];
///
/// assert_eq!(errol::convert_shortest(1.0, &mut buf), (&b"1"[..], 1));
/// assert_eq!(errol::convert_shortest(0.1, &mut buf), (&b"1"[..], 0));
/// assert_eq!(errol::convert_shortest(12.34, &mut buf), (&b"1234"[..], 2));
/// assert_eq!(
///     errol::convert_shortest(9007199254740992.0, &mut buf),
///     (&b"9007199254740992"[..], 16),
/// );
/// ```
pub fn convert_shortest<'a>(v: f64, buf: &'a mut [u8]) -> (&'a [u8], i16) {
    assert!(buf.len() >= SHORTEST_BUF_LEN);
    debug_assert!(v > 0.0 && v.is_finite());

    let (len, exp) = if v >= strategy::FIXED_MIN && v < strategy::INTEGER_MIN {
        strategy::fixed::convert(v, buf)
    } else if v >= strategy::INTEGER_MIN && v < strategy::INTEGER_MAX {
        strategy::integer::convert(v, buf)
    } else if let Some(c) = corrections::search(v.to_bits()) {
        buf[..c.digits.len()].copy_from_slice(c.digits);
        (c.digits.len(), c.exp)
    } else {
        strategy::floating::convert(v, buf)
    };
    (&buf[..len], exp)
}

/// Uncorrected conversion with an optimality verdict.
///
/// Same contract as [`convert_shortest`], except no correction table is
/// consulted: the returned flag is `true` when the digits are provably
/// the shortest round-tripping form. On `false` the caller should fall
/// back to an exact reference algorithm.
///
/// # Example
///
/// ```
/// let mut buf = [0; errol::SHORTEST_BUF_LEN];
///
/// let (digits, exp, optimal) = errol::convert_checked(0.1, &mut buf);
/// assert_eq!((digits, exp, optimal), (&b"1"[..], 0, true));
/// ```
pub fn convert_checked<'a>(v: f64, buf: &'a mut [u8]) -> (&'a [u8], i16, bool) {
    assert!(buf.len() >= SHORTEST_BUF_LEN);
    debug_assert!(v > 0.0 && v.is_finite());

    let (len, exp, opt) = strategy::floating::convert_checked(v, buf);
    (&buf[..len], exp, opt)
}

/// Table-free conversion for constrained targets.
///
/// The output always parses back to `v`, but may run one or two digits
/// past the shortest form.
///
/// # Example
///
/// ```
/// let mut buf = [0; errol::SHORTEST_BUF_LEN];
///
/// assert_eq!(errol::convert_embedded(0.3, &mut buf), (&b"3"[..], 0));
/// assert_eq!(errol::convert_embedded(1.25e20, &mut buf), (&b"125"[..], 21));
/// ```
pub fn convert_embedded<'a>(v: f64, buf: &'a mut [u8]) -> (&'a [u8], i16) {
    assert!(buf.len() >= SHORTEST_BUF_LEN);
    debug_assert!(v > 0.0 && v.is_finite());

    let (len, exp) = strategy::embedded::convert(v, buf);
    (&buf[..len], exp)
}

/// A classified conversion result.
///
/// The `bool` fields carry the sign (`true` for negative). For
/// `Finite`, the digits and exponent follow the same
/// `0.<digits> * 10^exp` convention as [`convert_shortest`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Formatted<'a> {
    Nan,
    Inf(bool),
    Zero(bool),
    Finite(bool, &'a [u8], i16),
}

/// Extends `f64` with the conversions in this crate, handling sign and
/// class so the caller does not have to pre-filter.
pub trait DtoaFloat: sealed::Sealed + Sized {
    /// Classify and convert via [`convert_shortest`].
    fn dtoa_shortest(self, buf: &mut [u8]) -> Formatted<'_>;

    /// Classify and convert via [`convert_embedded`].
    fn dtoa_embedded(self, buf: &mut [u8]) -> Formatted<'_>;

    /// Classify and convert via [`convert_checked`]; the flag is `true`
    /// for non-finite classes, which are trivially exact.
    fn dtoa_checked(self, buf: &mut [u8]) -> (Formatted<'_>, bool);
}

impl sealed::Sealed for f64 {}

impl DtoaFloat for f64 {
    fn dtoa_shortest(self, buf: &mut [u8]) -> Formatted<'_> {
        if self.is_nan() {
            return Formatted::Nan;
        }
        let sign = self.is_sign_negative();
        if self.is_infinite() {
            return Formatted::Inf(sign);
        }
        let mag = if sign { -self } else { self };
        if mag == 0.0 {
            return Formatted::Zero(sign);
        }
        let (digits, exp) = convert_shortest(mag, buf);
        Formatted::Finite(sign, digits, exp)
    }

    fn dtoa_embedded(self, buf: &mut [u8]) -> Formatted<'_> {
        if self.is_nan() {
            return Formatted::Nan;
        }
        let sign = self.is_sign_negative();
        if self.is_infinite() {
            return Formatted::Inf(sign);
        }
        let mag = if sign { -self } else { self };
        if mag == 0.0 {
            return Formatted::Zero(sign);
        }
        let (digits, exp) = convert_embedded(mag, buf);
        Formatted::Finite(sign, digits, exp)
    }

    fn dtoa_checked(self, buf: &mut [u8]) -> (Formatted<'_>, bool) {
        if self.is_nan() {
            return (Formatted::Nan, true);
        }
        let sign = self.is_sign_negative();
        if self.is_infinite() {
            return (Formatted::Inf(sign), true);
        }
        let mag = if sign { -self } else { self };
        if mag == 0.0 {
            return (Formatted::Zero(sign), true);
        }
        let (digits, exp, opt) = convert_checked(mag, buf);
        (Formatted::Finite(sign, digits, exp), opt)
    }
}
