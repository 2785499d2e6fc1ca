use core::str;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use std::format;
use std::string::String;

use crate::{convert_checked, convert_embedded, convert_shortest};
use crate::{corrections, decoder, hp, strategy, DtoaFloat, Formatted, SHORTEST_BUF_LEN};

/// Shortest digits and exponent from the standard library's own
/// correctly-rounded conversion, in this crate's `0.d1..dn * 10^exp`
/// convention.
fn reference(v: f64) -> (String, i16) {
    let s = format!("{:e}", v);
    let pos = s.find('e').unwrap();
    let exp10: i32 = s[pos + 1..].parse().unwrap();
    let digits: String = s[..pos].chars().filter(|&c| c != '.').collect();
    (digits, (exp10 + 1) as i16)
}

fn parse_back(digits: &[u8], exp: i16) -> f64 {
    format!("0.{}e{}", str::from_utf8(digits).unwrap(), exp)
        .parse()
        .unwrap()
}

fn random_positive(rng: &mut StdRng) -> f64 {
    loop {
        let v = f64::from_bits(rng.gen::<u64>() & 0x7FFF_FFFF_FFFF_FFFF);
        if v != 0.0 && v.is_finite() {
            return v;
        }
    }
}

struct Case {
    value: f64,
    digits: &'static [u8],
    exp: i16,
}

impl Case {
    fn run(&self) {
        let mut buf = [0; SHORTEST_BUF_LEN];
        let (digits, exp) = convert_shortest(self.value, &mut buf);
        assert_eq!(
            (digits, exp),
            (self.digits, self.exp),
            "convert_shortest({:e})",
            self.value,
        );
        assert_eq!(parse_back(digits, exp), self.value);
    }
}

#[test]
fn shortest_literals() {
    let cases = [
        Case { value: 1.0, digits: b"1", exp: 1 },
        Case { value: 0.1, digits: b"1", exp: 0 },
        Case { value: 3.0, digits: b"3", exp: 1 },
        Case { value: 12.34, digits: b"1234", exp: 2 },
        Case { value: 123456.789, digits: b"123456789", exp: 6 },
        // largest and smallest normal, smallest subnormal
        Case { value: f64::MAX, digits: b"17976931348623157", exp: 309 },
        Case { value: f64::MIN_POSITIVE, digits: b"22250738585072014", exp: -307 },
        Case { value: 5e-324, digits: b"5", exp: -323 },
        // fixed strategy range
        Case { value: 16.0, digits: b"16", exp: 2 },
        Case { value: 17.0, digits: b"17", exp: 2 },
        Case { value: 16.000000000000004, digits: b"16000000000000004", exp: 2 },
        Case { value: 10000.5, digits: b"100005", exp: 5 },
        Case { value: 4503599627370496.0, digits: b"4503599627370496", exp: 16 },
        Case { value: 9007199254740991.0, digits: b"9007199254740991", exp: 16 },
        // integer strategy range, including the power-of-two seams
        Case { value: 9007199254740992.0, digits: b"9007199254740992", exp: 16 },
        Case { value: 1.8446744073709552e19, digits: b"18446744073709552", exp: 20 },
        Case { value: 1e17, digits: b"1", exp: 18 },
        Case { value: 1.2345678901234568e17, digits: b"12345678901234568", exp: 18 },
        Case { value: 1.7014118346046923e38, digits: b"17014118346046923", exp: 39 },
        Case { value: 3.4028236692093843e38, digits: b"34028236692093843", exp: 39 },
        // back on the floating strategy above 2^128
        Case { value: 3.402823669209385e38, digits: b"3402823669209385", exp: 39 },
        Case { value: 1e300, digits: b"1", exp: 301 },
        Case { value: 1e-300, digits: b"1", exp: -299 },
        Case { value: 1.25e20, digits: b"125", exp: 21 },
    ];
    for case in cases.iter() {
        case.run();
    }
}

#[test]
fn classification() {
    let mut buf = [0; SHORTEST_BUF_LEN];

    assert_eq!(f64::NAN.dtoa_shortest(&mut buf), Formatted::Nan);
    assert_eq!(f64::INFINITY.dtoa_shortest(&mut buf), Formatted::Inf(false));
    assert_eq!(f64::NEG_INFINITY.dtoa_shortest(&mut buf), Formatted::Inf(true));
    assert_eq!(0.0f64.dtoa_shortest(&mut buf), Formatted::Zero(false));
    assert_eq!((-0.0f64).dtoa_shortest(&mut buf), Formatted::Zero(true));

    assert_eq!(330.0f64.dtoa_shortest(&mut buf), Formatted::Finite(false, b"33", 3));
    assert_eq!((-330.0f64).dtoa_shortest(&mut buf), Formatted::Finite(true, b"33", 3));
    assert_eq!((-0.00401f64).dtoa_shortest(&mut buf), Formatted::Finite(true, b"401", -2));

    assert_eq!((-3.0f64).dtoa_embedded(&mut buf), Formatted::Finite(true, b"3", 1));
    let (formatted, opt) = (-0.1f64).dtoa_checked(&mut buf);
    assert_eq!(formatted, Formatted::Finite(true, b"1", 0));
    assert!(opt);
    assert_eq!(f64::NAN.dtoa_checked(&mut buf), (Formatted::Nan, true));
}

#[test]
fn shortest_matches_reference() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut buf = [0; SHORTEST_BUF_LEN];
    for _ in 0..20_000 {
        let v = random_positive(&mut rng);
        let (digits, exp) = convert_shortest(v, &mut buf);
        let (want, want_exp) = reference(v);
        assert_eq!(
            (str::from_utf8(digits).unwrap(), exp),
            (want.as_str(), want_exp),
            "value {:e}",
            v,
        );
    }
}

#[test]
fn shortest_matches_reference_in_hard_bands() {
    // the bands where the floating strategy does the real work: around
    // the subnormal floor, under 16, and above 2^128
    let bands = [
        (1u64, f64::MIN_POSITIVE.to_bits()),
        (f64::MIN_POSITIVE.to_bits(), 16.0f64.to_bits()),
        (strategy::INTEGER_MAX.to_bits(), f64::MAX.to_bits()),
        ((2.0f64.powi(1013)).to_bits(), f64::MAX.to_bits()),
    ];
    let mut rng = StdRng::seed_from_u64(0xbad5);
    let mut buf = [0; SHORTEST_BUF_LEN];
    for &(lo, hi) in bands.iter() {
        for _ in 0..10_000 {
            let v = f64::from_bits(rng.gen_range(lo..hi));
            if !v.is_finite() || v == 0.0 {
                continue;
            }
            let (digits, exp) = convert_shortest(v, &mut buf);
            let (want, want_exp) = reference(v);
            assert_eq!(
                (str::from_utf8(digits).unwrap(), exp),
                (want.as_str(), want_exp),
                "value {:e}",
                v,
            );
        }
    }
}

#[test]
fn integer_strategy_powers_of_two() {
    let mut buf = [0; SHORTEST_BUF_LEN];
    for e in 53..128 {
        let base = 2.0f64.powi(e);
        for &v in &[base, decoder::next_up(base), decoder::next_down(base)] {
            if v < strategy::INTEGER_MIN || v >= strategy::INTEGER_MAX {
                continue;
            }
            let (digits, exp) = convert_shortest(v, &mut buf);
            let (want, want_exp) = reference(v);
            assert_eq!(
                (str::from_utf8(digits).unwrap(), exp),
                (want.as_str(), want_exp),
                "value {:e}",
                v,
            );
        }
    }
}

#[test]
fn fixed_strategy_near_powers_of_ten() {
    let mut buf = [0; SHORTEST_BUF_LEN];
    for e in 2..16 {
        let base = 10.0f64.powi(e);
        for &v in &[
            base,
            decoder::next_up(base),
            decoder::next_down(base),
            base - 0.5,
            base + 0.5,
        ] {
            if v < strategy::FIXED_MIN || v >= strategy::INTEGER_MIN {
                continue;
            }
            let (digits, exp) = convert_shortest(v, &mut buf);
            let (want, want_exp) = reference(v);
            assert_eq!(
                (str::from_utf8(digits).unwrap(), exp),
                (want.as_str(), want_exp),
                "value {:e}",
                v,
            );
        }
    }
}

#[test]
fn embedded_round_trips() {
    let mut rng = StdRng::seed_from_u64(0xe3b);
    let mut buf = [0; SHORTEST_BUF_LEN];
    for _ in 0..20_000 {
        let v = random_positive(&mut rng);
        let (digits, exp) = convert_embedded(v, &mut buf);
        assert_eq!(parse_back(digits, exp), v, "value {:e}", v);
        // correct but not necessarily optimal; the narrowed interval
        // still caps the digit count
        assert!(digits.len() <= 18, "value {:e}", v);
    }
}

#[test]
fn checked_flag_is_trustworthy() {
    let mut rng = StdRng::seed_from_u64(0xc4ec);
    let mut buf = [0; SHORTEST_BUF_LEN];
    let mut optimal = 0u32;
    let mut total = 0u32;
    for _ in 0..20_000 {
        let v = random_positive(&mut rng);
        let (digits, exp, opt) = convert_checked(v, &mut buf);
        total += 1;
        if opt {
            optimal += 1;
            assert_eq!(parse_back(digits, exp), v, "value {:e}", v);
            let (want, _) = reference(v);
            assert_eq!(digits.len(), want.len(), "value {:e}", v);
        }
    }
    // the flag is conservative, not vacuous
    assert!(optimal * 10 >= total * 9, "{}/{}", optimal, total);
}

#[test]
fn corrections_are_consistent() {
    let mut buf = [0; SHORTEST_BUF_LEN];
    for i in 0..corrections::LEN {
        let entry = &corrections::ENTRIES[i];
        let v = f64::from_bits(corrections::BITS[i]);

        // the stored digits are the reference answer and round-trip
        assert_eq!(parse_back(entry.digits, entry.exp), v);
        let (want, want_exp) = reference(v);
        assert_eq!((entry.digits, entry.exp), (want.as_bytes(), want_exp));

        // and the uncorrected strategy really does disagree
        let (len, exp) = strategy::floating::convert(v, &mut buf);
        assert_ne!((&buf[..len], exp), (entry.digits, entry.exp), "{:e}", v);

        // the probe finds the entry
        let hit = corrections::search(corrections::BITS[i]).unwrap();
        assert_eq!((hit.digits, hit.exp), (entry.digits, entry.exp));
    }
}

#[test]
fn corrections_search_misses() {
    let mut rng = StdRng::seed_from_u64(0x5ea);
    for _ in 0..20_000 {
        let key = rng.gen::<u64>();
        let hit = corrections::search(key);
        let linear = (0..corrections::LEN).find(|&i| corrections::BITS[i] == key);
        assert_eq!(hit.is_some(), linear.is_some());
    }
}

#[test]
fn hp_product_identity() {
    use num_bigint::BigInt;

    // x * 2^1200 as an exact integer
    fn scaled(x: f64) -> BigInt {
        if x == 0.0 {
            return BigInt::from(0);
        }
        let bits = x.to_bits();
        let neg = bits >> 63 != 0;
        let biased = ((bits >> 52) & decoder::EXP_MASK) as i32;
        let field = bits & decoder::MANT_MASK;
        let (mant, e) = if biased == 0 {
            (field, -1074)
        } else {
            (field | (1 << 52), biased - 1075)
        };
        let m = BigInt::from(mant) << (1200 + e) as usize;
        if neg {
            -m
        } else {
            m
        }
    }

    // the pair keeps the product within two units of its last (106th) bit
    let mut rng = StdRng::seed_from_u64(0x4b);
    for _ in 0..20_000 {
        let x = f64::from_bits(
            (rng.gen_range(723u64..1323) << 52) | (rng.gen::<u64>() & decoder::MANT_MASK),
        );
        let y = f64::from_bits(
            (rng.gen_range(723u64..1323) << 52) | (rng.gen::<u64>() & decoder::MANT_MASK),
        );

        let r = hp::prod(hp::Hp::new(x, 0.0), y);
        let exact = scaled(x) * scaled(y);
        let got = (scaled(r.val) << 1200usize) + (scaled(r.off) << 1200usize);
        let err = if exact >= got { &exact - &got } else { &got - &exact };

        let e = decoder::binary_exponent(r.val);
        let bound = BigInt::from(1) << (2400 + e - 105) as usize;
        assert!(err <= bound, "x={:e} y={:e}", x, y);
    }
}

#[test]
fn hp_scaling_round_trips() {
    let mut rng = StdRng::seed_from_u64(0x10);
    for _ in 0..20_000 {
        let x = random_positive(&mut rng);
        if x > 1e307 {
            continue;
        }
        let mut h = hp::Hp::new(x, 0.0);
        h.mul10();
        h.div10();
        assert!((h.val - x).abs() <= (decoder::next_up(x) - x), "{:e}", x);
    }
}

#[test]
fn round_up_carries() {
    let mut d = *b"1299";
    assert_eq!(strategy::round_up(&mut d), None);
    assert_eq!(&d, b"1300");

    let mut d = *b"999";
    assert_eq!(strategy::round_up(&mut d), Some(b'0'));
    assert_eq!(&d, b"100");

    assert_eq!(strategy::round_up(&mut []), Some(b'1'));
}

#[test]
fn binary_exponent_agrees_with_frexp() {
    // frexp convention: v = f * 2^e with f in [0.5, 1)
    for &(v, e) in &[
        (1.0, 1),
        (0.5, 0),
        (0.1, -3),
        (f64::MAX, 1024),
        (f64::MIN_POSITIVE, -1021),
        (5e-324, -1073),
        (1e300, 997),
    ] {
        assert_eq!(decoder::binary_exponent(v), e, "{:e}", v);
    }
}

#[cfg(feature = "enumerate")]
mod enumerate {
    use super::{parse_back, reference};
    use crate::{corrections, enumerate, strategy, SHORTEST_BUF_LEN};
    use core::str;
    use std::vec::Vec;

    #[test]
    fn level_order_is_a_dense_search_tree() {
        for n in 1..200usize {
            let perm = enumerate::level_order(n);
            // every sorted position appears exactly once
            let mut seen = std::vec![false; n];
            for &p in &perm {
                assert!(!seen[p]);
                seen[p] = true;
            }
            // children preserve search order
            for i in 0..n {
                if 2 * i + 1 < n {
                    assert!(perm[2 * i + 1] < perm[i]);
                }
                if 2 * i + 2 < n {
                    assert!(perm[2 * i + 2] > perm[i]);
                }
            }
        }
    }

    #[test]
    fn shipped_table_is_in_level_order() {
        let mut sorted: Vec<u64> = corrections::BITS.iter().copied().collect();
        sorted.sort_unstable();
        let perm = enumerate::level_order(corrections::LEN);
        for i in 0..corrections::LEN {
            assert_eq!(corrections::BITS[i], sorted[perm[i]]);
        }
    }

    /// Every enumerated candidate either agrees with the reference or is
    /// patched; sampled over the binades that actually contribute.
    #[test]
    fn candidates_are_covered() {
        let mut buf = [0; SHORTEST_BUF_LEN];
        let sample = (-1074..-1040).chain(-300..-290).chain(128..140).chain(1000..1024);
        let mut candidates = 0u32;
        for e in sample {
            for pattern in enumerate::candidates(e) {
                candidates += 1;
                let v = f64::from_bits(pattern);
                let (len, exp) = strategy::floating::convert(v, &mut buf);
                let (want, want_exp) = reference(v);
                let agrees = str::from_utf8(&buf[..len]).unwrap() == want && exp == want_exp;
                if !agrees {
                    let hit = corrections::search(pattern)
                        .unwrap_or_else(|| panic!("uncovered candidate {:e}", v));
                    assert_eq!((hit.digits, hit.exp), (want.as_bytes(), want_exp));
                    assert_eq!(parse_back(hit.digits, hit.exp), v);
                }
            }
        }
        assert!(candidates > 100, "sample produced only {}", candidates);
    }
}
