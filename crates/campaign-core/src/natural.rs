//! Case-insensitive natural ordering for display labels.
//!
//! Digit runs compare by value (`Step 2` < `Step 10`), whitespace is skipped,
//! and letters compare case-folded to upper case. Digit runs starting with
//! `0` compare digit-by-digit, like the fractional part of a decimal, except
//! at the very start of a string: there leading zeros in front of another
//! digit are dropped, so `010` compares as `10` and `01` equals `1`.

use std::cmp::Ordering;

pub fn compare_ci(a: &str, b: &str) -> Ordering {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (mut i, mut j) = (skip_leading_zeros(&a), skip_leading_zeros(&b));

    loop {
        while i < a.len() && a[i].is_whitespace() {
            i += 1;
        }
        while j < b.len() && b[j].is_whitespace() {
            j += 1;
        }

        let (ca, cb) = match (a.get(i), b.get(j)) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(&ca), Some(&cb)) => (ca, cb),
        };

        if ca.is_ascii_digit() && cb.is_ascii_digit() {
            let end_a = digit_run_end(&a, i);
            let end_b = digit_run_end(&b, j);
            let (run_a, run_b) = (&a[i..end_a], &b[j..end_b]);
            let ord = if ca == '0' || cb == '0' {
                run_a.cmp(run_b)
            } else {
                run_a.len().cmp(&run_b.len()).then_with(|| run_a.cmp(run_b))
            };
            if ord != Ordering::Equal {
                return ord;
            }
            i = end_a;
            j = end_b;
            continue;
        }

        let ord = ca.to_uppercase().cmp(cb.to_uppercase());
        if ord != Ordering::Equal {
            return ord;
        }
        i += 1;
        j += 1;
    }
}

fn skip_leading_zeros(s: &[char]) -> usize {
    let mut i = 0;
    while s.get(i) == Some(&'0') && s.get(i + 1).is_some_and(|c| c.is_ascii_digit()) {
        i += 1;
    }
    i
}

fn digit_run_end(s: &[char], start: usize) -> usize {
    s[start..]
        .iter()
        .position(|c| !c.is_ascii_digit())
        .map_or(s.len(), |n| start + n)
}
