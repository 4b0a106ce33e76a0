//! Case-insensitive natural ordering for command names.
//!
//! Digit runs compare by numeric value ("item2" < "item10") and letters
//! compare ASCII case-insensitively. Names that are equal under those rules
//! ("Bar" / "bar", "v01" / "v1") are tie-broken by their exact bytes so the
//! result is a total order and sorting is deterministic.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Total natural order: case-insensitive natural comparison, then bytes.
pub fn compare(a: &str, b: &str) -> Ordering {
    compare_ignore_case(a, b).then_with(|| a.cmp(b))
}

/// Natural comparison ignoring ASCII case.
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let l_run = take_digits(&mut left);
                let r_run = take_digits(&mut right);
                let ord = compare_digit_runs(&l_run, &r_run);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(l), Some(r)) => {
                let ord = l.to_ascii_lowercase().cmp(&r.to_ascii_lowercase());
                if ord != Ordering::Equal {
                    return ord;
                }
                left.next();
                right.next();
            }
        }
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        run.push(c);
    }
    run
}

/// Compare two digit runs by value without parsing (runs may exceed u64).
fn compare_digit_runs(l: &str, r: &str) -> Ordering {
    let l = l.trim_start_matches('0');
    let r = r.trim_start_matches('0');
    l.len().cmp(&r.len()).then_with(|| l.cmp(r))
}
