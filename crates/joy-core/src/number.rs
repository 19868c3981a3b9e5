//! Number formatting shared by transform strings and SVG attributes.

use std::fmt::Write as _;

pub fn fmt(v: f64) -> String {
    let mut out = String::new();
    fmt_into(&mut out, v);
    out
}

pub fn fmt_display(v: f64) -> FmtDisplay {
    FmtDisplay(v)
}

/// `Display` adapter for [`fmt`], usable in `write!` without an intermediate allocation.
#[derive(Debug, Clone, Copy)]
pub struct FmtDisplay(f64);

impl std::fmt::Display for FmtDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", normalize(self.0))
    }
}

pub fn fmt_into(out: &mut String, v: f64) {
    // Shortest round-trippable decimal form, whole numbers without a trailing `.0`.
    let _ = write!(out, "{}", normalize(v));
}

fn normalize(v: f64) -> f64 {
    if !v.is_finite() {
        return 0.0;
    }
    let mut v = v;
    let nearest = v.round();
    if (v - nearest).abs() < 1e-9 {
        v = nearest;
    }
    if v == -0.0 {
        v = 0.0;
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_matches_expected() {
        assert_eq!(fmt(f64::NAN), "0");
        assert_eq!(fmt(f64::INFINITY), "0");
        assert_eq!(fmt(-0.0), "0");
        assert_eq!(fmt(0.0), "0");
        assert_eq!(fmt(50.0), "50");
        assert_eq!(fmt(-150.0), "-150");
        assert_eq!(fmt(0.5), "0.5");
        assert_eq!(fmt(0.97), "0.97");
        assert_eq!(fmt(90.00000000000001), "90");
    }

    #[test]
    fn fmt_display_matches_fmt() {
        for v in [f64::NAN, -0.0, 1.0, -1.0, 1234.5678, 0.1 + 0.2, 1e-12] {
            assert_eq!(fmt_display(v).to_string(), fmt(v));
        }
    }
}
