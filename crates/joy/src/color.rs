/// An opaque CSS colour, `rgb(r, g, b)`.
pub fn color(r: u8, g: u8, b: u8) -> String {
    format!("rgb({r}, {g}, {b})")
}

/// A CSS colour with transparency, `rgba(r, g, b, a)`. `a` is expected in `0..=1`.
pub fn color_alpha(r: u8, g: u8, b: u8, a: f64) -> String {
    format!(
        "rgba({r}, {g}, {b}, {})",
        joy_core::number::fmt_display(a)
    )
}
