pub const YEAR_WIDTH: usize = 4;
pub const MONTH_WIDTH: usize = 2;
pub const DAY_WIDTH: usize = 2;

/// Prepend as many `'0'`s as needed for `s` to be `width` characters long.
///
/// Strings already at or past `width` come back unchanged. The contents are
/// not checked, so `padded_with_zeros("abc", 4)` is `"0abc"`.
pub fn padded_with_zeros(s: &str, width: usize) -> String {
    format!("{s:0>width$}")
}
