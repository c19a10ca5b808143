//! Text formatting utilities for page and space display

use strum::IntoEnumIterator;

/// Binary prefix step between consecutive size units
const UNIT_SIZE: f64 = 1024.0;

/// Precision used by [`format_bytes`]
pub const DEFAULT_BYTE_PRECISION: i32 = 2;

/// Size units in ascending order, starting at kilobytes.
///
/// Byte counts are always reported in at least KB, so there is no plain
/// byte unit.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
pub enum SizeUnit {
    #[strum(serialize = "KB")]
    Kb,
    #[strum(serialize = "MB")]
    Mb,
    #[strum(serialize = "GB")]
    Gb,
    #[strum(serialize = "TB")]
    Tb,
    #[strum(serialize = "PB")]
    Pb,
    #[strum(serialize = "EB")]
    Eb,
    #[strum(serialize = "ZB")]
    Zb,
    #[strum(serialize = "YB")]
    Yb,
}

impl SizeUnit {
    /// Unit at `index` in the table, clamped to the largest unit.
    pub fn from_index(index: usize) -> Self {
        Self::iter().nth(index).unwrap_or(SizeUnit::Yb)
    }

    /// Position in the unit table (KB = 0)
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// `<singular>` for exactly one, `<singular>s` otherwise
fn pluralize(count: i64, singular: &str) -> String {
    if count == 1 {
        singular.to_string()
    } else {
        format!("{singular}s")
    }
}

/// Formats a space member count, e.g. `"1 member"` or `"12 members"`.
///
/// No validation is performed: `0` and negative counts are plural.
///
/// # Examples
///
/// ```
/// use pagefmt::core::formatting::format_member_count;
///
/// assert_eq!(format_member_count(1), "1 member");
/// assert_eq!(format_member_count(3), "3 members");
/// ```
pub fn format_member_count(count: i64) -> String {
    format!("{count} {}", pluralize(count, "member"))
}

/// Formats a byte count with the default precision of two decimals.
///
/// # Examples
///
/// ```
/// use pagefmt::core::formatting::format_bytes;
///
/// assert_eq!(format_bytes(0.0), "0.0 KB");
/// assert_eq!(format_bytes(500.0), "0.49 KB");
/// assert_eq!(format_bytes(1_048_576.0), "1.00 MB");
/// ```
pub fn format_bytes(bytes: f64) -> String {
    format_bytes_with_precision(bytes, DEFAULT_BYTE_PRECISION)
}

/// Formats a byte count as a human-readable size in base-1024 units.
///
/// The smallest unit is KB, so anything under a kilobyte is shown as a
/// fraction of one. A zero count is always the literal `"0.0 KB"`, whatever
/// the requested precision. Negative precision is treated as zero, and sizes
/// beyond the unit table are expressed in YB.
pub fn format_bytes_with_precision(bytes: f64, decimal_places: i32) -> String {
    if bytes == 0.0 {
        return "0.0 KB".to_string();
    }

    let precision = usize::try_from(decimal_places).unwrap_or(0);
    let kilobytes = bytes / UNIT_SIZE;

    // log2 is exact for powers of two, so 1024^n lands on the right unit
    let exponent = (kilobytes.log2() / 10.0).floor();
    let unit = if exponent.is_nan() || exponent <= 0.0 {
        SizeUnit::Kb
    } else {
        SizeUnit::from_index(exponent as usize)
    };

    if exponent > SizeUnit::Yb.index() as f64 {
        tracing::debug!(bytes, exponent, "Size exceeds unit table, clamping to YB");
    }

    let scaled = kilobytes / UNIT_SIZE.powi(unit.index() as i32);
    format!("{} {unit}", to_fixed(scaled, precision))
}

/// Most fractional digits an `f64` can have in its exact decimal expansion
const MAX_EXACT_DIGITS: usize = 1074;

/// Fixed-point text of `value` with ties rounded away from zero.
///
/// `{:.N}` rounds exact ties to even (`2.5` -> `"2"`), which mislabels the
/// power-of-two sizes common here. Rounding is done on the exact decimal
/// expansion of the float, so `0.125` -> `"0.13"` but `1.005` (stored as
/// 1.00499...) -> `"1.00"`.
fn to_fixed(value: f64, precision: usize) -> String {
    if !value.is_finite() || precision >= MAX_EXACT_DIGITS {
        return format!("{value:.precision$}");
    }

    let exact = format!("{:.digits$}", value.abs(), digits = MAX_EXACT_DIGITS);
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(precision))
        .collect();

    if frac_part.as_bytes().get(precision).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let int_len = digits.len() - precision;
    let mut fixed = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        fixed.push('-');
    }
    fixed.extend(digits[..int_len].iter().map(|&d| char::from(d)));
    if precision > 0 {
        fixed.push('.');
        fixed.extend(digits[int_len..].iter().map(|&d| char::from(d)));
    }
    fixed
}

/// Upper-cases the first character and leaves the rest untouched.
///
/// Works on `char`s rather than bytes, so multi-byte first characters are
/// handled and an empty string stays empty.
pub fn capitalize_first_char(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_count_singular() {
        assert_eq!(format_member_count(1), "1 member");
    }

    #[test]
    fn test_member_count_plural() {
        assert_eq!(format_member_count(0), "0 members");
        assert_eq!(format_member_count(2), "2 members");
        assert_eq!(format_member_count(1500), "1500 members");
    }

    #[test]
    fn test_member_count_negative() {
        assert_eq!(format_member_count(-3), "-3 members");
        assert_eq!(format_member_count(-1), "-1 members");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(2, "page"), "pages");
        assert_eq!(pluralize(1, "page"), "page");
        assert_eq!(pluralize(0, "page"), "pages");
    }

    #[test]
    fn test_format_bytes_zero_ignores_precision() {
        assert_eq!(format_bytes(0.0), "0.0 KB");
        assert_eq!(format_bytes_with_precision(0.0, 5), "0.0 KB");
        assert_eq!(format_bytes_with_precision(0.0, -1), "0.0 KB");
    }

    #[test]
    fn test_format_bytes_sub_kilobyte() {
        assert_eq!(format_bytes(500.0), "0.49 KB");
        assert_eq!(format_bytes(1.0), "0.00 KB");
    }

    #[test]
    fn test_format_bytes_units() {
        assert_eq!(format_bytes(1024.0), "1.00 KB");
        assert_eq!(format_bytes(1536.0), "1.50 KB");
        assert_eq!(format_bytes_with_precision(1_048_576.0, 1), "1.0 MB");
        assert_eq!(format_bytes(1_073_741_824.0), "1.00 GB");
        assert_eq!(format_bytes(1_099_511_627_776.0), "1.00 TB");
    }

    #[test]
    fn test_format_bytes_just_below_next_unit() {
        assert_eq!(format_bytes(1_048_575.0), "1024.00 KB");
    }

    #[test]
    fn test_format_bytes_fractional_input() {
        assert_eq!(format_bytes(2048.5), "2.00 KB");
    }

    #[test]
    fn test_format_bytes_negative_precision_clamped() {
        assert_eq!(format_bytes_with_precision(1800.0, -3), "2 KB");
        assert_eq!(format_bytes_with_precision(1800.0, 0), "2 KB");
    }

    #[test]
    fn test_format_bytes_rounds_ties_up() {
        assert_eq!(format_bytes(128.0), "0.13 KB");
        assert_eq!(format_bytes_with_precision(2560.0, 0), "3 KB");
        assert_eq!(format_bytes_with_precision(3584.0, 0), "4 KB");
        assert_eq!(format_bytes_with_precision(1536.0 * 1024.0, 0), "2 MB");
        assert_eq!(format_bytes_with_precision(2.5 * 1024.0 * 1024.0, 0), "3 MB");
    }

    #[test]
    fn test_to_fixed_ties_and_near_ties() {
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(0.375, 2), "0.38");
        // 1.005 is stored just below the tie
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(-2.5, 0), "-3");
    }

    #[test]
    fn test_to_fixed_carries() {
        assert_eq!(to_fixed(9.995, 1), "10.0");
        assert_eq!(to_fixed(999.96, 1), "1000.0");
        assert_eq!(to_fixed(0.5, 0), "1");
        assert_eq!(to_fixed(0.0, 3), "0.000");
    }

    #[test]
    fn test_format_bytes_clamps_beyond_yottabytes() {
        // 1024^9 bytes is 1024 YB
        let bytes = UNIT_SIZE.powi(9);
        assert_eq!(format_bytes(bytes), "1024.00 YB");
        assert_eq!(format_bytes(f64::INFINITY), "inf YB");
    }

    #[test]
    fn test_format_bytes_yottabyte() {
        assert_eq!(format_bytes(UNIT_SIZE.powi(8)), "1.00 YB");
    }

    #[test]
    fn test_size_unit_table_order() {
        let names: Vec<String> = SizeUnit::iter().map(|u| u.to_string()).collect();
        assert_eq!(names, ["KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"]);
        assert_eq!(SizeUnit::Gb.as_ref(), "GB");
    }

    #[test]
    fn test_size_unit_from_index_clamps() {
        assert_eq!(SizeUnit::from_index(0), SizeUnit::Kb);
        assert_eq!(SizeUnit::from_index(7), SizeUnit::Yb);
        assert_eq!(SizeUnit::from_index(42), SizeUnit::Yb);
    }

    #[test]
    fn test_capitalize_empty() {
        assert_eq!(capitalize_first_char(""), "");
    }

    #[test]
    fn test_capitalize_basic() {
        assert_eq!(capitalize_first_char("abc"), "Abc");
        assert_eq!(capitalize_first_char("Abc"), "Abc");
        assert_eq!(capitalize_first_char("a"), "A");
    }

    #[test]
    fn test_capitalize_keeps_rest() {
        assert_eq!(capitalize_first_char("hELLO world"), "HELLO world");
    }

    #[test]
    fn test_capitalize_multibyte() {
        assert_eq!(capitalize_first_char("élan"), "Élan");
        assert_eq!(capitalize_first_char("ßtraße"), "SStraße");
        assert_eq!(capitalize_first_char("1abc"), "1abc");
    }
}
