//! Gold amounts and their display form.

/// An amount of gold pieces.
pub type Gold = u64;

/// Format a gold amount with dot thousands separators and a `gp` suffix.
///
/// # Examples
///
/// ```rust
/// use imbuement_planner::gold::format_gold;
///
/// assert_eq!(format_gold(52_500), "52.500 gp");
/// assert_eq!(format_gold(999), "999 gp");
/// ```
pub fn format_gold(gold: Gold) -> String {
    let digits = gold.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out.push_str(" gp");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_zero() {
        assert_eq!(format_gold(0), "0 gp");
    }

    #[test]
    fn test_format_grouping() {
        assert_eq!(format_gold(1_000), "1.000 gp");
        assert_eq!(format_gold(100_000), "100.000 gp");
        assert_eq!(format_gold(1_234_567), "1.234.567 gp");
    }
}
