pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Whole numbers print without decimals, others with up to two.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        let text = format!("{:.2}", value);
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding() {
        assert_eq!(round_to(66.666, 1), 66.7);
        assert_eq!(round_to(1.004, 2), 1.0);
    }

    #[test]
    fn number_formatting() {
        assert_eq!(format_number(9.0), "9");
        assert_eq!(format_number(4.5), "4.5");
        assert_eq!(format_number(7.25), "7.25");
        assert_eq!(format_number(0.0), "0");
    }
}
