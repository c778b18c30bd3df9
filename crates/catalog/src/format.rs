//! Human-readable rendering of catalog values.

/// Render a running time as hours and minutes, e.g. `152` -> `"2h 32m"`
pub fn format_duration(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Render a vote count with thousands separators, e.g. `18243` -> `"18,243"`
pub fn format_votes(votes: u64) -> String {
    let digits = votes.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(152), "2h 32m");
        assert_eq!(format_duration(60), "1h 0m");
        assert_eq!(format_duration(45), "0h 45m");
    }

    #[test]
    fn test_format_votes() {
        assert_eq!(format_votes(0), "0");
        assert_eq!(format_votes(999), "999");
        assert_eq!(format_votes(7201), "7,201");
        assert_eq!(format_votes(1_234_567), "1,234,567");
    }
}
