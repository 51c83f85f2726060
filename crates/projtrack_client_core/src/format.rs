//! Display helpers shared by the screens.

use crate::models::ProjectStatus;

/// Label for a numeric project status; unknown codes read as "All".
pub fn project_status_label(code: i64) -> &'static str {
    ProjectStatus::from_code(code).label()
}

/// `$`-prefixed, comma-grouped, two decimals, with a whole-dollar `.00` dropped.
/// Blank or non-numeric input gives an empty string; `"0"` is `$0`.
pub fn format_money(input: &str) -> String {
    match input.trim().parse::<f64>() {
        Ok(amount) => format_money_value(amount),
        Err(_) => String::new(),
    }
}

pub fn format_money_value(amount: f64) -> String {
    if !amount.is_finite() {
        return String::new();
    }
    // Avoid "$-0" for negative zero and amounts that round to it.
    let fixed = match format!("{:.2}", amount) {
        f if f == "-0.00" => "0.00".to_string(),
        f => f,
    };
    let (int_part, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(d) => ("-", d),
        None => ("", int_part),
    };
    let grouped = group_thousands(digits);
    if frac == "00" {
        format!("${}{}", sign, grouped)
    } else {
        format!("${}{}.{}", sign, grouped, frac)
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Pasted receipt links often lack a scheme; default them to https.
pub fn format_url(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_cover_known_codes() {
        assert_eq!(project_status_label(1), "Ongoing");
        assert_eq!(project_status_label(2), "Completed");
        assert_eq!(project_status_label(3), "Bill Submitted");
        assert_eq!(project_status_label(4), "To Be Submitted");
        assert_eq!(project_status_label(5), "All");
        assert_eq!(project_status_label(-1), "All");
        assert_eq!(project_status_label(42), "All");
    }

    #[test]
    fn money_drops_whole_dollar_cents() {
        assert_eq!(format_money("1000"), "$1,000");
        assert_eq!(format_money("7"), "$7");
        assert_eq!(format_money("1234567"), "$1,234,567");
    }

    #[test]
    fn money_keeps_non_zero_cents() {
        assert_eq!(format_money("1234.5"), "$1,234.50");
        assert_eq!(format_money("1000.5"), "$1,000.50");
        assert_eq!(format_money("999.99"), "$999.99");
        assert_eq!(format_money(" 12.3 "), "$12.30");
    }

    #[test]
    fn money_rounds_to_two_decimals() {
        assert_eq!(format_money_value(1999.999), "$2,000");
        assert_eq!(format_money_value(12.345678), "$12.35");
    }

    #[test]
    fn money_empty_for_blank_zero_and_garbage() {
        assert_eq!(format_money(""), "");
        assert_eq!(format_money("   "), "");
        assert_eq!(format_money("abc"), "");
        assert_eq!(format_money("NaN"), "");
        assert_eq!(format_money("inf"), "");
    }

    #[test]
    fn money_formats_zero_as_zero_dollars() {
        assert_eq!(format_money("0"), "$0");
        assert_eq!(format_money("0.00"), "$0");
        assert_eq!(format_money("-0"), "$0");
        assert_eq!(format_money_value(-0.001), "$0");
    }

    #[test]
    fn money_groups_negative_amounts_after_sign() {
        assert_eq!(format_money_value(-1234.5), "$-1,234.50");
    }

    #[test]
    fn url_gets_https_when_scheme_missing() {
        assert_eq!(format_url("example.com/a.pdf"), "https://example.com/a.pdf");
        assert_eq!(format_url("  http://x.org/r.pdf "), "http://x.org/r.pdf");
        assert_eq!(format_url("HTTPS://X.ORG"), "HTTPS://X.ORG");
        assert_eq!(format_url("   "), "");
    }
}
