//! Decimal number formatting shared by the describer and program tokens.

pub const DEFAULT_MAX_FRACTION_DIGITS: usize = 10;
pub const INFINITY_SYMBOL: &str = "∞";
pub const NEG_INFINITY_SYMBOL: &str = "-∞";

/// Formats and parses numbers in the calculator's decimal style.
///
/// Numbers are written with `.` as decimal separator, at most
/// `max_fraction_digits` fractional digits (trailing zeros dropped) and the
/// integer part grouped by thousands. NaN prints as `nan_symbol`.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberFormatter {
    pub decimal_separator: char,
    pub grouping_separator: Option<char>,
    pub max_fraction_digits: usize,
    pub nan_symbol: String,
}

impl Default for NumberFormatter {
    fn default() -> Self {
        NumberFormatter {
            decimal_separator: '.',
            grouping_separator: Some(' '),
            max_fraction_digits: DEFAULT_MAX_FRACTION_DIGITS,
            nan_symbol: "Error".to_string(),
        }
    }
}

impl NumberFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return self.nan_symbol.clone();
        }
        if value.is_infinite() {
            let symbol = if value > 0.0 {
                INFINITY_SYMBOL
            } else {
                NEG_INFINITY_SYMBOL
            };
            return symbol.to_string();
        }

        let fixed = format!("{:.*}", self.max_fraction_digits, value);
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((int_part, frac)) => (int_part, frac.trim_end_matches('0')),
            None => (fixed.as_str(), ""),
        };
        let (negative, digits) = match int_part.strip_prefix('-') {
            Some(digits) => (true, digits),
            None => (false, int_part),
        };
        // -0.00000000001 rounds to zero and must not print as "-0".
        let negative = negative && (digits.bytes().any(|b| b != b'0') || !frac_part.is_empty());

        let mut out = String::with_capacity(fixed.len() + digits.len() / 3 + 1);
        if negative {
            out.push('-');
        }
        self.push_grouped(&mut out, digits);
        if !frac_part.is_empty() {
            out.push(self.decimal_separator);
            out.push_str(frac_part);
        }
        out
    }

    fn push_grouped(&self, out: &mut String, digits: &str) {
        let Some(separator) = self.grouping_separator else {
            out.push_str(digits);
            return;
        };
        let len = digits.len();
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(separator);
            }
            out.push(c);
        }
    }

    /// Parses text written in this style. Returns `None` for anything that is
    /// not a plain decimal number: exponents, words and empty input included.
    pub fn parse(&self, text: &str) -> Option<f64> {
        let text = text.trim();
        if !self.nan_symbol.is_empty() && text == self.nan_symbol {
            return Some(f64::NAN);
        }
        match text {
            "∞" | "+∞" => return Some(f64::INFINITY),
            "-∞" => return Some(f64::NEG_INFINITY),
            _ => {}
        }

        let (negative, body) = match text.strip_prefix('-') {
            Some(body) => (true, body),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };

        let mut normalized = String::with_capacity(body.len() + 1);
        if negative {
            normalized.push('-');
        }
        let mut seen_digit = false;
        let mut seen_decimal = false;
        for c in body.chars() {
            if c.is_ascii_digit() {
                seen_digit = true;
                normalized.push(c);
            } else if c == self.decimal_separator && !seen_decimal {
                seen_decimal = true;
                normalized.push('.');
            } else if Some(c) == self.grouping_separator && seen_digit && !seen_decimal {
                continue;
            } else {
                return None;
            }
        }
        if !seen_digit {
            return None;
        }
        normalized.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_trailing_zeros() {
        let f = NumberFormatter::new();
        assert_eq!(f.format(2.0), "2");
        assert_eq!(f.format(2.5), "2.5");
        assert_eq!(f.format(-0.125), "-0.125");
    }

    #[test]
    fn caps_fraction_digits() {
        let f = NumberFormatter::new();
        assert_eq!(f.format(1.0 / 3.0), "0.3333333333");
        assert_eq!(f.format(std::f64::consts::PI), "3.1415926536");
        assert_eq!(f.format(-1e-12), "0");
    }

    #[test]
    fn groups_thousands() {
        let f = NumberFormatter::new();
        assert_eq!(f.format(1234567.5), "1 234 567.5");
        assert_eq!(f.format(-1000.0), "-1 000");
        assert_eq!(f.format(999.0), "999");

        let plain = NumberFormatter {
            grouping_separator: None,
            ..NumberFormatter::default()
        };
        assert_eq!(plain.format(1234567.0), "1234567");
    }

    #[test]
    fn special_values() {
        let f = NumberFormatter::new();
        assert_eq!(f.format(f64::NAN), "Error");
        assert_eq!(f.format(f64::INFINITY), "∞");
        assert_eq!(f.format(f64::NEG_INFINITY), "-∞");
        assert!(f.parse("Error").unwrap().is_nan());
        assert_eq!(f.parse("-∞"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn parses_formatted_numbers() {
        let f = NumberFormatter::new();
        assert_eq!(f.parse("42"), Some(42.0));
        assert_eq!(f.parse("-3.25"), Some(-3.25));
        assert_eq!(f.parse("1 234 567.5"), Some(1234567.5));
        assert_eq!(f.parse(".5"), Some(0.5));
        assert_eq!(f.parse(&f.format(0.1 + 0.2)), Some(0.3));
    }

    #[test]
    fn rejects_non_numbers() {
        let f = NumberFormatter::new();
        for text in ["", "-", "M", "1e5", "inf", "nan", "1.2.3", "12a", ",5"] {
            assert_eq!(f.parse(text), None, "{text:?}");
        }
    }
}
