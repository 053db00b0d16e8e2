//! String helpers: padding, fuzzy matching, ordering and lenient parsing

use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::RwLock;
use vet_validation::parse_float_prefix;

static KEYWORD_CACHE: Lazy<RwLock<HashMap<String, Regex>>> = Lazy::new(|| RwLock::new(HashMap::new()));

static POSITIVE_INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[1-9][0-9]*$").expect("integer pattern"));

/// Left-pad `num` with zeros to `width` characters. The sign stays in front.
///
/// ```
/// use vet_core::text::zfill;
/// assert_eq!(zfill(7, 2), "07");
/// assert_eq!(zfill(-7, 3), "-07");
/// assert_eq!(zfill(1234, 2), "1234");
/// ```
pub fn zfill(num: i64, width: usize) -> String {
    if num < 0 {
        format!("-{:0>width$}", num.unsigned_abs(), width = width.saturating_sub(1))
    } else {
        format!("{:0>width$}", num, width = width)
    }
}

/// Case-insensitive subsequence match: every character of `keyword` must
/// appear in `target` in order. An empty keyword matches anything.
pub fn keyword_compare(keyword: &str, target: &str) -> bool {
    if keyword.is_empty() {
        return true;
    }

    if let Ok(cache) = KEYWORD_CACHE.read() {
        if let Some(regex) = cache.get(keyword) {
            return regex.is_match(target);
        }
    }

    let pattern = keyword
        .chars()
        .map(|c| regex::escape(&c.to_string()))
        .collect::<Vec<_>>()
        .join(".*");
    let regex = match Regex::new(&format!("(?i){}", pattern)) {
        Ok(regex) => regex,
        // escaped input always compiles; a size-limit failure simply doesn't match
        Err(_) => return false,
    };
    let matched = regex.is_match(target);

    if let Ok(mut cache) = KEYWORD_CACHE.write() {
        cache.insert(keyword.to_string(), regex);
    }
    matched
}

/// Order two strings, comparing by numeric value when both are plain
/// positive integers without a leading zero (`"9" < "10"`), lexically otherwise
/// (`"019" < "12"`).
pub fn numeric_compare(a: &str, b: &str) -> Ordering {
    if POSITIVE_INTEGER.is_match(a) && POSITIVE_INTEGER.is_match(b) {
        // without leading zeros, a longer digit string is a bigger number
        a.len().cmp(&b.len()).then_with(|| a.cmp(b))
    } else {
        a.cmp(b)
    }
}

/// Parse the leading integer of `value` in `radix` (2..=36), ignoring
/// surrounding whitespace and anything after the digits. Radix 16 accepts a
/// `0x` prefix. Returns `fallback` when no digits are found or the number
/// does not fit in an `i64`.
pub fn safe_parse_int(value: &str, fallback: Option<i64>, radix: u32) -> Option<i64> {
    if !(2..=36).contains(&radix) {
        return fallback;
    }

    let text = value.trim_start();
    let (negative, text) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let text = if radix == 16 {
        text.strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text)
    } else {
        text
    };

    let end = text
        .char_indices()
        .find(|(_, c)| !c.is_digit(radix))
        .map(|(index, _)| index)
        .unwrap_or(text.len());
    if end == 0 {
        return fallback;
    }

    let digits = &text[..end];
    let parsed = if negative {
        i64::from_str_radix(&format!("-{}", digits), radix)
    } else {
        i64::from_str_radix(digits, radix)
    };
    parsed.ok().or(fallback)
}

/// Parse the leading decimal number of `value`, or return `fallback`
pub fn safe_parse_float(value: &str, fallback: f64) -> f64 {
    parse_float_prefix(value)
        .filter(|num| num.is_finite())
        .unwrap_or(fallback)
}

/// Human readable byte size, e.g. `1.5 KiB` or (with `si`) `1.5 kB`
pub fn readable_size(bytes: i64, si: bool, decimals: usize) -> String {
    let thresh = if si { 1000.0 } else { 1024.0 };
    let mut size = bytes as f64;
    if size.abs() < thresh {
        return format!("{} B", bytes);
    }

    let units: [&str; 8] = if si {
        ["kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"]
    } else {
        ["KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB", "YiB"]
    };
    let scale = 10f64.powi(decimals as i32);

    let mut unit = 0;
    size /= thresh;
    while (size.abs() * scale).round() / scale >= thresh && unit < units.len() - 1 {
        size /= thresh;
        unit += 1;
    }

    format!("{:.*} {}", decimals, size, units[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zfill() {
        assert_eq!(zfill(5, 3), "005");
        assert_eq!(zfill(0, 0), "0");
        assert_eq!(zfill(-5, 1), "-5");
    }

    #[test]
    fn test_keyword_compare() {
        assert!(keyword_compare("", "anything"));
        assert!(keyword_compare("abc", "A big Cat"));
        assert!(keyword_compare("a.c", "xa.yc"));
        assert!(!keyword_compare("a.c", "abc"));
        assert!(!keyword_compare("cba", "abc"));

        // cached pattern gives the same answer
        assert!(keyword_compare("abc", "aXbXc"));
        assert!(!keyword_compare("abc", "ab"));
    }

    #[test]
    fn test_numeric_compare() {
        assert_eq!(numeric_compare("9", "10"), Ordering::Less);
        assert_eq!(numeric_compare("456", "123"), Ordering::Greater);
        assert_eq!(numeric_compare("019", "12"), Ordering::Less);
        assert_eq!(numeric_compare("123a", "13"), Ordering::Less);
        assert_eq!(numeric_compare("42", "42"), Ordering::Equal);

        let mut names = vec!["10", "9", "100", "09"];
        names.sort_by(|a, b| numeric_compare(a, b));
        assert_eq!(names, vec!["09", "9", "10", "100"]);
    }

    #[test]
    fn test_safe_parse_int() {
        assert_eq!(safe_parse_int("42", None, 10), Some(42));
        assert_eq!(safe_parse_int("  -17px", None, 10), Some(-17));
        assert_eq!(safe_parse_int("3.9", None, 10), Some(3));
        assert_eq!(safe_parse_int("ff", None, 16), Some(255));
        assert_eq!(safe_parse_int("0x1A", None, 16), Some(26));
        assert_eq!(safe_parse_int("101", None, 2), Some(5));
        assert_eq!(safe_parse_int("abc", Some(-1), 10), Some(-1));
        assert_eq!(safe_parse_int("", None, 10), None);
        assert_eq!(safe_parse_int("99999999999999999999", Some(0), 10), Some(0));
        assert_eq!(safe_parse_int("12", Some(0), 1), Some(0));
    }

    #[test]
    fn test_safe_parse_float() {
        assert_eq!(safe_parse_float("3.14abc", 0.0), 3.14);
        assert_eq!(safe_parse_float(" .5", 0.0), 0.5);
        assert_eq!(safe_parse_float("-2e3", 0.0), -2000.0);
        assert_eq!(safe_parse_float("abc", 1.5), 1.5);
        assert_eq!(safe_parse_float("1e999", 7.0), 7.0);
    }

    #[test]
    fn test_readable_size() {
        assert_eq!(readable_size(500, false, 1), "500 B");
        assert_eq!(readable_size(1024, false, 1), "1.0 KiB");
        assert_eq!(readable_size(1536, false, 1), "1.5 KiB");
        assert_eq!(readable_size(1500, true, 2), "1.50 kB");
        assert_eq!(readable_size(1_048_576, false, 0), "1 MiB");
        assert_eq!(readable_size(-2048, false, 1), "-2.0 KiB");
    }
}
