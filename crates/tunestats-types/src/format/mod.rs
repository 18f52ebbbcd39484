//! Human-readable rendering of durations and play times.
//!
//! Everything here is pure: the only clock read happens in
//! [`format_relative_time`], which delegates to
//! [`format_relative_time_since`] with `Local::now()`.
//!
//! Wording lives behind the [`Locale`] trait so call sites never branch on
//! grammatical number themselves.

mod duration;
mod locale;
mod relative;

pub use duration::{format_duration, format_duration_long};
pub use locale::{English, Locale, PluralCategory, Polish};
pub use relative::{format_relative_time, format_relative_time_since, parse_timestamp};

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("premium"), "Premium");
        assert_eq!(capitalize("łódź"), "Łódź");
        assert_eq!(capitalize(""), "");
    }
}
