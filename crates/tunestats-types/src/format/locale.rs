//! Locale wording for relative times.

/// Grammatical number a count selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralCategory {
    /// Exactly one
    One,
    /// Small counts in Slavic languages (2-4)
    Few,
    /// Everything else
    Many,
}

/// Phrases used by the relative-time formatter.
///
/// Implementors only pick words; all arithmetic stays in the formatter.
pub trait Locale {
    /// Grammatical number for `n`.
    fn plural_category(&self, n: u64) -> PluralCategory;

    /// Under one minute.
    fn just_now(&self) -> String;

    fn minutes_ago(&self, minutes: u64) -> String;

    fn hours_ago(&self, hours: u64) -> String;

    fn days_ago(&self, days: u64) -> String;

    /// Day of month plus abbreviated month name (`month` is 1-12), no year.
    fn short_date(&self, day: u32, month: u32) -> String;
}

const POLISH_MONTHS: [&str; 12] =
    ["sty", "lut", "mar", "kwi", "maj", "cze", "lip", "sie", "wrz", "paź", "lis", "gru"];

const ENGLISH_MONTHS: [&str; 12] =
    ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

fn month_name(names: &'static [&'static str; 12], month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| names.get(i as usize))
        .copied()
        .unwrap_or("?")
}

/// Polish, the application's default.
#[derive(Debug, Clone, Copy, Default)]
pub struct Polish;

impl Locale for Polish {
    fn plural_category(&self, n: u64) -> PluralCategory {
        match n {
            1 => PluralCategory::One,
            2..=4 => PluralCategory::Few,
            _ => PluralCategory::Many,
        }
    }

    fn just_now(&self) -> String {
        "Przed chwilą".to_string()
    }

    fn minutes_ago(&self, minutes: u64) -> String {
        format!("{} min temu", minutes)
    }

    fn hours_ago(&self, hours: u64) -> String {
        let noun = match self.plural_category(hours) {
            PluralCategory::One => "godzinę",
            PluralCategory::Few => "godziny",
            PluralCategory::Many => "godzin",
        };
        format!("{} {} temu", hours, noun)
    }

    fn days_ago(&self, days: u64) -> String {
        let noun = match self.plural_category(days) {
            PluralCategory::One => "dzień",
            PluralCategory::Few | PluralCategory::Many => "dni",
        };
        format!("{} {} temu", days, noun)
    }

    fn short_date(&self, day: u32, month: u32) -> String {
        format!("{} {}", day, month_name(&POLISH_MONTHS, month))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct English;

impl Locale for English {
    fn plural_category(&self, n: u64) -> PluralCategory {
        if n == 1 {
            PluralCategory::One
        } else {
            PluralCategory::Many
        }
    }

    fn just_now(&self) -> String {
        "just now".to_string()
    }

    fn minutes_ago(&self, minutes: u64) -> String {
        format!("{} min ago", minutes)
    }

    fn hours_ago(&self, hours: u64) -> String {
        match self.plural_category(hours) {
            PluralCategory::One => format!("{} hour ago", hours),
            _ => format!("{} hours ago", hours),
        }
    }

    fn days_ago(&self, days: u64) -> String {
        match self.plural_category(days) {
            PluralCategory::One => format!("{} day ago", days),
            _ => format!("{} days ago", days),
        }
    }

    fn short_date(&self, day: u32, month: u32) -> String {
        format!("{} {}", month_name(&ENGLISH_MONTHS, month), day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polish_hour_forms() {
        assert_eq!(Polish.hours_ago(1), "1 godzinę temu");
        assert_eq!(Polish.hours_ago(2), "2 godziny temu");
        assert_eq!(Polish.hours_ago(4), "4 godziny temu");
        assert_eq!(Polish.hours_ago(5), "5 godzin temu");
        assert_eq!(Polish.hours_ago(23), "23 godzin temu");
    }

    #[test]
    fn test_polish_day_forms() {
        assert_eq!(Polish.days_ago(1), "1 dzień temu");
        assert_eq!(Polish.days_ago(3), "3 dni temu");
        assert_eq!(Polish.days_ago(6), "6 dni temu");
    }

    #[test]
    fn test_short_dates() {
        assert_eq!(Polish.short_date(5, 1), "5 sty");
        assert_eq!(Polish.short_date(31, 10), "31 paź");
        assert_eq!(English.short_date(5, 12), "Dec 5");
    }

    #[test]
    fn test_english_forms() {
        assert_eq!(English.hours_ago(1), "1 hour ago");
        assert_eq!(English.hours_ago(3), "3 hours ago");
        assert_eq!(English.days_ago(1), "1 day ago");
    }
}
