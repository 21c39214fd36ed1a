//! Display formatting for normalized cell values.

use contracts::shared::list_view::filter::parse_timestamp;

/// Форматирует timestamp как `DD.MM.YYYY HH:MM`.
/// Дата без времени остаётся `DD.MM.YYYY`; нераспознанный текст возвращается как есть.
pub fn format_datetime(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.len() <= 10 {
        return format_date(trimmed);
    }
    match parse_timestamp(trimmed) {
        Some(ts) => ts.format("%d.%m.%Y %H:%M").to_string(),
        None => value.to_string(),
    }
}

/// Форматирует ISO дату (или дату из timestamp) как `DD.MM.YYYY`
pub fn format_date(value: &str) -> String {
    let date_part = value.split('T').next().unwrap_or(value);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    value.to_string()
}

/// Thousands-separated number with the given decimals; text that is not a
/// number is returned unchanged.
pub fn format_number(value: &str, decimals: usize) -> String {
    let Ok(number) = value.trim().parse::<f64>() else {
        return value.to_string();
    };
    let formatted = format!("{:.*}", decimals, number.abs());
    let (integer, fraction) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, c) in integer.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let mut result: String = grouped.chars().rev().collect();
    if number < 0.0 {
        result.insert(0, '-');
    }
    match fraction {
        Some(f) => format!("{}.{}", result, f),
        None => result,
    }
}

pub fn format_money(value: &str) -> String {
    if value.trim().is_empty() {
        return String::new();
    }
    format!("${}", format_number(value, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15.03.2024 14:02");
        assert_eq!(format_datetime("2024-03-15"), "15.03.2024");
        assert_eq!(format_datetime(""), "");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("sometime next week"), "sometime next week");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number("1234567", 0), "1,234,567");
        assert_eq!(format_number("-1234.5", 2), "-1,234.50");
        assert_eq!(format_number("n/a", 0), "n/a");
        assert_eq!(format_money("450000"), "$450,000");
        assert_eq!(format_money(""), "");
    }
}
