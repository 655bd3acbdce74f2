use chrono::NaiveDate;

/// Formats a number the way an en-US dashboard shows it: thousands separators and
/// at most three fraction digits, trailing zeros dropped (`12500` -> `12,500`,
/// `4480.25` -> `4,480.25`).
pub fn format_number(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    let fixed = format!("{:.3}", v.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let is_zero = int_part.bytes().all(|b| b == b'0') && frac.is_empty();
    let sign = if v.is_sign_negative() && !is_zero { "-" } else { "" };
    if frac.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac}")
    }
}

/// Percentages keep their natural precision (`45` -> `45%`, `37.5` -> `37.5%`).
pub fn format_percent(v: f64) -> String {
    format!("{v}%")
}

/// Whole-number score with ties rounded away from zero (`12.5` -> `13`).
pub fn format_score(v: f64) -> String {
    let r = if v < 0.0 { (v - 0.5).ceil() } else { (v + 0.5).floor() };
    format!("{}", r + 0.0)
}

/// Long-form date, e.g. `June 3, 2024`.
pub fn format_long_date(d: NaiveDate) -> String {
    d.format("%B %-d, %Y").to_string()
}
