//! Gregorian date formatting with Unicode (LDML) date patterns
//!
//! Supported fields:
//! - `y`, `yy`, `yyyy` - year (`yy` is the two low digits)
//! - `M`, `MM` - month number; `MMM`, `MMMM`, `MMMMM` - month name
//! - `d`, `dd` - day of month
//! - `H`, `HH` - hour 0-23; `h`, `hh` - hour 1-12; `a` - AM/PM
//! - `m`, `mm` - minute; `s`, `ss` - second; `S...` - fraction of a second
//! - `E`..`EEEEE` - weekday name
//! - `Z`..`ZZZZZ` - UTC offset
//!
//! Text between single quotes is copied literally, `''` is a quote.
//! Numeric fields are zero padded to the number of repeated letters.

use chrono::{DateTime, Datelike, Offset, TimeZone, Timelike};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DateFormatError {
    #[error("Unsupported pattern field '{field}' repeated {count} times")]
    UnsupportedField { field: char, count: usize },

    #[error("Unterminated quoted literal in pattern '{0}'")]
    UnterminatedQuote(String),
}

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

#[derive(Debug, PartialEq)]
enum Token {
    Field(char, usize),
    Literal(String),
}

/// Format `date` in the Gregorian calendar using an LDML pattern such as
/// `"yyyy-MM-dd HH:mm:ss.SSS"`.
pub fn gregorian_date_string<Tz: TimeZone>(
    date: &DateTime<Tz>,
    pattern: &str,
) -> Result<String, DateFormatError> {
    let mut out = String::with_capacity(pattern.len() + 8);
    for token in tokenize(pattern)? {
        match token {
            Token::Literal(text) => out.push_str(&text),
            Token::Field(field, count) => format_field(&mut out, date, field, count)?,
        }
    }
    Ok(out)
}

fn tokenize(pattern: &str) -> Result<Vec<Token>, DateFormatError> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\'' {
            // '' outside a quote is an escaped quote
            if chars.peek() == Some(&'\'') {
                chars.next();
                literal.push('\'');
                continue;
            }
            loop {
                match chars.next() {
                    Some('\'') if chars.peek() == Some(&'\'') => {
                        chars.next();
                        literal.push('\'');
                    }
                    Some('\'') => break,
                    Some(inner) => literal.push(inner),
                    None => return Err(DateFormatError::UnterminatedQuote(pattern.to_string())),
                }
            }
        } else if c.is_ascii_alphabetic() {
            let mut count = 1;
            while chars.peek() == Some(&c) {
                chars.next();
                count += 1;
            }
            if !literal.is_empty() {
                tokens.push(Token::Literal(std::mem::take(&mut literal)));
            }
            tokens.push(Token::Field(c, count));
        } else {
            literal.push(c);
        }
    }

    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }
    Ok(tokens)
}

fn push_padded(out: &mut String, value: i64, width: usize) {
    if value < 0 {
        out.push('-');
    }
    out.push_str(&format!("{:0width$}", value.unsigned_abs(), width = width));
}

fn format_field<Tz: TimeZone>(
    out: &mut String,
    date: &DateTime<Tz>,
    field: char,
    count: usize,
) -> Result<(), DateFormatError> {
    match (field, count) {
        ('y', 2) => push_padded(out, i64::from(date.year()).rem_euclid(100), 2),
        ('y', _) => push_padded(out, i64::from(date.year()), count),
        ('M', 1..=2) => push_padded(out, i64::from(date.month()), count),
        ('M', 3) => out.push_str(&MONTHS[date.month0() as usize][..3]),
        ('M', 4) => out.push_str(MONTHS[date.month0() as usize]),
        ('M', 5) => out.push_str(&MONTHS[date.month0() as usize][..1]),
        ('d', 1..=2) => push_padded(out, i64::from(date.day()), count),
        ('H', 1..=2) => push_padded(out, i64::from(date.hour()), count),
        ('h', 1..=2) => push_padded(out, i64::from(date.hour12().1), count),
        ('a', 1..=3) => out.push_str(if date.hour12().0 { "PM" } else { "AM" }),
        ('m', 1..=2) => push_padded(out, i64::from(date.minute()), count),
        ('s', _) => push_padded(out, i64::from(date.second()), count),
        ('S', _) => {
            // Leap seconds carry nanoseconds >= 1e9; clamp to the visible range
            let nanos = date.nanosecond().min(999_999_999);
            let digits = format!("{:09}", nanos);
            if count <= digits.len() {
                out.push_str(&digits[..count]);
            } else {
                out.push_str(&digits);
                out.push_str(&"0".repeat(count - digits.len()));
            }
        }
        ('E', 1..=3) => out.push_str(&WEEKDAYS[date.weekday().num_days_from_monday() as usize][..3]),
        ('E', 4) => out.push_str(WEEKDAYS[date.weekday().num_days_from_monday() as usize]),
        ('E', 5) => out.push_str(&WEEKDAYS[date.weekday().num_days_from_monday() as usize][..1]),
        ('Z', 1..=5) => format_offset(out, date.offset().fix().local_minus_utc(), count),
        _ => return Err(DateFormatError::UnsupportedField { field, count }),
    }
    Ok(())
}

fn format_offset(out: &mut String, seconds: i32, count: usize) {
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.unsigned_abs() / 60;
    let (hours, minutes) = (minutes / 60, minutes % 60);
    match count {
        4 => out.push_str(&format!("GMT{sign}{hours:02}:{minutes:02}")),
        5 => out.push_str(&format!("{sign}{hours:02}:{minutes:02}")),
        _ => out.push_str(&format!("{sign}{hours:02}{minutes:02}")),
    }
}
