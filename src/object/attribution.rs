use std::fmt;

/// An `Attribution` combines a person's identity (name and e-mail address)
/// with the timestamp for a particular action.
///
/// Attributions appear on the `author` and `committer` lines of a commit.
///
/// The `timestamp` value is in seconds relative to the Unix epoch.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Attribution {
    name: String,
    email: String,
    timestamp: i64,
    tz_offset: i16,
}

/// Smallest accepted time zone offset, in minutes (GMT-12).
pub const MIN_TZ_OFFSET: i16 = -720;

/// Largest accepted time zone offset, in minutes (GMT+14).
pub const MAX_TZ_OFFSET: i16 = 840;

impl Attribution {
    /// Creates a new attribution.
    ///
    /// The name and email are sanitized here: angle brackets and control
    /// characters other than CR are removed, then surrounding whitespace is
    /// trimmed. What is stored is exactly what a commit line will contain.
    ///
    /// Returns `None` if `tz_offset` lies outside GMT-12 to GMT+14.
    pub fn new(name: &str, email: &str, timestamp: i64, tz_offset: i16) -> Option<Attribution> {
        if !(MIN_TZ_OFFSET..=MAX_TZ_OFFSET).contains(&tz_offset) {
            return None;
        }

        Some(Attribution {
            name: sanitize(name),
            email: sanitize(email),
            timestamp,
            tz_offset,
        })
    }

    /// Parses the value of an `author` or `committer` line
    /// (`name <email> timestamp tz`).
    pub fn parse(value: &[u8]) -> Option<Attribution> {
        let value = std::str::from_utf8(value).ok()?;

        let (name, rest) = value.split_once('<')?;
        let name = name.strip_suffix(' ').unwrap_or(name);
        let (email, rest) = rest.split_once("> ")?;
        let (timestamp, tz) = rest.split_once(' ')?;

        let timestamp = timestamp.parse::<i64>().ok()?;
        let tz_offset = parse_tz(tz.as_bytes())?;

        Attribution::new(name, email, timestamp, tz_offset)
    }

    /// Returns the person's human-readable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the person's email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Returns the timezone offset (minutes relative to GMT).
    pub fn tz_offset(&self) -> i16 {
        self.tz_offset
    }

    /// Returns the timezone formatted in human readable offset from GMT.
    pub fn format_tz(&self) -> String {
        let sign = if self.tz_offset < 0 { "-" } else { "+" };

        let offset = self.tz_offset.abs();
        let hours = offset / 60;
        let min = offset % 60;

        format!("{}{:02}{:02}", sign, hours, min)
    }
}

fn parse_tz(tz: &[u8]) -> Option<i16> {
    if tz.len() != 5 || !tz[1..].iter().all(u8::is_ascii_digit) {
        return None;
    }

    let sign = match tz[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };

    let digit = |i: usize| (tz[i] - b'0') as i16;
    let hours = digit(1) * 10 + digit(2);
    let min = digit(3) * 10 + digit(4);
    if min >= 60 {
        return None;
    }

    Some(sign * (hours * 60 + min))
}

fn sanitize(s: &str) -> String {
    // Trimming last keeps this idempotent: a removed character can't leave
    // whitespace exposed at either end.
    let kept: String = s
        .chars()
        .filter(|c| !matches!(*c as u32, 0..=12 | 14..=31 | 60 | 62))
        .collect();
    kept.trim().to_string()
}

impl fmt::Display for Attribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} <{}> {} {}",
            self.name,
            self.email,
            self.timestamp,
            self.format_tz()
        )
    }
}
