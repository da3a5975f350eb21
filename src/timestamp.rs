use {
  super::*,
  std::fmt::{self, Display, Formatter},
};

/// When a comment was made, as far as the server said.
///
/// Date-times sent without an offset are wall-clock times and are shown as
/// written. Everything else is an instant, shown in the viewer's zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timestamp {
  Floating(NaiveDateTime),
  Instant(DateTime<Utc>),
}

impl Timestamp {
  pub(crate) fn from_epoch_millis(millis: i64) -> Option<Self> {
    DateTime::from_timestamp_millis(millis).map(Self::Instant)
  }

  pub fn parse(text: &str) -> Option<Self> {
    let text = text.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
      return Some(Self::Instant(instant.with_timezone(&Utc)));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
    {
      return Some(Self::Floating(naive));
    }

    // Bare dates are midnight UTC.
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
      .ok()
      .and_then(|date| date.and_hms_opt(0, 0, 0))
      .map(|naive| Self::Instant(naive.and_utc()))
  }
}

impl Display for Timestamp {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Self::Floating(naive) => {
        write!(f, "{}", naive.format("%Y-%m-%dT%H:%M:%S%.f"))
      }
      Self::Instant(instant) => f.write_str(&instant.to_rfc3339()),
    }
  }
}

impl From<DateTime<Utc>> for Timestamp {
  fn from(instant: DateTime<Utc>) -> Self {
    Self::Instant(instant)
  }
}
