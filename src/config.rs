use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
  pub api_base: Url,
  pub date_format: String,
  pub labels: Labels,
  pub mount_id: String,
  /// Offset used to localize timestamps. `None` means the host's local zone.
  pub utc_offset_minutes: Option<i32>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      api_base: Url::parse(DEFAULT_API_BASE)
        .unwrap_or_else(|_| unreachable!("default API base is a valid URL")),
      date_format: DEFAULT_DATE_FORMAT.into(),
      labels: Labels::default(),
      mount_id: DEFAULT_MOUNT_ID.into(),
      utc_offset_minutes: None,
    }
  }
}

impl Config {
  /// `{api_base}/{slug}` with the slug encoded as a single path segment.
  pub fn endpoint(&self, slug: &str) -> Url {
    let mut url = self.api_base.clone();

    if let Ok(mut segments) = url.path_segments_mut() {
      segments.pop_if_empty().push(slug);
    }

    url
  }

  pub fn from_json(json: &str) -> Result<Self> {
    let config = serde_json::from_str::<Self>(json)?;

    Self::validate_base(&config.api_base)?;

    Ok(config)
  }

  pub fn new(api_base: &str) -> Result<Self> {
    let api_base = Url::parse(api_base)?;

    Self::validate_base(&api_base)?;

    Ok(Self {
      api_base,
      ..Self::default()
    })
  }

  pub(crate) fn utc_offset(&self) -> Option<FixedOffset> {
    self
      .utc_offset_minutes
      .and_then(|minutes| FixedOffset::east_opt(minutes.checked_mul(60)?))
  }

  fn validate_base(api_base: &Url) -> Result {
    if api_base.cannot_be_a_base() {
      return Err(Error::UrlBase {
        base: api_base.to_string(),
      });
    }

    Ok(())
  }

  #[must_use]
  pub fn with_labels(self, labels: Labels) -> Self {
    Self { labels, ..self }
  }

  #[must_use]
  pub fn with_mount_id(self, mount_id: impl Into<String>) -> Self {
    Self {
      mount_id: mount_id.into(),
      ..self
    }
  }

  #[must_use]
  pub fn with_utc_offset_minutes(self, minutes: i32) -> Self {
    Self {
      utc_offset_minutes: Some(minutes),
      ..self
    }
  }
}
