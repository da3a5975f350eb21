#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("network error: {status}")]
  Network { status: u16 },
  #[error("malformed response body")]
  Parse(#[from] serde_json::Error),
  #[error("{message}")]
  Submission { message: String },
  #[error("transport failure")]
  Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
  #[error("invalid URL")]
  Url(#[from] url::ParseError),
  #[error("`{base}` cannot be used as an API base")]
  UrlBase { base: String },
  #[error("name and content are required")]
  Validation,
}

impl From<reqwest::Error> for Error {
  fn from(error: reqwest::Error) -> Self {
    Self::Transport(Box::new(error))
  }
}
