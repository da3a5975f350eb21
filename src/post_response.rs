use super::*;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PostResponse {
  #[serde(default)]
  pub(crate) comment: Option<Comment>,
  #[serde(default)]
  pub(crate) error: Option<Value>,
}

impl PostResponse {
  pub(crate) fn error_message(&self) -> Option<&str> {
    self
      .error
      .as_ref()
      .and_then(Value::as_str)
      .filter(|message| !message.is_empty())
  }
}
