use super::*;

/// The body of a submission. `parentId` is always sent, and always null:
/// replies are not offered by this widget.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
  pub content: String,
  pub email: String,
  pub name: String,
  pub parent_id: Option<String>,
}

impl NewComment {
  pub fn new(name: &str, email: &str, content: &str) -> Self {
    Self {
      content: content.trim().to_string(),
      email: email.trim().to_string(),
      name: name.trim().to_string(),
      parent_id: None,
    }
  }

  pub fn validate(&self) -> Result {
    if self.name.is_empty() || self.content.is_empty() {
      return Err(Error::Validation);
    }

    Ok(())
  }
}
