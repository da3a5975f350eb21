use super::*;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CommentsResponse {
  #[serde(default)]
  pub(crate) comments: Value,
}

impl CommentsResponse {
  // Anything other than an array reads as no comments.
  pub(crate) fn into_comments(self) -> Result<Vec<Comment>> {
    match self.comments {
      Value::Array(items) => {
        Ok(serde_json::from_value::<Vec<Comment>>(Value::Array(items))?)
      }
      _ => Ok(Vec::new()),
    }
  }
}
