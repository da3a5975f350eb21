use super::*;

#[derive(Clone, Debug)]
pub(crate) struct Client<T> {
  transport: T,
}

impl<T: Transport> Client<T> {
  pub(crate) async fn fetch_comments(&self, url: &Url) -> Result<Vec<Comment>> {
    let response = self.transport.get(url).await?;

    if !response.is_success() {
      return Err(Error::Network {
        status: response.status,
      });
    }

    serde_json::from_str::<CommentsResponse>(&response.body)?.into_comments()
  }

  pub(crate) fn new(transport: T) -> Self {
    Self { transport }
  }

  // The body is read before the status so a failure can carry the server's
  // message.
  pub(crate) async fn post_comment(
    &self,
    url: &Url,
    payload: &NewComment,
    fallback: &str,
  ) -> Result<Comment> {
    let response = self
      .transport
      .post_json(url, &serde_json::to_value(payload)?)
      .await?;

    let body = serde_json::from_str::<PostResponse>(&response.body)?;

    if !response.is_success() {
      return Err(Error::Submission {
        message: body.error_message().unwrap_or(fallback).to_string(),
      });
    }

    body
      .comment
      .ok_or_else(|| Error::Parse(de::Error::missing_field("comment")))
  }

  pub(crate) fn transport(&self) -> &T {
    &self.transport
  }
}
