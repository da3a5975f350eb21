#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Response {
  pub body: String,
  pub status: u16,
}

impl Response {
  pub fn is_success(&self) -> bool {
    (200..300).contains(&self.status)
  }

  pub fn new(status: u16, body: impl Into<String>) -> Self {
    Self {
      body: body.into(),
      status,
    }
  }
}
