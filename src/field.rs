#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
  Content,
  Email,
  Name,
}

impl Field {
  pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Content];

  pub fn name(self) -> &'static str {
    match self {
      Field::Content => "content",
      Field::Email => "email",
      Field::Name => "name",
    }
  }

  pub(crate) fn tag(self) -> &'static str {
    match self {
      Field::Content => "textarea",
      Field::Email | Field::Name => "input",
    }
  }
}
