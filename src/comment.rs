use super::*;

/// A comment as the API returns it. Only `name`, `content` and `created_at`
/// are rendered; the other fields are carried as whatever JSON arrived.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
  #[serde(default, deserialize_with = "deserialize_lenient_string")]
  pub content: String,
  #[serde(default, deserialize_with = "deserialize_timestamp")]
  pub created_at: Option<Timestamp>,
  #[serde(default)]
  pub email: Option<Value>,
  #[serde(default)]
  pub id: Option<Value>,
  #[serde(default, deserialize_with = "deserialize_lenient_string")]
  pub name: String,
  #[serde(default)]
  pub parent_id: Option<Value>,
}
