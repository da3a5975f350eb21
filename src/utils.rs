use super::*;

pub(crate) fn deserialize_lenient_string<'de, D>(
  deserializer: D,
) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  match Option::<Value>::deserialize(deserializer)?.unwrap_or_default() {
    Value::Null => Ok(String::new()),
    Value::Number(number) => Ok(number.to_string()),
    Value::String(text) => Ok(text),
    other => Err(de::Error::custom(format_args!(
      "expected a string or number, found `{other}`"
    ))),
  }
}

// Unreadable values become `None`; one bad timestamp must not reject the
// whole list.
pub(crate) fn deserialize_timestamp<'de, D>(
  deserializer: D,
) -> Result<Option<Timestamp>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(match Option::<Value>::deserialize(deserializer)? {
    Some(Value::String(text)) => Timestamp::parse(&text),
    Some(Value::Number(number)) => number
      .as_i64()
      .or_else(|| number.as_f64().map(truncate_millis))
      .and_then(Timestamp::from_epoch_millis),
    _ => None,
  })
}

#[allow(clippy::cast_possible_truncation)]
fn truncate_millis(millis: f64) -> i64 {
  millis.trunc() as i64
}
