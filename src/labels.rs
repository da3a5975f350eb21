use super::*;

/// User-facing strings. Defaults are the Chinese copy the widget shipped with.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Labels {
  pub content_placeholder: String,
  pub date_separator: String,
  pub email_placeholder: String,
  pub failure_alert: String,
  pub name_placeholder: String,
  pub submission_fallback: String,
  pub submit: String,
  pub title: String,
  pub validation_alert: String,
}

impl Default for Labels {
  fn default() -> Self {
    Self {
      content_placeholder: "写下你的评论…".into(),
      date_separator: " • ".into(),
      email_placeholder: "邮箱（可选，不公开）".into(),
      failure_alert: "提交失败，请稍后重试".into(),
      name_placeholder: "昵称（必填）".into(),
      submission_fallback: "提交失败".into(),
      submit: "提交评论".into(),
      title: "评论".into(),
      validation_alert: "请填写昵称和评论内容".into(),
    }
  }
}
