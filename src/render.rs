use super::*;

/// Formats `created_at` for display, or `Invalid Date` when the server sent
/// something unreadable.
pub fn format_timestamp(
  created_at: Option<Timestamp>,
  config: &Config,
) -> String {
  let Some(created_at) = created_at else {
    return INVALID_DATE.into();
  };

  let format = config.date_format.as_str();

  let mut formatted = String::new();

  let result = match (created_at, config.utc_offset()) {
    (Timestamp::Floating(naive), _) => {
      write!(formatted, "{}", naive.format(format))
    }
    (Timestamp::Instant(instant), Some(offset)) => {
      write!(formatted, "{}", instant.with_timezone(&offset).format(format))
    }
    (Timestamp::Instant(instant), None) => {
      write!(formatted, "{}", instant.with_timezone(&Local).format(format))
    }
  };

  if result.is_err() {
    warn!("invalid date format `{format}`");
    return created_at.to_string();
  }

  formatted
}

pub fn render_form(labels: &Labels) -> Element {
  Element::new("form").class("cm-form").children([
    Element::input(Field::Name.name(), &labels.name_placeholder)
      .attr("required", "true"),
    Element::input(Field::Email.name(), &labels.email_placeholder)
      .attr("type", "email"),
    Element::textarea(Field::Content.name(), 4, &labels.content_placeholder),
    Element::button("cm-btn", "submit", &labels.submit),
  ])
}

pub fn render_item(comment: &Comment, config: &Config) -> Element {
  Element::list_item("cm-item")
    .child(
      Element::new("div")
        .class("cm-meta")
        .child(Element::new("strong").text(comment.name.as_str()))
        .child(Element::new("span").class("cm-date").text(format!(
          "{}{}",
          config.labels.date_separator,
          format_timestamp(comment.created_at, config)
        ))),
    )
    .child(
      Element::new("div")
        .class("cm-body")
        .text(comment.content.as_str()),
    )
}

pub fn render_list(comments: &[Comment], config: &Config) -> Element {
  Element::ordered_list("cm-list").children(
    comments
      .iter()
      .map(|comment| render_item(comment, config)),
  )
}

pub fn render_shell(labels: &Labels) -> Element {
  Element::new("section")
    .class("cm-root")
    .child(Element::heading(3, "cm-title", &labels.title))
    .child(Element::new("div").class("cm-container"))
}
