use super::*;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Form {
  pub(crate) button: NodeId,
  pub(crate) content: NodeId,
  pub(crate) email: NodeId,
  pub(crate) name: NodeId,
}

impl Form {
  pub(crate) fn clear(&self, document: &mut Document) {
    for field in Field::ALL {
      document.set_value(self.control(field), "");
    }
  }

  pub(crate) fn control(&self, field: Field) -> NodeId {
    match field {
      Field::Content => self.content,
      Field::Email => self.email,
      Field::Name => self.name,
    }
  }

  pub(crate) fn is_busy(&self, document: &Document) -> bool {
    document.is_disabled(self.button)
  }

  pub(crate) fn locate(document: &Document, form: NodeId) -> Option<Self> {
    let control = |field: Field| {
      document.find_descendant(form, field.tag(), field.name())
    };

    Some(Self {
      button: document
        .descendants(form)
        .into_iter()
        .find(|node| document.tag(*node) == Some("button"))?,
      content: control(Field::Content)?,
      email: control(Field::Email)?,
      name: control(Field::Name)?,
    })
  }

  pub(crate) fn payload(&self, document: &Document) -> NewComment {
    NewComment::new(
      document.value(self.name),
      document.value(self.email),
      document.value(self.content),
    )
  }

  pub(crate) fn set_busy(&self, document: &mut Document, busy: bool) {
    document.set_disabled(self.button, busy);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn attached() -> (Document, Form) {
    let mut document = Document::new("https://example.com/");
    let body = document.body();
    let node = document.attach(body, &render_form(&Labels::default()));
    let form = Form::locate(&document, node).unwrap();
    (document, form)
  }

  #[test]
  fn locate_finds_every_control() {
    let (document, form) = attached();

    assert_eq!(document.attribute(form.name, "name"), Some("name"));
    assert_eq!(document.attribute(form.email, "name"), Some("email"));
    assert_eq!(document.tag(form.content), Some("textarea"));
    assert_eq!(document.tag(form.button), Some("button"));
  }

  #[test]
  fn locate_fails_without_controls() {
    let mut document = Document::new("https://example.com/");
    let body = document.body();
    let node = document.attach(body, &Element::new("form"));

    assert!(Form::locate(&document, node).is_none());
  }

  #[test]
  fn payload_reads_trimmed_values_and_clear_empties_them() {
    let (mut document, form) = attached();

    document.set_value(form.name, " Ada ");
    document.set_value(form.email, "ada@example.com ");
    document.set_value(form.content, " hi\n");

    assert_eq!(
      form.payload(&document),
      NewComment::new("Ada", "ada@example.com", "hi")
    );

    form.clear(&mut document);

    for field in Field::ALL {
      assert_eq!(document.value(form.control(field)), "");
    }
  }

  #[test]
  fn busy_tracks_button_disabled_state() {
    let (mut document, form) = attached();

    assert!(!form.is_busy(&document));

    form.set_busy(&mut document, true);
    assert!(document.is_disabled(form.button));
    assert!(form.is_busy(&document));

    form.set_busy(&mut document, false);
    assert!(!form.is_busy(&document));
  }
}
