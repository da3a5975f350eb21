use super::*;

/// An element description, attached with [`Document::attach`]. `text` is
/// never parsed as markup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
  pub attributes: BTreeMap<String, String>,
  pub children: Vec<Element>,
  pub tag: String,
  pub text: Option<String>,
}

impl Element {
  #[must_use]
  pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
    self.attributes.insert(name.into(), value.into());
    self
  }

  pub fn attribute(&self, name: &str) -> Option<&str> {
    self.attributes.get(name).map(String::as_str)
  }

  pub fn button(class: &str, kind: &str, text: &str) -> Self {
    Self::new("button")
      .class(class)
      .attr("type", kind)
      .text(text)
  }

  #[must_use]
  pub fn child(mut self, child: Element) -> Self {
    self.children.push(child);
    self
  }

  #[must_use]
  pub fn children(
    mut self,
    children: impl IntoIterator<Item = Element>,
  ) -> Self {
    self.children.extend(children);
    self
  }

  #[must_use]
  pub fn class(self, class: &str) -> Self {
    self.attr("class", class)
  }

  pub fn heading(level: u8, class: &str, text: &str) -> Self {
    Self::new(&format!("h{}", level.clamp(1, 6)))
      .class(class)
      .text(text)
  }

  pub fn input(name: &str, placeholder: &str) -> Self {
    Self::new("input")
      .attr("name", name)
      .attr("placeholder", placeholder)
  }

  pub fn list_item(class: &str) -> Self {
    Self::new("li").class(class)
  }

  pub fn new(tag: &str) -> Self {
    Self {
      tag: tag.into(),
      ..Self::default()
    }
  }

  pub fn ordered_list(class: &str) -> Self {
    Self::new("ol").class(class)
  }

  pub fn text_content(&self) -> String {
    let mut content = self.text.clone().unwrap_or_default();

    for child in &self.children {
      content.push_str(&child.text_content());
    }

    content
  }

  #[must_use]
  pub fn text(mut self, text: impl Into<String>) -> Self {
    self.text = Some(text.into());
    self
  }

  pub fn textarea(name: &str, rows: u32, placeholder: &str) -> Self {
    Self::new("textarea")
      .attr("name", name)
      .attr("rows", rows.to_string())
      .attr("placeholder", placeholder)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn builders_set_tag_and_attributes() {
    let input = Element::input("email", "optional").attr("type", "email");

    assert_eq!(input.tag, "input");
    assert_eq!(input.attribute("name"), Some("email"));
    assert_eq!(input.attribute("placeholder"), Some("optional"));
    assert_eq!(input.attribute("type"), Some("email"));
    assert_eq!(input.text, None);
  }

  #[test]
  fn heading_level_is_clamped() {
    assert_eq!(Element::heading(3, "t", "x").tag, "h3");
    assert_eq!(Element::heading(9, "t", "x").tag, "h6");
    assert_eq!(Element::heading(0, "t", "x").tag, "h1");
  }

  #[test]
  fn text_content_walks_children_in_order() {
    let element = Element::new("div")
      .text("a")
      .child(Element::new("span").text("b"))
      .child(Element::new("span").child(Element::new("em").text("c")));

    assert_eq!(element.text_content(), "abc");
  }
}
