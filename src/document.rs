use super::*;

const VOID_ELEMENTS: &[&str] = &[
  "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta",
  "source", "track", "wbr",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Clone, Debug)]
enum NodeKind {
  Element {
    attributes: BTreeMap<String, String>,
    disabled: bool,
    tag: String,
    value: String,
  },
  Text(String),
}

#[derive(Clone, Debug)]
struct Node {
  children: Vec<NodeId>,
  kind: NodeKind,
  parent: Option<NodeId>,
}

/// A minimal in-memory page the widget attaches to.
///
/// Nodes live in an arena and are never freed; the widget only ever appends.
/// Form controls carry `value` and `disabled` as live properties, separate
/// from their attributes, like their browser counterparts.
#[derive(Clone, Debug)]
pub struct Document {
  body: NodeId,
  location: String,
  nodes: Vec<Node>,
}

impl Document {
  fn ancestors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
    std::iter::successors(Some(node), |node| self.nodes[node.0].parent)
  }

  /// Moves `child` under `parent`. Does nothing when `child` is `parent` or
  /// one of its ancestors, which would make a cycle.
  pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
    if self.ancestors(parent).any(|node| node == child) {
      return;
    }

    if let Some(previous) = self.nodes[child.0].parent.take() {
      self.nodes[previous.0].children.retain(|id| *id != child);
    }

    self.nodes[child.0].parent = Some(parent);
    self.nodes[parent.0].children.push(child);
  }

  pub fn attach(&mut self, parent: NodeId, element: &Element) -> NodeId {
    let node = self.create_element(&element.tag);

    for (name, value) in &element.attributes {
      self.set_attribute(node, name, value);
    }

    if let Some(text) = &element.text {
      let text = self.create_text(text);
      self.append_child(node, text);
    }

    for child in &element.children {
      self.attach(node, child);
    }

    self.append_child(parent, node);

    node
  }

  pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
    match &self.nodes[node.0].kind {
      NodeKind::Element { attributes, .. } => {
        attributes.get(name).map(String::as_str)
      }
      NodeKind::Text(_) => None,
    }
  }

  pub fn body(&self) -> NodeId {
    self.body
  }

  pub fn children(&self, node: NodeId) -> &[NodeId] {
    &self.nodes[node.0].children
  }

  pub fn create_element(&mut self, tag: &str) -> NodeId {
    self.push(NodeKind::Element {
      attributes: BTreeMap::new(),
      disabled: false,
      tag: tag.to_ascii_lowercase(),
      value: String::new(),
    })
  }

  pub fn create_text(&mut self, text: &str) -> NodeId {
    self.push(NodeKind::Text(text.into()))
  }

  pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
    let mut found = Vec::new();
    let mut stack = self.nodes[node.0]
      .children
      .iter()
      .rev()
      .copied()
      .collect::<Vec<_>>();

    while let Some(next) = stack.pop() {
      found.push(next);
      stack.extend(self.nodes[next.0].children.iter().rev().copied());
    }

    found
  }

  pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
    std::iter::once(self.body)
      .chain(self.descendants(self.body))
      .find(|node| self.attribute(*node, "id") == Some(id))
  }

  pub fn elements_by_class(&self, root: NodeId, class: &str) -> Vec<NodeId> {
    self
      .descendants(root)
      .into_iter()
      .filter(|node| {
        self
          .attribute(*node, "class")
          .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
      })
      .collect()
  }

  pub(crate) fn find_descendant(
    &self,
    root: NodeId,
    tag: &str,
    name: &str,
  ) -> Option<NodeId> {
    self.descendants(root).into_iter().find(|node| {
      self.tag(*node) == Some(tag)
        && self.attribute(*node, "name") == Some(name)
    })
  }

  pub fn is_disabled(&self, node: NodeId) -> bool {
    matches!(
      self.nodes[node.0].kind,
      NodeKind::Element { disabled: true, .. }
    )
  }

  pub fn location(&self) -> &str {
    &self.location
  }

  pub fn new(location: impl Into<String>) -> Self {
    let mut document = Self {
      body: NodeId(0),
      location: location.into(),
      nodes: Vec::new(),
    };

    document.body = document.create_element("body");

    document
  }

  pub fn node_count(&self) -> usize {
    self.nodes.len()
  }

  pub fn parent(&self, node: NodeId) -> Option<NodeId> {
    self.nodes[node.0].parent
  }

  fn push(&mut self, kind: NodeKind) -> NodeId {
    self.nodes.push(Node {
      children: Vec::new(),
      kind,
      parent: None,
    });

    NodeId(self.nodes.len() - 1)
  }

  pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
    if let NodeKind::Element { attributes, .. } = &mut self.nodes[node.0].kind {
      attributes.insert(name.into(), value.into());
    }
  }

  pub fn set_disabled(&mut self, node: NodeId, value: bool) {
    if let NodeKind::Element { disabled, .. } = &mut self.nodes[node.0].kind {
      *disabled = value;
    }
  }

  pub fn set_value(&mut self, node: NodeId, text: &str) {
    if let NodeKind::Element { value, .. } = &mut self.nodes[node.0].kind {
      text.clone_into(value);
    }
  }

  pub fn tag(&self, node: NodeId) -> Option<&str> {
    match &self.nodes[node.0].kind {
      NodeKind::Element { tag, .. } => Some(tag),
      NodeKind::Text(_) => None,
    }
  }

  pub fn text_content(&self, node: NodeId) -> String {
    std::iter::once(node)
      .chain(self.descendants(node))
      .filter_map(|id| match &self.nodes[id.0].kind {
        NodeKind::Text(text) => Some(text.as_str()),
        NodeKind::Element { .. } => None,
      })
      .collect()
  }

  pub fn to_html(&self, node: NodeId) -> String {
    let mut html = String::new();
    self.write_html(node, &mut html);
    html
  }

  pub fn value(&self, node: NodeId) -> &str {
    match &self.nodes[node.0].kind {
      NodeKind::Element { value, .. } => value,
      NodeKind::Text(_) => "",
    }
  }

  fn write_html(&self, node: NodeId, html: &mut String) {
    let node = &self.nodes[node.0];

    let NodeKind::Element {
      attributes,
      disabled,
      tag,
      value,
    } = &node.kind
    else {
      if let NodeKind::Text(text) = &node.kind {
        html.push_str(&html_escape::encode_text(text));
      }
      return;
    };

    html.push('<');
    html.push_str(tag);

    for (name, attribute) in attributes {
      let _ = write!(
        html,
        " {name}=\"{}\"",
        html_escape::encode_double_quoted_attribute(attribute)
      );
    }

    if tag == "input" && !value.is_empty() {
      let _ = write!(
        html,
        " value=\"{}\"",
        html_escape::encode_double_quoted_attribute(value)
      );
    }

    if *disabled {
      html.push_str(" disabled");
    }

    html.push('>');

    if VOID_ELEMENTS.contains(&tag.as_str()) {
      return;
    }

    if tag == "textarea" {
      html.push_str(&html_escape::encode_text(value));
    }

    for child in &node.children {
      self.write_html(*child, html);
    }

    let _ = write!(html, "</{tag}>");
  }
}
