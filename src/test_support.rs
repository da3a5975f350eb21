use {
  super::*,
  std::{cell::RefCell, collections::VecDeque},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Method {
  Get,
  Post,
}

#[derive(Debug, Default)]
pub(crate) struct MockTransport {
  gets: RefCell<VecDeque<Option<Response>>>,
  posted: RefCell<Vec<Value>>,
  posts: RefCell<VecDeque<Option<Response>>>,
  requests: RefCell<Vec<(Method, Url)>>,
}

impl MockTransport {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  pub(crate) fn posted(&self) -> Vec<Value> {
    self.posted.borrow().clone()
  }

  pub(crate) fn requests(&self) -> Vec<(Method, Url)> {
    self.requests.borrow().clone()
  }

  fn settle(queue: &RefCell<VecDeque<Option<Response>>>) -> Result<Response> {
    queue
      .borrow_mut()
      .pop_front()
      .flatten()
      .ok_or_else(|| {
        Error::Transport(Box::new(std::io::Error::other("connection refused")))
      })
  }

  pub(crate) fn with_get(self, response: Response) -> Self {
    self.gets.borrow_mut().push_back(Some(response));
    self
  }

  pub(crate) fn with_get_failure(self) -> Self {
    self.gets.borrow_mut().push_back(None);
    self
  }

  pub(crate) fn with_post(self, response: Response) -> Self {
    self.posts.borrow_mut().push_back(Some(response));
    self
  }

  pub(crate) fn with_post_failure(self) -> Self {
    self.posts.borrow_mut().push_back(None);
    self
  }
}

impl Transport for MockTransport {
  async fn get(&self, url: &Url) -> Result<Response> {
    self.requests.borrow_mut().push((Method::Get, url.clone()));
    Self::settle(&self.gets)
  }

  async fn post_json(&self, url: &Url, body: &Value) -> Result<Response> {
    self.requests.borrow_mut().push((Method::Post, url.clone()));
    self.posted.borrow_mut().push(body.clone());
    Self::settle(&self.posts)
  }
}

pub(crate) fn page(location: &str, slug: Option<&str>) -> Document {
  let mut document = Document::new(location);

  let root = document.create_element("div");
  document.set_attribute(root, "id", DEFAULT_MOUNT_ID);

  if let Some(slug) = slug {
    document.set_attribute(root, DATA_POST_SLUG, slug);
  }

  let body = document.body();
  document.append_child(body, root);

  document
}

pub(crate) fn test_config() -> Config {
  Config::new("https://comments.test/api/comments")
    .unwrap()
    .with_utc_offset_minutes(0)
}

pub(crate) fn sample_url() -> Url {
  test_config().endpoint("my-post")
}
