use super::*;

/// The network seam. Non-2xx statuses are not errors at this level; only
/// failures to complete the exchange are.
pub trait Transport {
  fn get(&self, url: &Url) -> impl Future<Output = Result<Response>>;

  fn post_json(
    &self,
    url: &Url,
    body: &Value,
  ) -> impl Future<Output = Result<Response>>;
}
