use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Effect {
  Alert {
    message: String,
  },
  FetchComments {
    url: Url,
  },
  PostComment {
    payload: NewComment,
    url: Url,
  },
}
