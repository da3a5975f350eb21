use super::*;

#[derive(Debug)]
pub(crate) enum Event {
  CommentPosted { result: Result<Comment> },
  Comments { result: Result<Vec<Comment>> },
}
