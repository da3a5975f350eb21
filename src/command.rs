use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Command {
  Input { field: Field, value: String },
  Start,
  Submit,
}
