#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
  Inactive,
  Loading,
  Ready,
  Resolving,
  #[default]
  Unmounted,
}
