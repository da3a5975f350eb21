use super::*;

static EXTENSION: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\.[a-zA-Z0-9]+$").unwrap());

/// A non-empty `explicit` slug wins verbatim. Otherwise the last non-empty
/// segment of `page_url`'s path is used with its extension stripped, falling
/// back to `index`. Never fails.
pub fn resolve_slug(explicit: Option<&str>, page_url: &str) -> String {
  if let Some(slug) = explicit.filter(|slug| !slug.is_empty()) {
    return slug.to_string();
  }

  let Ok(url) = Url::parse(page_url) else {
    return DEFAULT_SLUG.into();
  };

  let last = url
    .path()
    .split('/')
    .rfind(|segment| !segment.is_empty())
    .unwrap_or(DEFAULT_SLUG);

  let stem = EXTENSION.replace(last, "");

  if stem.is_empty() {
    DEFAULT_SLUG.into()
  } else {
    stem.into_owned()
  }
}
