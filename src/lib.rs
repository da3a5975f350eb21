//! A comments widget for static blog pages.
//!
//! The widget mounts into a [`Document`], resolves the post slug, loads the
//! post's comments from a JSON API, renders them with a submission form, and
//! appends newly posted comments from the server's echo without re-fetching.
//!
//! ```no_run
//! use comments_widget::{Config, Document, Field, HttpTransport, Widget};
//!
//! # async fn run() -> comments_widget::Result {
//! let mut document = Document::new("https://example.com/posts/hello.html");
//! let root = document.create_element("div");
//! document.set_attribute(root, "id", "comments-root");
//! document.append_child(document.body(), root);
//!
//! let config = Config::new("https://example.com/api/comments")?;
//! let mut widget = Widget::new(config, document, HttpTransport::default());
//!
//! widget.start().await;
//! widget.input(Field::Name, "Ada").await;
//! widget.input(Field::Content, "Nice post!").await;
//! widget.submit().await;
//!
//! for alert in widget.take_alerts() {
//!   eprintln!("{alert}");
//! }
//!
//! println!("{}", widget.document().to_html(widget.document().body()));
//! # Ok(())
//! # }
//! ```

use {
  chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Utc},
  client::Client,
  command::Command,
  comments_response::CommentsResponse,
  dispatch::Dispatch,
  effect::Effect,
  event::Event,
  form::Form,
  log::{debug, error, warn},
  post_response::PostResponse,
  regex::Regex,
  serde::{Deserialize, Deserializer, Serialize, de},
  serde_json::Value,
  state::State,
  std::{
    collections::{BTreeMap, VecDeque},
    fmt::Write as _,
    future::Future,
    sync::LazyLock,
  },
  url::Url,
  utils::{deserialize_lenient_string, deserialize_timestamp},
};

pub use {
  comment::Comment,
  config::Config,
  document::{Document, NodeId},
  element::Element,
  error::Error,
  field::Field,
  http_transport::HttpTransport,
  labels::Labels,
  new_comment::NewComment,
  phase::Phase,
  render::{
    format_timestamp, render_form, render_item, render_list, render_shell,
  },
  response::Response,
  slug::resolve_slug,
  timestamp::Timestamp,
  transport::Transport,
  widget::Widget,
};

mod client;
mod command;
mod comment;
mod comments_response;
mod config;
mod dispatch;
mod document;
mod effect;
mod element;
mod error;
mod event;
mod field;
mod form;
mod http_transport;
mod labels;
mod new_comment;
mod phase;
mod post_response;
mod render;
mod response;
mod slug;
mod state;
mod timestamp;
mod transport;
mod utils;
mod widget;

#[cfg(test)]
mod test_support;

const DATA_POST_SLUG: &str = "data-post-slug";

const DEFAULT_API_BASE: &str = "https://blog8.vercel.app/api/comments";

const DEFAULT_DATE_FORMAT: &str = "%Y/%-m/%-d %H:%M:%S";

const DEFAULT_MOUNT_ID: &str = "comments-root";

const DEFAULT_SLUG: &str = "index";

const INVALID_DATE: &str = "Invalid Date";

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
