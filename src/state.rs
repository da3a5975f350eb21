use super::*;

#[derive(Debug)]
pub(crate) struct State {
  config: Config,
  container: Option<NodeId>,
  document: Document,
  form: Option<Form>,
  list: Option<NodeId>,
  pending_effects: Vec<Effect>,
  phase: Phase,
  slug: Option<String>,
}

impl State {
  fn alert(&mut self, message: String) {
    self.pending_effects.push(Effect::Alert { message });
  }

  pub(crate) fn config(&self) -> &Config {
    &self.config
  }

  pub(crate) fn dispatch_command(&mut self, command: Command) -> Dispatch {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    match command {
      Command::Input { field, value } => self.input(field, &value),
      Command::Start => self.start(),
      Command::Submit => self.submit(),
    }

    self.take_dispatch()
  }

  pub(crate) fn document(&self) -> &Document {
    &self.document
  }

  fn finish_submission(&mut self, result: Result<Comment>) {
    let Some(form) = self.form else {
      return;
    };

    form.set_busy(&mut self.document, false);

    match result {
      Ok(comment) => {
        form.clear(&mut self.document);

        if let Some(list) = self.list {
          let item = render_item(&comment, &self.config);
          self.document.attach(list, &item);
        }

        debug!("appended comment by `{}`", comment.name);
      }
      Err(error) => {
        error!("failed to submit comment: {error}");
        self.alert(self.config.labels.failure_alert.clone());
      }
    }
  }

  pub(crate) fn handle_event(&mut self, event: Event) -> Dispatch {
    match event {
      Event::CommentPosted { result } => self.finish_submission(result),
      Event::Comments { result } => self.load_comments(result),
    }

    self.take_dispatch()
  }

  fn input(&mut self, field: Field, value: &str) {
    if let Some(form) = self.form {
      self.document.set_value(form.control(field), value);
    }
  }

  pub(crate) fn into_document(self) -> Document {
    self.document
  }

  pub(crate) fn is_submitting(&self) -> bool {
    self
      .form
      .is_some_and(|form| form.is_busy(&self.document))
  }

  fn load_comments(&mut self, result: Result<Vec<Comment>>) {
    if self.phase != Phase::Loading {
      return;
    }

    let Some(container) = self.container else {
      return;
    };

    let comments = result.unwrap_or_else(|error| {
      warn!(
        "failed to load comments for `{}`: {error}",
        self.slug.as_deref().unwrap_or_default()
      );
      Vec::new()
    });

    let list = self
      .document
      .attach(container, &render_list(&comments, &self.config));

    let form = self
      .document
      .attach(container, &render_form(&self.config.labels));

    self.list = Some(list);
    self.form = Form::locate(&self.document, form);
    self.phase = Phase::Ready;

    debug!("comments widget ready with {} comments", comments.len());
  }

  pub(crate) fn new(config: Config, document: Document) -> Self {
    Self {
      config,
      container: None,
      document,
      form: None,
      list: None,
      pending_effects: Vec::new(),
      phase: Phase::Unmounted,
      slug: None,
    }
  }

  pub(crate) fn phase(&self) -> Phase {
    self.phase
  }

  pub(crate) fn slug(&self) -> Option<&str> {
    self.slug.as_deref()
  }

  fn start(&mut self) {
    if self.phase != Phase::Unmounted {
      return;
    }

    let Some(mount) = self.document.element_by_id(&self.config.mount_id)
    else {
      debug!(
        "no `#{}` element, comments widget inactive",
        self.config.mount_id
      );
      self.phase = Phase::Inactive;
      return;
    };

    self.phase = Phase::Resolving;

    let slug = resolve_slug(
      self.document.attribute(mount, DATA_POST_SLUG),
      self.document.location(),
    );

    self.document.set_attribute(mount, DATA_POST_SLUG, &slug);

    let shell = self
      .document
      .attach(mount, &render_shell(&self.config.labels));

    self.container = self
      .document
      .elements_by_class(shell, "cm-container")
      .first()
      .copied();

    self.phase = Phase::Loading;

    debug!("loading comments for `{slug}`");

    self.pending_effects.push(Effect::FetchComments {
      url: self.config.endpoint(&slug),
    });

    self.slug = Some(slug);
  }

  fn submit(&mut self) {
    if self.phase != Phase::Ready {
      return;
    }

    let (Some(form), Some(slug)) = (self.form, self.slug.as_deref()) else {
      return;
    };

    if form.is_busy(&self.document) {
      debug!("submission already in flight");
      return;
    }

    let url = self.config.endpoint(slug);

    let payload = form.payload(&self.document);

    if let Err(error) = payload.validate() {
      debug!("rejected submission: {error}");
      self.alert(self.config.labels.validation_alert.clone());
      return;
    }

    form.set_busy(&mut self.document, true);

    self.pending_effects.push(Effect::PostComment { payload, url });
  }

  fn take_dispatch(&mut self) -> Dispatch {
    Dispatch {
      effects: std::mem::take(&mut self.pending_effects),
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, crate::test_support::*};

  const LOCATION: &str = "https://blog.test/posts/my-post.html";

  fn comment(name: &str, content: &str) -> Comment {
    Comment {
      content: content.into(),
      created_at: DateTime::from_timestamp(1_704_067_200, 0).map(Timestamp::from),
      name: name.into(),
      ..Comment::default()
    }
  }

  fn item_texts(state: &State) -> Vec<String> {
    let document = state.document();

    document
      .elements_by_class(document.body(), "cm-item")
      .into_iter()
      .map(|item| document.text_content(item))
      .collect()
  }

  fn loaded(comments: Vec<Comment>) -> State {
    let mut state = State::new(test_config(), page(LOCATION, None));

    state.dispatch_command(Command::Start);

    let dispatch = state.handle_event(Event::Comments {
      result: Ok(comments),
    });

    assert!(dispatch.effects.is_empty());

    state
  }

  fn fill(state: &mut State, name: &str, email: &str, content: &str) {
    for (field, value) in [
      (Field::Name, name),
      (Field::Email, email),
      (Field::Content, content),
    ] {
      let dispatch = state.dispatch_command(Command::Input {
        field,
        value: value.into(),
      });

      assert!(dispatch.effects.is_empty());
    }
  }

  fn field_values(state: &State) -> Vec<String> {
    let form = state.form.unwrap();

    Field::ALL
      .iter()
      .map(|field| state.document().value(form.control(*field)).to_string())
      .collect()
  }

  #[test]
  fn start_without_mount_point_is_a_no_op() {
    let mut document = Document::new(LOCATION);
    let other = document.create_element("div");
    document.set_attribute(other, "id", "sidebar");
    let body = document.body();
    document.append_child(body, other);

    let nodes = document.node_count();

    let mut state = State::new(test_config(), document);

    let dispatch = state.dispatch_command(Command::Start);

    assert!(dispatch.effects.is_empty());
    assert_eq!(state.phase(), Phase::Inactive);
    assert_eq!(state.document().node_count(), nodes);
    assert_eq!(state.document().attribute(other, DATA_POST_SLUG), None);

    assert!(state.dispatch_command(Command::Start).effects.is_empty());
  }

  #[test]
  fn start_inserts_shell_and_requests_comments() {
    let mut state = State::new(test_config(), page(LOCATION, None));

    let dispatch = state.dispatch_command(Command::Start);

    assert_eq!(state.phase(), Phase::Loading);
    assert_eq!(state.slug(), Some("my-post"));

    let document = state.document();
    let root = document.element_by_id(DEFAULT_MOUNT_ID).unwrap();

    assert_eq!(document.attribute(root, DATA_POST_SLUG), Some("my-post"));
    assert_eq!(document.elements_by_class(root, "cm-title").len(), 1);
    assert_eq!(document.elements_by_class(root, "cm-container").len(), 1);
    assert!(document.elements_by_class(root, "cm-form").is_empty());

    assert_eq!(
      dispatch.effects,
      [Effect::FetchComments {
        url: test_config().endpoint("my-post"),
      }]
    );
  }

  #[test]
  fn explicit_slug_attribute_is_kept() {
    let mut state =
      State::new(test_config(), page(LOCATION, Some("hello-world")));

    let dispatch = state.dispatch_command(Command::Start);

    assert_eq!(state.slug(), Some("hello-world"));

    assert_eq!(
      dispatch.effects,
      [Effect::FetchComments {
        url: test_config().endpoint("hello-world"),
      }]
    );
  }

  #[test]
  fn start_only_runs_once() {
    let mut state = State::new(test_config(), page(LOCATION, None));

    state.dispatch_command(Command::Start);

    let nodes = state.document().node_count();

    assert!(state.dispatch_command(Command::Start).effects.is_empty());
    assert_eq!(state.document().node_count(), nodes);
  }

  #[test]
  fn loaded_comments_are_rendered_with_form() {
    let state = loaded(vec![comment("A", "hi")]);

    assert_eq!(state.phase(), Phase::Ready);

    let items = item_texts(&state);

    assert_eq!(items.len(), 1);
    assert!(items[0].contains('A'));
    assert!(items[0].contains("hi"));

    let document = state.document();
    let container = document.elements_by_class(document.body(), "cm-container")[0];
    let children = document.children(container);

    assert_eq!(children.len(), 2);
    assert_eq!(document.tag(children[0]), Some("ol"));
    assert_eq!(document.tag(children[1]), Some("form"));
  }

  #[test]
  fn failed_load_renders_empty_list_and_usable_form() {
    let mut state = State::new(test_config(), page(LOCATION, None));

    state.dispatch_command(Command::Start);

    let dispatch = state.handle_event(Event::Comments {
      result: Err(Error::Network { status: 500 }),
    });

    assert!(dispatch.effects.is_empty());
    assert_eq!(state.phase(), Phase::Ready);
    assert!(item_texts(&state).is_empty());

    fill(&mut state, "B", "", "yo");

    let dispatch = state.dispatch_command(Command::Submit);

    assert!(matches!(dispatch.effects[..], [Effect::PostComment { .. }]));
  }

  #[test]
  fn comments_event_outside_loading_is_ignored() {
    let mut state = State::new(test_config(), page(LOCATION, None));

    state.handle_event(Event::Comments {
      result: Ok(vec![comment("A", "hi")]),
    });

    assert_eq!(state.phase(), Phase::Unmounted);
    assert!(item_texts(&state).is_empty());
  }

  #[test]
  fn incomplete_submission_alerts_without_request() {
    let mut state = loaded(Vec::new());

    fill(&mut state, "   ", "", "hello");

    let dispatch = state.dispatch_command(Command::Submit);

    assert_eq!(
      dispatch.effects,
      [Effect::Alert {
        message: Labels::default().validation_alert,
      }]
    );

    assert!(!state.is_submitting());
  }

  #[test]
  fn submit_locks_form_until_result_arrives() {
    let mut state = loaded(vec![comment("A", "hi")]);

    fill(&mut state, " B ", "b@example.com", " yo ");

    let dispatch = state.dispatch_command(Command::Submit);

    assert_eq!(
      dispatch.effects,
      [Effect::PostComment {
        payload: NewComment::new("B", "b@example.com", "yo"),
        url: test_config().endpoint("my-post"),
      }]
    );

    assert!(state.is_submitting());

    assert!(
      state.dispatch_command(Command::Submit).effects.is_empty(),
      "a second submit while in flight is ignored"
    );

    let dispatch = state.handle_event(Event::CommentPosted {
      result: Ok(comment("B", "yo")),
    });

    assert!(dispatch.effects.is_empty());
    assert!(!state.is_submitting());
  }

  #[test]
  fn successful_submission_appends_and_clears_fields() {
    let mut state = loaded(vec![comment("A", "hi")]);

    fill(&mut state, "B", "b@example.com", "yo");

    state.dispatch_command(Command::Submit);

    state.handle_event(Event::CommentPosted {
      result: Ok(comment("B", "yo")),
    });

    let items = item_texts(&state);

    assert_eq!(items.len(), 2);
    assert!(items[0].contains("hi"));
    assert!(items[1].contains('B'));
    assert!(items[1].contains("yo"));

    assert_eq!(field_values(&state), ["", "", ""]);
  }

  #[test]
  fn appended_comment_goes_last_regardless_of_timestamp() {
    let mut state = loaded(vec![comment("A", "hi")]);

    fill(&mut state, "B", "", "yo");

    state.dispatch_command(Command::Submit);

    state.handle_event(Event::CommentPosted {
      result: Ok(Comment {
        created_at: Timestamp::from_epoch_millis(0),
        ..comment("B", "yo")
      }),
    });

    let items = item_texts(&state);

    assert!(items[1].contains("yo"));
    assert!(items[1].contains("1970/1/1 00:00:00"));
  }

  #[test]
  fn failed_submission_alerts_and_keeps_list_and_fields() {
    let mut state = loaded(vec![comment("A", "hi")]);

    fill(&mut state, "B", "", "yo");

    state.dispatch_command(Command::Submit);

    let dispatch = state.handle_event(Event::CommentPosted {
      result: Err(Error::Submission {
        message: "slow down".into(),
      }),
    });

    assert_eq!(
      dispatch.effects,
      [Effect::Alert {
        message: Labels::default().failure_alert,
      }]
    );

    assert!(!state.is_submitting());
    assert_eq!(item_texts(&state).len(), 1);
    assert_eq!(field_values(&state), ["B", "", "yo"]);
  }

  #[test]
  fn submit_before_ready_is_ignored() {
    let mut state = State::new(test_config(), page(LOCATION, None));

    assert!(state.dispatch_command(Command::Submit).effects.is_empty());

    state.dispatch_command(Command::Start);

    assert!(state.dispatch_command(Command::Submit).effects.is_empty());
  }
}
