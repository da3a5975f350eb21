use super::*;

/// Drives the widget against a [`Transport`]. Requests are awaited one at a
/// time, and alerts are queued for the host to show.
#[derive(Debug)]
pub struct Widget<T> {
  alerts: Vec<String>,
  client: Client<T>,
  state: State,
}

impl<T: Transport> Widget<T> {
  pub fn alerts(&self) -> &[String] {
    &self.alerts
  }

  pub fn config(&self) -> &Config {
    self.state.config()
  }

  pub fn document(&self) -> &Document {
    self.state.document()
  }

  async fn execute_effect(&mut self, effect: Effect) -> Option<Event> {
    match effect {
      Effect::Alert { message } => {
        self.alerts.push(message);
        None
      }
      Effect::FetchComments { url } => Some(Event::Comments {
        result: self.client.fetch_comments(&url).await,
      }),
      Effect::PostComment { payload, url } => Some(Event::CommentPosted {
        result: self
          .client
          .post_comment(
            &url,
            &payload,
            &self.state.config().labels.submission_fallback,
          )
          .await,
      }),
    }
  }

  pub async fn input(&mut self, field: Field, value: &str) {
    self
      .run(Command::Input {
        field,
        value: value.into(),
      })
      .await;
  }

  pub fn into_document(self) -> Document {
    self.state.into_document()
  }

  pub fn is_submitting(&self) -> bool {
    self.state.is_submitting()
  }

  pub fn new(config: Config, document: Document, transport: T) -> Self {
    Self {
      alerts: Vec::new(),
      client: Client::new(transport),
      state: State::new(config, document),
    }
  }

  pub fn phase(&self) -> Phase {
    self.state.phase()
  }

  async fn run(&mut self, command: Command) {
    let mut effects =
      VecDeque::from(self.state.dispatch_command(command).effects);

    while let Some(effect) = effects.pop_front() {
      if let Some(event) = self.execute_effect(effect).await {
        effects.extend(self.state.handle_event(event).effects);
      }
    }
  }

  pub fn slug(&self) -> Option<&str> {
    self.state.slug()
  }

  pub async fn start(&mut self) {
    self.run(Command::Start).await;
  }

  pub async fn submit(&mut self) {
    self.run(Command::Submit).await;
  }

  pub fn take_alerts(&mut self) -> Vec<String> {
    std::mem::take(&mut self.alerts)
  }

  pub fn transport(&self) -> &T {
    self.client.transport()
  }
}
