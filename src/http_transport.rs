use super::*;

/// [`Transport`] over `reqwest`.
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
  client: reqwest::Client,
}

impl HttpTransport {
  pub fn new(client: reqwest::Client) -> Self {
    Self { client }
  }
}

impl Transport for HttpTransport {
  async fn get(&self, url: &Url) -> Result<Response> {
    let response = self.client.get(url.clone()).send().await?;

    let status = response.status().as_u16();

    Ok(Response::new(status, response.text().await?))
  }

  async fn post_json(&self, url: &Url, body: &Value) -> Result<Response> {
    let response = self.client.post(url.clone()).json(body).send().await?;

    let status = response.status().as_u16();

    Ok(Response::new(status, response.text().await?))
  }
}
