use super::*;

thread_local! {
  static CACHE: RefCell<BTreeMap<String, serde_json::Value>> = RefCell::new(BTreeMap::new());
}

pub struct Api {
  base: Url,
}

impl Default for Api {
  fn default() -> Self {
    let location = web_sys::window().unwrap().location();
    let mut base = Url::parse(&location.href().unwrap()).unwrap();
    base.set_fragment(None);
    base.set_query(None);
    Self { base }
  }
}

impl Api {
  pub async fn courses(&self) -> Result<Vec<Course>, Error> {
    self.get("courses.json").await
  }

  pub async fn course(&self, slug: &str) -> Result<Option<Course>, Error> {
    Ok(content::find(&self.courses().await?, slug).cloned())
  }

  pub async fn posts(&self) -> Result<Vec<Post>, Error> {
    self.get("blog.json").await
  }

  pub async fn testimonials(&self) -> Result<Vec<Testimonial>, Error> {
    self.get("testimonials.json").await
  }

  pub async fn stats(&self) -> Result<Stats, Error> {
    Ok(Stats::new(&self.courses().await?))
  }

  pub async fn days(&self) -> Result<Vec<Day>, Error> {
    self.get("days.json").await
  }

  pub async fn day(&self, number: u8) -> Result<Option<Day>, Error> {
    Ok(
      self
        .days()
        .await?
        .into_iter()
        .find(|day| day.number == number),
    )
  }

  async fn get<T: DeserializeOwned>(&self, file: &str) -> Result<T, Error> {
    let url = self.base.join(&format!("data/{file}")).unwrap();

    let cached = CACHE.with(|cache| cache.borrow().get(file).cloned());

    let value = match cached {
      Some(value) => value,
      None => {
        let response = reqwest::Client::new()
          .get(url.clone())
          .send()
          .await
          .with_context(|_| error::Request { url: url.clone() })?;

        let status = response.status();

        ensure!(
          status.is_success(),
          error::Status {
            status,
            url: url.clone()
          }
        );

        let body = response
          .bytes()
          .await
          .with_context(|_| error::Request { url: url.clone() })?;

        let value = serde_json::from_slice::<serde_json::Value>(&body)
          .with_context(|_| error::Deserialize { url: url.clone() })?;

        CACHE.with(|cache| cache.borrow_mut().insert(file.into(), value.clone()));

        value
      }
    };

    serde_json::from_value(value).with_context(|_| error::Deserialize { url: url.clone() })
  }

  pub async fn post(&self, url: &Url, body: &impl Serialize) -> Result<(), Error> {
    let body = serde_json::to_string(body).with_context(|_| error::Serialize {
      key: url.to_string(),
    })?;

    let response = reqwest::Client::new()
      .post(url.clone())
      .header("content-type", "application/json")
      .body(body)
      .send()
      .await
      .with_context(|_| error::Request { url: url.clone() })?;

    let status = response.status();

    ensure!(
      status.is_success(),
      error::Status {
        status,
        url: url.clone()
      }
    );

    Ok(())
  }
}
