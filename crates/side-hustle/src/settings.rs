use super::*;

#[derive(Boilerplate)]
#[boilerplate(filename = "settings.html")]
pub struct Settings {
  webhook: String,
}

impl Page for Settings {
  async fn initialize(_params: Params) -> Result<Self, Error> {
    Ok(Self {
      webhook: store()?
        .webhook()
        .map(|url| url.to_string())
        .unwrap_or_default(),
    })
  }

  fn connected(&self, root: &Element) {
    let Some(form) = root.select_optional::<HtmlElement>("#settings-form") else {
      return;
    };

    let root = root.clone();
    form.listen("submit", move |event: Event| {
      event.prevent_default();

      let Some(input) = root.select_optional::<HtmlInputElement>("#webhook-input") else {
        return;
      };

      let message = match store().and_then(|store| store.set_webhook(&input.value())) {
        Ok(()) if input.value().trim().is_empty() => "Webhook cleared.".into(),
        Ok(()) => "Webhook saved.".into(),
        Err(err) => err.to_string(),
      };

      if let Some(status) = root.select_optional::<HtmlElement>("#settings-status") {
        status.set_text_content(Some(&message));
      }
    });
  }
}
