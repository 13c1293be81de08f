use super::*;

#[derive(Boilerplate)]
#[boilerplate(filename = "contact.html")]
pub struct Contact {}

impl Page for Contact {
  async fn initialize(_params: Params) -> Result<Self, Error> {
    Ok(Self {})
  }

  fn connected(&self, root: &Element) {
    let Some(form) = root.select_optional::<HtmlElement>("#contact-form") else {
      return;
    };

    let root = root.clone();
    form.listen("submit", move |event: Event| {
      event.prevent_default();
      if let Some(status) = root.select_optional::<HtmlElement>("#contact-status") {
        status.set_text_content(Some("Message sent. We'll get back to you soon."));
      }
    });
  }
}
