use super::*;

#[derive(Boilerplate)]
#[boilerplate(filename = "day.html")]
pub struct DayPage {
  view: Option<View>,
}

pub struct View {
  day: Day,
  draft: Draft,
  submitted_at: Option<String>,
  tasks_done: Vec<usize>,
  percent: u8,
  webhook: bool,
}

fn field_value(element: &Element) -> String {
  if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
    if input.type_() == "checkbox" {
      if input.checked() {
        "true".into()
      } else {
        String::new()
      }
    } else {
      input.value()
    }
  } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
    textarea.value()
  } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
    select.value()
  } else {
    String::new()
  }
}

fn status(root: &Element, text: &str) {
  if let Some(status) = root.select_optional::<HtmlElement>("#form-status") {
    status.set_text_content(Some(text));
  }
}

impl Page for DayPage {
  async fn initialize(params: Params) -> Result<Self, Error> {
    let number = params
      .get("number")
      .and_then(|number| number.parse::<u8>().ok())
      .filter(|number| (1..=DAYS).contains(number));

    let Some(number) = number else {
      return Ok(Self { view: None });
    };

    let Some(day) = Api::default().day(number).await? else {
      return Ok(Self { view: None });
    };

    let store = store()?;

    let draft = store.draft(number);

    Ok(Self {
      view: Some(View {
        percent: day.form.percent(&draft.fields),
        submitted_at: store
          .submission(number)
          .map(|submission| submission.submitted_at),
        tasks_done: store.tasks(number),
        webhook: store.webhook().is_some(),
        draft,
        day,
      }),
    })
  }

  fn connected(&self, root: &Element) {
    let Some(view) = &self.view else {
      return;
    };

    let number = view.day.number;

    for checkbox in root.select_all::<HtmlElement>(".task-checkbox") {
      let handle = checkbox.clone();
      checkbox.listen("click", move |_: Event| {
        let Some(index) = handle
          .get_attribute("data-index")
          .and_then(|index| index.parse().ok())
        else {
          return;
        };

        if let Err(err) = store().and_then(|store| store.toggle_task(number, index)) {
          log::error!("saving tasks failed: {err}");
          return;
        }

        let checked = handle.class_list().toggle("checked").unwrap_or_default();
        if let Ok(Some(item)) = handle.closest(".task-item") {
          item.class_list().toggle("checked").ok();
        }
        handle
          .set_attribute("aria-checked", if checked { "true" } else { "false" })
          .ok();
      });
    }

    let draft = Rc::new(RefCell::new(view.draft.clone()));
    let form = view.day.form.clone();

    let meter: Rc<dyn Fn()> = {
      let root = root.clone();
      let draft = draft.clone();
      let form = form.clone();
      Rc::new(move || {
        let percent = form.percent(&draft.borrow().fields);
        if let Some(bar) = root.select_optional::<HtmlElement>("#form-bar") {
          bar.style().set_property("width", &format!("{percent}%")).ok();
        }
        if let Some(text) = root.select_optional::<Element>("#form-percent") {
          text.set_text_content(Some(&format!("{percent}%")));
        }
      })
    };

    for field in root.select_all::<Element>(".workbook-field") {
      let Some(id) = field.get_attribute("data-field") else {
        continue;
      };

      let draft = draft.clone();
      let meter = meter.clone();
      let handle = field.clone();
      field.listen("input", move |_: Event| {
        {
          let mut draft = draft.borrow_mut();
          draft.record(&id, &field_value(&handle));
          if let Err(err) = store().and_then(|store| store.set_draft(number, &mut draft)) {
            log::error!("saving draft failed: {err}");
          }
        }
        meter();
      });
    }

    if let Some(button) = root.select_optional::<HtmlButtonElement>("#submit-btn") {
      let root = root.clone();
      button.listen("click", move |_: Event| {
        let missing = form
          .missing(&draft.borrow().fields)
          .iter()
          .map(|field| field.label.clone())
          .collect::<Vec<String>>();

        if !missing.is_empty() {
          status(&root, &format!("Missing required fields: {}", missing.join(", ")));
          return;
        }

        let submission = match store().and_then(|store| store.submit(number, &draft.borrow())) {
          Ok(submission) => submission,
          Err(err) => {
            log::error!("saving day {number} failed: {err}");
            status(&root, "Saving failed. Try again.");
            return;
          }
        };

        status(&root, "Day saved.");

        // webhook delivery is best-effort; the submission is already persisted
        if let Some(url) = store().ok().and_then(|store| store.webhook()) {
          let root = root.clone();
          wasm_bindgen_futures::spawn_local(async move {
            match Api::default().post(&url, &submission).await {
              Ok(()) => status(&root, "Day saved and sent to your webhook."),
              Err(err) => {
                log::error!("webhook delivery failed: {err}");
                status(&root, "Day saved. Webhook delivery failed.");
              }
            }
          });
        }
      });
    }
  }
}
