use super::*;

#[derive(Boilerplate)]
#[boilerplate(filename = "course.html")]
pub struct CoursePage {
  course: Option<Course>,
  related: Vec<Course>,
  enrolled: bool,
  progress: u8,
  completed: Vec<String>,
}

pub(crate) fn accordions(root: &Element) {
  for trigger in root.select_all::<HtmlElement>(".accordion-trigger") {
    let handle = trigger.clone();
    trigger.listen("click", move |_: Event| {
      let Ok(Some(item)) = handle.closest(".accordion-item") else {
        return;
      };

      let open = item.get_attribute("data-state").as_deref() == Some("open");

      item
        .set_attribute("data-state", if open { "closed" } else { "open" })
        .ok();
      handle
        .set_attribute("aria-expanded", if open { "false" } else { "true" })
        .ok();
    });
  }
}

impl Page for CoursePage {
  async fn initialize(params: Params) -> Result<Self, Error> {
    let slug = params.get("slug").cloned().unwrap_or_default();

    let catalog = Api::default().courses().await?;

    let course = content::find(&catalog, &slug).cloned();

    let store = store()?;

    let (enrolled, progress, completed) = match &course {
      Some(course) => (
        store.is_enrolled(&slug),
        store.percent(course),
        store
          .progress(&slug)
          .map(|progress| progress.completed_lessons)
          .unwrap_or_default(),
      ),
      None => (false, 0, Vec::new()),
    };

    Ok(Self {
      related: content::related(&catalog, &slug, 3)
        .into_iter()
        .cloned()
        .collect(),
      course,
      enrolled,
      progress,
      completed,
    })
  }

  fn connected(&self, root: &Element) {
    accordions(root);

    let Some(course) = &self.course else {
      return;
    };

    if let Some(button) = root.select_optional::<HtmlButtonElement>("#enroll-btn") {
      let slug = course.slug.clone();
      button.listen("click", move |_: Event| {
        match store().and_then(|store| store.enroll(&slug)) {
          Ok(()) => Router::refresh(),
          Err(err) => log::error!("enrolling in `{slug}` failed: {err}"),
        }
      });
    }
  }
}
