use super::*;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct User {
  pub name: String,
}

pub struct Store {
  prefix: &'static str,
  storage: Storage,
}

fn now() -> String {
  String::from(js_sys::Date::new_0().to_iso_string())
}

impl Store {
  pub fn open(prefix: &'static str) -> Result<Self, Error> {
    Ok(Self {
      prefix,
      storage: window()?
        .local_storage()
        .ok()
        .flatten()
        .context(error::StorageUnavailable)?,
    })
  }

  fn key(&self, key: &str) -> String {
    format!("{}{}", self.prefix, key)
  }

  pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
    let json = self.storage.get_item(&self.key(key)).ok()??;
    serde_json::from_str(&json).ok()
  }

  pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), Error> {
    let json = serde_json::to_string(value).with_context(|_| error::Serialize {
      key: self.key(key),
    })?;

    self
      .storage
      .set_item(&self.key(key), &json)
      .ok()
      .with_context(|| error::StorageWrite {
        key: self.key(key),
      })?;

    Ok(())
  }

  pub fn remove(&self, key: &str) {
    self.storage.remove_item(&self.key(key)).ok();
  }

  pub fn enrolled(&self) -> Vec<String> {
    self.get("enrolled").unwrap_or_default()
  }

  pub fn is_enrolled(&self, slug: &str) -> bool {
    self.enrolled().iter().any(|enrolled| enrolled == slug)
  }

  pub fn enroll(&self, slug: &str) -> Result<(), Error> {
    let mut enrolled = self.enrolled();

    if !enrolled.iter().any(|candidate| candidate == slug) {
      enrolled.push(slug.into());
      self.set("enrolled", &enrolled)?;
    }

    // re-enrolling must not reset existing progress
    if self.progress(slug).is_none() {
      self.set(
        &format!("progress_{slug}"),
        &Progress {
          started_at: Some(now()),
          ..Progress::default()
        },
      )?;
    }

    Ok(())
  }

  pub fn progress(&self, slug: &str) -> Option<Progress> {
    self.get(&format!("progress_{slug}"))
  }

  pub fn complete_lesson(&self, slug: &str, lesson: &str) -> Result<Progress, Error> {
    let mut progress = self.progress(slug).unwrap_or_else(|| Progress {
      started_at: Some(now()),
      ..Progress::default()
    });

    progress.complete(lesson);
    progress.last_accessed_at = Some(now());

    self.set(&format!("progress_{slug}"), &progress)?;

    Ok(progress)
  }

  pub fn lesson_complete(&self, slug: &str, lesson: &str) -> bool {
    self
      .progress(slug)
      .is_some_and(|progress| progress.completed(lesson))
  }

  pub fn completed_lessons(&self, slug: &str) -> usize {
    self
      .progress(slug)
      .map_or(0, |progress| progress.completed_lessons.len())
  }

  pub fn percent(&self, course: &Course) -> u8 {
    self
      .progress(&course.slug)
      .map_or(0, |progress| progress.percent(course))
  }

  pub fn reset_progress(&self, slug: &str) -> Result<(), Error> {
    self.set(
      &format!("progress_{slug}"),
      &Progress {
        started_at: Some(now()),
        ..Progress::default()
      },
    )
  }

  pub fn reflection(&self, slug: &str, lesson: &str) -> String {
    self
      .get(&format!("reflection_{slug}_{lesson}"))
      .unwrap_or_default()
  }

  pub fn set_reflection(&self, slug: &str, lesson: &str, text: &str) -> Result<(), Error> {
    self.set(&format!("reflection_{slug}_{lesson}"), &text)
  }

  pub fn checklist(&self, slug: &str, lesson: &str) -> Vec<usize> {
    self
      .get(&format!("checklist_{slug}_{lesson}"))
      .unwrap_or_default()
  }

  pub fn toggle_checklist(
    &self,
    slug: &str,
    lesson: &str,
    index: usize,
  ) -> Result<Vec<usize>, Error> {
    let mut checked = self.checklist(slug, lesson);

    match checked.iter().position(|&candidate| candidate == index) {
      Some(position) => {
        checked.remove(position);
      }
      None => checked.push(index),
    }

    self.set(&format!("checklist_{slug}_{lesson}"), &checked)?;

    Ok(checked)
  }

  pub fn quiz_answer(&self, slug: &str, lesson: &str, quiz: usize) -> Option<usize> {
    self.get(&format!("quiz_{slug}_{lesson}_{quiz}"))
  }

  pub fn set_quiz_answer(
    &self,
    slug: &str,
    lesson: &str,
    quiz: usize,
    answer: usize,
  ) -> Result<(), Error> {
    self.set(&format!("quiz_{slug}_{lesson}_{quiz}"), &answer)
  }

  pub fn user(&self) -> Option<User> {
    self.get("user")
  }

  pub fn set_user(&self, user: &User) -> Result<(), Error> {
    self.set("user", user)
  }

  pub fn logout(&self) {
    self.remove("user");
  }

  pub fn logged_in(&self) -> bool {
    self.user().is_some()
  }

  pub fn draft(&self, day: u8) -> Draft {
    self.get(&format!("draft_{day}")).unwrap_or_default()
  }

  pub fn set_draft(&self, day: u8, draft: &mut Draft) -> Result<(), Error> {
    draft.updated_at = Some(now());
    self.set(&format!("draft_{day}"), draft)
  }

  pub fn submission(&self, day: u8) -> Option<Submission> {
    self.get(&format!("submission_{day}"))
  }

  pub fn submit(&self, day: u8, draft: &Draft) -> Result<Submission, Error> {
    let submission = draft.submit(day, now());
    self.set(&format!("submission_{day}"), &submission)?;
    Ok(submission)
  }

  pub fn tasks(&self, day: u8) -> Vec<usize> {
    self.get(&format!("tasks_{day}")).unwrap_or_default()
  }

  pub fn toggle_task(&self, day: u8, index: usize) -> Result<Vec<usize>, Error> {
    let mut checked = self.tasks(day);

    match checked.iter().position(|&candidate| candidate == index) {
      Some(position) => {
        checked.remove(position);
      }
      None => checked.push(index),
    }

    self.set(&format!("tasks_{day}"), &checked)?;

    Ok(checked)
  }

  pub fn webhook(&self) -> Option<Url> {
    self
      .get::<String>("webhook")
      .and_then(|url| Url::parse(&url).ok())
  }

  pub fn set_webhook(&self, url: &str) -> Result<(), Error> {
    let url = url.trim();

    if url.is_empty() {
      self.remove("webhook");
      return Ok(());
    }

    Url::parse(url).with_context(|_| error::WebhookUrl {
      url: url.to_string(),
    })?;

    self.set("webhook", &url)
  }
}
