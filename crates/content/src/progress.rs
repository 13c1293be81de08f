use super::*;

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
  #[serde(default)]
  pub completed_lessons: Vec<String>,
  #[serde(default)]
  pub last_lesson: Option<String>,
  #[serde(default)]
  pub started_at: Option<String>,
  #[serde(default)]
  pub last_accessed_at: Option<String>,
}

impl Progress {
  pub fn complete(&mut self, lesson: &str) {
    if !self.completed(lesson) {
      self.completed_lessons.push(lesson.into());
    }
    self.last_lesson = Some(lesson.into());
  }

  pub fn completed(&self, lesson: &str) -> bool {
    self.completed_lessons.iter().any(|id| id == lesson)
  }

  pub fn percent(&self, course: &Course) -> u8 {
    let total = course.lesson_count();

    if total == 0 {
      return 0;
    }

    ((self.completed_lessons.len() as f64 / total as f64) * 100.0).round() as u8
  }
}

#[cfg(test)]
mod tests {
  use {super::*, crate::course::tests::course};

  #[test]
  fn complete_deduplicates_and_tracks_last() {
    let mut progress = Progress::default();

    progress.complete("a");
    progress.complete("b");
    progress.complete("a");

    assert_eq!(progress.completed_lessons, ["a", "b"]);
    assert_eq!(progress.last_lesson.as_deref(), Some("a"));
    assert!(progress.completed("b"));
    assert!(!progress.completed("c"));
  }

  #[test]
  fn percent_rounds() {
    let course = course("focus", &[&["a", "b", "c"]]);

    let mut progress = Progress::default();
    assert_eq!(progress.percent(&course), 0);

    progress.complete("a");
    assert_eq!(progress.percent(&course), 33);

    progress.complete("b");
    progress.complete("c");
    assert_eq!(progress.percent(&course), 100);
  }

  #[test]
  fn percent_of_empty_course_is_zero() {
    let empty = course("empty", &[]);
    let mut progress = Progress::default();
    progress.complete("ghost");
    assert_eq!(progress.percent(&empty), 0);
  }
}
