use super::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Stats {
  pub courses: usize,
  pub learners: u64,
  pub hours: u64,
}

impl Stats {
  pub fn new(courses: &[Course]) -> Self {
    Self {
      courses: courses.len(),
      learners: courses
        .iter()
        .map(|course| u64::from(course.review_count) * 3)
        .sum(),
      hours: courses
        .iter()
        .map(|course| {
          let minutes = course.lesson_count() as u64 * u64::from(course.minutes_per_day);
          minutes.div_ceil(60)
        })
        .sum(),
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, crate::course::tests::course};

  #[test]
  fn totals() {
    let mut focus = course("focus", &[&["a", "b", "c"]]);
    focus.review_count = 100;
    focus.minutes_per_day = 25;

    let mut pitch = course("pitch", &[&["d"]]);
    pitch.review_count = 10;
    pitch.minutes_per_day = 10;

    let stats = Stats::new(&[focus, pitch]);

    assert_eq!(stats.courses, 2);
    assert_eq!(stats.learners, 330);
    // 75 minutes rounds up to 2 hours, 10 minutes to 1
    assert_eq!(stats.hours, 3);
  }

  #[test]
  fn empty_catalog() {
    assert_eq!(Stats::new(&[]), Stats::default());
  }
}
