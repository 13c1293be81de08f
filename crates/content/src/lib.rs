use {
  serde::{Deserialize, Serialize},
  std::{
    collections::{BTreeMap, BTreeSet},
    fmt::{self, Display, Formatter},
  },
  strum::{EnumString, IntoStaticStr},
};

pub use {
  block::{Block, CalloutStyle, Feedback, QuizOption},
  catalog::{categories, featured, find, popular, related},
  category::Category,
  course::{Course, Faq, Instructor, Lesson, Module, Outcome, PricingTier},
  day::{Day, DAYS},
  filter::{Filter, Price, Sort},
  form::{Field, FieldKind, Form},
  format::Format,
  level::Level,
  post::Post,
  progress::Progress,
  stats::Stats,
  testimonial::Testimonial,
  workbook::{Draft, Submission},
};

mod block;
mod catalog;
mod category;
mod course;
mod day;
mod filter;
mod form;
mod format;
mod level;
mod post;
mod progress;
mod stats;
mod testimonial;
mod workbook;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bundled_catalog_parses() {
    let courses =
      serde_json::from_str::<Vec<Course>>(include_str!("../../../data/courses.json")).unwrap();

    assert!(!courses.is_empty());
    assert!(courses.iter().any(|course| course.featured));
    assert!(courses.iter().any(|course| !course.free()));

    for course in &courses {
      let ids = course.lessons().map(|lesson| &lesson.id).collect::<BTreeSet<&String>>();
      assert_eq!(ids.len(), course.lesson_count(), "{}", course.slug);
      assert!(course.lesson_count() > 0, "{}", course.slug);
    }
  }

  #[test]
  fn bundled_days_cover_the_launch() {
    let days = serde_json::from_str::<Vec<Day>>(include_str!("../../../data/days.json")).unwrap();

    assert_eq!(days.len(), usize::from(DAYS));

    for (index, day) in days.iter().enumerate() {
      assert_eq!(usize::from(day.number), index + 1);
      assert!(!day.form.fields.is_empty(), "day {}", day.number);
    }
  }

  #[test]
  fn bundled_posts_and_testimonials_parse() {
    let posts = serde_json::from_str::<Vec<Post>>(include_str!("../../../data/blog.json")).unwrap();
    assert!(!posts.is_empty());

    let testimonials =
      serde_json::from_str::<Vec<Testimonial>>(include_str!("../../../data/testimonials.json"))
        .unwrap();
    assert!(!testimonials.is_empty());
  }
}
