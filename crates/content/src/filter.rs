use super::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filter {
  pub search: String,
  pub category: Option<Category>,
  pub level: Option<Level>,
  pub price: Option<Price>,
  pub format: Option<Format>,
  pub sort: Option<Sort>,
}

#[derive(Copy, Clone, Debug, EnumString, IntoStaticStr, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum Price {
  Free,
  Paid,
}

#[derive(Copy, Clone, Debug, EnumString, IntoStaticStr, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum Sort {
  Popular,
  Newest,
  HighestRated,
  Shortest,
}

impl Filter {
  pub fn apply(&self, courses: &[Course]) -> Vec<Course> {
    let search = self.search.trim().to_lowercase();

    let mut matches = courses
      .iter()
      .filter(|course| self.category.map_or(true, |category| course.category == category))
      .filter(|course| self.level.map_or(true, |level| course.level == level))
      .filter(|course| self.format.map_or(true, |format| course.format == format))
      .filter(|course| match self.price {
        None => true,
        Some(Price::Free) => course.free(),
        Some(Price::Paid) => !course.free(),
      })
      .filter(|course| {
        search.is_empty()
          || course.title.to_lowercase().contains(&search)
          || course.description.to_lowercase().contains(&search)
          || course
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&search))
      })
      .cloned()
      .collect::<Vec<Course>>();

    match self.sort {
      Some(Sort::Popular) => matches.sort_by(|x, y| y.review_count.cmp(&x.review_count)),
      Some(Sort::Newest) => {}
      Some(Sort::HighestRated) => matches.sort_by(|x, y| y.rating.total_cmp(&x.rating)),
      Some(Sort::Shortest) => matches.sort_by(|x, y| x.duration_days.cmp(&y.duration_days)),
      None => matches.sort_by(|x, y| {
        y.featured
          .cmp(&x.featured)
          .then(y.review_count.cmp(&x.review_count))
      }),
    }

    matches
  }
}
