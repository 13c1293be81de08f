use super::*;

pub fn find<'a>(courses: &'a [Course], slug: &str) -> Option<&'a Course> {
  courses.iter().find(|course| course.slug == slug)
}

pub fn featured(courses: &[Course]) -> Vec<&Course> {
  courses.iter().filter(|course| course.featured).collect()
}

pub fn popular(courses: &[Course]) -> Vec<&Course> {
  courses.iter().filter(|course| course.popular).collect()
}

pub fn categories(courses: &[Course]) -> BTreeSet<Category> {
  courses.iter().map(|course| course.category).collect()
}

pub fn related<'a>(courses: &'a [Course], slug: &str, limit: usize) -> Vec<&'a Course> {
  let Some(course) = find(courses, slug) else {
    return Vec::new();
  };

  let mut scored = courses
    .iter()
    .filter(|candidate| candidate.slug != slug)
    .map(|candidate| {
      let shared = candidate
        .tags
        .iter()
        .filter(|tag| course.tags.contains(tag))
        .count();
      (candidate, shared)
    })
    .collect::<Vec<(&Course, usize)>>();

  scored.sort_by(|x, y| y.1.cmp(&x.1));

  scored
    .into_iter()
    .take(limit)
    .map(|(candidate, _shared)| candidate)
    .collect()
}

#[cfg(test)]
mod tests {
  use {super::*, crate::course::tests::course};

  fn tagged(slug: &str, tags: &[&str]) -> Course {
    let mut course = course(slug, &[&["a"]]);
    course.tags = tags.iter().map(|tag| tag.to_string()).collect();
    course
  }

  #[test]
  fn find_is_first_match() {
    let courses = vec![course("a", &[]), course("b", &[])];
    assert_eq!(find(&courses, "b").unwrap().slug, "b");
    assert!(find(&courses, "c").is_none());
  }

  #[test]
  fn related_ranks_by_shared_tags() {
    let courses = vec![
      tagged("base", &["focus", "habits"]),
      tagged("none", &["money"]),
      tagged("both", &["focus", "habits"]),
      tagged("one", &["habits"]),
    ];

    let related = related(&courses, "base", 2);

    assert_eq!(
      related
        .iter()
        .map(|course| course.slug.as_str())
        .collect::<Vec<&str>>(),
      ["both", "one"],
    );
  }

  #[test]
  fn related_to_unknown_slug_is_empty() {
    assert!(related(&[course("a", &[])], "missing", 3).is_empty());
  }

  #[test]
  fn categories_deduplicate() {
    let mut business = course("b", &[]);
    business.category = Category::Business;

    let courses = vec![course("a", &[]), business, course("c", &[])];

    assert_eq!(
      categories(&courses),
      [Category::SelfDevelopment, Category::Business].into(),
    );
  }
}
