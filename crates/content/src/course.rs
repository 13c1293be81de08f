use super::*;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
  pub slug: String,
  pub title: String,
  pub subtitle: String,
  pub description: String,
  pub category: Category,
  pub level: Level,
  pub format: Format,
  pub duration_days: u32,
  pub minutes_per_day: u32,
  pub rating: f64,
  pub review_count: u32,
  pub price: u32,
  #[serde(default)]
  pub featured: bool,
  #[serde(default)]
  pub popular: bool,
  pub thumbnail: String,
  #[serde(default)]
  pub tags: Vec<String>,
  #[serde(default)]
  pub outcomes: Vec<Outcome>,
  #[serde(default)]
  pub instructor: Option<Instructor>,
  #[serde(default)]
  pub pricing_tiers: Vec<PricingTier>,
  #[serde(default)]
  pub faqs: Vec<Faq>,
  pub modules: Vec<Module>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Module {
  pub id: String,
  pub title: String,
  pub lessons: Vec<Lesson>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
  pub id: String,
  pub title: String,
  #[serde(rename = "type")]
  pub ty: String,
  pub estimate_minutes: u32,
  #[serde(default, rename = "contentBlocks")]
  pub blocks: Vec<Block>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Outcome {
  pub icon: String,
  pub text: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Instructor {
  pub name: String,
  pub role: String,
  pub bio: String,
  pub avatar: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct PricingTier {
  pub name: String,
  pub price: u32,
  #[serde(default)]
  pub featured: bool,
  pub features: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Faq {
  pub question: String,
  pub answer: String,
}

impl Course {
  pub fn free(&self) -> bool {
    self.price == 0
  }

  pub fn lessons(&self) -> impl Iterator<Item = &Lesson> {
    self.modules.iter().flat_map(|module| module.lessons.iter())
  }

  pub fn lesson_count(&self) -> usize {
    self.modules.iter().map(|module| module.lessons.len()).sum()
  }

  pub fn lesson(&self, id: &str) -> Option<(&Module, &Lesson)> {
    self.modules.iter().find_map(|module| {
      module
        .lessons
        .iter()
        .find(|lesson| lesson.id == id)
        .map(|lesson| (module, lesson))
    })
  }

  pub fn first_lesson(&self) -> Option<&Lesson> {
    self.lessons().next()
  }

  pub fn adjacent(&self, id: &str) -> (Option<&Lesson>, Option<&Lesson>) {
    let lessons = self.lessons().collect::<Vec<&Lesson>>();

    let Some(current) = lessons.iter().position(|lesson| lesson.id == id) else {
      return (None, None);
    };

    (
      current.checked_sub(1).map(|i| lessons[i]),
      lessons.get(current + 1).copied(),
    )
  }
}

#[cfg(test)]
pub(crate) mod tests {
  use super::*;

  pub(crate) fn lesson(id: &str) -> Lesson {
    Lesson {
      id: id.into(),
      title: id.to_uppercase(),
      ty: "reading".into(),
      estimate_minutes: 10,
      blocks: Vec::new(),
    }
  }

  pub(crate) fn course(slug: &str, lessons: &[&[&str]]) -> Course {
    Course {
      slug: slug.into(),
      title: slug.to_uppercase(),
      subtitle: String::new(),
      description: String::new(),
      category: Category::SelfDevelopment,
      level: Level::Beginner,
      format: Format::Mixed,
      duration_days: 7,
      minutes_per_day: 10,
      rating: 4.5,
      review_count: 10,
      price: 0,
      featured: false,
      popular: false,
      thumbnail: String::new(),
      tags: Vec::new(),
      outcomes: Vec::new(),
      instructor: None,
      pricing_tiers: Vec::new(),
      faqs: Vec::new(),
      modules: lessons
        .iter()
        .enumerate()
        .map(|(i, ids)| Module {
          id: format!("m{i}"),
          title: format!("Module {i}"),
          lessons: ids.iter().map(|id| lesson(id)).collect(),
        })
        .collect(),
    }
  }

  #[test]
  fn lesson_lookup_spans_modules() {
    let course = course("focus", &[&["a", "b"], &["c"]]);

    assert_eq!(course.lesson_count(), 3);

    let (module, lesson) = course.lesson("c").unwrap();
    assert_eq!(module.id, "m1");
    assert_eq!(lesson.id, "c");

    assert!(course.lesson("missing").is_none());
  }

  #[test]
  fn adjacent_crosses_module_boundaries() {
    let course = course("focus", &[&["a", "b"], &["c"]]);

    let (prev, next) = course.adjacent("a");
    assert!(prev.is_none());
    assert_eq!(next.unwrap().id, "b");

    let (prev, next) = course.adjacent("b");
    assert_eq!(prev.unwrap().id, "a");
    assert_eq!(next.unwrap().id, "c");

    let (prev, next) = course.adjacent("c");
    assert_eq!(prev.unwrap().id, "b");
    assert!(next.is_none());

    assert_eq!(course.adjacent("missing"), (None, None));
  }

  #[test]
  fn camel_case_wire_format() {
    let course = serde_json::from_str::<Course>(
      r#"{
        "slug": "focus-foundations",
        "title": "Focus Foundations",
        "subtitle": "Build attention",
        "description": "One lesson a day.",
        "category": "self",
        "level": "beginner",
        "format": "mixed",
        "durationDays": 7,
        "minutesPerDay": 10,
        "rating": 4.8,
        "reviewCount": 214,
        "price": 0,
        "featured": true,
        "thumbnail": "thumb.jpg",
        "tags": ["focus"],
        "modules": [
          {
            "id": "m1",
            "title": "Week One",
            "lessons": [
              {"id": "l1", "title": "Start", "type": "reading", "estimateMinutes": 8}
            ]
          }
        ]
      }"#,
    )
    .unwrap();

    assert_eq!(course.duration_days, 7);
    assert_eq!(course.review_count, 214);
    assert!(course.free());
    assert_eq!(course.first_lesson().unwrap().id, "l1");
  }
}
