use super::*;

#[derive(Boilerplate)]
#[boilerplate(filename = "dashboard.html")]
pub struct Dashboard {
  name: String,
  enrolled: Vec<Enrolled>,
  recommendations: Vec<Course>,
  lessons_completed: usize,
  finished: usize,
}

pub struct Enrolled {
  course: Course,
  percent: u8,
}

impl Page for Dashboard {
  async fn initialize(_params: Params) -> Result<Self, Error> {
    let store = store()?;

    let slugs = store.enrolled();

    let catalog = Api::default().courses().await?;

    let enrolled = slugs
      .iter()
      .filter_map(|slug| content::find(&catalog, slug).cloned())
      .map(|course| {
        let percent = store.percent(&course);
        Enrolled { course, percent }
      })
      .collect::<Vec<Enrolled>>();

    Ok(Self {
      name: store
        .user()
        .map(|user| user.name)
        .unwrap_or_else(|| "Guest".into()),
      lessons_completed: slugs.iter().map(|slug| store.completed_lessons(slug)).sum(),
      finished: enrolled
        .iter()
        .filter(|enrolled| enrolled.percent == 100)
        .count(),
      recommendations: catalog
        .into_iter()
        .filter(|course| !slugs.contains(&course.slug))
        .take(3)
        .collect(),
      enrolled,
    })
  }
}
