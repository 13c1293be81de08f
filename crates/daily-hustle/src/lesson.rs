use super::*;

#[derive(Boilerplate)]
#[boilerplate(filename = "lesson.html")]
pub struct LessonPage {
  view: Option<View>,
}

pub struct View {
  course: Course,
  lesson: Lesson,
  module_title: String,
  prev: Option<Lesson>,
  next: Option<Lesson>,
  complete: bool,
  progress: u8,
  completed: Vec<String>,
  blocks: Vec<BlockView>,
}

enum BlockView {
  Text(String),
  Callout {
    style: CalloutStyle,
    title: Option<String>,
    content: String,
  },
  Checklist {
    items: Vec<(usize, String, bool)>,
  },
  Quiz(QuizHtml),
  Reflection {
    prompt: String,
    saved: String,
  },
}

fn blocks(store: &Store, slug: &str, lesson: &Lesson) -> Vec<BlockView> {
  let mut quizzes = 0;

  lesson
    .blocks
    .iter()
    .map(|block| match block {
      Block::Text { content } => BlockView::Text(content.clone()),
      Block::Callout {
        style,
        title,
        content,
      } => BlockView::Callout {
        style: *style,
        title: title.clone(),
        content: content.clone(),
      },
      Block::Checklist { items } => {
        let checked = store.checklist(slug, &lesson.id);
        BlockView::Checklist {
          items: items
            .iter()
            .enumerate()
            .map(|(index, item)| (index, item.clone(), checked.contains(&index)))
            .collect(),
        }
      }
      Block::Quiz {
        question,
        options,
        feedback,
      } => {
        let index = quizzes;
        quizzes += 1;
        BlockView::Quiz(QuizHtml {
          course: slug.into(),
          lesson: lesson.id.clone(),
          index,
          question: question.clone(),
          options: options.clone(),
          feedback: feedback.clone(),
          answer: store.quiz_answer(slug, &lesson.id, index),
        })
      }
      Block::Reflection { prompt } => BlockView::Reflection {
        prompt: prompt.clone(),
        saved: store.reflection(slug, &lesson.id),
      },
    })
    .collect()
}

impl Page for LessonPage {
  async fn initialize(params: Params) -> Result<Self, Error> {
    let slug = params.get("course").cloned().unwrap_or_default();
    let id = params.get("lesson").cloned().unwrap_or_default();

    let Some(course) = Api::default().course(&slug).await? else {
      return Ok(Self { view: None });
    };

    let Some((module_title, lesson)) = course
      .lesson(&id)
      .map(|(module, lesson)| (module.title.clone(), lesson.clone()))
    else {
      return Ok(Self { view: None });
    };

    let store = store()?;

    // landing on a lesson enrolls you
    if !store.is_enrolled(&slug) {
      store.enroll(&slug)?;
    }

    let (prev, next) = {
      let (prev, next) = course.adjacent(&id);
      (prev.cloned(), next.cloned())
    };

    Ok(Self {
      view: Some(View {
        complete: store.lesson_complete(&slug, &id),
        progress: store.percent(&course),
        completed: store
          .progress(&slug)
          .map(|progress| progress.completed_lessons)
          .unwrap_or_default(),
        blocks: blocks(&store, &slug, &lesson),
        module_title,
        prev,
        next,
        lesson,
        course,
      }),
    })
  }

  fn connected(&self, root: &Element) {
    let Some(view) = &self.view else {
      return;
    };

    let slug = view.course.slug.clone();
    let id = view.lesson.id.clone();

    for checkbox in root.select_all::<HtmlElement>(".checklist-checkbox") {
      let slug = slug.clone();
      let id = id.clone();
      let handle = checkbox.clone();
      checkbox.listen("click", move |_: Event| {
        let Some(index) = handle
          .get_attribute("data-index")
          .and_then(|index| index.parse().ok())
        else {
          return;
        };

        if let Err(err) = store().and_then(|store| store.toggle_checklist(&slug, &id, index)) {
          log::error!("saving checklist failed: {err}");
          return;
        }

        let checked = handle.class_list().toggle("checked").unwrap_or_default();
        if let Ok(Some(item)) = handle.closest(".checklist-item") {
          item.class_list().toggle("checked").ok();
        }
        handle
          .set_attribute("aria-checked", if checked { "true" } else { "false" })
          .ok();
      });
    }

    for option in root.select_all::<HtmlElement>(".quiz-option") {
      let handle = option.clone();
      option.listen("click", move |_: Event| {
        let Ok(Some(quiz)) = handle.closest(".quiz") else {
          return;
        };

        // answered quizzes are frozen
        if quiz.select_optional::<Element>(".quiz-feedback").is_some() {
          return;
        }

        for other in quiz.select_all::<Element>(".quiz-option") {
          other.class_list().remove_1("selected").ok();
        }
        handle.class_list().add_1("selected").ok();
      });
    }

    let quizzes = view
      .blocks
      .iter()
      .filter_map(|block| match block {
        BlockView::Quiz(quiz) => Some(quiz.clone()),
        _ => None,
      })
      .collect::<Vec<QuizHtml>>();

    for button in root.select_all::<HtmlButtonElement>(".quiz-check") {
      let slug = slug.clone();
      let id = id.clone();
      let quizzes = quizzes.clone();
      let handle = button.clone();
      button.listen("click", move |_: Event| {
        let Ok(Some(quiz)) = handle.closest(".quiz") else {
          return;
        };

        let Some(index) = quiz
          .get_attribute("data-quiz")
          .and_then(|index| index.parse::<usize>().ok())
        else {
          return;
        };

        let Some(answer) = quiz
          .select_optional::<Element>(".quiz-option.selected")
          .and_then(|selected| selected.get_attribute("data-index"))
          .and_then(|selected| selected.parse::<usize>().ok())
        else {
          return;
        };

        if let Err(err) = store().and_then(|store| store.set_quiz_answer(&slug, &id, index, answer))
        {
          log::error!("saving quiz answer failed: {err}");
          return;
        }

        if let Some(seed) = quizzes.get(index) {
          let mut answered = seed.clone();
          answered.answer = Some(answer);
          quiz.set_outer_html(&answered.to_string());
        }
      });
    }

    for textarea in root.select_all::<HtmlTextAreaElement>(".lesson-reflection-textarea") {
      let slug = slug.clone();
      let id = id.clone();
      let handle = textarea.clone();
      textarea.listen("input", move |_: Event| {
        if let Err(err) =
          store().and_then(|store| store.set_reflection(&slug, &id, &handle.value()))
        {
          log::error!("saving reflection failed: {err}");
        }
      });
    }

    if !view.complete {
      if let Some(button) = root.select_optional::<HtmlButtonElement>("#mark-complete-btn") {
        let slug = slug.clone();
        let id = id.clone();
        let course = view.course.clone();
        let root = root.clone();
        let handle = button.clone();
        button.listen("click", move |_: Event| {
          let progress = match store().and_then(|store| store.complete_lesson(&slug, &id)) {
            Ok(progress) => progress,
            Err(err) => {
              log::error!("marking lesson complete failed: {err}");
              return;
            }
          };

          handle.set_text_content(Some("Completed ✓"));
          handle.class_list().remove_1("btn-primary").ok();
          handle.class_list().add_1("btn-ghost").ok();
          handle.set_disabled(true);

          if let Some(item) =
            root.select_optional::<Element>(&format!("a[href=\"#/lesson/{slug}/{id}\"]"))
          {
            item.class_list().add_1("completed").ok();
            if let Some(check) = item.select_optional::<Element>(".check") {
              check.set_text_content(Some("✓"));
            }
          }

          let percent = progress.percent(&course);

          for text in root.select_all::<Element>(".lesson-progress-text") {
            text.set_text_content(Some(&format!("{percent}%")));
          }
          for text in root.select_all::<Element>(".lesson-sidebar-progress") {
            text.set_text_content(Some(&format!("{percent}% complete")));
          }
          for bar in root.select_all::<HtmlElement>(".progress-bar") {
            bar.style().set_property("width", &format!("{percent}%")).ok();
          }
        });
      }
    }
  }
}
