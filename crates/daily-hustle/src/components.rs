use super::*;

#[derive(Boilerplate)]
#[boilerplate(filename = "course-card.html")]
pub struct CourseCard<'a> {
  pub course: &'a Course,
}

#[derive(Boilerplate)]
#[boilerplate(filename = "rating.html")]
pub struct Rating {
  pub value: f64,
  pub count: Option<u32>,
}

#[derive(Boilerplate)]
#[boilerplate(filename = "progress-bar.html")]
pub struct ProgressBar {
  pub percent: u8,
  pub text: bool,
}

#[derive(Boilerplate)]
#[boilerplate(filename = "empty-state.html")]
pub struct EmptyState {
  pub title: &'static str,
  pub text: &'static str,
}

#[derive(Boilerplate)]
#[boilerplate(filename = "callout.html")]
pub struct Callout<'a> {
  pub style: CalloutStyle,
  pub title: Option<&'a str>,
  pub content: &'a str,
}

#[derive(Boilerplate)]
#[boilerplate(filename = "checklist.html")]
pub struct ChecklistHtml<'a> {
  pub course: &'a str,
  pub lesson: &'a str,
  pub items: Vec<(usize, &'a str, bool)>,
}

#[derive(Boilerplate, Clone)]
#[boilerplate(filename = "quiz.html")]
pub struct QuizHtml {
  pub course: String,
  pub lesson: String,
  pub index: usize,
  pub question: String,
  pub options: Vec<content::QuizOption>,
  pub feedback: Option<content::Feedback>,
  pub answer: Option<usize>,
}

impl QuizHtml {
  pub fn correct(&self) -> bool {
    self
      .answer
      .is_some_and(|answer| self.options.get(answer).is_some_and(|option| option.correct))
  }

  pub fn verdict(&self) -> &str {
    let feedback = self.feedback.as_ref();

    if self.correct() {
      feedback
        .and_then(|feedback| feedback.correct.as_deref())
        .unwrap_or("Correct!")
    } else {
      feedback
        .and_then(|feedback| feedback.incorrect.as_deref())
        .unwrap_or("Not quite. Review the lesson and try again.")
    }
  }
}

#[derive(Boilerplate)]
#[boilerplate(filename = "post-card.html")]
pub struct PostCard<'a> {
  pub post: &'a Post,
}

#[derive(Boilerplate)]
#[boilerplate(filename = "reflection.html")]
pub struct ReflectionHtml<'a> {
  pub course: &'a str,
  pub lesson: &'a str,
  pub prompt: &'a str,
  pub saved: String,
}
