use {
  self::{
    about::About,
    blog::Blog,
    components::{
      Callout, ChecklistHtml, CourseCard, EmptyState, PostCard, ProgressBar, QuizHtml, Rating,
      ReflectionHtml,
    },
    contact::Contact,
    course::CoursePage,
    courses::Courses,
    dashboard::Dashboard,
    home::Home,
    lesson::LessonPage,
  },
  spa::{
    boilerplate::Boilerplate,
    content::{self, Block, CalloutStyle, Course, Filter, Lesson, Post, Stats, Testimonial},
    futures,
    gloo_timers::callback::Timeout,
    html_escaper::Escape,
    log,
    wasm_bindgen::{self, prelude::wasm_bindgen, JsValue},
    web_sys::{
      Element, Event, HtmlButtonElement, HtmlElement, HtmlInputElement, HtmlSelectElement,
      HtmlTextAreaElement,
    },
    Api, Error, EventTargetExt, Page, Params, Router, Select, Store,
  },
  std::{cell::RefCell, rc::Rc},
};

mod about;
mod blog;
mod components;
mod contact;
mod course;
mod courses;
mod dashboard;
mod home;
mod lesson;

fn store() -> Result<Store, Error> {
  Store::open("dh_")
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
  spa::initialize_console(log::Level::Info)?;

  log::info!("daily hustle starting");

  Router::new("app")?
    .route::<Home>("/")
    .route::<Courses>("/courses")
    .route::<CoursePage>("/course/:slug")
    .route::<LessonPage>("/lesson/:course/:lesson")
    .route::<Dashboard>("/dashboard")
    .route::<Blog>("/blog")
    .route::<About>("/about")
    .route::<Contact>("/contact")
    .mount()?;

  Ok(())
}
