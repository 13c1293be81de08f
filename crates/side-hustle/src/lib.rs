use {
  self::{day::DayPage, overview::Overview, settings::Settings},
  spa::{
    boilerplate::Boilerplate,
    content::{Day, Draft, FieldKind, DAYS},
    html_escaper::Escape,
    log,
    wasm_bindgen::{self, prelude::wasm_bindgen, JsCast, JsValue},
    wasm_bindgen_futures,
    web_sys::{
      Element, Event, HtmlButtonElement, HtmlElement, HtmlInputElement, HtmlSelectElement,
      HtmlTextAreaElement,
    },
    Api, Error, EventTargetExt, Page, Params, Router, Select, Store,
  },
  std::{cell::RefCell, rc::Rc},
};

mod day;
mod overview;
mod settings;

fn store() -> Result<Store, Error> {
  Store::open("sh_")
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
  spa::initialize_console(log::Level::Info)?;

  log::info!("27-day launch starting");

  Router::new("app")?
    .route::<Overview>("/")
    .route::<DayPage>("/day/:number")
    .route::<Settings>("/settings")
    .mount()?;

  Ok(())
}
