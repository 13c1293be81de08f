#![allow(async_fn_in_trait)]

use {
  boilerplate::Boilerplate,
  content::{Course, Day, Draft, Post, Progress, Stats, Submission, Testimonial},
  html_escaper::Escape,
  reqwest::{StatusCode, Url},
  serde::{de::DeserializeOwned, Deserialize, Serialize},
  snafu::{ensure, OptionExt, ResultExt, Snafu},
  std::{
    cell::RefCell,
    collections::BTreeMap,
    fmt::Display,
    future::Future,
    ops::Deref,
    pin::Pin,
    rc::Rc,
  },
  wasm_bindgen::{closure::Closure, convert::FromWasmAbi, JsCast, JsError, JsValue},
  web_sys::{Document, Element, EventTarget, Storage, Window},
};

pub use {
  self::{
    api::Api,
    dom::{document, window, Cast, EventTargetExt, Select},
    error::Error,
    page::Page,
    route::{decompose, Params, Pattern},
    router::Router,
    store::{Store, User},
  },
  boilerplate, content, futures, gloo_timers, html_escaper, js_sys, log, serde_json, wasm_bindgen,
  wasm_bindgen_futures, web_sys,
};

mod api;
mod dom;
mod error;
mod page;
mod route;
mod router;
mod store;

pub fn initialize_console(level: log::Level) -> Result<(), Error> {
  console_error_panic_hook::set_once();
  console_log::init_with_level(level).map_err(|source| error::SetLogger { source }.build())?;
  Ok(())
}
