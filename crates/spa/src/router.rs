use super::*;

type Handler =
  Rc<dyn Fn(Params) -> Pin<Box<dyn Future<Output = Result<Box<dyn page::Rendered>, Error>>>>>;

pub struct Router {
  container: Element,
  routes: Vec<(Pattern, Handler)>,
}

#[derive(Boilerplate)]
#[boilerplate(filename = "error.html")]
struct ErrorHtml {
  message: String,
}

fn erase<P: Page>(
  params: Params,
) -> Pin<Box<dyn Future<Output = Result<Box<dyn page::Rendered>, Error>>>> {
  Box::pin(async move {
    P::initialize(params)
      .await
      .map(|page| Box::new(page) as Box<dyn page::Rendered>)
  })
}

impl Router {
  pub fn new(container: &str) -> Result<Self, Error> {
    Ok(Self {
      container: document()?
        .get_element_by_id(container)
        .context(error::ContainerMissing { id: container })?,
      routes: Vec::new(),
    })
  }

  pub fn route<P: Page>(mut self, pattern: &str) -> Self {
    self.routes.push((Pattern::new(pattern), Rc::new(erase::<P>)));
    self
  }

  pub fn mount(self) -> Result<(), Error> {
    let router = Rc::new(self);

    {
      let router = router.clone();
      window()?.listen("hashchange", move |_: web_sys::Event| {
        let router = router.clone();
        wasm_bindgen_futures::spawn_local(async move { router.dispatch().await });
      });
    }

    wasm_bindgen_futures::spawn_local(async move { router.dispatch().await });

    Ok(())
  }

  pub fn navigate(path: &str) {
    if let Ok(window) = window() {
      window.location().set_hash(path).unwrap();
    }
  }

  // re-render the current route without a navigation
  pub fn refresh() {
    if let Ok(window) = window() {
      if let Ok(event) = web_sys::Event::new("hashchange") {
        window.dispatch_event(&event).ok();
      }
    }
  }

  pub async fn dispatch(&self) {
    let Ok(window) = window() else {
      return;
    };

    let hash = window.location().hash().unwrap_or_default();

    let (path, mut params) = decompose(&hash);

    let matched = self
      .routes
      .iter()
      .find_map(|(pattern, handler)| {
        pattern
          .capture(&path)
          .map(|captured| (handler.clone(), captured))
      })
      .or_else(|| {
        self
          .routes
          .iter()
          .find(|(pattern, _handler)| pattern.is_root())
          .map(|(_pattern, handler)| (handler.clone(), Params::new()))
      });

    let Some((handler, captured)) = matched else {
      log::warn!("no route for `{path}`");
      return;
    };

    // path parameters shadow query parameters of the same name
    params.extend(captured);

    window.scroll_to_with_x_and_y(0.0, 0.0);

    log::debug!("dispatching `{path}`");

    match handler(params).await {
      Ok(page) => {
        self.container.set_inner_html(&page.html());
        page.connected(&self.container);
        self.announce(&path);
      }
      Err(err) => {
        log::error!("route `{path}` failed: {err}");
        self.container.set_inner_html(
          &ErrorHtml {
            message: err.to_string(),
          }
          .to_string(),
        );
      }
    }
  }

  fn announce(&self, path: &str) {
    let init = web_sys::CustomEventInit::new();
    init.set_detail(&JsValue::from_str(path));

    if let Ok(event) = web_sys::CustomEvent::new_with_event_init_dict("routechange", &init) {
      if let Ok(window) = window() {
        window.dispatch_event(&event).ok();
      }
    }
  }
}
