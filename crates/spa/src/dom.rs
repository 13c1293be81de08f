use super::*;

pub fn window() -> Result<Window, Error> {
  web_sys::window().context(error::WindowMissing)
}

pub fn document() -> Result<Document, Error> {
  window()?.document().context(error::DocumentMissing)
}

pub trait Cast {
  fn cast<T: JsCast>(self) -> T;
}

impl<V: JsCast + std::fmt::Debug> Cast for V {
  fn cast<T: JsCast>(self) -> T {
    self.dyn_into::<T>().expect("cast failed")
  }
}

pub trait Select {
  fn select<T: JsCast>(&self, selector: &str) -> T {
    self
      .select_optional::<T>(selector)
      .expect("selector returned no elements")
  }

  fn select_optional<T: JsCast>(&self, selector: &str) -> Option<T>;

  fn select_all<T: JsCast>(&self, selector: &str) -> Vec<T>;
}

macro_rules! select {
  ($ty:ty) => {
    impl Select for $ty {
      fn select_optional<T: JsCast>(&self, selector: &str) -> Option<T> {
        self
          .query_selector(selector)
          .expect("invalid selector")
          .map(|element| element.cast::<T>())
      }

      fn select_all<T: JsCast>(&self, selector: &str) -> Vec<T> {
        let list = self.query_selector_all(selector).expect("invalid selector");
        let mut nodes = Vec::new();
        for i in 0..list.length() {
          let node = list.item(i).unwrap();
          nodes.push(node.cast::<T>());
        }
        nodes
      }
    }
  };
}

select!(Document);
select!(Element);

pub trait EventTargetExt {
  fn listen<E, F>(&self, event_type: &str, callback: F)
  where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static;
}

impl<T: Deref<Target = EventTarget>> EventTargetExt for T {
  fn listen<E, F>(&self, event_type: &str, callback: F)
  where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
  {
    let closure = Closure::new(callback);
    self
      .add_event_listener_with_callback(event_type, closure.as_ref().dyn_ref().unwrap())
      .unwrap();
    closure.forget();
  }
}
