use super::*;

pub trait Page: Display + Sized + 'static {
  async fn initialize(params: Params) -> Result<Self, Error>;

  fn connected(&self, _root: &Element) {}
}

pub(crate) trait Rendered {
  fn html(&self) -> String;

  fn connected(&self, root: &Element);
}

impl<P: Page> Rendered for P {
  fn html(&self) -> String {
    self.to_string()
  }

  fn connected(&self, root: &Element) {
    Page::connected(self, root);
  }
}
