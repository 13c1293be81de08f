use super::*;

#[derive(Boilerplate)]
#[boilerplate(filename = "about.html")]
pub struct About {}

impl Page for About {
  async fn initialize(_params: Params) -> Result<Self, Error> {
    Ok(Self {})
  }
}
