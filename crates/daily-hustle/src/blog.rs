use super::*;

#[derive(Boilerplate)]
#[boilerplate(filename = "blog.html")]
pub struct Blog {
  posts: Vec<Post>,
}

impl Page for Blog {
  async fn initialize(_params: Params) -> Result<Self, Error> {
    Ok(Self {
      posts: Api::default().posts().await?,
    })
  }
}
