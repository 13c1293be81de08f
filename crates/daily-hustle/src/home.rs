use super::*;

#[derive(Boilerplate)]
#[boilerplate(filename = "home.html")]
pub struct Home {
  featured: Vec<Course>,
  testimonials: Vec<Testimonial>,
  posts: Vec<Post>,
  stats: Stats,
}

impl Page for Home {
  async fn initialize(_params: Params) -> Result<Self, Error> {
    let api = Api::default();

    let (courses, testimonials, posts) =
      futures::try_join!(api.courses(), api.testimonials(), api.posts())?;

    Ok(Self {
      stats: Stats::new(&courses),
      featured: content::featured(&courses).into_iter().cloned().collect(),
      testimonials: testimonials.into_iter().take(3).collect(),
      posts: posts.into_iter().take(3).collect(),
    })
  }
}
