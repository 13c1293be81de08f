use super::*;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Testimonial {
  pub quote: String,
  pub name: String,
  pub outcome: String,
}
