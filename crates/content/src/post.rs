use super::*;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
  pub slug: String,
  pub title: String,
  pub category: String,
  pub excerpt: String,
  pub thumbnail: String,
  pub read_time: u32,
  pub date: String,
}
