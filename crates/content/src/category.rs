use super::*;

#[derive(
  Copy,
  Clone,
  Debug,
  Deserialize,
  EnumString,
  IntoStaticStr,
  Serialize,
  PartialEq,
  Eq,
  Hash,
  PartialOrd,
  Ord,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Category {
  #[serde(rename = "self")]
  #[strum(serialize = "self")]
  SelfDevelopment,
  Creative,
  Business,
}

impl Category {
  pub fn name(self) -> &'static str {
    self.into()
  }

  pub fn label(self) -> &'static str {
    match self {
      Self::SelfDevelopment => "Self Development",
      Self::Creative => "Creative",
      Self::Business => "Business",
    }
  }
}

impl Display for Category {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}
