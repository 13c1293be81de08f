use super::*;

#[derive(
  Copy, Clone, Debug, Deserialize, EnumString, IntoStaticStr, Serialize, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Level {
  Beginner,
  Intermediate,
  Advanced,
}

impl Level {
  pub fn name(self) -> &'static str {
    self.into()
  }
}

impl Display for Level {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}
