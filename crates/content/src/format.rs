use super::*;

#[derive(
  Copy, Clone, Debug, Deserialize, EnumString, IntoStaticStr, Serialize, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Format {
  Video,
  Text,
  Audio,
  Mixed,
}

impl Format {
  pub fn name(self) -> &'static str {
    self.into()
  }
}

impl Display for Format {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}
