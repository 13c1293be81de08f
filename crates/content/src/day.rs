use super::*;

pub const DAYS: u8 = 27;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Day {
  pub number: u8,
  pub title: String,
  pub focus: String,
  #[serde(default)]
  pub tasks: Vec<String>,
  pub form: Form,
}

impl Day {
  pub fn launch_percent(submitted: usize) -> u8 {
    ((submitted.min(usize::from(DAYS)) as f64 / f64::from(DAYS)) * 100.0).round() as u8
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn launch_percent_rounds_and_saturates() {
    assert_eq!(Day::launch_percent(0), 0);
    assert_eq!(Day::launch_percent(1), 4);
    assert_eq!(Day::launch_percent(14), 52);
    assert_eq!(Day::launch_percent(27), 100);
    assert_eq!(Day::launch_percent(30), 100);
  }
}
