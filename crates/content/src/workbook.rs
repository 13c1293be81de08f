use super::*;

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
  #[serde(default)]
  pub fields: BTreeMap<String, String>,
  #[serde(default)]
  pub updated_at: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
  pub day: u8,
  pub fields: BTreeMap<String, String>,
  pub submitted_at: String,
}

impl Draft {
  pub fn record(&mut self, id: &str, value: &str) {
    if value.is_empty() {
      self.fields.remove(id);
    } else {
      self.fields.insert(id.into(), value.into());
    }
  }

  pub fn submit(&self, day: u8, submitted_at: String) -> Submission {
    Submission {
      day,
      fields: self.fields.clone(),
      submitted_at,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn record_drops_cleared_fields() {
    let mut draft = Draft::default();

    draft.record("name", "Ada");
    draft.record("niche", "pottery");
    draft.record("name", "");

    assert_eq!(draft.fields.len(), 1);
    assert_eq!(draft.fields.get("niche").map(String::as_str), Some("pottery"));
  }

  #[test]
  fn submit_copies_fields() {
    let mut draft = Draft::default();
    draft.record("name", "Ada");

    let submission = draft.submit(3, "2025-01-01T00:00:00Z".into());

    assert_eq!(submission.day, 3);
    assert_eq!(submission.fields, draft.fields);
    assert_eq!(submission.submitted_at, "2025-01-01T00:00:00Z");
  }
}
