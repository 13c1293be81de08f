use super::*;

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Form {
  pub fields: Vec<Field>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Field {
  pub id: String,
  pub label: String,
  pub kind: FieldKind,
  #[serde(default)]
  pub required: bool,
  #[serde(default)]
  pub placeholder: String,
  #[serde(default)]
  pub options: Vec<String>,
}

#[derive(Copy, Clone, Debug, Deserialize, IntoStaticStr, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FieldKind {
  Text,
  Textarea,
  Number,
  Checkbox,
  Select,
}

impl Form {
  pub fn field(&self, id: &str) -> Option<&Field> {
    self.fields.iter().find(|field| field.id == id)
  }

  pub fn answered(&self, values: &BTreeMap<String, String>) -> usize {
    self
      .fields
      .iter()
      .filter(|field| field.answered(values))
      .count()
  }

  pub fn missing(&self, values: &BTreeMap<String, String>) -> Vec<&Field> {
    self
      .fields
      .iter()
      .filter(|field| field.required && !field.answered(values))
      .collect()
  }

  pub fn percent(&self, values: &BTreeMap<String, String>) -> u8 {
    let required = self.fields.iter().filter(|field| field.required).count();

    if required == 0 {
      return 100;
    }

    let answered = self
      .fields
      .iter()
      .filter(|field| field.required && field.answered(values))
      .count();

    ((answered as f64 / required as f64) * 100.0).round() as u8
  }
}

impl Field {
  pub fn answered(&self, values: &BTreeMap<String, String>) -> bool {
    values
      .get(&self.id)
      .is_some_and(|value| !value.trim().is_empty())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn field(id: &str, required: bool) -> Field {
    Field {
      id: id.into(),
      label: id.to_uppercase(),
      kind: FieldKind::Text,
      required,
      placeholder: String::new(),
      options: Vec::new(),
    }
  }

  fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
      .iter()
      .map(|(key, value)| (key.to_string(), value.to_string()))
      .collect()
  }

  #[test]
  fn blank_answers_do_not_count() {
    let form = Form {
      fields: vec![field("name", true), field("notes", false)],
    };

    assert_eq!(form.answered(&values(&[("name", "  "), ("notes", "x")])), 1);
    assert_eq!(form.answered(&values(&[("name", "Ada")])), 1);
  }

  #[test]
  fn missing_lists_unanswered_required_fields() {
    let form = Form {
      fields: vec![field("name", true), field("niche", true), field("notes", false)],
    };

    let missing = form.missing(&values(&[("niche", "pottery")]));

    assert_eq!(
      missing
        .iter()
        .map(|field| field.id.as_str())
        .collect::<Vec<&str>>(),
      ["name"],
    );
  }

  #[test]
  fn percent_counts_required_only() {
    let form = Form {
      fields: vec![field("a", true), field("b", true), field("c", false)],
    };

    assert_eq!(form.percent(&values(&[])), 0);
    assert_eq!(form.percent(&values(&[("a", "x"), ("c", "y")])), 50);
    assert_eq!(form.percent(&values(&[("a", "x"), ("b", "y")])), 100);
  }

  #[test]
  fn percent_of_optional_form_is_complete() {
    let form = Form {
      fields: vec![field("notes", false)],
    };

    assert_eq!(form.percent(&values(&[])), 100);
  }

  #[test]
  fn wire_format() {
    let form = serde_json::from_str::<Form>(
      r#"{
        "fields": [
          {"id": "niche", "label": "Your niche", "kind": "select", "required": true,
           "options": ["pottery", "prints"]},
          {"id": "notes", "label": "Notes", "kind": "textarea"}
        ]
      }"#,
    )
    .unwrap();

    assert_eq!(form.fields.len(), 2);
    assert_eq!(form.field("niche").unwrap().kind, FieldKind::Select);
    assert!(!form.field("notes").unwrap().required);
    assert!(form.field("missing").is_none());
  }
}
