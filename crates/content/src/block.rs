use super::*;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum Block {
  Text {
    content: String,
  },
  Callout {
    style: CalloutStyle,
    #[serde(default)]
    title: Option<String>,
    content: String,
  },
  Checklist {
    items: Vec<String>,
  },
  Quiz {
    question: String,
    options: Vec<QuizOption>,
    #[serde(default)]
    feedback: Option<Feedback>,
  },
  Reflection {
    prompt: String,
  },
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct QuizOption {
  pub text: String,
  #[serde(default)]
  pub correct: bool,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Feedback {
  #[serde(default)]
  pub correct: Option<String>,
  #[serde(default)]
  pub incorrect: Option<String>,
}

#[derive(Copy, Clone, Debug, Deserialize, IntoStaticStr, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CalloutStyle {
  Notice,
  Tip,
  Warning,
  Mistake,
}

impl CalloutStyle {
  pub fn name(self) -> &'static str {
    self.into()
  }
}

impl Display for CalloutStyle {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tagged() {
    assert_eq!(
      serde_json::from_str::<Block>(r#"{"type": "reflection", "prompt": "What changed?"}"#)
        .unwrap(),
      Block::Reflection {
        prompt: "What changed?".into()
      },
    );

    assert_eq!(
      serde_json::from_str::<Block>(
        r#"{
          "type": "quiz",
          "question": "Pick one",
          "options": [{"text": "a", "correct": true}, {"text": "b"}]
        }"#,
      )
      .unwrap(),
      Block::Quiz {
        question: "Pick one".into(),
        options: vec![
          QuizOption {
            text: "a".into(),
            correct: true
          },
          QuizOption {
            text: "b".into(),
            correct: false
          },
        ],
        feedback: None,
      },
    );
  }

  #[test]
  fn callout_style_names() {
    assert_eq!(CalloutStyle::Mistake.to_string(), "mistake");
    assert_eq!(
      serde_json::from_str::<CalloutStyle>(r#""tip""#).unwrap(),
      CalloutStyle::Tip,
    );
  }
}
