use super::*;

pub type Params = BTreeMap<String, String>;

#[derive(Clone, Debug, PartialEq)]
pub struct Pattern {
  segments: Vec<Segment>,
}

#[derive(Clone, Debug, PartialEq)]
enum Segment {
  Literal(String),
  Param(String),
  Wildcard,
}

impl Pattern {
  pub fn new(pattern: &str) -> Self {
    Self {
      segments: pattern
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
          if segment == "*" {
            Segment::Wildcard
          } else if let Some(name) = segment.strip_prefix(':') {
            Segment::Param(name.into())
          } else {
            Segment::Literal(segment.into())
          }
        })
        .collect(),
    }
  }

  pub fn root() -> Self {
    Self::new("/")
  }

  pub fn is_root(&self) -> bool {
    self.segments.is_empty()
  }

  pub fn capture(&self, path: &str) -> Option<Params> {
    let parts = path
      .split('/')
      .filter(|part| !part.is_empty())
      .collect::<Vec<&str>>();

    let wildcard = self.segments.contains(&Segment::Wildcard);

    if !wildcard && self.segments.len() != parts.len() {
      return None;
    }

    let mut params = Params::new();

    for (i, segment) in self.segments.iter().enumerate() {
      match segment {
        Segment::Wildcard => {}
        Segment::Literal(literal) => {
          if parts.get(i) != Some(&literal.as_str()) {
            return None;
          }
        }
        Segment::Param(name) => {
          params.insert(name.clone(), (*parts.get(i)?).into());
        }
      }
    }

    Some(params)
  }
}

pub fn decompose(hash: &str) -> (String, Params) {
  let hash = hash.strip_prefix('#').unwrap_or(hash);

  let hash = if hash.is_empty() { "/" } else { hash };

  let (path, query) = match hash.split_once('?') {
    Some((path, query)) => (path, query),
    None => (hash, ""),
  };

  let params = url::form_urlencoded::parse(query.as_bytes())
    .map(|(key, value)| (key.into_owned(), value.into_owned()))
    .collect();

  (path.into(), params)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn params(pairs: &[(&str, &str)]) -> Params {
    pairs
      .iter()
      .map(|(key, value)| (key.to_string(), value.to_string()))
      .collect()
  }

  #[test]
  fn literal_match() {
    let pattern = Pattern::new("/courses");

    assert_eq!(pattern.capture("/courses"), Some(Params::new()));
    assert_eq!(pattern.capture("/courses/"), Some(Params::new()));
    assert_eq!(pattern.capture("/blog"), None);
    assert_eq!(pattern.capture("/courses/extra"), None);
  }

  #[test]
  fn root_matches_empty_path() {
    assert_eq!(Pattern::root().capture("/"), Some(Params::new()));
    assert!(Pattern::root().is_root());
    assert!(!Pattern::new("/courses").is_root());
  }

  #[test]
  fn path_parameters_capture() {
    let pattern = Pattern::new("/lesson/:course/:lesson");

    assert_eq!(
      pattern.capture("/lesson/focus/l1"),
      Some(params(&[("course", "focus"), ("lesson", "l1")])),
    );
    assert_eq!(pattern.capture("/lesson/focus"), None);
  }

  #[test]
  fn wildcard_relaxes_length() {
    let pattern = Pattern::new("/files/*");

    assert!(pattern.capture("/files").is_some());
    assert!(pattern.capture("/files/a").is_some());
    assert!(pattern.capture("/files/a/b").is_some());
    assert!(pattern.capture("/other/a").is_none());
  }

  #[test]
  fn decompose_defaults_to_root() {
    assert_eq!(decompose(""), ("/".into(), Params::new()));
    assert_eq!(decompose("#"), ("/".into(), Params::new()));
    assert_eq!(decompose("#/courses"), ("/courses".into(), Params::new()));
  }

  #[test]
  fn decompose_splits_query() {
    let (path, query) = decompose("#/courses?category=self&search=deep%20work");

    assert_eq!(path, "/courses");
    assert_eq!(
      query,
      params(&[("category", "self"), ("search", "deep work")]),
    );
  }

  #[test]
  fn bare_query_keys_decode_empty() {
    let (_path, query) = decompose("#/courses?draft");
    assert_eq!(query, params(&[("draft", "")]));
  }
}
