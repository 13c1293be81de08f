use super::*;

#[derive(Snafu, Debug)]
#[snafu(visibility(pub(crate)), context(suffix(false)))]
pub enum Error {
  SetLogger {
    #[snafu(source(false))]
    source: log::SetLoggerError,
  },
  #[snafu(display("request to {url} failed"))]
  Request {
    url: Url,
    source: reqwest::Error,
  },
  #[snafu(display("response from {url} failed with {status}"))]
  Status {
    url: Url,
    status: StatusCode,
  },
  #[snafu(display("deserializing response from {url} failed"))]
  Deserialize {
    url: Url,
    source: serde_json::Error,
  },
  #[snafu(display("serializing `{key}` failed"))]
  Serialize {
    key: String,
    source: serde_json::Error,
  },
  #[snafu(display("writing `{key}` to local storage failed"))]
  StorageWrite {
    key: String,
  },
  StorageUnavailable,
  WindowMissing,
  DocumentMissing,
  #[snafu(display("no `#{id}` element to mount into"))]
  ContainerMissing {
    id: String,
  },
  #[snafu(display("`{url}` is not a valid webhook url"))]
  WebhookUrl {
    url: String,
    source: url::ParseError,
  },
}

impl From<Error> for JsValue {
  fn from(err: Error) -> Self {
    JsError::new(&err.to_string()).into()
  }
}
