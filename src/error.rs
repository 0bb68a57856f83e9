//! Client-level error types shared across the dispatcher, endpoints, and transports.
//!
//! Failures fall into four disjoint classes so callers can branch on what went wrong:
//! local misconfiguration ([`ConfigError`]), connectivity ([`TransportError`]), a
//! well-formed rejection from the remote service ([`ApiError`]), and a response body that
//! does not match the expected shape ([`DecodeError`]).

// crates.io
use oauth2::HttpClientError;
// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, timeout, cancellation).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// The remote service answered with a structured error payload.
	#[error(transparent)]
	Api(#[from] ApiError),
	/// A response body did not match the expected shape.
	#[error(transparent)]
	Decode(#[from] DecodeError),
}
impl Error {
	/// Returns true if the failure is a structured rejection from the remote service.
	pub fn is_api_error(&self) -> bool {
		matches!(self, Self::Api(_))
	}

	/// Returns the structured API error, if this failure is one.
	pub fn api_error(&self) -> Option<&ApiError> {
		match self {
			Self::Api(e) => Some(e),
			_ => None,
		}
	}

	/// Returns true if the call was cancelled or ran past its deadline.
	pub fn is_cancelled(&self) -> bool {
		matches!(self, Self::Transport(TransportError::Cancelled | TransportError::TimedOut { .. }))
	}
}

/// Configuration and validation failures raised before a request leaves the process.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed (bad URL or header).
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
	/// Proxy URL cannot be parsed.
	#[error("Proxy URL is invalid.")]
	InvalidProxy {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Caller supplied a header name or value that is not valid HTTP.
	#[error("Header `{name}` is not a valid HTTP header.")]
	InvalidHeader {
		/// Offending header name as supplied.
		name: String,
	},
	/// Request path does not start with `/`.
	#[error("Request path `{path}` must start with '/'.")]
	InvalidPath {
		/// Offending path.
		path: String,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO, cancellation). Never retried by the client.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the API.")]
	Io(#[from] std::io::Error),
	/// Response framing could not be parsed.
	#[error("API response could not be parsed as HTTP.")]
	Http(#[source] oauth2::http::Error),
	/// The caller cancelled the call before a response arrived.
	#[error("The API call was cancelled.")]
	Cancelled,
	/// The per-call deadline elapsed before a response arrived.
	#[error("The API call did not complete within {after:?}.")]
	TimedOut {
		/// Deadline that elapsed.
		after: Duration,
	},
	/// Transport reported an error without a structured source.
	#[error("HTTP client error occurred while calling the API: {message}.")]
	Other {
		/// Transport-supplied description.
		message: String,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}

	/// Maps an [`HttpClientError`] emitted by an [`HttpTransport`](crate::http::HttpTransport).
	pub fn from_client_error<E>(err: HttpClientError<E>) -> Self
	where
		E: 'static + Send + Sync + StdError,
	{
		match err {
			HttpClientError::Reqwest(inner) => Self::Network { source: inner },
			HttpClientError::Http(inner) => Self::Http(inner),
			HttpClientError::Io(inner) => Self::Io(inner),
			HttpClientError::Other(message) => Self::Other { message },
			other => Self::Other { message: other.to_string() },
		}
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Which response body failed to decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind {
	/// Success payload destined for an endpoint's result type.
	Success,
	/// Error payload returned alongside an HTTP status >= 400.
	Error,
}
impl BodyKind {
	/// Returns a stable label suitable for messages and log fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			BodyKind::Success => "success",
			BodyKind::Error => "error",
		}
	}
}

/// A response arrived but its JSON did not match the expected shape.
#[derive(Debug, ThisError)]
#[error("API returned a malformed {} body (HTTP {status}).", .kind.as_str())]
pub struct DecodeError {
	/// Structured parsing failure, including the JSON path of the mismatch.
	#[source]
	pub source: serde_path_to_error::Error<serde_json::Error>,
	/// HTTP status code of the response.
	pub status: u16,
	/// Body that failed to decode.
	pub kind: BodyKind,
}
impl DecodeError {
	/// Decodes `body` as `T`, reporting the JSON path on failure.
	pub fn decode<T>(body: &[u8], status: u16, kind: BodyKind) -> Result<T, Self>
	where
		T: DeserializeOwned,
	{
		let mut de = serde_json::Deserializer::from_slice(body);

		serde_path_to_error::deserialize(&mut de).map_err(|source| Self { source, status, kind })
	}
}

/// Structured error payload returned by the remote service with an HTTP status >= 400.
#[derive(Clone, Debug, PartialEq, Deserialize, ThisError)]
#[error("API rejected the request with result {result_number}: {message}.")]
pub struct ApiError {
	/// Remote error flag (`error` on the wire).
	#[serde(rename = "error", default)]
	pub flagged: bool,
	/// Remote message; a scope list, free text, or an arbitrary object depending on endpoint.
	#[serde(default)]
	pub message: ApiErrorMessage,
	/// Remote numeric result code.
	pub result_number: i64,
	/// HTTP status the payload arrived with.
	#[serde(skip)]
	pub status: u16,
}

/// Message carried by an [`ApiError`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ApiErrorMessage {
	/// Scope-style message: `{"scope": ["..."]}`.
	Scope {
		/// Scopes named by the service.
		scope: Vec<String>,
	},
	/// Free-form text message.
	Text(String),
	/// Any other JSON shape, kept verbatim.
	Other(serde_json::Value),
}
impl Default for ApiErrorMessage {
	fn default() -> Self {
		Self::Text(String::new())
	}
}
impl Display for ApiErrorMessage {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::Scope { scope } => write!(f, "scope [{}]", scope.join(", ")),
			Self::Text(text) => f.write_str(text),
			Self::Other(value) => write!(f, "{value}"),
		}
	}
}
