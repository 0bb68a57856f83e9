//! Request descriptors, parameter encoding, and per-call options.
//!
//! A [`RequestDescriptor`] collects everything one outbound call needs before the
//! dispatcher turns it into an HTTP request: method, path, three independent parameter
//! channels (query string, form body, JSON body), the endpoint's [`SecurityMode`], and any
//! caller overrides supplied through [`RequestOption`]s. Descriptors are single-use.

// crates.io
use serde_json::{Map, Number, Value};
use url::form_urlencoded::Serializer as FormSerializer;
use uuid::Uuid;
// self
use crate::{_prelude::*, error::ConfigError};

/// Query parameter carrying the per-request trace identifier.
pub const TRACE_ID_PARAM: &str = "traceid";

/// Credential-attachment strategy fixed per endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SecurityMode {
	/// No credentials are attached.
	None,
	/// Client username/password are attached as HTTP Basic credentials.
	BasicAuth,
	/// The cached access token is attached as a bearer token, acquiring one first if absent.
	BearerToken,
	/// The cached refresh token is sent as a refresh grant body, with Basic credentials.
	RefreshGrant,
}
impl SecurityMode {
	/// Returns true if the dispatcher attaches HTTP Basic credentials for this mode.
	pub const fn uses_basic_auth(self) -> bool {
		matches!(self, SecurityMode::BasicAuth | SecurityMode::RefreshGrant)
	}

	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			SecurityMode::None => "none",
			SecurityMode::BasicAuth => "basic_auth",
			SecurityMode::BearerToken => "bearer_token",
			SecurityMode::RefreshGrant => "refresh_grant",
		}
	}
}
impl Display for SecurityMode {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Closed set of parameter values with fixed encoding rules per variant.
///
/// In the query channel a [`List`](ParamValue::List) is JSON-encoded into a single string;
/// every other variant (and any list in the form channel) uses its [`Display`] text.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
	/// Text value.
	String(String),
	/// Signed integer value.
	Integer(i64),
	/// Floating-point value.
	///
	/// NaN and infinities have no JSON form: they encode as `null` in JSON bodies and as
	/// `NaN`/`inf` text in the query and form channels.
	Float(f64),
	/// Boolean value.
	Bool(bool),
	/// Ordered list of values.
	List(Vec<ParamValue>),
}
impl ParamValue {
	/// Converts the value into its JSON representation; non-finite floats become `null`.
	pub fn to_json(&self) -> Value {
		match self {
			ParamValue::String(v) => Value::String(v.clone()),
			ParamValue::Integer(v) => Value::Number((*v).into()),
			ParamValue::Float(v) => Number::from_f64(*v).map(Value::Number).unwrap_or(Value::Null),
			ParamValue::Bool(v) => Value::Bool(*v),
			ParamValue::List(items) => Value::Array(items.iter().map(Self::to_json).collect()),
		}
	}

	/// Encodes the value for the query string.
	pub fn to_query_value(&self) -> String {
		match self {
			ParamValue::List(_) => self.to_json().to_string(),
			other => other.to_string(),
		}
	}
}
impl Display for ParamValue {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			ParamValue::String(v) => f.write_str(v),
			ParamValue::Integer(v) => write!(f, "{v}"),
			ParamValue::Float(v) => write!(f, "{v}"),
			ParamValue::Bool(v) => write!(f, "{v}"),
			ParamValue::List(items) => {
				f.write_str("[")?;

				for (idx, item) in items.iter().enumerate() {
					if idx > 0 {
						f.write_str(" ")?;
					}

					write!(f, "{item}")?;
				}

				f.write_str("]")
			},
		}
	}
}
impl From<String> for ParamValue {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}
impl From<&str> for ParamValue {
	fn from(value: &str) -> Self {
		Self::String(value.to_owned())
	}
}
impl From<&String> for ParamValue {
	fn from(value: &String) -> Self {
		Self::String(value.clone())
	}
}
impl From<i64> for ParamValue {
	fn from(value: i64) -> Self {
		Self::Integer(value)
	}
}
impl From<i32> for ParamValue {
	fn from(value: i32) -> Self {
		Self::Integer(value.into())
	}
}
impl From<f64> for ParamValue {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}
impl From<bool> for ParamValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}
impl<T> From<Vec<T>> for ParamValue
where
	T: Into<ParamValue>,
{
	fn from(value: Vec<T>) -> Self {
		Self::List(value.into_iter().map(Into::into).collect())
	}
}
impl<T> From<&[T]> for ParamValue
where
	T: Clone + Into<ParamValue>,
{
	fn from(value: &[T]) -> Self {
		Self::List(value.iter().cloned().map(Into::into).collect())
	}
}

/// Key/value parameter mapping; later writes to the same key win.
pub type Params = BTreeMap<String, ParamValue>;

/// Multi-valued string mapping used for the query and form channels.
///
/// Encoding sorts by key and keeps insertion order among values of the same key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Values(BTreeMap<String, Vec<String>>);
impl Values {
	/// Replaces every value stored under `key`.
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.0.insert(key.into(), vec![value.into()]);
	}

	/// Appends a value under `key`.
	pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.0.entry(key.into()).or_default().push(value.into());
	}

	/// Returns the first value stored under `key`.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.get(key).and_then(|values| values.first()).map(String::as_str)
	}

	/// Returns true if no values are stored.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Encodes the mapping as `application/x-www-form-urlencoded` text.
	pub fn encode(&self) -> String {
		let mut serializer = FormSerializer::new(String::new());

		for (key, values) in &self.0 {
			for value in values {
				serializer.append_pair(key, value);
			}
		}

		serializer.finish()
	}
}

/// Per-call overrides accepted by every endpoint.
#[derive(Clone, Debug)]
pub enum RequestOption {
	/// Receive-window hint in milliseconds; accepted and carried, currently unused.
	RecvWindow(i64),
	/// Sets (`replace = true`) or appends a single header.
	Header {
		/// Header name.
		name: String,
		/// Header value.
		value: String,
		/// Replace existing values instead of appending.
		replace: bool,
	},
	/// Replaces the whole caller header map.
	Headers(HeaderMap),
	/// Fails the call with [`TransportError::TimedOut`](crate::error::TransportError::TimedOut)
	/// if no response arrives in time.
	///
	/// The budget covers the whole call, including an implicit bearer-token acquisition.
	Deadline(Duration),
	/// Fails the call with [`TransportError::Cancelled`](crate::error::TransportError::Cancelled)
	/// once the token is cancelled.
	Cancellation(CancellationToken),
}
impl RequestOption {
	/// Builds a receive-window option.
	pub fn recv_window(millis: i64) -> Self {
		Self::RecvWindow(millis)
	}

	/// Builds a single-header option.
	pub fn header(name: impl Into<String>, value: impl Into<String>, replace: bool) -> Self {
		Self::Header { name: name.into(), value: value.into(), replace }
	}

	/// Builds a header-map replacement option.
	pub fn headers(headers: HeaderMap) -> Self {
		Self::Headers(headers)
	}

	/// Builds a deadline option.
	pub fn deadline(after: Duration) -> Self {
		Self::Deadline(after)
	}

	/// Builds a cancellation option.
	pub fn cancellation(token: CancellationToken) -> Self {
		Self::Cancellation(token)
	}
}

/// Mutable description of one outbound call.
#[derive(Debug)]
pub struct RequestDescriptor {
	/// HTTP method.
	pub method: Method,
	/// Path appended to the client's base URL.
	pub path: String,
	/// Query-string channel.
	pub query: Values,
	/// Form-body channel.
	pub form: Values,
	/// Raw JSON body; takes precedence over the form body when present.
	pub json: Option<Vec<u8>>,
	/// Credential-attachment strategy.
	pub security: SecurityMode,
	/// Receive-window hint.
	pub recv_window: Option<i64>,
	/// Caller-supplied headers, extended by the security resolver.
	pub headers: HeaderMap,
	/// Optional deadline for the transport round-trip.
	pub deadline: Option<Duration>,
	/// Optional external cancellation signal.
	pub cancellation: Option<CancellationToken>,
}
impl RequestDescriptor {
	/// Creates an empty descriptor.
	pub fn new(method: Method, path: impl Into<String>, security: SecurityMode) -> Self {
		Self {
			method,
			path: path.into(),
			query: Values::default(),
			form: Values::default(),
			json: None,
			security,
			recv_window: None,
			headers: HeaderMap::new(),
			deadline: None,
			cancellation: None,
		}
	}

	/// Creates an empty `POST` descriptor.
	pub fn post(path: impl Into<String>, security: SecurityMode) -> Self {
		Self::new(Method::POST, path, security)
	}

	/// Appends a query parameter using its [`Display`] text.
	pub fn add_param(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
		self.query.add(key, value.into().to_string());

		self
	}

	/// Sets a query parameter; lists are JSON-encoded into a single string.
	pub fn set_param(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
		self.query.set(key, value.into().to_query_value());

		self
	}

	/// Sets every query parameter in `params`.
	pub fn set_params(&mut self, params: Params) -> &mut Self {
		for (key, value) in params {
			self.set_param(key, value);
		}

		self
	}

	/// Sets a form parameter using its [`Display`] text.
	pub fn set_form_param(
		&mut self,
		key: impl Into<String>,
		value: impl Into<ParamValue>,
	) -> &mut Self {
		self.form.set(key, value.into().to_string());

		self
	}

	/// Sets every form parameter in `params`.
	pub fn set_form_params(&mut self, params: Params) -> &mut Self {
		for (key, value) in params {
			self.set_form_param(key, value);
		}

		self
	}

	/// Replaces the JSON body with `params` marshaled as one object.
	pub fn set_json_params(&mut self, params: Params) -> &mut Self {
		let object =
			params.into_iter().map(|(key, value)| (key, value.to_json())).collect::<Map<_, _>>();

		self.json = Some(Value::Object(object).to_string().into_bytes());

		self
	}

	/// Applies caller options in order.
	pub fn apply_options(
		&mut self,
		options: impl IntoIterator<Item = RequestOption>,
	) -> Result<&mut Self> {
		for option in options {
			match option {
				RequestOption::RecvWindow(millis) => self.recv_window = Some(millis),
				RequestOption::Header { name, value, replace } => {
					let header_name = HeaderName::try_from(name.as_str())
						.map_err(|_| ConfigError::InvalidHeader { name: name.clone() })?;
					let header_value = HeaderValue::try_from(value)
						.map_err(|_| ConfigError::InvalidHeader { name })?;

					if replace {
						self.headers.insert(header_name, header_value);
					} else {
						self.headers.append(header_name, header_value);
					}
				},
				RequestOption::Headers(headers) => self.headers = headers,
				RequestOption::Deadline(after) => self.deadline = Some(after),
				RequestOption::Cancellation(token) => self.cancellation = Some(token),
			}
		}

		Ok(self)
	}

	/// Checks the descriptor before encoding.
	pub fn validate(&self) -> Result<()> {
		if !self.path.starts_with('/') {
			return Err(ConfigError::InvalidPath { path: self.path.clone() }.into());
		}

		Ok(())
	}

	/// Attaches a freshly generated trace identifier and returns it.
	pub fn stamp_trace_id(&mut self) -> String {
		let trace_id = Uuid::new_v4().to_string();

		self.query.set(TRACE_ID_PARAM, trace_id.clone());

		trace_id
	}
}
