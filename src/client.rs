//! Client configuration shared by every call.

mod dispatch;

pub use dispatch::RawResponse;

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
// self
use crate::{
	_prelude::*,
	http::HttpTransport,
	token::{TokenCache, TokenSecret},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

/// Production API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.sanbod.co";
/// User agent sent when the caller does not supply one.
pub const DEFAULT_USER_AGENT: &str = "sanbod-rs";
/// Scopes requested by the implicit client-credentials acquisition.
pub const DEFAULT_SCOPES: [&str; 6] = [
	"mobilenationalid",
	"cardnationalid",
	"personalinquiry",
	"citizenshipverification",
	"cardtoiban",
	"personal",
];
/// Provider code sent by the implicit client-credentials acquisition.
pub const DEFAULT_PROVIDER_CODE: &str = "999";

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestApiClient = Client<ReqwestHttpClient>;

/// Configured account against one base URL.
///
/// The client owns its [`TokenCache`]; clones share the transport and the cache, so every
/// clone sees tokens acquired by any other. Independently constructed clients never share
/// credentials.
pub struct Client<C>
where
	C: HttpTransport,
{
	/// Principal used for HTTP Basic credentials.
	pub username: String,
	password: TokenSecret,
	/// Base URL every request path is appended to.
	pub base_url: String,
	/// Value of the `User-Agent` header unless the caller overrides it.
	pub user_agent: String,
	/// Transport used for every outbound request.
	pub http_client: Arc<C>,
	/// Emits request/response debug events when true.
	pub debug: bool,
	tokens: Arc<TokenCache>,
}
impl<C> Client<C>
where
	C: HttpTransport,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(
		username: impl Into<String>,
		password: impl Into<String>,
		http_client: impl Into<Arc<C>>,
	) -> Self {
		Self {
			username: username.into(),
			password: TokenSecret::new(password),
			base_url: DEFAULT_BASE_URL.into(),
			user_agent: DEFAULT_USER_AGENT.into(),
			http_client: http_client.into(),
			debug: false,
			tokens: Default::default(),
		}
	}

	/// Overrides the base URL; a trailing `/` is dropped.
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		let mut base_url = base_url.into();

		while base_url.ends_with('/') {
			base_url.pop();
		}

		self.base_url = base_url;

		self
	}

	/// Overrides the default user agent.
	pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.user_agent = user_agent.into();

		self
	}

	/// Toggles request/response debug events.
	pub fn with_debug(mut self, debug: bool) -> Self {
		self.debug = debug;

		self
	}

	/// Token cache owned by this client.
	pub fn tokens(&self) -> &TokenCache {
		&self.tokens
	}

	fn basic_authorization(&self) -> String {
		basic_authorization(&self.username, self.password.expose())
	}
}
#[cfg(feature = "reqwest")]
impl Client<ReqwestHttpClient> {
	/// Creates a client backed by a default reqwest transport.
	pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
		Self::with_http_client(username, password, ReqwestHttpClient::default())
	}

	/// Creates a client whose transport routes through `proxy_url`.
	pub fn with_proxy(
		username: impl Into<String>,
		password: impl Into<String>,
		proxy_url: &str,
	) -> Result<Self> {
		Ok(Self::with_http_client(username, password, ReqwestHttpClient::with_proxy(proxy_url)?))
	}

	/// Creates a client whose transport routes through `proxy_url` with TLS verification
	/// **disabled**. See [`ReqwestHttpClient::danger_insecure_proxy`].
	pub fn danger_insecure_proxy(
		username: impl Into<String>,
		password: impl Into<String>,
		proxy_url: &str,
	) -> Result<Self> {
		Ok(Self::with_http_client(
			username,
			password,
			ReqwestHttpClient::danger_insecure_proxy(proxy_url)?,
		))
	}
}
impl<C> Clone for Client<C>
where
	C: HttpTransport,
{
	fn clone(&self) -> Self {
		Self {
			username: self.username.clone(),
			password: self.password.clone(),
			base_url: self.base_url.clone(),
			user_agent: self.user_agent.clone(),
			http_client: self.http_client.clone(),
			debug: self.debug,
			tokens: self.tokens.clone(),
		}
	}
}
impl<C> Debug for Client<C>
where
	C: HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client")
			.field("username", &self.username)
			.field("password", &self.password)
			.field("base_url", &self.base_url)
			.field("user_agent", &self.user_agent)
			.field("debug", &self.debug)
			.finish()
	}
}

/// Formats an HTTP Basic `Authorization` header value.
pub fn basic_authorization(username: &str, password: &str) -> String {
	format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}
