//! Transport primitives for API calls.
//!
//! The module exposes [`HttpTransport`], the client's only dependency on an HTTP stack, and
//! [`ReqwestHttpClient`], the default implementation. Requests and responses use the
//! `oauth2` crate's [`HttpRequest`]/[`HttpResponse`] aliases over the `http` types, so a
//! custom transport (or a test double) only has to turn one buffered request into one
//! buffered response.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// crates.io
pub use oauth2::{HttpClientError, HttpRequest, HttpResponse};
// self
use crate::_prelude::*;
#[cfg(feature = "reqwest")] use crate::error::ConfigError;

/// Boxed future returned by [`HttpTransport::execute`].
pub type TransportFuture<'a, E> =
	Pin<Box<dyn Future<Output = Result<HttpResponse, HttpClientError<E>>> + 'a + Send>>;

/// Abstraction over HTTP stacks capable of executing one buffered request.
///
/// Implementations must read the entire response body before resolving; the client
/// never streams. Dropping the returned future must abort the in-flight call and release
/// its connection, which is how deadlines and cancellation are enforced.
pub trait HttpTransport
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Sends `request` and resolves with the fully buffered response.
	fn execute(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a client that routes every request through `proxy_url` with TLS verification on.
	pub fn with_proxy(proxy_url: &str) -> Result<Self> {
		let client = ReqwestClient::builder()
			.proxy(Self::proxy(proxy_url)?)
			.build()
			.map_err(ConfigError::from)?;

		Ok(Self(client))
	}

	/// Builds a client that routes through `proxy_url` and **skips TLS certificate and
	/// hostname verification**.
	///
	/// This removes protection against man-in-the-middle attacks. Use it only against
	/// sandbox deployments that present self-signed certificates, never in production.
	pub fn danger_insecure_proxy(proxy_url: &str) -> Result<Self> {
		let client = ReqwestClient::builder()
			.proxy(Self::proxy(proxy_url)?)
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()
			.map_err(ConfigError::from)?;

		Ok(Self(client))
	}

	fn proxy(proxy_url: &str) -> Result<reqwest::Proxy> {
		let url =
			url::Url::parse(proxy_url).map_err(|source| ConfigError::InvalidProxy { source })?;

		reqwest::Proxy::all(url).map_err(|e| ConfigError::from(e).into())
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl HttpTransport for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn execute(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError> {
		let client = self.0.clone();

		Box::pin(async move {
			let response =
				client.execute(request.try_into().map_err(Box::new)?).await.map_err(Box::new)?;
			let status = response.status();
			let headers = response.headers().to_owned();
			let mut response_new =
				HttpResponse::new(response.bytes().await.map_err(Box::new)?.to_vec());

			*response_new.status_mut() = status;
			*response_new.headers_mut() = headers;

			Ok(response_new)
		})
	}
}
