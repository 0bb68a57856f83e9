//! Endpoint metadata and the fluent call wrapper.
//!
//! Each remote operation is a plain request struct implementing [`Endpoint`]: the trait
//! fixes the path, method, and [`SecurityMode`], and fills the payload of a fresh
//! [`RequestDescriptor`]. [`Client::execute`] runs any endpoint through the shared pipeline;
//! [`Client::call`] wraps the same thing in a builder for per-call options.

// self
use crate::{
	_prelude::*,
	client::Client,
	http::HttpTransport,
	request::{RequestDescriptor, RequestOption, SecurityMode},
	token::TokenCache,
};

/// Metadata and payload shape of one remote operation.
pub trait Endpoint {
	/// Decoded success payload.
	type Output: DeserializeOwned;

	/// Path appended to the client's base URL.
	const PATH: &'static str;
	/// Credential-attachment strategy.
	const SECURITY: SecurityMode;
	/// HTTP method.
	const METHOD: Method = Method::POST;

	/// Writes this endpoint's payload into `request`.
	fn fill(&self, request: &mut RequestDescriptor, tokens: &TokenCache);

	/// Builds a fresh descriptor carrying this endpoint's metadata and payload.
	fn request(&self, tokens: &TokenCache) -> RequestDescriptor {
		let mut request = RequestDescriptor::new(Self::METHOD, Self::PATH, Self::SECURITY);

		self.fill(&mut request, tokens);

		request
	}
}

/// Builder for a single call bound to one client.
#[must_use = "a call does nothing until `send` is awaited"]
pub struct Call<'a, C, E>
where
	C: HttpTransport,
	E: Endpoint,
{
	client: &'a Client<C>,
	endpoint: E,
	options: Vec<RequestOption>,
}
impl<'a, C, E> Call<'a, C, E>
where
	C: HttpTransport,
	E: Endpoint,
{
	/// Adds an arbitrary option.
	pub fn option(mut self, option: RequestOption) -> Self {
		self.options.push(option);

		self
	}

	/// Sets (`replace = true`) or appends a header.
	pub fn header(self, name: impl Into<String>, value: impl Into<String>, replace: bool) -> Self {
		self.option(RequestOption::header(name, value, replace))
	}

	/// Replaces the caller header map.
	pub fn headers(self, headers: HeaderMap) -> Self {
		self.option(RequestOption::headers(headers))
	}

	/// Attaches a receive-window hint.
	pub fn recv_window(self, millis: i64) -> Self {
		self.option(RequestOption::recv_window(millis))
	}

	/// Fails the call if no response arrives within `after`.
	pub fn deadline(self, after: Duration) -> Self {
		self.option(RequestOption::deadline(after))
	}

	/// Fails the call once `token` is cancelled.
	pub fn cancel_on(self, token: CancellationToken) -> Self {
		self.option(RequestOption::cancellation(token))
	}

	/// Dispatches the call and decodes the result.
	pub async fn send(self) -> Result<E::Output> {
		self.client.execute(&self.endpoint, self.options).await
	}
}
impl<'a, C, E> Debug for Call<'a, C, E>
where
	C: HttpTransport,
	E: Endpoint + Debug,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Call")
			.field("path", &E::PATH)
			.field("endpoint", &self.endpoint)
			.field("options", &self.options)
			.finish()
	}
}

impl<C> Client<C>
where
	C: HttpTransport,
{
	/// Starts a fluent call for `endpoint`.
	pub fn call<E>(&self, endpoint: E) -> Call<'_, C, E>
	where
		E: Endpoint,
	{
		Call { client: self, endpoint, options: Vec::new() }
	}
}
