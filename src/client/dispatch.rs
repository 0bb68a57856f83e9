//! Security resolution and dispatch: the single pipeline every endpoint runs through.
//!
//! [`Client::call_api`] applies caller options, stamps a trace identifier, lets
//! [`Client::resolve_security`] attach credential material, and hands the descriptor to
//! [`Client::dispatch`], which builds the HTTP request, performs exactly one round-trip,
//! and classifies the response.

// crates.io
use oauth2::http::{
	Request,
	header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT},
};
use tokio::time::Instant;
// self
use crate::{
	_prelude::*,
	client::{Client, DEFAULT_PROVIDER_CODE, DEFAULT_SCOPES},
	endpoint::Endpoint,
	error::{ApiError, BodyKind, ConfigError, DecodeError, TransportError},
	http::{HttpResponse, HttpTransport, TransportFuture},
	obs::{self, CallOutcome, CallSpan},
	request::{Params, RequestDescriptor, RequestOption, SecurityMode},
	services::{IssueToken, TokenGrant},
};

const CONTENT_TYPE_JSON: &str = "application/json";
const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

/// Status and fully buffered body of a successful (status < 400) response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response body bytes.
	pub body: Vec<u8>,
}

impl<C> Client<C>
where
	C: HttpTransport,
{
	/// Runs `endpoint` through the pipeline and decodes its success payload.
	pub async fn execute<E>(
		&self,
		endpoint: &E,
		options: impl IntoIterator<Item = RequestOption>,
	) -> Result<E::Output>
	where
		E: Endpoint,
	{
		let request = endpoint.request(self.tokens());

		self.run(request, options, |raw| {
			DecodeError::decode(&raw.body, raw.status, BodyKind::Success).map_err(Error::from)
		})
		.await
	}

	/// Runs a prepared descriptor through the pipeline and returns the raw success response.
	pub async fn call_api(
		&self,
		request: RequestDescriptor,
		options: impl IntoIterator<Item = RequestOption>,
	) -> Result<RawResponse> {
		self.run(request, options, Ok).await
	}

	async fn run<T, F>(
		&self,
		mut request: RequestDescriptor,
		options: impl IntoIterator<Item = RequestOption>,
		decode: F,
	) -> Result<T>
	where
		F: FnOnce(RawResponse) -> Result<T>,
	{
		let security = request.security;
		let span = CallSpan::new(&request.path, security);

		obs::record_call_outcome(security, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				request.apply_options(options)?;
				request.validate()?;
				request.stamp_trace_id();

				self.resolve_security(&mut request).await?;

				decode(self.dispatch(request).await?)
			})
			.await;

		obs::record_call_outcome(security, CallOutcome::of(&result));

		result
	}

	/// Attaches the credential material `request.security` calls for, mutating it in place.
	///
	/// - [`SecurityMode::None`] and [`SecurityMode::BasicAuth`] leave the descriptor untouched;
	///   Basic credentials are added by [`Client::dispatch`].
	/// - [`SecurityMode::BearerToken`] acquires an access token first when the cache has none
	///   (see [`Client::acquire_access_token`]) and appends `Authorization: Bearer <token>` when
	///   one is cached afterwards. Without a token the request goes out unauthenticated. Time
	///   spent acquiring is deducted from the descriptor's deadline.
	/// - [`SecurityMode::RefreshGrant`] replaces the JSON body with a refresh grant for the
	///   cached refresh token, or an empty one if none is cached.
	pub async fn resolve_security(&self, request: &mut RequestDescriptor) -> Result<()> {
		match request.security {
			SecurityMode::None | SecurityMode::BasicAuth => {},
			SecurityMode::BearerToken => {
				if self.tokens().access_token().is_none() {
					let started = Instant::now();
					let cancellation = request.cancellation.clone();

					self.acquire_access_token(request.deadline, cancellation).await;

					request.deadline =
						request.deadline.map(|after| after.saturating_sub(started.elapsed()));
				}
				if let Some(token) = self.tokens().access_token() {
					let bearer = format!("Bearer {}", token.expose());

					request.headers.append(AUTHORIZATION, sensitive_header(bearer, AUTHORIZATION)?);
				}
			},
			SecurityMode::RefreshGrant => {
				let refresh = self.tokens().refresh_token().unwrap_or_default();
				let mut params = Params::new();

				params.insert("grant_type".into(), "refresh_token".into());
				params.insert("refresh_token".into(), refresh.expose().into());
				request.set_json_params(params);
			},
		}

		Ok(())
	}

	/// Performs one client-credentials acquisition and caches the returned token pair.
	///
	/// Failures are logged and swallowed: the caller's request proceeds without a bearer
	/// token and is expected to fail downstream with an [`ApiError`]. Concurrent callers that
	/// all miss the cache each perform their own acquisition and the last write wins; there is
	/// no coalescing. The acquisition is dispatched with Basic credentials only, so it can never
	/// trigger another acquisition.
	#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
	pub async fn acquire_access_token(
		&self,
		deadline: Option<Duration>,
		cancellation: Option<CancellationToken>,
	) {
		let mut request =
			IssueToken::new(DEFAULT_SCOPES, DEFAULT_PROVIDER_CODE).request(self.tokens());

		request.deadline = deadline;
		request.cancellation = cancellation;
		request.stamp_trace_id();

		let security = request.security;

		obs::record_call_outcome(security, CallOutcome::Attempt);

		let result = match self.dispatch(request).await {
			Ok(raw) => DecodeError::decode::<TokenGrant>(&raw.body, raw.status, BodyKind::Success)
				.map_err(Error::from),
			Err(e) => Err(e),
		};

		obs::record_call_outcome(security, CallOutcome::of(&result));

		match result {
			Ok(grant) => self.tokens().store_pair(grant.access_token, grant.refresh_token),
			Err(e) => obs::warn_event!(
				error = %e,
				"Bearer token acquisition failed; the request proceeds without a token."
			),
		}
	}

	/// Builds the HTTP request for a resolved descriptor, performs one round-trip, and
	/// classifies the response.
	///
	/// Statuses >= 400 fail with [`Error::Api`] when the body decodes as an [`ApiError`] and
	/// with [`Error::Decode`] otherwise. Transport failures surface as [`Error::Transport`]
	/// and are never retried.
	pub async fn dispatch(&self, request: RequestDescriptor) -> Result<RawResponse> {
		let RequestDescriptor {
			method,
			path,
			query,
			form,
			json,
			security,
			mut headers,
			deadline,
			cancellation,
			..
		} = request;
		let query_string = query.encode();
		let form_string = form.encode();
		let mut full_url = format!("{}{path}", self.base_url);
		let mut body = Vec::new();

		if !query_string.is_empty() {
			full_url.push('?');
			full_url.push_str(&query_string);
		}
		if !form_string.is_empty() {
			headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_FORM));

			body = form_string.into_bytes();
		}
		if let Some(json) = json {
			headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));

			body = json;
		}
		if !headers.contains_key(USER_AGENT) {
			let value = HeaderValue::try_from(self.user_agent.as_str())
				.map_err(|_| ConfigError::InvalidHeader { name: USER_AGENT.to_string() })?;

			headers.insert(USER_AGENT, value);
		}
		if security.uses_basic_auth() {
			let basic = self.basic_authorization();

			headers.insert(AUTHORIZATION, sensitive_header(basic, AUTHORIZATION)?);
		}

		obs::debug_event!(
			self.debug,
			url = %full_url,
			body = %String::from_utf8_lossy(&body),
			"Dispatching API request."
		);

		let mut http_request = Request::builder()
			.method(method)
			.uri(full_url.as_str())
			.body(body)
			.map_err(ConfigError::from)?;

		*http_request.headers_mut() = headers;

		let response =
			guard_in_flight(self.http_client.execute(http_request), deadline, cancellation).await?;
		let status = response.status().as_u16();
		let body = response.into_body();

		obs::debug_event!(
			self.debug,
			status,
			body = %String::from_utf8_lossy(&body),
			"Received API response."
		);

		if status >= 400 {
			return match DecodeError::decode::<ApiError>(&body, status, BodyKind::Error) {
				Ok(mut api_error) => {
					api_error.status = status;

					Err(api_error.into())
				},
				Err(e) => {
					obs::debug_event!(self.debug, error = %e, "Failed to decode API error body.");

					Err(e.into())
				},
			};
		}

		Ok(RawResponse { status, body })
	}
}

fn sensitive_header(value: String, name: HeaderName) -> Result<HeaderValue> {
	let mut value = HeaderValue::try_from(value)
		.map_err(|_| ConfigError::InvalidHeader { name: name.to_string() })?;

	value.set_sensitive(true);

	Ok(value)
}

/// Awaits `fut`, failing early on deadline expiry or cancellation. Dropping `fut` on either
/// path aborts the in-flight call.
async fn guard_in_flight<E>(
	fut: TransportFuture<'_, E>,
	deadline: Option<Duration>,
	cancellation: Option<CancellationToken>,
) -> Result<HttpResponse, TransportError>
where
	E: 'static + Send + Sync + StdError,
{
	let timed = async move {
		match deadline {
			Some(after) => match tokio::time::timeout(after, fut).await {
				Ok(result) => result.map_err(TransportError::from_client_error),
				Err(_) => Err(TransportError::TimedOut { after }),
			},
			None => fut.await.map_err(TransportError::from_client_error),
		}
	};

	match cancellation {
		Some(token) => tokio::select! {
			biased;

			_ = token.cancelled() => Err(TransportError::Cancelled),
			result = timed => result,
		},
		None => timed.await,
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::collections::VecDeque;
	// crates.io
	use oauth2::http::StatusCode;
	use parking_lot::Mutex;
	use serde_json::{Value, json};
	// self
	use super::*;
	use crate::{
		client::basic_authorization,
		error::ApiErrorMessage,
		http::{HttpClientError, HttpRequest},
		request::TRACE_ID_PARAM,
		services::{CardToIban, MobileNationalIdMatch, RefreshTokens},
	};

	#[derive(Debug)]
	struct FakeError;
	impl Display for FakeError {
		fn fmt(&self, f: &mut Formatter) -> FmtResult {
			f.write_str("Fake connection reset.")
		}
	}
	impl StdError for FakeError {}

	enum Reply {
		Status(u16, &'static str),
		Delayed(Duration, u16, &'static str),
		Fail,
		Stall,
	}

	#[derive(Clone, Debug)]
	struct Recorded {
		method: Method,
		uri: oauth2::http::Uri,
		headers: HeaderMap,
		body: Vec<u8>,
	}

	struct RecordingTransport {
		requests: Mutex<Vec<Recorded>>,
		replies: Mutex<VecDeque<Reply>>,
	}
	impl RecordingTransport {
		fn replying(replies: impl IntoIterator<Item = Reply>) -> Arc<Self> {
			Arc::new(Self {
				requests: Mutex::new(Vec::new()),
				replies: Mutex::new(replies.into_iter().collect()),
			})
		}

		fn requests(&self) -> Vec<Recorded> {
			self.requests.lock().clone()
		}
	}
	impl HttpTransport for RecordingTransport {
		type TransportError = FakeError;

		fn execute(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError> {
			let (parts, body) = request.into_parts();

			self.requests.lock().push(Recorded {
				method: parts.method,
				uri: parts.uri,
				headers: parts.headers,
				body,
			});

			let reply = self.replies.lock().pop_front().unwrap_or(Reply::Fail);

			Box::pin(async move {
				let reply = match reply {
					Reply::Delayed(after, status, body) => {
						tokio::time::sleep(after).await;

						Reply::Status(status, body)
					},
					other => other,
				};

				match reply {
					Reply::Status(status, body) => {
						let mut response = HttpResponse::new(body.as_bytes().to_vec());

						*response.status_mut() = StatusCode::from_u16(status)
							.expect("Fake status code should be valid.");

						Ok(response)
					},
					Reply::Delayed(..) | Reply::Fail =>
						Err(HttpClientError::Reqwest(Box::new(FakeError))),
					Reply::Stall => std::future::pending().await,
				}
			})
		}
	}

	const GRANT: &str = r#"{"access_token":"A1","refresh_token":"R1","token_type":"bearer"}"#;
	const CARD_IBAN: &str = concat!(
		r#"{"error":false,"message":{"cardNumber":"6037","iban":"IR12"},"#,
		r#""result_number":1,"trace_id":"t"}"#
	);
	const SCOPE_ERROR: &str =
		r#"{"error":true,"message":{"scope":["personal"]},"result_number":1001}"#;

	fn client(transport: &Arc<RecordingTransport>) -> Client<RecordingTransport> {
		Client::with_http_client("user", "pass", Arc::clone(transport))
			.with_base_url("https://api.test")
	}

	fn header<'a>(request: &'a Recorded, name: &str) -> Option<&'a str> {
		request.headers.get(name).and_then(|value| value.to_str().ok())
	}

	fn json_body(request: &Recorded) -> Value {
		serde_json::from_slice(&request.body).expect("Request body should be JSON.")
	}

	fn trace_id(request: &Recorded) -> String {
		let query = request.uri.query().expect("Every request should carry a query string.");

		url::form_urlencoded::parse(query.as_bytes())
			.find(|(key, _)| key == TRACE_ID_PARAM)
			.map(|(_, value)| value.into_owned())
			.expect("Every request should carry a trace identifier.")
	}

	#[tokio::test]
	async fn bearer_call_acquires_once_then_reuses_the_cache() {
		let transport = RecordingTransport::replying([
			Reply::Status(200, GRANT),
			Reply::Status(200, CARD_IBAN),
			Reply::Status(200, CARD_IBAN),
		]);
		let client = client(&transport);
		let first = client
			.call(CardToIban::new("6037"))
			.send()
			.await
			.expect("First bearer call should succeed after acquisition.");

		client
			.call(CardToIban::new("6037"))
			.send()
			.await
			.expect("Second bearer call should succeed.");

		let requests = transport.requests();

		assert_eq!(first.message.iban, "IR12");
		assert_eq!(requests.len(), 3);

		let acquisition = &requests[0];

		assert_eq!(acquisition.uri.path(), "/oauth/v1/token");
		assert_eq!(acquisition.method, Method::POST);
		assert_eq!(
			header(acquisition, "authorization"),
			Some(basic_authorization("user", "pass").as_str())
		);
		assert_eq!(
			json_body(acquisition),
			json!({
				"grant_type": "client_credentials",
				"scope": DEFAULT_SCOPES,
				"provider_code": DEFAULT_PROVIDER_CODE
			})
		);

		for resource in &requests[1..] {
			assert_eq!(resource.uri.path(), "/sanboom/v1/banksinquiry/cardtoiban");
			assert_eq!(header(resource, "authorization"), Some("Bearer A1"));
			assert_eq!(header(resource, "content-type"), Some(CONTENT_TYPE_JSON));
			assert_eq!(json_body(resource), json!({ "cardNumber": "6037" }));
		}

		assert_eq!(
			client.tokens().refresh_token().expect("Refresh token should be cached.").expose(),
			"R1"
		);
	}

	#[tokio::test]
	async fn failed_acquisition_is_swallowed_and_the_call_goes_out_bare() {
		let transport = RecordingTransport::replying([
			Reply::Status(401, SCOPE_ERROR),
			Reply::Status(401, SCOPE_ERROR),
		]);
		let client = client(&transport);
		let err = client
			.call(CardToIban::new("6037"))
			.send()
			.await
			.expect_err("Unauthenticated resource call should fail with the provider error.");
		let api_error = err.api_error().expect("Failure should be classified as an API error.");
		let requests = transport.requests();

		assert_eq!(api_error.status, 401);
		assert_eq!(api_error.result_number, 1001);
		assert!(api_error.flagged);
		assert_eq!(api_error.message, ApiErrorMessage::Scope { scope: vec!["personal".into()] });
		assert_eq!(requests.len(), 2);
		assert!(header(&requests[1], "authorization").is_none());
		assert!(client.tokens().access_token().is_none());
	}

	#[tokio::test]
	async fn every_dispatch_carries_a_fresh_trace_id() {
		let transport = RecordingTransport::replying([
			Reply::Status(200, GRANT),
			Reply::Status(200, CARD_IBAN),
			Reply::Status(200, CARD_IBAN),
		]);
		let client = client(&transport);

		for _ in 0..2 {
			client.call(CardToIban::new("6037")).send().await.expect("Bearer call should succeed.");
		}

		let ids = transport.requests().iter().map(trace_id).collect::<Vec<_>>();

		assert_eq!(ids.len(), 3);
		assert_ne!(ids[0], ids[1]);
		assert_ne!(ids[1], ids[2]);
		assert_ne!(ids[0], ids[2]);
	}

	#[tokio::test]
	async fn json_body_wins_over_form_body() {
		let transport = RecordingTransport::replying([Reply::Status(200, "{}")]);
		let client = client(&transport);
		let mut request = RequestDescriptor::post("/x", SecurityMode::None);
		let mut params = Params::new();

		params.insert("k".into(), "json".into());
		request.set_form_param("k", "form").set_json_params(params).set_param("q", 1);

		let raw = client.call_api(request, []).await.expect("Plain call should succeed.");
		let sent = &transport.requests()[0];

		assert_eq!(raw, RawResponse { status: 200, body: b"{}".to_vec() });
		assert_eq!(header(sent, "content-type"), Some(CONTENT_TYPE_JSON));
		assert_eq!(json_body(sent), json!({ "k": "json" }));
		assert!(header(sent, "authorization").is_none());
		assert!(sent.uri.query().is_some_and(|query| query.contains("q=1")));
	}

	#[tokio::test]
	async fn form_only_calls_send_url_encoded_bodies() {
		let transport = RecordingTransport::replying([Reply::Status(200, "{}")]);
		let client = client(&transport);
		let mut request = RequestDescriptor::post("/x", SecurityMode::None);

		request.set_form_param("access_token", "A 1");
		client.call_api(request, []).await.expect("Form call should succeed.");

		let sent = &transport.requests()[0];

		assert_eq!(header(sent, "content-type"), Some(CONTENT_TYPE_FORM));
		assert_eq!(sent.body.as_slice(), b"access_token=A+1");
	}

	#[tokio::test]
	async fn refresh_grant_sends_the_cached_refresh_token_with_basic_auth() {
		let transport = RecordingTransport::replying([Reply::Status(
			200,
			r#"{"access_token":"A2","refresh_token":"R2"}"#,
		)]);
		let client = client(&transport);

		client.tokens().store_pair("A1", "R1");

		let rotated = client.refresh_tokens([]).await.expect("Refresh should succeed.");
		let sent = &transport.requests()[0];

		assert_eq!(rotated.access_token.expose(), "A2");
		assert_eq!(
			json_body(sent),
			json!({ "grant_type": "refresh_token", "refresh_token": "R1" })
		);
		assert_eq!(
			header(sent, "authorization"),
			Some(basic_authorization("user", "pass").as_str())
		);
		let access =
			client.tokens().access_token().expect("Rotated access token should be cached.");
		let refresh =
			client.tokens().refresh_token().expect("Rotated refresh token should be cached.");

		assert_eq!(access.expose(), "A2");
		assert_eq!(refresh.expose(), "R2");
	}

	#[tokio::test]
	async fn refresh_grant_without_a_cached_token_sends_an_empty_one() {
		let transport = RecordingTransport::replying([Reply::Status(200, "{}")]);
		let client = client(&transport);
		let mut request = RefreshTokens.request(client.tokens());

		client.resolve_security(&mut request).await.expect("Refresh resolution should not fail.");

		let body: Value = serde_json::from_slice(
			request.json.as_deref().expect("Refresh resolution should write a JSON body."),
		)
		.expect("Refresh body should be JSON.");

		assert_eq!(body, json!({ "grant_type": "refresh_token", "refresh_token": "" }));
		assert!(transport.requests().is_empty());
	}

	#[tokio::test]
	async fn status_classes_are_disjoint() {
		let transport = RecordingTransport::replying([
			Reply::Status(400, SCOPE_ERROR),
			Reply::Status(502, "<html>bad gateway</html>"),
			Reply::Status(200, "not json"),
			Reply::Fail,
		]);
		let client = client(&transport);
		let endpoint = CardToIban::new("6037");

		client.tokens().store_pair("A1", "R1");

		let api = client.execute(&endpoint, []).await.expect_err("400 should fail.");
		let undecodable = client.execute(&endpoint, []).await.expect_err("502 should fail.");
		let bad_success =
			client.execute(&endpoint, []).await.expect_err("Bad payload should fail.");
		let transport_failure =
			client.execute(&endpoint, []).await.expect_err("Transport failure should fail.");

		assert!(matches!(api, Error::Api(ApiError { status: 400, result_number: 1001, .. })));
		assert!(matches!(
			undecodable,
			Error::Decode(DecodeError { status: 502, kind: BodyKind::Error, .. })
		));
		assert!(matches!(
			bad_success,
			Error::Decode(DecodeError { status: 200, kind: BodyKind::Success, .. })
		));
		assert!(matches!(transport_failure, Error::Transport(TransportError::Network { .. })));
		assert!(!transport_failure.is_api_error());
	}

	#[tokio::test]
	async fn mismatched_success_payloads_are_decode_errors() {
		let transport = RecordingTransport::replying([
			Reply::Status(200, r#"{"error":false,"message":{},"result_number":1}"#),
			Reply::Status(
				200,
				r#"{"error":false,"message":{"isMatched":"yes"},"result_number":1}"#,
			),
		]);
		let client = client(&transport);

		client.tokens().store_pair("A1", "R1");

		let empty_message = client
			.execute(&CardToIban::new("6037"), [])
			.await
			.expect_err("An empty message should not decode as a card lookup.");
		let misnamed_flag = client
			.execute(&MobileNationalIdMatch::new("09120000000", "0012345678"), [])
			.await
			.expect_err("A misnamed match flag should not decode as a verdict.");

		for err in [&empty_message, &misnamed_flag] {
			assert!(matches!(
				err,
				Error::Decode(DecodeError { status: 200, kind: BodyKind::Success, .. })
			));
		}

		let Error::Decode(decode) = misnamed_flag else {
			unreachable!("Classification was asserted above.");
		};

		assert_eq!(decode.source.path().to_string(), "message");
	}

	#[tokio::test]
	async fn user_agent_defaults_unless_the_caller_sets_one() {
		let transport =
			RecordingTransport::replying([Reply::Status(200, "{}"), Reply::Status(200, "{}")]);
		let client = client(&transport);

		client
			.call_api(RequestDescriptor::post("/x", SecurityMode::None), [])
			.await
			.expect("Default user agent call should succeed.");
		client
			.call_api(
				RequestDescriptor::post("/x", SecurityMode::None),
				[RequestOption::header("user-agent", "custom/1.0", true)],
			)
			.await
			.expect("Custom user agent call should succeed.");

		let requests = transport.requests();

		assert_eq!(header(&requests[0], "user-agent"), Some(client.user_agent.as_str()));
		assert_eq!(header(&requests[1], "user-agent"), Some("custom/1.0"));
	}

	#[tokio::test]
	async fn cancellation_and_deadline_are_distinct_failures() {
		let transport = RecordingTransport::replying([Reply::Stall, Reply::Stall]);
		let client = client(&transport);
		let token = CancellationToken::new();

		token.cancel();

		let cancelled = client
			.call_api(
				RequestDescriptor::post("/x", SecurityMode::None),
				[RequestOption::cancellation(token)],
			)
			.await
			.expect_err("Cancelled call should fail.");
		let timed_out = client
			.call_api(
				RequestDescriptor::post("/x", SecurityMode::None),
				[RequestOption::deadline(Duration::from_millis(20))],
			)
			.await
			.expect_err("Stalled call should hit its deadline.");

		assert!(matches!(cancelled, Error::Transport(TransportError::Cancelled)));
		assert!(matches!(timed_out, Error::Transport(TransportError::TimedOut { .. })));
		assert!(cancelled.is_cancelled() && timed_out.is_cancelled());
	}

	#[tokio::test]
	async fn acquisition_time_counts_against_the_call_deadline() {
		let transport = RecordingTransport::replying([
			Reply::Delayed(Duration::from_millis(200), 200, GRANT),
			Reply::Delayed(Duration::from_millis(200), 200, CARD_IBAN),
		]);
		let client = client(&transport);
		let err = client
			.execute(
				&CardToIban::new("6037"),
				[RequestOption::deadline(Duration::from_millis(300))],
			)
			.await
			.expect_err("Acquisition plus resource call should exceed one shared deadline.");
		let requests = transport.requests();

		assert_eq!(requests.len(), 2);
		assert_eq!(header(&requests[1], "authorization"), Some("Bearer A1"));

		match err {
			Error::Transport(TransportError::TimedOut { after }) =>
				assert!(after < Duration::from_millis(200)),
			other => panic!("Expected a deadline failure, got {other:?}."),
		}
	}

	#[tokio::test]
	async fn invalid_paths_fail_before_any_round_trip() {
		let transport = RecordingTransport::replying([]);
		let client = client(&transport);
		let err = client
			.call_api(RequestDescriptor::post("relative", SecurityMode::None), [])
			.await
			.expect_err("Relative paths should be rejected.");

		assert!(matches!(err, Error::Config(ConfigError::InvalidPath { .. })));
		assert!(transport.requests().is_empty());
	}
}
