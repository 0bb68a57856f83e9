//! Token issuance, rotation, and revocation.

// self
use crate::{
	_prelude::*,
	client::Client,
	endpoint::Endpoint,
	http::HttpTransport,
	request::{RequestDescriptor, RequestOption, SecurityMode},
	services::json_params,
	token::{TokenCache, TokenSecret},
};

const TOKEN_PATH: &str = "/oauth/v1/token";

/// Client-credentials grant for the requested scopes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IssueToken {
	/// Scopes to request.
	pub scope: Vec<String>,
	/// Provider code sent alongside the grant.
	pub provider_code: String,
}
impl IssueToken {
	/// Creates a grant request.
	pub fn new<I, S>(scope: I, provider_code: impl Into<String>) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			scope: scope.into_iter().map(Into::into).collect(),
			provider_code: provider_code.into(),
		}
	}
}
impl Endpoint for IssueToken {
	type Output = TokenGrant;

	const PATH: &'static str = TOKEN_PATH;
	const SECURITY: SecurityMode = SecurityMode::BasicAuth;

	fn fill(&self, request: &mut RequestDescriptor, _: &TokenCache) {
		request.set_json_params(json_params([
			("grant_type", "client_credentials".into()),
			("scope", self.scope.clone().into()),
			("provider_code", (&self.provider_code).into()),
		]));
	}
}

/// Token pair issued by a client-credentials grant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenGrant {
	/// Bearer token for resource endpoints.
	pub access_token: TokenSecret,
	/// Token used by [`RefreshTokens`].
	pub refresh_token: TokenSecret,
	/// Token type reported by the provider.
	#[serde(default)]
	pub token_type: String,
}

/// Refresh-token grant; the body is written by the security resolver from the cache.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RefreshTokens;
impl Endpoint for RefreshTokens {
	type Output = RefreshedTokens;

	const PATH: &'static str = TOKEN_PATH;
	const SECURITY: SecurityMode = SecurityMode::RefreshGrant;

	fn fill(&self, _: &mut RequestDescriptor, _: &TokenCache) {}
}

/// Rotated token pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshedTokens {
	/// New access token.
	pub access_token: TokenSecret,
	/// New refresh token.
	pub refresh_token: TokenSecret,
}

/// Revokes the cached access token (an empty token if none is cached).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevokeToken;
impl Endpoint for RevokeToken {
	type Output = RevokeResult;

	const PATH: &'static str = "/oauth/v1/revoke";
	const SECURITY: SecurityMode = SecurityMode::None;

	fn fill(&self, request: &mut RequestDescriptor, tokens: &TokenCache) {
		let access = tokens.access_token().unwrap_or_default();

		request.set_form_param("access_token", access.expose());
	}
}

/// Revocation outcome.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevokeResult {
	/// Provider-side error flag.
	pub error: bool,
	/// Provider message.
	#[serde(default)]
	pub message: String,
	/// Provider result code.
	pub result_number: i64,
}

impl<C> Client<C>
where
	C: HttpTransport,
{
	/// Requests a token pair for `scope` and stores it in the cache.
	pub async fn authenticate<I, S>(
		&self,
		scope: I,
		provider_code: impl Into<String>,
		options: impl IntoIterator<Item = RequestOption>,
	) -> Result<TokenGrant>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let grant = self.execute(&IssueToken::new(scope, provider_code), options).await?;

		self.tokens().store_pair(grant.access_token.clone(), grant.refresh_token.clone());

		Ok(grant)
	}

	/// Rotates the cached token pair.
	pub async fn refresh_tokens(
		&self,
		options: impl IntoIterator<Item = RequestOption>,
	) -> Result<RefreshedTokens> {
		let tokens = self.execute(&RefreshTokens, options).await?;

		self.tokens().store_pair(tokens.access_token.clone(), tokens.refresh_token.clone());

		Ok(tokens)
	}

	/// Revokes the cached access token. The cache is left untouched.
	pub async fn revoke_token(
		&self,
		options: impl IntoIterator<Item = RequestOption>,
	) -> Result<RevokeResult> {
		self.execute(&RevokeToken, options).await
	}
}
