//! Demonstrates issuing a client-credentials token pair with the default reqwest transport and
//! reusing the cached access token for a bearer-secured card lookup.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use serde_json::json;
// self
use sanbod::{client::Client, http::ReqwestHttpClient, reqwest, services::CardToIban};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/v1/token");
			then.status(200).json_body(json!({
				"access_token": "demo-access",
				"refresh_token": "demo-refresh",
				"token_type": "bearer"
			}));
		})
		.await;
	let lookup_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/sanboom/v1/banksinquiry/cardtoiban")
				.header("authorization", "Bearer demo-access");
			then.status(200).json_body(json!({
				"error": false,
				"message": {
					"cardNumber": "6037991234567890",
					"iban": "IR120000000000000000000001"
				},
				"result_number": 1,
				"trace_id": "demo-trace"
			}));
		})
		.await;
	let http_client = ReqwestHttpClient::with_client(
		reqwest::Client::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()?,
	);
	let client = Client::with_http_client("demo-client", "super-secret", http_client)
		.with_base_url(server.base_url());
	let grant = client.authenticate(["cardtoiban"], "999", []).await?;

	println!("Issued a {} token pair.", grant.token_type);

	let lookup = client.call(CardToIban::new("6037991234567890")).send().await?;

	println!("Card resolves to {} (trace {}).", lookup.message.iban, lookup.trace_id);

	token_mock.assert_async().await;
	lookup_mock.assert_async().await;

	Ok(())
}
