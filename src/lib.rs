//! Async client for the Sanbod identity and bank-verification API.
//!
//! Every endpoint funnels through one authenticated dispatch pipeline: the client decides
//! which credential material a call needs (basic auth, a cached bearer token acquired on
//! first use, a refresh-token grant, or nothing), encodes the payload, stamps a fresh
//! trace identifier, and classifies the response as a success payload, a structured
//! [`ApiError`](error::ApiError), a transport failure, or a decoding failure.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod client;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod obs;
pub mod request;
pub mod services;
pub mod token;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{client::Client, http::ReqwestHttpClient};

	/// Client type alias used by reqwest-backed integration tests.
	pub type ReqwestTestClient = Client<ReqwestHttpClient>;

	/// Username used by [`build_reqwest_test_client`].
	pub const TEST_USERNAME: &str = "test-user";
	/// Password used by [`build_reqwest_test_client`].
	pub const TEST_PASSWORD: &str = "test-pass";

	/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	pub fn test_reqwest_http_client() -> ReqwestHttpClient {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestHttpClient::with_client(client)
	}

	/// Constructs a debug-enabled [`Client`] pointed at `base_url` with the test credentials.
	pub fn build_reqwest_test_client(base_url: &str) -> ReqwestTestClient {
		Client::with_http_client(TEST_USERNAME, TEST_PASSWORD, test_reqwest_http_client())
			.with_base_url(base_url)
			.with_debug(true)
	}

	/// Expected `Authorization` header value for the test credentials.
	pub fn test_basic_authorization() -> String {
		crate::client::basic_authorization(TEST_USERNAME, TEST_PASSWORD)
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
		time::Duration,
	};

	pub use oauth2::http::{HeaderMap, HeaderName, HeaderValue, Method};
	pub use parking_lot::RwLock;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
	pub use thiserror::Error as ThisError;
	pub use tokio_util::sync::CancellationToken;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use tokio_util::sync::CancellationToken;
#[cfg(all(test, feature = "reqwest"))] use {color_eyre as _, httpmock as _};
