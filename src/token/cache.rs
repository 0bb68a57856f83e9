//! Thread-safe in-memory token cache owned by a single [`Client`](crate::client::Client).

// std
use std::collections::HashMap;
// self
use crate::{
	_prelude::*,
	token::{TokenKey, TokenSecret},
};

type TokenMap = RwLock<HashMap<TokenKey, TokenSecret>>;

/// Process-local store for the current access and refresh tokens.
///
/// Every read and write goes through one lock, so concurrent callers never observe a
/// half-written token pair. Entries carry no expiry: a cached token is trusted until the
/// remote service rejects it, and entries are only ever overwritten, never evicted.
#[derive(Debug, Default)]
pub struct TokenCache(TokenMap);
impl TokenCache {
	/// Stores `value` under `key`, replacing any previous value.
	pub fn set(&self, key: TokenKey, value: impl Into<TokenSecret>) {
		self.0.write().insert(key, value.into());
	}

	/// Returns the value stored under `key`, if any.
	pub fn get(&self, key: TokenKey) -> Option<TokenSecret> {
		self.0.read().get(&key).cloned()
	}

	/// Replaces both tokens under a single write lock.
	pub fn store_pair(&self, access: impl Into<TokenSecret>, refresh: impl Into<TokenSecret>) {
		let mut guard = self.0.write();

		guard.insert(TokenKey::AccessToken, access.into());
		guard.insert(TokenKey::RefreshToken, refresh.into());
	}

	/// Returns the cached access token, if any.
	pub fn access_token(&self) -> Option<TokenSecret> {
		self.get(TokenKey::AccessToken)
	}

	/// Returns the cached refresh token, if any.
	pub fn refresh_token(&self) -> Option<TokenSecret> {
		self.get(TokenKey::RefreshToken)
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::thread;
	// self
	use super::*;

	#[test]
	fn get_reflects_latest_set() {
		let cache = TokenCache::default();

		assert_eq!(cache.get(TokenKey::AccessToken), None);

		cache.set(TokenKey::AccessToken, "first");
		cache.set(TokenKey::AccessToken, "first");

		assert_eq!(cache.access_token().as_ref().map(TokenSecret::expose), Some("first"));

		cache.set(TokenKey::AccessToken, "second");

		assert_eq!(cache.access_token().as_ref().map(TokenSecret::expose), Some("second"));
		assert_eq!(cache.refresh_token(), None);
	}

	#[test]
	fn store_pair_writes_both_keys() {
		let cache = TokenCache::default();

		cache.store_pair("access", "refresh");

		assert_eq!(cache.access_token().as_ref().map(TokenSecret::expose), Some("access"));
		assert_eq!(cache.refresh_token().as_ref().map(TokenSecret::expose), Some("refresh"));
	}

	#[test]
	fn concurrent_writers_never_tear_pairs() {
		const WRITERS: usize = 8;
		const ROUNDS: usize = 500;

		let cache = TokenCache::default();

		thread::scope(|scope| {
			for writer in 0..WRITERS {
				let cache = &cache;

				scope.spawn(move || {
					for round in 0..ROUNDS {
						let tag = format!("{writer}-{round}");

						cache.store_pair(format!("access-{tag}"), format!("refresh-{tag}"));
					}
				});
			}
			for _ in 0..WRITERS {
				let cache = &cache;

				scope.spawn(move || {
					for _ in 0..ROUNDS {
						let guard = cache.0.read();
						let access = guard.get(&TokenKey::AccessToken).map(TokenSecret::expose);
						let refresh = guard.get(&TokenKey::RefreshToken).map(TokenSecret::expose);

						match (access, refresh) {
							(None, None) => {},
							(Some(access), Some(refresh)) => assert_eq!(
								access.trim_start_matches("access-"),
								refresh.trim_start_matches("refresh-"),
								"Access and refresh tokens must come from the same write."
							),
							other => panic!("Observed a partially written pair: {other:?}."),
						}
					}
				});
			}
		});

		let access = cache.access_token().expect("Access token should be cached after writers.");

		assert!(access.expose().starts_with("access-"));
	}
}
