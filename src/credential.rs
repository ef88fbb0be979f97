use std::env;
use std::fmt::{Debug, Formatter};

use crate::error::Error;

const SECRET_ID_ENV: &str = "TENCENTCLOUD_SECRET_ID";
const SECRET_KEY_ENV: &str = "TENCENTCLOUD_SECRET_KEY";
const SESSION_TOKEN_ENV: &str = "TENCENTCLOUD_SESSION_TOKEN";

/// tencentcloud api credential
#[derive(Clone)]
pub struct Credential {
    pub(crate) secret_id: String,
    pub(crate) secret_key: String,
    pub(crate) token: Option<String>,
}

impl Credential {
    /// create tencentcloud api credential by `secret_id` and `secret_key`
    pub fn new(secret_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            secret_id: secret_id.into(),
            secret_key: secret_key.into(),
            token: None,
        }
    }

    /// create a temporary credential, the `token` is sent as `X-TC-Token`
    pub fn with_token(
        secret_id: impl Into<String>,
        secret_key: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            secret_id: secret_id.into(),
            secret_key: secret_key.into(),
            token: Some(token.into()),
        }
    }

    /// load the credential from `TENCENTCLOUD_SECRET_ID`, `TENCENTCLOUD_SECRET_KEY` and the
    /// optional `TENCENTCLOUD_SESSION_TOKEN`
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let secret_id = non_empty(SECRET_ID_ENV)
            .ok_or_else(|| Error::Other(format!("{SECRET_ID_ENV} is not set").into()))?;
        let secret_key = non_empty(SECRET_KEY_ENV)
            .ok_or_else(|| Error::Other(format!("{SECRET_KEY_ENV} is not set").into()))?;

        Ok(Self {
            secret_id,
            secret_key,
            token: non_empty(SESSION_TOKEN_ENV),
        })
    }

    /// the secret id, the secret key is never exposed
    pub fn secret_id(&self) -> &str {
        &self.secret_id
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("secret_id", &self.secret_id)
            .field("has_token", &self.token.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn debug_hides_secrets() {
        let credential = Credential::with_token("AKIDexample", "very-secret", "tmp-token");
        let debug = format!("{credential:?}");

        assert!(debug.contains("AKIDexample"));
        assert!(!debug.contains("very-secret"));
        assert!(!debug.contains("tmp-token"));
    }

    #[test]
    fn load_from_lookup() {
        let vars = HashMap::from([
            (SECRET_ID_ENV, "AKIDexample"),
            (SECRET_KEY_ENV, "very-secret"),
            (SESSION_TOKEN_ENV, ""),
        ]);

        let credential =
            Credential::from_lookup(|key| vars.get(key).map(|value| value.to_string())).unwrap();

        assert_eq!(credential.secret_id(), "AKIDexample");
        assert_eq!(credential.secret_key, "very-secret");
        assert!(credential.token.is_none());
    }

    #[test]
    fn load_from_lookup_missing_key() {
        let vars = HashMap::from([(SECRET_ID_ENV, "AKIDexample")]);

        let err = Credential::from_lookup(|key| vars.get(key).map(|value| value.to_string()))
            .unwrap_err();

        assert!(err.to_string().contains(SECRET_KEY_ENV));
    }
}
