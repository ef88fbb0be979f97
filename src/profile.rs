//! client configuration

use std::time::Duration;

const DEFAULT_REQ_TIMEOUT: Duration = Duration::from_secs(60);

/// the url scheme used to reach the api endpoint
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    #[default]
    Https,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

/// the language of api error messages, sent as `X-TC-Language`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    ZhCn,
    EnUs,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::ZhCn => "zh-CN",
            Language::EnUs => "en-US",
        }
    }
}

/// http layer config
#[derive(Debug, Clone)]
pub struct HttpProfile {
    /// url scheme, `https` by default
    pub scheme: Scheme,

    /// overrides the api host, for example `vpc.ap-guangzhou.tencentcloudapi.com`
    pub endpoint: Option<String>,

    /// the api host is `{service}.{root_domain}` when set and no endpoint is set
    pub root_domain: Option<String>,

    /// whole request timeout
    pub req_timeout: Duration,

    /// proxy url applied to all requests
    pub proxy: Option<String>,
}

impl Default for HttpProfile {
    fn default() -> Self {
        Self {
            scheme: Scheme::default(),
            endpoint: None,
            root_domain: None,
            req_timeout: DEFAULT_REQ_TIMEOUT,
            proxy: None,
        }
    }
}

impl HttpProfile {
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_root_domain(mut self, root_domain: impl Into<String>) -> Self {
        self.root_domain = Some(root_domain.into());
        self
    }

    pub fn with_req_timeout(mut self, req_timeout: Duration) -> Self {
        self.req_timeout = req_timeout;
        self
    }

    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// the host serving `service`, `default_host` unless overridden
    pub fn host(&self, service: &str, default_host: &str) -> String {
        match (&self.endpoint, &self.root_domain) {
            (Some(endpoint), _) => endpoint.clone(),
            (None, Some(root_domain)) => format!("{service}.{root_domain}"),
            (None, None) => default_host.to_string(),
        }
    }
}

/// retry config of the transport, retry is disabled by default
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// max retries when the request fails before a response is received
    pub network_failure_max_retries: u32,

    /// max retries when the api returns `RequestLimitExceeded`
    pub rate_limit_max_retries: u32,

    /// the first retry waits `backoff`, every next one doubles it
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            network_failure_max_retries: 0,
            rate_limit_max_retries: 0,
            backoff: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    pub(crate) fn delay(&self, attempt: u32) -> Duration {
        self.backoff.saturating_mul(2u32.saturating_pow(attempt))
    }
}

/// client config
#[derive(Debug, Clone, Default)]
pub struct ClientProfile {
    pub http_profile: HttpProfile,

    /// error message language, the server default is used when `None`
    pub language: Option<Language>,

    /// skip hashing the request body, signs `UNSIGNED-PAYLOAD` instead
    pub unsigned_payload: bool,

    pub retry: RetryPolicy,
}

impl ClientProfile {
    pub fn with_http_profile(mut self, http_profile: HttpProfile) -> Self {
        self.http_profile = http_profile;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn with_unsigned_payload(mut self, unsigned_payload: bool) -> Self {
        self.unsigned_payload = unsigned_payload;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host() {
        const DEFAULT_HOST: &str = "vpc.tencentcloudapi.com";

        let profile = HttpProfile::default();
        assert_eq!(profile.host("vpc", DEFAULT_HOST), "vpc.tencentcloudapi.com");

        let profile = profile.with_root_domain("internal.tencentcloudapi.com");
        assert_eq!(
            profile.host("vpc", DEFAULT_HOST),
            "vpc.internal.tencentcloudapi.com"
        );

        let profile = profile.with_endpoint("vpc.ap-guangzhou.tencentcloudapi.com");
        assert_eq!(
            profile.host("vpc", DEFAULT_HOST),
            "vpc.ap-guangzhou.tencentcloudapi.com"
        );
    }

    #[test]
    fn backoff_doubles() {
        let retry = RetryPolicy {
            backoff: Duration::from_millis(100),
            ..Default::default()
        };

        assert_eq!(retry.delay(0), Duration::from_millis(100));
        assert_eq!(retry.delay(1), Duration::from_millis(200));
        assert_eq!(retry.delay(3), Duration::from_millis(800));
    }
}
