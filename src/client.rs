use reqwest::{Proxy, Request};
use serde::Deserialize;
use time::OffsetDateTime;
use tracing::{debug, instrument, trace, warn};

use crate::api::Api;
use crate::context::Context;
use crate::credential::Credential;
use crate::error::{ApiError, Error};
use crate::profile::ClientProfile;
use crate::tc3_hmac;

const REQUEST_CLIENT: &str = concat!("SDK_RUST_", env!("CARGO_PKG_VERSION"));

/// tencentcloud api client
#[derive(Debug, Clone)]
pub struct Client {
    region: String,
    http_client: reqwest::Client,
    credential: Credential,
    profile: ClientProfile,
}

impl Client {
    /// create a api client
    pub fn new(
        credential: Credential,
        region: impl Into<String>,
        profile: ClientProfile,
    ) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder().timeout(profile.http_profile.req_timeout);
        if let Some(proxy) = &profile.http_profile.proxy {
            builder = builder.proxy(Proxy::all(proxy.as_str())?);
        }

        Ok(Self {
            region: region.into(),
            http_client: builder.build()?,
            credential,
            profile,
        })
    }

    /// the region sent as `X-TC-Region`
    pub fn region(&self) -> &str {
        &self.region
    }

    /// the profile this client was created with
    pub fn profile(&self) -> &ClientProfile {
        &self.profile
    }

    /// send api request, get the api response and request id
    pub async fn send<A: Api>(&self, request: &A::Request) -> Result<(A::Response, String), Error> {
        self.send_with_context::<A>(&Context::background(), request)
            .await
    }

    /// send api request, abort it once `ctx` is cancelled or its deadline is exceeded
    #[instrument(level = "trace", err, skip(self), fields(action = A::ACTION))]
    pub async fn send_with_context<A: Api>(
        &self,
        ctx: &Context,
        request: &A::Request,
    ) -> Result<(A::Response, String), Error> {
        if let Some(err) = ctx.err() {
            return Err(err);
        }

        let payload = serde_json::to_vec(request)?;

        trace!("marshal request done");

        let retry = &self.profile.retry;
        let mut network_failures = 0;
        let mut rate_limits = 0;

        loop {
            let err = tokio::select! {
                err = ctx.done() => return Err(err),
                result = self.round_trip::<A>(payload.clone()) => match result {
                    Ok(response) => return Ok(response),
                    Err(err) => err,
                },
            };

            let attempt = if err.is_network_failure()
                && network_failures < retry.network_failure_max_retries
            {
                network_failures += 1;
                network_failures
            } else if err.is_rate_limited() && rate_limits < retry.rate_limit_max_retries {
                rate_limits += 1;
                rate_limits
            } else {
                return Err(err);
            };

            let delay = retry.delay(attempt - 1);

            warn!(attempt, ?delay, %err, "request failed, retry later");

            tokio::select! {
                err = ctx.done() => return Err(err),
                _ = tokio::time::sleep(delay) => {}
            }
        }
    }

    async fn round_trip<A: Api>(&self, payload: Vec<u8>) -> Result<(A::Response, String), Error> {
        let request = self.create_request::<A>(payload)?;

        trace!(?request, "create http request done");

        let response = self.http_client.execute(request).await?;

        trace!(?response, "get http response done");

        let response = response.json::<Response<A::Response>>().await?;

        trace!(?response, "unmarshal response done");

        if let Some(err) = response.response.error {
            debug!(code = %err.code, request_id = %response.response.request_id, "api error");

            return Err(Error::Api {
                err,
                request_id: response.response.request_id,
            });
        }

        match response.response.response {
            None => Err(Error::Other("miss response".into())),
            Some(resp) => Ok((resp, response.response.request_id)),
        }
    }

    #[instrument(level = "trace", err, skip(payload))]
    fn create_request<A: Api>(&self, payload: Vec<u8>) -> Result<Request, Error> {
        let now = OffsetDateTime::now_utc();
        let http_profile = &self.profile.http_profile;
        let host = http_profile.host(A::SERVICE, A::HOST);
        let hashed_payload = tc3_hmac::hashed_payload(&payload, self.profile.unsigned_payload);

        let authorization = tc3_hmac::calculate_authorization(
            &self.credential.secret_id,
            &self.credential.secret_key,
            A::SERVICE,
            &host,
            &hashed_payload,
            &now,
        )
        .map_err(Error::Other)?;

        let mut builder = self
            .http_client
            .post(format!("{}://{host}/", http_profile.scheme.as_str()))
            .header("Authorization", authorization)
            .header("Content-Type", tc3_hmac::CONTENT_TYPE)
            .header("X-TC-Action", A::ACTION)
            .header("X-TC-Timestamp", now.unix_timestamp().to_string())
            .header("X-TC-Version", A::VERSION)
            .header("X-TC-RequestClient", REQUEST_CLIENT);

        if !self.region.is_empty() {
            builder = builder.header("X-TC-Region", &self.region);
        }
        if let Some(token) = &self.credential.token {
            builder = builder.header("X-TC-Token", token);
        }
        if let Some(language) = self.profile.language {
            builder = builder.header("X-TC-Language", language.as_str());
        }
        if self.profile.unsigned_payload {
            builder = builder.header("X-TC-Content-SHA256", tc3_hmac::UNSIGNED_PAYLOAD);
        }

        let request = builder.body(payload).build()?;

        Ok(request)
    }
}

#[derive(Debug, Deserialize)]
struct Response<T> {
    #[serde(rename = "Response")]
    response: ResponseDetail<T>,
}

#[derive(Debug, Deserialize)]
struct ResponseDetail<T> {
    #[serde(rename = "RequestId")]
    request_id: String,

    #[serde(flatten)]
    response: Option<T>,

    #[serde(rename = "Error")]
    error: Option<ApiError>,
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::*;
    use crate::profile::{HttpProfile, Language};

    #[derive(Debug, Default, Serialize)]
    struct PingRequest {
        #[serde(rename = "Value")]
        value: u32,
    }

    #[derive(Debug, Deserialize)]
    struct PingResponse {
        #[serde(rename = "Value")]
        value: u32,
    }

    struct Ping;

    impl Api for Ping {
        type Request = PingRequest;
        type Response = PingResponse;

        const VERSION: &'static str = "2020-01-01";
        const ACTION: &'static str = "Ping";
        const SERVICE: &'static str = "ping";
        const HOST: &'static str = "ping.tencentcloudapi.com";
    }

    #[test]
    fn create_request_headers() {
        let profile = ClientProfile::default()
            .with_http_profile(HttpProfile::default().with_endpoint("ping.internal"))
            .with_language(Language::EnUs)
            .with_unsigned_payload(true);
        let client = Client::new(
            Credential::with_token("AKIDexample", "secret", "token"),
            "ap-guangzhou",
            profile,
        )
        .unwrap();

        let request = client.create_request::<Ping>(b"{}".to_vec()).unwrap();
        let headers = request.headers();

        assert_eq!(request.url().as_str(), "https://ping.internal/");
        assert_eq!(headers["X-TC-Action"], "Ping");
        assert_eq!(headers["X-TC-Version"], "2020-01-01");
        assert_eq!(headers["X-TC-Region"], "ap-guangzhou");
        assert_eq!(headers["X-TC-Token"], "token");
        assert_eq!(headers["X-TC-Language"], "en-US");
        assert_eq!(headers["X-TC-Content-SHA256"], "UNSIGNED-PAYLOAD");
        assert!(headers["Authorization"]
            .to_str()
            .unwrap()
            .starts_with("TC3-HMAC-SHA256 Credential=AKIDexample/"));
    }

    #[test]
    fn empty_region_is_omitted() {
        let client = Client::new(
            Credential::new("AKIDexample", "secret"),
            "",
            ClientProfile::default(),
        )
        .unwrap();

        let request = client.create_request::<Ping>(b"{}".to_vec()).unwrap();

        assert_eq!(request.url().as_str(), "https://ping.tencentcloudapi.com/");
        assert!(request.headers().get("X-TC-Region").is_none());
        assert!(request.headers().get("X-TC-Token").is_none());
    }

    #[test]
    fn decode_error_response() {
        let response: Response<PingResponse> = serde_json::from_str(
            r#"{"Response":{"Error":{"Code":"AuthFailure","Message":"bad"},"RequestId":"r-1"}}"#,
        )
        .unwrap();

        assert_eq!(response.response.request_id, "r-1");
        assert_eq!(response.response.error.unwrap().code, "AuthFailure");
        assert!(response.response.response.is_none());
    }

    #[test]
    fn decode_ok_response() {
        let response: Response<PingResponse> =
            serde_json::from_str(r#"{"Response":{"Value":7,"RequestId":"r-2"}}"#).unwrap();

        assert_eq!(response.response.response.unwrap().value, 7);
        assert!(response.response.error.is_none());
    }
}
