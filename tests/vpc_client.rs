use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use tencentcloud_vpc::api::Api;
use tencentcloud_vpc::vpc::{
    self, AcceptAttachCcnInstances, AcceptAttachCcnInstancesResponse, AllocateAddresses,
    AllocateAddressesRequest, CcnInstance, DescribeVpcsRequest, Filter,
};
use tencentcloud_vpc::{
    ClientProfile, Context, Credential, Error, HttpProfile, RetryPolicy, Scheme,
};
use tokio::net::TcpListener;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

const REGION: &str = "ap-guangzhou";

fn profile_for(endpoint: impl Into<String>) -> ClientProfile {
    ClientProfile::default().with_http_profile(
        HttpProfile::default()
            .with_scheme(Scheme::Http)
            .with_endpoint(endpoint)
            .with_req_timeout(Duration::from_secs(5)),
    )
}

fn client_for(server: &ServerGuard) -> Result<vpc::Client> {
    let client = vpc::Client::new(
        Credential::new("AKIDexample", "secret"),
        REGION,
        profile_for(server.host_with_port()),
    )?;

    Ok(client)
}

/// a server which accepts connections and never answers
async fn silent_server() -> Result<String> {
    let (addr, _) = counting_silent_server().await?;

    Ok(addr)
}

/// like [`silent_server`], also counting the accepted connections
async fn counting_silent_server() -> Result<(String, Arc<AtomicUsize>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let accepted = Arc::new(AtomicUsize::new(0));
    let counter = accepted.clone();

    tokio::spawn(async move {
        let mut connections = vec![];
        while let Ok((stream, _)) = listener.accept().await {
            counter.fetch_add(1, Ordering::SeqCst);
            connections.push(stream);
        }
    });

    Ok((addr.to_string(), accepted))
}

#[tokio::test]
async fn allocate_addresses_carries_action_metadata() -> Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_header("x-tc-action", "AllocateAddresses")
        .match_header("x-tc-version", "2017-03-12")
        .match_header("x-tc-region", REGION)
        .match_header(
            "authorization",
            Matcher::Regex(r"^TC3-HMAC-SHA256 Credential=AKIDexample/\d{4}-\d{2}-\d{2}/vpc/tc3_request, ".into()),
        )
        .match_body(Matcher::Json(json!({"AddressCount": 1})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "Response": {
                    "AddressSet": ["eip-m44ku5d4"],
                    "TaskId": "1234",
                    "RequestId": "req-allocate",
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server)?;
    let (response, request_id) = client
        .allocate_addresses(Some(AllocateAddressesRequest {
            address_count: Some(1),
            ..Default::default()
        }))
        .await?;

    mock.assert_async().await;
    assert_eq!(request_id, "req-allocate");
    assert_eq!(response.address_set, ["eip-m44ku5d4"]);
    assert_eq!(response.task_id.as_deref(), Some("1234"));

    Ok(())
}

#[tokio::test]
async fn cancelled_context_skips_transport() -> Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server)?;
    let ctx = Context::background();
    ctx.cancel();

    let result = client
        .allocate_addresses_with_context(&ctx, Some(AllocateAddressesRequest::default()))
        .await;

    assert!(matches!(result, Err(Error::Cancelled)), "{result:?}");
    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn none_request_is_sent_as_default() -> Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_header("x-tc-action", "AcceptAttachCcnInstances")
        .match_body(Matcher::Json(json!({})))
        .with_status(200)
        .with_body(r#"{"Response":{"RequestId":"req-accept"}}"#)
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server)?;

    let (none_response, _) = client.accept_attach_ccn_instances(None).await?;
    let (default_response, _) = client
        .accept_attach_ccn_instances(Some(Default::default()))
        .await?;

    mock.assert_async().await;
    assert_eq!(none_response, AcceptAttachCcnInstancesResponse {});
    assert_eq!(none_response, default_response);

    Ok(())
}

#[tokio::test]
async fn typed_request_body() -> Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_header("x-tc-action", "AcceptAttachCcnInstances")
        .match_body(Matcher::Json(json!({
            "CcnId": "ccn-1",
            "Instances": [{
                "InstanceId": "vpc-1",
                "InstanceRegion": "ap-shanghai",
                "InstanceType": "VPC",
            }],
        })))
        .with_status(200)
        .with_body(r#"{"Response":{"RequestId":"req-accept"}}"#)
        .create_async()
        .await;

    let client = client_for(&server)?;
    client
        .accept_attach_ccn_instances(Some(vpc::AcceptAttachCcnInstancesRequest {
            ccn_id: Some("ccn-1".into()),
            instances: Some(vec![CcnInstance::new("vpc-1", "ap-shanghai", "VPC")]),
        }))
        .await?;

    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn transport_error_is_returned_unmodified() -> Result<()> {
    // nothing listens on port 1
    let client = vpc::Client::new(
        Credential::new("AKIDexample", "secret"),
        REGION,
        profile_for("127.0.0.1:1"),
    )?;

    let err = client.describe_vpcs(None).await.unwrap_err();

    match err {
        Error::Http(err) => assert!(err.is_connect() || err.is_request(), "{err:?}"),
        err => panic!("unexpected error {err:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn api_error_is_mapped() -> Result<()> {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/")
        .with_status(200)
        .with_body(
            json!({
                "Response": {
                    "Error": {
                        "Code": "AddressQuotaLimitExceeded",
                        "Message": "quota exceeded",
                    },
                    "RequestId": "req-quota",
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server)?;
    let err = client.allocate_addresses(None).await.unwrap_err();

    assert_eq!(err.code(), Some("AddressQuotaLimitExceeded"));
    assert_eq!(err.request_id(), Some("req-quota"));
    assert!(err.is_documented_for::<AllocateAddresses>());
    assert!(!err.is_documented_for::<AcceptAttachCcnInstances>());

    Ok(())
}

#[tokio::test]
async fn rate_limited_request_is_retried() -> Result<()> {
    let mut server = Server::new_async().await;
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let mock = server
        .mock("POST", "/")
        .match_header("x-tc-action", "DescribeVpcs")
        .match_header("x-tc-timestamp", Matcher::Regex(r"^\d+$".into()))
        .match_header(
            "authorization",
            Matcher::Regex(r"^TC3-HMAC-SHA256 Credential=AKIDexample/.+, Signature=[0-9a-f]{64}$".into()),
        )
        .with_status(200)
        .with_body_from_request(move |_| {
            let body = if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                json!({
                    "Response": {
                        "Error": {"Code": "RequestLimitExceeded", "Message": "slow down"},
                        "RequestId": "req-limited",
                    }
                })
            } else {
                json!({
                    "Response": {
                        "TotalCount": 1,
                        "VpcSet": [{"VpcId": "vpc-1"}],
                        "RequestId": "req-ok",
                    }
                })
            };

            body.to_string().into_bytes()
        })
        .expect(2)
        .create_async()
        .await;

    let profile = profile_for(server.host_with_port()).with_retry(RetryPolicy {
        rate_limit_max_retries: 1,
        backoff: Duration::from_millis(10),
        ..Default::default()
    });
    let client = vpc::Client::new(Credential::new("AKIDexample", "secret"), REGION, profile)?;

    let (response, request_id) = client
        .describe_vpcs(Some(DescribeVpcsRequest {
            filters: Some(vec![Filter::new("vpc-name", ["default"])]),
            ..Default::default()
        }))
        .await?;

    mock.assert_async().await;
    assert_eq!(hits.load(Ordering::SeqCst), 2);
    assert_eq!(request_id, "req-ok");
    assert_eq!(response.total_count, 1);

    Ok(())
}

#[tokio::test]
async fn rate_limit_without_retry_fails_fast() -> Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_body(
            r#"{"Response":{"Error":{"Code":"RequestLimitExceeded","Message":"slow down"},"RequestId":"r"}}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server)?;
    let err = client.describe_vpcs(None).await.unwrap_err();

    mock.assert_async().await;
    assert_eq!(err.code(), Some("RequestLimitExceeded"));

    Ok(())
}

#[tokio::test]
async fn network_failure_is_retried() -> Result<()> {
    let (addr, accepted) = counting_silent_server().await?;
    let profile = ClientProfile::default()
        .with_http_profile(
            HttpProfile::default()
                .with_scheme(Scheme::Http)
                .with_endpoint(addr)
                .with_req_timeout(Duration::from_millis(100)),
        )
        .with_retry(RetryPolicy {
            network_failure_max_retries: 1,
            backoff: Duration::from_millis(10),
            ..Default::default()
        });
    let client = vpc::Client::new(Credential::new("AKIDexample", "secret"), REGION, profile)?;

    let err = client.describe_vpcs(None).await.unwrap_err();

    match err {
        Error::Http(err) => assert!(err.is_timeout(), "{err:?}"),
        err => panic!("unexpected error {err:?}"),
    }
    assert_eq!(accepted.load(Ordering::SeqCst), 2);

    Ok(())
}

#[tokio::test]
async fn cancel_interrupts_retry_backoff() -> Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_body(
            r#"{"Response":{"Error":{"Code":"RequestLimitExceeded","Message":"slow down"},"RequestId":"r"}}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let profile = profile_for(server.host_with_port()).with_retry(RetryPolicy {
        rate_limit_max_retries: 3,
        backoff: Duration::from_secs(60),
        ..Default::default()
    });
    let client = vpc::Client::new(Credential::new("AKIDexample", "secret"), REGION, profile)?;

    let ctx = Context::background();
    let canceller = ctx.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        canceller.cancel();
    });

    let result = tokio::time::timeout(
        Duration::from_secs(10),
        client.describe_vpcs_with_context(&ctx, None),
    )
    .await?;

    assert!(matches!(result, Err(Error::Cancelled)), "{result:?}");
    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn null_list_in_response_is_empty() -> Result<()> {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/")
        .match_header("x-tc-action", "DescribeFlowLogs")
        .with_status(200)
        .with_body(r#"{"Response":{"FlowLog":null,"TotalNum":0,"RequestId":"req-flow"}}"#)
        .create_async()
        .await;

    let client = client_for(&server)?;
    let (response, request_id) = client.describe_flow_logs(None).await?;

    assert_eq!(request_id, "req-flow");
    assert!(response.flow_log.is_empty());
    assert_eq!(response.total_num, 0);

    Ok(())
}

#[tokio::test]
async fn context_deadline_aborts_inflight_request() -> Result<()> {
    let addr = silent_server().await?;
    let client = vpc::Client::new(
        Credential::new("AKIDexample", "secret"),
        REGION,
        profile_for(addr),
    )?;

    let ctx = Context::background().with_timeout(Duration::from_millis(100));
    let result = client.describe_vpcs_with_context(&ctx, None).await;

    assert!(matches!(result, Err(Error::DeadlineExceeded)), "{result:?}");

    Ok(())
}

#[tokio::test]
async fn context_cancel_aborts_inflight_request() -> Result<()> {
    let addr = silent_server().await?;
    let client = vpc::Client::new(
        Credential::new("AKIDexample", "secret"),
        REGION,
        profile_for(addr),
    )?;

    let ctx = Context::background();
    let canceller = ctx.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        canceller.cancel();
    });

    let result = client.describe_vpcs_with_context(&ctx, None).await;

    assert!(matches!(result, Err(Error::Cancelled)), "{result:?}");

    Ok(())
}

#[tokio::test]
async fn plain_variant_is_bounded_by_request_timeout_only() -> Result<()> {
    let addr = silent_server().await?;
    let profile = ClientProfile::default().with_http_profile(
        HttpProfile::default()
            .with_scheme(Scheme::Http)
            .with_endpoint(addr)
            .with_req_timeout(Duration::from_millis(100)),
    );
    let client = vpc::Client::new(Credential::new("AKIDexample", "secret"), REGION, profile)?;

    let err = client.describe_vpcs(None).await.unwrap_err();

    match err {
        Error::Http(err) => assert!(err.is_timeout(), "{err:?}"),
        err => panic!("unexpected error {err:?}"),
    }

    Ok(())
}

#[test]
fn response_type_follows_action() {
    fn response_of<A: Api>(_: A) -> &'static str {
        std::any::type_name::<A::Response>()
    }

    assert!(response_of(AllocateAddresses).ends_with("AllocateAddressesResponse"));
    assert!(response_of(AcceptAttachCcnInstances).ends_with("AcceptAttachCcnInstancesResponse"));
}
