use std::error::Error;

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use time::format_description::FormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};
use tracing::instrument;

type HmacSha256 = Hmac<Sha256>;

pub const ALGORITHM: &str = "TC3-HMAC-SHA256";
pub const CONTENT_TYPE: &str = "application/json; charset=utf-8";
pub const UNSIGNED_PAYLOAD: &str = "UNSIGNED-PAYLOAD";

/// hex encoded sha256 of the request body, or of `UNSIGNED-PAYLOAD` when the body is not signed
pub fn hashed_payload(payload: &[u8], unsigned: bool) -> String {
    if unsigned {
        hex::encode(Sha256::digest(UNSIGNED_PAYLOAD))
    } else {
        hex::encode(Sha256::digest(payload))
    }
}

#[instrument(level = "trace", err, skip(secret_key))]
pub fn calculate_authorization(
    secret_id: &str,
    secret_key: &str,
    service: &str,
    host: &str,
    hashed_request_payload: &str,
    now: &OffsetDateTime,
) -> Result<String, Box<dyn Error + Send + Sync + 'static>> {
    const CANONICAL_URI: &str = "/";
    const CANONICAL_QUERY_STRING: &str = "";
    const SIGNED_HEADERS: &str = "content-type;host";
    const FORMAT: &[FormatItem] = format_description!("[year]-[month]-[day]");

    let canonical_headers = format!("content-type:{CONTENT_TYPE}\nhost:{host}\n");

    let canonical_request = format!(
        "POST\n{CANONICAL_URI}\n{CANONICAL_QUERY_STRING}\n{canonical_headers}\n{SIGNED_HEADERS}\n{hashed_request_payload}"
    );

    // the credential scope date is the utc date of the signing timestamp
    let date = now.to_offset(UtcOffset::UTC).format(FORMAT)?;
    let credential_scope = format!("{date}/{service}/tc3_request");
    let hashed_canonical_request = hex::encode(Sha256::digest(canonical_request));

    let timestamp = now.unix_timestamp();
    let string_to_sign =
        format!("{ALGORITHM}\n{timestamp}\n{credential_scope}\n{hashed_canonical_request}");

    let key = format!("TC3{secret_key}");
    let secret_date = hmac_sha256(date.as_bytes(), key.as_bytes())?;
    let secret_service = hmac_sha256(service.as_bytes(), &secret_date)?;
    let secret_signing = hmac_sha256("tc3_request".as_bytes(), &secret_service)?;
    let signature = hmac_sha256(string_to_sign.as_bytes(), &secret_signing)?;
    let signature = hex::encode(signature);

    Ok(format!("{ALGORITHM} Credential={secret_id}/{credential_scope}, SignedHeaders={SIGNED_HEADERS}, Signature={signature}"))
}

fn hmac_sha256(message: &[u8], key: &[u8]) -> Result<Vec<u8>, Box<dyn Error + Send + Sync + 'static>> {
    let mut hmac_sha256 = HmacSha256::new_from_slice(key)?;
    hmac_sha256.update(message);

    Ok(hmac_sha256.finalize().into_bytes().to_vec())
}

#[cfg(test)]
mod tests {
    use time::macros::offset;

    use super::*;

    const SECRET_ID: &str = "AKIDz8krbsJ5yKBZQpn74WFkmLPx3EXAMPLE";
    const SECRET_KEY: &str = "Gu5t9xGARNpq86cd98joQYCN3EXAMPLE";
    const HOST: &str = "vpc.tencentcloudapi.com";

    fn sign(payload_hash: &str, timestamp: i64) -> String {
        let now = OffsetDateTime::from_unix_timestamp(timestamp).unwrap();

        calculate_authorization(SECRET_ID, SECRET_KEY, "vpc", HOST, payload_hash, &now).unwrap()
    }

    #[test]
    fn known_signature() {
        let authorization = sign(&hashed_payload(br#"{"AddressCount":1}"#, false), 1551113065);

        assert_eq!(
            authorization,
            "TC3-HMAC-SHA256 Credential=AKIDz8krbsJ5yKBZQpn74WFkmLPx3EXAMPLE/2019-02-25/vpc/tc3_request, \
             SignedHeaders=content-type;host, \
             Signature=37ae8ca1dfb1bec9a54c284602dd8c4c6aaeca9dffcec68886ac5390deb6af51"
        );
    }

    #[test]
    fn known_unsigned_payload_signature() {
        let authorization = sign(&hashed_payload(b"ignored", true), 1551113065);

        assert!(authorization.ends_with(
            "Signature=0caed8a1c2ed9768b337c669f4274460c55d504c644de632346865a02274fd4b"
        ));
    }

    #[test]
    fn scope_date_is_utc() {
        // 2019-02-25 23:30 UTC is already 2019-02-26 in UTC+8
        let now = OffsetDateTime::from_unix_timestamp(1551137400)
            .unwrap()
            .to_offset(offset!(+8));

        let authorization = calculate_authorization(
            SECRET_ID,
            SECRET_KEY,
            "vpc",
            HOST,
            &hashed_payload(b"{}", false),
            &now,
        )
        .unwrap();

        assert!(authorization.contains("/2019-02-25/vpc/tc3_request"));
    }
}
