//! elastic public ip actions

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use super::model::{Address, AddressChargePrepaid, Filter, Quota, Tag};

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AllocateAddressesRequest {
    /// 1 by default
    pub address_count: Option<u64>,
    /// `BGP`, `CMCC`, `CTCC`, `CUCC` ...
    pub internet_service_provider: Option<String>,
    /// `BANDWIDTH_PACKAGE`, `BANDWIDTH_POSTPAID_BY_HOUR`, `TRAFFIC_POSTPAID_BY_HOUR` ...
    pub internet_charge_type: Option<String>,
    /// Mbps
    pub internet_max_bandwidth_out: Option<u64>,
    pub address_charge_prepaid: Option<AddressChargePrepaid>,
    /// `EIP`, `AnycastEIP` or `HighQualityEIP`
    pub address_type: Option<String>,
    pub anycast_zone: Option<String>,
    #[serde(rename = "ApplicableForCLB")]
    pub applicable_for_clb: Option<bool>,
    pub tags: Option<Vec<Tag>>,
    pub bandwidth_package_id: Option<String>,
    pub address_name: Option<String>,
    pub dedicated_cluster_id: Option<String>,
    pub egress: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AllocateAddressesResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub address_set: Vec<String>,
    pub task_id: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReleaseAddressesRequest {
    pub address_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReleaseAddressesResponse {
    pub task_id: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeAddressesRequest {
    pub address_ids: Option<Vec<String>>,
    pub filters: Option<Vec<Filter>>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeAddressesResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total_count: u64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub address_set: Vec<Address>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssociateAddressRequest {
    pub address_id: Option<String>,
    /// mutually exclusive with `network_interface_id`
    pub instance_id: Option<String>,
    pub network_interface_id: Option<String>,
    pub private_ip_address: Option<String>,
    pub eip_direct_connection: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AssociateAddressResponse {
    pub task_id: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DisassociateAddressRequest {
    pub address_id: Option<String>,
    pub reallocate_normal_public_ip: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DisassociateAddressResponse {
    pub task_id: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyAddressAttributeRequest {
    pub address_id: Option<String>,
    pub address_name: Option<String>,
    /// `TRUE` or `FALSE`
    pub eip_direct_connection: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModifyAddressAttributeResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyAddressesBandwidthRequest {
    pub address_ids: Option<Vec<String>>,
    /// Mbps
    pub internet_max_bandwidth_out: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ModifyAddressesBandwidthResponse {
    pub task_id: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransformAddressRequest {
    /// the cvm instance whose normal public ip becomes an eip
    pub instance_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TransformAddressResponse {
    pub address_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DescribeAddressQuotaRequest {}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeAddressQuotaResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub quota_set: Vec<Quota>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyAddressInternetChargeTypeRequest {
    pub address_id: Option<String>,
    /// `TRAFFIC_POSTPAID_BY_HOUR` or `BANDWIDTH_PREPAID_BY_MONTH`
    pub internet_charge_type: Option<String>,
    pub internet_max_bandwidth_out: Option<u64>,
    pub address_charge_prepaid: Option<AddressChargePrepaid>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModifyAddressInternetChargeTypeResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RenewAddressesRequest {
    pub address_ids: Option<Vec<String>>,
    pub address_charge_prepaid: Option<AddressChargePrepaid>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RenewAddressesResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdjustPublicAddressRequest {
    pub instance_id: Option<String>,
    pub address_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AdjustPublicAddressResponse {
    pub task_id: Option<u64>,
}
