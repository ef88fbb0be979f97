//! bandwidth package and high availability vip actions

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use super::model::{BandwidthPackage, Filter, HaVip, Quota, Resource, Tag};

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateBandwidthPackageRequest {
    /// `BGP`, `HIGH_QUALITY_BGP`, `ANYCAST` ...
    pub network_type: Option<String>,
    pub charge_type: Option<String>,
    pub bandwidth_package_name: Option<String>,
    pub bandwidth_package_count: Option<u64>,
    /// Mbps
    pub internet_max_bandwidth: Option<u64>,
    pub tags: Option<Vec<Tag>>,
    pub protocol: Option<String>,
    pub time_span: Option<u64>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateBandwidthPackageResponse {
    pub bandwidth_package_id: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub bandwidth_package_ids: Vec<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteBandwidthPackageRequest {
    pub bandwidth_package_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeleteBandwidthPackageResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeBandwidthPackagesRequest {
    pub bandwidth_package_ids: Option<Vec<String>>,
    pub filters: Option<Vec<Filter>>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeBandwidthPackagesResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total_count: u64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub bandwidth_package_set: Vec<BandwidthPackage>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddBandwidthPackageResourcesRequest {
    pub resource_ids: Option<Vec<String>>,
    pub bandwidth_package_id: Option<String>,
    pub network_type: Option<String>,
    /// `Address` or `LoadBalance`
    pub resource_type: Option<String>,
    pub protocol: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AddBandwidthPackageResourcesResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RemoveBandwidthPackageResourcesRequest {
    pub bandwidth_package_id: Option<String>,
    pub resource_type: Option<String>,
    pub resource_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RemoveBandwidthPackageResourcesResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateHaVipRequest {
    pub vpc_id: Option<String>,
    pub subnet_id: Option<String>,
    pub ha_vip_name: Option<String>,
    /// allocated automatically when `None`
    pub vip: Option<String>,
    pub network_interface_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateHaVipResponse {
    pub ha_vip: Option<HaVip>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteHaVipRequest {
    pub ha_vip_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeleteHaVipResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeHaVipsRequest {
    pub ha_vip_ids: Option<Vec<String>>,
    pub filters: Option<Vec<Filter>>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeHaVipsResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total_count: u64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub ha_vip_set: Vec<HaVip>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct HaVipAssociateAddressIpRequest {
    pub ha_vip_id: Option<String>,
    pub address_ip: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HaVipAssociateAddressIpResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct HaVipDisassociateAddressIpRequest {
    pub ha_vip_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HaVipDisassociateAddressIpResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyBandwidthPackageAttributeRequest {
    pub bandwidth_package_id: Option<String>,
    pub bandwidth_package_name: Option<String>,
    pub charge_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModifyBandwidthPackageAttributeResponse {}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DescribeBandwidthPackageQuotaRequest {}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeBandwidthPackageQuotaResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub quota_set: Vec<Quota>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeBandwidthPackageResourcesRequest {
    pub bandwidth_package_id: Option<String>,
    pub filters: Option<Vec<Filter>>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeBandwidthPackageResourcesResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub resource_set: Vec<Resource>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total_count: u64,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyHaVipAttributeRequest {
    pub ha_vip_id: Option<String>,
    pub ha_vip_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModifyHaVipAttributeResponse {}
