//! cloud connect network actions

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use super::model::{
    Ccn, CcnAttachedInstance, CcnInstance, CcnRegionBandwidthLimit, CcnRoute, Filter, Tag,
};

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateCcnRequest {
    pub ccn_name: Option<String>,
    pub ccn_description: Option<String>,
    /// `PT`, `AU`, `AG`
    pub qos_level: Option<String>,
    /// `POSTPAID` or `PREPAID`
    pub instance_charge_type: Option<String>,
    /// `OUTER_REGION_LIMIT` or `INTER_REGION_LIMIT`
    pub bandwidth_limit_type: Option<String>,
    pub tags: Option<Vec<Tag>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateCcnResponse {
    pub ccn: Option<Ccn>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteCcnRequest {
    pub ccn_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeleteCcnResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeCcnsRequest {
    pub ccn_ids: Option<Vec<String>>,
    pub filters: Option<Vec<Filter>>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub order_field: Option<String>,
    pub order_direction: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeCcnsResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total_count: u64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub ccn_set: Vec<Ccn>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyCcnAttributeRequest {
    pub ccn_id: Option<String>,
    pub ccn_name: Option<String>,
    pub ccn_description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModifyCcnAttributeResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttachCcnInstancesRequest {
    pub ccn_id: Option<String>,
    pub instances: Option<Vec<CcnInstance>>,
    /// owner uin of the ccn when attaching across accounts
    pub ccn_uin: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AttachCcnInstancesResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetachCcnInstancesRequest {
    pub ccn_id: Option<String>,
    pub instances: Option<Vec<CcnInstance>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DetachCcnInstancesResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AcceptAttachCcnInstancesRequest {
    pub ccn_id: Option<String>,
    pub instances: Option<Vec<CcnInstance>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AcceptAttachCcnInstancesResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RejectAttachCcnInstancesRequest {
    pub ccn_id: Option<String>,
    pub instances: Option<Vec<CcnInstance>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RejectAttachCcnInstancesResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeCcnAttachedInstancesRequest {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub filters: Option<Vec<Filter>>,
    pub ccn_id: Option<String>,
    pub order_field: Option<String>,
    pub order_direction: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeCcnAttachedInstancesResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total_count: u64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub instance_set: Vec<CcnAttachedInstance>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeCcnRoutesRequest {
    pub ccn_id: Option<String>,
    pub route_ids: Option<Vec<String>>,
    pub filters: Option<Vec<Filter>>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeCcnRoutesResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total_count: u64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub route_set: Vec<CcnRoute>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnableCcnRoutesRequest {
    pub ccn_id: Option<String>,
    pub route_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EnableCcnRoutesResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DisableCcnRoutesRequest {
    pub ccn_id: Option<String>,
    pub route_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DisableCcnRoutesResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResetAttachCcnInstancesRequest {
    pub ccn_id: Option<String>,
    /// owner of the cloud connect network
    pub ccn_uin: Option<String>,
    pub instances: Option<Vec<CcnInstance>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResetAttachCcnInstancesResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeCcnRegionBandwidthLimitsRequest {
    pub ccn_id: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeCcnRegionBandwidthLimitsResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub ccn_region_bandwidth_limit_set: Vec<CcnRegionBandwidthLimit>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SetCcnRegionBandwidthLimitsRequest {
    pub ccn_id: Option<String>,
    pub ccn_region_bandwidth_limits: Option<Vec<CcnRegionBandwidthLimit>>,
    pub set_default_limit_flag: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SetCcnRegionBandwidthLimitsResponse {}
