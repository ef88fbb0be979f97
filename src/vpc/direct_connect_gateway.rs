//! direct connect gateway actions

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use super::model::{DirectConnectGateway, DirectConnectGatewayCcnRoute, Filter};

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDirectConnectGatewayRequest {
    pub direct_connect_gateway_name: Option<String>,
    /// `VPC` or `CCN`
    pub network_type: Option<String>,
    pub network_instance_id: Option<String>,
    pub gateway_type: Option<String>,
    pub mode_type: Option<String>,
    pub zone: Option<String>,
    pub ha_zone_group_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateDirectConnectGatewayResponse {
    pub direct_connect_gateway: Option<DirectConnectGateway>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteDirectConnectGatewayRequest {
    pub direct_connect_gateway_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeleteDirectConnectGatewayResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDirectConnectGatewaysRequest {
    pub direct_connect_gateway_ids: Option<Vec<String>>,
    pub filters: Option<Vec<Filter>>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeDirectConnectGatewaysResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub direct_connect_gateway_set: Vec<DirectConnectGateway>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total_count: u64,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyDirectConnectGatewayAttributeRequest {
    pub direct_connect_gateway_id: Option<String>,
    pub direct_connect_gateway_name: Option<String>,
    pub ccn_route_type: Option<String>,
    pub mode_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModifyDirectConnectGatewayAttributeResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDirectConnectGatewayCcnRoutesRequest {
    pub direct_connect_gateway_id: Option<String>,
    pub routes: Option<Vec<DirectConnectGatewayCcnRoute>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CreateDirectConnectGatewayCcnRoutesResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteDirectConnectGatewayCcnRoutesRequest {
    pub direct_connect_gateway_id: Option<String>,
    pub route_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeleteDirectConnectGatewayCcnRoutesResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDirectConnectGatewayCcnRoutesRequest {
    pub direct_connect_gateway_id: Option<String>,
    pub ccn_route_type: Option<String>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeDirectConnectGatewayCcnRoutesResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub route_set: Vec<DirectConnectGatewayCcnRoute>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total_count: u64,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReplaceDirectConnectGatewayCcnRoutesRequest {
    pub direct_connect_gateway_id: Option<String>,
    pub routes: Option<Vec<DirectConnectGatewayCcnRoute>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReplaceDirectConnectGatewayCcnRoutesResponse {}
