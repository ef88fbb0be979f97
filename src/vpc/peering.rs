//! vpc peering connection actions

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use super::model::{Filter, Tag, VpcPeeringConnection};

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateVpcPeeringConnectionRequest {
    pub source_vpc_id: Option<String>,
    pub peering_connection_name: Option<String>,
    pub destination_vpc_id: Option<String>,
    pub destination_uin: Option<String>,
    pub destination_region: Option<String>,
    /// Mbps
    pub bandwidth: Option<u64>,
    pub r#type: Option<String>,
    pub charge_type: Option<String>,
    pub qos_level: Option<String>,
    pub tags: Option<Vec<Tag>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateVpcPeeringConnectionResponse {
    pub peering_connection_id: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteVpcPeeringConnectionRequest {
    pub peering_connection_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeleteVpcPeeringConnectionResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeVpcPeeringConnectionsRequest {
    pub peering_connection_ids: Option<Vec<String>>,
    pub filters: Option<Vec<Filter>>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub order_field: Option<String>,
    pub order_direction: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeVpcPeeringConnectionsResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub peer_connection_set: Vec<VpcPeeringConnection>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total_count: u64,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyVpcPeeringConnectionRequest {
    pub peering_connection_id: Option<String>,
    pub peering_connection_name: Option<String>,
    pub bandwidth: Option<u64>,
    pub charge_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModifyVpcPeeringConnectionResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AcceptVpcPeeringConnectionRequest {
    pub peering_connection_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AcceptVpcPeeringConnectionResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RejectVpcPeeringConnectionRequest {
    pub peering_connection_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RejectVpcPeeringConnectionResponse {}
