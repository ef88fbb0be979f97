//! network acl actions

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use super::model::{Filter, NetworkAcl, NetworkAclEntrySet, Tag};

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateNetworkAclRequest {
    pub vpc_id: Option<String>,
    pub network_acl_name: Option<String>,
    /// `TRIPLE` or `QUINTUPLE`
    pub network_acl_type: Option<String>,
    pub tags: Option<Vec<Tag>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateNetworkAclResponse {
    pub network_acl: Option<NetworkAcl>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteNetworkAclRequest {
    pub network_acl_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeleteNetworkAclResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeNetworkAclsRequest {
    pub filters: Option<Vec<Filter>>,
    pub network_acl_ids: Option<Vec<String>>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub order_field: Option<String>,
    pub order_direction: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeNetworkAclsResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub network_acl_set: Vec<NetworkAcl>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total_count: u64,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyNetworkAclAttributeRequest {
    pub network_acl_id: Option<String>,
    pub network_acl_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModifyNetworkAclAttributeResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyNetworkAclEntriesRequest {
    pub network_acl_id: Option<String>,
    pub network_acl_entry_set: Option<NetworkAclEntrySet>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModifyNetworkAclEntriesResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssociateNetworkAclSubnetsRequest {
    pub network_acl_id: Option<String>,
    pub subnet_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AssociateNetworkAclSubnetsResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DisassociateNetworkAclSubnetsRequest {
    pub network_acl_id: Option<String>,
    pub subnet_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DisassociateNetworkAclSubnetsResponse {}
