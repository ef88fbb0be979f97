//! route table actions

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use super::model::{Filter, Route, RouteConflict, RouteTable, Tag};

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateRouteTableRequest {
    pub vpc_id: Option<String>,
    pub route_table_name: Option<String>,
    pub tags: Option<Vec<Tag>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateRouteTableResponse {
    pub route_table: Option<RouteTable>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteRouteTableRequest {
    pub route_table_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeleteRouteTableResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeRouteTablesRequest {
    pub route_table_ids: Option<Vec<String>>,
    pub filters: Option<Vec<Filter>>,
    pub offset: Option<String>,
    pub limit: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeRouteTablesResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total_count: u64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub route_table_set: Vec<RouteTable>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyRouteTableAttributeRequest {
    pub route_table_id: Option<String>,
    pub route_table_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModifyRouteTableAttributeResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateRoutesRequest {
    pub route_table_id: Option<String>,
    pub routes: Option<Vec<Route>>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateRoutesResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total_count: u64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub route_table_set: Vec<RouteTable>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteRoutesRequest {
    pub route_table_id: Option<String>,
    /// only `route_id` or `route_item_id` of each route is used
    pub routes: Option<Vec<Route>>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteRoutesResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub route_set: Vec<Route>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReplaceRoutesRequest {
    pub route_table_id: Option<String>,
    pub routes: Option<Vec<Route>>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReplaceRoutesResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub old_route_set: Vec<Route>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub new_route_set: Vec<Route>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReplaceRouteTableAssociationRequest {
    pub subnet_id: Option<String>,
    pub route_table_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReplaceRouteTableAssociationResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnableRoutesRequest {
    pub route_table_id: Option<String>,
    pub route_ids: Option<Vec<u64>>,
    pub route_item_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EnableRoutesResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DisableRoutesRequest {
    pub route_table_id: Option<String>,
    pub route_ids: Option<Vec<u64>>,
    pub route_item_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DisableRoutesResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResetRoutesRequest {
    pub route_table_id: Option<String>,
    pub route_table_name: Option<String>,
    pub routes: Option<Vec<Route>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResetRoutesResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeRouteConflictsRequest {
    pub route_table_id: Option<String>,
    pub destination_cidr_blocks: Option<Vec<String>>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeRouteConflictsResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub route_conflict_set: Vec<RouteConflict>,
}
