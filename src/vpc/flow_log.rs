//! flow log actions

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use super::model::{FlowLog, Tag};

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateFlowLogRequest {
    pub flow_log_name: Option<String>,
    pub resource_type: Option<String>,
    pub resource_id: Option<String>,
    pub traffic_type: Option<String>,
    pub vpc_id: Option<String>,
    pub flow_log_description: Option<String>,
    pub cloud_log_id: Option<String>,
    pub tags: Option<Vec<Tag>>,
    /// `cls` or `ckafka`
    pub storage_type: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateFlowLogResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub flow_log: Vec<FlowLog>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteFlowLogRequest {
    pub flow_log_id: Option<String>,
    pub vpc_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeleteFlowLogResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeFlowLogsRequest {
    pub vpc_id: Option<String>,
    pub flow_log_id: Option<String>,
    pub flow_log_name: Option<String>,
    pub resource_type: Option<String>,
    pub resource_id: Option<String>,
    pub traffic_type: Option<String>,
    pub cloud_log_id: Option<String>,
    pub cloud_log_state: Option<String>,
    pub order_field: Option<String>,
    pub order_direction: Option<String>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeFlowLogsResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub flow_log: Vec<FlowLog>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total_num: u64,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeFlowLogRequest {
    pub vpc_id: Option<String>,
    pub flow_log_id: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeFlowLogResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub flow_log: Vec<FlowLog>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyFlowLogAttributeRequest {
    pub vpc_id: Option<String>,
    pub flow_log_id: Option<String>,
    pub flow_log_name: Option<String>,
    pub flow_log_description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModifyFlowLogAttributeResponse {}
