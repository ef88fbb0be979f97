//! security group actions

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use super::model::{
    Filter, ReferredSecurityGroup, SecurityGroup, SecurityGroupLimitSet, SecurityGroupPolicySet, Tag,
};

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateSecurityGroupRequest {
    pub group_name: Option<String>,
    pub group_description: Option<String>,
    pub project_id: Option<String>,
    pub tags: Option<Vec<Tag>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateSecurityGroupResponse {
    pub security_group: Option<SecurityGroup>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteSecurityGroupRequest {
    pub security_group_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeleteSecurityGroupResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeSecurityGroupsRequest {
    pub security_group_ids: Option<Vec<String>>,
    pub filters: Option<Vec<Filter>>,
    pub offset: Option<String>,
    pub limit: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeSecurityGroupsResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total_count: u64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub security_group_set: Vec<SecurityGroup>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifySecurityGroupAttributeRequest {
    pub security_group_id: Option<String>,
    pub group_name: Option<String>,
    pub group_description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModifySecurityGroupAttributeResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeSecurityGroupPoliciesRequest {
    pub security_group_id: Option<String>,
    pub filters: Option<Vec<Filter>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeSecurityGroupPoliciesResponse {
    pub security_group_policy_set: Option<SecurityGroupPolicySet>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateSecurityGroupPoliciesRequest {
    pub security_group_id: Option<String>,
    /// only one of ingress or egress may be set, `version` guards concurrent edits
    pub security_group_policy_set: Option<SecurityGroupPolicySet>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CreateSecurityGroupPoliciesResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteSecurityGroupPoliciesRequest {
    pub security_group_id: Option<String>,
    pub security_group_policy_set: Option<SecurityGroupPolicySet>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeleteSecurityGroupPoliciesResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReplaceSecurityGroupPolicyRequest {
    pub security_group_id: Option<String>,
    /// one rule, matched by `policy_index`
    pub security_group_policy_set: Option<SecurityGroupPolicySet>,
    pub original_security_group_policy_set: Option<SecurityGroupPolicySet>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReplaceSecurityGroupPolicyResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifySecurityGroupPoliciesRequest {
    pub security_group_id: Option<String>,
    pub security_group_policy_set: Option<SecurityGroupPolicySet>,
    /// keep the order of the given policies
    pub sort_policys: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModifySecurityGroupPoliciesResponse {}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DescribeSecurityGroupLimitsRequest {}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeSecurityGroupLimitsResponse {
    pub security_group_limit_set: Option<SecurityGroupLimitSet>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeSecurityGroupReferencesRequest {
    pub security_group_ids: Option<Vec<String>>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeSecurityGroupReferencesResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub referred_security_group_set: Vec<ReferredSecurityGroup>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CloneSecurityGroupRequest {
    pub security_group_id: Option<String>,
    pub group_name: Option<String>,
    pub group_description: Option<String>,
    pub project_id: Option<String>,
    pub remote_region: Option<String>,
    pub tags: Option<Vec<Tag>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CloneSecurityGroupResponse {
    pub security_group: Option<SecurityGroup>,
}
