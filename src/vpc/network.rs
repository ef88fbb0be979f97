//! vpc, subnet and async task actions

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use super::model::{
    AssistantCidr, Filter, Ipv6SubnetCidrBlock, Subnet, SubnetInput, Tag, Vpc, VpcLimit,
    VpcPrivateIpAddress,
};

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateVpcRequest {
    pub vpc_name: Option<String>,
    /// must be inside `10.0.0.0/12`, `172.16.0.0/12` or `192.168.0.0/16`
    pub cidr_block: Option<String>,
    /// `true` or `false`
    pub enable_multicast: Option<String>,
    pub dns_servers: Option<Vec<String>>,
    pub domain_name: Option<String>,
    pub tags: Option<Vec<Tag>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateVpcResponse {
    pub vpc: Option<Vpc>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteVpcRequest {
    pub vpc_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeleteVpcResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeVpcsRequest {
    pub vpc_ids: Option<Vec<String>>,
    pub filters: Option<Vec<Filter>>,
    pub offset: Option<String>,
    pub limit: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeVpcsResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total_count: u64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub vpc_set: Vec<Vpc>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyVpcAttributeRequest {
    pub vpc_id: Option<String>,
    pub vpc_name: Option<String>,
    pub enable_multicast: Option<String>,
    pub dns_servers: Option<Vec<String>>,
    pub domain_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModifyVpcAttributeResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeVpcLimitsRequest {
    /// for example `appid-max-vpcs`, `vpc-max-subnets`
    pub limit_types: Option<Vec<String>>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeVpcLimitsResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub vpc_limit_set: Vec<VpcLimit>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssignIpv6CidrBlockRequest {
    pub vpc_id: Option<String>,
    pub address_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AssignIpv6CidrBlockResponse {
    pub ipv6_cidr_block: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnassignIpv6CidrBlockRequest {
    pub vpc_id: Option<String>,
    pub ipv6_cidr_block: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UnassignIpv6CidrBlockResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssignIpv6SubnetCidrBlockRequest {
    pub vpc_id: Option<String>,
    pub ipv6_subnet_cidr_blocks: Option<Vec<Ipv6SubnetCidrBlock>>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AssignIpv6SubnetCidrBlockResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub ipv6_subnet_cidr_block_set: Vec<Ipv6SubnetCidrBlock>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateSubnetRequest {
    pub vpc_id: Option<String>,
    pub subnet_name: Option<String>,
    pub cidr_block: Option<String>,
    pub zone: Option<String>,
    pub tags: Option<Vec<Tag>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateSubnetResponse {
    pub subnet: Option<Subnet>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateSubnetsRequest {
    pub vpc_id: Option<String>,
    pub subnets: Option<Vec<SubnetInput>>,
    pub tags: Option<Vec<Tag>>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateSubnetsResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub subnet_set: Vec<Subnet>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteSubnetRequest {
    pub subnet_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeleteSubnetResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeSubnetsRequest {
    pub subnet_ids: Option<Vec<String>>,
    pub filters: Option<Vec<Filter>>,
    pub offset: Option<String>,
    pub limit: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeSubnetsResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total_count: u64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub subnet_set: Vec<Subnet>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifySubnetAttributeRequest {
    pub subnet_id: Option<String>,
    pub subnet_name: Option<String>,
    pub enable_broadcast: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModifySubnetAttributeResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeTaskResultRequest {
    /// the async task id returned by a mutating action
    pub task_id: Option<u64>,
    pub deal_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeTaskResultResponse {
    pub task_id: Option<u64>,
    /// `SUCCESS`, `FAILED` or `RUNNING`
    pub result: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnassignIpv6SubnetCidrBlockRequest {
    pub vpc_id: Option<String>,
    pub ipv6_subnet_cidr_blocks: Option<Vec<Ipv6SubnetCidrBlock>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UnassignIpv6SubnetCidrBlockResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateAssistantCidrRequest {
    pub vpc_id: Option<String>,
    pub cidr_blocks: Option<Vec<String>>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateAssistantCidrResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub assistant_cidr_set: Vec<AssistantCidr>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteAssistantCidrRequest {
    pub vpc_id: Option<String>,
    pub cidr_blocks: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeleteAssistantCidrResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeAssistantCidrRequest {
    pub vpc_ids: Option<Vec<String>>,
    pub filters: Option<Vec<Filter>>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeAssistantCidrResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub assistant_cidr_set: Vec<AssistantCidr>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total_count: u64,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyAssistantCidrRequest {
    pub vpc_id: Option<String>,
    pub new_cidr_blocks: Option<Vec<String>>,
    pub old_cidr_blocks: Option<Vec<String>>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ModifyAssistantCidrResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub assistant_cidr_set: Vec<AssistantCidr>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeVpcPrivateIpAddressesRequest {
    pub vpc_id: Option<String>,
    pub private_ip_addresses: Option<Vec<String>>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeVpcPrivateIpAddressesResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub vpc_private_ip_address_set: Vec<VpcPrivateIpAddress>,
}
