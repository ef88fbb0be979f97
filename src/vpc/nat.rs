//! nat gateway actions

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use super::model::{
    DestinationIpPortTranslationNatRule, Filter, NatGateway,
    NatGatewayDestinationIpPortTranslationNatRule, Tag,
};

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateNatGatewayRequest {
    pub nat_gateway_name: Option<String>,
    pub vpc_id: Option<String>,
    /// Mbps
    pub internet_max_bandwidth_out: Option<u64>,
    pub max_concurrent_connection: Option<u64>,
    /// number of eips allocated for the gateway
    pub address_count: Option<u64>,
    pub public_ip_addresses: Option<Vec<String>>,
    pub zone: Option<String>,
    pub tags: Option<Vec<Tag>>,
    pub subnet_id: Option<String>,
    pub stock_public_ip_addresses_bandwidth_out: Option<u64>,
    pub public_ip_address_type: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateNatGatewayResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub nat_gateway_set: Vec<NatGateway>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total_count: u64,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteNatGatewayRequest {
    pub nat_gateway_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeleteNatGatewayResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeNatGatewaysRequest {
    pub nat_gateway_ids: Option<Vec<String>>,
    pub filters: Option<Vec<Filter>>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeNatGatewaysResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub nat_gateway_set: Vec<NatGateway>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total_count: u64,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyNatGatewayAttributeRequest {
    pub nat_gateway_id: Option<String>,
    pub nat_gateway_name: Option<String>,
    pub internet_max_bandwidth_out: Option<u64>,
    pub modify_security_group: Option<bool>,
    pub security_group_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModifyNatGatewayAttributeResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssociateNatGatewayAddressRequest {
    pub nat_gateway_id: Option<String>,
    /// allocate this many new eips, exclusive with `public_ip_addresses`
    pub address_count: Option<u64>,
    pub public_ip_addresses: Option<Vec<String>>,
    pub zone: Option<String>,
    pub stock_public_ip_addresses_bandwidth_out: Option<u64>,
    pub public_ip_address_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AssociateNatGatewayAddressResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DisassociateNatGatewayAddressRequest {
    pub nat_gateway_id: Option<String>,
    pub public_ip_addresses: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DisassociateNatGatewayAddressResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateNatGatewayDestinationIpPortTranslationNatRuleRequest {
    pub nat_gateway_id: Option<String>,
    pub destination_ip_port_translation_nat_rules: Option<Vec<DestinationIpPortTranslationNatRule>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CreateNatGatewayDestinationIpPortTranslationNatRuleResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteNatGatewayDestinationIpPortTranslationNatRuleRequest {
    pub nat_gateway_id: Option<String>,
    pub destination_ip_port_translation_nat_rules: Option<Vec<DestinationIpPortTranslationNatRule>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeleteNatGatewayDestinationIpPortTranslationNatRuleResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyNatGatewayDestinationIpPortTranslationNatRuleRequest {
    pub nat_gateway_id: Option<String>,
    /// the rule to replace
    pub source_nat_rule: Option<DestinationIpPortTranslationNatRule>,
    pub destination_nat_rule: Option<DestinationIpPortTranslationNatRule>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModifyNatGatewayDestinationIpPortTranslationNatRuleResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeNatGatewayDestinationIpPortTranslationNatRulesRequest {
    pub nat_gateway_ids: Option<Vec<String>>,
    pub filters: Option<Vec<Filter>>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeNatGatewayDestinationIpPortTranslationNatRulesResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub nat_gateway_destination_ip_port_translation_nat_rule_set: Vec<NatGatewayDestinationIpPortTranslationNatRule>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total_count: u64,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResetNatGatewayConnectionRequest {
    pub nat_gateway_id: Option<String>,
    pub max_concurrent_connection: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResetNatGatewayConnectionResponse {}
