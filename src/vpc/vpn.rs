//! vpn gateway, customer gateway and vpn connection actions

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use super::model::{
    CustomerGateway, CustomerGatewayVendor, Filter, InstanceChargePrepaid, SecurityPolicyDatabase,
    Tag, VpnConnection, VpnGateway,
};

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateVpnGatewayRequest {
    pub vpc_id: Option<String>,
    pub vpn_gateway_name: Option<String>,
    /// Mbps
    pub internet_max_bandwidth_out: Option<u64>,
    /// `PREPAID` or `POSTPAID_BY_HOUR`
    pub instance_charge_type: Option<String>,
    pub instance_charge_prepaid: Option<InstanceChargePrepaid>,
    pub zone: Option<String>,
    /// `IPSEC`, `SSL`, `CCN` ...
    pub r#type: Option<String>,
    pub tags: Option<Vec<Tag>>,
    pub max_connection: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateVpnGatewayResponse {
    pub vpn_gateway: Option<VpnGateway>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteVpnGatewayRequest {
    pub vpn_gateway_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeleteVpnGatewayResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeVpnGatewaysRequest {
    pub vpn_gateway_ids: Option<Vec<String>>,
    pub filters: Option<Vec<Filter>>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeVpnGatewaysResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total_count: u64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub vpn_gateway_set: Vec<VpnGateway>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateCustomerGatewayRequest {
    pub customer_gateway_name: Option<String>,
    pub ip_address: Option<String>,
    pub tags: Option<Vec<Tag>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateCustomerGatewayResponse {
    pub customer_gateway: Option<CustomerGateway>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteCustomerGatewayRequest {
    pub customer_gateway_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeleteCustomerGatewayResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeCustomerGatewaysRequest {
    pub customer_gateway_ids: Option<Vec<String>>,
    pub filters: Option<Vec<Filter>>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeCustomerGatewaysResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub customer_gateway_set: Vec<CustomerGateway>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total_count: u64,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateVpnConnectionRequest {
    pub vpn_gateway_id: Option<String>,
    pub customer_gateway_id: Option<String>,
    pub vpn_connection_name: Option<String>,
    pub pre_share_key: Option<String>,
    pub vpc_id: Option<String>,
    pub security_policy_database_set: Option<Vec<SecurityPolicyDatabase>>,
    /// `STATIC`, `StaticRoute` or `Policy`
    pub route_type: Option<String>,
    pub tags: Option<Vec<Tag>>,
    pub enable_health_check: Option<bool>,
    pub health_check_local_ip: Option<String>,
    pub health_check_remote_ip: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateVpnConnectionResponse {
    pub vpn_connection: Option<VpnConnection>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteVpnConnectionRequest {
    pub vpn_gateway_id: Option<String>,
    pub vpn_connection_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeleteVpnConnectionResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeVpnConnectionsRequest {
    pub vpn_connection_ids: Option<Vec<String>>,
    pub filters: Option<Vec<Filter>>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeVpnConnectionsResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total_count: u64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub vpn_connection_set: Vec<VpnConnection>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResetVpnConnectionRequest {
    pub vpn_gateway_id: Option<String>,
    pub vpn_connection_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResetVpnConnectionResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyVpnGatewayAttributeRequest {
    pub vpn_gateway_id: Option<String>,
    pub vpn_gateway_name: Option<String>,
    /// only `POSTPAID_BY_HOUR` to `PREPAID` is supported
    pub instance_charge_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModifyVpnGatewayAttributeResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResetVpnGatewayInternetMaxBandwidthRequest {
    pub vpn_gateway_id: Option<String>,
    pub internet_max_bandwidth_out: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResetVpnGatewayInternetMaxBandwidthResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyCustomerGatewayAttributeRequest {
    pub customer_gateway_id: Option<String>,
    pub customer_gateway_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModifyCustomerGatewayAttributeResponse {}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DescribeCustomerGatewayVendorsRequest {}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeCustomerGatewayVendorsResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub customer_gateway_vendor_set: Vec<CustomerGatewayVendor>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DownloadCustomerGatewayConfigurationRequest {
    pub vpn_gateway_id: Option<String>,
    pub vpn_connection_id: Option<String>,
    pub customer_gateway_vendor: Option<CustomerGatewayVendor>,
    pub interface_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DownloadCustomerGatewayConfigurationResponse {
    pub customer_gateway_configuration: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyVpnConnectionAttributeRequest {
    pub vpn_connection_id: Option<String>,
    pub vpn_connection_name: Option<String>,
    pub pre_share_key: Option<String>,
    pub security_policy_databases: Option<Vec<SecurityPolicyDatabase>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModifyVpnConnectionAttributeResponse {}
