//! elastic network interface actions

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use super::model::{Filter, Ipv6Address, NetworkInterface, PrivateIpAddressSpecification, Tag};

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateNetworkInterfaceRequest {
    pub vpc_id: Option<String>,
    pub network_interface_name: Option<String>,
    pub subnet_id: Option<String>,
    pub network_interface_description: Option<String>,
    /// number of private ips allocated automatically
    pub secondary_private_ip_address_count: Option<u64>,
    pub security_group_ids: Option<Vec<String>>,
    pub private_ip_addresses: Option<Vec<PrivateIpAddressSpecification>>,
    pub tags: Option<Vec<Tag>>,
    pub trunking_flag: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateNetworkInterfaceResponse {
    pub network_interface: Option<NetworkInterface>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteNetworkInterfaceRequest {
    pub network_interface_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeleteNetworkInterfaceResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeNetworkInterfacesRequest {
    pub network_interface_ids: Option<Vec<String>>,
    pub filters: Option<Vec<Filter>>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeNetworkInterfacesResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub network_interface_set: Vec<NetworkInterface>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total_count: u64,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttachNetworkInterfaceRequest {
    pub network_interface_id: Option<String>,
    pub instance_id: Option<String>,
    pub attach_type: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AttachNetworkInterfaceResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetachNetworkInterfaceRequest {
    pub network_interface_id: Option<String>,
    pub instance_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DetachNetworkInterfaceResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssignPrivateIpAddressesRequest {
    pub network_interface_id: Option<String>,
    /// exclusive with `secondary_private_ip_address_count`
    pub private_ip_addresses: Option<Vec<PrivateIpAddressSpecification>>,
    pub secondary_private_ip_address_count: Option<u64>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AssignPrivateIpAddressesResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub private_ip_address_set: Vec<PrivateIpAddressSpecification>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnassignPrivateIpAddressesRequest {
    pub network_interface_id: Option<String>,
    pub private_ip_addresses: Option<Vec<PrivateIpAddressSpecification>>,
    pub instance_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UnassignPrivateIpAddressesResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyNetworkInterfaceAttributeRequest {
    pub network_interface_id: Option<String>,
    pub network_interface_name: Option<String>,
    pub network_interface_description: Option<String>,
    pub security_group_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModifyNetworkInterfaceAttributeResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MigrateNetworkInterfaceRequest {
    pub network_interface_id: Option<String>,
    pub source_instance_id: Option<String>,
    pub destination_instance_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MigrateNetworkInterfaceResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MigratePrivateIpAddressRequest {
    pub source_network_interface_id: Option<String>,
    pub destination_network_interface_id: Option<String>,
    pub private_ip_address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MigratePrivateIpAddressResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyPrivateIpAddressesAttributeRequest {
    pub network_interface_id: Option<String>,
    pub private_ip_addresses: Option<Vec<PrivateIpAddressSpecification>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModifyPrivateIpAddressesAttributeResponse {}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssignIpv6AddressesRequest {
    pub network_interface_id: Option<String>,
    pub ipv6_addresses: Option<Vec<Ipv6Address>>,
    pub ipv6_address_count: Option<u64>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AssignIpv6AddressesResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub ipv6_address_set: Vec<Ipv6Address>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnassignIpv6AddressesRequest {
    pub network_interface_id: Option<String>,
    pub ipv6_addresses: Option<Vec<Ipv6Address>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UnassignIpv6AddressesResponse {}
