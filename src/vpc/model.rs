//! data types shared by several vpc actions

use serde::{Deserialize, Serialize};

/// resource tag
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Tag {
    pub key: Option<String>,
    pub value: Option<String>,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}

/// query filter, values of one filter are OR-ed, filters are AND-ed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Filter {
    pub name: String,
    pub values: Vec<String>,
}

impl Filter {
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// elastic public ip
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Address {
    pub address_id: Option<String>,
    pub address_name: Option<String>,
    pub address_status: Option<String>,
    pub address_ip: Option<String>,
    pub instance_id: Option<String>,
    pub created_time: Option<String>,
    pub network_interface_id: Option<String>,
    pub private_address_ip: Option<String>,
    pub is_arrears: Option<bool>,
    pub is_blocked: Option<bool>,
    pub is_eip_direct_connection: Option<bool>,
    pub address_type: Option<String>,
    pub cascade_release: Option<bool>,
    pub internet_service_provider: Option<String>,
    pub bandwidth: Option<u64>,
    pub internet_charge_type: Option<String>,
    pub tag_set: Option<Vec<Tag>>,
}

/// prepaid billing of eips
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AddressChargePrepaid {
    /// months
    pub period: Option<u64>,
    pub auto_renew_flag: Option<u64>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Quota {
    pub quota_id: Option<String>,
    pub quota_current: Option<u64>,
    pub quota_limit: Option<u64>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Vpc {
    pub vpc_name: Option<String>,
    pub vpc_id: Option<String>,
    pub cidr_block: Option<String>,
    pub is_default: Option<bool>,
    pub enable_multicast: Option<bool>,
    pub created_time: Option<String>,
    pub dns_server_set: Option<Vec<String>>,
    pub domain_name: Option<String>,
    pub dhcp_options_id: Option<String>,
    pub enable_dhcp: Option<bool>,
    pub ipv6_cidr_block: Option<String>,
    pub tag_set: Option<Vec<Tag>>,
    pub assistant_cidr_set: Option<Vec<AssistantCidr>>,
}

/// secondary cidr of a vpc
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AssistantCidr {
    pub vpc_id: Option<String>,
    pub cidr_block: Option<String>,
    pub assistant_type: Option<u64>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VpcLimit {
    pub limit_type: Option<String>,
    pub limit_value: Option<u64>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Ipv6SubnetCidrBlock {
    pub subnet_id: Option<String>,
    pub ipv6_cidr_block: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Subnet {
    pub vpc_id: Option<String>,
    pub subnet_id: Option<String>,
    pub subnet_name: Option<String>,
    pub cidr_block: Option<String>,
    pub is_default: Option<bool>,
    pub enable_broadcast: Option<bool>,
    pub zone: Option<String>,
    pub route_table_id: Option<String>,
    pub created_time: Option<String>,
    pub available_ip_address_count: Option<u64>,
    pub total_ip_address_count: Option<u64>,
    pub ipv6_cidr_block: Option<String>,
    pub network_acl_id: Option<String>,
    pub is_remote_vpc_snat: Option<bool>,
    pub tag_set: Option<Vec<Tag>>,
}

/// one subnet of a batch creation
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SubnetInput {
    pub cidr_block: Option<String>,
    pub subnet_name: Option<String>,
    pub zone: Option<String>,
    pub route_table_id: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RouteTable {
    pub vpc_id: Option<String>,
    pub route_table_id: Option<String>,
    pub route_table_name: Option<String>,
    pub association_set: Option<Vec<RouteTableAssociation>>,
    pub route_set: Option<Vec<Route>>,
    pub main: Option<bool>,
    pub created_time: Option<String>,
    pub tag_set: Option<Vec<Tag>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RouteTableAssociation {
    pub subnet_id: Option<String>,
    pub route_table_id: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Route {
    pub destination_cidr_block: Option<String>,
    /// `CVM`, `VPN`, `DIRECTCONNECT`, `PEERCONNECTION`, `HAVIP`, `NAT`, `NORMAL_CVM`, `EIP`, `LOCAL_GATEWAY` ...
    pub gateway_type: Option<String>,
    pub gateway_id: Option<String>,
    pub route_id: Option<u64>,
    pub route_description: Option<String>,
    pub enabled: Option<bool>,
    pub route_type: Option<String>,
    pub route_table_id: Option<String>,
    pub destination_ipv6_cidr_block: Option<String>,
    pub route_item_id: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SecurityGroup {
    pub security_group_id: Option<String>,
    pub security_group_name: Option<String>,
    pub security_group_desc: Option<String>,
    pub project_id: Option<String>,
    pub is_default: Option<bool>,
    pub created_time: Option<String>,
    pub update_time: Option<String>,
    pub tag_set: Option<Vec<Tag>>,
}

/// ordered ingress and egress rules of a security group
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SecurityGroupPolicySet {
    /// bumped on every rule change, used for optimistic concurrency
    pub version: Option<String>,
    pub egress: Option<Vec<SecurityGroupPolicy>>,
    pub ingress: Option<Vec<SecurityGroupPolicy>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SecurityGroupPolicy {
    pub policy_index: Option<u64>,
    pub protocol: Option<String>,
    pub port: Option<String>,
    pub cidr_block: Option<String>,
    pub ipv6_cidr_block: Option<String>,
    pub security_group_id: Option<String>,
    /// `ACCEPT` or `DROP`
    pub action: Option<String>,
    pub policy_description: Option<String>,
    pub modify_time: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NatGateway {
    pub nat_gateway_id: Option<String>,
    pub nat_gateway_name: Option<String>,
    pub created_time: Option<String>,
    pub state: Option<String>,
    pub internet_max_bandwidth_out: Option<u64>,
    pub max_concurrent_connection: Option<u64>,
    pub public_ip_address_set: Option<Vec<NatGatewayAddress>>,
    pub network_state: Option<String>,
    pub destination_ip_port_translation_nat_rule_set:
        Option<Vec<DestinationIpPortTranslationNatRule>>,
    pub vpc_id: Option<String>,
    pub zone: Option<String>,
    pub subnet_id: Option<String>,
    pub tag_set: Option<Vec<Tag>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NatGatewayAddress {
    pub address_id: Option<String>,
    pub public_ip_address: Option<String>,
    pub is_blocked: Option<bool>,
}

/// port forwarding rule of a nat gateway
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DestinationIpPortTranslationNatRule {
    pub ip_protocol: Option<String>,
    pub public_ip_address: Option<String>,
    pub public_port: Option<u64>,
    pub private_ip_address: Option<String>,
    pub private_port: Option<u64>,
    pub description: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VpnGateway {
    pub vpn_gateway_id: Option<String>,
    pub vpc_id: Option<String>,
    pub vpn_gateway_name: Option<String>,
    pub r#type: Option<String>,
    pub state: Option<String>,
    pub public_ip_address: Option<String>,
    pub renew_flag: Option<String>,
    pub instance_charge_type: Option<String>,
    pub internet_max_bandwidth_out: Option<u64>,
    pub created_time: Option<String>,
    pub expired_time: Option<String>,
    pub is_address_blocked: Option<bool>,
    pub new_purchase_plan: Option<String>,
    pub restrict_state: Option<String>,
    pub zone: Option<String>,
    pub version: Option<String>,
    pub network_instance_id: Option<String>,
    pub max_connection: Option<u64>,
}

/// prepaid billing of vpn gateways
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InstanceChargePrepaid {
    pub period: Option<u64>,
    pub renew_flag: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CustomerGateway {
    pub customer_gateway_id: Option<String>,
    pub customer_gateway_name: Option<String>,
    pub ip_address: Option<String>,
    pub created_time: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VpnConnection {
    pub vpn_connection_id: Option<String>,
    pub vpn_connection_name: Option<String>,
    pub vpc_id: Option<String>,
    pub vpn_gateway_id: Option<String>,
    pub customer_gateway_id: Option<String>,
    pub pre_share_key: Option<String>,
    pub vpn_proto: Option<String>,
    pub encrypt_proto: Option<String>,
    pub route_type: Option<String>,
    pub created_time: Option<String>,
    pub state: Option<String>,
    pub net_status: Option<String>,
    pub security_policy_database_set: Option<Vec<SecurityPolicyDatabase>>,
}

/// local and remote cidrs tunneled by a vpn connection
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SecurityPolicyDatabase {
    pub local_cidr_block: Option<String>,
    pub remote_cidr_block: Option<Vec<String>>,
}

/// cloud connect network
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Ccn {
    pub ccn_id: Option<String>,
    pub ccn_name: Option<String>,
    pub ccn_description: Option<String>,
    pub instance_count: Option<u64>,
    pub create_time: Option<String>,
    pub state: Option<String>,
    pub qos_level: Option<String>,
    pub instance_charge_type: Option<String>,
    pub bandwidth_limit_type: Option<String>,
    pub tag_set: Option<Vec<Tag>>,
    pub route_priority_flag: Option<bool>,
    pub route_table_count: Option<u64>,
    pub route_table_flag: Option<bool>,
}

/// a network instance to attach to a ccn
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CcnInstance {
    pub instance_id: Option<String>,
    pub instance_region: Option<String>,
    /// `VPC`, `DIRECTCONNECT`, `BMVPC`, `VPNGW` ...
    pub instance_type: Option<String>,
    pub description: Option<String>,
    pub route_table_id: Option<String>,
}

impl CcnInstance {
    pub fn new(
        instance_id: impl Into<String>,
        instance_region: impl Into<String>,
        instance_type: impl Into<String>,
    ) -> Self {
        Self {
            instance_id: Some(instance_id.into()),
            instance_region: Some(instance_region.into()),
            instance_type: Some(instance_type.into()),
            ..Default::default()
        }
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CcnAttachedInstance {
    pub ccn_id: Option<String>,
    pub instance_type: Option<String>,
    pub instance_id: Option<String>,
    pub instance_name: Option<String>,
    pub instance_region: Option<String>,
    pub instance_uin: Option<String>,
    pub cidr_block: Option<Vec<String>>,
    /// `PENDING`, `ACTIVE`, `EXPIRED`, `REJECTED`, `DELETED` ...
    pub state: Option<String>,
    pub attached_time: Option<String>,
    pub ccn_uin: Option<String>,
    pub instance_area: Option<String>,
    pub description: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CcnRoute {
    pub route_id: Option<String>,
    pub destination_cidr_block: Option<String>,
    pub instance_type: Option<String>,
    pub instance_id: Option<String>,
    pub instance_name: Option<String>,
    pub instance_region: Option<String>,
    pub instance_uin: Option<String>,
    pub update_time: Option<String>,
    pub enabled: Option<bool>,
    pub extra_state: Option<String>,
    pub is_bgp: Option<bool>,
    pub route_priority: Option<u64>,
    pub instance_extra_name: Option<String>,
}

/// elastic network interface
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NetworkInterface {
    pub network_interface_id: Option<String>,
    pub network_interface_name: Option<String>,
    pub network_interface_description: Option<String>,
    pub subnet_id: Option<String>,
    pub vpc_id: Option<String>,
    pub group_set: Option<Vec<String>>,
    pub primary: Option<bool>,
    pub mac_address: Option<String>,
    pub state: Option<String>,
    pub private_ip_address_set: Option<Vec<PrivateIpAddressSpecification>>,
    pub attachment: Option<NetworkInterfaceAttachment>,
    pub zone: Option<String>,
    pub created_time: Option<String>,
    pub tag_set: Option<Vec<Tag>>,
    pub eni_type: Option<u64>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PrivateIpAddressSpecification {
    pub private_ip_address: Option<String>,
    pub primary: Option<bool>,
    pub public_ip_address: Option<String>,
    pub address_id: Option<String>,
    pub description: Option<String>,
    pub is_wan_ip_blocked: Option<bool>,
    pub state: Option<String>,
}

impl PrivateIpAddressSpecification {
    pub fn new(private_ip_address: impl Into<String>) -> Self {
        Self {
            private_ip_address: Some(private_ip_address.into()),
            ..Default::default()
        }
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NetworkInterfaceAttachment {
    pub instance_id: Option<String>,
    pub device_index: Option<u64>,
    pub instance_account_id: Option<String>,
    pub attach_time: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BandwidthPackage {
    pub bandwidth_package_id: Option<String>,
    pub network_type: Option<String>,
    pub charge_type: Option<String>,
    pub bandwidth_package_name: Option<String>,
    pub created_time: Option<String>,
    pub status: Option<String>,
    pub resource_set: Option<Vec<Resource>>,
    pub bandwidth: Option<u64>,
}

/// resource bound to a bandwidth package
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Resource {
    pub resource_type: Option<String>,
    pub resource_id: Option<String>,
    pub address_ip: Option<String>,
}

/// highly available virtual ip
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct HaVip {
    pub ha_vip_id: Option<String>,
    pub ha_vip_name: Option<String>,
    pub vip: Option<String>,
    pub vpc_id: Option<String>,
    pub subnet_id: Option<String>,
    pub network_interface_id: Option<String>,
    pub instance_id: Option<String>,
    pub address_ip: Option<String>,
    pub state: Option<String>,
    pub business: Option<String>,
    pub created_time: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AddressTemplate {
    pub address_template_name: Option<String>,
    pub address_template_id: Option<String>,
    pub address_set: Option<Vec<String>>,
    pub created_time: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AddressTemplateGroup {
    pub address_template_group_name: Option<String>,
    pub address_template_group_id: Option<String>,
    pub address_template_id_set: Option<Vec<String>>,
    pub created_time: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ServiceTemplate {
    pub service_template_id: Option<String>,
    pub service_template_name: Option<String>,
    pub service_set: Option<Vec<String>>,
    pub created_time: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FlowLog {
    pub vpc_id: Option<String>,
    pub flow_log_id: Option<String>,
    pub flow_log_name: Option<String>,
    /// `VPC`, `SUBNET`, `NETWORKINTERFACE`, `CCN`, `NAT`, `DCG`
    pub resource_type: Option<String>,
    pub resource_id: Option<String>,
    /// `ACCEPT`, `REJECT` or `ALL`
    pub traffic_type: Option<String>,
    pub cloud_log_id: Option<String>,
    pub cloud_log_state: Option<String>,
    pub flow_log_description: Option<String>,
    pub created_time: Option<String>,
    pub tag_set: Option<Vec<Tag>>,
    pub enable: Option<bool>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VpcPrivateIpAddress {
    pub private_ip_address: Option<String>,
    pub cidr_block: Option<String>,
    /// `EIP`, `CVM`, `CLB` and so on
    pub private_ip_address_type: Option<String>,
    pub created_time: Option<String>,
}

/// conflict between a new destination cidr and existing routes
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RouteConflict {
    pub route_table_id: Option<String>,
    pub destination_cidr_block: Option<String>,
    pub conflict_set: Option<Vec<Route>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SecurityGroupLimitSet {
    pub security_group_limit: Option<u64>,
    pub security_group_policy_limit: Option<u64>,
    pub referred_security_group_limit: Option<u64>,
    pub security_group_instance_limit: Option<u64>,
    pub instance_security_group_limit: Option<u64>,
}

/// security groups referring to a security group in their policies
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReferredSecurityGroup {
    pub security_group_id: Option<String>,
    pub referred_security_group_ids: Option<Vec<String>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NatGatewayDestinationIpPortTranslationNatRule {
    pub ip_protocol: Option<String>,
    pub public_ip_address: Option<String>,
    pub public_port: Option<u64>,
    pub private_ip_address: Option<String>,
    pub private_port: Option<u64>,
    pub description: Option<String>,
    pub nat_gateway_id: Option<String>,
    pub vpc_id: Option<String>,
    pub created_time: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CustomerGatewayVendor {
    pub platform: Option<String>,
    pub software_version: Option<String>,
    pub vendor_name: Option<String>,
}

/// outbound bandwidth limit of a region inside a cloud connect network
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CcnRegionBandwidthLimit {
    pub region: Option<String>,
    /// Mbps
    pub bandwidth_limit: Option<u64>,
    pub is_bm: Option<bool>,
    pub dst_region: Option<String>,
    pub dst_is_bm: Option<bool>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Ipv6Address {
    pub address: Option<String>,
    pub primary: Option<bool>,
    pub address_id: Option<String>,
    pub description: Option<String>,
    pub is_wan_ip_blocked: Option<bool>,
    pub state: Option<String>,
}

impl Ipv6Address {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
            ..Default::default()
        }
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ServiceTemplateGroup {
    pub service_template_group_id: Option<String>,
    pub service_template_group_name: Option<String>,
    pub service_template_id_set: Option<Vec<String>>,
    pub created_time: Option<String>,
}

/// stateless subnet level firewall
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NetworkAcl {
    pub vpc_id: Option<String>,
    pub network_acl_id: Option<String>,
    pub network_acl_name: Option<String>,
    pub created_time: Option<String>,
    pub subnet_set: Option<Vec<Subnet>>,
    pub ingress_entries: Option<Vec<NetworkAclEntry>>,
    pub egress_entries: Option<Vec<NetworkAclEntry>>,
    /// `TRIPLE` or `QUINTUPLE`
    pub network_acl_type: Option<String>,
    pub tag_set: Option<Vec<Tag>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NetworkAclEntry {
    pub modify_time: Option<String>,
    /// `TCP`, `UDP`, `ICMP`, `ICMPv6` or `ALL`
    pub protocol: Option<String>,
    pub port: Option<String>,
    pub cidr_block: Option<String>,
    pub ipv6_cidr_block: Option<String>,
    /// `ACCEPT` or `DROP`
    pub action: Option<String>,
    pub description: Option<String>,
}

/// complete replacement of the entries of a network acl
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NetworkAclEntrySet {
    pub ingress: Option<Vec<NetworkAclEntry>>,
    pub egress: Option<Vec<NetworkAclEntry>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VpcPeeringConnection {
    pub source_vpc_id: Option<String>,
    pub peer_vpc_id: Option<String>,
    pub peering_connection_id: Option<String>,
    pub peering_connection_name: Option<String>,
    pub state: Option<String>,
    pub is_ngw: Option<bool>,
    /// Mbps
    pub bandwidth: Option<u64>,
    pub region: Option<String>,
    pub destination_region: Option<String>,
    pub create_time: Option<String>,
    pub app_id: Option<u64>,
    pub peer_app_id: Option<u64>,
    pub charge_type: Option<String>,
    pub r#type: Option<String>,
    pub tag_set: Option<Vec<Tag>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DirectConnectGateway {
    pub direct_connect_gateway_id: Option<String>,
    pub direct_connect_gateway_name: Option<String>,
    pub vpc_id: Option<String>,
    /// `VPC` or `CCN`
    pub network_type: Option<String>,
    pub network_instance_id: Option<String>,
    /// `NORMAL` or `NAT`
    pub gateway_type: Option<String>,
    pub create_time: Option<String>,
    pub direct_connect_gateway_ip: Option<String>,
    pub ccn_id: Option<String>,
    /// `BGP` or `STATIC`
    pub ccn_route_type: Option<String>,
    pub enable_bgp: Option<bool>,
    pub mode_type: Option<String>,
    pub zone: Option<String>,
}

/// idc route published to a cloud connect network through a direct connect gateway
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DirectConnectGatewayCcnRoute {
    pub route_id: Option<String>,
    pub destination_cidr_block: Option<String>,
    pub as_path: Option<Vec<String>>,
    pub description: Option<String>,
    pub updated_time: Option<String>,
}

impl DirectConnectGatewayCcnRoute {
    pub fn new(destination_cidr_block: impl Into<String>) -> Self {
        Self {
            destination_cidr_block: Some(destination_cidr_block.into()),
            ..Default::default()
        }
    }
}
