//! vpc api, version `2017-03-12`
//!
//! every action `Xxx` gets a zero sized marker type `Xxx` implementing [`Api`], the request and
//! response types `XxxRequest` / `XxxResponse`, and the methods `xxx` / `xxx_with_context` on
//! [`Client`].

use crate::api::{ActionDescriptor, Api};
use crate::client::Client as CommonClient;
use crate::context::Context;
use crate::credential::Credential;
use crate::error::Error;
use crate::profile::ClientProfile;

pub use self::address::*;
pub use self::bandwidth::*;
pub use self::ccn::*;
pub use self::direct_connect_gateway::*;
pub use self::eni::*;
pub use self::flow_log::*;
pub use self::model::*;
pub use self::nat::*;
pub use self::network::*;
pub use self::network_acl::*;
pub use self::peering::*;
pub use self::route::*;
pub use self::security_group::*;
pub use self::template::*;
pub use self::vpn::*;

mod address;
mod bandwidth;
mod ccn;
mod direct_connect_gateway;
mod eni;
mod flow_log;
pub mod model;
mod nat;
mod network;
mod network_acl;
mod peering;
mod route;
mod security_group;
mod template;
mod vpn;

pub const VERSION: &str = "2017-03-12";
pub const SERVICE: &str = "vpc";
pub const HOST: &str = "vpc.tencentcloudapi.com";

/// vpc api client
#[derive(Debug, Clone)]
pub struct Client {
    inner: CommonClient,
}

impl Client {
    /// create a vpc api client
    pub fn new(
        credential: Credential,
        region: impl Into<String>,
        profile: ClientProfile,
    ) -> Result<Self, Error> {
        Ok(Self {
            inner: CommonClient::new(credential, region, profile)?,
        })
    }

    /// create a vpc api client by `secret_id` and `secret_key` with the default profile
    #[deprecated(note = "use `Client::new` with a `Credential` and `ClientProfile` instead")]
    pub fn new_with_secret_id(
        secret_id: impl Into<String>,
        secret_key: impl Into<String>,
        region: impl Into<String>,
    ) -> Result<Self, Error> {
        Self::new(
            Credential::new(secret_id, secret_key),
            region,
            ClientProfile::default(),
        )
    }

    /// reuse an existing api client
    pub fn from_common(inner: CommonClient) -> Self {
        Self { inner }
    }

    /// the underlying api client
    pub fn common(&self) -> &CommonClient {
        &self.inner
    }

    async fn dispatch<A>(
        &self,
        ctx: &Context,
        request: Option<A::Request>,
    ) -> Result<(A::Response, String), Error>
    where
        A: Api,
    {
        let request = request.unwrap_or_default();

        self.inner.send_with_context::<A>(ctx, &request).await
    }
}

/// find the descriptor of the action named `name`
pub fn action(name: &str) -> Option<&'static ActionDescriptor> {
    ACTIONS.iter().find(|descriptor| descriptor.name == name)
}

macro_rules! actions {
    ($(
        $(#[doc = $doc:literal])*
        $action:ident [$($code:literal),* $(,)?];
    )*) => {
        paste::paste! {
            $(
                #[doc = concat!("the `", stringify!($action), "` action")]
                #[derive(Debug, Clone, Copy)]
                pub struct $action;

                impl Api for $action {
                    type Request = [<$action Request>];
                    type Response = [<$action Response>];

                    const VERSION: &'static str = VERSION;
                    const ACTION: &'static str = stringify!($action);
                    const SERVICE: &'static str = SERVICE;
                    const HOST: &'static str = HOST;
                    const ERROR_CODES: &'static [&'static str] = &[$($code),*];
                }
            )*

            /// every action of the vpc api
            pub const ACTIONS: &[ActionDescriptor] = &[$(ActionDescriptor::of::<$action>()),*];

            impl Client {
                $(
                    $(#[doc = $doc])*
                    ///
                    /// a `None` request is sent as the default request
                    pub async fn [<$action:snake>](
                        &self,
                        request: Option<[<$action Request>]>,
                    ) -> Result<([<$action Response>], String), Error> {
                        self.dispatch::<$action>(&Context::background(), request).await
                    }

                    $(#[doc = $doc])*
                    ///
                    /// the request is aborted once `ctx` is cancelled or its deadline is exceeded
                    pub async fn [<$action:snake _with_context>](
                        &self,
                        ctx: &Context,
                        request: Option<[<$action Request>]>,
                    ) -> Result<([<$action Response>], String), Error> {
                        self.dispatch::<$action>(ctx, request).await
                    }
                )*
            }
        }
    };
}

actions! {
    // elastic public ip

    /// allocate one or more elastic public ips
    AllocateAddresses [
        "AddressQuotaLimitExceeded",
        "AddressQuotaLimitExceeded.DailyAllocate",
        "InvalidAccount.NotSupported",
        "InvalidAddressId.Blocked",
        "InvalidParameterConflict",
        "InvalidParameterValue.AddressIpNotAvailable",
        "InvalidParameterValue.BandwidthPackageNotFound",
        "InvalidParameterValue.InvalidTag",
        "ResourceInsufficient",
    ];
    /// release elastic public ips
    ReleaseAddresses [
        "InvalidAddressId.NotFound",
        "InvalidAddressIdStatus.NotPermit",
        "InvalidParameterValue.AddressIdMalformed",
        "InvalidParameterValue.AddressNotFound",
    ];
    /// query elastic public ips
    DescribeAddresses [
        "InvalidParameter.Coexist",
        "InvalidParameterValue.AddressIdMalformed",
        "InvalidParameterValue.Limit",
    ];
    /// bind an elastic public ip to an instance or network interface
    AssociateAddress [
        "AddressQuotaLimitExceeded",
        "FailedOperation.AddressEniInfoNotFound",
        "InvalidAddressId.Blocked",
        "InvalidAddressId.NotFound",
        "InvalidInstanceId.AlreadyBindEip",
        "InvalidInstanceId.NotFound",
        "InvalidNetworkInterfaceId.NotFound",
        "InvalidParameterConflict",
    ];
    /// unbind an elastic public ip
    DisassociateAddress [
        "InvalidAddressId.NotFound",
        "InvalidAddressIdState.InArrears",
        "InvalidAddressState",
        "InvalidParameterValue.AddressNotFound",
    ];
    /// rename an elastic public ip or switch its direct connection mode
    ModifyAddressAttribute [
        "InvalidAddressId.Blocked",
        "InvalidAddressId.NotFound",
        "InvalidParameterValue.AddressIdMalformed",
    ];
    /// adjust the bandwidth of elastic public ips
    ModifyAddressesBandwidth [
        "InvalidAddressId.NotFound",
        "InvalidParameterValue.BandwidthOutOfRange",
    ];
    /// turn the normal public ip of an instance into an elastic public ip
    TransformAddress [
        "AddressQuotaLimitExceeded",
        "InvalidInstanceId.AlreadyBindEip",
        "InvalidInstanceId.NotFound",
    ];
    /// query the elastic public ip quota
    DescribeAddressQuota [];
    /// change the billing mode of an elastic public ip
    ModifyAddressInternetChargeType [
        "InvalidAddressId.NotFound",
        "InvalidAddressIdState.InArrears",
        "InvalidParameterValue.InternetChargeTypeNotChanged",
        "UnsupportedOperation.AddressStatusNotPermit",
    ];
    /// renew monthly prepaid elastic public ips
    RenewAddresses ["InvalidAddressId.NotFound", "UnsupportedOperation.InvalidAction"];
    /// replace the public ip of a cvm instance
    AdjustPublicAddress [
        "InvalidAddressId.Blocked",
        "InvalidInstanceId.NotFound",
        "UnsupportedOperation.AddressStatusNotPermit",
    ];

    // vpc

    /// create a vpc
    CreateVpc [
        "InvalidParameterValue.Malformed",
        "InvalidParameterValue.SubnetRange",
        "LimitExceeded",
        "ResourceInsufficient",
    ];
    /// delete a vpc
    DeleteVpc ["ResourceInUse", "ResourceNotFound", "UnsupportedOperation"];
    /// query vpcs
    DescribeVpcs [
        "InvalidParameter.Coexist",
        "InvalidParameterValue.Malformed",
        "ResourceNotFound",
    ];
    /// modify the name, dns servers or domain of a vpc
    ModifyVpcAttribute [
        "InvalidParameterValue.Duplicate",
        "InvalidParameterValue.Malformed",
        "ResourceNotFound",
    ];
    /// query vpc quotas
    DescribeVpcLimits [];
    /// assign an ipv6 cidr block to a vpc
    AssignIpv6CidrBlock [
        "InvalidParameterValue.Malformed",
        "LimitExceeded",
        "ResourceInsufficient.Cidr",
        "ResourceNotFound",
    ];
    /// release the ipv6 cidr block of a vpc
    UnassignIpv6CidrBlock ["ResourceInUse", "ResourceNotFound"];
    /// assign ipv6 cidr blocks to subnets
    AssignIpv6SubnetCidrBlock [
        "InvalidParameterValue.SubnetConflict",
        "InvalidParameterValue.SubnetRange",
        "LimitExceeded",
        "ResourceNotFound",
    ];
    /// remove ipv6 cidrs from subnets
    UnassignIpv6SubnetCidrBlock ["ResourceInUse", "ResourceNotFound"];
    /// add assistant cidrs to a vpc
    CreateAssistantCidr [
        "InvalidParameterValue.Malformed",
        "InvalidParameterValue.SubnetConflict",
        "LimitExceeded",
        "ResourceNotFound",
    ];
    /// remove assistant cidrs from a vpc
    DeleteAssistantCidr ["ResourceInUse", "ResourceNotFound"];
    /// query assistant cidrs
    DescribeAssistantCidr ["InvalidParameterValue.Malformed", "ResourceNotFound"];
    /// replace assistant cidrs of a vpc
    ModifyAssistantCidr [
        "InvalidParameterValue.Malformed",
        "InvalidParameterValue.SubnetConflict",
        "LimitExceeded",
        "ResourceNotFound",
    ];
    /// query private ips used in a vpc
    DescribeVpcPrivateIpAddresses ["InvalidParameterValue.Malformed", "ResourceNotFound"];

    // subnet

    /// create a subnet
    CreateSubnet [
        "InvalidParameterValue.SubnetConflict",
        "InvalidParameterValue.SubnetRange",
        "InvalidParameterValue.Zone",
        "LimitExceeded",
        "ResourceNotFound",
    ];
    /// create subnets in one batch
    CreateSubnets [
        "InvalidParameterValue.SubnetConflict",
        "InvalidParameterValue.SubnetRange",
        "LimitExceeded",
        "ResourceNotFound",
    ];
    /// delete a subnet
    DeleteSubnet ["ResourceInUse", "ResourceNotFound"];
    /// query subnets
    DescribeSubnets [
        "InvalidParameter.Coexist",
        "InvalidParameterValue.Malformed",
        "ResourceNotFound",
    ];
    /// modify the name or broadcast flag of a subnet
    ModifySubnetAttribute ["InvalidParameterValue.Duplicate", "ResourceNotFound"];

    // route table

    /// create a route table
    CreateRouteTable ["LimitExceeded", "ResourceNotFound"];
    /// delete a route table
    DeleteRouteTable ["ResourceInUse", "ResourceNotFound", "UnsupportedOperation"];
    /// query route tables
    DescribeRouteTables [
        "InvalidParameter.Coexist",
        "InvalidParameterValue.Malformed",
        "ResourceNotFound",
    ];
    /// rename a route table
    ModifyRouteTableAttribute ["ResourceNotFound"];
    /// add routes to a route table
    CreateRoutes [
        "InvalidParameterValue.CidrNotInPeerVpc",
        "InvalidParameterValue.Duplicate",
        "LimitExceeded",
        "ResourceNotFound",
        "UnknownParameter.WithGuess",
        "UnsupportedOperation.ConflictWithDockerRoute",
    ];
    /// delete routes from a route table
    DeleteRoutes ["ResourceNotFound", "UnsupportedOperation.SystemRoute"];
    /// replace routes of a route table
    ReplaceRoutes [
        "InvalidParameterValue.Duplicate",
        "ResourceNotFound",
        "UnsupportedOperation.SystemRoute",
    ];
    /// switch the route table associated with a subnet
    ReplaceRouteTableAssociation ["ResourceNotFound", "UnsupportedOperation.VpcMismatch"];
    /// enable routes
    EnableRoutes ["ResourceNotFound", "UnsupportedOperation.ConflictWithDockerRoute"];
    /// disable routes
    DisableRoutes ["ResourceNotFound", "UnsupportedOperation.SystemRoute"];
    /// replace all routes of a route table
    ResetRoutes [
        "InvalidParameterValue.CidrNotInPeerVpc",
        "InvalidParameterValue.VpcCidrConflict",
        "ResourceNotFound",
        "UnsupportedOperation.SystemRoute",
    ];
    /// query routes conflicting with destination cidrs
    DescribeRouteConflicts ["ResourceNotFound"];

    // security group

    /// create a security group
    CreateSecurityGroup ["LimitExceeded", "ResourceNotFound"];
    /// delete a security group
    DeleteSecurityGroup ["ResourceInUse", "ResourceNotFound"];
    /// query security groups
    DescribeSecurityGroups [
        "InvalidParameter.Coexist",
        "InvalidParameterValue.Malformed",
        "ResourceNotFound",
    ];
    /// rename or describe a security group
    ModifySecurityGroupAttribute ["InvalidParameterValue.Duplicate", "ResourceNotFound"];
    /// query the rules of a security group
    DescribeSecurityGroupPolicies ["ResourceNotFound"];
    /// add rules to a security group
    CreateSecurityGroupPolicies [
        "InvalidParameterValue.Duplicate",
        "InvalidParameterValue.Range",
        "LimitExceeded",
        "ResourceNotFound",
        "UnsupportedOperation.VersionMismatch",
    ];
    /// delete rules of a security group
    DeleteSecurityGroupPolicies ["ResourceNotFound", "UnsupportedOperation.VersionMismatch"];
    /// replace one rule of a security group
    ReplaceSecurityGroupPolicy [
        "InvalidParameterValue.Duplicate",
        "ResourceNotFound",
        "UnsupportedOperation.VersionMismatch",
    ];
    /// replace all policies of a security group
    ModifySecurityGroupPolicies [
        "InvalidParameterValue.Malformed",
        "LimitExceeded",
        "ResourceNotFound",
        "UnsupportedOperation.DuplicatePolicy",
    ];
    /// query security group quotas
    DescribeSecurityGroupLimits [];
    /// query security groups referring to the given ones
    DescribeSecurityGroupReferences ["ResourceNotFound"];
    /// copy a security group, optionally to another region
    CloneSecurityGroup ["LimitExceeded", "ResourceNotFound"];

    // nat gateway

    /// create a nat gateway
    CreateNatGateway [
        "AddressQuotaLimitExceeded",
        "InvalidAccount.NotSupported",
        "LimitExceeded.NatGatewayPerVpcLimitExceeded",
        "ResourceInsufficient",
        "ResourceNotFound",
    ];
    /// delete a nat gateway
    DeleteNatGateway ["ResourceNotFound", "UnsupportedOperation.NatGatewayRulePipExists"];
    /// query nat gateways
    DescribeNatGateways ["InvalidParameter.Coexist", "ResourceNotFound"];
    /// modify the name, bandwidth or security groups of a nat gateway
    ModifyNatGatewayAttribute ["ResourceNotFound", "UnsupportedOperation.UnpaidOrderAlreadyExists"];
    /// bind elastic public ips to a nat gateway
    AssociateNatGatewayAddress [
        "AddressQuotaLimitExceeded",
        "LimitExceeded.PublicIpAddressPerNatGatewayLimitExceeded",
        "ResourceNotFound",
        "UnsupportedOperation.PublicIpAddressIsNotBGPIp",
    ];
    /// unbind elastic public ips from a nat gateway
    DisassociateNatGatewayAddress [
        "ResourceNotFound",
        "UnsupportedOperation.PublicIpAddressDisassociate",
    ];
    /// add port forwarding rules to a nat gateway
    CreateNatGatewayDestinationIpPortTranslationNatRule [
        "InvalidParameterValue.Duplicate",
        "LimitExceeded",
        "ResourceNotFound",
    ];
    /// delete port forwarding rules of a nat gateway
    DeleteNatGatewayDestinationIpPortTranslationNatRule ["ResourceNotFound"];
    /// replace a port forwarding rule of a nat gateway
    ModifyNatGatewayDestinationIpPortTranslationNatRule [
        "InvalidParameterValue.NatGatewayDnatRuleExisted",
        "InvalidParameterValue.NatGatewayDnatRuleNotExists",
        "ResourceNotFound",
    ];
    /// query port forwarding rules of nat gateways
    DescribeNatGatewayDestinationIpPortTranslationNatRules ["InvalidParameter.Coexist", "ResourceNotFound"];
    /// change the concurrent connection limit of a nat gateway
    ResetNatGatewayConnection ["ResourceInUse", "ResourceNotFound", "UnsupportedOperation.UnpaidOrderAlreadyExists"];

    // vpn

    /// create a vpn gateway
    CreateVpnGateway [
        "InvalidParameterValue.VpnConnBandwidthOverMismatch",
        "LimitExceeded",
        "ResourceInsufficient",
        "ResourceNotFound",
    ];
    /// delete a vpn gateway
    DeleteVpnGateway ["ResourceInUse", "ResourceNotFound", "UnsupportedOperation.InvalidState"];
    /// query vpn gateways
    DescribeVpnGateways ["InvalidParameter.Coexist", "ResourceNotFound"];
    /// create a customer gateway
    CreateCustomerGateway ["InvalidParameterValue.Duplicate", "LimitExceeded"];
    /// delete a customer gateway
    DeleteCustomerGateway ["ResourceInUse", "ResourceNotFound"];
    /// query customer gateways
    DescribeCustomerGateways ["InvalidParameter.Coexist", "ResourceNotFound"];
    /// create a vpn connection between a vpn gateway and a customer gateway
    CreateVpnConnection [
        "InvalidParameterValue.Duplicate",
        "InvalidParameterValue.VpnConnCidrConflict",
        "LimitExceeded",
        "ResourceNotFound",
        "UnsupportedOperation.InvalidState",
    ];
    /// delete a vpn connection
    DeleteVpnConnection ["ResourceNotFound", "UnsupportedOperation.DelDefaultRoute"];
    /// query vpn connections
    DescribeVpnConnections ["InvalidParameter.Coexist", "ResourceNotFound"];
    /// renegotiate the tunnel of a vpn connection
    ResetVpnConnection ["ResourceNotFound"];
    /// rename a vpn gateway or change its billing mode
    ModifyVpnGatewayAttribute ["InvalidParameterValue.Duplicate", "ResourceNotFound"];
    /// change the bandwidth limit of a vpn gateway
    ResetVpnGatewayInternetMaxBandwidth ["InvalidParameterValue.VpnGatewayBandwidthLimit", "ResourceNotFound"];
    /// rename a customer gateway
    ModifyCustomerGatewayAttribute ["ResourceNotFound"];
    /// query supported customer gateway vendors
    DescribeCustomerGatewayVendors [];
    /// download the device configuration of a vpn connection
    DownloadCustomerGatewayConfiguration ["ResourceNotFound"];
    /// modify a vpn connection
    ModifyVpnConnectionAttribute [
        "InvalidParameterValue.VpnConnCidrConflict",
        "ResourceNotFound",
        "UnsupportedOperation.InvalidState",
    ];

    // ccn

    /// create a cloud connect network
    CreateCcn ["LimitExceeded", "UnsupportedOperation.UserAndCcnChargeTypeNotMatch"];
    /// delete a cloud connect network
    DeleteCcn ["ResourceInUse", "ResourceNotFound", "UnsupportedOperation.BandwidthNotExpired"];
    /// query cloud connect networks
    DescribeCcns ["InvalidParameter.Coexist", "ResourceNotFound"];
    /// rename or describe a cloud connect network
    ModifyCcnAttribute ["ResourceNotFound"];
    /// attach network instances to a cloud connect network
    AttachCcnInstances [
        "InvalidParameterValue.CcnAttachBmvpc",
        "LimitExceeded",
        "ResourceNotFound",
        "UnsupportedOperation.CcnAttached",
        "UnsupportedOperation.InstanceAndRtbNotMatch",
        "UnsupportedOperation.IsNotFinanceAccount",
    ];
    /// detach network instances from a cloud connect network
    DetachCcnInstances ["ResourceNotFound", "UnsupportedOperation.CcnNotAttached"];
    /// accept cross account attachment requests to a cloud connect network
    AcceptAttachCcnInstances [
        "ResourceNotFound",
        "UnsupportedOperation.CcnNotAttached",
        "UnsupportedOperation.InvalidInstanceState",
        "UnsupportedOperation.IsNotFinanceAccount",
        "UnsupportedOperation.NotPendingCcnInstance",
        "UnsupportedOperation.UnableCrossFinance",
    ];
    /// reject cross account attachment requests to a cloud connect network
    RejectAttachCcnInstances [
        "ResourceNotFound",
        "UnsupportedOperation.CcnNotAttached",
        "UnsupportedOperation.NotPendingCcnInstance",
    ];
    /// query instances attached to cloud connect networks
    DescribeCcnAttachedInstances ["InvalidParameter.Coexist", "ResourceNotFound"];
    /// query routes of a cloud connect network
    DescribeCcnRoutes ["InvalidParameter.Coexist", "ResourceNotFound"];
    /// enable routes of a cloud connect network
    EnableCcnRoutes ["ResourceNotFound", "UnsupportedOperation.EcmpWithCcnRoute"];
    /// disable routes of a cloud connect network
    DisableCcnRoutes ["ResourceNotFound"];
    /// re-apply for the attachment of instances to a cloud connect network
    ResetAttachCcnInstances ["ResourceNotFound", "UnsupportedOperation.NotPendingCcnInstance"];
    /// query region bandwidth limits of a cloud connect network
    DescribeCcnRegionBandwidthLimits ["ResourceNotFound"];
    /// set region bandwidth limits of a cloud connect network
    SetCcnRegionBandwidthLimits [
        "ResourceNotFound",
        "UnsupportedOperation.NotPostpaidCcnOperation",
    ];

    // network interface

    /// create an elastic network interface
    CreateNetworkInterface [
        "LimitExceeded",
        "ResourceInsufficient",
        "ResourceNotFound",
        "UnsupportedOperation.ResourceMismatch",
    ];
    /// delete an elastic network interface
    DeleteNetworkInterface ["ResourceInUse", "ResourceNotFound", "UnsupportedOperation.MutexOperationTaskRunning"];
    /// query elastic network interfaces
    DescribeNetworkInterfaces ["InvalidParameter.Coexist", "ResourceNotFound"];
    /// attach an elastic network interface to a cvm instance
    AttachNetworkInterface [
        "LimitExceeded",
        "ResourceNotFound",
        "UnsupportedOperation.AttachmentAlreadyExists",
        "UnsupportedOperation.UnsupportedInstanceFamily",
    ];
    /// detach an elastic network interface from a cvm instance
    DetachNetworkInterface ["ResourceNotFound", "UnsupportedOperation.AttachmentNotFound"];
    /// assign private ips to an elastic network interface
    AssignPrivateIpAddresses [
        "InvalidParameterValue.Reserved",
        "LimitExceeded",
        "ResourceInsufficient",
        "ResourceNotFound",
    ];
    /// release private ips of an elastic network interface
    UnassignPrivateIpAddresses ["ResourceNotFound", "UnsupportedOperation.PrimaryIp"];
    /// modify an elastic network interface
    ModifyNetworkInterfaceAttribute ["LimitExceeded", "ResourceNotFound"];
    /// move an elastic network interface to another cvm instance
    MigrateNetworkInterface [
        "LimitExceeded",
        "ResourceNotFound",
        "UnsupportedOperation.AttachmentAlreadyExists",
    ];
    /// move a private ip to another elastic network interface
    MigratePrivateIpAddress ["ResourceNotFound", "UnsupportedOperation.PrimaryIp"];
    /// modify private ips of an elastic network interface
    ModifyPrivateIpAddressesAttribute ["ResourceNotFound"];
    /// assign ipv6 addresses to an elastic network interface
    AssignIpv6Addresses ["LimitExceeded", "ResourceInsufficient", "ResourceNotFound"];
    /// release ipv6 addresses of an elastic network interface
    UnassignIpv6Addresses ["ResourceNotFound", "UnsupportedOperation.AddressIpInArrear"];

    // bandwidth package

    /// create a bandwidth package
    CreateBandwidthPackage ["InvalidParameterValue.Range", "LimitExceeded"];
    /// delete a bandwidth package
    DeleteBandwidthPackage ["InvalidParameterValue.BandwidthPackageInUse", "InvalidParameterValue.BandwidthPackageNotFound"];
    /// query bandwidth packages
    DescribeBandwidthPackages ["InvalidParameter.Coexist", "InvalidParameterValue.BandwidthPackageNotFound"];
    /// add resources to a bandwidth package
    AddBandwidthPackageResources [
        "InvalidParameterValue.BandwidthPackageNotFound",
        "InvalidParameterValue.ResourceAlreadyExisted",
        "UnsupportedOperation.InvalidResourceProtocol",
    ];
    /// remove resources from a bandwidth package
    RemoveBandwidthPackageResources [
        "InvalidParameterValue.BandwidthPackageNotFound",
        "InvalidParameterValue.ResourceNotFound",
    ];
    /// rename a bandwidth package or change its billing mode
    ModifyBandwidthPackageAttribute ["InvalidParameterValue.BandwidthPackageNotFound"];
    /// query bandwidth package quotas
    DescribeBandwidthPackageQuota [];
    /// query resources of a bandwidth package
    DescribeBandwidthPackageResources ["InvalidParameterValue.BandwidthPackageNotFound"];

    // high availability vip

    /// create a high availability vip
    CreateHaVip ["InvalidParameterValue.Reserved", "LimitExceeded", "ResourceNotFound"];
    /// delete a high availability vip
    DeleteHaVip ["ResourceInUse", "ResourceNotFound"];
    /// query high availability vips
    DescribeHaVips ["InvalidParameter.Coexist", "ResourceNotFound"];
    /// bind an elastic public ip to a high availability vip
    HaVipAssociateAddressIp ["InvalidAddressId.NotFound", "ResourceNotFound", "UnsupportedOperation.BindEIP"];
    /// unbind the elastic public ip of a high availability vip
    HaVipDisassociateAddressIp ["ResourceNotFound", "UnsupportedOperation.UnbindEIP"];
    /// rename a high availability vip
    ModifyHaVipAttribute ["ResourceNotFound"];

    // template

    /// create an ip address template
    CreateAddressTemplate ["InvalidParameterValue.Malformed", "LimitExceeded"];
    /// delete an ip address template
    DeleteAddressTemplate ["ResourceInUse", "ResourceNotFound"];
    /// query ip address templates
    DescribeAddressTemplates ["InvalidParameterValue.Malformed"];
    /// create an ip address template group
    CreateAddressTemplateGroup ["LimitExceeded", "ResourceNotFound"];
    /// query ip address template groups
    DescribeAddressTemplateGroups ["InvalidParameterValue.Malformed"];
    /// create a protocol port template
    CreateServiceTemplate ["InvalidParameterValue.Malformed", "LimitExceeded"];
    /// query protocol port templates
    DescribeServiceTemplates ["InvalidParameterValue.Malformed"];
    /// modify an ip address template
    ModifyAddressTemplateAttribute ["InvalidParameterValue.Malformed", "ResourceNotFound"];
    /// delete an ip address template group
    DeleteAddressTemplateGroup ["ResourceInUse", "ResourceNotFound"];
    /// modify an ip address template group
    ModifyAddressTemplateGroupAttribute ["LimitExceeded", "ResourceNotFound"];
    /// delete a protocol port template
    DeleteServiceTemplate ["ResourceInUse", "ResourceNotFound"];
    /// modify a protocol port template
    ModifyServiceTemplateAttribute ["InvalidParameterValue.Malformed", "ResourceNotFound"];
    /// create a protocol port template group
    CreateServiceTemplateGroup ["LimitExceeded", "ResourceNotFound"];
    /// delete a protocol port template group
    DeleteServiceTemplateGroup ["ResourceInUse", "ResourceNotFound"];
    /// query protocol port template groups
    DescribeServiceTemplateGroups ["InvalidParameterValue.Malformed"];
    /// modify a protocol port template group
    ModifyServiceTemplateGroupAttribute ["LimitExceeded", "ResourceNotFound"];

    // flow log

    /// create a flow log
    CreateFlowLog ["LimitExceeded", "ResourceNotFound", "UnsupportedOperation.FlowLogInstanceExisted"];
    /// delete a flow log
    DeleteFlowLog ["ResourceNotFound"];
    /// query flow logs
    DescribeFlowLogs ["InvalidParameterValue.Malformed"];
    /// query one flow log
    DescribeFlowLog ["ResourceNotFound"];
    /// rename a flow log or change its description
    ModifyFlowLogAttribute ["ResourceNotFound"];

    // network acl

    /// create a network acl
    CreateNetworkAcl ["LimitExceeded", "ResourceNotFound"];
    /// delete a network acl
    DeleteNetworkAcl ["ResourceInUse", "ResourceNotFound"];
    /// query network acls
    DescribeNetworkAcls ["InvalidParameter.Coexist", "ResourceNotFound"];
    /// rename a network acl
    ModifyNetworkAclAttribute ["ResourceNotFound"];
    /// replace the ingress or egress entries of a network acl
    ModifyNetworkAclEntries ["InvalidParameterValue.Malformed", "LimitExceeded", "ResourceNotFound"];
    /// bind a network acl to subnets
    AssociateNetworkAclSubnets ["LimitExceeded", "ResourceNotFound", "UnsupportedOperation.VpcMismatch"];
    /// unbind a network acl from subnets
    DisassociateNetworkAclSubnets ["ResourceNotFound"];

    // peering connection

    /// request a peering connection between two vpcs
    CreateVpcPeeringConnection [
        "InvalidParameterValue.VpcCidrConflict",
        "LimitExceeded",
        "ResourceNotFound",
        "UnsupportedOperation.VpcPeerAlreadyExist",
    ];
    /// delete a peering connection
    DeleteVpcPeeringConnection ["ResourceNotFound", "UnsupportedOperation.VpcPeerInvalidStateChange"];
    /// query peering connections
    DescribeVpcPeeringConnections ["InvalidParameter.Coexist", "ResourceNotFound"];
    /// rename a peering connection or change its bandwidth
    ModifyVpcPeeringConnection ["ResourceNotFound", "UnsupportedOperation.VpcPeerInvalidStateChange"];
    /// accept a peering connection request
    AcceptVpcPeeringConnection [
        "InvalidParameterValue.VpcCidrConflict",
        "ResourceNotFound",
        "UnsupportedOperation.VpcPeerInvalidStateChange",
    ];
    /// reject a peering connection request
    RejectVpcPeeringConnection ["ResourceNotFound", "UnsupportedOperation.VpcPeerInvalidStateChange"];

    // direct connect gateway

    /// create a direct connect gateway
    CreateDirectConnectGateway ["LimitExceeded", "ResourceNotFound", "UnsupportedOperation.CcnRouteTableNotExist"];
    /// delete a direct connect gateway
    DeleteDirectConnectGateway ["ResourceInUse", "ResourceNotFound"];
    /// query direct connect gateways
    DescribeDirectConnectGateways ["InvalidParameter.Coexist", "ResourceNotFound"];
    /// modify a direct connect gateway
    ModifyDirectConnectGatewayAttribute ["ResourceNotFound", "UnsupportedOperation.DirectConnectGatewayIsUpdatingCommunity"];
    /// publish idc routes of a direct connect gateway to its cloud connect network
    CreateDirectConnectGatewayCcnRoutes ["InvalidParameterValue.Duplicate", "ResourceNotFound"];
    /// withdraw idc routes of a direct connect gateway
    DeleteDirectConnectGatewayCcnRoutes ["ResourceNotFound"];
    /// query idc routes of a direct connect gateway
    DescribeDirectConnectGatewayCcnRoutes ["ResourceNotFound"];
    /// replace idc routes of a direct connect gateway
    ReplaceDirectConnectGatewayCcnRoutes ["InvalidParameterValue.Duplicate", "ResourceNotFound"];

    // task

    /// query the result of an async task
    DescribeTaskResult ["InvalidParameter", "ResourceNotFound"];
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn action_names_are_unique() {
        let names = ACTIONS
            .iter()
            .map(|descriptor| descriptor.name)
            .collect::<HashSet<_>>();

        assert_eq!(names.len(), ACTIONS.len());
    }

    #[test]
    fn every_action_shares_service_and_version() {
        for descriptor in ACTIONS {
            assert_eq!(descriptor.version, "2017-03-12", "{}", descriptor.name);
            assert_eq!(descriptor.service, "vpc", "{}", descriptor.name);
        }
    }

    #[test]
    fn lookup_action() {
        let descriptor = action("AllocateAddresses").unwrap();

        assert_eq!(descriptor, &ActionDescriptor::of::<AllocateAddresses>());
        assert!(descriptor.documents("AddressQuotaLimitExceeded"));
        assert!(!descriptor.documents("ResourceInUse"));
        assert!(action("AllocateAddress").is_none());
    }

    #[test]
    fn marker_constants() {
        assert_eq!(AcceptAttachCcnInstances::ACTION, "AcceptAttachCcnInstances");
        assert_eq!(AcceptAttachCcnInstances::VERSION, VERSION);
        assert_eq!(AcceptAttachCcnInstances::SERVICE, SERVICE);
        assert_eq!(AcceptAttachCcnInstances::HOST, HOST);
        assert_eq!(DescribeAddressQuota::ERROR_CODES, &[] as &[&str]);
    }

    #[test]
    fn default_request_is_empty_object() {
        let payload = serde_json::to_value(AcceptAttachCcnInstancesRequest::default()).unwrap();

        assert_eq!(payload, serde_json::json!({}));
    }

    #[test]
    fn request_uses_pascal_case() {
        let request = AllocateAddressesRequest {
            address_count: Some(2),
            applicable_for_clb: Some(true),
            tags: Some(vec![Tag::new("env", "prod")]),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(request).unwrap(),
            serde_json::json!({
                "AddressCount": 2,
                "ApplicableForCLB": true,
                "Tags": [{"Key": "env", "Value": "prod"}],
            })
        );
    }

    #[test]
    fn network_acl_entries_request() {
        let request = ModifyNetworkAclEntriesRequest {
            network_acl_id: Some("acl-12345678".into()),
            network_acl_entry_set: Some(NetworkAclEntrySet {
                ingress: Some(vec![NetworkAclEntry {
                    protocol: Some("TCP".into()),
                    port: Some("80".into()),
                    cidr_block: Some("0.0.0.0/0".into()),
                    action: Some("ACCEPT".into()),
                    ..Default::default()
                }]),
                egress: None,
            }),
        };

        assert_eq!(
            serde_json::to_value(request).unwrap(),
            serde_json::json!({
                "NetworkAclId": "acl-12345678",
                "NetworkAclEntrySet": {
                    "Ingress": [{"Protocol": "TCP", "Port": "80", "CidrBlock": "0.0.0.0/0", "Action": "ACCEPT"}],
                },
            })
        );
    }

    #[test]
    fn response_fields_default_when_missing() {
        let response: DescribeVpcsResponse = serde_json::from_value(serde_json::json!({
            "VpcSet": [{"VpcId": "vpc-1", "CidrBlock": "10.0.0.0/16", "Unknown": 1}],
        }))
        .unwrap();

        assert_eq!(response.total_count, 0);
        assert_eq!(response.vpc_set[0].vpc_id.as_deref(), Some("vpc-1"));
        assert!(response.vpc_set[0].tag_set.is_none());
    }

    #[test]
    fn null_response_fields_decode_as_default() {
        let response: DescribeFlowLogsResponse =
            serde_json::from_value(serde_json::json!({"FlowLog": null, "TotalNum": null})).unwrap();

        assert!(response.flow_log.is_empty());
        assert_eq!(response.total_num, 0);

        let response: AllocateAddressesResponse =
            serde_json::from_value(serde_json::json!({"AddressSet": null, "TaskId": null})).unwrap();

        assert_eq!(response, AllocateAddressesResponse::default());
    }
}
