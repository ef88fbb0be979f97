//! tencentcloud vpc api client
//!
//! ```no_run
//! use tencentcloud_vpc::vpc::{self, DescribeVpcsRequest, Filter};
//! use tencentcloud_vpc::{ClientProfile, Credential};
//!
//! # async fn example() -> Result<(), tencentcloud_vpc::Error> {
//! let client = vpc::Client::new(Credential::from_env()?, "ap-guangzhou", ClientProfile::default())?;
//!
//! let (response, request_id) = client
//!     .describe_vpcs(Some(DescribeVpcsRequest {
//!         filters: Some(vec![Filter::new("vpc-name", ["default"])]),
//!         ..Default::default()
//!     }))
//!     .await?;
//!
//! println!("{request_id}: {:?}", response.vpc_set);
//! # Ok(())
//! # }
//! ```

pub use self::client::Client;
pub use self::context::Context;
pub use self::credential::Credential;
pub use self::error::Error;
pub use self::profile::{ClientProfile, HttpProfile, Language, RetryPolicy, Scheme};

pub mod api;
pub mod client;
pub mod context;
pub mod credential;
pub mod error;
pub mod profile;
mod tc3_hmac;
pub mod vpc;
