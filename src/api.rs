use std::fmt::Debug;

use serde::{Deserialize, Serialize};

/// tencentcloud api
pub trait Api {
    /// the api request type
    type Request: Serialize + Debug + Default + Sync;

    /// the api response type
    type Response: for<'a> Deserialize<'a> + Debug;

    /// the api version, format is `2017-03-12`
    const VERSION: &'static str;

    /// the api action, for example: the vpc eip allocation is `AllocateAddresses`
    const ACTION: &'static str;

    /// the api service, for example: the vpc eip allocation is `vpc`
    const SERVICE: &'static str;

    /// the api host, for example: the vpc eip allocation is `vpc.tencentcloudapi.com`
    const HOST: &'static str;

    /// the error codes documented for this action, informational only
    const ERROR_CODES: &'static [&'static str] = &[];
}

/// static description of an api action, usable without naming its types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionDescriptor {
    /// the api action name
    pub name: &'static str,

    /// the api version
    pub version: &'static str,

    /// the api service
    pub service: &'static str,

    /// the error codes documented for this action
    pub errors: &'static [&'static str],
}

impl ActionDescriptor {
    /// build the descriptor of `A`
    pub const fn of<A: Api>() -> Self {
        Self {
            name: A::ACTION,
            version: A::VERSION,
            service: A::SERVICE,
            errors: A::ERROR_CODES,
        }
    }

    /// whether `code` is one of the documented error codes of this action
    pub fn documents(&self, code: &str) -> bool {
        self.errors.contains(&code)
    }
}
