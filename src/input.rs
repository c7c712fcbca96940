//! Command line input splitting and dispatch to the mask engine.

use crate::error::Result;
use crate::models::{RangeReport, SubnetReport};
use crate::processing::{derive_range_for, gather_report};

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request<'a> {
    /// Describe a mask on its own.
    Mask(&'a str),
    /// Describe the subnet of `ip` under `mask`.
    Range { ip: &'a str, mask: &'a str },
}

/// Result of evaluating a [`Request`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Subnet(SubnetReport),
    Range(SubnetReport, RangeReport),
}

fn strip_slash(token: &str) -> &str {
    token.strip_prefix('/').unwrap_or(token)
}

impl<'a> Request<'a> {
    /// Interpret one `MASK` or `IP/MASK` argument, or an `IP MASK` pair.
    ///
    /// A leading `/` on a mask is dropped. `IP/MASK` is only recognised when
    /// the part before the first `/` contains a `.`; anything else is passed
    /// to the mask engine whole so it can report why it is not a mask.
    pub fn parse(input: &'a str, mask: Option<&'a str>) -> Request<'a> {
        let input = input.trim();
        if let Some(mask) = mask {
            return Request::Range {
                ip: input,
                mask: strip_slash(mask.trim()),
            };
        }
        if let Some(mask) = input.strip_prefix('/') {
            return Request::Mask(mask);
        }
        match input.split_once('/') {
            Some((ip, mask)) if ip.contains('.') => Request::Range { ip, mask },
            _ => Request::Mask(input),
        }
    }

    /// Run the request through the mask engine and range calculator.
    pub fn evaluate(&self) -> Result<Report> {
        log::debug!("evaluate({self:?})");
        match *self {
            Request::Mask(mask) => Ok(Report::Subnet(gather_report(mask)?)),
            Request::Range { ip, mask } => {
                let (subnet, range) = derive_range_for(ip, mask)?;
                Ok(Report::Range(subnet, range))
            }
        }
    }
}
