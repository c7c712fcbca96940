//! Network range derivation for an address inside a subnet.

use super::mask_engine::gather_report;
use crate::error::Result;
use crate::models::{broadcast_addr, cut_addr, parse_ipv4, Netmask, RangeReport, SubnetReport};
use std::net::Ipv4Addr;

/// Validate `ip` and compute its network, broadcast and usable range.
///
/// For /31 and /32 masks both usable endpoints are `None`.
pub fn derive_range(ip: &str, netmask: Netmask) -> Result<RangeReport> {
    let addr = parse_ipv4(ip)?;
    range_for(addr, netmask)
}

/// Range derivation for an already parsed address.
pub fn range_for(addr: Ipv4Addr, netmask: Netmask) -> Result<RangeReport> {
    let network = cut_addr(addr, netmask.cidr())?;
    let broadcast = broadcast_addr(addr, netmask.cidr())?;

    let (first_usable, last_usable) = if netmask.is_degenerate() {
        (None, None)
    } else {
        // host bits are at least 2 wide here, so the last octet cannot wrap
        (
            Some(Ipv4Addr::from(u32::from(network) + 1)),
            Some(Ipv4Addr::from(u32::from(broadcast) - 1)),
        )
    };
    log::debug!(
        "range_for({addr}, /{}) network={network} broadcast={broadcast}",
        netmask.cidr()
    );

    Ok(RangeReport {
        ip_entered: addr,
        network,
        broadcast,
        first_usable,
        last_usable,
    })
}

/// Resolve a mask token and derive the range for `ip` inside it.
pub fn derive_range_for(ip: &str, mask_token: &str) -> Result<(SubnetReport, RangeReport)> {
    let subnet = gather_report(mask_token)?;
    let range = derive_range(ip, subnet.netmask)?;
    Ok((subnet, range))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MaskError;

    fn ip(s: &str) -> Ipv4Addr {
        s.parse().unwrap()
    }

    #[test]
    fn test_derive_range_hex_mask() {
        let (subnet, range) = derive_range_for("192.168.0.113", "0xffffffe0").unwrap();
        assert_eq!(subnet.cidr, 27);
        assert_eq!(subnet.netmask.to_string(), "255.255.255.224");
        assert_eq!(range.ip_entered, ip("192.168.0.113"));
        assert_eq!(range.network, ip("192.168.0.96"));
        assert_eq!(range.broadcast, ip("192.168.0.127"));
        assert_eq!(range.first_usable, Some(ip("192.168.0.97")));
        assert_eq!(range.last_usable, Some(ip("192.168.0.126")));
    }

    #[test]
    fn test_derive_range_wildcard_mask() {
        let (subnet, range) = derive_range_for("192.168.0.169", "0.0.0.127").unwrap();
        assert_eq!(subnet.cidr, 25);
        assert_eq!(subnet.netmask.to_string(), "255.255.255.128");
        assert_eq!(range.network, ip("192.168.0.128"));
        assert_eq!(range.broadcast, ip("192.168.0.255"));
        assert_eq!(range.first_usable, Some(ip("192.168.0.129")));
        assert_eq!(range.last_usable, Some(ip("192.168.0.254")));
    }

    #[test]
    fn test_derive_range_degenerate() {
        for len in [31, 32] {
            let mask = Netmask::from_cidr(len).unwrap();
            for addr in ["10.0.0.0", "10.0.0.1", "255.255.255.255", "0.0.0.0"] {
                let range = derive_range(addr, mask).unwrap();
                assert_eq!(range.first_usable, None, "{addr}/{len}");
                assert_eq!(range.last_usable, None, "{addr}/{len}");
            }
        }
        let range = derive_range("10.0.0.7", Netmask::from_cidr(31).unwrap()).unwrap();
        assert_eq!(range.network, ip("10.0.0.6"));
        assert_eq!(range.broadcast, ip("10.0.0.7"));
    }

    #[test]
    fn test_derive_range_slash_30_and_zero() {
        let range = derive_range("10.1.1.254", Netmask::from_cidr(30).unwrap()).unwrap();
        assert_eq!(range.network, ip("10.1.1.252"));
        assert_eq!(range.first_usable, Some(ip("10.1.1.253")));
        assert_eq!(range.last_usable, Some(ip("10.1.1.254")));
        assert_eq!(range.broadcast, ip("10.1.1.255"));

        let range = derive_range("172.16.5.4", Netmask::from_cidr(0).unwrap()).unwrap();
        assert_eq!(range.network, ip("0.0.0.0"));
        assert_eq!(range.broadcast, ip("255.255.255.255"));
        assert_eq!(range.first_usable, Some(ip("0.0.0.1")));
        assert_eq!(range.last_usable, Some(ip("255.255.255.254")));
    }

    #[test]
    fn test_derive_range_invalid_ip() {
        let mask = Netmask::from_cidr(24).unwrap();
        for bad in ["192.168.0", "192.168.0.256", "192.168.0.1.5", "host", "", "1.2.3.-4"] {
            assert_eq!(
                derive_range(bad, mask).unwrap_err(),
                MaskError::InvalidIpAddress(bad.to_string()),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_derive_range_for_reports_mask_error_first() {
        assert_eq!(
            derive_range_for("bad", "33").unwrap_err(),
            MaskError::InvalidCidr("33".to_string())
        );
    }
}
