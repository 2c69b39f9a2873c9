//! Tests for the IPv4 helpers

use crate::{Ipv4Error, format_ipv4, ipv4_equal, ipv4_from_u32, ipv4_to_u32, parse_ipv4};
use std::net::{IpAddr, Ipv4Addr};

const IP_UINT: &[(&str, u32)] = &[
    ("0.0.0.0", 0),
    ("0.1.2.3", 66051),
    ("0.1.2.30", 66078),
    ("1.1.2.0", 16843264),
    ("1.1.1.1", 16843009),
    ("1.2.3.4", 16909060),
    ("4.3.2.1", 67305985),
    ("8.7.6.5", 134678021),
    ("8.8.8.8", 134744072),
    ("100.200.150.250", 1690867450),
    ("127.0.0.1", 2130706433),
    ("127.255.255.255", 2147483647), // i32::MAX
    ("192.168.1.1", 3232235777),
    ("255.3.2.1", 4278387201),
    ("255.255.255.255", 4294967295),
    ("135.101.67.33", 2271560481), // 0x87654321, every octet differs
];

fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

#[test]
fn test_ipv4_from_u32() {
    for &(addr, num) in IP_UINT {
        let expected: Ipv4Addr = addr.parse().unwrap();
        let found = ipv4_from_u32(num);
        assert_eq!(found, expected);
        assert!(ipv4_equal(IpAddr::V4(expected), IpAddr::V4(found)));
        assert_eq!(format_ipv4(num), addr);
    }
}

#[test]
fn test_ipv4_to_u32() {
    for &(addr, num) in IP_UINT {
        assert_eq!(ipv4_to_u32(ip(addr)), num, "converting {addr}");
        assert_eq!(parse_ipv4(addr).unwrap(), num);
    }
}

#[test]
fn test_ipv4_mapped_ipv6_counts_as_ipv4() {
    assert_eq!(ipv4_to_u32(ip("::ffff:1.2.3.4")), 16909060);
    assert!(ipv4_equal(ip("::ffff:192.168.0.1"), ip("192.168.0.1")));
    assert_eq!(parse_ipv4("::ffff:8.8.8.8").unwrap(), 134744072);
}

#[test]
fn test_ipv4_to_u32_with_v6() {
    // 0 is also a valid address, but there is nothing else to return
    assert_eq!(ipv4_to_u32(ip("2001:db8::68")), 0);
}

#[test]
fn test_ipv4_equal() {
    let cases = [
        ("192.168.1.0", "192.168.1.0", true),
        ("192.168.1.0", "192.168.0.1", false),
        ("192.168.0.1", "192.168.1.0", false),
        ("1.2.3.4", "4.3.2.1", false),
        ("2001:db8::68", "192.168.0.1", false),
        ("192.168.0.1", "2001:db8::68", false),
        // Neither is IPv4, so still false
        ("2001:db8::68", "2001:db8::68", false),
    ];

    for (a, b, expected) in cases {
        assert_eq!(
            ipv4_equal(ip(a), ip(b)),
            expected,
            "expected {a} == {b} to be {expected}"
        );
    }
}

#[test]
fn test_parse_errors() {
    assert_eq!(
        parse_ipv4("not an address"),
        Err(Ipv4Error::Invalid("not an address".to_string()))
    );
    assert_eq!(
        parse_ipv4("256.0.0.1"),
        Err(Ipv4Error::Invalid("256.0.0.1".to_string()))
    );
    assert_eq!(
        parse_ipv4("2001:db8::68"),
        Err(Ipv4Error::NotIpv4("2001:db8::68".to_string()))
    );
}

#[test]
fn test_error_messages() {
    let err = parse_ipv4("2001:db8::68").unwrap_err();
    assert_eq!(err.to_string(), "Not an IPv4 address: 2001:db8::68");

    let err = parse_ipv4("1.2.3").unwrap_err();
    assert_eq!(err.to_string(), "Invalid IP address: 1.2.3");
}

#[test]
fn test_parse_trims_whitespace() {
    assert_eq!(parse_ipv4(" 10.0.0.1\n").unwrap(), 0x0A000001);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn integer_form_round_trips(n in any::<u32>()) {
            let addr = ipv4_from_u32(n);
            prop_assert_eq!(ipv4_to_u32(IpAddr::V4(addr)), n);
            prop_assert_eq!(parse_ipv4(&format_ipv4(n)), Ok(n));
        }

        #[test]
        fn equality_matches_integers(a in any::<u32>(), b in any::<u32>()) {
            let ip_a = IpAddr::V4(ipv4_from_u32(a));
            let ip_b = IpAddr::V4(ipv4_from_u32(b));
            prop_assert_eq!(ipv4_equal(ip_a, ip_b), a == b);
        }
    }
}
