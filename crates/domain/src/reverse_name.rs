use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

const IPV4_REVERSE_SUFFIX: &str = ".in-addr.arpa";
const IPV6_REVERSE_SUFFIX: &str = ".ip6.arpa";

/// Extracts the address from a reverse lookup name such as
/// `5.0.0.10.in-addr.arpa` or the 32-nibble `ip6.arpa` form.
///
/// Returns `None` for anything that does not name exactly one address.
pub fn parse_reverse_name(name: &str) -> Option<IpAddr> {
    let name = name.strip_suffix('.').unwrap_or(name).to_ascii_lowercase();

    if let Some(prefix) = name.strip_suffix(IPV4_REVERSE_SUFFIX) {
        return parse_ipv4_labels(prefix).map(IpAddr::V4);
    }
    if let Some(prefix) = name.strip_suffix(IPV6_REVERSE_SUFFIX) {
        return parse_ipv6_nibbles(prefix).map(IpAddr::V6);
    }
    None
}

/// Builds the reverse lookup name for an address, without trailing dot.
pub fn reverse_name(ip: IpAddr) -> String {
    match ip {
        IpAddr::V4(v4) => {
            let [a, b, c, d] = v4.octets();
            format!("{}.{}.{}.{}{}", d, c, b, a, IPV4_REVERSE_SUFFIX)
        }
        IpAddr::V6(v6) => {
            let mut name = String::with_capacity(72);
            for byte in v6.octets().iter().rev() {
                name.push_str(&format!("{:x}.{:x}.", byte & 0x0F, byte >> 4));
            }
            name.push_str(&IPV6_REVERSE_SUFFIX[1..]);
            name
        }
    }
}

fn parse_ipv4_labels(prefix: &str) -> Option<Ipv4Addr> {
    let mut octets = [0u8; 4];
    let mut count = 0;

    for label in prefix.split('.') {
        if count == 4 || label.is_empty() || label.len() > 3 {
            return None;
        }
        if !label.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        // "010" is not the canonical spelling of 10.
        if label.len() > 1 && label.starts_with('0') {
            return None;
        }
        octets[3 - count] = label.parse().ok()?;
        count += 1;
    }

    if count != 4 {
        return None;
    }
    Some(Ipv4Addr::from(octets))
}

fn parse_ipv6_nibbles(prefix: &str) -> Option<Ipv6Addr> {
    let mut value: u128 = 0;
    let mut count = 0;

    // Nibbles are listed least significant first.
    for label in prefix.split('.') {
        if count == 32 || label.len() != 1 {
            return None;
        }
        let nibble = u8::from_str_radix(label, 16).ok()?;
        value |= u128::from(nibble) << (4 * count);
        count += 1;
    }

    if count != 32 {
        return None;
    }
    Some(Ipv6Addr::from(value))
}
