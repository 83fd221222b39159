//! Network settings as reported by the daemon.
//!
//! These are observation records: they exist to decode daemon responses and
//! are never sent upstream. Every field tolerates absence so that partially
//! populated responses from older daemons still decode.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Port-to-binding mapping, keyed by `"port/proto"` (e.g. `"80/tcp"`).
///
/// The daemon reports exposed-but-unbound ports with a `null` value.
pub type PortMap = HashMap<String, Option<Vec<PortBinding>>>;

/// A container's observed network configuration at a point in time.
///
/// Constructed by decoding a daemon response and immutable thereafter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkSettings {
    /// Primary IPv4 address.
    #[serde(rename = "IPAddress", default)]
    pub ip_address: String,

    /// Mask length of the primary IPv4 address.
    #[serde(rename = "IPPrefixLen", default)]
    pub ip_prefix_len: i64,

    /// Gateway address.
    #[serde(rename = "Gateway", default)]
    pub gateway: String,

    /// Name of the bridge the container is attached to.
    #[serde(rename = "Bridge", default)]
    pub bridge: String,

    /// Host bindings for the container's ports.
    #[serde(rename = "Ports", default)]
    pub ports: PortMap,

    /// Identifier of the network sandbox.
    #[serde(rename = "SandboxID", default)]
    pub sandbox_id: String,

    /// Whether hairpin NAT is enabled.
    #[serde(rename = "HairpinMode", default)]
    pub hairpin_mode: bool,

    /// Link-local IPv6 address.
    #[serde(rename = "LinkLocalIPv6Address", default)]
    pub link_local_ipv6_address: String,

    /// Mask length of the link-local IPv6 address.
    #[serde(rename = "LinkLocalIPv6PrefixLen", default)]
    pub link_local_ipv6_prefix_len: i64,

    /// Per-network endpoint settings, keyed by network name.
    #[serde(rename = "Networks", default)]
    pub networks: HashMap<String, EndpointSettings>,

    /// Path to the network sandbox key.
    #[serde(rename = "SandboxKey", default)]
    pub sandbox_key: String,

    /// Secondary IPv4 addresses.
    #[serde(rename = "SecondaryIPAddresses", default)]
    pub secondary_ip_addresses: Vec<Address>,

    /// Secondary IPv6 addresses.
    #[serde(rename = "SecondaryIPv6Addresses", default)]
    pub secondary_ipv6_addresses: Vec<Address>,

    /// Whether the endpoint is anonymous.
    #[serde(rename = "IsAnonymousEndpoint", default)]
    pub is_anonymous_endpoint: bool,
}

/// An IP address with a CIDR-style prefix length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    /// The address, in dotted or colon notation.
    #[serde(rename = "Addr", default)]
    pub addr: String,

    /// Mask length of the address.
    #[serde(rename = "PrefixLen", default)]
    pub prefix_len: i64,
}

/// A single host binding for a container port.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortBinding {
    /// Host IP address the port is bound to.
    #[serde(rename = "HostIp", default)]
    pub host_ip: String,

    /// Host port number, as a string.
    #[serde(rename = "HostPort", default)]
    pub host_port: String,
}

/// Per-network endpoint settings referenced from
/// [`NetworkSettings::networks`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EndpointSettings {
    /// Unique ID of the network.
    #[serde(rename = "NetworkID", default)]
    pub network_id: String,

    /// Unique ID of the service endpoint in the sandbox.
    #[serde(rename = "EndpointID", default)]
    pub endpoint_id: String,

    /// Gateway address for this network.
    #[serde(rename = "Gateway", default)]
    pub gateway: String,

    /// IPv4 address on this network.
    #[serde(rename = "IPAddress", default)]
    pub ip_address: String,

    /// Mask length of the IPv4 address.
    #[serde(rename = "IPPrefixLen", default)]
    pub ip_prefix_len: i64,

    /// IPv6 gateway address.
    #[serde(rename = "IPv6Gateway", default)]
    pub ipv6_gateway: String,

    /// Global IPv6 address.
    #[serde(rename = "GlobalIPv6Address", default)]
    pub global_ipv6_address: String,

    /// Mask length of the global IPv6 address.
    #[serde(rename = "GlobalIPv6PrefixLen", default)]
    pub global_ipv6_prefix_len: i64,

    /// MAC address for the endpoint on this network.
    #[serde(rename = "MacAddress", default)]
    pub mac_address: String,
}
