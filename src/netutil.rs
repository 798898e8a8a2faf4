use std::net::{IpAddr, Ipv4Addr, UdpSocket};

/// Best-effort guess at this machine's LAN address, shown at startup so
/// the operator knows what to point the phone client at. Connecting a UDP
/// socket toward a public resolver selects the outbound interface without
/// sending any datagram; any failure falls back to loopback.
pub fn local_ip() -> IpAddr {
    fn probe() -> std::io::Result<IpAddr> {
        let socket = UdpSocket::bind(("0.0.0.0", 0))?;
        socket.connect(("8.8.8.8", 80))?;
        Ok(socket.local_addr()?.ip())
    }

    probe().unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST))
}
