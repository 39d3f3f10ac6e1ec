//! Theoretical packet-rate ceiling of a physical Ethernet link carrying
//! minimally framed IPv4/TCP packets.
//!
//! See https://kb.juniper.net/InfoCenter/index?page=content&id=KB14737

pub const ETHERNET_HEADER_BYTES: f64 = 14.0;
pub const ETHERNET_FCS_BYTES: f64 = 4.0;
pub const PHY_PREAMBLE_BYTES: f64 = 8.0;
pub const PHY_INTER_FRAME_GAP_BYTES: f64 = 12.0;
pub const IPV4_HEADER_BYTES: f64 = 20.0;
pub const TCP_HEADER_BYTES: f64 = 20.0;

/// Per-packet wire overhead on a PHY Ethernet link: 98 bytes in total.
pub const WIRE_OVERHEAD_BYTES: f64 = ETHERNET_HEADER_BYTES
    + ETHERNET_FCS_BYTES
    + PHY_PREAMBLE_BYTES
    + PHY_INTER_FRAME_GAP_BYTES
    + IPV4_HEADER_BYTES
    + TCP_HEADER_BYTES;

/// Maximum packet rate in millions of messages per second for the given
/// payload size on a link of `link_speed_gbps`.
pub fn theoretical_mpps(message_size_bytes: f64, link_speed_gbps: f64) -> f64 {
    let link_bytes_per_sec = link_speed_gbps * 1_000_000_000.0 / 8.0;
    link_bytes_per_sec / (message_size_bytes + WIRE_OVERHEAD_BYTES) / 1e6
}

/// Maps a sequence of message sizes to the theoretical Mpps curve.
pub fn theoretical_mpps_curve(
    message_sizes: impl IntoIterator<Item = f64>,
    link_speed_gbps: f64,
) -> Vec<f64> {
    message_sizes
        .into_iter()
        .map(|size| theoretical_mpps(size, link_speed_gbps))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_overhead_should_sum_to_98_bytes() {
        assert_eq!(WIRE_OVERHEAD_BYTES, 98.0);
    }

    #[test]
    fn given_zero_payload_on_10_gbps_should_be_about_12_755_mpps() {
        let mpps = theoretical_mpps(0.0, 10.0);
        assert!((mpps - 12.755102040816327).abs() < 1e-9);
    }

    #[test]
    fn should_be_strictly_decreasing_in_message_size() {
        let sizes = [1.0, 8.0, 64.0, 512.0, 4096.0, 65536.0];
        let curve = theoretical_mpps_curve(sizes, 10.0);
        for pair in curve.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn doubling_link_speed_should_double_mpps() {
        for size in [1.0, 64.0, 1500.0, 65536.0] {
            let base = theoretical_mpps(size, 10.0);
            let doubled = theoretical_mpps(size, 20.0);
            assert!((doubled - 2.0 * base).abs() < 1e-12);
        }
    }
}
