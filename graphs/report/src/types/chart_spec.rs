use super::pattern::SocketPattern;
use super::transport::BenchmarkTransport;
use crate::plotting::chart_kind::ChartKind;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One entry of the fixed chart registry: which pattern/transport pair is
/// plotted and as which chart kind. Constructed once, consumed once.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, new)]
pub struct ChartSpec {
    pub pattern: SocketPattern,
    pub transport: BenchmarkTransport,
    pub kind: ChartKind,
}

impl ChartSpec {
    /// All charts the external harness produces tables for, in the order
    /// they are rendered.
    pub fn all() -> [ChartSpec; 4] {
        [
            ChartSpec::new(
                SocketPattern::PushPull,
                BenchmarkTransport::Tcp,
                ChartKind::Throughput,
            ),
            ChartSpec::new(
                SocketPattern::PushPull,
                BenchmarkTransport::Inproc,
                ChartKind::Throughput,
            ),
            ChartSpec::new(
                SocketPattern::PubSubProxy,
                BenchmarkTransport::Inproc,
                ChartKind::Throughput,
            ),
            ChartSpec::new(
                SocketPattern::ReqRep,
                BenchmarkTransport::Tcp,
                ChartKind::Latency,
            ),
        ]
    }

    pub fn title(&self) -> String {
        format!(
            "ZeroMQ {} socket {}, {} transport",
            self.pattern, self.kind, self.transport
        )
    }

    pub fn file_name(&self) -> String {
        format!(
            "{}_{}_{}_results.csv",
            self.pattern.file_stem(),
            self.transport.file_stem(),
            self.kind.file_stem()
        )
    }

    pub fn input_path(&self, result_directory: &Path) -> PathBuf {
        result_directory.join(self.file_name())
    }

    /// Throughput over a real TCP link is capped by the physical link speed,
    /// so those charts pin the secondary axis to the configured ceiling.
    pub fn is_rate_limited(&self) -> bool {
        self.transport == BenchmarkTransport::Tcp && self.kind == ChartKind::Throughput
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_derive_results_file_names() {
        let names: Vec<String> = ChartSpec::all().iter().map(ChartSpec::file_name).collect();
        assert_eq!(
            names,
            [
                "pushpull_tcp_thr_results.csv",
                "pushpull_inproc_thr_results.csv",
                "pubsubproxy_inproc_thr_results.csv",
                "reqrep_tcp_lat_results.csv",
            ]
        );
    }

    #[test]
    fn should_derive_chart_titles() {
        let spec = ChartSpec::new(
            SocketPattern::PushPull,
            BenchmarkTransport::Tcp,
            ChartKind::Throughput,
        );
        assert_eq!(
            spec.title(),
            "ZeroMQ PUSH/PULL socket throughput, TCP transport"
        );

        let spec = ChartSpec::new(
            SocketPattern::ReqRep,
            BenchmarkTransport::Tcp,
            ChartKind::Latency,
        );
        assert_eq!(spec.title(), "ZeroMQ REQ/REP socket latency, TCP transport");
    }

    #[test]
    fn should_join_input_path_with_result_directory() {
        let spec = ChartSpec::new(
            SocketPattern::PubSubProxy,
            BenchmarkTransport::Inproc,
            ChartKind::Throughput,
        );
        assert_eq!(
            spec.input_path(Path::new("results")),
            Path::new("results/pubsubproxy_inproc_thr_results.csv")
        );
    }

    #[test]
    fn only_tcp_throughput_charts_should_be_rate_limited() {
        let limited: Vec<bool> = ChartSpec::all()
            .iter()
            .map(ChartSpec::is_rate_limited)
            .collect();
        assert_eq!(limited, [true, false, false, false]);
    }
}
