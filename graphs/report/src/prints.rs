use colored::Colorize;
use human_repr::{HumanCount, HumanThroughput};
use tracing::info;

use crate::types::{latency::LatencyTable, throughput::ThroughputTable};

impl ThroughputTable {
    pub fn print_summary(&self) {
        let rows = self.records.len();
        let total_messages = self.total_messages();
        let peak_pps = self
            .records
            .iter()
            .map(|r| r.packets_per_second)
            .fold(0.0, f64::max);
        let peak_gbps = self
            .records
            .iter()
            .map(|r| r.megabits_per_second / 1e3)
            .fold(0.0, f64::max);

        let summary = format!(
            "Results table '{}': {} rows, {} messages in total, peak {} at {:.2} Gb/s",
            self.path.display(),
            rows,
            total_messages.human_count_bare(),
            peak_pps.human_throughput("msg"),
            peak_gbps,
        )
        .blue();
        info!("{summary}");
    }
}

impl LatencyTable {
    pub fn print_summary(&self) {
        let rows = self.records.len();
        let min_latency = self
            .records
            .iter()
            .map(|r| r.latency_us)
            .fold(f64::INFINITY, f64::min);
        let max_latency = self.records.iter().map(|r| r.latency_us).fold(0.0, f64::max);

        let summary = format!(
            "Results table '{}': {} rows, latency {:.2} us .. {:.2} us",
            self.path.display(),
            rows,
            min_latency,
            max_latency,
        )
        .blue();
        info!("{summary}");
    }
}
