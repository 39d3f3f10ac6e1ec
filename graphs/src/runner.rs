use crate::config::GraphsConfig;
use anyhow::Result;
use tracing::info;
use zmq_bench_report::chart_image_path;
use zmq_bench_report::chart_spec::ChartSpec;
use zmq_bench_report::latency::LatencyTable;
use zmq_bench_report::plotting::chart_kind::ChartKind;
use zmq_bench_report::throughput::ThroughputTable;
use zmq_bench_report::{render_latency_chart, render_throughput_chart};

pub struct GraphsRunner {
    config: GraphsConfig,
}

impl GraphsRunner {
    pub fn new(config: GraphsConfig) -> Self {
        Self { config }
    }

    /// Renders every chart of the registry in order. The first missing or
    /// malformed results table aborts the whole run.
    pub fn run(&self) -> Result<()> {
        for spec in ChartSpec::all() {
            let input = spec.input_path(&self.config.result_directory);
            let output = chart_image_path(&input);
            let title = spec.title();
            info!(
                "Generating chart image [{title}] from results table '{}'",
                input.display()
            );

            match spec.kind {
                ChartKind::Throughput => {
                    let table = ThroughputTable::load(&input)?;
                    table.print_summary();
                    render_throughput_chart(
                        &table,
                        &title,
                        self.config.tcp_link_speed_gbps,
                        spec.is_rate_limited(),
                        &output,
                    )?;
                }
                ChartKind::Latency => {
                    let table = LatencyTable::load(&input)?;
                    table.print_summary();
                    render_latency_chart(&table, &title, &output)?;
                }
            }

            info!("Chart image written to '{}'", output.display());
        }
        Ok(())
    }
}
