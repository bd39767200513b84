use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use pod_health_summary::{build_client, init_tracing, load_config, Cli, KubePodSource, SummaryCollector};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let cfg = load_config(&cli)?;
    info!(
        "namespace = {}",
        cfg.namespace.as_deref().unwrap_or("<all>")
    );

    let client = build_client(&cfg).await?;
    let source = KubePodSource::new(client);
    let collector = SummaryCollector::new(&source);

    // Resolution failure exits non-zero without printing any totals
    let summary = collector.run(cfg.namespace.as_deref()).await?;

    info!(
        "Summarized {} pods across {} namespaces",
        summary.totals.total,
        summary.processed_namespaces.len()
    );
    if summary.has_failures() {
        warn!(
            "{} namespaces could not be listed: {}",
            summary.failed_namespaces.len(),
            summary.failed_namespaces.join(", ")
        );
    }

    print!("{}", summary.render(cfg.output)?);
    Ok(())
}
