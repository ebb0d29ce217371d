use crate::aggregator::ConfigAggregator;
use crate::configuration::Settings;
use crate::context::RunContext;
use crate::emitter;
use crate::filter::ConfigFilter;
use crate::providers::Subscription;
use crate::sampler;

use anyhow::{bail, Result};
use colored::Colorize;
use log::warn;
use std::path::PathBuf;

/// What the user asked for on the command line.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub vmess_only: bool,
    /// `Some` engages the sample stage.
    pub number: Option<usize>,
    pub save: bool,
    pub qr: bool,
    pub silent: bool,
    pub upstream_proxy: Option<String>,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub downloaded: usize,
    pub sampled: Vec<String>,
    pub config_file: Option<PathBuf>,
    pub qr_files: Vec<PathBuf>,
}

pub fn build_aggregator(settings: &Settings, upstream_proxy: Option<&str>) -> ConfigAggregator {
    let mut aggregator = ConfigAggregator::new();
    for source in &settings.sources {
        aggregator.add_provider(Subscription::new(source.clone()).with_timeout(settings.timeout()));
    }

    if let Some(proxy) = upstream_proxy.or(settings.upstream_proxy.as_deref()) {
        aggregator.set_proxy(proxy.to_string());
    }
    aggregator
}

/// Fetch, filter, sample and emit. Fails when no configs were found.
pub async fn run(settings: &Settings, opts: &RunOptions, ctx: &RunContext) -> Result<RunSummary> {
    let filter = if opts.vmess_only {
        ConfigFilter::vmess_only()
    } else {
        ConfigFilter::new()
    };

    let mut aggregator = build_aggregator(settings, opts.upstream_proxy.as_deref());
    let configs = aggregator.collect(&filter).await;

    println!("{}\n", format!("{} configs downloaded.", configs.len()).bold().yellow());
    if configs.is_empty() {
        bail!("No configs found.");
    }

    let mut summary = RunSummary {
        downloaded: configs.len(),
        ..Default::default()
    };

    let Some(number) = opts.number else {
        if opts.save || opts.qr {
            warn!("--save and --qr only apply together with --number");
        }
        return Ok(summary);
    };

    let picked = sampler::sample(&configs, number);

    if !opts.silent {
        emitter::display(&picked);
    }

    if opts.save {
        let path = emitter::save_configs(&settings.output_dir, ctx, &picked)?;
        println!("{}", format!("Config file saved to {}", path.display()).bold().green());
        summary.config_file = Some(path);
    }

    if opts.qr {
        summary.qr_files = emitter::save_qr_codes(&settings.qr_dir, ctx, &picked)?;
        println!(
            "{}",
            format!(
                "{} QR code(s) saved to {} directory.",
                summary.qr_files.len(),
                settings.qr_dir.display()
            )
            .bold()
            .yellow()
        );
    }

    println!("{}", format!("{} random configs generated.", picked.len()).bold().yellow());
    summary.sampled = picked;
    Ok(summary)
}
