use clap::{CommandFactory, Parser};
use colored::Colorize;
use configrs::configuration::{Settings, DEFAULT_CONFIG_PATH};
use configrs::context::RunContext;
use configrs::sampler::parse_sample_size;
use configrs::RunOptions;
use std::path::PathBuf;
use std::process::ExitCode;

/// Grab free proxy configs from public subscription lists.
#[derive(Parser, Debug)]
#[command(name = "configrs")]
struct Cli {
    /// Number of configs (default 5)
    #[arg(
        short = 'n',
        long = "number",
        value_name = "COUNT",
        num_args = 0..=1,
        allow_negative_numbers = true
    )]
    number: Option<Option<String>>,

    /// Get vmess configs only
    #[arg(short = 'v', long)]
    vmess: bool,

    /// Save configs to a file
    #[arg(short = 's', long)]
    save: bool,

    /// Save QR codes
    #[arg(short = 'q', long)]
    qr: bool,

    /// Don't print the sampled configs
    #[arg(long)]
    silent: bool,

    /// Fetch sources through this HTTP proxy
    #[arg(long, value_name = "HOST:PORT")]
    proxy: Option<String>,

    /// Source list and output settings
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

impl Cli {
    fn options(&self) -> RunOptions {
        RunOptions {
            vmess_only: self.vmess,
            number: self
                .number
                .as_ref()
                .map(|raw| parse_sample_size(raw.as_deref())),
            save: self.save,
            qr: self.qr,
            silent: self.silent,
            upstream_proxy: self.proxy.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .filter_module("configrs", log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if std::env::args_os().len() <= 1 {
        eprintln!("{}", Cli::command().render_help());
        return ExitCode::FAILURE;
    }

    let cli = Cli::parse();
    let ctx = RunContext::now();

    let settings = match Settings::load(&cli.config) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Failed to load {}: {:#}. Using default sources.", cli.config.display(), e);
            Settings::default()
        }
    };

    match configrs::run(&settings, &cli.options(), &ctx).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format!("{:#}", e).bold().red());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("configrs").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn number_defaults_and_fallbacks() {
        assert_eq!(parse(&["-n"]).options().number, Some(5));
        assert_eq!(parse(&["-n", "3"]).options().number, Some(3));
        assert_eq!(parse(&["--number", "abc"]).options().number, Some(5));
        assert_eq!(parse(&["-n", "-2"]).options().number, Some(5));
        assert_eq!(parse(&["-v"]).options().number, None);
    }

    #[test]
    fn flags_after_bare_number_are_not_swallowed() {
        let opts = parse(&["-n", "-s", "-q", "--silent"]).options();
        assert_eq!(opts.number, Some(5));
        assert!(opts.save && opts.qr && opts.silent);
    }

    #[test]
    fn long_and_short_forms_match() {
        let short = parse(&["-v", "-s", "-q", "-n", "2"]).options();
        let long = parse(&["--vmess", "--save", "--qr", "--number", "2"]).options();
        assert_eq!(
            (short.vmess_only, short.save, short.qr, short.number),
            (long.vmess_only, long.save, long.qr, long.number)
        );
    }

    #[test]
    fn usage_lists_every_option() {
        let help = Cli::command().render_help().to_string();
        for flag in ["--number", "--vmess", "--save", "--qr", "--silent"] {
            assert!(help.contains(flag), "missing {} in usage", flag);
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
