use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod example;
mod inspect;
mod report;
mod visualize;

fn init_logging(verbose: bool) {
    let default = if verbose { "liquidity_depth=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        cli::Command::Schema => liquidity_depth::schema::run(),
        cli::Command::Example => example::run(),
        cli::Command::Validate { file } => liquidity_depth::validate::run(&file),
        cli::Command::Segments { file } => inspect::run(&file),
        cli::Command::Depth {
            file,
            window,
            format,
            output,
        } => report::run(&report::ReportConfig {
            snapshot_path: file,
            depth: window.depth_config(),
            format,
            output,
        }),
        cli::Command::Render {
            file,
            window,
            format,
            output,
            width,
            height,
            pixel_ratio,
            hover_tick,
            style,
        } => visualize::run(&visualize::RenderConfig {
            snapshot_path: file,
            depth: window.depth_config(),
            format,
            output,
            width,
            height,
            pixel_ratio,
            hover_tick,
            style,
        }),
    }
}
