use clap::Parser as _;
use pricemerge::BaseArgs;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

pub fn main() -> anyhow::Result<()> {
    // The libraries report through `tracing`; stdout carries the JSON output,
    // so log lines go to stderr.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = BaseArgs::parse();
    args.evaluate()
}
