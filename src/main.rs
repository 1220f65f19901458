use clap::Parser;
use qracodes::cli::{Args, Run};
use std::error::Error;
use tracing_subscriber::{fmt, EnvFilter};

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("qracodes=info"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();
}

#[termination::display]
fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    Args::parse().run()
}
