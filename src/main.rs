//! マンデルブロ集合 PNG 出力ツール
//!
//! 使い方:
//!   mandelbrot -f mandelbrot.png -w 800 -h 600 -p magma [-i] [-e 2]

use std::process::ExitCode;

use clap::Parser;
use mandelbrot::{cli::Cli, common::colors::PaletteRegistry};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mandelbrot=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Cli::parse().into_config();
    let registry = PaletteRegistry::builtin();

    match mandelbrot::run(&config, &registry) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
