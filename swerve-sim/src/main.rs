// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use std::io::IsTerminal;

use clap::Parser;
use swerve::chart::{ChartStyle, Renderer, TerminalRenderer};
use swerve::consts::*;
use swerve::math::optimize_steer;
use swerve::sweep::{sweep_range, Sweep};
use swerve::Configurable;

mod config;

#[derive(Parser)]
#[command(author = "Copyright (C) 2024 Laixer Equipment B.V.")]
#[command(version, propagate_version = true)]
#[command(about = "Swerve drive steering simulator", long_about = None)]
struct Args {
    /// Target angle in degrees.
    #[arg(short, long, default_value_t = DEFAULT_TARGET_ANGLE, allow_negative_numbers = true)]
    target: i64,
    /// Level of verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = config::SimConfig {
        target: args.target,
        sweep_min: SWEEP_MIN,
        sweep_max: SWEEP_MAX,
        global: swerve::GlobalConfig::default(),
    };

    config.global.bin_name = env!("CARGO_BIN_NAME").to_string();
    config.global.color = std::io::stdout().is_terminal();

    let log_config = simplelog::ConfigBuilder::new()
        .set_time_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_location_level(log::LevelFilter::Off)
        .build();

    let log_level = match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    let color_choice = if config.global.color {
        simplelog::ColorChoice::Auto
    } else {
        simplelog::ColorChoice::Never
    };

    simplelog::TermLogger::init(
        log_level,
        log_config,
        simplelog::TerminalMode::Mixed,
        color_choice,
    )?;

    log::trace!("{:#?}", config);

    run(&config)
}

/// Show optimizer effects.
fn run(config: &config::SimConfig) -> anyhow::Result<()> {
    log::info!("Optimize steering for target angle {}°", config.target);

    let sweep = Sweep::run(
        config.target,
        sweep_range(config.sweep_min, config.sweep_max),
        optimize_steer,
    );

    let chart = sweep.chart(CURR_TICK_STEP, OPTIMIZED_TICK_STEP);
    let style = ChartStyle::bmh().with_color(config.global().color);

    let mut renderer = TerminalRenderer::new(std::io::stdout().lock());
    renderer.render(&chart, &style)?;

    log::debug!("Chart rendered by {}", config.global().bin_name);

    Ok(())
}
