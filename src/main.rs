#![deny(warnings)]
#![warn(unused_extern_crates)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unreachable)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::trivially_copy_pass_by_ref)]

use std::process::ExitCode;

fn cli_main() -> Result<(), ExitCode> {
    use clap::Parser;
    use clock_angles::clock::format_time_of_day;
    use clock_angles::{cli::Cli, prelude::*};

    let cliopts = Cli::parse();

    let level = if cliopts.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    #[allow(clippy::expect_used)]
    simple_logger::SimpleLogger::new()
        .with_level(level)
        .without_timestamps()
        .init()
        .expect("Failed to initialize logger");

    let analyzer = AngleSeparationAnalyzer::new(
        cliopts.minute_rate,
        cliopts.hour_rate,
        cliopts.target_angle,
        cliopts.window,
    )
    .inspect_err(|err| {
        error!("Failed to configure analyzer: {err}");
    })?;

    let events = analyzer.events();
    info!(
        "The hands are {} degrees apart {} times in {} minutes",
        analyzer.target_angle,
        events.len(),
        analyzer.window_minutes
    );
    if cliopts.show_events {
        for event in &events {
            info!(
                "  {} (t = {:.6} min, separation {} deg)",
                format_time_of_day(event.minutes),
                event.minutes,
                event.separation
            );
        }
    }
    Ok(())
}

fn main() -> Result<(), ExitCode> {
    cli_main()
}
