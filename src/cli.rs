use clap::Parser;

#[derive(Parser, Debug)]
pub struct Cli {
    #[clap(long, default_value_t = false)]
    pub debug: bool,

    /// Angular rate of the minute hand, degrees per minute.
    #[clap(long, default_value_t = 6.0)]
    pub minute_rate: f64,

    /// Angular rate of the hour hand, degrees per minute.
    #[clap(long, default_value_t = 0.5)]
    pub hour_rate: f64,

    /// Separation to search for, degrees in (0, 180].
    #[clap(long, default_value_t = 30.0)]
    pub target_angle: f64,

    /// Search window in minutes.
    #[clap(long, default_value_t = 1440.0)]
    pub window: f64,

    /// List each event as a time of day.
    #[clap(long, default_value_t = false)]
    pub show_events: bool,
}
