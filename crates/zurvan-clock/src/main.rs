//! Zurvan — an animated analog clock.
//!
//! A circular dial with 60 tick marks and hour/minute/second hands,
//! re-rendered once per second from the host's local time.

mod angles;
mod app;
mod face;
mod hands;
mod timesrc;

use winit::dpi::LogicalSize;

use zurvan_engine::device::GpuInit;
use zurvan_engine::logging::{init_logging, LoggingConfig};
use zurvan_engine::window::{Runtime, RuntimeConfig};

use crate::app::ClockApp;
use crate::timesrc::SystemClock;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "Zurvan".to_string(),
        initial_size: LogicalSize::new(300.0, 300.0),
        ..RuntimeConfig::default()
    };

    log::info!("starting clock at {}x{}", config.initial_size.width, config.initial_size.height);

    Runtime::run(config, GpuInit::default(), ClockApp::new(SystemClock))
}
