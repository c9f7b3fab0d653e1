use serial_bridge::application::bridge::SerialBridge;
use serial_bridge::application::config::{Config, ConfigLoader};
use serial_bridge::common::error::Result;
use std::env;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = match args.get(1) {
        Some(path) => match ConfigLoader::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error parsing config file: {}", e);
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };

    let mut bridge = SerialBridge::new();
    bridge.start(config.port);
    if !bridge.is_started() {
        eprintln!("Error: bridge failed to start on port {}", config.port);
        std::process::exit(1);
    }

    let tick = Duration::from_millis(config.tick_interval_ms);
    if let Err(e) = run(&mut bridge, tick) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Stand-in for the emulator main loop: poll at tick cadence and write
/// whatever the serial link delivered to stdout.
fn run(bridge: &mut SerialBridge, tick: Duration) -> Result<()> {
    let mut stdout = io::stdout();
    loop {
        let data = bridge.poll();
        if !data.is_empty() {
            stdout.write_all(data)?;
            stdout.flush()?;
        }
        thread::sleep(tick);
    }
}
