//! Rift Runner entry point
//!
//! Runs a headless session driven by a scripted key sequence. A windowed
//! front end would feed real key state through the same translator.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use rift_runner::input::{HeldKeys, InputTranslator, Key};
use rift_runner::renderer::{DrawKind, Snapshot};
use rift_runner::sim::GameEvent;
use rift_runner::{Session, Settings, logging};

#[derive(Parser, Debug)]
#[command(name = "rift-runner", about = "Headless Rift Runner simulation")]
struct Args {
    /// JSON settings file
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,
}

/// Keys pressed on `frame` and keys held during it
fn scripted_keys(frame: u64) -> (Vec<Key>, HeldKeys) {
    let mut pressed = Vec::new();
    match frame {
        // Cursor to the cell beside the upper platform's anchor, drop a rift
        60 => {
            pressed.extend([Key::Right; 4]);
            pressed.extend([Key::Down; 5]);
            pressed.push(Key::Space);
        }
        120 => pressed.push(Key::W),
        300 => pressed.push(Key::Space),
        420 => pressed.push(Key::R),
        540 => pressed.push(Key::Escape),
        _ => {}
    }
    let held = HeldKeys {
        left: false,
        right: (60..180).contains(&frame),
    };
    (pressed, held)
}

fn describe(event: &GameEvent) -> String {
    match event {
        GameEvent::Reset => "level reset".to_string(),
        GameEvent::Jumped => "jumped".to_string(),
        GameEvent::RiftPlaced { cell, position } => {
            format!("rift placed at cell {} ({})", cell, position)
        }
        GameEvent::Landed { platform } => format!("landed on platform {}", platform),
        GameEvent::ExitReached => "exit reached".to_string(),
    }
}

fn print_summary(snapshot: &Snapshot) {
    println!(
        "platforms: {}, rifts: {}",
        snapshot.count(DrawKind::Platform),
        snapshot.count(DrawKind::Rift)
    );
    for drawable in &snapshot.drawables {
        println!("  {:?} at {} {:?}", drawable.kind, drawable.position, drawable.shape);
    }
    if let Some(banner) = &snapshot.banner {
        println!("{}", banner.text);
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut settings = match &args.settings {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };
    settings.verbose |= args.verbose;
    logging::init(settings.verbose);

    log::info!("Rift Runner (headless) starting...");
    log::debug!("Settings: {:?}", settings);

    let frame_time = settings.timestep;
    let translator = InputTranslator::new();
    let mut session = Session::new(settings);

    for frame in 0..args.frames {
        let (pressed, held) = scripted_keys(frame);
        let intent = translator.translate(&pressed, held);
        if intent.quit {
            log::info!("Quit requested on frame {}", frame);
            break;
        }
        for event in session.advance(frame_time, intent.input) {
            log::info!("frame {}: {}", frame, describe(&event));
        }
    }

    log::info!("Simulated {} ticks", session.ticks());

    let snapshot = session.snapshot();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print_summary(&snapshot);
    }
    Ok(())
}
