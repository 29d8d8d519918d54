use std::fs;
use std::time::{Duration, Instant};

use clap::Args;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use deckforge::action::{Action, ActionEnv};
use deckforge::error::{DeckForgeError, DfResult};
use deckforge::press::VERY_LONG_FACTOR;
use deckforge::registry::ActionRegistry;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    /// Press durations in milliseconds, e.g. "200,600,3100"
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub presses: Vec<u64>,

    /// Idle gap between presses in milliseconds
    #[arg(long, default_value_t = 100)]
    pub gap_ms: u64,

    /// Settings JSON applied to the action before the run
    #[arg(short, long)]
    pub settings: Option<String>,

    /// Print the serialized settings record after the run
    #[arg(long, default_value_t = false)]
    pub dump_settings: bool,
}

fn classify(held: Duration, long_press: Duration) -> &'static str {
    if held < long_press {
        "short"
    } else if held < long_press * (1 + VERY_LONG_FACTOR) {
        "long"
    } else {
        "very long"
    }
}

pub fn run(args: SimulateArgs, env: &ActionEnv) -> DfResult<()> {
    let registry = ActionRegistry::with_defaults();
    let mut action = registry
        .create("score", env)
        .ok_or_else(|| DeckForgeError::Registry("score action not registered".to_string()))?;

    if let Some(path) = &args.settings {
        info!("Loading settings from: {}", path);
        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(path)?)?;
        action.deserialize_settings(&value);
    }

    info!(
        "Simulating {} presses (long press = {}ms)",
        args.presses.len(),
        env.long_press.as_millis()
    );

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Press").add_attribute(Attribute::Bold),
        Cell::new("Held (ms)"),
        Cell::new("Class"),
        Cell::new("Score").fg(Color::Cyan),
    ]);
    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let mut now = Instant::now();
    for (index, held_ms) in args.presses.iter().enumerate() {
        let held = Duration::from_millis(*held_ms);
        let release = now + held;

        action.on_activate(now);
        // Deliver deadlines the way the host loop would: at their instant.
        while let Some(deadline) = action.next_deadline() {
            if deadline > release {
                break;
            }
            action.poll(deadline);
        }
        action.on_deactivate(release);

        table.add_row(vec![
            Cell::new(format!("{}", index + 1)).add_attribute(Attribute::Bold),
            Cell::new(format!("{}", held_ms)),
            Cell::new(classify(held, env.long_press)),
            Cell::new(action.overlay().label()).fg(Color::Cyan),
        ]);

        now = release + Duration::from_millis(args.gap_ms);
    }

    println!("{table}");

    if args.dump_settings {
        println!(
            "{}",
            serde_json::to_string_pretty(&action.serialize_settings())?
        );
    }

    Ok(())
}
