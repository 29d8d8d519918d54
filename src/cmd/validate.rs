use std::fs;

use clap::Args;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use deckforge::action::{Action, ActionEnv};
use deckforge::error::DfResult;
use deckforge::score::ScoreAction;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Settings JSON file to audit
    #[arg(short, long)]
    pub settings: String,
}

/// Applies a settings record the way a host would at load time and prints
/// the effective configuration, defaults filled in.
pub fn run(args: ValidateArgs, env: &ActionEnv) -> DfResult<()> {
    info!("Auditing settings: {}", args.settings);

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&args.settings)?)?;
    let mut action = ScoreAction::new(env);
    action.deserialize_settings(&value);

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Member").add_attribute(Attribute::Bold),
        Cell::new("Effective Value").add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("restore-score"),
        Cell::new(format!("{}", action.restore_score())),
    ]);
    table.add_row(vec![
        Cell::new("score"),
        Cell::new(format!("{}", action.score())),
    ]);
    table.add_row(vec![
        Cell::new("text-color"),
        Cell::new(action.color().to_string()),
    ]);
    table.add_row(vec![
        Cell::new("save-to-file"),
        Cell::new(format!("{}", action.save_to_file())),
    ]);
    table.add_row(vec![
        Cell::new("file"),
        Cell::new(
            action
                .output_file()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(unset)".to_string()),
        ),
    ]);

    println!("{table}");
    Ok(())
}
