//! Replay recorded key events against a shortcut file
//!
//! Each line of the events file is one JSON key press:
//! `{"code": "KeyS", "ctrl": true, "target": {"local_name": "body"}}`
//!
//! Run with: cargo run --bin shortcut-replay -- demos/events.jsonl --shortcuts demos/shortcuts.yaml

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;

use shortcut_dispatch::shortcut::{load_shortcut_file, pressed_combination, Actions};
use shortcut_dispatch::{config_paths, KeyPress, ShortcutEvent, ShortcutOptions};

/// Replay key events against a shortcut file
#[derive(Parser, Debug)]
#[command(name = "shortcut-replay", version, about = "Replay key events against a shortcut file")]
struct CliArgs {
    /// Key events, one JSON object per line
    #[arg(value_name = "EVENTS")]
    events: PathBuf,

    /// Shortcut file (defaults to ~/.config/shortcut-dispatch/shortcuts.yaml)
    #[arg(short, long, value_name = "FILE")]
    shortcuts: Option<PathBuf>,

    /// Log every pressed combination
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    shortcut_dispatch::tracing::init(if args.verbose { "debug" } else { "warn" });

    let shortcuts_path = match args.shortcuts {
        Some(path) => path,
        None => config_paths::shortcuts_file().context("No config directory available")?,
    };
    let file = load_shortcut_file(&shortcuts_path)
        .with_context(|| format!("Failed to load {}", shortcuts_path.display()))?;

    // Every action named in the file records itself when fired
    let fired: Rc<RefCell<Vec<String>>> = Rc::default();
    let names: BTreeSet<String> = file.shortcuts.iter().map(|s| s.action.clone()).collect();
    let actions = names.into_iter().fold(Actions::new(), |actions, name| {
        let fired = Rc::clone(&fired);
        let action = name.clone();
        actions.on(name, move |_: &KeyPress, _: &ShortcutOptions| {
            fired.borrow_mut().push(action.clone())
        })
    });

    let registry = file.into_registry(&actions)?;

    let events = std::fs::read_to_string(&args.events)
        .with_context(|| format!("Failed to read {}", args.events.display()))?;

    let mut dispatched = 0;
    for (idx, line) in events.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let press: KeyPress = serde_json::from_str(line)
            .with_context(|| format!("Invalid key event on line {}", idx + 1))?;
        let combo = pressed_combination(press.modifiers(), &press.code);

        if registry.handle_key_press(&press) {
            dispatched += 1;
            let hit = fired.borrow_mut().drain(..).collect::<Vec<_>>().join(", ");
            println!("{:>4}  {:<24} -> {}", idx + 1, combo, hit);
        } else if press.targets_input() {
            println!("{:>4}  {:<24} -- typing", idx + 1, combo);
        } else {
            println!("{:>4}  {:<24} -- no match", idx + 1, combo);
        }
    }

    println!("{} shortcut(s) dispatched", dispatched);
    Ok(())
}
