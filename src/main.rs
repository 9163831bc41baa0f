//! Interactive entry point — Tâi-lô input core.
//!
//! Reads transcript lines from stdin and prints the Hanji rendering, with
//! a few colon-commands for managing the user dictionary (the same
//! add/view/delete surface the hosted tool exposes in its manage menu):
//!
//! ```text
//! :add <tailo>=<hanji>   add or update an override, then save
//! :del <tailo>           delete an override, then save
//! :list                  list overrides sorted by key
//! ```
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Load the user dictionary from its JSON file.
//! 4. Build the [`Pipeline`] over the built-in domain entries.
//! 5. Loop over stdin lines until EOF.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tailo_input::{
    config::AppConfig,
    dict::DictStore,
    pipeline::Pipeline,
};

fn main() -> Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Tâi-lô input core starting up");

    // 2. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });

    // 3. User dictionary
    let mut store = DictStore::load_from(config.dictionary.resolved_file());
    log::info!("User dictionary loaded ({} entries)", store.dict().len());

    // 4. Pipeline
    let pipeline = Pipeline::new();
    log::info!(
        "Domain index ready ({} bias phrases)",
        pipeline.index().bias_phrases().len()
    );

    // 5. REPL
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(command) = line.strip_prefix(':') {
            handle_command(command, &mut store, &mut stdout)?;
            continue;
        }

        let result = pipeline.process(line, store.dict());
        writeln!(stdout, "台羅: {}", result.tailo)?;
        writeln!(stdout, "漢字: {}", result.hanji)?;
    }

    Ok(())
}

/// Handle one `:command` line against the dictionary store.
fn handle_command(command: &str, store: &mut DictStore, out: &mut impl Write) -> Result<()> {
    let (name, rest) = match command.split_once(' ') {
        Some((name, rest)) => (name, rest.trim()),
        None => (command, ""),
    };

    match name {
        "add" => match rest.split_once('=') {
            Some((tailo, hanji)) if !tailo.trim().is_empty() => {
                store
                    .dict_mut()
                    .add_or_update(tailo.trim().to_string(), hanji.trim().to_string());
                store.save()?;
                writeln!(out, "已加入：{} → {}", tailo.trim(), hanji.trim())?;
            }
            _ => writeln!(out, "用法：:add <tailo>=<hanji>")?,
        },
        "del" => {
            if store.dict_mut().remove(rest) {
                store.save()?;
                writeln!(out, "已刪除：{rest}")?;
            } else {
                writeln!(out, "找不到這個台羅 key：{rest}")?;
            }
        }
        "list" => {
            if store.dict().is_empty() {
                writeln!(out, "（詞庫是空的）")?;
            } else {
                for (i, (tailo, hanji)) in store.dict().sorted_entries().iter().enumerate() {
                    writeln!(out, "{}. {tailo}  →  {hanji}", i + 1)?;
                }
            }
        }
        other => writeln!(out, "未知指令：{other}（可用：add / del / list）")?,
    }

    Ok(())
}
