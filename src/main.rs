use std::{fs::File, io::BufReader, path::PathBuf};

use clap::Parser;
use rootcause::prelude::*;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use gearparams::{
    data::csv::load_sheet,
    game_types::BaseParamId,
    items::{Equipment, EquipmentKind},
    params::BaseParamTables,
};

/// Prints the derived parameters and materia meld caps of one item.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// CSV export of the item sheet. The first column holds the row key.
    #[clap(short, long)]
    sheet: PathBuf,

    /// JSON document with the item level and base param tables
    #[clap(short, long)]
    tables: PathBuf,

    /// Equipment variant of the item: weapon, armour or accessory
    #[clap(short, long, value_parser = parse_kind)]
    kind: EquipmentKind,

    /// Row key of the item
    #[clap(short, long)]
    item: u32,

    /// Only report the meld cap of this stat
    #[clap(long)]
    stat: Option<u32>,

    /// Count HQ bonuses towards what the item already grants
    #[clap(long)]
    hq: bool,

    /// Print one JSON document instead of text
    #[clap(long)]
    json: bool,
}

fn parse_kind(name: &str) -> Result<EquipmentKind, String> {
    EquipmentKind::from_name(name).ok_or_else(|| format!("unknown equipment kind `{name}`"))
}

/// `RUST_LOG` directives when set, otherwise warnings only.
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .map(EnvFilter::new)
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn main() -> Result<(), Report> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let sheet_name = args
        .sheet
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("Item");
    let sheet_file = File::open(&args.sheet)
        .context_with(|| format!("Failed to open sheet: {}", args.sheet.display()))?;
    let sheet = load_sheet(sheet_name, BufReader::new(sheet_file))
        .context_with(|| format!("Failed to load sheet: {}", args.sheet.display()))?;

    let tables_file = File::open(&args.tables)
        .context_with(|| format!("Failed to open tables: {}", args.tables.display()))?;
    let tables = BaseParamTables::from_json_reader(BufReader::new(tables_file))
        .context_with(|| format!("Failed to load tables: {}", args.tables.display()))?;

    let item = Equipment::from_sheet(&sheet, args.item, args.kind).ok_or_else(|| {
        rootcause::report!("No row {} in {}", args.item, args.sheet.display())
    })?;

    let caps = match args.stat {
        Some(stat) => {
            let stat = BaseParamId::new(stat);
            vec![(stat, item.materia_meld_cap(&tables, stat, args.hq)?)]
        }
        None => item.materia_meld_caps(&tables, args.hq)?,
    };

    if args.json {
        let caps: Vec<_> = caps
            .iter()
            .map(|(stat, cap)| json!({ "base_param": stat, "cap": cap }))
            .collect();
        let document = json!({
            "item": item.key(),
            "kind": item.source(),
            "include_hq_bonus": args.hq,
            "primary": item.primary_parameters()?,
            "secondary": item.secondary_parameters()?,
            "all": item.all_parameters()?,
            "meld_caps": caps,
        });
        println!("{}", serde_json::to_string_pretty(&document)?);
        return Ok(());
    }

    println!("item {} ({:?})", item.key(), item.source());
    println!("parameters:");
    for parameter in item.all_parameters()? {
        println!("  {parameter}");
    }

    if args.hq {
        println!("meld caps (HQ):");
    } else {
        println!("meld caps:");
    }
    for (stat, cap) in caps {
        println!("  {stat}: {cap}");
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use tracing_subscriber::filter::LevelFilter;

    use super::*;

    #[test]
    fn log_filter_defaults_to_warn() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn log_filter_honours_rust_log() {
        assert_eq!(
            log_filter(Some("debug".to_string())).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(
            log_filter(Some("gearparams=trace".to_string())).max_level_hint(),
            Some(LevelFilter::TRACE)
        );
    }
}
