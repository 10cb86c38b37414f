use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use pg_dice::SeededRng;
use pg_gen::{AlignmentMode, GenConfig, Party, generate_party};

pub fn run(dir: Option<&Path>, seed: Option<u64>, mode: &str, format: &str) -> Result<(), String> {
    let mode = AlignmentMode::parse(mode)
        .ok_or_else(|| format!("unknown alignment mode '{mode}' (expected party or individual)"))?;
    let as_json = match format {
        "text" => false,
        "json" => true,
        other => return Err(format!("unknown format '{other}' (expected text or json)")),
    };

    let data = super::load_data(dir)?;
    let mut source = seed.map_or_else(SeededRng::from_entropy, SeededRng::new);
    let config = GenConfig::default()
        .with_seed(source.seed())
        .with_alignment_mode(mode);
    tracing::debug!(seed = config.seed, %mode, "generating party");

    let party = generate_party(&data, &config, &mut source)
        .map_err(|e| format!("generation failed: {e}"))?;

    if as_json {
        if seed.is_none() {
            eprintln!("seed={}", config.seed);
        }
        let json = serde_json::to_string_pretty(&party)
            .map_err(|e| format!("failed to serialize party: {e}"))?;
        println!("{json}");
    } else {
        print_party(&party, &config);
    }

    Ok(())
}

fn print_party(party: &Party, config: &GenConfig) {
    let level = if party.higher_level { "High Level" } else { "Low Level" };
    println!(
        "  {} of {} ({}, {}) {}",
        "Party".bold(),
        party.size(),
        party.alignment,
        level,
        format!("(seed={}, mode={})", config.seed, config.alignment_mode).dimmed()
    );
    println!("  {} {}", "Quest:".bold(), party.quest);
    println!("  {} {}", "Mounts:".bold(), party.mounts);

    let t = &party.shared_treasure;
    println!(
        "  {} {} cp, {} sp, {} gp, {} gems, {} art objects",
        "Treasure:".bold(),
        t.cp,
        t.sp,
        t.gp,
        t.gems,
        t.art_objects
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Kindred", "Class", "Level", "Alignment", "Magic Items"]);
    for member in &party.members {
        let name = if member.is_leader {
            format!("{} (leader)", member.name)
        } else {
            member.name.clone()
        };
        let items = if member.magic_items.is_empty() {
            "-".to_string()
        } else {
            member.magic_items.join(", ")
        };
        table.add_row(vec![
            name,
            member.kindred.clone(),
            member.class.clone(),
            member.level.to_string(),
            member.alignment.to_string(),
            items,
        ]);
    }
    println!("{table}");

    let casters: Vec<_> = party.members.iter().filter(|m| !m.magic.is_empty()).collect();
    if casters.is_empty() {
        return;
    }
    println!();
    println!("  {}", "Magic".bold().underline());
    for member in casters {
        println!("  {}", member.name.bold());
        for line in &member.magic {
            match &line.label {
                Some(label) => println!("    {} {}", format!("{label}:").cyan(), line.text),
                None => println!("    {}", line.text.dimmed()),
            }
        }
    }
}
