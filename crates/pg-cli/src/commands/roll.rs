use colored::Colorize;

use pg_dice::{DiceExpr, SeededRng};

pub fn run(spec: &str, seed: Option<u64>, times: u32) -> Result<(), String> {
    let expr: DiceExpr = spec.parse().map_err(|e| format!("{e}"))?;
    let mut source = seed.map_or_else(SeededRng::from_entropy, SeededRng::new);

    let mut total = 0u64;
    for _ in 0..times.max(1) {
        let roll = expr.roll_detailed(&mut source);
        total += u64::from(roll.total());
        println!("  {}: {roll}", expr.to_string().bold());
    }

    if times > 1 {
        println!(
            "  {} {}",
            "total".dimmed(),
            format!("{total} over {times} rolls (range {}-{} each)", expr.min(), expr.max()).dimmed()
        );
    }
    if seed.is_none() {
        println!("  {}", format!("seed={}", source.seed()).dimmed());
    }

    Ok(())
}
