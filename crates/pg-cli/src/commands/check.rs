use std::collections::BTreeSet;
use std::path::Path;

use colored::Colorize;

use pg_data::{DataError, ValidationIssue};
use pg_gen::NameGenerator;

pub fn run(dir: Option<&Path>) -> Result<(), String> {
    let label = super::data_label(dir);

    let (data, mut issues) = match super::read_data(dir) {
        Ok(data) => {
            let issues = data.validate();
            (Some(data), issues)
        }
        Err(DataError::Invalid(issues)) => (None, issues),
        Err(e) => return Err(format!("failed to load dataset: {e}")),
    };
    if let Some(data) = &data {
        issues.extend(NameGenerator::default().check(data));
    }

    print_issues(&issues);

    let errors = issues.iter().filter(|i| i.is_error).count();
    let warnings = issues.len() - errors;
    let Some(data) = data.filter(|_| errors == 0) else {
        return Err(format!("{label} has {errors} error{}", plural(errors)));
    };

    let classes: BTreeSet<&String> = data
        .kindreds
        .values()
        .flat_map(|k| k.adventurer_class_table.values())
        .collect();

    println!("  All checks passed for {label}.");
    println!(
        "  {} kindreds, {} classes, {} houses, {} quests",
        data.kindreds.len(),
        classes.len(),
        data.houses.len(),
        data.quests.lawful.len() + data.quests.neutral.len() + data.quests.chaotic.len(),
    );
    if warnings > 0 {
        println!("  {warnings} warning{}", plural(warnings));
    }

    Ok(())
}

fn print_issues(issues: &[ValidationIssue]) {
    for issue in issues {
        let line = issue.to_string();
        if issue.is_error {
            eprintln!("  {}", line.red());
        } else {
            eprintln!("  {}", line.yellow());
        }
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
