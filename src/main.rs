mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use cmdlet_lint::registry::{ApprovedVerbs, StandardNameRegistry};
use cmdlet_lint::rule::RuleContext;
use cmdlet_lint::{config, evaluate, output, resolve, rules};
use colored::Colorize;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            descriptors,
            names,
            mode,
            format,
            include_optional,
            include_work_in_progress,
            max_parameters,
            output: output_path,
            config: config_path,
        } => {
            let mut config = config::Config::load(config_path.as_deref()).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(2);
            });

            if include_optional {
                config.run.include_optional = true;
            }
            if include_work_in_progress {
                config.run.include_work_in_progress = true;
            }
            if let Some(ceiling) = max_parameters {
                config.run.max_parameters = ceiling;
            }

            let options = config.options(mode).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(2);
            });

            let standard_names = load_standard_names(&config);
            let approved_verbs = load_approved_verbs(&config);

            let resolver = resolve::JsonFileResolver::load(&descriptors).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(2);
            });

            let names = if names.is_empty() {
                resolver.command_names()
            } else {
                names
            };

            let ctx = RuleContext {
                standard_names: standard_names.as_ref(),
                approved_verbs: approved_verbs.as_ref(),
                options: &options,
                probe: None,
            };

            let reports = evaluate::run_batch(&names, &resolver, &ctx).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(2);
            });

            let formatted = output::format_reports(&reports, &format);

            if let Some(out_path) = output_path {
                std::fs::write(&out_path, &formatted).unwrap_or_else(|e| {
                    eprintln!("Error writing output: {e}");
                    std::process::exit(2);
                });
                eprintln!("Output written to {}", out_path.display());
            } else {
                print!("{formatted}");
            }

            let all_passed = reports.iter().all(|r| r.passed());
            std::process::exit(if all_passed { 0 } else { 1 });
        }

        Commands::ListRules => {
            let catalogue = rules::catalogue();
            println!("{}", "Catalogue Rules".bold().underline());
            println!();

            let mut current_category = String::new();
            for rule in &catalogue {
                let category = rule.category.to_string();
                if category != current_category {
                    if !current_category.is_empty() {
                        println!();
                    }
                    println!("  {}", category.bold());
                    current_category = category;
                }

                let severity = match rule.severity {
                    cmdlet_lint::rule::Severity::Required => {
                        "REQUIRED".red().bold().to_string()
                    }
                    cmdlet_lint::rule::Severity::Optional => {
                        "OPTIONAL".yellow().to_string()
                    }
                    cmdlet_lint::rule::Severity::WorkInProgress => "WIP     ".blue().to_string(),
                    cmdlet_lint::rule::Severity::RegressionOnly => {
                        "REGRESS ".dimmed().to_string()
                    }
                };

                println!(
                    "    [{severity}] {id:<38} {reason}",
                    id = rule.id,
                    reason = cmdlet_lint::aggregate::short_reason(rule.rationale),
                );
            }

            println!();
            println!("  Total: {} rules", catalogue.len());
        }

        Commands::Explain { rule_id } => match rules::find(&rule_id) {
            Some(rule) => {
                println!("{}", rule.id.bold());
                println!();
                println!("  Category:   {}", rule.category);
                println!("  Severity:   {}", rule.severity);
                println!("  Rationale:  {}", rule.rationale);
            }
            None => {
                eprintln!("Unknown rule: {rule_id}");
                eprintln!("Use 'cmdlet-lint list-rules' to see all available rules.");
                std::process::exit(2);
            }
        },
    }
}

/// Loads the standard-name registry from the configured file, falling back
/// to the built-in list. A load failure degrades to `None` so that
/// registry-backed rules skip instead of aborting the run.
fn load_standard_names(config: &config::Config) -> Option<StandardNameRegistry> {
    match &config.registry.standard_names {
        Some(path) => match StandardNameRegistry::load(path) {
            Ok(registry) => Some(registry),
            Err(e) => {
                eprintln!(
                    "Warning: failed to load standard names from {}: {e}",
                    path.display()
                );
                None
            }
        },
        None => Some(StandardNameRegistry::builtin()),
    }
}

/// Loads the approved-verb list, with the same fallback behavior as
/// [`load_standard_names`].
fn load_approved_verbs(config: &config::Config) -> Option<ApprovedVerbs> {
    match &config.registry.approved_verbs {
        Some(path) => match ApprovedVerbs::load(path) {
            Ok(verbs) => Some(verbs),
            Err(e) => {
                eprintln!(
                    "Warning: failed to load approved verbs from {}: {e}",
                    path.display()
                );
                None
            }
        },
        None => Some(ApprovedVerbs::builtin()),
    }
}
