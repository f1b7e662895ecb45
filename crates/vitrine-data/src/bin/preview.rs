//! # Table Preview
//!
//! Prints the bundled product table after applying filter and sort inputs
//! from the command line. A stand-in rendering collaborator for manual
//! inspection of the pipeline.
//!
//! ## Usage
//! ```bash
//! # Full table, base order
//! cargo run -p vitrine-data --bin preview
//!
//! # Owner + category + query, sorted by name descending
//! cargo run -p vitrine-data --bin preview -- \
//!     --user Anna --category Fruits --query an --sort name --desc
//! ```

use std::env;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use vitrine_core::session::BrowseSession;
use vitrine_core::sort::SortCriterion;

fn print_help() {
    println!("Vitrine Table Preview");
    println!();
    println!("Usage: preview [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -u, --user <NAME>       Select an owner (default: All)");
    println!("  -c, --category <TITLE>  Toggle a category (repeatable)");
    println!("  -q, --query <TEXT>      Filter product names by substring");
    println!("  -s, --sort <COLUMN>     Sort by: id, name, category, user");
    println!("      --desc              Sort descending (with --sort)");
    println!("  -h, --help              Show this help message");
}

fn parse_criterion(value: &str) -> Option<SortCriterion> {
    match value.to_lowercase().as_str() {
        "id" => Some(SortCriterion::Id),
        "name" => Some(SortCriterion::Name),
        "category" => Some(SortCriterion::Category),
        "user" => Some(SortCriterion::User),
        _ => None,
    }
}

fn main() -> ExitCode {
    // Logging: RUST_LOG wins, otherwise show the crate's debug output
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,vitrine=debug,vitrine_data=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut user: Option<String> = None;
    let mut categories: Vec<String> = Vec::new();
    let mut query: Option<String> = None;
    let mut sort: Option<SortCriterion> = None;
    let mut descending = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--user" | "-u" => {
                if i + 1 < args.len() {
                    user = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--category" | "-c" => {
                if i + 1 < args.len() {
                    categories.push(args[i + 1].clone());
                    i += 1;
                }
            }
            "--query" | "-q" => {
                if i + 1 < args.len() {
                    query = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--sort" | "-s" => {
                if i + 1 < args.len() {
                    match parse_criterion(&args[i + 1]) {
                        Some(criterion) => sort = Some(criterion),
                        None => {
                            eprintln!("Unknown sort column: {}", args[i + 1]);
                            return ExitCode::FAILURE;
                        }
                    }
                    i += 1;
                }
            }
            "--desc" => descending = true,
            "--help" | "-h" => {
                print_help();
                return ExitCode::SUCCESS;
            }
            _ => {}
        }
        i += 1;
    }

    let catalog = match vitrine_data::bundled_catalog() {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("Failed to load bundled catalog: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut session = BrowseSession::new(catalog);

    if let Some(name) = user {
        session.set_selected_user(&name);
    }
    for title in categories {
        session.toggle_category(&title);
    }
    if let Some(text) = query {
        session.set_query(&text);
    }
    if let Some(criterion) = sort {
        session.click_sort_header(criterion);
        if descending {
            session.click_sort_header(criterion);
        }
    }

    let rows = session.rows_for_view();

    println!("🪟 Vitrine Table Preview");
    println!("========================");
    println!(
        "Owner: {}  Categories: {:?}  Query: {:?}",
        session.filter().selected_user(),
        session.filter().selected_categories(),
        session.filter().query(),
    );
    println!();

    if rows.is_empty() {
        println!("No products matching selected criteria");
        return ExitCode::SUCCESS;
    }

    println!("{:>4}  {:<12} {:<18} {}", "ID", "Product", "Category", "User");
    println!("{:->4}  {:-<12} {:-<18} {:-<8}", "", "", "", "");
    for row in &rows {
        println!(
            "{:>4}  {:<12} {} {:<15} {}",
            row.id, row.name, row.category_icon, row.category_title, row.owner_name
        );
    }
    println!();
    println!("{} row(s)", rows.len());

    ExitCode::SUCCESS
}
