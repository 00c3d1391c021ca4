//! Project store CLI
//!
//! Saved projects are named snapshots of the signature roster, kept in a
//! local SQLite database.
//!
//! Usage:
//!   cargo run --bin projects -- list
//!   cargo run --bin projects -- save <name>    # snapshot the enabled roster
//!   cargo run --bin projects -- load <id>      # overwrite config/signatures.txt
//!   cargo run --bin projects -- delete <id>

use std::path::Path;

use sigball::{PROJECTS_DB_FILE, ProjectStore, SIGNATURES_FILE, SignatureRoster};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let store = ProjectStore::open(Path::new(PROJECTS_DB_FILE)).expect("Failed to open project store");

    match args.first().map(|s| s.as_str()) {
        Some("list") => {
            let projects = store.list().expect("Failed to list projects");
            if projects.is_empty() {
                println!("No saved projects.");
                return;
            }
            println!("{:<36}  {:<25}  {:>5}  name", "id", "updated", "count");
            for project in projects {
                println!(
                    "{:<36}  {:<25}  {:>5}  {}",
                    project.id,
                    &project.updated_at[..project.updated_at.len().min(25)],
                    project.signature_names.len(),
                    project.name
                );
            }
        }
        Some("save") => {
            let Some(name) = args.get(1) else {
                eprintln!("Usage: projects save <name>");
                std::process::exit(1);
            };
            let roster = SignatureRoster::load_or_create(SIGNATURES_FILE);
            let names: Vec<String> = roster.enabled().into_iter().map(|s| s.name).collect();
            let id = store.create(name, &names).expect("Failed to save project");
            println!("Saved '{}' ({} names) as {}", name, names.len(), id);
        }
        Some("load") => {
            let Some(id) = args.get(1) else {
                eprintln!("Usage: projects load <id>");
                std::process::exit(1);
            };
            match store.get(id).expect("Failed to query project store") {
                Some(project) => {
                    let roster = SignatureRoster::from_names(&project.signature_names);
                    roster
                        .write_to_file(SIGNATURES_FILE)
                        .expect("Failed to write roster file");
                    println!(
                        "Loaded '{}' ({} names) into {}",
                        project.name,
                        project.signature_names.len(),
                        SIGNATURES_FILE
                    );
                }
                None => {
                    eprintln!("No project with id {}", id);
                    std::process::exit(1);
                }
            }
        }
        Some("delete") => {
            let Some(id) = args.get(1) else {
                eprintln!("Usage: projects delete <id>");
                std::process::exit(1);
            };
            if store.delete(id).expect("Failed to delete project") {
                println!("Deleted {}", id);
            } else {
                eprintln!("No project with id {}", id);
                std::process::exit(1);
            }
        }
        _ => {
            eprintln!("Usage: projects <list | save <name> | load <id> | delete <id>>");
            std::process::exit(1);
        }
    }
}
