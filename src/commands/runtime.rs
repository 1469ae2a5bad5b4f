use crate::catalog::{self, Catalog, Listing};
use crate::cli::{Cli, Commands};
use crate::domain::models::{DistrictRow, FilterPatch, JsonOut, ValidateReport};
use crate::services::filters::FilterStore;
use crate::services::output::{print_one, print_out, print_rejection, print_reply};
use crate::services::session::{self, Session, SessionReply};
use std::io::BufRead;
use std::path::PathBuf;

pub fn handle_runtime_commands(cli: &Cli, catalog: &Catalog) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Browse {
            district,
            headcount,
            from,
            to,
        } => {
            let mut store = FilterStore::default();
            store.write(&FilterPatch {
                district: district.clone(),
                headcount: *headcount,
                date_from: *from,
                date_to: *to,
            })?;
            let subset = catalog::visible_subset(&catalog.items, store.read());
            print_out(cli.json, &subset, |l| listing_row(l))?;
        }
        Commands::Districts => {
            let rows: Vec<DistrictRow> = catalog
                .districts
                .iter()
                .map(|d| DistrictRow {
                    code: d.code.clone(),
                    display_name: d.display_name.clone(),
                    listings: catalog.items.iter().filter(|l| l.district == d.code).count(),
                })
                .collect();
            print_out(cli.json, &rows, |d| {
                format!("{}\t{}\t{}", d.code, d.display_name, d.listings)
            })?;
        }
        Commands::Show { listing } => {
            let l = catalog.find_listing(listing)?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut { ok: true, data: l })?
                );
            } else {
                println!("id: {}", l.id);
                println!(
                    "district: {} ({})",
                    l.district,
                    catalog.display_name(&l.district).unwrap_or("unknown")
                );
                println!("headcount: {}", l.headcount);
                println!("title: {} {}", l.title, l.title2);
                println!("caregiver: {} {}", l.first_name, l.last_name);
                println!("image: {}", l.image);
            }
        }
        Commands::Validate => {
            let orphaned = catalog::validate(catalog)?;
            let report = ValidateReport {
                status: if orphaned.is_empty() { "ok" } else { "warn" }.to_string(),
                listings: catalog.items.len(),
                districts: catalog.districts.len(),
                orphaned,
            };
            print_one(cli.json, report, |r| {
                let mut line = format!(
                    "catalog {}: {} listings, {} districts",
                    r.status, r.listings, r.districts
                );
                for o in &r.orphaned {
                    line.push_str(&format!("\norphaned: {}", o));
                }
                line
            })?;
        }
        Commands::Session { script } => run_session(cli.json, catalog, script.as_ref())?,
    }
    Ok(())
}

fn listing_row(l: &&Listing) -> String {
    format!(
        "{}\t{}\t{}\t{} {} / {} {}",
        l.id, l.district, l.headcount, l.title, l.title2, l.first_name, l.last_name
    )
}

/// Drive one session over newline commands. Rejected operations are reported
/// and the loop keeps going; only I/O failures abort.
fn run_session(json: bool, catalog: &Catalog, script: Option<&PathBuf>) -> anyhow::Result<()> {
    let reader: Box<dyn BufRead> = match script {
        Some(path) => Box::new(std::io::BufReader::new(std::fs::File::open(path)?)),
        None => Box::new(std::io::BufReader::new(std::io::stdin())),
    };
    let mut session = Session::new(catalog);
    for line in reader.lines() {
        let line = line?;
        let command = match session::parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                print_rejection(json, &e);
                continue;
            }
        };
        match session.apply(command) {
            Ok(reply) => {
                let done = matches!(reply, SessionReply::Bye);
                print_reply(json, &reply, reply_rows)?;
                if done {
                    break;
                }
            }
            Err(e) => print_rejection(json, &e),
        }
    }
    Ok(())
}

fn reply_rows(reply: &SessionReply) -> Vec<String> {
    match reply {
        SessionReply::FiltersCommitted { intent, visible } => {
            let get = |k: &str| intent.params.get(k).map(String::as_str).unwrap_or("");
            vec![format!(
                "filters committed\tdistrict={} headcount={} from={} to={}\tvisible={}",
                get("district"),
                get("headcount"),
                get("from"),
                get("to"),
                visible
            )]
        }
        SessionReply::FocusMoved { focused } => vec![format!("focused\t{}", focused)],
        SessionReply::ListingSelected { intent } | SessionReply::StoryOpened { intent } => {
            let params: Vec<String> = intent
                .params
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            vec![format!(
                "navigate\t{}\t{}",
                intent.target_view,
                params.join(" ")
            )]
        }
        SessionReply::Subset { rows } => rows.iter().map(|l| listing_row(&l)).collect(),
        SessionReply::Snapshot { state } => vec![format!(
            "district={} headcount={} from={} to={} focused={} visible={}",
            state.district,
            state.headcount,
            state.date_from,
            state.date_to,
            state.focused,
            state.visible
        )],
        SessionReply::Bye => vec!["bye".to_string()],
    }
}
