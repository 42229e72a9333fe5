// SPDX-License-Identifier: MPL-2.0

use clap::Parser;
use perch::fixture::Fixture;
use perch::{Element, IdAllocator, Item, ItemBuilder, MarkupFormat, Raw, Settings, filter, opener};
use std::path::PathBuf;
use std::process::ExitCode;

/// Show how a saved feed comes out: ids, kinds, filter hits and elements.
#[derive(Parser, Debug)]
#[command(name = "perch", version, about)]
struct Args {
    /// JSON fixture with filters, statuses, accounts, notifications and lists
    fixture: PathBuf,

    /// Filter context the statuses are shown in
    #[arg(short, long)]
    context: Option<String>,

    /// How entry bodies are encoded
    #[arg(short, long, value_enum)]
    markup: Option<MarkupFormat>,

    /// Open element N of item ID in the browser, given as ID:N
    #[arg(long, value_name = "ID:N", value_parser = parse_open_target)]
    open: Option<(u64, usize)>,

    /// Store the given --context and --markup as the new defaults
    #[arg(long)]
    remember: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_open_target(s: &str) -> Result<(u64, usize), String> {
    let (id, index) = s
        .split_once(':')
        .ok_or_else(|| format!("expected ID:N, got {s}"))?;
    let id = id.parse().map_err(|e| format!("invalid item id: {e}"))?;
    let index = index.parse().map_err(|e| format!("invalid element index: {e}"))?;
    Ok((id, index))
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut settings = Settings::load();
    if args.remember {
        if let Some(context) = &args.context {
            settings.default_context = context.clone();
        }
        if let Some(markup) = args.markup {
            settings.markup = markup;
        }
        if let Err(e) = settings.save() {
            eprintln!("Failed to save settings: {e}");
            return ExitCode::FAILURE;
        }
    }

    let fixture = match Fixture::load(&args.fixture) {
        Ok(fixture) => fixture,
        Err(e) => {
            eprintln!("Failed to load {}: {}", args.fixture.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let rules = if settings.skip_expired_filters {
        filter::active_rules(&fixture.filters, chrono::Utc::now())
    } else {
        fixture.filters.clone()
    };
    let context = args.context.unwrap_or(settings.default_context);
    let markup = args.markup.unwrap_or(settings.markup).parser();

    let ids = IdAllocator::new();
    let builder = ItemBuilder::new(&ids, &*markup);
    let items = fixture.build_items(&builder, &rules, &context);

    for item in &items {
        print_item(item);
    }
    log::debug!("built {} items, last id {}", items.len(), ids.last_id());

    if let Some((id, index)) = args.open {
        let Some(item) = items.iter().find(|i| i.id() == id) else {
            eprintln!("No item with id {id}");
            return ExitCode::FAILURE;
        };
        if let Err(e) = opener::open_element(item, index) {
            eprintln!("Failed to open element: {e}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

fn print_item(item: &Item) {
    let mut line = format!("{:>4} {:<12}", item.id(), item.kind());
    if let Raw::Status(Some(status)) = item.raw() {
        if status.is_reblog() {
            line.push_str(&format!(" [boost by @{}]", status.account.acct));
        }
    }
    if item.pinned() {
        line.push_str(" [pinned]");
    }
    if item.is_filtered() {
        line.push_str(&format!(" [filtered: {}]", item.filter_result().matched_phrase));
    }
    if let Item::Notification(n) = item {
        if n.status().filter_result().matched {
            line.push_str(&format!(
                " [post filtered: {}]",
                n.status().filter_result().matched_phrase
            ));
        }
    }

    let elements = opener::selectable(item);
    line.push_str(&format!(" {} elements", elements.total()));
    println!("{line}");

    for (n, element) in elements.iter().enumerate() {
        let host = match element {
            Element::Link(link) => link.host().map(|h| format!(" [{h}]")),
            _ => None,
        };
        println!(
            "       {n}: {}{} -> {}",
            element.label(),
            host.unwrap_or_default(),
            element.target()
        );
    }
}
