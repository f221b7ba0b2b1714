use clap::Parser;
use log::LevelFilter;
use wbtags::api::{CmdResult, WbTagsApi};
use wbtags::config::WbTagsConfig;
use wbtags::error::Result;
use wbtags::store::debounce::Debounced;
use wbtags::store::fs::{load_settings, FilePersister};
use wbtags::store::TagStore;

mod args;
mod print;
use args::{Cli, Commands, FilterAction};
use print::{print_messages, print_tags, print_worlds};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

type Api = WbTagsApi<Debounced<FilePersister>>;

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut api = init_api(&cli)?;
    match cli.command {
        Commands::Show { world } => render(api.show_tags(&world)?),
        Commands::Set { world, tags } => render(api.set_tags(&world, &tags.join(","))?),
        Commands::Clear { world } => render(api.clear_tags(&world)?),
        Commands::All => render(api.all_tags()?),
        Commands::List { tags, worlds } => render(api.list_worlds(&worlds, &tags)?),
        Commands::Filter { action } => handle_filter(&mut api, action)?,
    }

    // Debounced writes are coalesced; push the final state out before exiting.
    api.flush()
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn init_api(cli: &Cli) -> Result<Api> {
    let config = WbTagsConfig::load(cli.config.as_deref())?;
    let settings_path = cli
        .settings
        .clone()
        .unwrap_or_else(|| config.settings_path());
    let worlds_dir = cli.worlds.clone().or(config.worlds_dir.clone());
    log::debug!("using settings file {}", settings_path.display());

    let settings = load_settings(&settings_path)?;
    let persister = Debounced::new(FilePersister::new(settings_path), config.debounce());
    Ok(WbTagsApi::new(
        TagStore::with_settings(settings, persister),
        worlds_dir,
    ))
}

fn handle_filter(api: &mut Api, action: Option<FilterAction>) -> Result<()> {
    let result = match action.unwrap_or(FilterAction::Show) {
        FilterAction::Show => api.show_filter()?,
        FilterAction::Add { tags } => api.add_filter_tags(&tags)?,
        FilterAction::Remove { tags } => api.remove_filter_tags(&tags)?,
        FilterAction::Clear => api.clear_filter()?,
        FilterAction::Prune => api.prune_filter()?,
    };
    render(result);
    Ok(())
}

fn render(result: CmdResult) {
    print_worlds(&result.worlds);
    print_tags(&result.tags);
    print_messages(&result.messages);
}
