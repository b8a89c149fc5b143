//! # CLI Layer
//!
//! One possible client of the masterblog library. It is the only place that:
//! - Parses arguments
//! - Resolves the data directory and loads configuration
//! - Installs the logging subscriber
//! - Writes to stdout/stderr
//!
//! Business rules stay behind `BlogApi`; handlers here only translate
//! arguments into API inputs and `CmdResult`s into terminal output.

use super::print::{print_config, print_deleted, print_messages, print_post, print_posts};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use masterblog::api::{BlogApi, ConfigAction, SearchQuery, SortQuery};
use masterblog::config::BlogConfig;
use masterblog::error::{BlogError, Result};
use masterblog::logging::init_logging;
use masterblog::model::FieldMap;
use masterblog::store::fs::JsonFileStore;
use serde_json::Value;
use std::path::PathBuf;
use tracing::debug;

struct AppContext {
    api: BlogApi<JsonFileStore>,
    json: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Create {
            title,
            content,
            fields,
        }) => handle_create(&ctx, title, content, fields),
        Some(Commands::List { sort, direction }) => handle_list(&ctx, sort, direction),
        Some(Commands::Update {
            id,
            title,
            content,
            fields,
        }) => handle_update(&ctx, id, title, content, fields),
        Some(Commands::Delete { id }) => handle_delete(&ctx, id),
        Some(Commands::Search { title, content }) => handle_search(&ctx, title, content),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, None, None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    let config = BlogConfig::load(&data_dir)?;

    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    init_logging(level);

    let posts_path = config.posts_path(&data_dir);
    debug!(data_dir = %data_dir.display(), posts = %posts_path.display(), "context ready");

    let store = JsonFileStore::new(posts_path).with_pretty(config.pretty);
    let api = BlogApi::new(store).with_data_dir(data_dir);

    Ok(AppContext {
        api,
        json: cli.json,
    })
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    ProjectDirs::from("com", "masterblog", "masterblog")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| BlogError::Config("Could not determine a data directory".to_string()))
}

/// Builds the raw field set a transport would have received.
fn field_map(
    title: Option<String>,
    content: Option<String>,
    extra: Vec<(String, String)>,
) -> FieldMap {
    let mut fields = FieldMap::new();
    for (key, value) in extra {
        fields.insert(key, Value::String(value));
    }
    if let Some(title) = title {
        fields.insert("title".to_string(), Value::String(title));
    }
    if let Some(content) = content {
        fields.insert("content".to_string(), Value::String(content));
    }
    fields
}

fn handle_create(
    ctx: &AppContext,
    title: Option<String>,
    content: Option<String>,
    extra: Vec<(String, String)>,
) -> Result<()> {
    let fields = field_map(title, content, extra);
    let result = ctx.api.create_post(&fields)?;
    if ctx.json {
        for post in &result.affected_posts {
            print_post(post)?;
        }
    } else {
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_list(
    ctx: &AppContext,
    sort: Option<String>,
    direction: Option<String>,
) -> Result<()> {
    let result = ctx.api.list_posts(&SortQuery::new(sort, direction))?;
    print_posts(&result.listed_posts, ctx.json)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(
    ctx: &AppContext,
    id: u64,
    title: Option<String>,
    content: Option<String>,
    extra: Vec<(String, String)>,
) -> Result<()> {
    let fields = field_map(title, content, extra);
    let result = ctx.api.update_post(id, &fields)?;
    if ctx.json {
        for post in &result.affected_posts {
            print_post(post)?;
        }
    } else {
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_delete(ctx: &AppContext, id: u64) -> Result<()> {
    let result = ctx.api.delete_post(id)?;
    if ctx.json {
        print_deleted(&result.messages)?;
    } else {
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_search(
    ctx: &AppContext,
    title: Option<String>,
    content: Option<String>,
) -> Result<()> {
    let result = ctx.api.search_posts(&SearchQuery::new(title, content))?;
    print_posts(&result.listed_posts, ctx.json)?;
    if !ctx.json {
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}
