use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "masterblog", bin_name = "masterblog", version)]
#[command(about = "Create, list, sort and search blog posts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the posts file and config.json
    #[arg(long, global = true, value_name = "DIR", env = "MASTERBLOG_HOME")]
    pub data_dir: Option<PathBuf>,

    /// Print posts as JSON objects instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new post
    #[command(alias = "n")]
    Create {
        /// Title of the post
        #[arg(short, long)]
        title: Option<String>,

        /// Content of the post
        #[arg(short, long)]
        content: Option<String>,

        /// Extra raw field (rejected unless it is title or content)
        #[arg(short = 'f', long = "field", value_name = "KEY=VALUE", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },

    /// List posts, optionally sorted
    #[command(alias = "ls")]
    List {
        /// Field to sort by (title or content)
        #[arg(long)]
        sort: Option<String>,

        /// Sort direction (asc or desc)
        #[arg(long)]
        direction: Option<String>,
    },

    /// Update the title and/or content of a post
    #[command(alias = "u")]
    Update {
        /// Id of the post
        id: u64,

        /// New title (blank keeps the current one)
        #[arg(short, long)]
        title: Option<String>,

        /// New content (blank keeps the current one)
        #[arg(short, long)]
        content: Option<String>,

        /// Extra raw field (ignored unless it is title or content)
        #[arg(short = 'f', long = "field", value_name = "KEY=VALUE", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },

    /// Delete a post
    #[command(alias = "rm")]
    Delete {
        /// Id of the post
        id: u64,
    },

    /// Find posts whose title and/or content contain a term
    Search {
        /// Case-insensitive substring to look for in titles
        #[arg(short, long)]
        title: Option<String>,

        /// Case-insensitive substring to look for in contents
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (posts-file, pretty, log-level)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_create_with_extra_fields() {
        let cli = Cli::try_parse_from([
            "masterblog",
            "create",
            "--title",
            "Hello",
            "-f",
            "author=me",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Create { title, fields, .. }) => {
                assert_eq!(title.as_deref(), Some("Hello"));
                assert_eq!(fields, vec![("author".to_string(), "me".to_string())]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = Cli::try_parse_from(["masterblog", "ls", "--json", "--sort", "title"]).unwrap();
        assert!(cli.json);
        assert!(matches!(
            cli.command,
            Some(Commands::List { sort: Some(ref s), direction: None }) if s == "title"
        ));
    }

    #[test]
    fn rejects_malformed_field() {
        assert!(parse_field("novalue").is_err());
        assert!(parse_field("=x").is_err());
        assert_eq!(
            parse_field("title= spaced = out").unwrap(),
            ("title".to_string(), " spaced = out".to_string())
        );
    }
}
