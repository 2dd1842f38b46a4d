use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use post_store::infrastructure::config::StoreConfig;
use post_store::infrastructure::logging::init_logging;
use post_store::{JsonFileStorage, PostStore};

#[derive(Parser, Debug)]
struct Cli {
    /// Path to the posts file, overrides POSTS_FILE
    #[clap(short, long)]
    file: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// List posts, optionally filtered by a search query
    List {
        #[clap(long)]
        query: Option<String>,
    },
    /// Print one post in full
    Show { id: String },
    /// Create a post
    New {
        #[clap(long)]
        title: String,
        #[clap(long, default_value = "")]
        author: String,
        #[clap(long)]
        content: String,
    },
    /// Rewrite the title, author and content of an existing post
    Edit {
        id: String,
        #[clap(long)]
        title: String,
        #[clap(long, default_value = "")]
        author: String,
        #[clap(long)]
        content: String,
    },
    /// Delete a post (no error if the id is already gone)
    Delete { id: String },
}

fn main() -> ExitCode {
    init_logging();
    let args = Cli::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let file = match args.file {
        Some(file) => file,
        None => StoreConfig::from_env()?.posts_file,
    };
    let mut store = PostStore::open(JsonFileStorage::new(file))?;

    match args.command {
        Command::List { query } => {
            let posts = store.search(query.as_deref().unwrap_or(""));
            if posts.is_empty() {
                println!("No posts found");
                return Ok(());
            }
            println!("Posts ({})", posts.len());
            for post in posts {
                println!(
                    "- [{}] {} (by {} • {})",
                    post.id, post.title, post.author, post.date
                );
                println!("  {}", post.excerpt);
            }
        }
        Command::Show { id } => {
            let post = store
                .get(&id)
                .ok_or_else(|| format!("post not found: {id}"))?;
            println!("{}", post.title);
            println!("by {} • {}", post.author, post.date);
            println!();
            println!("{}", post.content);
        }
        Command::New {
            title,
            author,
            content,
        } => {
            let post = store.create(&title, &author, &content)?;
            println!("Post created! ID: {}", post.id);
        }
        Command::Edit {
            id,
            title,
            author,
            content,
        } => {
            let post = store.update(&id, &title, &author, &content)?;
            println!("Post updated: [{}] {}", post.id, post.title);
        }
        Command::Delete { id } => {
            store.delete(&id)?;
            println!("Post deleted!");
        }
    }

    Ok(())
}
