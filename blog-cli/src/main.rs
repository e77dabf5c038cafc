mod logging;

use anyhow::Context;
use blog_client::{
    ClientConfig, HttpTransport, ImageFile, Navigator, PageSnapshot, PostImage, PostListStore,
};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
struct Cli {
    /// API root, e.g. http://localhost:3000/api (defaults to $BLOG_API_URL)
    #[clap(short, long)]
    server: Option<String>,

    #[clap(long)]
    json_logs: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    List {
        #[clap(long, default_value_t = 2)]
        page_size: u32,
        #[clap(long, default_value_t = 1)]
        page: u32,
    },
    Get {
        id: String,
    },
    Create {
        #[clap(long)]
        title: String,
        #[clap(long)]
        content: String,
        #[clap(long)]
        image: PathBuf,
    },
    Update {
        id: String,
        #[clap(long)]
        title: String,
        #[clap(long)]
        content: String,
        #[clap(long, conflicts_with = "image_path", required_unless_present = "image_path")]
        image: Option<PathBuf>,
        #[clap(long)]
        image_path: Option<String>,
    },
    Delete {
        id: String,
    },
}

/// There is no UI to route in a terminal, so navigation is only reported.
struct PrintNavigator;

impl Navigator for PrintNavigator {
    fn navigate_to(&self, route: &str) {
        info!(%route, "navigation requested");
        println!("-> {route}");
    }
}

fn print_page(snapshot: &PageSnapshot) {
    println!("Posts ({} of {})", snapshot.posts.len(), snapshot.post_count);
    for post in &snapshot.posts {
        println!("- {}", post);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    logging::init_logging(args.json_logs);

    // 1. Конфигурация и стор (один раз)
    let config = match args.server.as_deref() {
        Some(server) => ClientConfig::new(server)?,
        None => ClientConfig::from_env()?,
    };
    let transport = HttpTransport::new().context("failed to build HTTP client")?;
    let store = PostListStore::new(&config, Arc::new(transport), Arc::new(PrintNavigator));

    // 2. Выполняем команду
    match args.command {
        Command::List { page_size, page } => {
            let subscription = store.get_post_updated_listener().subscribe(print_page);
            store.fetch_posts(page_size, page).await?;
            subscription.unsubscribe();
        }
        Command::Get { id } => {
            let post = store.get_post(&id).await?;
            println!("{}", serde_json::to_string_pretty(&post)?);
        }
        Command::Create {
            title,
            content,
            image,
        } => {
            let image = ImageFile::from_path(&image)
                .await
                .with_context(|| format!("failed to read image {}", image.display()))?;
            let resp = store.add_post(&title, &content, image).await?;
            println!("Post created! {}", resp["message"].as_str().unwrap_or_default());
        }
        Command::Update {
            id,
            title,
            content,
            image,
            image_path,
        } => {
            let image = match (image, image_path) {
                (Some(path), _) => PostImage::File(
                    ImageFile::from_path(&path)
                        .await
                        .with_context(|| format!("failed to read image {}", path.display()))?,
                ),
                (None, Some(image_path)) => PostImage::Path(image_path),
                (None, None) => anyhow::bail!("either --image or --image-path is required"),
            };
            store.update_post(&id, &title, &content, image).await?;
            println!("Post updated!");
        }
        Command::Delete { id } => {
            store.delete_post(&id).await?;
            println!("Post deleted!");
        }
    }

    Ok(())
}
