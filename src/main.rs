//! postdeck - a headless client for the blog REST API
//!
//! This is the binary entry point. All logic lives in the workspace crates;
//! the binary only parses arguments, wires the view-models to the API
//! client, and prints their state.

use clap::{Parser, Subcommand};

use postdeck_api::ApiClient;
use postdeck_app::auth::AuthFlow;
use postdeck_app::collection::{PostCollectionViewModel, ViewOutcome};
use postdeck_app::config::Settings;
use postdeck_app::detail::PostDetailViewModel;
use postdeck_app::share::share_links;
use postdeck_core::prelude::*;
use postdeck_core::types::{Post, PostId};

/// postdeck - a headless client for the blog REST API
#[derive(Parser, Debug)]
#[command(name = "postdeck")]
#[command(about = "A headless client for the blog REST API", long_about = None)]
struct Args {
    /// Override the API base URL from config and environment
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List posts, optionally filtered and paged
    List {
        /// Case-insensitive substring matched against title, description, and category
        #[arg(long)]
        query: Option<String>,
        /// Restrict to one category ("All" disables the restriction)
        #[arg(long)]
        category: Option<String>,
        /// Page to show, 1-based
        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// List the known categories
    Categories,

    /// Show one post with its comments
    Show { id: PostId },

    /// List the comments on a post
    Comments { id: PostId },

    /// Add a comment to a post
    Comment { id: PostId, text: String },

    /// Like a post and print the authoritative count
    Like { id: PostId },

    /// Record a view on a post (requires credentials)
    View {
        id: PostId,
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },

    /// Sign in and print the session token
    Login { username: String, password: String },

    /// Create an account and print the session token
    Register { username: String, password: String },

    /// Print share links for a post
    Share {
        id: PostId,
        /// Public URL of the post; defaults to one derived from the API base
        #[arg(long)]
        url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install().map_err(|e| Error::config(e.to_string()))?;
    postdeck_core::logging::init()?;

    let args = Args::parse();

    let cwd = std::env::current_dir()?;
    let mut settings = Settings::load(&cwd)?;
    if let Some(base_url) = args.base_url {
        settings.api.base_url = base_url;
    }

    let api = ApiClient::new(&settings.api.base_url)?;

    match args.command {
        Command::List {
            query,
            category,
            page,
        } => list(api, &settings, query, category, page).await,
        Command::Categories => categories(api, &settings).await,
        Command::Show { id } => show(api, id).await,
        Command::Comments { id } => comments(api, &settings, id).await,
        Command::Comment { id, text } => comment(api, &settings, id, &text).await,
        Command::Like { id } => like(api, &settings, id).await,
        Command::View {
            id,
            username,
            password,
        } => view(api, &settings, id, &username, &password).await,
        Command::Login { username, password } => login(api, &username, &password).await,
        Command::Register { username, password } => register(api, &username, &password).await,
        Command::Share { id, url } => share(api, id, url).await,
    }

    Ok(())
}

/// Print a display-ready message and exit non-zero
fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}

async fn loaded_collection(
    api: ApiClient,
    settings: &Settings,
) -> PostCollectionViewModel<ApiClient> {
    let mut vm = PostCollectionViewModel::new(api, settings.display.page_size);
    if let Err(e) = vm.load().await {
        fail(e);
    }
    vm
}

fn print_post_line(post: &Post) {
    println!(
        "#{:<4} [{}] {} ({} views, {} likes)",
        post.id, post.category, post.title, post.views, post.likes
    );
}

async fn list(
    api: ApiClient,
    settings: &Settings,
    query: Option<String>,
    category: Option<String>,
    page: usize,
) {
    let mut vm = loaded_collection(api, settings).await;

    if let Some(query) = query {
        vm.set_query(query);
    }
    if let Some(category) = category {
        vm.set_category(category);
    }

    let total_pages = vm.total_pages();
    let posts: Vec<PostId> = vm.page(page).iter().map(|p| p.id).collect();
    if posts.is_empty() {
        println!("No posts match the current filters.");
        return;
    }

    for id in posts {
        if let Some(post) = vm.post(id) {
            print_post_line(post);
        }
    }
    println!("Page {}/{}", vm.filter().page, total_pages);
}

async fn categories(api: ApiClient, settings: &Settings) {
    let vm = loaded_collection(api, settings).await;
    for name in vm.categories() {
        println!("{name}");
    }
}

async fn show(api: ApiClient, id: PostId) {
    let mut vm = PostDetailViewModel::new(api);
    vm.load(id).await;

    if let Some(message) = vm.phase().error() {
        fail(message);
    }

    let Some(post) = vm.post() else {
        fail(format!("post {id} is not available"));
    };

    println!("{}", post.title);
    println!("Category: {}  Date: {}", post.category, post.date.date_naive());
    if let Some(image) = &post.image {
        println!("Image: {image}");
    }
    println!();
    println!("{}", post.description);

    if !vm.comments().is_empty() {
        println!();
        println!("Comments:");
        for comment in vm.comments() {
            println!("  [{}] {}", comment.created_at.date_naive(), comment.text);
        }
    }
}

async fn comments(api: ApiClient, settings: &Settings, id: PostId) {
    let mut vm = loaded_collection(api, settings).await;
    match vm.load_comments(id).await {
        Ok(comments) if comments.is_empty() => println!("No comments on post {id} yet."),
        Ok(comments) => {
            for comment in comments {
                println!("[{}] {}", comment.created_at.date_naive(), comment.text);
            }
        }
        Err(e) => fail(e),
    }
}

async fn comment(api: ApiClient, settings: &Settings, id: PostId, text: &str) {
    let mut vm = loaded_collection(api, settings).await;
    match vm.add_comment(id, text).await {
        Ok(()) => println!("Comment added to post {id}."),
        Err(e) => fail(e),
    }
}

async fn like(api: ApiClient, settings: &Settings, id: PostId) {
    let mut vm = loaded_collection(api, settings).await;
    match vm.like_post(id).await {
        Ok(likes) => println!("Post {id} now has {likes} likes."),
        Err(e) => fail(e),
    }
}

async fn view(api: ApiClient, settings: &Settings, id: PostId, username: &str, password: &str) {
    let auth = AuthFlow::new(api.clone());
    let session = match auth.login(username, password).await {
        Ok(session) => session,
        Err(e) => fail(e),
    };

    let mut vm = loaded_collection(api, settings).await;
    vm.set_session(Some(session));

    match vm.record_view(id).await {
        Ok(ViewOutcome::Recorded) => {
            let views = vm.post(id).map(|p| p.views).unwrap_or_default();
            println!("View recorded; post {id} is at {views} views locally.");
        }
        Ok(ViewOutcome::RedirectToLogin) => fail("sign in required"),
        Err(e) => fail(e),
    }
}

async fn login(api: ApiClient, username: &str, password: &str) {
    match AuthFlow::new(api).login(username, password).await {
        Ok(session) => println!("Signed in as {}; token: {}", session.username, session.token),
        Err(e) => fail(e),
    }
}

async fn register(api: ApiClient, username: &str, password: &str) {
    match AuthFlow::new(api).register(username, password).await {
        Ok(session) => println!(
            "Registered {}; token: {}",
            session.username, session.token
        ),
        Err(e) => fail(e),
    }
}

async fn share(api: ApiClient, id: PostId, url: Option<String>) {
    let mut vm = PostDetailViewModel::new(api.clone());
    vm.load(id).await;

    if let Some(message) = vm.phase().error() {
        fail(message);
    }
    let Some(post) = vm.post() else {
        fail(format!("post {id} is not available"));
    };

    let post_url = url.unwrap_or_else(|| format!("{}posts/{id}", api.base_url()));
    let links = share_links(&post.title, &post_url);
    println!("WhatsApp: {}", links.whatsapp);
    println!("Facebook: {}", links.facebook);
}
