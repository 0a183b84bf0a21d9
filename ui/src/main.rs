use anyhow::Context;
use clap::{Parser, Subcommand};
use film_finder::auth::github::GithubIdentityProvider;
use film_finder::auth::session::AuthSession;
use film_finder::auth::types::GITHUB_PROVIDER;
use film_finder::client::api::ApiClient;
use film_finder::client::page::MoviePage;
use film_finder::comments::board::CommentBoard;
use film_finder::error::FilmError;
use film_finder::search::aggregator::{SearchAggregator, SearchOutcome, SearchSnapshot};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Search movies and read or post comments")]
struct Args {
    /// Base URL of the film finder API.
    #[arg(long, env = "FILM_FINDER_API", default_value = "http://127.0.0.1:3000")]
    api_url: String,

    /// GitHub access token, needed to post comments.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    github_token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search the catalog, following "load more" up to `--pages` pages.
    Search {
        query: String,
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },
    /// Show a movie's details and comments.
    Movie { id: String },
    /// Post a comment on a movie as the GitHub user owning the token.
    Comment { id: String, text: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let api = ApiClient::new(&args.api_url);
    tracing::debug!("API endpoint: {}", api.base_url());

    match args.command {
        Command::Search { query, pages } => search(api, &query, pages).await,
        Command::Movie { id } => movie(&api, &id).await,
        Command::Comment { id, text } => comment(api, args.github_token, &id, &text).await,
    }
}

async fn search(api: ApiClient, query: &str, pages: u32) -> anyhow::Result<()> {
    let aggregator = SearchAggregator::new(api);

    match aggregator.start_search(query).await {
        SearchOutcome::Ignored => anyhow::bail!("Enter a movie to search for"),
        SearchOutcome::Failed => {
            eprintln!("Search failed; see log output for details");
        }
        _ => {}
    }

    for _ in 1..pages {
        if aggregator.load_more().await != SearchOutcome::Applied {
            break;
        }
    }

    print_results(&aggregator.snapshot().await);
    Ok(())
}

fn print_results(snapshot: &SearchSnapshot) {
    if !snapshot.performed {
        return;
    }

    println!("Displaying Results for {}:", snapshot.query_echo);
    for item in &snapshot.results {
        match item.poster_url() {
            Some(poster) => println!("  {:>8}  {}  ({})", item.id, item.title, poster),
            None => println!("  {:>8}  {}", item.id, item.title),
        }
    }

    if snapshot.has_more {
        println!("More results available; rerun with a higher --pages");
    }
}

async fn movie(api: &ApiClient, id: &str) -> anyhow::Result<()> {
    let page = match MoviePage::load(api, id).await {
        Ok(page) => page,
        Err(FilmError::NotFound) => {
            println!("Movie not found.");
            return Ok(());
        }
        Err(e) => return Err(e).context("Failed to fetch movie details"),
    };

    let view = &page.view;
    println!("{}", view.title);
    println!("{}", view.poster_url);
    if !view.overview.is_empty() {
        println!("\n{}\n", view.overview);
    }
    println!("Release Date: {}", view.release_date);
    println!("Rating: {}", view.rating);
    println!("Run Time: {}", view.runtime);
    println!("Cast: {}", view.cast);

    println!("\nComments");
    for comment in &page.comments {
        println!("  {}: {}", comment.user_name, comment.comment);
    }

    Ok(())
}

async fn comment(
    api: ApiClient,
    github_token: Option<String>,
    id: &str,
    text: &str,
) -> anyhow::Result<()> {
    let session = AuthSession::requiring_provider(GITHUB_PROVIDER);

    if let Some(token) = github_token {
        let provider =
            GithubIdentityProvider::new(&token).context("Failed to build GitHub client")?;
        session
            .sign_in(&provider)
            .await
            .context("Error signing in with GitHub")?;
    }

    let board = CommentBoard::new(api, session);
    match board.post(id, text).await {
        Ok(posted) => {
            println!("Comment posted successfully as {}", posted.user_name);
            Ok(())
        }
        Err(FilmError::AuthRequired) => {
            anyhow::bail!("You must be logged in to post a comment. Set GITHUB_TOKEN.")
        }
        Err(e) => Err(e).context("Failed to post comment"),
    }
}
