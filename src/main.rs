use std::net::SocketAddr;
use std::process;

use askama::Template;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use topk::api::{self, fetch_top_products, ApiClient};
use topk::config::{self, DEFAULT_HOST, DEFAULT_PORT};
use topk::models::AppState;
use topk::render::{render_json, HtmlFragment, RenderState, TerminalTarget};
use topk::routes::build_app;
use topk::templates::TopKRegionsTemplate;
use topk::viewer::{resolve_submission, TopKViewer};

fn build_state(env_file: Option<&str>, api_base_url: Option<&str>) -> AppState {
    config::load_env_file(env_file);
    let api_base_url = config::resolve_api_base_url(api_base_url);
    let api = match ApiClient::new(api_base_url.clone()) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(%e, "Failed to create HTTP client");
            eprintln!("{}: {}", yansi::Paint::new("Failed to create HTTP client").red(), e);
            process::exit(1);
        }
    };
    AppState {
        api,
        api_base_url,
        custom_css: None,
    }
}

async fn start_server(mut state: AppState, host: &str, port: u16, stylesheet: Option<String>) {
    if let Some(path) = stylesheet {
        match std::fs::read_to_string(&path) {
            Ok(css) => {
                state.custom_css = Some(css);
                tracing::info!("Loaded custom stylesheet from {}", path);
            }
            Err(e) => {
                tracing::error!(%e, "Failed to read custom stylesheet");
                eprintln!("{} {}: {}", yansi::Paint::new("Failed to read custom stylesheet at").red(), path, e);
                process::exit(1);
            }
        }
    }

    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::new("Invalid host/port format").red(), e);
            process::exit(1);
        }
    };
    let api_base_url = state.api_base_url.clone();
    let app = build_app(state);
    tracing::info!(%addr, api_base_url = %api_base_url, "Starting top-k viewer");
    println!(
        "{} {}",
        yansi::Paint::new("Web server running on").green(),
        yansi::Paint::new(format!("http://{}", addr)).cyan()
    );
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!(
                "{}: {}\n{}",
                yansi::Paint::new(format!("Failed to bind to {}", addr)).red(),
                e,
                yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow()
            );
            process::exit(1);
        }
    }
}

fn exit_code(state: &RenderState) -> i32 {
    if state.is_error() {
        1
    } else {
        0
    }
}

async fn run_top(state: &AppState, raw: &str, format: OutputFormat) -> i32 {
    match format {
        OutputFormat::Table => {
            let target = TerminalTarget::new(std::io::stdout()).fit_to_terminal();
            let mut viewer = TopKViewer::init(state.api.clone(), target);
            match viewer.submit(raw).await {
                Ok(s) => exit_code(s),
                Err(e) => {
                    eprintln!("{}: {}", yansi::Paint::new("Failed to print results").red(), e);
                    1
                }
            }
        }
        OutputFormat::Json => {
            let s = resolve_submission(&state.api, raw).await;
            if let Some(message) = s.alert_message() {
                eprintln!("{}", yansi::Paint::new(message).red());
                return 1;
            }
            match render_json(&s) {
                Ok(json) => {
                    println!("{}", json);
                    0
                }
                Err(e) => {
                    eprintln!("{}: {}", yansi::Paint::new("Failed to serialize results").red(), e);
                    1
                }
            }
        }
        OutputFormat::Html => {
            let mut viewer = TopKViewer::init(state.api.clone(), HtmlFragment::default());
            let code = match viewer.submit(raw).await {
                Ok(s) => exit_code(s),
                Err(e) => {
                    eprintln!("{}: {}", yansi::Paint::new("Failed to render results").red(), e);
                    return 1;
                }
            };
            let fragment = viewer.into_target();
            let page = TopKRegionsTemplate {
                alert: fragment.alert,
                results_html: fragment.results_html,
            };
            match page.render() {
                Ok(html) => {
                    println!("{}", html);
                    code
                }
                Err(e) => {
                    eprintln!("{}: {}", yansi::Paint::new("Failed to render results").red(), e);
                    1
                }
            }
        }
    }
}

#[derive(Parser)]
#[command(
    name = "topk",
    author,
    version,
    about = "Show the top-k ranked products from a shop API",
    long_about = r#"topk - look up the k highest-ranked products from a shop API.

The API is expected to answer `GET /products/top?k=<k>` with
`{"products": [{"id": .., "name": .., "price": ..}]}`. Point the tool at it with
API_BASE_URL (environment or .env file) or `--api-base-url`.

Examples:
  1) Print the top 5 products as a table:
      topk top 5
  2) Serve the web form:
      topk serve --host 127.0.0.1 --port 8080
  3) Check the API is reachable:
      topk check-config
"#,
    after_help = "Use `topk <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable request/response logging
    #[arg(long, global = true)]
    silent: bool,
    /// Products API base URL (overrides API_BASE_URL)
    #[arg(long, global = true)]
    api_base_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// Path to a custom stylesheet to serve instead of the default
        #[arg(long)]
        stylesheet: Option<String>,
    },
    /// Fetch and print the top-k products
    #[command(
        about = "Fetch and print the top-k products",
        long_about = "Validate K (a positive integer), request /products/top?k=K once and print the products in the order the server ranked them. Exits with status 1 when K is invalid or the request fails."
    )]
    Top {
        /// Number of products to request
        #[arg(allow_hyphen_values = true)]
        k: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Validate configuration and ensure API connectivity
    #[command(
        about = "Validate configuration and ensure API connectivity.",
        long_about = "Resolve the products API base URL and issue a single `k=1` request to confirm the endpoint answers with a product list."
    )]
    CheckConfig { env_file: Option<String> },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Html,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    if cli.silent {
        api::set_silent(true);
    }

    let api_base_url = cli.api_base_url.as_deref();

    // Without a subcommand, serve the web app
    let Some(command) = cli.command else {
        let state = build_state(None, api_base_url);
        start_server(state, DEFAULT_HOST, DEFAULT_PORT, None).await;
        return;
    };

    match command {
        Commands::Serve {
            host,
            port,
            env_file,
            stylesheet,
        } => {
            let state = build_state(env_file.as_deref(), api_base_url);
            start_server(state, &host, port, stylesheet).await;
        }
        Commands::Top { k, format, env_file } => {
            // Machine-readable output must not be interleaved with request logs
            if format != OutputFormat::Table {
                api::set_silent(true);
            }
            let state = build_state(env_file.as_deref(), api_base_url);
            let code = run_top(&state, &k, format).await;
            process::exit(code);
        }
        Commands::CheckConfig { env_file } => {
            let state = build_state(env_file.as_deref(), api_base_url);
            if api_base_url.is_none() && std::env::var("API_BASE_URL").map(|v| v.trim().is_empty()).unwrap_or(true) {
                eprintln!(
                    "{} {}",
                    yansi::Paint::new("API_BASE_URL is not configured; using").yellow(),
                    state.api_base_url
                );
            }
            match fetch_top_products(&state.api, 1).await {
                Ok(products) => {
                    println!(
                        "{} ({} product(s) returned from {})",
                        yansi::Paint::new("Configuration looks valid").green(),
                        products.len(),
                        state.api_base_url
                    );
                    process::exit(0);
                }
                Err(e) => {
                    eprintln!(
                        "{}: {} ({})",
                        yansi::Paint::new("Configuration appears invalid").red(),
                        e,
                        e.user_message()
                    );
                    process::exit(1);
                }
            }
        }
    }
}
