//! `bookclub` terminal client. Each invocation is one page load.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use bookclub_client::error::{isolated, GENERIC_ERROR};
use bookclub_client::preferences::Consent;
use bookclub_client::render;
use bookclub_client::toast::Toast;
use bookclub_client::toast::ToastKind;
use bookclub_client::validation::{LoginForm, RegistrationForm};
use bookclub_client::view::{Section, SectionContent, View};
use bookclub_client::{App, ClientConfig, ClientError, FileStore};
use clap::{Parser, Subcommand, ValueEnum};
use time::OffsetDateTime;
use tracing::{debug, error};

#[derive(Parser)]
#[command(name = "bookclub")]
#[command(about = "Terminal client for the BookClub demo")]
struct Args {
    /// Endpoint base URL (overrides BOOKCLUB_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Directory holding the local store (overrides BOOKCLUB_STATE_DIR)
    #[arg(long)]
    state_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show the current screen
    Status,
    /// Sign in
    Login {
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Create an account
    Register {
        #[arg(long, default_value = "")]
        username: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        first_name: String,
        #[arg(long, default_value = "")]
        last_name: String,
        #[arg(long, default_value = "")]
        password: String,
        #[arg(long, default_value = "")]
        password_confirm: String,
        #[arg(long)]
        accept_terms: bool,
    },
    /// Sign out
    Logout,
    /// Open a section
    View { section: Section },
    /// Search books and clubs
    Search { query: String },
    /// List notifications
    Notifications {
        /// Mark all as read after listing
        #[arg(long)]
        mark_read: bool,
    },
    /// Cycle the colour theme
    Theme,
    /// Record the cookie decision
    Cookies { decision: CookieDecision },
    /// Advance the onboarding tour
    Tour {
        #[arg(long)]
        skip: bool,
        /// Start the tour again
        #[arg(long, conflicts_with = "skip")]
        restart: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CookieDecision {
    Accept,
    Decline,
}

impl From<CookieDecision> for Consent {
    fn from(decision: CookieDecision) -> Self {
        match decision {
            CookieDecision::Accept => Consent::Accepted,
            CookieDecision::Decline => Consent::Declined,
        }
    }
}

fn config_from(args: &Args) -> Result<ClientConfig, ClientError> {
    let mut config = ClientConfig::from_env()?;
    if let Some(url) = &args.api_url {
        config = config.with_api_url(url)?;
    }
    if let Some(dir) = &args.state_dir {
        config = config.with_state_dir(dir.clone());
    }
    Ok(config)
}

/// Apply one command; the returned text is printed before the screen.
async fn apply(
    app: &mut App<FileStore>,
    command: Command,
) -> Result<(Option<SectionContent>, String), ClientError> {
    let mut extra = String::new();

    let content = match command {
        Command::Status => match app.view() {
            View::Authenticated(section) => Some(app.navigate(section).await?),
            View::Welcome => None,
        },
        Command::Login { email, password } => {
            app.login(&LoginForm { email, password }).await?;
            feed_if_signed_in(app).await?
        }
        Command::Register {
            username,
            email,
            first_name,
            last_name,
            password,
            password_confirm,
            accept_terms,
        } => {
            let form = RegistrationForm {
                username,
                email,
                first_name,
                last_name,
                password,
                password_confirm,
                accept_terms,
            };
            app.register(&form).await?;
            feed_if_signed_in(app).await?
        }
        Command::Logout => {
            app.logout()?;
            None
        }
        Command::View { section } => Some(app.navigate(section).await?),
        Command::Search { query } => {
            let result = app.search(&query)?;
            extra = render::suggestions(&result, &query);
            None
        }
        Command::Notifications { mark_read } => {
            if app.user().is_none() {
                return Err(ClientError::SignedOut);
            }
            extra = render::notifications(app.notifications(), OffsetDateTime::now_utc());
            if mark_read {
                app.mark_notifications_read();
            }
            None
        }
        Command::Theme => {
            let theme = app.toggle_theme()?;
            debug!(theme = theme.as_str(), resolved = ?app.resolved_theme(), "theme toggled");
            None
        }
        Command::Cookies { decision } => {
            app.decide_cookies(decision.into())?;
            None
        }
        Command::Tour { skip, restart } => {
            if restart {
                app.start_onboarding();
            } else if skip {
                app.skip_onboarding()?;
            } else {
                app.next_onboarding_step()?;
            }
            None
        }
    };

    Ok((content, extra))
}

async fn feed_if_signed_in(
    app: &mut App<FileStore>,
) -> Result<Option<SectionContent>, ClientError> {
    match app.user() {
        Some(_) => Ok(Some(app.navigate(Section::Feed).await?)),
        None => Ok(None),
    }
}

fn generic_toast(message: String) -> String {
    render::toast_lines(&[Toast {
        kind: ToastKind::Error,
        message,
    }])
}

async fn page_load(args: Args) -> String {
    let config = match config_from(&args) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid client configuration");
            return generic_toast(GENERIC_ERROR.to_string());
        }
    };

    let store = match FileStore::open(&config.state_dir) {
        Ok(store) => store,
        Err(e) => {
            error!(error = %e, "failed to open local store");
            return generic_toast(GENERIC_ERROR.to_string());
        }
    };

    let mut app = match App::start(&config, store).await {
        Ok(app) => app,
        Err(e) => {
            error!(error = %e, "failed to start");
            return generic_toast(e.user_message());
        }
    };

    let command = args.command.unwrap_or(Command::Status);
    let task = isolated(async move {
        let result = apply(&mut app, command).await;
        (app, result)
    });
    let (mut app, result) = match task.await {
        Ok(finished) => finished,
        Err(e) => {
            error!(error = %e, "command panicked");
            return generic_toast(e.user_message());
        }
    };
    let (content, extra) = match result {
        Ok(result) => result,
        Err(e) => {
            error!(error = %e, "command failed");
            app.toasts_mut().error(e.user_message());
            (None, String::new())
        }
    };

    let mut out = extra;
    out.push_str(&render::screen(&mut app, content.as_ref()));
    out
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let output = page_load(args).await;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("failed to write to stdout")?;
    stdout.flush().context("failed to flush stdout")?;
    Ok(())
}
