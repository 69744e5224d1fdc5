use anyhow::Result;
use clap::Parser;
use gls::areas::git::GitCli;
use gls::areas::listing::Listing;
use gls::artifacts::layout::terminal::terminal_width;
use gls::artifacts::scan::options::{DEFAULT_CHANNEL_CAPACITY, ProbeOptions, ScanOptions};
use gls::commands::legend::show_legend;
use gls::commands::list::ListOptions;
use gls::{ColorChoice, DisplayMode, SortOrder};
use is_terminal::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gls",
    args_override_self = true,
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "List a directory with the git status of every subdirectory",
    long_about = "Lists the entries of a directory like ls, probing every subdirectory \
    concurrently with git: clean, dirty, without remote, failing to fetch, ahead of or \
    behind its upstream, or not under version control. \
    Fetching is the only operation that touches a repository.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "The directory to list (defaults to the current directory)")]
    path: Option<PathBuf>,
    #[arg(short, long, help = "Include entries whose name starts with a dot")]
    all: bool,
    #[arg(short, long, conflicts_with = "display", help = "Display results in one long list")]
    list: bool,
    #[arg(long, value_enum, help = "How to display results [default: grid]")]
    display: Option<DisplayMode>,
    #[arg(
        short,
        long,
        help = "Only show dirty repositories, this is fast because remotes are never checked"
    )]
    dirty: bool,
    #[arg(
        short,
        long = "state-sort",
        visible_alias = "statesort",
        conflicts_with = "sort",
        help = "Sort output by state instead of by name"
    )]
    state_sort: bool,
    #[arg(long, value_enum, help = "Order of the listed entries [default: name]")]
    sort: Option<SortOrder>,
    #[arg(short, long, help = "Verbose (debug) output on stderr")]
    verbose: bool,
    #[arg(short, long, help = "Terminal width to lay the grid out for")]
    width: Option<usize>,
    #[arg(short, long, help = "Maximum number of directories probed at once")]
    jobs: Option<usize>,
    #[arg(long, value_name = "SECS", help = "Give up on a git invocation after this many seconds")]
    timeout: Option<u64>,
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, help = "When to color entries")]
    color: ColorChoice,
    #[arg(long, help = "Print the color of every state and exit")]
    legend: bool,
    #[arg(long, env = "GLS_GIT", default_value = "git", help = "The git executable to run")]
    git: PathBuf,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn init_colors(choice: ColorChoice) {
    match choice {
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
        ColorChoice::Auto if !std::io::stdout().is_terminal() => {
            colored::control::set_override(false)
        }
        ColorChoice::Auto => {}
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);
    init_colors(cli.color);

    if cli.legend {
        return show_legend(&mut std::io::stdout());
    }

    let path = match cli.path {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    let git = GitCli::new(cli.git, cli.timeout.map(Duration::from_secs));
    let listing = Listing::new(&path, Box::new(std::io::stdout()), git)?;

    let opts = ListOptions {
        include_hidden: cli.all,
        display: if cli.list {
            DisplayMode::Detail
        } else {
            cli.display.unwrap_or_default()
        },
        sort: if cli.state_sort {
            SortOrder::State
        } else {
            cli.sort.unwrap_or_default()
        },
        scan: ScanOptions {
            probe: ProbeOptions {
                dirty_only: cli.dirty,
            },
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            max_concurrency: cli.jobs,
        },
        width: terminal_width(cli.width),
    };

    listing.list(&opts).await
}
