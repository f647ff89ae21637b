use branch_copier::browser::{Browser, Notice};
use branch_copier::clipboard::{ClipboardWriter, StdoutClipboard, SystemClipboard};
use branch_copier::errors::BrowserError;
use branch_copier::filter::{FilterConfig, DEFAULT_EXCLUDE_SUBSTRINGS};
use branch_copier::logger::initialize_logger;
use branch_copier::shell::run_interactive;
use branch_copier::state::BrowserState;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    #[arg(long, global = true, help = "Print copied text to stdout instead of the clipboard")]
    stdout: bool,
    #[command(subcommand)]
    cmd: SubCommands,
}

#[derive(Subcommand, Debug, Clone)]
enum SubCommands {
    /// List files under a project folder
    List(ListArgs),
    /// Print the contents of a listed file
    Preview(FileArgs),
    /// Copy a file's contents with a relative-path heading
    CopyFile(FileArgs),
    /// Copy the folder structure
    CopyStructure(RootArgs),
    /// Copy the full path of a listed file
    CopyPath(FileArgs),
    /// Browse a project folder interactively
    Shell(ShellArgs),
}

#[derive(Args, Debug, Clone)]
struct FilterArgs {
    #[arg(
        short = 'e',
        long = "ext",
        env = "BRANCH_COPIER_EXTENSIONS",
        default_value = "",
        help = "Include extensions, comma separated (e.g. '.rs,.toml')"
    )]
    extensions: String,
    #[arg(
        short = 'x',
        long,
        env = "BRANCH_COPIER_EXCLUDE",
        default_value = DEFAULT_EXCLUDE_SUBSTRINGS,
        help = "Exclude folders whose path contains any of these, comma separated"
    )]
    exclude: String,
}

impl FilterArgs {
    fn to_config(&self) -> FilterConfig {
        FilterConfig::new(&self.extensions, &self.exclude)
    }
}

#[derive(Args, Debug, Clone)]
struct RootArgs {
    root: PathBuf,
    #[command(flatten)]
    filters: FilterArgs,
}

#[derive(Args, Debug, Clone)]
struct ListArgs {
    root: PathBuf,
    #[command(flatten)]
    filters: FilterArgs,
    #[arg(short = 's', long, default_value = "", help = "Filter files by name")]
    search: String,
    #[arg(long, help = "Print the list as JSON")]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct FileArgs {
    root: PathBuf,
    #[arg(help = "File path, absolute or relative to the root")]
    file: PathBuf,
    #[command(flatten)]
    filters: FilterArgs,
}

#[derive(Args, Debug, Clone)]
struct ShellArgs {
    root: Option<PathBuf>,
    #[command(flatten)]
    filters: FilterArgs,
}

fn open_state(root: &Path, filters: &FilterArgs) -> Result<BrowserState, BrowserError> {
    let mut state = BrowserState::new(filters.to_config());
    state.open(root)?;
    Ok(state)
}

fn clipboard(to_stdout: bool) -> Result<Box<dyn ClipboardWriter>, BrowserError> {
    if to_stdout {
        debug!("Writing copies to stdout");
        return Ok(Box::new(StdoutClipboard));
    }
    Ok(Box::new(SystemClipboard::new()?))
}

fn run(cli_args: CliArgs) -> Result<Option<Notice>, BrowserError> {
    match cli_args.cmd {
        SubCommands::List(args) => {
            let mut state = open_state(&args.root, &args.filters)?;
            state.set_query(&args.search);
            let visible = state.visible_files();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&visible)?);
            } else {
                for entry in &visible {
                    println!("{}", entry.display_path());
                }
            }
            info!("{} of {} files shown", visible.len(), state.files().len());
            Ok(None)
        }
        SubCommands::Preview(args) => {
            let mut state = open_state(&args.root, &args.filters)?;
            state.select_path(&args.file)?;
            println!("{}", state.preview());
            Ok(None)
        }
        SubCommands::CopyFile(args) => {
            let mut state = open_state(&args.root, &args.filters)?;
            state.select_path(&args.file)?;
            let mut browser = Browser::new(state, clipboard(cli_args.stdout)?);
            browser.copy_file_contents().map(Some)
        }
        SubCommands::CopyStructure(args) => {
            let state = open_state(&args.root, &args.filters)?;
            let mut browser = Browser::new(state, clipboard(cli_args.stdout)?);
            browser.copy_structure().map(Some)
        }
        SubCommands::CopyPath(args) => {
            let mut state = open_state(&args.root, &args.filters)?;
            state.select_path(&args.file)?;
            let mut browser = Browser::new(state, clipboard(cli_args.stdout)?);
            browser.copy_selected_path().map(Some)
        }
        SubCommands::Shell(args) => {
            let mut state = BrowserState::new(args.filters.to_config());
            if let Some(root) = &args.root {
                state.open(root)?;
            }
            let mut browser = Browser::new(state, clipboard(cli_args.stdout)?);
            run_interactive(&mut browser)?;
            Ok(None)
        }
    }
}

fn main() {
    let cli_args = CliArgs::parse();
    initialize_logger();

    match run(cli_args) {
        Ok(Some(notice)) => info!("{}", notice.message),
        Ok(None) => {}
        Err(e) => {
            error!("{}: {}", e.title(), e);
            std::process::exit(1);
        }
    }
}
