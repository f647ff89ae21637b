use crate::browser::{Browser, Notice};
use crate::clipboard::ClipboardWriter;
use crate::errors::BrowserError;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, BufRead, Write};
use tracing::{debug, error, trace, warn};

const PROMPT: &str = "branch-copier> ";

pub const HELP: &str = "\
Commands:
  open <dir>        Open project folder
  ext <list>        Include extensions (comma separated, empty for all)
  exclude <list>    Exclude folders containing (comma separated)
  search [query]    Filter files by name (no query clears the filter)
  ls                Show the file list
  select <n>        Select file n and show its preview
  preview           Show the preview of the selected file
  copy              Copy selected file content with header
  tree              Copy folder structure
  path <n>          Copy full path of file n
  help              Show this help
  quit              Leave the shell";

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Open(&'a str),
    Extensions(&'a str),
    Exclude(&'a str),
    Search(&'a str),
    List,
    Select(&'a str),
    Preview,
    CopyContents,
    CopyStructure,
    CopyPath(&'a str),
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_command(line: &str) -> Option<Command<'_>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (name, arg) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    let command = match name {
        "open" | "o" => Command::Open(arg),
        "ext" => Command::Extensions(arg),
        "exclude" => Command::Exclude(arg),
        "search" | "f" => Command::Search(arg),
        "ls" | "list" => Command::List,
        "select" | "s" => Command::Select(arg),
        "preview" | "p" => Command::Preview,
        "copy" | "c" => Command::CopyContents,
        "tree" | "t" => Command::CopyStructure,
        "path" => Command::CopyPath(arg),
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => Command::Unknown(other),
    };
    Some(command)
}

fn parse_index(arg: &str) -> Result<usize, String> {
    arg.parse::<usize>()
        .map_err(|_| format!("Expected a file number, got '{}'", arg))
}

/// Runs one command line. Returns `false` once the user asks to quit.
pub fn handle_line<C, W>(
    browser: &mut Browser<C>,
    line: &str,
    output: &mut W,
) -> Result<bool, BrowserError>
where
    C: ClipboardWriter,
    W: Write,
{
    let Some(command) = parse_command(line) else {
        return Ok(true);
    };
    trace!("Shell command: {:?}", command);

    match command {
        Command::Quit => return Ok(false),
        Command::Help => writeln!(output, "{}", HELP)?,
        Command::Unknown(name) => {
            writeln!(output, "Unknown command '{}'. Type 'help' for commands.", name)?
        }
        Command::Open(dir) => match browser.state_mut().open(dir) {
            Ok(()) => {
                writeln!(output, "{}", browser.state().title())?;
                print_list(browser, output)?;
            }
            Err(e) => print_error(output, &e)?,
        },
        Command::Extensions(list) => {
            browser.state_mut().set_extensions(list);
            print_list(browser, output)?;
        }
        Command::Exclude(list) => {
            browser.state_mut().set_exclusions(list);
            print_list(browser, output)?;
        }
        Command::Search(query) => {
            browser.state_mut().set_query(query);
            print_list(browser, output)?;
        }
        Command::List => print_list(browser, output)?,
        Command::Select(arg) => match parse_index(arg) {
            Ok(index) => match browser.state_mut().select_index(index).map(|_| ()) {
                Ok(()) => writeln!(output, "{}", browser.state().preview())?,
                Err(e) => print_error(output, &e)?,
            },
            Err(message) => writeln!(output, "{}", message)?,
        },
        Command::Preview => writeln!(output, "{}", browser.state().preview())?,
        Command::CopyContents => print_outcome(output, browser.copy_file_contents())?,
        Command::CopyStructure => print_outcome(output, browser.copy_structure())?,
        Command::CopyPath(arg) => match parse_index(arg) {
            Ok(index) => print_outcome(output, browser.copy_path(index))?,
            Err(message) => writeln!(output, "{}", message)?,
        },
    }
    Ok(true)
}

fn print_banner<C: ClipboardWriter, W: Write>(
    browser: &Browser<C>,
    output: &mut W,
) -> Result<(), BrowserError> {
    writeln!(output, "{}", browser.state().title())?;
    writeln!(output, "Type 'help' for commands.")?;
    Ok(())
}

/// Reads commands from `input` until `quit` or end of input, writing the
/// list, previews and notices to `output`.
pub fn run_shell<C, R, W>(
    browser: &mut Browser<C>,
    input: R,
    output: &mut W,
) -> Result<(), BrowserError>
where
    C: ClipboardWriter,
    R: BufRead,
    W: Write,
{
    print_banner(browser, output)?;

    for line in input.lines() {
        if !handle_line(browser, &line?, output)? {
            break;
        }
    }

    debug!("Shell session ended");
    Ok(())
}

/// Terminal session with line editing and history. Ctrl-C and Ctrl-D leave
/// the session.
pub fn run_interactive<C: ClipboardWriter>(browser: &mut Browser<C>) -> Result<(), BrowserError> {
    let mut editor = DefaultEditor::new()?;
    let mut stdout = io::stdout();
    print_banner(browser, &mut stdout)?;

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                error!("Failed to read command: {}", e);
                break;
            }
        };

        if !line.trim().is_empty() {
            if let Err(e) = editor.add_history_entry(line.as_str()) {
                warn!("Failed to record history: {}", e);
            }
        }
        if !handle_line(browser, &line, &mut stdout)? {
            break;
        }
    }

    debug!("Shell session ended");
    Ok(())
}

fn print_list<C: ClipboardWriter, W: Write>(
    browser: &Browser<C>,
    output: &mut W,
) -> Result<(), BrowserError> {
    let state = browser.state();
    let visible = state.visible_files();
    for (index, entry) in visible.iter().enumerate() {
        writeln!(output, "{:>4}  {}", index, entry.display_path())?;
    }
    writeln!(output, "{} of {} files shown", visible.len(), state.files().len())?;
    Ok(())
}

fn print_outcome<W: Write>(
    output: &mut W,
    outcome: Result<Notice, BrowserError>,
) -> Result<(), BrowserError> {
    match outcome {
        Ok(notice) => writeln!(output, "{}", notice)?,
        Err(e) => print_error(output, &e)?,
    }
    Ok(())
}

fn print_error<W: Write>(output: &mut W, err: &BrowserError) -> Result<(), BrowserError> {
    writeln!(output, "{}: {}", err.title(), err)?;
    Ok(())
}
