//! The interactive command loop.
//!
//! Commands operate on a [`Session`]: the current document, the current
//! path, and the file the session was started with. Every command failure
//! is reported on stderr and the loop continues -- nothing short of `exit`
//! or end of input terminates a session.
//!
//! When stdin is a terminal the loop runs on rustyline, with history and
//! tab completion of command names and object keys. When stdin is piped
//! the loop degrades to plain buffered lines so the binary is scriptable.

use std::cell::RefCell;
use std::io::{BufRead, IsTerminal};
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{bail, Context, Result};
use jedit_core::{
    child_keys, effective_path, mutate, resolve, JeditError, PathExpr, Value,
};
use rustyline::completion::Completer;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Editor, Helper};

/// Mutable state of one editing session.
struct Session {
    document: Value,
    path: PathExpr,
    file: Option<PathBuf>,
}

impl Session {
    fn prompt(&self) -> String {
        format!("{}> ", self.path)
    }
}

/// Command table: name plus the one-line help shown by `help`.
const COMMANDS: &[(&str, &str)] = &[
    ("pwd", "pwd -- display the current path"),
    ("show", "show [expr] -- display json at the current or specified path"),
    (
        "summary",
        "summary [expr] -- keys of an object, extent of an array, or a scalar value",
    ),
    ("edit", "edit <expr> -- change the current path (the target must exist)"),
    ("up", "up [n] -- move up n levels (default 1)"),
    ("top", "top -- jump back to the document root"),
    (
        "set",
        "set <expr> <json> -- set the path (`.` for current) to a JSON value",
    ),
    (
        "save",
        "save [file] -- write the document (sorted keys, 4-space indent)",
    ),
    ("help", "help [command] -- list commands or show one command's help"),
    ("exit", "exit -- leave the session"),
    ("quit", "quit -- leave the session"),
];

/// Commands whose first argument is a path expression, for completion.
const PATH_COMMANDS: &[&str] = &["show", "summary", "edit", "set"];

#[derive(PartialEq)]
enum Flow {
    Continue,
    Exit,
}

/// Run the command loop to completion.
pub fn run(document: Value, file: Option<PathBuf>) -> Result<()> {
    let session = Rc::new(RefCell::new(Session {
        document,
        path: PathExpr::root(),
        file,
    }));
    if std::io::stdin().is_terminal() {
        run_interactive(session)
    } else {
        run_piped(session)
    }
}

fn run_piped(session: Rc<RefCell<Session>>) -> Result<()> {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if dispatch(&mut session.borrow_mut(), &line) == Flow::Exit {
            return Ok(());
        }
    }
    // End of piped input behaves like ctrl-D.
    println!("exit");
    Ok(())
}

fn run_interactive(session: Rc<RefCell<Session>>) -> Result<()> {
    println!("jedit. Type help or ? to list commands.");
    let mut rl: Editor<ReplHelper, DefaultHistory> =
        Editor::new().context("Failed to initialize line editor")?;
    rl.set_helper(Some(ReplHelper {
        session: Rc::clone(&session),
    }));
    loop {
        let prompt = session.borrow().prompt();
        match rl.readline(&prompt) {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                if dispatch(&mut session.borrow_mut(), &line) == Flow::Exit {
                    return Ok(());
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => {
                println!("exit");
                return Ok(());
            }
            Err(err) => return Err(err).context("Failed to read from terminal"),
        }
    }
}

/// Parse one input line and execute it. Command failures are printed to
/// stderr; only `exit`/`quit` end the loop.
fn dispatch(session: &mut Session, line: &str) -> Flow {
    let line = line.trim();
    if line.is_empty() {
        return Flow::Continue;
    }
    let (command, arg) = match line.split_once(char::is_whitespace) {
        Some((command, arg)) => (command, arg.trim()),
        None => (line, ""),
    };

    let result = match command {
        "pwd" => {
            println!("{}", session.path);
            Ok(())
        }
        "show" => cmd_show(session, arg, false),
        "summary" => cmd_show(session, arg, true),
        "edit" => cmd_edit(session, arg),
        "up" => cmd_up(session, arg),
        "top" => {
            session.path = PathExpr::root();
            Ok(())
        }
        "set" => cmd_set(session, arg),
        "save" => cmd_save(session, arg),
        "help" | "?" => {
            cmd_help(arg);
            Ok(())
        }
        "exit" | "quit" => return Flow::Exit,
        other => Err(anyhow::anyhow!("unknown command `{other}` (try help)")),
    };

    if let Err(err) = result {
        eprintln!("{err:#}");
    }
    Flow::Continue
}

fn cmd_show(session: &Session, arg: &str, summary_only: bool) -> Result<()> {
    let matches = resolve(&session.document, &session.path, arg)?;
    if matches.is_empty() {
        let target = effective_path(&session.path, if arg.is_empty() { "." } else { arg })?;
        return Err(JeditError::NoMatch(target.to_string()).into());
    }
    for (_, node) in matches {
        if summary_only {
            print!("{}", summarize(node));
        } else {
            println!("{}", node.to_pretty()?);
        }
    }
    Ok(())
}

/// Compact rendering for `summary`: sorted keys for objects, `[0..N-1]`
/// extent for arrays, the bare value for scalars.
fn summarize(value: &Value) -> String {
    match value {
        Value::Object(pairs) => {
            let mut keys: Vec<&str> = pairs.iter().map(|(key, _)| key.as_str()).collect();
            keys.sort_unstable();
            keys.iter().map(|key| format!("{key}\n")).collect()
        }
        Value::Array(items) if items.is_empty() => "[]\n".to_string(),
        Value::Array(items) => format!("[0..{}]\n", items.len() - 1),
        Value::String(s) => format!("{s}\n"),
        other => format!("{}\n", other.to_json()),
    }
}

fn cmd_edit(session: &mut Session, arg: &str) -> Result<()> {
    if arg.is_empty() {
        bail!("usage: edit <expr>");
    }
    let matches = resolve(&session.document, &session.path, arg)?;
    match matches.into_iter().next() {
        Some((full_path, _)) => {
            session.path = full_path;
            Ok(())
        }
        None => {
            let target = effective_path(&session.path, arg)?;
            Err(JeditError::NoMatch(target.to_string()).into())
        }
    }
}

fn cmd_up(session: &mut Session, arg: &str) -> Result<()> {
    let levels = if arg.is_empty() {
        1
    } else {
        arg.parse::<usize>()
            .context("up takes a number of levels, e.g. `up 2`")?
    };
    session.path = session.path.up(levels);
    Ok(())
}

fn cmd_set(session: &mut Session, arg: &str) -> Result<()> {
    // Split off the path expression; everything after the first whitespace
    // run is the JSON literal, so values with spaces work.
    let (expr, raw) = match arg.split_once(char::is_whitespace) {
        Some((expr, raw)) if !raw.trim().is_empty() => (expr, raw.trim()),
        _ => bail!("usage: set <expr> <json-value>"),
    };
    session.document = mutate(&session.document, &session.path, expr, raw)?;
    log::debug!("set {expr} relative to {}", session.path);
    Ok(())
}

fn cmd_save(session: &mut Session, arg: &str) -> Result<()> {
    let target: PathBuf = if arg.is_empty() {
        session
            .file
            .clone()
            .ok_or_else(|| anyhow::anyhow!("no file associated with this session; use save <file>"))?
    } else {
        PathBuf::from(arg)
    };
    let mut text = session.document.to_pretty()?;
    text.push('\n');
    std::fs::write(&target, &text)
        .with_context(|| format!("Failed to write {}", target.display()))?;
    if session.file.is_none() {
        session.file = Some(target.clone());
    }
    log::debug!("saved {} bytes to {}", text.len(), target.display());
    println!("saved {}", target.display());
    Ok(())
}

fn cmd_help(arg: &str) {
    if arg.is_empty() {
        println!("Commands (help <command> for details):");
        let names: Vec<&str> = COMMANDS.iter().map(|(name, _)| *name).collect();
        println!("  {}", names.join("  "));
    } else {
        match COMMANDS.iter().find(|(name, _)| *name == arg) {
            Some((_, help)) => println!("{help}"),
            None => println!("no such command: {arg}"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tab completion
// ─────────────────────────────────────────────────────────────────────────────

/// rustyline helper: completes command names at the start of the line and
/// object keys inside the path argument of path-taking commands.
struct ReplHelper {
    session: Rc<RefCell<Session>>,
}

impl Completer for ReplHelper {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        let line = &line[..pos];
        match line.split_once(char::is_whitespace) {
            None => {
                let candidates = COMMANDS
                    .iter()
                    .map(|(name, _)| *name)
                    .filter(|name| name.starts_with(line))
                    .map(String::from)
                    .collect();
                Ok((0, candidates))
            }
            Some((command, _)) if PATH_COMMANDS.contains(&command) => {
                let token_start = line
                    .rfind(char::is_whitespace)
                    .map(|i| i + 1)
                    .unwrap_or(0);
                let token = &line[token_start..];
                Ok(complete_path(&self.session.borrow(), token, token_start))
            }
            Some(_) => Ok((pos, Vec::new())),
        }
    }
}

/// Resolve the already-typed path prefix and list matching child keys.
/// Returns the replacement start position and the candidate keys.
fn complete_path(session: &Session, token: &str, token_start: usize) -> (usize, Vec<String>) {
    // `$`-anchored tokens complete from the root; others from the current path.
    let (base, rest, rest_start) = if let Some(rest) = token.strip_prefix("$.") {
        (PathExpr::root(), rest, token_start + 2)
    } else if token == "$" {
        (PathExpr::root(), "", token_start + 1)
    } else {
        (session.path.clone(), token, token_start)
    };

    // Split the typed text into a resolvable parent and the partial key.
    let (parent_expr, partial, partial_start) = match rest.rfind('.') {
        Some(i) => (&rest[..i], &rest[i + 1..], rest_start + i + 1),
        None => ("", rest, rest_start),
    };
    let parent = if parent_expr.is_empty() {
        base
    } else {
        match PathExpr::parse(parent_expr) {
            Ok(parsed) => base.join(&parsed),
            Err(_) => return (partial_start, Vec::new()),
        }
    };
    let keys = child_keys(&session.document, &parent, partial);
    (partial_start, keys)
}

impl Hinter for ReplHelper {
    type Hint = String;
}

impl Highlighter for ReplHelper {}

impl Validator for ReplHelper {}

impl Helper for ReplHelper {}
