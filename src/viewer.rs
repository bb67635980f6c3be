use crate::catalog::{Catalog, CatalogError};
use crate::navigator::{Advance, Direction, Navigator};
use log::{error, info};
use std::future::Future;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const HELP: &str = "\
commands:
  prev <n>   older comic in series n   (alias: p)
  next <n>   newer comic in series n   (alias: n)
  show [n]   show series n, or all     (alias: s)
  list       list series               (alias: l)
  quit                                 (alias: q)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Move(usize, Direction),
    Show(Option<usize>),
    List,
    Help,
    Quit,
}

impl Input {
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let command = words.next()?.to_lowercase();
        let index = match words.next() {
            Some(w) => Some(w.parse::<usize>().ok()?),
            None => None,
        };
        if words.next().is_some() {
            return None;
        }
        let input = match (command.as_str(), index) {
            ("prev" | "p", Some(i)) => Input::Move(i, Direction::Older),
            ("next" | "n", Some(i)) => Input::Move(i, Direction::Newer),
            ("show" | "s", i) => Input::Show(i),
            ("list" | "l" | "ls", None) => Input::List,
            ("help" | "h" | "?", None) => Input::Help,
            ("quit" | "q" | "exit", None) => Input::Quit,
            _ => return None,
        };
        Some(input)
    }
}

/// Carries out one command, writing whatever the user should see.
pub fn apply<W: Write>(nav: &mut Navigator, input: Input, out: &mut W) -> std::io::Result<()> {
    if !matches!(input, Input::Help | Input::Quit) && !nav.is_loaded() {
        return writeln!(out, "catalog not loaded yet");
    }
    match input {
        Input::Move(i, direction) => match nav.advance(i, direction) {
            Advance::NotLoaded => writeln!(out, "catalog not loaded yet"),
            Advance::UnknownSeries => writeln!(out, "no series {}", i),
            Advance::Moved { .. } | Advance::NoOlder | Advance::NoNewer => show(nav, i, out),
        },
        Input::Show(Some(i)) => show(nav, i, out),
        Input::Show(None) => {
            for slot in nav.slots() {
                writeln!(out, "{}", slot)?;
            }
            Ok(())
        }
        Input::List => {
            for slot in nav.slots() {
                writeln!(out, "{:>3}  {}", slot.id, slot.series_title)?;
            }
            Ok(())
        }
        Input::Help | Input::Quit => writeln!(out, "{}", HELP),
    }
}

fn show<W: Write>(nav: &Navigator, i: usize, out: &mut W) -> std::io::Result<()> {
    match nav.slot(i) {
        Some(slot) => write!(out, "{}", slot),
        None => writeln!(out, "no series {}", i),
    }
}

/// Runs an interactive session. The catalog loads in the background while
/// commands are read; commands that arrive first are dropped.
pub async fn session<L, R, W>(load: L, input: R, out: &mut W) -> anyhow::Result<Navigator>
where
    L: Future<Output = Result<Catalog, CatalogError>>,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut nav = Navigator::new();
    let mut lines = input.lines();
    let mut loading = true;
    tokio::pin!(load);

    loop {
        tokio::select! {
            biased;
            result = &mut load, if loading => {
                loading = false;
                match result {
                    Ok(catalog) => {
                        info!("Catalog ready");
                        nav.load(catalog);
                        writeln!(out, "{} series loaded, type help for commands", nav.slots().len())?;
                    }
                    Err(e) => error!("Catalog unavailable: {}", e),
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    continue;
                }
                match Input::parse(&line) {
                    Some(Input::Quit) => break,
                    Some(input) => apply(&mut nav, input, out)?,
                    None => writeln!(out, "{}", HELP)?,
                }
            }
        }
    }

    Ok(nav)
}
