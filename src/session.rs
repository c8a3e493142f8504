use std::io::{BufRead, Write};

use crate::report::{ReportFormat, render_view};
use crate::view::lookup::all_tabs;
use crate::view::{Dashboard, Tab, ViewError, ViewState};

const HELP: &str = "commands: tab <id|label>, filter [text], show, reset, help, quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Tab(Tab),
    Filter(String),
    Show,
    Reset,
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    View(#[from] ViewError),
    #[error("render error: {0}")]
    Render(#[from] serde_json::Error),
}

pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim_start().trim_end_matches(['\r', '\n']);
    if line.trim_end().is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    // Filter text stays verbatim, trailing spaces included.
    let (word, raw) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = raw.trim();
    let cmd = match word.to_ascii_lowercase().as_str() {
        "tab" => {
            if rest.is_empty() {
                return Err("missing value for tab".to_string());
            }
            Command::Tab(rest.parse()?)
        }
        "filter" => Command::Filter(raw.to_string()),
        "show" | "print" => Command::Show,
        "reset" => Command::Reset,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command: {other}")),
    };
    Ok(Some(cmd))
}

pub fn apply_command(state: &mut ViewState, cmd: &Command) {
    match cmd {
        Command::Tab(tab) => state.select(*tab),
        Command::Filter(text) => state.set_filter(text.clone()),
        Command::Reset => state.reset(),
        Command::Show | Command::Help | Command::Quit => {}
    }
}

pub fn run_session<R: BufRead, W: Write>(
    dashboard: &Dashboard<'_>,
    input: R,
    output: &mut W,
    format: ReportFormat,
) -> Result<ViewState, SessionError> {
    let mut state = ViewState::default();
    for line in input.lines() {
        let line = line?;
        let cmd = match parse_command(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(msg) => {
                tracing::debug!("rejected session input: {line}");
                writeln!(output, "error: {msg}")?;
                continue;
            }
        };
        apply_command(&mut state, &cmd);
        match cmd {
            Command::Show => {
                let view = dashboard.render(&state)?;
                output.write_all(render_view(&view, format)?.as_bytes())?;
            }
            Command::Help => {
                writeln!(output, "{HELP}")?;
                let tabs = all_tabs()
                    .iter()
                    .map(|d| format!("{} ({})", d.id, d.label))
                    .collect::<Vec<_>>();
                writeln!(output, "tabs: {}", tabs.join(", "))?;
            }
            Command::Quit => break,
            Command::Tab(_) | Command::Filter(_) | Command::Reset => {
                writeln!(
                    output,
                    "tab={} ({}) filter={:?}",
                    state.tab,
                    state.tab.label(),
                    state.filter
                )?;
            }
        }
    }
    output.flush()?;
    Ok(state)
}

#[cfg(test)]
#[path = "../tests/src_inline/session.rs"]
mod tests;
