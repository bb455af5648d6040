use std::io::{self, BufRead, Lines, StdinLock};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    hint::Hinter,
    history::DefaultHistory,
    Context as ReadlineContext, Editor, Helper, Highlighter, Validator,
};

use crate::cli::core::{CliMode, CommandError, LoopControl, ShellContext};
use crate::cli::{io as cli_io, output};
use crate::errors::CliError;

/// Environment variable that switches the shell to non-interactive stdin mode.
pub const SCRIPT_MODE_ENV: &str = "FINANCE_TRACKER_CLI_SCRIPT";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_MODE_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;
    let mut input = match mode {
        CliMode::Interactive => {
            let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
            editor.set_helper(Some(CommandHelper::new(context.command_names())));
            output::info("Personal finance tracker. Type `help` for commands.");
            LineSource::Editor(Box::new(editor))
        }
        CliMode::Script => LineSource::Stdin(io::stdin().lock().lines()),
    };

    while let Some(line) = input.next_line(&context.prompt())? {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match handle_line(&mut context, line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err),
        }
    }
    Ok(())
}

/// Where command lines come from: the line editor or piped stdin.
enum LineSource {
    Editor(Box<Editor<CommandHelper, DefaultHistory>>),
    Stdin(Lines<StdinLock<'static>>),
}

impl LineSource {
    /// Next raw line, or `None` once the user or the script is done.
    fn next_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        match self {
            LineSource::Editor(editor) => match editor.readline(prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        editor.add_history_entry(line.trim()).ok();
                    }
                    Ok(Some(line))
                }
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                    output::info("Exiting shell.");
                    Ok(None)
                }
                Err(err) => Err(err.into()),
            },
            LineSource::Stdin(lines) => Ok(lines.next().transpose()?),
        }
    }
}

fn handle_line(context: &mut ShellContext, line: &str) -> Result<LoopControl, CommandError> {
    let tokens = match parse_command_line(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            cli_io::print_warning(err);
            return Ok(LoopControl::Continue);
        }
    };
    let Some((raw, rest)) = tokens.split_first() else {
        return Ok(LoopControl::Continue);
    };
    let args: Vec<&str> = rest.iter().map(String::as_str).collect();
    context.dispatch(&raw.to_lowercase(), raw, &args)
}

pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, shell_words::ParseError> {
    shell_words::split(input)
}

/// Tab completion and inline hints for command names.
#[derive(Helper, Highlighter, Validator)]
struct CommandHelper {
    commands: Vec<&'static str>,
}

impl CommandHelper {
    fn new(mut commands: Vec<&'static str>) -> Self {
        commands.sort_unstable();
        commands.dedup();
        Self { commands }
    }

    fn matching<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        let prefix = prefix.to_ascii_lowercase();
        self.commands
            .iter()
            .copied()
            .filter(move |name| name.starts_with(&prefix))
    }
}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let head = &line[..pos];
        // Arguments are free text; only the command word completes.
        if head.trim_start().contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }
        let start = head.len() - head.trim_start().len();
        let candidates = self
            .matching(&head[start..])
            .map(|name| Pair {
                display: name.to_string(),
                replacement: name.to_string(),
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;

    /// Greys in the rest of the command once the typed prefix is unambiguous.
    fn hint(&self, line: &str, pos: usize, _ctx: &ReadlineContext<'_>) -> Option<String> {
        if pos != line.len() || line.trim().is_empty() || line.contains(char::is_whitespace) {
            return None;
        }
        let mut found = self.matching(line);
        match (found.next(), found.next()) {
            (Some(name), None) => Some(name[line.len()..].to_string()),
            _ => None,
        }
    }
}
