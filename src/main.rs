use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::EnvFilter;

use tabdb::cli::Cli;
use tabdb::sql::split_statements;
use tabdb::Session;

const PROMPT: &str = "tabdb> ";

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();
    init_logging(&cli.log_level);

    let mut session = Session::open(&cli.root)?;
    info!(root = %session.catalog().root().display(), "opened data root");

    if let Some(database) = &cli.database {
        let response = session.execute(&format!("USE {};", database));
        if !response.is_ok() {
            eprintln!("{}", response);
            return Ok(ExitCode::FAILURE);
        }
    }

    if let Some(query) = &cli.query {
        // Non-interactive mode
        Ok(run_query(&mut session, query))
    } else {
        run_repl(&mut session)?;
        Ok(ExitCode::SUCCESS)
    }
}

fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Runs every statement in `query`, printing one response each. Trailing
/// text without a terminator is run too, so it reports the missing `;`.
fn run_query(session: &mut Session, query: &str) -> ExitCode {
    let (statements, rest) = split_statements(query);
    let rest = rest.trim();

    let mut failed = false;
    for statement in statements.into_iter().chain((!rest.is_empty()).then_some(rest)) {
        let response = session.execute(statement);
        failed |= !response.is_ok();
        println!("{}", response);
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Reads statements from stdin. Input is buffered across lines until a
/// `;` outside quotes completes a statement.
fn run_repl(session: &mut Session) -> io::Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut stdout = io::stdout();
    let mut buffer = String::new();

    if interactive {
        write!(stdout, "{}", PROMPT)?;
        stdout.flush()?;
    }

    for line in stdin.lock().lines() {
        buffer.push_str(&line?);
        buffer.push('\n');

        let (statements, rest) = split_statements(&buffer);
        for statement in statements {
            writeln!(stdout, "{}", session.execute(statement))?;
        }
        buffer = rest.to_string();

        if interactive {
            write!(stdout, "{}", PROMPT)?;
            stdout.flush()?;
        }
    }

    // end of input with an unterminated statement
    let rest = buffer.trim();
    if !rest.is_empty() {
        writeln!(stdout, "{}", session.execute(rest))?;
    }
    Ok(())
}
