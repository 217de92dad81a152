//! Interactive command prompt
//!
//! The presentation layer of the planner: reads one line per cycle, feeds it
//! to the coordinator, prints the result message. All command semantics live
//! below this layer.

use std::io::{self, BufRead, Write};

use crate::application::CommandExecutor;
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::Settings;
use crate::infrastructure::StorageError;

pub fn run(executor: &mut CommandExecutor, settings: &Settings) -> CliResult<()> {
    output::header(&format!(
        "modplan {} — type help to see commands, exit to quit",
        env!("CARGO_PKG_VERSION")
    ));

    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        print!("{}", settings.prompt);
        io::stdout()
            .flush()
            .map_err(|e| StorageError::io("flush prompt", e))?;

        input.clear();
        let bytes = stdin
            .lock()
            .read_line(&mut input)
            .map_err(|e| StorageError::io("read command line", e))?;
        if bytes == 0 {
            // EOF
            break;
        }

        let text = input.trim();
        if text.is_empty() {
            continue;
        }

        match executor.execute(text) {
            Ok(result) => {
                output::info(&result.message);
                if result.exit {
                    break;
                }
            }
            Err(e) => output::error(&e),
        }
    }
    Ok(())
}
