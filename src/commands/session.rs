//! Line-oriented interactive session

use crate::commands::interpreter::SmartOfficeSystem;
use std::io::{self, BufRead, Write};
use tracing::info;

/// Printed once when a session starts
pub const WELCOME_BANNER: &str = "Welcome to the Smart Office Facility Management System!";

/// Printed after the welcome banner
pub const INSTRUCTIONS: &str = "Enter commands to interact with the system (type 'exit' to quit):";

/// Printed once when a session ends
pub const FAREWELL_BANNER: &str = "Thank you for using the Smart Office Facility Management System!";

/// Counters collected over one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Lines processed as commands
    pub commands: usize,
    /// Commands that produced an error message
    pub failures: usize,
}

impl SessionStats {
    /// Commands that succeeded
    pub fn successes(&self) -> usize {
        self.commands - self.failures
    }
}

/// Read commands from `input` until `exit` or end of input
///
/// Each result is written to `output` on its own line, after `prompt`. Bytes
/// that are not valid UTF-8 are replaced, so such a line is answered like any
/// other unrecognised command.
pub fn run_session<R, W>(
    system: &mut SmartOfficeSystem,
    mut input: R,
    mut output: W,
    prompt: &str,
) -> io::Result<SessionStats>
where
    R: BufRead,
    W: Write,
{
    let mut stats = SessionStats::default();
    let mut buffer = Vec::new();

    writeln!(output, "{}", WELCOME_BANNER)?;
    writeln!(output, "{}", INSTRUCTIONS)?;

    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        buffer.clear();
        if input.read_until(b'\n', &mut buffer)? == 0 {
            // End of input: finish the prompt line before the banner
            writeln!(output)?;
            break;
        }

        let line = String::from_utf8_lossy(&buffer);
        let line = line.trim_end_matches(&['\n', '\r'][..]);
        if line.trim().eq_ignore_ascii_case("exit") {
            break;
        }

        stats.commands += 1;
        let reply = system.respond(line);
        if reply.failed {
            stats.failures += 1;
        }
        writeln!(output, "{}", reply.message)?;
    }

    writeln!(output, "{}", FAREWELL_BANNER)?;
    output.flush()?;

    info!(commands = stats.commands, failures = stats.failures, "Session finished");
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str) -> (String, SessionStats) {
        let mut system = SmartOfficeSystem::default();
        let mut output = Vec::new();
        let stats = run_session(&mut system, Cursor::new(script), &mut output, "> ").unwrap();
        (String::from_utf8(output).unwrap(), stats)
    }

    #[test]
    fn test_exit_ends_session() {
        let (transcript, stats) = run("config room count 1\nEXIT\nroom status 1\n");

        assert_eq!(
            transcript,
            format!(
                "{}\n{}\n> Office configured with 1 meeting rooms: Room 1\n> {}\n",
                WELCOME_BANNER, INSTRUCTIONS, FAREWELL_BANNER
            )
        );
        assert_eq!(stats, SessionStats { commands: 1, failures: 0 });
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (transcript, stats) = run("room status 1");

        assert!(transcript.contains("> Room 1 does not exist.\n"));
        assert!(transcript.ends_with(&format!("> \n{}\n", FAREWELL_BANNER)));
        assert_eq!(stats.failures, 1);
        assert_eq!(stats.successes(), 0);
    }

    #[test]
    fn test_invalid_utf8_line_is_answered() {
        let mut system = SmartOfficeSystem::default();
        let mut output = Vec::new();
        let script: &[u8] = b"config room count 1\n\xff\xfe\nroom status 1\nexit\n";
        let stats = run_session(&mut system, script, &mut output, "> ").unwrap();

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("> Invalid command. Please try again.\n"));
        assert!(transcript.contains("> Room 1 status: Unoccupied\n"));
        assert!(transcript.ends_with(&format!("> {}\n", FAREWELL_BANNER)));
        assert_eq!(stats, SessionStats { commands: 3, failures: 1 });
    }

    #[test]
    fn test_crlf_line_endings() {
        let (transcript, stats) = run("config room count 1\r\nroom status 1\r\nexit\r\n");

        assert!(transcript.contains("> Room 1 status: Unoccupied\n"));
        assert_eq!(stats, SessionStats { commands: 2, failures: 0 });
    }

    #[test]
    fn test_custom_prompt() {
        let mut system = SmartOfficeSystem::default();
        let mut output = Vec::new();
        run_session(&mut system, Cursor::new("exit\n"), &mut output, "office$ ").unwrap();

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains(&format!("office$ {}", FAREWELL_BANNER)));
    }
}
