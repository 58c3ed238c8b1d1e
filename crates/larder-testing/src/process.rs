//! Background process management for `larder watch`.

use std::io::{BufRead, BufReader};
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{Receiver, channel};
use std::time::{Duration, Instant};

/// A background process whose stdout is read line by line on a helper
/// thread. The process is killed on drop.
pub struct BackgroundProcess {
    child: Child,
    lines: Option<Receiver<String>>,
}

impl BackgroundProcess {
    /// Spawn with piped stdout and stderr.
    pub fn spawn_piped(mut command: Command) -> std::io::Result<Self> {
        command.stdin(Stdio::null());
        command.stdout(Stdio::piped());
        command.stderr(Stdio::piped());
        let mut child = command.spawn()?;

        let lines = child.stdout.take().map(|stdout| {
            let (tx, rx) = channel();
            std::thread::spawn(move || {
                for line in BufReader::new(stdout).lines() {
                    let Ok(line) = line else { break };
                    if tx.send(line).is_err() {
                        break;
                    }
                }
            });
            rx
        });

        Ok(Self { child, lines })
    }

    /// Read stdout until a line contains `needle`. Returns every line read,
    /// or `None` on timeout or end of output.
    pub fn wait_for_line(&self, needle: &str, timeout: Duration) -> Option<Vec<String>> {
        let lines = self.lines.as_ref()?;
        let deadline = Instant::now() + timeout;
        let mut seen = Vec::new();

        loop {
            let remaining = deadline.checked_duration_since(Instant::now())?;
            let line = lines.recv_timeout(remaining).ok()?;
            let found = line.contains(needle);
            seen.push(line);
            if found {
                return Some(seen);
            }
        }
    }

    pub fn kill(&mut self) -> std::io::Result<()> {
        self.child.kill()
    }

    pub fn id(&self) -> u32 {
        self.child.id()
    }
}

impl Drop for BackgroundProcess {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
