//! Line-delimited JSON transport: one request per input line, one response
//! per output line.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};
use uast_core::protocol::Request;

use crate::driver::Driver;

/// Counters for one transport session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServeStats {
    pub handled: u64,
    pub skipped: u64,
}

/// Serve requests from `input` until end of input. Malformed lines are
/// logged and skipped; only I/O failures end the session early.
pub fn serve<R: BufRead, W: Write>(
    driver: &Driver,
    input: R,
    mut output: W,
) -> io::Result<ServeStats> {
    let mut stats = ServeStats::default();

    for (index, line) in input.split(b'\n').enumerate() {
        let line = line?;
        if line.trim_ascii().is_empty() {
            continue;
        }
        debug!(line = index + 1, request = %String::from_utf8_lossy(&line), "raw request");

        let request: Request = match serde_json::from_slice(&line) {
            Ok(request) => request,
            Err(e) => {
                warn!(line = index + 1, error = %e, "skipping malformed request");
                stats.skipped += 1;
                continue;
            }
        };

        let response = driver.handle(&request);
        serde_json::to_writer(&mut output, &response)?;
        output.write_all(b"\n")?;
        output.flush()?;
        stats.handled += 1;
    }

    info!(handled = stats.handled, skipped = stats.skipped, "input closed");
    Ok(stats)
}
