//! cc-units CLI
//!
//! Reads one JSON request per line on stdin and writes one JSON response
//! per line on stdout. Logs go to stderr.
//!
//! Example:
//! ```text
//! {"id":1,"method":"convert","params":{"value":2048,"from":"KB","to":"MB"}}
//! {"id":1,"result":{"value":2}}
//! ```

mod config;
mod protocol;

use std::io::{self, BufRead, Write};
use tracing::{debug, error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::CliConfig;
use protocol::{handle_line, Response};

const SERVER_NAME: &str = "cc-units";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

fn init_tracing(config: &CliConfig) {
    // RUST_LOG wins over the configured filter
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(&config.log_filter)
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn write_response<W: Write>(out: &mut W, response: &Response, pretty: bool) -> io::Result<()> {
    let body = if pretty {
        serde_json::to_string_pretty(response)?
    } else {
        serde_json::to_string(response)?
    };
    writeln!(out, "{}", body)?;
    out.flush()
}

fn main() {
    let config = CliConfig::from_env();
    init_tracing(&config);

    info!(version = SERVER_VERSION, pretty = config.pretty, "{} started", SERVER_NAME);

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                debug!("stdin closed (EOF)");
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                debug!(bytes = line.len(), "received request");
                let response = handle_line(line);

                let mut stdout = io::stdout().lock();
                if let Err(e) = write_response(&mut stdout, &response, config.pretty) {
                    error!(error = %e, "failed to write response");
                    break;
                }
            }
            Err(e) => {
                error!(error = %e, "failed to read input");
                break;
            }
        }
    }

    info!("{} shutting down", SERVER_NAME);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_response_one_line() {
        let response = handle_line(r#"{"id":7,"method":"convert","params":{"value":2048,"from":"KB","to":"MB"}}"#);
        let mut buf = Vec::new();
        write_response(&mut buf, &response, false).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "{\"id\":7,\"result\":{\"value\":2}}\n");
    }

    #[test]
    fn test_write_error_response() {
        let response = handle_line("{");
        let mut buf = Vec::new();
        write_response(&mut buf, &response, false).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed["id"], serde_json::Value::Null);
        assert_eq!(parsed["error"]["code"], "PARSE_ERROR");
        assert!(parsed.get("result").is_none());
    }
}
