//! FILENAME: app/bridge/src/lib.rs
// PURPOSE: Main library entry point (command bridge).
// CONTEXT: Hosts the core crates behind a line-delimited JSON protocol:
// one request per input line, one response per output line.

use std::io::{BufRead, Write};

pub mod api_types;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

pub use api_types::{
    AddFilterParams, BridgeRequest, BridgeResponse, ColumnMenuParams,
    ConvertDashboardFiltersParams, ConvertFiltersParams, RenderPivotParams, RenderPivotResponse,
};
pub use commands::{dispatch, handle_line, handle_request, COMMANDS};
pub use config::BridgeConfig;
pub use error::BridgeError;
pub use logging::{close_log_file, get_log_path, init_log_file, next_seq, write_log};

/// Applies the logging part of `config`.
pub fn init_logging(config: &BridgeConfig) -> Result<(), BridgeError> {
    logging::set_echo_to_stderr(config.echo_to_stderr);
    if let Some(path) = &config.log_path {
        let path = init_log_file(path)?;
        log_info!("BRIDGE", "log file {}", path.display());
    }
    Ok(())
}

/// Answers every non-blank line of `input` on `output`. Returns the number
/// of requests handled. A line that is not UTF-8 gets a failed response;
/// only I/O errors end the loop.
pub fn serve<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    config: &BridgeConfig,
) -> Result<usize, BridgeError> {
    let mut handled = 0;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        while matches!(buf.last(), Some(b'\n') | Some(b'\r')) {
            buf.pop();
        }

        let response = match String::from_utf8(std::mem::take(&mut buf)) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => handle_line(&line, config),
            Err(e) => {
                let e = BridgeError::from(e);
                log_error!("BRIDGE", "bad request line: {}", e);
                BridgeResponse::err(e.to_string())
            }
        };

        serde_json::to_writer(&mut output, &response)?;
        writeln!(output)?;
        output.flush()?;
        handled += 1;
    }
    Ok(handled)
}

/// Runs the bridge on stdin/stdout with configuration from the environment.
pub fn run() -> Result<(), BridgeError> {
    let config = BridgeConfig::from_env()?;
    logging::init_log_backend()?;
    init_logging(&config)?;
    log_info!("BRIDGE", "started date_wire_format={:?}", config.date_wire_format);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let handled = serve(stdin.lock(), stdout.lock(), &config)?;

    log_info!("BRIDGE", "stopped after {} requests", handled);
    Ok(())
}
