//! FILENAME: app/bridge/src/main.rs
// PURPOSE: Command-line entry point. Reads requests on stdin, answers on stdout.

fn main() {
    if let Err(e) = app_lib::run() {
        eprintln!("explorer-bridge: {}", e);
        std::process::exit(1);
    }
}
