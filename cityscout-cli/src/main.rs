//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    env_logger::init();
    if let Err(err) = cityscout_cli::run() {
        eprintln!("cityscout: {err}");
        std::process::exit(1);
    }
}
