use clap::Parser;
use wtms_merger::cli::args::Args;
use wtms_merger::cli::commands;

fn main() {
    let args = Args::parse();

    if let Err(e) = commands::run(args) {
        eprintln!("Error: {}", e);

        // Surface the error chain for wrapped failures
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            eprintln!("  Caused by: {}", cause);
            source = cause.source();
        }
        std::process::exit(1);
    }
}
