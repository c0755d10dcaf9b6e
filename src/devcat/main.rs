//! The `devcat` binary only invokes `cli::run()` and maps failure to an exit
//! code. Parsing, context wiring and printing live in `src/devcat/cli/`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
