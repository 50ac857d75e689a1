use std::io;

fn main() {
    holecard_cli::logging::init_logging();
    let code = holecard_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
