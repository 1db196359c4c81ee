use std::io;

fn main() {
    drawodds_cli::logging::init_logging();
    let code = drawodds_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
