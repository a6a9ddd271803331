use std::io;

fn main() {
    cardtree_cli::logging::init_logging();
    let code = cardtree_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
