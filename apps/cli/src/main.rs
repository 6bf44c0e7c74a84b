fn main() {
    if let Err(error) = quiz_cli::run() {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}
