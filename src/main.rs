fn main() {
    if let Err(e) = schoolstats::cli::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
