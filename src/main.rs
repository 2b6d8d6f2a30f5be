fn main() {
    if let Err(err) = galaxy_cards::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
