fn main() {
    baseline::app::cli::run();
}
