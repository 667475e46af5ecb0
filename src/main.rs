fn main() {
    tailor::app::cli::run();
}
