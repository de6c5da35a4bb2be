fn main() {
    crashgen::cli::run();
}
