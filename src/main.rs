fn main() {
    pagefetch::cli::run();
}
