//! Version command

/// Run the version command.
pub fn run() {
    println!("gallery {}", env!("CARGO_PKG_VERSION"));
}
