/// catpal command-line entry point
///
/// Usage: `catpal [--config PATH] <binding> [label...]`
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use catpal::PaletteConfig;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let default_path = PaletteConfig::default_path();
    let mut stdout = std::io::stdout().lock();
    let args = std::env::args().skip(1);
    if let Err(e) = catpal::cli::execute(args, default_path.as_deref(), &mut stdout) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
