use clap::Parser;
use u_cutwidth::cli::Cli;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = cli.run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
