use clap::Parser;
use jackc_drv::Cli;

fn main() {
    jackc_drv::init_logging();
    let cli = Cli::parse();
    if let Err(err) = jackc_drv::run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
