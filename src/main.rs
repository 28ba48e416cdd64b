use clap::Parser;
use techmaster::{Args, Config, TechMaster, logging};

fn main() {
    let config = Config::from(Args::parse());
    let _guard = logging::init(&config.log_dir, &config.log_level);
    tracing::info!(?config, "starting");

    let quiz = match TechMaster::from_config(&config) {
        Ok(quiz) => quiz,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("Error starting quiz: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = quiz.run() {
        tracing::error!("{e}");
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
