use dotenv::dotenv;
use stardigger::infra::DefaultObserver;
use stardigger::{Board, Config, Game, StarDigger};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("stardigger=debug,info"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(true)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("setting default subscriber failed");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    init_logging();

    let config = Config::from_env()?;
    tracing::info!("Playing {}", config.board.display());

    let board = Board::load(&config.board)?;
    let mut game = Game::new(
        board,
        StarDigger::new(),
        DefaultObserver::new(config.show_map),
    );

    let outcome = game.run(config.max_turns);
    if !outcome.is_win() {
        return Err(format!("{:?}", outcome).into());
    }

    Ok(())
}
