use std::io;

use library_manager::application::service::BookStore;
use library_manager::config::{Config, DEFAULT_LOG_FILTER};
use library_manager::infra::json_store::JsonCollectionRepository;
use library_manager::interface::menu::Menu;

fn main() -> anyhow::Result<()> {
    // stdoutはメニュー表示に使うため、ログはstderrへ
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env_and_args();
    tracing::info!(data_file = %config.data_file.display(), "starting library manager");

    let mut store = BookStore::open(JsonCollectionRepository::new(config.data_file));
    let stdin = io::stdin();
    Menu::new(&mut store, stdin.lock(), io::stdout()).run()
}
