use log::error;
use server::config::Config;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let result = match Config::from_env() {
        Ok(config) => server::run(config).await,
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        error!("{e}");
        std::process::exit(1);
    }
}
