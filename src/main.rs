use std::env;

use actix_web::{App, HttpServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use folio::{routes, state::State, Config};

const DEFAULT_CONFIG: &str = "folio.toml";

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("folio=info".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_path = env::var("FOLIO_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG.to_owned());
    let config = Config::load(&config_path)?;
    let address = config.bind_address();

    let state = State::load(config)?;

    tracing::info!("++ Serving folio on {}:{}", address.0, address.1);

    HttpServer::new(move || App::new().configure(routes::configure(state.clone())))
        .bind(address)?
        .run()
        .await?;

    Ok(())
}
