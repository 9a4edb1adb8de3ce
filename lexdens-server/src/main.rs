use std::io;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use clap::Parser;
use lexdens_core::words::{FileStore, NonLexicalWords, SeedStore, WordStore};

mod config;
mod error;
mod routes;
mod state;

use config::Config;
use state::SharedData;

/// Main entry point for the server.
///
/// Loads the non-lexical word snapshot once, shares it read-only between
/// workers and starts an Actix-web HTTP server.
///
/// # Notes
/// - Startup fails if the word store cannot be read or is empty.
/// - `PUT /admin/reload_words` is only useful with `--words-file`.
#[actix_web::main]
async fn main() -> io::Result<()> {
	let config = Config::parse();
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_level.as_str())).init();

	let store: Box<dyn WordStore> = match &config.words_file {
		Some(path) => Box::new(FileStore::new(path)),
		None => Box::new(SeedStore),
	};
	let words = NonLexicalWords::load(store.as_ref()).map_err(|e| {
		log::error!("Cannot start without a word list: {e}");
		io::Error::other(e)
	})?;
	log::info!("Loaded {} non-lexical words from {}", words.len(), store.describe());

	let reload_source = config.words_file.is_some().then_some(store);
	let shared_data = web::Data::new(SharedData::new(words, reload_source, config.limits()));

	log::info!("Listening on {}:{}", config.host, config.port);
	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.wrap(middleware::Logger::default())
			.app_data(shared_data.clone())
			.configure(routes::configure)
	})
		.bind((config.host.as_str(), config.port))?
		.run()
		.await
}
