use std::env;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Instant;

use actix_cors::Cors;
use actix_web::{get, middleware, put, web, App, HttpResponse, HttpServer, Responder};

use log::{info, warn};
use serde::{Deserialize, Serialize};
use rs_occ_core::ranking::{rank, RankedWord};
use rs_occ_core::{MineError, Miner, MiningOptions, NameCorpus};

/// Folder holding the name lists, overridden by `RS_OCC_DATA`
const DEFAULT_DATA: &str = "./data";
/// Name list loaded at startup, overridden by `RS_OCC_NAMES`
const DEFAULT_NAMES: &str = "names";
/// Default bind address, overridden by `RS_OCC_BIND`
const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Struct representing query parameters for the `/v1/occurrences` endpoint
#[derive(Deserialize)]
struct OccurrenceParams {
	min_length: Option<usize>,
	min_occurrences: Option<usize>,
	top: Option<usize>
}

#[derive(Deserialize)]
struct NamesQuery {
	name: Option<String>
}

#[derive(Serialize)]
struct OccurrenceResponse {
	total_names: usize,
	elapsed_ms: u128,
	entries: Vec<RankedWord>
}

struct SharedData {
	data_dir: PathBuf,
	corpus: Arc<NameCorpus>
}

/// Resolves a name list under the data folder: `<data_dir>/<name>.txt`.
///
/// Returns `None` unless `name` is made only of ASCII letters, digits,
/// `_` and `-`, which rules out separators and `..`.
fn corpus_path(data_dir: &Path, name: &str) -> Option<PathBuf> {
	let valid = !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
	if !valid {
		return None;
	}
	Some(data_dir.join(format!("{name}.txt")))
}

impl OccurrenceParams {
	/// Builds mining options from the query, applying defaults.
	fn options(&self) -> Result<MiningOptions, MineError> {
		MiningOptions::new(self.min_length.unwrap_or(3), self.min_occurrences.unwrap_or(2))
	}
}

/// HTTP GET endpoint `/v1/occurrences`
///
/// Mines the loaded names and returns the most frequent substrings as JSON.
#[get("/v1/occurrences")]
async fn get_occurrences(data: web::Data<Mutex<SharedData>>, query: web::Query<OccurrenceParams>) -> impl Responder {
	let options = match query.options() {
		Ok(o) => o,
		Err(e) => return HttpResponse::BadRequest().body(e.to_string())
	};
	let top = query.top.unwrap_or(20);

	// Only hold the lock long enough to share the corpus
	let corpus = match data.lock() {
		Ok(m) => Arc::clone(&m.corpus),
		Err(_) => return HttpResponse::InternalServerError().body("Corpus lock failed"),
	};
	let total_names = corpus.len();

	let start = Instant::now();
	let mined = web::block(move || Miner::new(options).mine(corpus.names())).await;
	match mined {
		Ok(Ok(findings)) => HttpResponse::Ok().json(OccurrenceResponse {
			total_names,
			elapsed_ms: start.elapsed().as_millis(),
			entries: rank(&findings, total_names, top),
		}),
		Ok(Err(e)) => HttpResponse::InternalServerError().body(e.to_string()),
		Err(e) => HttpResponse::InternalServerError().body(format!("Mining failed: {e}")),
	}
}

#[get("/v1/names")]
async fn get_names(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Corpus lock failed"),
	};
	HttpResponse::Ok().body(shared_data.corpus.len().to_string())
}

#[put("/v1/names")]
async fn put_names(data: web::Data<Mutex<SharedData>>, query: web::Query<NamesQuery>) -> impl Responder {
	let name = match &query.name {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty names list"),
	};

	let data_dir = match data.lock() {
		Ok(m) => m.data_dir.clone(),
		Err(_) => return HttpResponse::InternalServerError().body("Corpus lock failed"),
	};
	let path = match corpus_path(&data_dir, name) {
		Some(p) => p,
		None => return HttpResponse::BadRequest().body(format!("Invalid names list: {name}")),
	};

	let corpus = match web::block(move || NameCorpus::load(path)).await {
		Ok(Ok(c)) => c,
		Ok(Err(e)) => return HttpResponse::InternalServerError().body(format!("Failed to load names: {e}")),
		Err(e) => return HttpResponse::InternalServerError().body(format!("Failed to load names: {e}")),
	};
	let loaded = corpus.len();

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Corpus lock failed"),
	};
	shared_data.corpus = Arc::new(corpus);

	HttpResponse::Ok().body(format!("{loaded} names loaded"))
}

/// Main entry point for the server.
///
/// Loads the names file, wraps the corpus in a `Mutex`
/// and starts an Actix-web HTTP server.
///
/// # Notes
/// - Name lists live in `RS_OCC_DATA`; `RS_OCC_NAMES` picks the one loaded at startup.
///   An empty corpus is used if it cannot be loaded.
/// - The bind address comes from `RS_OCC_BIND`.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let data_dir = PathBuf::from(env::var("RS_OCC_DATA").unwrap_or_else(|_| DEFAULT_DATA.to_owned()));
	let names = env::var("RS_OCC_NAMES").unwrap_or_else(|_| DEFAULT_NAMES.to_owned());
	let bind = env::var("RS_OCC_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_owned());

	let corpus = match corpus_path(&data_dir, &names).map(NameCorpus::load) {
		Some(Ok(c)) => c,
		Some(Err(e)) => {
			warn!("starting with no names, {names} could not be loaded: {e}");
			NameCorpus::default()
		}
		None => {
			warn!("starting with no names, invalid names list: {names}");
			NameCorpus::default()
		}
	};
	info!("serving {} names on {bind}", corpus.len());

	let shared_corpus = web::Data::new(Mutex::new(SharedData { data_dir, corpus: Arc::new(corpus) }));

	HttpServer::new(move || {
		App::new()
			.wrap(middleware::Logger::default())
			.wrap(Cors::default().allow_any_origin().allowed_methods(vec!["GET", "PUT"]))
			.app_data(shared_corpus.clone())
			.service(get_occurrences)
			.service(get_names)
			.service(put_names)
	})
		.bind(bind)?
		.run()
		.await
}
