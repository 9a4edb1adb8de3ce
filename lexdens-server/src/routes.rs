use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, Responder, get, put, web};
use futures::StreamExt;
use lexdens_core::Error;
use lexdens_core::density::DensityEngine;
use lexdens_core::response::Mode;
use lexdens_core::validator::{Limits, decode_payload, validate};
use serde_json::json;
use url::form_urlencoded;

use crate::error::ApiError;
use crate::state::SharedData;

/// Registers every endpoint.
pub fn configure(cfg: &mut web::ServiceConfig) {
	cfg.service(
		web::resource("/complexity")
			.route(web::post().to(complexity))
			.default_service(web::to(method_rejected)),
	)
	.service(health)
	.service(reload_words);
}

/// Reads the report mode from the first `mode` query pair.
fn requested_mode(req: &HttpRequest) -> Mode {
	let mode = form_urlencoded::parse(req.query_string().as_bytes())
		.find(|(key, _)| key == "mode")
		.map(|(_, value)| value);
	Mode::from_query(mode.as_deref())
}

/// Reads the request body, stopping as soon as it is too long to pass
/// validation.
///
/// # Notes
/// - A character is at most 4 bytes, so a body of `max_chars * 4` bytes or
///   more always holds at least `max_chars` characters.
async fn read_body(mut payload: web::Payload, limits: &Limits) -> Result<web::BytesMut, ApiError> {
	let ceiling = limits.max_chars.saturating_mul(4);
	let mut body = web::BytesMut::new();
	while let Some(chunk) = payload.next().await {
		let chunk = chunk?;
		let size = body.len() + chunk.len();
		if size >= ceiling {
			return Err(Error::PayloadTooLarge { measure: "bytes", actual: size, limit: ceiling }.into());
		}
		body.extend_from_slice(&chunk);
	}
	Ok(body)
}

/// HTTP POST endpoint `/complexity`
///
/// Scores the raw body and returns the overall lexical density, plus the
/// per-sentence densities when called with `?mode=verbose`.
/// Oversized bodies are rejected with an empty 413 before any scoring.
async fn complexity(data: web::Data<SharedData>, req: HttpRequest, payload: web::Payload) -> Result<HttpResponse, ApiError> {
	let mode = requested_mode(&req);
	let body = read_body(payload, &data.limits).await?;
	let text = decode_payload(&body)?;
	validate(text, &data.limits)?;

	let words = data.words()?;
	let report = DensityEngine::new(&words).analyze(text, mode);
	Ok(HttpResponse::Ok().content_type(ContentType::json()).body(report.to_json()?))
}

/// Any method other than POST on `/complexity`.
async fn method_rejected() -> HttpResponse {
	HttpResponse::PayloadTooLarge().finish()
}

#[get("/health")]
async fn health(data: web::Data<SharedData>) -> Result<impl Responder, ApiError> {
	let words = data.words()?;
	Ok(HttpResponse::Ok().json(json!({ "status": "ok", "words": words.len() })))
}

/// HTTP PUT endpoint `/admin/reload_words`
///
/// Re-reads the configured word file and swaps the snapshot in.
#[put("/admin/reload_words")]
async fn reload_words(data: web::Data<SharedData>) -> Result<impl Responder, ApiError> {
	let count = data.reload()?;
	Ok(HttpResponse::Ok().json(json!({ "words": count })))
}
