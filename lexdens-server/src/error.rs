use actix_web::error::PayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use lexdens_core::Error;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
	#[error(transparent)]
	Core(#[from] Error),
	#[error("Cannot read request body: {0}")]
	Payload(#[from] PayloadError),
	#[error("Word list lock failed")]
	LockFailed,
	#[error("No word list file configured")]
	NoWordFile,
}

impl ResponseError for ApiError {
	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::Core(Error::PayloadTooLarge { .. }) => StatusCode::PAYLOAD_TOO_LARGE,
			ApiError::Core(Error::InvalidEncoding(_)) | ApiError::Payload(_) | ApiError::NoWordFile => StatusCode::BAD_REQUEST,
			ApiError::Core(Error::StoreUnavailable(_) | Error::Serialization(_)) | ApiError::LockFailed => {
				StatusCode::INTERNAL_SERVER_ERROR
			}
		}
	}

	fn error_response(&self) -> HttpResponse {
		let status = self.status_code();
		if status == StatusCode::PAYLOAD_TOO_LARGE {
			log::debug!("Rejected submission: {self}");
			// Legacy clients expect an empty 413.
			return HttpResponse::build(status).finish();
		}
		if status.is_server_error() {
			log::error!("{self}");
		} else {
			log::warn!("{self}");
		}
		HttpResponse::build(status).body(self.to_string())
	}
}
