//! Cross-origin policy for browser clients.

use actix_cors::Cors;
use actix_web::http::Method;

/// Build the CORS middleware: any origin, the CRUD verbs plus preflight, any
/// request header.
pub fn build_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_any_header()
        .expose_headers([crate::domain::TRACE_ID_HEADER])
}
