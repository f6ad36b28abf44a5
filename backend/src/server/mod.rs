//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::warn;

use usuarios::Trace;
#[cfg(debug_assertions)]
use usuarios::doc::ApiDoc;
use usuarios::domain::UserService;
use usuarios::inbound::http::cors::build_cors;
use usuarios::inbound::http::health::{HealthState, live, ready};
use usuarios::inbound::http::state::HttpState;
use usuarios::inbound::http::users;
use usuarios::outbound::persistence::{DbPool, DieselUserRepository, InMemoryUserRepository};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Build the user ports over the database when a pool is available,
/// otherwise over the in-memory store.
fn build_http_state(db_pool: Option<DbPool>) -> HttpState {
    match db_pool {
        Some(pool) => {
            let service = Arc::new(UserService::new(Arc::new(DieselUserRepository::new(pool))));
            HttpState::new(service.clone(), service)
        }
        None => {
            warn!("no database configured; user records are kept in memory");
            let service = Arc::new(UserService::new(Arc::new(InMemoryUserRepository::new())));
            HttpState::new(service.clone(), service)
        }
    }
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(build_cors())
        .wrap(Trace)
        .configure(users::configure)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let ServerConfig { bind_addr, db_pool } = config;
    let http_state = web::Data::new(build_http_state(db_pool));

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
