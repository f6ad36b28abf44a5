//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every user record endpoint, the health probes, and
//! the schema wrappers that describe domain types without coupling them to
//! utoipa. The document backs Swagger UI in debug builds and is exported by
//! the `openapi-dump` binary.

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, UserSchema};
use crate::inbound::http::users::{CreateUserRequest, DeleteUserResponse, UpdateUserRequest};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Usuarios API",
        description = "CRUD operations over user records and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user_by_name,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        ErrorSchema,
        ErrorCodeSchema,
        CreateUserRequest,
        UpdateUserRequest,
        DeleteUserResponse
    )),
    tags(
        (name = "usuarios", description = "User record operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
