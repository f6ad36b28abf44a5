//! User record API handlers.
//!
//! ```text
//! POST   /usuarios                   {"user":"u1","nombre":"Ana","edad":25}
//! GET    /usuarios/all
//! GET    /usuarios/by-name/{nombre}
//! GET    /usuarios/{id}
//! PUT    /usuarios/{id}              {"edad":26}
//! DELETE /usuarios/{id}
//! ```
//!
//! `/usuarios/all` must be registered before `/usuarios/{id}` so the literal
//! segment is not captured as an id.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{NewUserDraft, User, UserPatch, validate_new_user};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::json_error_handler;
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_user_id, violations_error};

const ID_FIELD: FieldName = FieldName::new("id");

/// Creation body for `POST /usuarios`.
///
/// Fields stay raw JSON so validation can report type mismatches per field
/// instead of failing decoding outright. `null` counts as absent. Only a JSON
/// object decodes; arrays and scalars fail before validation.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(from = "Map<String, Value>")]
pub struct CreateUserRequest {
    #[schema(value_type = Option<String>, example = "u1")]
    pub user: Option<Value>,
    #[schema(value_type = Option<String>, example = "Ana")]
    pub nombre: Option<Value>,
    #[schema(value_type = Option<i32>, example = 25)]
    pub edad: Option<Value>,
}

impl From<Map<String, Value>> for CreateUserRequest {
    fn from(mut fields: Map<String, Value>) -> Self {
        let mut take = |key: &str| fields.remove(key).filter(|value| !value.is_null());
        Self {
            user: take("user"),
            nombre: take("nombre"),
            edad: take("edad"),
        }
    }
}

impl From<CreateUserRequest> for NewUserDraft {
    fn from(value: CreateUserRequest) -> Self {
        Self {
            user: value.user,
            nombre: value.nombre,
            edad: value.edad,
        }
    }
}

/// Partial update body for `PUT /usuarios/{id}`.
///
/// Any subset of fields may be supplied; nothing is validated beyond JSON
/// decoding.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct UpdateUserRequest {
    #[schema(example = "u1")]
    pub user: Option<String>,
    #[schema(example = "Ana")]
    pub nombre: Option<String>,
    #[schema(example = 26)]
    pub edad: Option<i32>,
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(value: UpdateUserRequest) -> Self {
        Self {
            user: value.user,
            nombre: value.nombre,
            edad: value.edad,
        }
    }
}

/// Confirmation returned by `DELETE /usuarios/{id}`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct DeleteUserResponse {
    #[schema(example = "Usuario con ID 1 eliminado")]
    pub message: String,
}

impl DeleteUserResponse {
    fn for_id(id: impl std::fmt::Display) -> Self {
        Self {
            message: format!("Usuario con ID {id} eliminado"),
        }
    }
}

/// Create a user record.
///
/// The body is validated before anything reaches the store; every violation
/// is reported in `details.violations`.
#[utoipa::path(
    post,
    path = "/usuarios",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Created record", body = UserSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Record store unavailable", body = ErrorSchema)
    ),
    tags = ["usuarios"],
    operation_id = "createUser"
)]
#[post("/usuarios")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    info!("create user requested");
    let draft = NewUserDraft::from(payload.into_inner());
    let new_user = validate_new_user(draft).map_err(|violations| violations_error(&violations))?;
    let created = state.users_command.create(new_user).await?;
    Ok(HttpResponse::Created().json(created))
}

/// List every user record.
#[utoipa::path(
    get,
    path = "/usuarios/all",
    responses(
        (status = 200, description = "All records", body = [UserSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Record store unavailable", body = ErrorSchema)
    ),
    tags = ["usuarios"],
    operation_id = "listUsers"
)]
#[get("/usuarios/all")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    info!("list users requested");
    let users = state.users_query.find_all().await?;
    Ok(web::Json(users))
}

/// Fetch the first record whose `nombre` matches exactly.
///
/// Answers `null` rather than 404 when nothing matches.
#[utoipa::path(
    get,
    path = "/usuarios/by-name/{nombre}",
    params(("nombre" = String, Path, description = "Exact display name")),
    responses(
        (status = 200, description = "Matching record or null", body = UserSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Record store unavailable", body = ErrorSchema)
    ),
    tags = ["usuarios"],
    operation_id = "getUserByName"
)]
#[get("/usuarios/by-name/{nombre}")]
pub async fn get_user_by_name(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Option<User>>> {
    let nombre = path.into_inner();
    info!(nombre = %nombre, "get user by name requested");
    let found = state.users_query.find_by_name(&nombre).await?;
    Ok(web::Json(found))
}

/// Fetch a record by id.
///
/// Answers `null` rather than 404 when the id is unknown.
#[utoipa::path(
    get,
    path = "/usuarios/{id}",
    params(("id" = i32, Path, description = "Record identifier")),
    responses(
        (status = 200, description = "Record or null", body = UserSchema),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Record store unavailable", body = ErrorSchema)
    ),
    tags = ["usuarios"],
    operation_id = "getUser"
)]
#[get("/usuarios/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Option<User>>> {
    let id = parse_user_id(&path.into_inner(), ID_FIELD)?;
    info!(user_id = %id, "get user requested");
    let found = state.users_query.find_by_id(id).await?;
    Ok(web::Json(found))
}

/// Merge the supplied fields onto an existing record.
#[utoipa::path(
    put,
    path = "/usuarios/{id}",
    params(("id" = i32, Path, description = "Record identifier")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated record", body = UserSchema),
        (status = 400, description = "Malformed id or body", body = ErrorSchema),
        (status = 404, description = "Record not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Record store unavailable", body = ErrorSchema)
    ),
    tags = ["usuarios"],
    operation_id = "updateUser"
)]
#[put("/usuarios/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(&path.into_inner(), ID_FIELD)?;
    info!(user_id = %id, "update user requested");
    let updated = state
        .users_command
        .update(id, UserPatch::from(payload.into_inner()))
        .await?;
    Ok(web::Json(updated))
}

/// Permanently remove a record.
#[utoipa::path(
    delete,
    path = "/usuarios/{id}",
    params(("id" = i32, Path, description = "Record identifier")),
    responses(
        (status = 200, description = "Record removed", body = DeleteUserResponse),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 404, description = "Record not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Record store unavailable", body = ErrorSchema)
    ),
    tags = ["usuarios"],
    operation_id = "deleteUser"
)]
#[delete("/usuarios/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeleteUserResponse>> {
    let id = parse_user_id(&path.into_inner(), ID_FIELD)?;
    info!(user_id = %id, "delete user requested");
    state.users_command.delete(id).await?;
    Ok(web::Json(DeleteUserResponse::for_id(id)))
}

/// Register the user routes and their JSON extractor settings.
///
/// Routes are added in match order: the literal `/usuarios/all` and
/// `/usuarios/by-name/{nombre}` precede the `/usuarios/{id}` family.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(create_user)
        .service(list_users)
        .service(get_user_by_name)
        .service(get_user)
        .service(update_user)
        .service(delete_user);
}
