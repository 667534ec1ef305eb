use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "User Management API",
        version = "0.1.0",
        description = "In-memory user management. Every route requires `Authorization: Bearer <token>`."
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = crate::USERS_PATH, api = domain_users::ApiDoc)
    )
)]
pub struct ApiDoc;
