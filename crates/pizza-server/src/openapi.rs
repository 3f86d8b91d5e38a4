use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pizza API",
        version = "0.1.0",
        description = "Authorization records and pizza orders backed by a JSON document store."
    ),
    paths(
        crate::routes::list_authorization,
        crate::routes::create_authorization,
        crate::routes::list_orders,
        crate::routes::create_order,
        crate::routes::health,
    ),
    components(schemas(
        crate::dto::AuthorizationRecord,
        crate::dto::OrderRecord,
        crate::dto::HealthResponse,
        crate::dto::ErrorResponse,
    )),
    tags(
        (name = "authorization", description = "Authorization API"),
        (name = "orders", description = "Orders API"),
        (name = "system", description = "Health and system status"),
    )
)]
pub struct ApiDoc;
