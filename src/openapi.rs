use utoipa::OpenApi;

use crate::handler::{self, health::Health};

#[derive(OpenApi)]
#[openapi(
    paths(handler::health::health),
    components(schemas(Health)),
    tags(
        (name = "health", description = "Health check")
    )
)]
pub struct ApiDoc;
