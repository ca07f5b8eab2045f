/// OpenAPI documentation for Comment Service
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Comment Service API",
        version = "1.0.0",
        description = "Pluggable commenting service. Attaches comments to any registered content kind, addressed by a (content type, object id) pair. Provides comment listing and authenticated comment submission.",
        license(
            name = "MIT"
        )
    ),
    paths(
        crate::handlers::comments::comment_list,
        crate::handlers::comments::comment_form,
        crate::handlers::comments::post_comment,
    ),
    components(schemas(crate::models::Comment, crate::forms::CommentForm)),
    tags(
        (name = "Comments", description = "List and post comments on registered content kinds"),
    ),
    modifiers(&SecurityAddon),
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token issued by the host application"))
                        .build(),
                ),
            )
        }
    }
}
