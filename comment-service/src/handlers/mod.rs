/// HTTP handlers for comment endpoints
///
/// The list endpoint is public; the submission resource (form + post)
/// sits behind the JWT middleware.
pub mod comments;

pub use comments::{comment_form, comment_list, post_comment};

use crate::middleware::JwtAuthMiddleware;
use actix_web::{web, Scope};

/// The comment route tree, mounted under `/api/v1/comments`.
///
/// Shared between `main` and the endpoint tests so both exercise the same
/// wiring.
pub fn routes(auth: JwtAuthMiddleware) -> Scope {
    web::scope("/api/v1/comments")
        .route(
            "/{content_type}/{object_id}",
            web::get().to(comments::comment_list),
        )
        .service(
            web::resource("/{content_type}/{object_id}/new")
                .wrap(auth)
                .route(web::get().to(comments::comment_form))
                .route(web::post().to(comments::post_comment)),
        )
}
