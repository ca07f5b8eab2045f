/// Comment handlers - HTTP endpoints for listing and posting comments
use crate::error::Result;
use crate::forms::CommentForm;
use crate::middleware::UserId;
use crate::services::CommentService;
use crate::AppState;
use actix_web::{http::header, web, HttpResponse};

/// List all comments attached to a content reference.
#[utoipa::path(
    get,
    path = "/api/v1/comments/{content_type}/{object_id}",
    tag = "Comments",
    params(
        ("content_type" = String, Path, description = "Registered content-type token"),
        ("object_id" = String, Path, description = "Object id within the content type"),
    ),
    responses(
        (status = 200, description = "List view context carrying `comment_list`"),
        (status = 404, description = "Content type or object did not resolve"),
    )
)]
pub async fn comment_list(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse> {
    let (content_type, object_id) = path.into_inner();
    let service = CommentService::from_state(&state);

    let target = service.target(&content_type, &object_id).await?;
    let comments = service.list_comments(&target).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "comment_list": comments })))
}

/// Render an empty submission form for a content reference.
#[utoipa::path(
    get,
    path = "/api/v1/comments/{content_type}/{object_id}/new",
    tag = "Comments",
    params(
        ("content_type" = String, Path, description = "Registered content-type token"),
        ("object_id" = String, Path, description = "Object id within the content type"),
    ),
    responses(
        (status = 200, description = "Submission view context carrying an unbound `form`"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Content type or object did not resolve"),
    )
)]
pub async fn comment_form(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    _user: UserId,
) -> Result<HttpResponse> {
    let (content_type, object_id) = path.into_inner();
    let service = CommentService::from_state(&state);

    service.target(&content_type, &object_id).await?;

    let form = CommentForm::empty();
    Ok(HttpResponse::Ok().json(serde_json::json!({ "form": form.context() })))
}

/// Submit a new comment on a content reference.
///
/// Valid submissions persist one comment and redirect to the comment list;
/// invalid ones re-render the bound form with field errors and create
/// nothing.
#[utoipa::path(
    post,
    path = "/api/v1/comments/{content_type}/{object_id}/new",
    tag = "Comments",
    request_body = CommentForm,
    params(
        ("content_type" = String, Path, description = "Registered content-type token"),
        ("object_id" = String, Path, description = "Object id within the content type"),
    ),
    responses(
        (status = 302, description = "Comment created; Location points at the comment list"),
        (status = 200, description = "Validation failed; bound `form` context with field errors"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Content type or object did not resolve"),
    )
)]
pub async fn post_comment(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    user: UserId,
    payload: web::Json<CommentForm>,
) -> Result<HttpResponse> {
    let (content_type, object_id) = path.into_inner();
    let service = CommentService::from_state(&state);

    let target = service.target(&content_type, &object_id).await?;
    let form = payload.into_inner();

    if !form.is_valid() {
        return Ok(HttpResponse::Ok().json(serde_json::json!({ "form": form.context() })));
    }

    service.post_comment(&target, user.0, &form.text).await?;

    let list_url = format!(
        "/api/v1/comments/{}/{}",
        target.content_type, target.object_id
    );
    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, list_url))
        .finish())
}
