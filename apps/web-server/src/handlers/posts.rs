//! Post lifecycle handlers: list, create, edit, delete.
//!
//! Every mutation resolves the post first, then asks the ownership guard.
//! A denial answers with the same redirect a successful mutation produces.

use std::collections::HashMap;

use actix_web::{HttpResponse, http::header::ContentType, web};
use uuid::Uuid;

use quill_core::content::render_markdown;
use quill_core::domain::{Post, authorize_mutation};
use quill_shared::dto::PostForm;

use crate::middleware::auth::{Identity, OptionalIdentity};
use crate::middleware::error::{AppError, AppResult};
use crate::render;
use crate::state::AppState;

use super::redirect_to;

fn post_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("post {id} not found"))
}

/// GET / - the public listing, newest first.
pub async fn list(state: web::Data<AppState>, viewer: OptionalIdentity) -> AppResult<HttpResponse> {
    let posts = state.posts.list_ordered_by_created_desc().await?;

    // Resolve author display names once per distinct author.
    let mut author_names: HashMap<Uuid, String> = HashMap::new();
    for post in &posts {
        if !author_names.contains_key(&post.author_id) {
            if let Some(user) = state.users.find_by_id(post.author_id).await? {
                author_names.insert(user.id, user.name);
            }
        }
    }

    let viewer_id = viewer.0.map(|identity| identity.user_id);
    let viewer_name = match viewer_id {
        Some(id) => state.users.find_by_id(id).await?.map(|u| u.name),
        None => None,
    };

    let views: Vec<render::PostView> = posts
        .into_iter()
        .map(|post| render::PostView {
            editable: viewer_id == Some(post.author_id),
            author_name: author_names
                .get(&post.author_id)
                .cloned()
                .unwrap_or_else(|| "unknown".to_string()),
            id: post.id,
            title: post.title,
            content_html: post.content,
            created_at: post.created_at,
        })
        .collect();

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render::posts_page(viewer_name.as_deref(), &views)))
}

/// GET /post/add - the create form. Signed-in users only.
pub async fn add_form(_identity: Identity) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render::post_form_page("New post", "/post/add", "", ""))
}

/// POST /post/add - create a post owned by the signed-in user.
pub async fn add(
    identity: Identity,
    state: web::Data<AppState>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let PostForm { title, content } = form.into_inner();
    Post::validate_input(&title, &content)?;

    let post = Post::new(identity.user_id, title, render_markdown(&content));
    state.posts.insert(post).await?;

    Ok(redirect_to("/"))
}

/// GET /post/{id}/edit - the edit form. Author only; others are sent back
/// to the listing with nothing to learn.
pub async fn edit_form(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| post_not_found(id))?;

    if !authorize_mutation(Some(identity.user_id), &post).is_allowed() {
        return Ok(redirect_to("/"));
    }

    let action = format!("/post/{id}/edit");
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render::post_form_page(
            "Edit post",
            &action,
            &post.title,
            &post.content,
        )))
}

/// POST /post/{id}/edit - overwrite title and content in place.
pub async fn edit(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let mut post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| post_not_found(id))?;

    if !authorize_mutation(Some(identity.user_id), &post).is_allowed() {
        return Ok(redirect_to("/"));
    }

    let PostForm { title, content } = form.into_inner();
    Post::validate_input(&title, &content)?;

    // Identity, author and creation time stay as they are.
    post.title = title;
    post.content = render_markdown(&content);
    state.posts.update(post).await?;

    Ok(redirect_to("/"))
}

/// POST /post/{id}/delete - remove a post.
pub async fn delete(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| post_not_found(id))?;

    if !authorize_mutation(Some(identity.user_id), &post).is_allowed() {
        return Ok(redirect_to("/"));
    }

    state.posts.delete(post.id).await?;

    Ok(redirect_to("/"))
}
