//! HTML views.
//!
//! Pages are assembled from small string builders; the only markup that is
//! injected without escaping is post content, which is rendered HTML
//! produced by the write-time transform.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Escape text for safe interpolation into HTML.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn page(title: &str, nav: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} - Quill</title>\n</head>\n<body>\n\
         <nav><a href=\"/\">Quill</a> {nav}</nav>\n\
         <main>\n{body}</main>\n</body>\n</html>\n",
        title = escape_html(title),
    )
}

fn nav_for(viewer: Option<&str>) -> String {
    match viewer {
        Some(name) => format!(
            "<span>{}</span> <a href=\"/post/add\">New post</a> <a href=\"/logout\">Log out</a>",
            escape_html(name)
        ),
        None => "<a href=\"/login\">Log in</a> <a href=\"/register\">Register</a>".to_string(),
    }
}

/// A post prepared for display.
pub struct PostView {
    pub id: Uuid,
    pub title: String,
    pub content_html: String,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
    pub editable: bool,
}

/// The homepage listing, newest first.
pub fn posts_page(viewer: Option<&str>, posts: &[PostView]) -> String {
    let mut body = String::from("<h1>Posts</h1>\n");

    if posts.is_empty() {
        body.push_str("<p>No posts yet.</p>\n");
    }

    for post in posts {
        body.push_str(&format!(
            "<article>\n<h2>{title}</h2>\n\
             <p><small>by {author} on {date}</small></p>\n\
             {content}",
            title = escape_html(&post.title),
            author = escape_html(&post.author_name),
            date = post.created_at.format("%Y-%m-%d %H:%M"),
            content = post.content_html,
        ));
        if post.editable {
            body.push_str(&format!(
                "<p><a href=\"/post/{id}/edit\">Edit</a></p>\n\
                 <form method=\"post\" action=\"/post/{id}/delete\">\
                 <button type=\"submit\">Delete</button></form>\n",
                id = post.id,
            ));
        }
        body.push_str("</article>\n");
    }

    page("Posts", &nav_for(viewer), &body)
}

/// The create/edit form. `action` is where the form posts back to.
pub fn post_form_page(heading: &str, action: &str, title_value: &str, content_value: &str) -> String {
    let body = format!(
        "<h1>{heading}</h1>\n\
         <form method=\"post\" action=\"{action}\">\n\
         <p><label>Title<br><input name=\"title\" value=\"{title}\"></label></p>\n\
         <p><label>Content<br><textarea name=\"content\">{content}</textarea></label></p>\n\
         <p><button type=\"submit\">Save</button></p>\n\
         </form>\n",
        heading = escape_html(heading),
        action = escape_html(action),
        title = escape_html(title_value),
        content = escape_html(content_value),
    );

    page(heading, &nav_for(None), &body)
}

/// The login form, optionally with a notice above it.
pub fn login_page(notice: Option<&str>) -> String {
    account_page(
        "Log in",
        "/login",
        notice,
        "<p><label>Email<br><input name=\"email\" type=\"email\"></label></p>\n\
         <p><label>Password<br><input name=\"password\" type=\"password\"></label></p>\n",
    )
}

/// The registration form, optionally with a notice above it.
pub fn register_page(notice: Option<&str>) -> String {
    account_page(
        "Register",
        "/register",
        notice,
        "<p><label>Name<br><input name=\"name\"></label></p>\n\
         <p><label>Email<br><input name=\"email\" type=\"email\"></label></p>\n\
         <p><label>Password<br><input name=\"password\" type=\"password\"></label></p>\n",
    )
}

fn account_page(heading: &str, action: &str, notice: Option<&str>, fields: &str) -> String {
    let mut body = format!("<h1>{}</h1>\n", escape_html(heading));
    if let Some(notice) = notice {
        body.push_str(&format!("<p><strong>{}</strong></p>\n", escape_html(notice)));
    }
    body.push_str(&format!(
        "<form method=\"post\" action=\"{action}\">\n{fields}\
         <p><button type=\"submit\">{heading}</button></p>\n</form>\n",
        heading = escape_html(heading),
    ));

    page(heading, &nav_for(None), &body)
}

/// A bare error page.
pub fn error_page(title: &str, message: &str) -> String {
    let body = format!(
        "<h1>{}</h1>\n<p>{}</p>\n<p><a href=\"/\">Back to posts</a></p>\n",
        escape_html(title),
        escape_html(message),
    );

    page(title, &nav_for(None), &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_html_metacharacters() {
        assert_eq!(
            escape_html(r#"<b>"a" & 'b'</b>"#),
            "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn titles_are_escaped_in_the_listing() {
        let posts = vec![PostView {
            id: Uuid::new_v4(),
            title: "<script>alert(1)</script>".into(),
            content_html: "<p>Body</p>\n".into(),
            author_name: "Alice".into(),
            created_at: Utc::now(),
            editable: false,
        }];

        let html = posts_page(None, &posts);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn stored_content_is_injected_as_is() {
        let posts = vec![PostView {
            id: Uuid::new_v4(),
            title: "Title".into(),
            content_html: "<p>Test content</p>\n".into(),
            author_name: "Alice".into(),
            created_at: Utc::now(),
            editable: false,
        }];

        assert!(posts_page(None, &posts).contains("<p>Test content</p>\n"));
    }

    #[test]
    fn empty_listing_still_renders() {
        let html = posts_page(None, &[]);
        assert!(html.contains("No posts yet."));
    }
}
