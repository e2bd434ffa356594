//! User listing handlers.
//!
//! One endpoint: the cursor-paginated, time-ordered user listing. A
//! traversal opens with an explicit `[start, end]` window and a
//! direction, then continues with the opaque `next_cursor` token until a
//! page comes back empty.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use roster_core::ListingParams;

use crate::extract::{Json, Query};
use crate::handler::Result;
use crate::handler::request::ListUsersRequest;
use crate::handler::response::{ErrorResponse, UserPageResponse};
use crate::service::{ServiceState, UserListing};

/// Tracing target for user listing operations.
const TRACING_TARGET: &str = "roster_server::handler::users";

/// Lists users within a creation-time window, one page per request.
#[tracing::instrument(skip_all)]
async fn list_users(
    State(listing): State<UserListing>,
    Query(request): Query<ListUsersRequest>,
) -> Result<(StatusCode, Json<UserPageResponse>)> {
    tracing::debug!(target: TRACING_TARGET, "Listing users");

    let params = ListingParams::from(request);
    let page = listing.list_users(&params).await?;
    let response = UserPageResponse::from(page);

    tracing::debug!(
        target: TRACING_TARGET,
        user_count = response.users.len(),
        has_more = !response.next_cursor.is_empty(),
        "Users listed"
    );

    Ok((StatusCode::OK, Json(response)))
}

fn list_users_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List users")
        .description(
            "Returns one page of users ordered by creation time. Open a traversal \
             with `start`, `end` and `order`, then pass the returned `next_cursor` \
             alone to fetch subsequent pages. An empty `users` array with an empty \
             `next_cursor` marks the end of the traversal.",
        )
        .response::<200, Json<UserPageResponse>>()
        .response::<400, Json<ErrorResponse>>()
}

/// Returns routes for user management.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/users", get_with(list_users, list_users_docs))
        .with_path_items(|item| item.tag("Users"))
}

#[cfg(test)]
mod tests {
    use roster_core::{Cursor, SortOrder};

    use crate::handler::response::UserPageResponse;
    use crate::handler::test::create_test_server;

    #[tokio::test]
    async fn rejects_request_without_parameters() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/users").await;
        response.assert_status_bad_request();

        let body = response.json::<serde_json::Value>();
        assert_eq!(body["name"], "bad_request");
        assert!(body["message"].as_str().unwrap().contains("next_cursor"));
        Ok(())
    }

    #[tokio::test]
    async fn rejects_cursor_combined_with_range() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server
            .get("/users")
            .add_query_param("next_cursor", "abc")
            .add_query_param("start", "2025-01-01T00:00:00Z")
            .await;
        response.assert_status_bad_request();

        let body = response.json::<serde_json::Value>();
        assert!(body["message"].as_str().unwrap().contains("must not be provided"));
        Ok(())
    }

    #[tokio::test]
    async fn cursor_with_empty_range_parameters_is_cursor_only() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let cursor = Cursor {
            start: "2025-01-01T00:00:00Z".parse()?,
            end: "2025-01-02T00:00:00Z".parse()?,
            order: SortOrder::Asc,
            last_id: "user-1".to_owned(),
        };

        // `?next_cursor=...&start=` carries no actual range bound.
        let response = server
            .get("/users")
            .add_query_param("next_cursor", cursor.encode())
            .add_query_param("start", "")
            .await;
        response.assert_status_ok();
        Ok(())
    }

    #[tokio::test]
    async fn rejects_incomplete_range() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server
            .get("/users")
            .add_query_param("start", "2025-01-01T00:00:00Z")
            .await;
        response.assert_status_bad_request();
        Ok(())
    }

    #[tokio::test]
    async fn rejects_malformed_cursor() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server
            .get("/users")
            .add_query_param("next_cursor", "not!!base64")
            .await;
        response.assert_status_bad_request();
        Ok(())
    }

    #[tokio::test]
    async fn rejects_invalid_timestamp_and_order() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server
            .get("/users")
            .add_query_param("start", "yesterday")
            .add_query_param("end", "2025-01-02T00:00:00Z")
            .add_query_param("order", "asc")
            .await;
        response.assert_status_bad_request();

        let response = server
            .get("/users")
            .add_query_param("start", "2025-01-01T00:00:00Z")
            .add_query_param("end", "2025-01-02T00:00:00Z")
            .add_query_param("order", "sideways")
            .await;
        response.assert_status_bad_request();
        Ok(())
    }

    #[tokio::test]
    async fn valid_range_with_unreachable_store_yields_empty_page() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server
            .get("/users")
            .add_query_param("start", "2025-01-01T00:00:00Z")
            .add_query_param("end", "2025-01-02T00:00:00Z")
            .add_query_param("order", "desc")
            .await;
        response.assert_status_ok();

        let page = response.json::<UserPageResponse>();
        assert!(page.users.is_empty());
        assert_eq!(page.next_cursor, "");
        Ok(())
    }

    #[tokio::test]
    async fn valid_cursor_with_unreachable_store_yields_empty_page() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let cursor = Cursor {
            start: "2025-01-01T00:00:00Z".parse()?,
            end: "2025-01-02T00:00:00Z".parse()?,
            order: SortOrder::Asc,
            last_id: "user-1".to_owned(),
        };

        let response = server
            .get("/users")
            .add_query_param("next_cursor", cursor.encode())
            .await;
        response.assert_status_ok();

        let page = response.json::<UserPageResponse>();
        assert!(page.users.is_empty());
        Ok(())
    }
}
