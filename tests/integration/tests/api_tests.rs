//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET, API_PORT
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer, TestUser,
};
use reqwest::StatusCode;

async fn start() -> Option<TestServer> {
    if !check_test_env() {
        return None;
    }
    Some(TestServer::start().await.expect("Failed to start server"))
}

async fn create_board(server: &TestServer, user: &TestUser) -> BoardResponse {
    let response = server
        .post_auth("/api/boards", &user.access_token, &BoardRequest::unique())
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let Some(server) = start().await else { return };

    let response = server.get("/health").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_sign_up_and_login() {
    let Some(server) = start().await else { return };
    let user = server.new_user().await.unwrap();

    assert!(user.user_id > 0);
    assert!(!user.access_token.is_empty());
    assert_ne!(user.access_token, user.refresh_token);
}

#[tokio::test]
async fn test_sign_up_duplicate_username() {
    let Some(server) = start().await else { return };
    let request = SignUpRequest::unique();

    let response = server.post("/api/users/signup", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post("/api/users/signup", &request).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.error.code, "USERNAME_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_sign_up_rejects_invalid_body() {
    let Some(server) = start().await else { return };
    let mut request = SignUpRequest::unique();
    request.email = "not-an-email".to_string();

    let response = server.post("/api/users/signup", &request).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let Some(server) = start().await else { return };
    let user = server.new_user().await.unwrap();

    let login = LoginRequest {
        username: user.username,
        password: "WrongPass123!".to_string(),
    };
    let response = server.post("/api/auth/login", &login).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.error.code, "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_reissue_and_logout() {
    let Some(server) = start().await else { return };
    let user = server.new_user().await.unwrap();

    let reissue = ReissueRequest {
        refresh_token: user.refresh_token.clone(),
    };
    let response = server.post("/api/auth/reissue", &reissue).await.unwrap();
    let tokens: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(tokens.token_type, "Bearer");

    // The rotated-out token no longer works
    let response = server.post("/api/auth/reissue", &reissue).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .post_empty_auth("/api/auth/logout", &tokens.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Access tokens of a logged-out session are refused
    let response = server
        .post_auth("/api/boards", &tokens.access_token, &BoardRequest::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .post(
            "/api/auth/reissue",
            &ReissueRequest {
                refresh_token: tokens.refresh_token,
            },
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.error.code, "TOKEN_REVOKED");
}

#[tokio::test]
async fn test_missing_auth() {
    let Some(server) = start().await else { return };

    let response = server.post("/api/boards", &BoardRequest::unique()).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.error.code, "MISSING_AUTHORIZATION");
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_profile_is_private() {
    let Some(server) = start().await else { return };
    let owner = server.new_user().await.unwrap();
    let other = server.new_user().await.unwrap();

    let path = format!("/api/users/{}", owner.user_id);
    let response = server.get_auth(&path, &owner.access_token).await.unwrap();
    let profile: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile.user_id, owner.user_id);
    assert_eq!(profile.username, owner.username);

    let response = server.get_auth(&path, &other.access_token).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.error.code, "IDENTITY_MISMATCH");
}

#[tokio::test]
async fn test_sign_out_hides_content() {
    let Some(server) = start().await else { return };
    let user = server.new_user().await.unwrap();
    let board = create_board(&server, &user).await;

    let path = format!("/api/users/{}/signout", user.user_id);
    let response = server
        .put_auth(
            &path,
            &user.access_token,
            &PasswordRequest {
                password: TEST_PASSWORD.to_string(),
            },
        )
        .await
        .unwrap();
    let summary: WithdrawalResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(summary.deleted_boards, 1);
    assert_eq!(summary.deleted_comments, 0);

    let response = server.get(&format!("/api/boards/{}", board.board_id)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Board Tests
// ============================================================================

#[tokio::test]
async fn test_board_crud() {
    let Some(server) = start().await else { return };
    let author = server.new_user().await.unwrap();
    let board = create_board(&server, &author).await;
    assert_eq!(board.user_id, author.user_id);
    assert_eq!(board.hits, 0);

    let path = format!("/api/boards/{}", board.board_id);
    let response = server.get(&path).await.unwrap();
    let read: BoardResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(read.hits, 1);

    let update = BoardRequest {
        title: "Edited".to_string(),
        content: "Edited content".to_string(),
    };
    let response = server.put_auth(&path, &author.access_token, &update).await.unwrap();
    let updated: BoardResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.title, "Edited");
    assert_eq!(updated.content, "Edited content");

    let response = server.delete_auth(&path, &author.access_token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_board_owner_guard() {
    let Some(server) = start().await else { return };
    let author = server.new_user().await.unwrap();
    let intruder = server.new_user().await.unwrap();
    let board = create_board(&server, &author).await;

    let path = format!("/api/boards/{}", board.board_id);
    let response = server.delete_auth(&path, &intruder.access_token).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.error.code, "PERMISSION_DENIED");
}

#[tokio::test]
async fn test_board_feeds() {
    let Some(server) = start().await else { return };
    let author = server.new_user().await.unwrap();
    let board = create_board(&server, &author).await;

    let response = server.get("/api/boards/recently/1").await.unwrap();
    let page: BoardListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.page, Some(1));
    assert!(page.boards.len() <= 10);
    assert!(page.boards.iter().any(|b| b.board_id == board.board_id));

    let response = server.get("/api/boards/like/1").await.unwrap();
    let page: BoardListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page.boards.windows(2).all(|w| w[0].like_count >= w[1].like_count));

    let today = chrono::Utc::now().date_naive();
    let path = format!("/api/boards/date/1?startTime={today}&endTime={today}");
    let response = server.get(&path).await.unwrap();
    let page: BoardListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page.boards.iter().any(|b| b.board_id == board.board_id));

    let response = server.get("/api/boards/recently/0").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server.get("/api/boards/date/1?startTime=yesterday&endTime=today").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_invalid_board_id() {
    let Some(server) = start().await else { return };

    let response = server.get("/api/boards/abc").await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "INVALID_PATH_PARAMETER");
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment_flow() {
    let Some(server) = start().await else { return };
    let author = server.new_user().await.unwrap();
    let commenter = server.new_user().await.unwrap();
    let board = create_board(&server, &author).await;

    let comments_path = format!("/api/boards/{}/comments", board.board_id);
    let body = CommentRequest {
        content: "First!".to_string(),
    };
    let response = server
        .post_auth(&comments_path, &commenter.access_token, &body)
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(comment.board_id, board.board_id);
    assert_eq!(comment.user_id, commenter.user_id);

    let comment_path = format!("{comments_path}/{}", comment.comment_id);
    let edit = CommentRequest {
        content: "Edited".to_string(),
    };
    let response = server.put_auth(&comment_path, &author.access_token, &edit).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .put_auth(&comment_path, &commenter.access_token, &edit)
        .await
        .unwrap();
    let edited: CommentResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(edited.content, "Edited");

    let response = server.get(&comments_path).await.unwrap();
    let listed: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listed.len(), 1);

    // Deleting the board takes its comments with it
    let board_path = format!("/api/boards/{}", board.board_id);
    let response = server.delete_auth(&board_path, &author.access_token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .delete_auth(&comment_path, &commenter.access_token)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "BOARD_DELETED");
}

// ============================================================================
// Like Tests
// ============================================================================

#[tokio::test]
async fn test_like_board() {
    let Some(server) = start().await else { return };
    let author = server.new_user().await.unwrap();
    let fan = server.new_user().await.unwrap();
    let board = create_board(&server, &author).await;

    let path = format!("/api/boards/{}/likes", board.board_id);
    let response = server.post_empty_auth(&path, &fan.access_token).await.unwrap();
    let like: LikeResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(like.content_type, "BOARD");
    assert_eq!(like.content_id, board.board_id);
    assert!(like.liked);
    assert_eq!(like.like_count, 1);

    let response = server.post_empty_auth(&path, &fan.access_token).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    let response = server.post_empty_auth(&path, &author.access_token).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "SELF_LIKE");

    let response = server.delete_auth(&path, &fan.access_token).await.unwrap();
    let like: LikeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!like.liked);
    assert_eq!(like.like_count, 0);

    let response = server.delete_auth(&path, &fan.access_token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
