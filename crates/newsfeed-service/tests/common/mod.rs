//! In-memory repositories for service tests
//!
//! `MemoryStore` implements every repository trait over one mutex, so each
//! call is atomic the way a database transaction is.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;

use newsfeed_common::auth::JwtService;
use newsfeed_core::entities::{
    Board, Comment, ContentType, Like, NewBoard, NewComment, NewUser, User, UserStatus,
};
use newsfeed_core::traits::{
    BoardRepository, CommentRepository, LikeRepository, RepoResult, UserRepository,
    WithdrawalSummary,
};
use newsfeed_core::value_objects::{BoardId, BoardQuery, BoardSort, CommentId, UserId};
use newsfeed_core::DomainError;
use newsfeed_service::dto::{BoardRequest, LoginRequest, SignUpRequest, TokenResponse};
use newsfeed_service::{AuthService, BoardService, ServiceContext, UserService};

pub const PASSWORD: &str = "Abcde12345!";

#[derive(Default)]
struct State {
    seq: i64,
    users: Vec<(User, String)>,
    boards: Vec<Board>,
    comments: Vec<Comment>,
    likes: Vec<Like>,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.seq += 1;
        self.seq
    }

    fn active_user(&mut self, id: UserId) -> Option<&mut (User, String)> {
        self.users
            .iter_mut()
            .find(|(u, _)| u.id == id && u.is_active())
    }
}

#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Move a board's creation time, for date-range tests
    pub fn backdate_board(&self, id: BoardId, created_at: chrono::DateTime<Utc>) {
        let mut state = self.state.lock();
        if let Some(board) = state.boards.iter_mut().find(|b| b.id == id) {
            board.created_at = created_at;
        }
    }

    pub fn raw_comment(&self, id: CommentId) -> Option<Comment> {
        self.state.lock().comments.iter().find(|c| c.id == id).cloned()
    }

    pub fn raw_user(&self, id: UserId) -> Option<User> {
        self.state
            .lock()
            .users
            .iter()
            .find(|(u, _)| u.id == id)
            .map(|(u, _)| u.clone())
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        Ok(self.state.lock().active_user(id).map(|(u, _)| u.clone()))
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let state = self.state.lock();
        Ok(state
            .users
            .iter()
            .find(|(u, _)| u.username == username && u.is_active())
            .map(|(u, _)| u.clone()))
    }

    async fn find_by_refresh_token(&self, token: &str) -> RepoResult<Option<User>> {
        let state = self.state.lock();
        Ok(state
            .users
            .iter()
            .find(|(u, _)| u.refresh_token.as_deref() == Some(token) && u.is_active())
            .map(|(u, _)| u.clone()))
    }

    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        Ok(self.state.lock().users.iter().any(|(u, _)| u.username == username))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self.state.lock().users.iter().any(|(u, _)| u.email == email))
    }

    async fn nickname_exists(&self, nickname: &str) -> RepoResult<bool> {
        Ok(self.state.lock().users.iter().any(|(u, _)| u.nickname == nickname))
    }

    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User> {
        let mut state = self.state.lock();
        let now = Utc::now();
        let id = state.next_id();
        let created = User {
            id: UserId::new(id),
            username: user.username.clone(),
            nickname: user.nickname.clone(),
            email: user.email.clone(),
            info: user.info.clone(),
            status: UserStatus::Active,
            refresh_token: None,
            expired: false,
            created_at: now,
            modified_at: now,
            deleted_at: None,
        };
        state.users.push((created.clone(), password_hash.to_string()));
        Ok(created)
    }

    async fn update_profile(&self, user: &User) -> RepoResult<()> {
        let mut state = self.state.lock();
        let (stored, _) = state
            .active_user(user.id)
            .ok_or(DomainError::UserNotFound(user.id))?;
        stored.nickname = user.nickname.clone();
        stored.email = user.email.clone();
        stored.info = user.info.clone();
        stored.modified_at = user.modified_at;
        Ok(())
    }

    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>> {
        Ok(self.state.lock().active_user(id).map(|(_, hash)| hash.clone()))
    }

    async fn update_password(&self, id: UserId, password_hash: &str) -> RepoResult<()> {
        let mut state = self.state.lock();
        let (_, hash) = state.active_user(id).ok_or(DomainError::UserNotFound(id))?;
        *hash = password_hash.to_string();
        Ok(())
    }

    async fn update_session(
        &self,
        id: UserId,
        refresh_token: Option<&str>,
        expired: bool,
    ) -> RepoResult<()> {
        let mut state = self.state.lock();
        let (user, _) = state.active_user(id).ok_or(DomainError::UserNotFound(id))?;
        user.refresh_token = refresh_token.map(str::to_string);
        user.expired = expired;
        Ok(())
    }

    async fn withdraw(&self, id: UserId) -> RepoResult<WithdrawalSummary> {
        let mut state = self.state.lock();
        let now = Utc::now();

        let (user, _) = state.active_user(id).ok_or(DomainError::UserNotFound(id))?;
        user.withdraw(now);

        let mut summary = WithdrawalSummary::default();
        for board in state.boards.iter_mut().filter(|b| b.user_id == id && !b.is_deleted()) {
            board.soft_delete(now);
            summary.boards += 1;
        }
        for comment in state.comments.iter_mut().filter(|c| c.user_id == id && !c.is_deleted()) {
            comment.soft_delete(now);
            summary.comments += 1;
        }
        Ok(summary)
    }
}

#[async_trait]
impl BoardRepository for MemoryStore {
    async fn find_by_id(&self, id: BoardId) -> RepoResult<Option<Board>> {
        let state = self.state.lock();
        Ok(state.boards.iter().find(|b| b.id == id && !b.is_deleted()).cloned())
    }

    async fn find_including_deleted(&self, id: BoardId) -> RepoResult<Option<Board>> {
        Ok(self.state.lock().boards.iter().find(|b| b.id == id).cloned())
    }

    async fn list(&self, query: &BoardQuery) -> RepoResult<Vec<Board>> {
        let state = self.state.lock();
        let mut boards: Vec<Board> = state
            .boards
            .iter()
            .filter(|b| !b.is_deleted())
            .filter(|b| query.created_within.is_none_or(|range| range.contains(b.created_at)))
            .cloned()
            .collect();

        boards.sort_by(|a, b| match query.sort {
            BoardSort::Recent => (b.created_at, b.id).cmp(&(a.created_at, a.id)),
            BoardSort::MostLiked => {
                (b.like_count, b.created_at, b.id).cmp(&(a.like_count, a.created_at, a.id))
            }
        });

        Ok(match query.page {
            Some(page) => boards
                .into_iter()
                .skip(page.offset() as usize)
                .take(page.limit() as usize)
                .collect(),
            None => boards,
        })
    }

    async fn create(&self, board: &NewBoard) -> RepoResult<Board> {
        let mut state = self.state.lock();
        let now = Utc::now();
        let id = state.next_id();
        let created = Board {
            id: BoardId::new(id),
            user_id: board.user_id,
            title: board.title.clone(),
            content: board.content.clone(),
            hits: 0,
            like_count: 0,
            created_at: now,
            modified_at: now,
            deleted_at: None,
        };
        state.boards.push(created.clone());
        Ok(created)
    }

    async fn update(&self, board: &Board) -> RepoResult<()> {
        let mut state = self.state.lock();
        let stored = state
            .boards
            .iter_mut()
            .find(|b| b.id == board.id && !b.is_deleted())
            .ok_or(DomainError::BoardNotFound(board.id))?;
        stored.title = board.title.clone();
        stored.content = board.content.clone();
        stored.modified_at = board.modified_at;
        Ok(())
    }

    async fn record_hit(&self, id: BoardId) -> RepoResult<Option<Board>> {
        let mut state = self.state.lock();
        Ok(state
            .boards
            .iter_mut()
            .find(|b| b.id == id && !b.is_deleted())
            .map(|board| {
                board.record_hit();
                board.clone()
            }))
    }

    async fn soft_delete_cascade(&self, id: BoardId) -> RepoResult<u64> {
        let mut state = self.state.lock();
        let now = Utc::now();
        let board = state
            .boards
            .iter_mut()
            .find(|b| b.id == id && !b.is_deleted())
            .ok_or(DomainError::BoardNotFound(id))?;
        board.soft_delete(now);

        let mut comments = 0;
        for comment in state.comments.iter_mut().filter(|c| c.board_id == id && !c.is_deleted()) {
            comment.soft_delete(now);
            comments += 1;
        }
        Ok(comments)
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn find_by_id(&self, id: CommentId) -> RepoResult<Option<Comment>> {
        let state = self.state.lock();
        Ok(state
            .comments
            .iter()
            .find(|c| c.id == id && !c.is_deleted())
            .filter(|c| {
                state
                    .boards
                    .iter()
                    .any(|b| b.id == c.board_id && !b.is_deleted())
            })
            .cloned())
    }

    async fn find_including_deleted(&self, id: CommentId) -> RepoResult<Option<Comment>> {
        Ok(self.state.lock().comments.iter().find(|c| c.id == id).cloned())
    }

    async fn list_by_board(&self, board_id: BoardId) -> RepoResult<Vec<Comment>> {
        let state = self.state.lock();
        if !state.boards.iter().any(|b| b.id == board_id && !b.is_deleted()) {
            return Ok(Vec::new());
        }
        let mut comments: Vec<Comment> = state
            .comments
            .iter()
            .filter(|c| c.board_id == board_id && !c.is_deleted())
            .cloned()
            .collect();
        comments.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(comments)
    }

    async fn create(&self, comment: &NewComment) -> RepoResult<Comment> {
        let mut state = self.state.lock();
        let now = Utc::now();
        let id = state.next_id();
        let created = Comment {
            id: CommentId::new(id),
            board_id: comment.board_id,
            user_id: comment.user_id,
            content: comment.content.clone(),
            like_count: 0,
            created_at: now,
            modified_at: now,
            deleted_at: None,
        };
        state.comments.push(created.clone());
        Ok(created)
    }

    async fn update(&self, comment: &Comment) -> RepoResult<()> {
        let mut state = self.state.lock();
        let stored = state
            .comments
            .iter_mut()
            .find(|c| c.id == comment.id && !c.is_deleted())
            .ok_or(DomainError::CommentNotFound(comment.id))?;
        stored.content = comment.content.clone();
        stored.modified_at = comment.modified_at;
        Ok(())
    }

    async fn soft_delete(&self, id: CommentId) -> RepoResult<()> {
        let mut state = self.state.lock();
        let comment = state
            .comments
            .iter_mut()
            .find(|c| c.id == id && !c.is_deleted())
            .ok_or(DomainError::CommentNotFound(id))?;
        comment.soft_delete(Utc::now());
        Ok(())
    }
}

#[async_trait]
impl LikeRepository for MemoryStore {
    async fn exists(
        &self,
        user_id: UserId,
        content_type: ContentType,
        content_id: i64,
    ) -> RepoResult<bool> {
        Ok(self.state.lock().likes.iter().any(|l| {
            l.user_id == user_id && l.content_type == content_type && l.content_id == content_id
        }))
    }

    async fn like(&self, like: &Like) -> RepoResult<()> {
        let mut state = self.state.lock();
        if state.likes.iter().any(|l| {
            l.user_id == like.user_id
                && l.content_type == like.content_type
                && l.content_id == like.content_id
        }) {
            return Err(DomainError::AlreadyLiked);
        }
        adjust_counter(&mut state, like.content_type, like.content_id, 1)?;
        state.likes.push(like.clone());
        Ok(())
    }

    async fn unlike(
        &self,
        user_id: UserId,
        content_type: ContentType,
        content_id: i64,
    ) -> RepoResult<bool> {
        let mut state = self.state.lock();
        let before = state.likes.len();
        state.likes.retain(|l| {
            !(l.user_id == user_id && l.content_type == content_type && l.content_id == content_id)
        });
        if state.likes.len() == before {
            return Ok(false);
        }
        adjust_counter(&mut state, content_type, content_id, -1)?;
        Ok(true)
    }
}

fn adjust_counter(
    state: &mut State,
    content_type: ContentType,
    content_id: i64,
    delta: i64,
) -> RepoResult<()> {
    let count = match content_type {
        ContentType::Board => state
            .boards
            .iter_mut()
            .find(|b| b.id.into_inner() == content_id)
            .map(|b| &mut b.like_count)
            .ok_or(DomainError::BoardNotFound(BoardId::new(content_id)))?,
        ContentType::Comment => state
            .comments
            .iter_mut()
            .find(|c| c.id.into_inner() == content_id)
            .map(|c| &mut c.like_count)
            .ok_or(DomainError::CommentNotFound(CommentId::new(content_id)))?,
    };
    *count = (*count + delta).max(0);
    Ok(())
}

// ============================================================================
// Context helpers
// ============================================================================

pub struct TestApp {
    pub store: Arc<MemoryStore>,
    pub ctx: ServiceContext,
}

pub fn test_app() -> TestApp {
    let store = MemoryStore::new();
    let ctx = ServiceContext::builder()
        .user_repo(store.clone())
        .board_repo(store.clone())
        .comment_repo(store.clone())
        .like_repo(store.clone())
        .jwt_service(Arc::new(JwtService::new("test-secret-key-for-services", 1800, 1_209_600)))
        .build()
        .expect("context");
    TestApp { store, ctx }
}

pub fn sign_up_request(name: &str) -> SignUpRequest {
    SignUpRequest {
        username: name.to_string(),
        nickname: format!("{name}_nick"),
        email: format!("{name}@example.com"),
        info: None,
        password: PASSWORD.to_string(),
    }
}

impl TestApp {
    pub async fn sign_up(&self, name: &str) -> UserId {
        let response = UserService::new(&self.ctx)
            .sign_up(sign_up_request(name))
            .await
            .expect("sign up");
        UserId::new(response.user_id)
    }

    pub async fn login(&self, name: &str) -> TokenResponse {
        AuthService::new(&self.ctx)
            .login(LoginRequest {
                username: name.to_string(),
                password: PASSWORD.to_string(),
            })
            .await
            .expect("login")
    }

    pub async fn post(&self, author: UserId, title: &str) -> BoardId {
        let board = BoardService::new(&self.ctx)
            .create(
                author,
                BoardRequest {
                    title: title.to_string(),
                    content: format!("{title} body"),
                },
            )
            .await
            .expect("create board");
        BoardId::new(board.board_id)
    }
}
