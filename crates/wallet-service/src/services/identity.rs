//! Identity service
//!
//! Registration, credential checks, session issuance and chat binding.

use tracing::{info, instrument, warn};

use wallet_common::{hash_password, validate_password, verify_password, AppError};
use wallet_core::entities::User;
use wallet_core::value_objects::Username;

use crate::dto::{
    ChatBindingResponse, LinkChatRequest, LoginRequest, LoginResponse, RegisterRequest,
    UserResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Identity service
pub struct IdentityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> IdentityService<'a> {
    /// Create a new IdentityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user with a zero balance
    ///
    /// Uniqueness is enforced by the insert itself; a concurrent duplicate
    /// fails with `UsernameTaken` and leaves the first record untouched.
    #[instrument(skip(self, request), fields(username = %request.username.trim()))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<UserResponse> {
        let username = Username::parse(&request.username)?;
        validate_password(&request.password)?;

        let password_hash = hash_password(&request.password)?;
        let user = User::new(username);

        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(username = %user.username, "User registered");

        Ok(UserResponse::from(&user))
    }

    /// Check a username/password pair, returning the canonical username
    ///
    /// Unknown users and wrong passwords fail the same way.
    #[instrument(skip(self, password))]
    pub async fn authenticate(&self, username: &str, password: &str) -> ServiceResult<String> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(ServiceError::validation("username and password are required"));
        }

        let Some(password_hash) = self.ctx.user_repo().get_password_hash(username).await? else {
            warn!(username, "Login failed: unknown user");
            return Err(AppError::InvalidCredentials.into());
        };

        if !verify_password(password, &password_hash)? {
            warn!(username, "Login failed: wrong password");
            return Err(AppError::InvalidCredentials.into());
        }

        Ok(username.to_string())
    }

    /// Authenticate and issue a session token
    #[instrument(skip(self, request), fields(username = %request.username.trim()))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        let username = self.authenticate(&request.username, &request.password).await?;
        let token = self.ctx.session_issuer().issue(&username)?;

        info!(username = %username, "User logged in");

        Ok(LoginResponse::new(username, token))
    }

    /// Resolve a bearer token to the username it was issued for
    pub fn validate_session(&self, token: &str) -> ServiceResult<String> {
        let claims = self.ctx.session_issuer().validate(token)?;
        Ok(claims.sub)
    }

    /// Bind an external chat to a user; the first binding is kept
    #[instrument(skip(self, request), fields(username = %request.username.trim(), chat_id = request.chat_id))]
    pub async fn bind_chat(&self, request: LinkChatRequest) -> ServiceResult<ChatBindingResponse> {
        let username = Username::parse(&request.username)?;
        let binding = self
            .ctx
            .user_repo()
            .bind_chat(username.as_str(), request.chat_id)
            .await?;

        if binding.is_new() {
            info!(chat_id = binding.chat_id(), "Chat bound");
        } else if binding.chat_id() != request.chat_id {
            warn!(
                existing = binding.chat_id(),
                requested = request.chat_id,
                "Chat binding kept, user already bound"
            );
        }

        Ok(ChatBindingResponse::new(username.into_inner(), binding))
    }
}
