//! # Session Manager
//!
//! Drives [`Session`] through login, logout and the chat operations. All
//! network calls go through the injected [`ApiService`]; every result passes
//! through [`SessionManager::intercept`], which turns a `401` into a logout
//! and any other failure into an error notice.

use std::sync::Arc;

use shared::dto::{ChatInfo, LoginRequest, RegisterRequest, UserInfo};
use tracing::{debug, info, warn};

use super::state::{AuthPhase, NoticeLevel, Session, View};
use super::store::TokenStore;
use crate::core::{ApiService, ClientError, Result};

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful!";
pub const LOGOUT_MESSAGE: &str = "Logged out successfully";
pub const CHAT_CREATED_MESSAGE: &str = "New chat created successfully";
pub const LOGIN_REQUIRED_MESSAGE: &str = "Login to create a new chat";

pub struct SessionManager {
    api: Arc<dyn ApiService>,
    store: Box<dyn TokenStore>,
    session: Session,
}

impl SessionManager {
    pub fn new(api: Arc<dyn ApiService>, store: Box<dyn TokenStore>) -> Self {
        Self {
            api,
            store,
            session: Session::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Resume from a stored token, if there is one.
    ///
    /// Returns whether the session ended up authenticated. A stored token the
    /// server rejects is cleared; one that merely could not be checked stays
    /// stored for the next attempt.
    pub async fn restore(&mut self) -> Result<bool> {
        let Some(token) = self.store.load()? else {
            debug!("No stored token");
            return Ok(false);
        };

        self.session.token = Some(token);
        self.session.phase = AuthPhase::Authenticating;

        match self.fetch_user().await {
            Ok(_) => {}
            Err(ClientError::Unauthorized) => return Ok(false),
            Err(e) => {
                self.session.reset();
                return Err(e);
            }
        }
        self.session.phase = AuthPhase::Authenticated;
        self.session.view = View::Chat;
        self.fetch_chats().await?;
        Ok(self.session.is_authenticated())
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<()> {
        let req = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        self.session.phase = AuthPhase::Authenticating;
        match self.api.login(&req).await {
            Ok(token) => self.establish(token).await,
            Err(e) => Err(self.auth_failed(e)),
        }
    }

    pub async fn register(&mut self, name: &str, email: &str, password: &str) -> Result<()> {
        let req = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };

        self.session.phase = AuthPhase::Authenticating;
        match self.api.register(&req).await {
            Ok(token) => self.establish(token).await,
            Err(e) => Err(self.auth_failed(e)),
        }
    }

    /// Adopt a freshly issued token: persist it, then load the user and
    /// their chats.
    ///
    /// The session only becomes authenticated once the user loads. If that
    /// fails for any reason the token is dropped and the session starts over.
    async fn establish(&mut self, token: String) -> Result<()> {
        if let Err(e) = self.store.save(&token) {
            warn!(error = %e, "Failed to persist token, keeping it for this session only");
        }
        self.session.token = Some(token);

        let user = match self.fetch_user().await {
            Ok(user) => user,
            Err(e) => {
                warn!(error = %e, "Could not load the user for a new token, ending session");
                self.end_session();
                return Err(e);
            }
        };

        self.session.phase = AuthPhase::Authenticated;
        self.session.view = View::Chat;
        info!(user_id = %user.id, "Session established");
        self.session.push_notice(NoticeLevel::Success, LOGIN_SUCCESS_MESSAGE);

        self.fetch_chats().await
    }

    fn auth_failed(&mut self, err: ClientError) -> ClientError {
        self.session.phase = AuthPhase::Anonymous;
        self.session.view = View::Login;
        self.session.push_notice(NoticeLevel::Error, err.to_string());
        err
    }

    pub async fn fetch_user(&mut self) -> Result<UserInfo> {
        let token = self.token()?;
        let result = self.api.user_data(&token).await;
        let user = self.intercept(result)?;
        self.session.user = Some(user.clone());
        Ok(user)
    }

    /// Reload the chat list from the server.
    pub async fn fetch_chats(&mut self) -> Result<()> {
        if self.session.user.is_none() {
            self.session.chats.clear();
            self.session.selected_chat = None;
            return Ok(());
        }

        let token = self.token()?;
        let result = self.api.get_chats(&token).await;
        let chats = self.intercept(result)?;
        self.session.set_chats(chats);
        Ok(())
    }

    pub async fn create_chat(&mut self) -> Result<ChatInfo> {
        if self.session.user.is_none() {
            self.session.push_notice(NoticeLevel::Error, LOGIN_REQUIRED_MESSAGE);
            return Err(ClientError::Validation(LOGIN_REQUIRED_MESSAGE.to_string()));
        }

        let token = self.token()?;
        let result = self.api.create_chat(&token).await;
        let chat = self.intercept(result)?;

        self.session.upsert_front(chat.clone());
        self.session.selected_chat = Some(chat.id.clone());
        self.session.view = View::Chat;
        self.session.push_notice(NoticeLevel::Success, CHAT_CREATED_MESSAGE);
        Ok(chat)
    }

    /// Delete a chat. The local list only changes once the server confirms.
    pub async fn delete_chat(&mut self, chat_id: &str) -> Result<()> {
        let token = self.token()?;
        let result = self.api.delete_chat(&token, chat_id).await;
        let message = self.intercept(result)?;

        self.session.remove_chat(chat_id);
        self.session.push_notice(NoticeLevel::Success, message);
        Ok(())
    }

    /// Post a text message. The updated chat moves to the top of the list and
    /// the user is reloaded for the new credit balance.
    pub async fn send_message(&mut self, chat_id: &str, content: &str) -> Result<ChatInfo> {
        if content.trim().is_empty() {
            return Err(ClientError::Validation("Message cannot be empty".to_string()));
        }

        let token = self.token()?;
        let result = self.api.send_message(&token, chat_id, content).await;
        let chat = self.intercept(result)?;

        self.session.upsert_front(chat.clone());
        self.session.selected_chat = Some(chat.id.clone());
        self.fetch_user().await?;
        Ok(chat)
    }

    pub fn logout(&mut self) -> Result<()> {
        self.end_session();
        self.session.push_notice(NoticeLevel::Success, LOGOUT_MESSAGE);
        Ok(())
    }

    pub fn search(&self, term: &str) -> Vec<&ChatInfo> {
        self.session.search(term)
    }

    pub fn select_chat(&mut self, chat_id: &str) -> bool {
        self.session.select(chat_id)
    }

    /// Route every API result through here.
    ///
    /// `Unauthorized` ends the session and asks for a fresh login; any other
    /// error becomes an error notice. The error is returned either way.
    fn intercept<T>(&mut self, result: Result<T>) -> Result<T> {
        match result {
            Ok(value) => Ok(value),
            Err(ClientError::Unauthorized) => {
                warn!("Server rejected the session token, logging out");
                self.end_session();
                self.session
                    .push_notice(NoticeLevel::Error, ClientError::Unauthorized.to_string());
                Err(ClientError::Unauthorized)
            }
            Err(e) => {
                self.session.push_notice(NoticeLevel::Error, e.to_string());
                Err(e)
            }
        }
    }

    fn end_session(&mut self) {
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "Failed to clear stored token");
        }
        self.session.reset();
    }

    /// The current token. Without one, the session is treated as rejected.
    fn token(&mut self) -> Result<String> {
        match self.session.token.clone() {
            Some(token) => Ok(token),
            None => self.intercept(Err(ClientError::Unauthorized)),
        }
    }
}
