//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{UserCommand, UserQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users_command: Arc<dyn UserCommand>,
    pub users_query: Arc<dyn UserQuery>,
}

impl HttpState {
    /// Construct state from the user driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use usuarios::domain::UserService;
    /// use usuarios::inbound::http::state::HttpState;
    /// use usuarios::outbound::persistence::InMemoryUserRepository;
    ///
    /// let service = Arc::new(UserService::new(Arc::new(InMemoryUserRepository::new())));
    /// let state = HttpState::new(service.clone(), service);
    /// let _query = state.users_query.clone();
    /// ```
    pub fn new(users_command: Arc<dyn UserCommand>, users_query: Arc<dyn UserQuery>) -> Self {
        Self {
            users_command,
            users_query,
        }
    }
}
