use dioxus::prelude::*;
use shared_types::{
    AuthStatus, Credentials, DevAccounts, Identity, IdentityProvider, Registration, ShellError,
};

use crate::query::QueryClient;

/// Global authentication state.
///
/// Created once by [`AuthProvider`] and handed down through context. Pages
/// and guards read it; only the sign-in/out helpers below write it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<Identity>>,
    pub is_loading: Signal<bool>,
}

impl AuthState {
    /// Starts in `Loading` until the provider has resolved the session.
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
            is_loading: Signal::new(true),
        }
    }

    /// Reactive: reading subscribes the caller to both signals.
    pub fn status(&self) -> AuthStatus {
        AuthStatus::from_parts(self.current_user.read().as_ref(), *self.is_loading.read())
    }

    pub fn begin_loading(&mut self) {
        self.is_loading.set(true);
    }

    /// Finish resolution with the given user (or none).
    pub fn resolve(&mut self, user: Option<Identity>) {
        self.current_user.set(user);
        self.is_loading.set(false);
    }

    pub fn set_user(&mut self, user: Identity) {
        self.resolve(Some(user));
    }

    pub fn clear_auth(&mut self) {
        self.resolve(None);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Hook to access the identity provider backing the sign-in forms.
pub fn use_accounts() -> Signal<DevAccounts> {
    use_context::<Signal<DevAccounts>>()
}

/// Provides [`AuthState`] to descendants and resolves the initial session.
///
/// Sessions are not persisted across reloads, so resolution ends
/// unauthenticated unless a sign-in already happened.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth = use_context_provider(AuthState::new);

    use_effect(move || {
        if *auth.is_loading.peek() && auth.current_user.peek().is_none() {
            tracing::debug!("no stored session; resolving unauthenticated");
            auth.resolve(None);
        }
    });

    rsx! { {children} }
}

/// Check credentials against `provider` and record the outcome.
pub fn sign_in<P: IdentityProvider + ?Sized>(
    auth: &mut AuthState,
    provider: &P,
    credentials: &Credentials,
) -> Result<Identity, ShellError> {
    auth.begin_loading();
    match provider.authenticate(credentials) {
        Ok(identity) => {
            tracing::info!(user_id = %identity.id, role = %identity.role, "Signed in");
            auth.set_user(identity.clone());
            Ok(identity)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Sign-in rejected");
            auth.clear_auth();
            Err(e)
        }
    }
}

/// Create an account through `provider` and sign the new user in.
pub fn register<P: IdentityProvider + ?Sized>(
    auth: &mut AuthState,
    provider: &mut P,
    registration: &Registration,
) -> Result<Identity, ShellError> {
    auth.begin_loading();
    match provider.register(registration) {
        Ok(identity) => {
            tracing::info!(user_id = %identity.id, "Account registered");
            auth.set_user(identity.clone());
            Ok(identity)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Registration rejected");
            auth.clear_auth();
            Err(e)
        }
    }
}

/// End the session and drop everything cached for it.
pub fn sign_out(auth: &mut AuthState, query: &mut QueryClient) {
    if let Some(user) = auth.current_user.peek().as_ref() {
        tracing::info!(user_id = %user.id, "Signed out");
    }
    query.clear();
    auth.clear_auth();
}
