use crate::platform::{self, Store};
use dioxus::prelude::*;
use shared_types::{Sesion, Usuario};

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";
const JUST_LOGGED_IN_KEY: &str = "justLoggedIn";

/// Global session state, backed by persistent browser storage.
///
/// The token is the only cross-component shared mutable resource: it is
/// read at the start of each network call and written only by
/// login/logout (or by a 401, which forces logout).
#[derive(Clone, Copy)]
pub struct SessionState {
    pub actual: Signal<Option<Sesion>>,
}

impl SessionState {
    /// Restore whatever session persisted storage still holds. The
    /// server remains the authority: a stale token dies on its first 401.
    pub fn new() -> Self {
        Self {
            actual: Signal::new(restaurar(
                platform::get(Store::Local, TOKEN_KEY),
                platform::get(Store::Local, USER_KEY),
            )),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.actual.read().is_some()
    }

    /// Current bearer token, read fresh on every call site.
    pub fn token(&self) -> Option<String> {
        self.actual.read().as_ref().map(|s| s.token.clone())
    }

    pub fn usuario(&self) -> Option<Usuario> {
        self.actual.read().as_ref().map(|s| s.user.clone())
    }

    /// Persist a fresh login and arm the one-shot alert flag.
    pub fn iniciar(&mut self, sesion: Sesion) {
        platform::set(Store::Local, TOKEN_KEY, &sesion.token);
        if let Ok(json) = serde_json::to_string(&sesion.user) {
            platform::set(Store::Local, USER_KEY, &json);
        }
        platform::set(Store::Session, JUST_LOGGED_IN_KEY, "true");
        self.actual.set(Some(sesion));
    }

    /// Destroy the session: logout, or a 401 on any authenticated call.
    pub fn cerrar(&mut self) {
        platform::remove(Store::Local, TOKEN_KEY);
        platform::remove(Store::Local, USER_KEY);
        platform::remove(Store::Session, JUST_LOGGED_IN_KEY);
        self.actual.set(None);
    }

    /// Refresh the stored user copy (profile re-fetch, avatar change).
    pub fn actualizar_usuario(&mut self, user: Usuario) {
        if let Ok(json) = serde_json::to_string(&user) {
            platform::set(Store::Local, USER_KEY, &json);
        }
        let token = self.token();
        if let Some(token) = token {
            self.actual.set(Some(Sesion { token, user }));
        }
    }

    /// Consume the one-shot "just logged in" flag. Returns true at most
    /// once per login; the alert poller keys off this.
    pub fn take_just_logged_in(&self) -> bool {
        let armado = platform::get(Store::Session, JUST_LOGGED_IN_KEY).as_deref() == Some("true");
        if armado {
            platform::remove(Store::Session, JUST_LOGGED_IN_KEY);
        }
        armado
    }
}

/// Rebuild a session from its two persisted halves. Either half missing
/// or unparseable means no session.
fn restaurar(token: Option<String>, user_json: Option<String>) -> Option<Sesion> {
    let token = token?;
    let user: Usuario = serde_json::from_str(&user_json?).ok()?;
    Some(Sesion { token, user })
}

/// Hook to access session state.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn restaurar_necesita_ambas_mitades() {
        assert!(restaurar(None, None).is_none());
        assert!(restaurar(Some("jwt".into()), None).is_none());
        assert!(restaurar(None, Some("{}".into())).is_none());
    }

    #[test]
    fn restaurar_con_json_corrupto_devuelve_none() {
        assert!(restaurar(Some("jwt".into()), Some("{no es json".into())).is_none());
    }

    #[test]
    fn restaurar_reconstruye_la_sesion() {
        let user = r#"{"id":1,"nombre":"Ana","email":"ana@example.com","rol":"Admin"}"#;
        let sesion = restaurar(Some("jwt".into()), Some(user.into())).unwrap();
        assert_eq!(sesion.token, "jwt");
        assert_eq!(sesion.user.rol, "Admin");
    }

    #[test]
    fn la_bandera_one_shot_se_consume_al_leerla() {
        platform::set(Store::Session, JUST_LOGGED_IN_KEY, "true");
        // No Signal involved: exercise the storage halves directly.
        let armado = platform::get(Store::Session, JUST_LOGGED_IN_KEY).as_deref() == Some("true");
        assert!(armado);
        platform::remove(Store::Session, JUST_LOGGED_IN_KEY);
        assert_eq!(platform::get(Store::Session, JUST_LOGGED_IN_KEY), None);
    }
}
