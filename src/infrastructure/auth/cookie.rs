use actix_web::cookie::{time::Duration, Cookie, SameSite};

pub const SESSION_COOKIE: &str = "token";

/// Builds the HTTP-only cookie that carries the session JWT.
#[derive(Debug, Clone)]
pub struct SessionCookie {
    secure: bool,
    max_age_secs: i64,
}

impl SessionCookie {
    /// `max_age_secs` should match the lifetime of the token it carries.
    pub fn new(secure: bool, max_age_secs: i64) -> Self {
        SessionCookie { secure, max_age_secs }
    }

    fn same_site(&self) -> SameSite {
        // Browsers drop SameSite=None cookies that are not Secure.
        if self.secure { SameSite::None } else { SameSite::Lax }
    }

    pub fn issue(&self, token: String) -> Cookie<'static> {
        Cookie::build(SESSION_COOKIE, token)
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(self.same_site())
            .max_age(Duration::seconds(self.max_age_secs))
            .finish()
    }

    pub fn clear(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build(SESSION_COOKIE, "")
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(self.same_site())
            .finish();
        cookie.make_removal();
        cookie
    }
}
