//! Runtime environment as seen by the scheme handlers.
//!
//! Only the browser name is consumed. It either comes from configuration or
//! is derived from a user agent string.

/// Read-only view of the runtime a player is running in.
pub trait Environment {
    /// Name of the current browser, `None` when unknown.
    fn browser_name(&self) -> Option<&str>;
}

impl<T: Environment + ?Sized> Environment for &T {
    fn browser_name(&self) -> Option<&str> {
        (**self).browser_name()
    }
}

/// Whether the environment is recognized as able to play FairPlay content.
///
/// Capability is inferred from the browser name alone: any Safari flavour
/// qualifies.
pub fn supports_fairplay<E: Environment + ?Sized>(env: &E) -> bool {
    env.browser_name()
        .is_some_and(|name| !name.is_empty() && name.contains("Safari"))
}

/// Browser identity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowserInfo {
    pub name: Option<String>,
    pub version: Option<String>,
}

impl BrowserInfo {
    /// Browser with a known name and no version.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            version: None,
        }
    }

    pub fn unknown() -> Self {
        Self::default()
    }

    /// Classify a user agent string.
    ///
    /// Chromium based browsers also advertise `Safari/`, so the more specific
    /// tokens are checked first and Safari is the fallback. The Android stock
    /// browser carries the same WebKit tokens as Safari and is told apart by
    /// its platform.
    pub fn from_user_agent(user_agent: &str) -> Self {
        const TOKENS: [(&str, &str); 7] = [
            ("Edg/", "Edge"),
            ("EdgiOS/", "Edge"),
            ("OPR/", "Opera"),
            ("Firefox/", "Firefox"),
            ("FxiOS/", "Firefox"),
            ("Chrome/", "Chrome"),
            ("CriOS/", "Chrome"),
        ];

        for (token, name) in TOKENS {
            if let Some(version) = token_version(user_agent, token) {
                return Self {
                    name: Some(name.to_string()),
                    version,
                };
            }
        }

        if token_version(user_agent, "Safari/").is_some() {
            let name = if user_agent.contains("Android") {
                "Android Browser"
            } else if user_agent.contains("Mobile/") {
                "Mobile Safari"
            } else {
                "Safari"
            };
            return Self {
                name: Some(name.to_string()),
                version: token_version(user_agent, "Version/").flatten(),
            };
        }

        Self::unknown()
    }
}

impl Environment for BrowserInfo {
    fn browser_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// `None` if `token` is absent, otherwise the version that follows it (if any).
fn token_version(user_agent: &str, token: &str) -> Option<Option<String>> {
    let start = user_agent.find(token)? + token.len();
    let version: String = user_agent[start..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '.')
        .collect();
    Some((!version.is_empty()).then_some(version))
}
