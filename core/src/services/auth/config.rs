//! Configuration for the authentication service

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Base URL the emailed verification link points at; the one-time key
    /// is appended as a query parameter
    pub verification_base_url: String,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            verification_base_url: "http://localhost:8080/api/v1/auth/verify".to_string(),
        }
    }
}

impl AuthServiceConfig {
    /// Build the verification link for a one-time key
    pub fn verification_link(&self, key: &str) -> String {
        format!(
            "{}?key={}",
            self.verification_base_url,
            urlencoding::encode(key)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_link_encodes_key() {
        let config = AuthServiceConfig {
            verification_base_url: "https://gatekey.example/api/v1/auth/verify".to_string(),
        };

        // '+' would otherwise decode as a space on the way back in
        let link = config.verification_link("abc+def");
        assert_eq!(
            link,
            "https://gatekey.example/api/v1/auth/verify?key=abc%2Bdef"
        );
    }
}
