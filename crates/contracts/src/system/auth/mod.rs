use serde::{Deserialize, Serialize};

/// Signed-in user as reported by the identity provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub display_name: Option<String>,
    pub image_url: Option<String>,
}

impl UserProfile {
    /// Build a profile from the provider's raw fields, dropping blanks.
    ///
    /// `full_name` is preferred over `username` for display.
    pub fn from_provider(
        full_name: Option<String>,
        username: Option<String>,
        image_url: Option<String>,
    ) -> Self {
        fn non_blank(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        Self {
            display_name: non_blank(full_name).or_else(|| non_blank(username)),
            image_url: non_blank(image_url),
        }
    }

    /// Initial shown when no avatar image is available
    pub fn initial(&self) -> String {
        self.display_name
            .as_deref()
            .and_then(|name| name.chars().next())
            .map(|c| c.to_uppercase().collect::<String>())
            .unwrap_or_else(|| "?".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_preferred() {
        let profile = UserProfile::from_provider(
            Some("Ada Lovelace".into()),
            Some("ada".into()),
            Some("https://img.example/ada.png".into()),
        );
        assert_eq!(profile.display_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(profile.image_url.as_deref(), Some("https://img.example/ada.png"));
    }

    #[test]
    fn test_blank_fields_dropped() {
        let profile = UserProfile::from_provider(Some("  ".into()), Some("ada".into()), Some("".into()));
        assert_eq!(profile.display_name.as_deref(), Some("ada"));
        assert_eq!(profile.image_url, None);
    }

    #[test]
    fn test_initial() {
        let profile = UserProfile::from_provider(None, Some("émile".into()), None);
        assert_eq!(profile.initial(), "É");
        assert_eq!(UserProfile::default().initial(), "?");
    }
}
