//! Store configuration
//!
//! # Environment variables
//!
//! Every setting can be overridden through the environment:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | MESA_SITE_DOMAIN | platform.com | Base domain for tenant microsites |
//! | MESA_PROMOTION_TAG | Special | Badge used when promoting without an explicit tag |
//! | MESA_POINTS_PER_ORDER | 10 | Default loyalty points per completed order |

/// Platform-wide store settings
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base domain for tenant microsites (`https://<slug>.<domain>`)
    pub site_domain: String,
    /// Promotion badge applied when no explicit tag is given
    pub default_promotion_tag: String,
    /// Default `points_per_order` for newly created restaurant websites
    pub points_per_order: i64,
}

impl StoreConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Self {
        Self {
            site_domain: std::env::var("MESA_SITE_DOMAIN")
                .unwrap_or_else(|_| "platform.com".into()),
            default_promotion_tag: std::env::var("MESA_PROMOTION_TAG")
                .unwrap_or_else(|_| "Special".into()),
            points_per_order: std::env::var("MESA_POINTS_PER_ORDER")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            site_domain: "platform.com".into(),
            default_promotion_tag: "Special".into(),
            points_per_order: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.site_domain, "platform.com");
        assert_eq!(config.default_promotion_tag, "Special");
        assert_eq!(config.points_per_order, 10);
    }
}
