//! Restaurant Website Models
//!
//! Settings for the public-facing microsite, embedded in the
//! `Restaurant` entity. Visitor stats live here too because they are
//! per-site, not per-collection.

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;
use crate::util::now_millis;

/// Microsite color theme
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

/// Day of week for business hours
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Opening hours for one day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessHour {
    pub day: Weekday,
    pub open: bool,
    /// "HH:MM", caller-validated
    pub open_time: String,
    pub close_time: String,
}

impl BusinessHour {
    pub fn new(day: Weekday, open_time: &str, close_time: &str) -> Self {
        Self {
            day,
            open: true,
            open_time: open_time.to_string(),
            close_time: close_time.to_string(),
        }
    }
}

/// Social media profile links
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialLinks {
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub yelp: Option<String>,
    pub tripadvisor: Option<String>,
}

/// One entry in the visitor top-items ranking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemViewCount {
    /// Menu item reference (String ID)
    pub item_id: String,
    pub views: u64,
}

/// Aggregated microsite visitor statistics
///
/// `top_items` is kept sorted descending by views and capped at the 10
/// highest entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitorStats {
    pub total_visits: u64,
    pub unique_visitors: u64,
    /// Seconds, reported by the analytics snippet
    pub average_time_on_page: f64,
    pub top_items: Vec<ItemViewCount>,
    pub last_updated: Timestamp,
}

impl Default for VisitorStats {
    fn default() -> Self {
        Self {
            total_visits: 0,
            unique_visitors: 0,
            average_time_on_page: 0.0,
            top_items: Vec::new(),
            last_updated: now_millis(),
        }
    }
}

/// Partial patch for visitor statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisitorStatsUpdate {
    pub total_visits: Option<u64>,
    pub unique_visitors: Option<u64>,
    pub average_time_on_page: Option<f64>,
    pub top_items: Option<Vec<ItemViewCount>>,
}

/// Image slot on the microsite
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    Logo,
    Banner,
    Gallery,
}

/// Public microsite settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantWebsite {
    pub theme: Theme,
    /// CSS color, e.g. "#9b87f5"
    pub primary_color: String,
    pub logo_url: Option<String>,
    pub banner_url: Option<String>,
    pub description: String,
    pub address: String,
    pub phone_number: String,
    pub email: String,
    pub business_hours: Vec<BusinessHour>,
    pub gallery_images: Vec<String>,
    pub social_links: SocialLinks,
    pub show_map: bool,
    pub show_reviews: bool,
    pub whatsapp_enabled: bool,
    pub whatsapp_number: Option<String>,
    pub whatsapp_greeting: Option<String>,
    pub loyalty_enabled: bool,
    /// Points earned per completed order when loyalty is enabled
    pub points_per_order: i64,
    /// When on, only approved reviews are surfaced publicly
    pub reviews_require_approval: bool,
    pub analytics_enabled: bool,
    pub analytics_code: Option<String>,
    pub visitor_stats: VisitorStats,
}

impl Default for RestaurantWebsite {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            primary_color: "#9b87f5".to_string(),
            logo_url: None,
            banner_url: None,
            description: String::new(),
            address: String::new(),
            phone_number: String::new(),
            email: String::new(),
            business_hours: default_business_hours(),
            gallery_images: Vec::new(),
            social_links: SocialLinks::default(),
            show_map: true,
            show_reviews: true,
            whatsapp_enabled: false,
            whatsapp_number: None,
            whatsapp_greeting: None,
            loyalty_enabled: false,
            points_per_order: 10,
            reviews_require_approval: true,
            analytics_enabled: false,
            analytics_code: None,
            visitor_stats: VisitorStats::default(),
        }
    }
}

/// Weekday 09:00-21:00, Friday/Saturday late close, Sunday short day
fn default_business_hours() -> Vec<BusinessHour> {
    vec![
        BusinessHour::new(Weekday::Monday, "09:00", "21:00"),
        BusinessHour::new(Weekday::Tuesday, "09:00", "21:00"),
        BusinessHour::new(Weekday::Wednesday, "09:00", "21:00"),
        BusinessHour::new(Weekday::Thursday, "09:00", "21:00"),
        BusinessHour::new(Weekday::Friday, "09:00", "22:00"),
        BusinessHour::new(Weekday::Saturday, "10:00", "22:00"),
        BusinessHour::new(Weekday::Sunday, "10:00", "20:00"),
    ]
}

/// Partial patch for website settings
///
/// Every field optional; `None` leaves the current value untouched
/// (shallow merge, same contract as the entity `*Update` payloads).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantWebsiteUpdate {
    pub theme: Option<Theme>,
    pub primary_color: Option<String>,
    pub logo_url: Option<String>,
    pub banner_url: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub business_hours: Option<Vec<BusinessHour>>,
    pub gallery_images: Option<Vec<String>>,
    pub social_links: Option<SocialLinks>,
    pub show_map: Option<bool>,
    pub show_reviews: Option<bool>,
    pub whatsapp_enabled: Option<bool>,
    pub whatsapp_number: Option<String>,
    pub whatsapp_greeting: Option<String>,
    pub loyalty_enabled: Option<bool>,
    pub points_per_order: Option<i64>,
    pub reviews_require_approval: Option<bool>,
    pub analytics_enabled: Option<bool>,
    pub analytics_code: Option<String>,
}
