//! Microsite settings: appearance, hours, social links, images, QR codes
//!
//! Website settings are embedded in the restaurant record, so every
//! operation here resolves the restaurant first and patches in place.

use shared::models::{BusinessHour, ImageKind, RestaurantWebsiteUpdate, SocialLinks};

use super::RestaurantStore;

impl RestaurantStore {
    /// Shallow-merge a settings patch into a restaurant's website
    pub fn update_website_settings(&self, restaurant_id: &str, patch: RestaurantWebsiteUpdate) {
        let mut state = self.state.write();
        let Some(restaurant) = state.restaurants.iter_mut().find(|r| r.id == restaurant_id)
        else {
            return;
        };
        let site = &mut restaurant.website;
        if let Some(theme) = patch.theme {
            site.theme = theme;
        }
        if let Some(primary_color) = patch.primary_color {
            site.primary_color = primary_color;
        }
        if let Some(logo_url) = patch.logo_url {
            site.logo_url = Some(logo_url);
        }
        if let Some(banner_url) = patch.banner_url {
            site.banner_url = Some(banner_url);
        }
        if let Some(description) = patch.description {
            site.description = description;
        }
        if let Some(address) = patch.address {
            site.address = address;
        }
        if let Some(phone_number) = patch.phone_number {
            site.phone_number = phone_number;
        }
        if let Some(email) = patch.email {
            site.email = email;
        }
        if let Some(business_hours) = patch.business_hours {
            site.business_hours = business_hours;
        }
        if let Some(gallery_images) = patch.gallery_images {
            site.gallery_images = gallery_images;
        }
        if let Some(social_links) = patch.social_links {
            site.social_links = social_links;
        }
        if let Some(show_map) = patch.show_map {
            site.show_map = show_map;
        }
        if let Some(show_reviews) = patch.show_reviews {
            site.show_reviews = show_reviews;
        }
        if let Some(whatsapp_enabled) = patch.whatsapp_enabled {
            site.whatsapp_enabled = whatsapp_enabled;
        }
        if let Some(whatsapp_number) = patch.whatsapp_number {
            site.whatsapp_number = Some(whatsapp_number);
        }
        if let Some(whatsapp_greeting) = patch.whatsapp_greeting {
            site.whatsapp_greeting = Some(whatsapp_greeting);
        }
        if let Some(loyalty_enabled) = patch.loyalty_enabled {
            site.loyalty_enabled = loyalty_enabled;
        }
        if let Some(points_per_order) = patch.points_per_order {
            site.points_per_order = points_per_order;
        }
        if let Some(reviews_require_approval) = patch.reviews_require_approval {
            site.reviews_require_approval = reviews_require_approval;
        }
        if let Some(analytics_enabled) = patch.analytics_enabled {
            site.analytics_enabled = analytics_enabled;
        }
        if let Some(analytics_code) = patch.analytics_code {
            site.analytics_code = Some(analytics_code);
        }
        drop(state);
        self.versions.increment("restaurant");
    }

    /// Attach an uploaded image URL to its microsite slot
    ///
    /// Logo and banner slots hold one image and are replaced; gallery
    /// uploads append.
    pub fn upload_image(&self, restaurant_id: &str, kind: ImageKind, url: &str) {
        let mut state = self.state.write();
        let Some(restaurant) = state.restaurants.iter_mut().find(|r| r.id == restaurant_id)
        else {
            return;
        };
        match kind {
            ImageKind::Logo => restaurant.website.logo_url = Some(url.to_string()),
            ImageKind::Banner => restaurant.website.banner_url = Some(url.to_string()),
            ImageKind::Gallery => restaurant.website.gallery_images.push(url.to_string()),
        }
        drop(state);
        self.versions.increment("restaurant");
    }

    pub fn remove_gallery_image(&self, restaurant_id: &str, url: &str) {
        let mut state = self.state.write();
        let Some(restaurant) = state.restaurants.iter_mut().find(|r| r.id == restaurant_id)
        else {
            return;
        };
        let before = restaurant.website.gallery_images.len();
        restaurant.website.gallery_images.retain(|u| u != url);
        if restaurant.website.gallery_images.len() == before {
            return;
        }
        drop(state);
        self.versions.increment("restaurant");
    }

    /// Replace the weekly opening hours
    pub fn update_business_hours(&self, restaurant_id: &str, hours: Vec<BusinessHour>) {
        let mut state = self.state.write();
        let Some(restaurant) = state.restaurants.iter_mut().find(|r| r.id == restaurant_id)
        else {
            return;
        };
        restaurant.website.business_hours = hours;
        drop(state);
        self.versions.increment("restaurant");
    }

    pub fn update_social_links(&self, restaurant_id: &str, links: SocialLinks) {
        let mut state = self.state.write();
        let Some(restaurant) = state.restaurants.iter_mut().find(|r| r.id == restaurant_id)
        else {
            return;
        };
        restaurant.website.social_links = links;
        drop(state);
        self.versions.increment("restaurant");
    }

    /// Public microsite URL encoded in the table QR codes
    ///
    /// Pure derivation from the slug; an unknown restaurant yields an
    /// empty string so callers can render a blank code without a branch.
    pub fn qr_code_url(&self, restaurant_id: &str) -> String {
        self.state
            .read()
            .restaurants
            .iter()
            .find(|r| r.id == restaurant_id)
            .map(|r| format!("https://{}.{}", r.slug, self.config.site_domain))
            .unwrap_or_default()
    }

    /// Same URL as [`Self::qr_code_url`]; the logo overlay is applied
    /// client-side when the code is rendered
    pub fn qr_code_with_logo(&self, restaurant_id: &str) -> String {
        self.qr_code_url(restaurant_id)
    }
}

#[cfg(test)]
mod tests {
    use shared::models::{RestaurantCreate, Theme, Weekday};

    use super::*;
    use crate::config::StoreConfig;

    fn store_with_restaurant() -> (RestaurantStore, String) {
        let store = RestaurantStore::new(StoreConfig::default());
        let rest = store.add_restaurant(RestaurantCreate {
            name: "Bistro Bella".to_string(),
            slug: "bistro-bella".to_string(),
            owner_name: "Isabella Chen".to_string(),
            owner_email: "isabella@bistrobella.com".to_string(),
        });
        (store, rest.id)
    }

    #[test]
    fn test_settings_patch_is_a_shallow_merge() {
        let (store, rest_id) = store_with_restaurant();

        store.update_website_settings(
            &rest_id,
            RestaurantWebsiteUpdate {
                theme: Some(Theme::Dark),
                description: Some("Rustic Italian kitchen".to_string()),
                ..RestaurantWebsiteUpdate::default()
            },
        );

        let site = store.restaurant(&rest_id).unwrap().website;
        assert_eq!(site.theme, Theme::Dark);
        assert_eq!(site.description, "Rustic Italian kitchen");
        // untouched fields keep their defaults
        assert_eq!(site.primary_color, "#9b87f5");
        assert_eq!(site.business_hours.len(), 7);
    }

    #[test]
    fn test_image_slots_replace_and_gallery_appends() {
        let (store, rest_id) = store_with_restaurant();

        store.upload_image(&rest_id, ImageKind::Logo, "https://cdn.test/logo-v1.png");
        store.upload_image(&rest_id, ImageKind::Logo, "https://cdn.test/logo-v2.png");
        store.upload_image(&rest_id, ImageKind::Gallery, "https://cdn.test/dining.jpg");
        store.upload_image(&rest_id, ImageKind::Gallery, "https://cdn.test/patio.jpg");

        let site = store.restaurant(&rest_id).unwrap().website;
        assert_eq!(site.logo_url.as_deref(), Some("https://cdn.test/logo-v2.png"));
        assert_eq!(site.gallery_images.len(), 2);

        store.remove_gallery_image(&rest_id, "https://cdn.test/dining.jpg");
        let site = store.restaurant(&rest_id).unwrap().website;
        assert_eq!(site.gallery_images, vec!["https://cdn.test/patio.jpg".to_string()]);
    }

    #[test]
    fn test_business_hours_replacement() {
        let (store, rest_id) = store_with_restaurant();
        store.update_business_hours(
            &rest_id,
            vec![BusinessHour::new(Weekday::Saturday, "11:00", "23:00")],
        );
        let hours = store.restaurant(&rest_id).unwrap().website.business_hours;
        assert_eq!(hours.len(), 1);
        assert_eq!(hours[0].close_time, "23:00");
    }

    #[test]
    fn test_qr_code_url_derivation() {
        let (store, rest_id) = store_with_restaurant();
        assert_eq!(
            store.qr_code_url(&rest_id),
            "https://bistro-bella.platform.com"
        );
        assert_eq!(store.qr_code_with_logo(&rest_id), store.qr_code_url(&rest_id));
        assert_eq!(store.qr_code_url("rest-unknown"), "");
    }

    #[test]
    fn test_settings_patch_for_missing_restaurant_is_a_noop() {
        let (store, _) = store_with_restaurant();
        let version = store.version("restaurant");
        store.update_website_settings("rest-unknown", RestaurantWebsiteUpdate::default());
        assert_eq!(store.version("restaurant"), version);
    }
}
