pub const CONTACT_EMAIL: &str = "hello@clearline.studio";

#[cfg(debug_assertions)]
pub fn site_url() -> &'static str {
    "http://localhost:8080" // Development URL when serving locally with trunk
}

#[cfg(not(debug_assertions))]
pub fn site_url() -> &'static str {
    "https://clearline.studio"
}
