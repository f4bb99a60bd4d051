#[cfg(debug_assertions)]
pub fn contact_endpoint() -> Option<&'static str> {
    Some("http://localhost:3001/api/contact") // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn contact_endpoint() -> Option<&'static str> {
    // Set at build time, e.g. NOVA_CONTACT_ENDPOINT=https://hooks.example.com/contact
    option_env!("NOVA_CONTACT_ENDPOINT").filter(|url| !url.is_empty())
}
