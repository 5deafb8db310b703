pub const ENV_SERVICE_ID: &str = "EMAILJS_SERVICE_ID";
pub const ENV_TEMPLATE_ID: &str = "EMAILJS_TEMPLATE_ID";
pub const ENV_PUBLIC_KEY: &str = "EMAILJS_PUBLIC_KEY";
pub const ENV_API_URL: &str = "EMAILJS_API_URL";
pub const ENV_CONFIG_PATH: &str = "VAGDEVI_CONFIG_PATH";
pub const ENV_ENV_FILE: &str = "VAGDEVI_ENV_FILE";
pub const ENV_CAROUSEL_RADIUS: &str = "VAGDEVI_CAROUSEL_RADIUS";
pub const ENV_SWIPE_THRESHOLD: &str = "VAGDEVI_SWIPE_THRESHOLD";
pub const ENV_CONTACT_RESET_SECS: &str = "VAGDEVI_CONTACT_RESET_SECS";

/// Every variable the loader reads, in documentation order.
pub const MANAGED_KEYS: &[&str] = &[
    ENV_SERVICE_ID,
    ENV_TEMPLATE_ID,
    ENV_PUBLIC_KEY,
    ENV_API_URL,
    ENV_CONFIG_PATH,
    ENV_ENV_FILE,
    ENV_CAROUSEL_RADIUS,
    ENV_SWIPE_THRESHOLD,
    ENV_CONTACT_RESET_SECS,
];

pub const DEFAULT_RELAY_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
