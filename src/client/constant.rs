pub const SITE_NAME: &str = "AGI House India";
pub const SITE_TAGLINE: &str = "A private community for India's AI founders, investors and builders";
