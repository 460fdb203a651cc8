pub const APP_NAME: &str = "Identity Uplift Calculator";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

pub fn version_label() -> String {
    match GIT_TAG {
        Some(tag) if tag.starts_with(['v', 'V']) => tag.to_string(),
        Some(tag) => format!("v{tag}"),
        None => format!("v{}", APP_VERSION),
    }
}

pub fn window_title() -> String {
    format!("{APP_NAME} {}", version_label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_prefixed_with_v() {
        assert!(version_label().starts_with('v'));
        assert!(window_title().starts_with(APP_NAME));
    }
}
