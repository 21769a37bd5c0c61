pub fn get_asset_base() -> &'static str {
    option_env!("RAZORS_EDGE_ASSET_BASE").unwrap_or("/images")
}

pub fn asset_url(file: &str) -> String {
    join_asset(get_asset_base(), file)
}

fn join_asset(base: &str, file: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), file.trim_start_matches('/'))
}

pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_without_doubled_slashes() {
        assert_eq!(join_asset("/images/", "/gallery.jpg"), "/images/gallery.jpg");
        assert_eq!(join_asset("https://cdn.example.com/edge", "hero.jpg"), "https://cdn.example.com/edge/hero.jpg");
    }

    #[test]
    fn asset_url_uses_configured_base() {
        let url = asset_url("hero.jpg");
        assert!(url.starts_with(get_asset_base().trim_end_matches('/')));
        assert!(url.ends_with("/hero.jpg"));
    }
}
