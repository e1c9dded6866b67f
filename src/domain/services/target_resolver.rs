//! Target Resolver
//!
//! Maps an application to the remote files a banner operation touches.
//! These paths are read by the applications themselves and must not change.

use crate::domain::value_objects::{Application, CampaignClass, TargetMode};

/// Homepage partial rendered by `frontend`
pub const FRONTEND_BANNER_PATH: &str =
    "/var/apps/frontend/app/views/homepage/_campaign_notification.html.erb";

/// Directory holding one notification partial per campaign class on `static`
pub const STATIC_BANNER_DIR: &str = "/var/apps/static/app/views/notifications";

/// Directory where `static` materializes layouts on first request
pub const STATIC_TEMPLATE_CACHE_DIR: &str = "/var/apps/static/public/templates";

/// Layouts generated from `static`'s notification partials and then served by nginx
pub const STATIC_GENERATED_TEMPLATES: [&str; 3] = [
    "wrapper.html.erb",
    "header_footer_only.html.erb",
    "core_layout.html.erb",
];

pub fn static_banner_path(class: CampaignClass) -> String {
    format!("{}/banner_{}.erb", STATIC_BANNER_DIR, class)
}

/// Remote files to write for `application`
///
/// Deploying to `static` writes the single partial for the chosen class.
/// Removing from `static` clears the partial of every class, because the
/// class of the banner currently live is not recorded anywhere.
pub fn target_paths(application: Application, mode: TargetMode) -> Vec<String> {
    match (application, mode) {
        (Application::Frontend, _) => vec![FRONTEND_BANNER_PATH.to_string()],
        (Application::Static, TargetMode::Deploy(class)) => vec![static_banner_path(class)],
        (Application::Static, TargetMode::Remove) => CampaignClass::ALL
            .into_iter()
            .map(static_banner_path)
            .collect(),
    }
}

/// Derived files to delete after `application`'s banner changes
pub fn cache_paths(application: Application) -> Vec<String> {
    if !application.has_derived_cache() {
        return Vec::new();
    }
    STATIC_GENERATED_TEMPLATES
        .iter()
        .map(|name| format!("{}/{}", STATIC_TEMPLATE_CACHE_DIR, name))
        .collect()
}
