//! Template Renderer
//!
//! Maps an application and a campaign to the HTML fragment that application
//! serves as its banner. Pure: no filesystem, no network.
//!
//! Templates are Jinja. The `e` and `escape` filters are bound to
//! [`escape_html`] so escaping has a single definition in the crate.

use minijinja::{Environment, Value};

use crate::domain::entities::CampaignContext;
use crate::domain::value_objects::Application;
use crate::error::{BannerError, BannerResult};

use super::escaping::escape_html;

/// Homepage partial for the `frontend` application
const FRONTEND_TEMPLATE: &str = r#"<div id="campaign" class="{{ campaign_class }}">
  <div class="campaign-inner">
    <h1>{{ heading|e }}</h1>
    <p>{{ extra_info|e }}</p>
{%- if more_info_url %}
    <a href="{{ more_info_url|e }}">More information</a>
{%- endif %}
  </div>
</div>"#;

/// Notification partial for the `static` application
const STATIC_TEMPLATE: &str = r#"<p>{{ heading|e }}<br />
  {{ extra_info|e }}</p>
{%- if more_info_url %}
<a href="{{ more_info_url|e }}" class="more-information">More information</a>
{%- endif %}"#;

fn template_source(application: Application) -> &'static str {
    match application {
        Application::Frontend => FRONTEND_TEMPLATE,
        Application::Static => STATIC_TEMPLATE,
    }
}

fn escape_filter(value: &str) -> Value {
    Value::from_safe_string(escape_html(value))
}

fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.add_filter("e", escape_filter);
    env.add_filter("escape", escape_filter);
    env
}

/// Render the banner fragment for `application`
pub fn render(application: Application, context: &CampaignContext) -> BannerResult<String> {
    environment()
        .render_named_str(application.name(), template_source(application), context)
        .map_err(|e| BannerError::Template {
            application,
            message: e.to_string(),
        })
}

/// Render the banner fragment for an application given by name
///
/// Names outside the known set fail with
/// [`BannerError::UnsupportedApplication`] instead of producing a fragment.
pub fn render_named(application: &str, context: &CampaignContext) -> BannerResult<String> {
    render(application.parse()?, context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::CampaignClass;

    fn campaign(url: &str) -> CampaignContext {
        CampaignContext::new("Test", "Info", url, CampaignClass::Red)
    }

    #[test]
    fn static_without_link() {
        let out = render(Application::Static, &campaign("")).unwrap();
        assert_eq!(out, "<p>Test<br />\n  Info</p>");
    }

    #[test]
    fn static_with_link() {
        let out = render(Application::Static, &campaign("https://example.org/flood")).unwrap();
        assert_eq!(
            out,
            "<p>Test<br />\n  Info</p>\n<a href=\"https://example.org/flood\" class=\"more-information\">More information</a>"
        );
    }

    #[test]
    fn frontend_without_link() {
        let out = render(Application::Frontend, &campaign("")).unwrap();
        assert_eq!(
            out,
            "<div id=\"campaign\" class=\"red\">\n  <div class=\"campaign-inner\">\n    <h1>Test</h1>\n    <p>Info</p>\n  </div>\n</div>"
        );
    }

    #[test]
    fn frontend_with_link() {
        let out = render(Application::Frontend, &campaign("https://example.org/flood")).unwrap();
        assert_eq!(
            out,
            "<div id=\"campaign\" class=\"red\">\n  <div class=\"campaign-inner\">\n    <h1>Test</h1>\n    <p>Info</p>\n    <a href=\"https://example.org/flood\">More information</a>\n  </div>\n</div>"
        );
    }

    #[test]
    fn frontend_carries_each_class() {
        for class in CampaignClass::ALL {
            let ctx = CampaignContext::new("H", "I", "", class);
            let out = render(Application::Frontend, &ctx).unwrap();
            assert!(out.starts_with(&format!("<div id=\"campaign\" class=\"{}\">", class)));
        }
    }

    #[test]
    fn operator_input_is_escaped() {
        let ctx = CampaignContext::new(
            "<b>Flood</b> & storm",
            "<script>alert('x')</script>",
            "https://example.org/?a=1&b=\"2\"",
            CampaignClass::Black,
        );
        for application in Application::ALL {
            let out = render(application, &ctx).unwrap();
            assert!(out.contains("&lt;b&gt;Flood&lt;/b&gt; &amp; storm"));
            assert!(out.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
            assert!(out.contains("href=\"https://example.org/?a=1&amp;b=&quot;2&quot;\""));
            assert!(!out.contains("<script>"));
            assert!(!out.contains("<b>"));
        }
    }

    #[test]
    fn template_syntax_in_input_is_not_evaluated() {
        let ctx = CampaignContext::new("{{ campaign_class }}", "{% if true %}x{% endif %}", "", CampaignClass::Green);
        let out = render(Application::Static, &ctx).unwrap();
        assert!(out.contains("{{ campaign_class }}"));
        assert!(out.contains("{% if true %}x{% endif %}"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let ctx = campaign("https://example.org");
        assert_eq!(
            render(Application::Frontend, &ctx).unwrap(),
            render(Application::Frontend, &ctx).unwrap()
        );
    }

    #[test]
    fn unknown_application_name_fails() {
        let err = render_named("whitehall", &campaign("")).unwrap_err();
        assert!(matches!(err, BannerError::UnsupportedApplication { ref name, .. } if name == "whitehall"));
    }

    #[test]
    fn known_application_name_renders() {
        let out = render_named("static", &campaign("")).unwrap();
        assert_eq!(out, "<p>Test<br />\n  Info</p>");
    }
}
