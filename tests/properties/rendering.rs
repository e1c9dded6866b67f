//! Property tests for banner rendering.

use proptest::prelude::*;

use emergency_banner::domain::services::escape_html;
use emergency_banner::{render, Application, CampaignClass, CampaignContext};

fn operator_text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-jl-pr-wyzA-WY0-9 <>&\"'/=]{0,40}").unwrap()
}

fn campaign_class() -> impl Strategy<Value = CampaignClass> {
    prop_oneof![
        Just(CampaignClass::Red),
        Just(CampaignClass::Black),
        Just(CampaignClass::Green),
    ]
}

fn application() -> impl Strategy<Value = Application> {
    prop_oneof![Just(Application::Static), Just(Application::Frontend)]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: escaped heading and description appear exactly once.
    ///
    /// The markers keep the needle from colliding with template markup.
    #[test]
    fn property_fields_are_escaped_once(
        app in application(),
        class in campaign_class(),
        heading in operator_text(),
        extra in operator_text(),
    ) {
        let heading = format!("Zq{heading}");
        let extra = format!("Xk{extra}");
        let ctx = CampaignContext::new(heading.clone(), extra.clone(), "", class);
        let out = render(app, &ctx).unwrap();

        prop_assert_eq!(out.matches(&escape_html(&heading)).count(), 1);
        prop_assert_eq!(out.matches(&escape_html(&extra)).count(), 1);
    }

    /// PROPERTY: operator input never adds markup.
    #[test]
    fn property_input_adds_no_tags(
        app in application(),
        class in campaign_class(),
        heading in operator_text(),
        extra in operator_text(),
        url in operator_text(),
    ) {
        let ctx = CampaignContext::new(heading, extra, url.clone(), class);
        let out = render(app, &ctx).unwrap();

        let placeholder_url = if url.is_empty() { "" } else { "u" };
        let baseline = render(app, &CampaignContext::new("h", "e", placeholder_url, class)).unwrap();
        prop_assert_eq!(out.matches('<').count(), baseline.matches('<').count());
        prop_assert_eq!(out.matches('>').count(), baseline.matches('>').count());
    }

    /// PROPERTY: exactly one link, targeting the escaped URL, iff a URL was given.
    #[test]
    fn property_link_iff_url(
        app in application(),
        class in campaign_class(),
        url in proptest::option::of("https://[a-z]{1,12}\\.example/[a-z0-9&\"<>'=? ]{0,16}"),
    ) {
        let ctx = CampaignContext::new("Heading", "Info", url.clone().unwrap_or_default(), class);
        let out = render(app, &ctx).unwrap();

        let expected_links = usize::from(url.is_some());
        prop_assert_eq!(out.matches("<a ").count(), expected_links);
        prop_assert_eq!(out.matches("More information").count(), expected_links);
        if let Some(url) = url {
            let href = format!("href=\"{}\"", escape_html(&url));
            prop_assert_eq!(out.matches(&href).count(), 1, "{}", out);
        }
    }

    /// PROPERTY: frontend's container carries the campaign class.
    #[test]
    fn property_frontend_container_has_class(class in campaign_class(), heading in operator_text()) {
        let out = render(Application::Frontend, &CampaignContext::new(heading, "Info", "", class)).unwrap();
        let expected = format!("<div id=\"campaign\" class=\"{}\">", class);
        prop_assert!(out.starts_with(&expected), "{}", out);
    }
}
