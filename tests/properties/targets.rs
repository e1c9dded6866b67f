//! Property tests for target resolution and class parsing.

use proptest::prelude::*;

use emergency_banner::{cache_paths, target_paths, Application, CampaignClass, TargetMode};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: only red, black and green parse as campaign classes.
    #[test]
    fn property_class_parse_accepts_only_known_names(s in "(?s).{0,16}") {
        let parsed = s.parse::<CampaignClass>();
        let known = matches!(s.trim(), "red" | "black" | "green");
        prop_assert_eq!(parsed.is_ok(), known);
        if let Ok(class) = parsed {
            prop_assert_eq!(class.as_str(), s.trim());
        }
    }
}

#[test]
fn deploy_static_targets_only_the_chosen_class() {
    for class in CampaignClass::ALL {
        let paths = target_paths(Application::Static, TargetMode::Deploy(class));
        assert_eq!(paths.len(), 1);
        assert!(paths[0].ends_with(&format!("/banner_{}.erb", class)));
    }
}

#[test]
fn remove_static_targets_every_class_once() {
    let paths = target_paths(Application::Static, TargetMode::Remove);
    let mut unique = paths.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), CampaignClass::ALL.len());
    for class in CampaignClass::ALL {
        assert!(paths.contains(&target_paths(Application::Static, TargetMode::Deploy(class))[0]));
    }
}

#[test]
fn frontend_target_ignores_mode() {
    let remove = target_paths(Application::Frontend, TargetMode::Remove);
    for class in CampaignClass::ALL {
        assert_eq!(target_paths(Application::Frontend, TargetMode::Deploy(class)), remove);
    }
}

#[test]
fn only_static_has_cache_paths() {
    assert_eq!(cache_paths(Application::Static).len(), 3);
    assert!(cache_paths(Application::Frontend).is_empty());
}
