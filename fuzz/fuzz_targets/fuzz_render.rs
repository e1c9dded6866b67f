#![no_main]

use libfuzzer_sys::fuzz_target;

use emergency_banner::{render, Application, CampaignClass, CampaignContext};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let mut fields = text.splitn(3, '\u{0}');
    let heading = fields.next().unwrap_or_default();
    let extra_info = fields.next().unwrap_or_default();
    let url = fields.next().unwrap_or_default();

    let ctx = CampaignContext::new(heading, extra_info, url, CampaignClass::Red);
    for application in Application::ALL {
        let out = render(application, &ctx).expect("built-in templates always render");
        assert!(!out.contains("<script"));
    }
});
