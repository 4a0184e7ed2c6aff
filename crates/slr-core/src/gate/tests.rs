//! Gate decisions: pause first, then category toggles, then translation.

use chrono::TimeZone;

use super::*;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
}

fn later(minutes: i64) -> DateTime<Utc> {
    now() + chrono::Duration::minutes(minutes)
}

const APP: &str = "https://store.steampowered.com/app/730/";
const PROFILE: &str = "https://steamcommunity.com/id/testuser/games";
const WIZARD: &str = "https://help.steampowered.com/en/wizard/HelpWithGame/?appid=730";
const TICKETS: &str = "https://help.steampowered.com/en/tickets/";
const FAQ: &str = "https://help.steampowered.com/en/faqs/view/1";

#[test]
fn default_policy_toggles() {
    let policy = RedirectPolicy::default();
    assert!(should_redirect(APP, &policy));
    assert!(should_redirect(PROFILE, &policy));
    assert!(!should_redirect(FAQ, &policy));
    assert!(!should_redirect(WIZARD, &policy));
    assert!(!should_redirect("https://www.google.com/", &policy));
    assert!(!should_redirect("not a url", &policy));
}

#[test]
fn store_and_community_toggles_are_independent() {
    let policy = RedirectPolicy {
        redirect_store: false,
        ..RedirectPolicy::default()
    };
    assert!(!should_redirect(APP, &policy));
    assert!(should_redirect(PROFILE, &policy));

    let policy = RedirectPolicy {
        redirect_community: false,
        ..RedirectPolicy::default()
    };
    assert!(should_redirect(APP, &policy));
    assert!(!should_redirect(PROFILE, &policy));
}

#[test]
fn help_overrides_beat_general_toggle() {
    let wizard_only = RedirectPolicy {
        redirect_help_wizard: true,
        ..RedirectPolicy::default()
    };
    assert!(should_redirect(WIZARD, &wizard_only));
    assert!(!should_redirect(TICKETS, &wizard_only));
    assert!(!should_redirect(FAQ, &wizard_only));

    let tickets_only = RedirectPolicy {
        redirect_help_tickets: true,
        ..RedirectPolicy::default()
    };
    assert!(should_redirect(TICKETS, &tickets_only));
    assert!(!should_redirect(WIZARD, &tickets_only));

    let all_help = RedirectPolicy {
        redirect_help: true,
        ..RedirectPolicy::default()
    };
    assert!(should_redirect(FAQ, &all_help));
}

#[test]
fn help_path_match_is_case_insensitive() {
    let policy = RedirectPolicy {
        redirect_help_wizard: true,
        ..RedirectPolicy::default()
    };
    assert!(should_redirect(
        "https://help.steampowered.com/en/Wizard/HelpWithLogin/",
        &policy
    ));
}

#[test]
fn active_gate_redirects() {
    let decision = attempt(APP, &RedirectPolicy::default(), &PauseState::Active, now());
    assert_eq!(
        decision.uri().map(LaunchUri::as_str),
        Some("launch://store/730")
    );
    assert!(decision.is_redirect());
}

#[test]
fn pause_refuses_before_translation() {
    let pause = PauseState::Paused(PauseUntil::At(later(10)));
    assert_eq!(
        check(APP, &RedirectPolicy::default(), &pause, now()),
        Err(Skip::Refused(Refusal::Paused))
    );
    // Malformed input is not even looked at while paused.
    assert_eq!(
        check("garbage", &RedirectPolicy::default(), &pause, now()),
        Err(Skip::Refused(Refusal::Paused))
    );
}

#[test]
fn expired_pause_lets_redirects_through() {
    let pause = PauseState::Paused(PauseUntil::At(later(10)));
    assert!(attempt(APP, &RedirectPolicy::default(), &pause, later(10)).is_redirect());
}

#[test]
fn disabled_and_indefinite_refuse() {
    assert_eq!(
        check(APP, &RedirectPolicy::default(), &PauseState::Disabled, now()),
        Err(Skip::Refused(Refusal::Disabled))
    );
    let indefinite = PauseState::Paused(PauseUntil::Indefinite);
    assert_eq!(
        check(APP, &RedirectPolicy::default(), &indefinite, later(60 * 24 * 365)),
        Err(Skip::Refused(Refusal::Paused))
    );
}

#[test]
fn category_refusal_is_distinct_from_no_match() {
    let policy = RedirectPolicy {
        redirect_store: false,
        ..RedirectPolicy::default()
    };
    assert_eq!(
        check(APP, &policy, &PauseState::Active, now()),
        Err(Skip::Refused(Refusal::CategoryOff(SiteFamily::Store)))
    );
    assert_eq!(
        check(
            "https://store.steampowered.com/genre/Free%20to%20Play/",
            &RedirectPolicy::default(),
            &PauseState::Active,
            now()
        ),
        Err(Skip::NoMatch(TranslateError::Unrecognized(SiteFamily::Store)))
    );
}

#[test]
fn unknown_site_and_malformed() {
    assert_eq!(
        check(
            "https://duckduckgo.com/?q=steam",
            &RedirectPolicy::default(),
            &PauseState::Active,
            now()
        ),
        Err(Skip::Refused(Refusal::UnknownSite))
    );
    assert_eq!(
        check("", &RedirectPolicy::default(), &PauseState::Active, now()),
        Err(Skip::NoMatch(TranslateError::Malformed))
    );
}

#[test]
fn permitted_help_pages_still_do_not_redirect() {
    let policy = RedirectPolicy {
        redirect_help: true,
        redirect_help_wizard: true,
        redirect_help_tickets: true,
        ..RedirectPolicy::default()
    };
    for url in [WIZARD, TICKETS, FAQ] {
        assert_eq!(
            attempt(url, &policy, &PauseState::Active, now()),
            Decision::Skip(Skip::NoMatch(TranslateError::HelpExcluded)),
            "{url}"
        );
    }
}

#[test]
fn skip_reasons_read_well() {
    assert_eq!(
        Skip::Refused(Refusal::CategoryOff(SiteFamily::Community)).to_string(),
        "community redirects are turned off"
    );
    assert_eq!(
        Skip::NoMatch(TranslateError::MissingFileId).to_string(),
        "workshop page without a file id"
    );
}
