use url_rewrite_rs::{RequestUrl, RuleSet};

fn url(target: &str) -> RequestUrl {
    RequestUrl::parse(target).expect("fixture target should parse")
}

#[test]
fn ruleset_when_two_rules_match_then_first_wins() {
    let set = RuleSet::new([("/api/(.*)", "/generic/$1"), ("/api/v1/(.*)", "/v1/$1")]).unwrap();
    let mut url = url("/api/v1/ping");

    assert!(set.apply(&mut url));
    assert_eq!(url.target(), "/generic/v1/ping");
}

#[test]
fn ruleset_when_first_rule_misses_then_later_rule_is_consulted() {
    let set = RuleSet::new([("/api/v2/(.*)", "/v2/$1"), ("/api/(.*)", "/generic/$1")]).unwrap();
    let mut url = url("/api/health");

    assert!(set.apply(&mut url));
    assert_eq!(url.target(), "/generic/health");
}

#[test]
fn ruleset_when_candidate_does_not_parse_then_evaluation_falls_through() {
    let set = RuleSet::new([("/x/(.*)", "/%zz/$1"), ("/x/(.*)", "/ok/$1")]).unwrap();
    let mut url = url("/x/1");

    assert!(set.apply(&mut url));
    assert_eq!(url.target(), "/ok/1");
}

#[test]
fn ruleset_when_only_rule_produces_broken_candidate_then_request_is_untouched() {
    let set = RuleSet::new([("/x/(.*)", "/%zz/$1")]).unwrap();
    let mut url = url("/x/1");
    let before = url.clone();

    assert!(!set.apply(&mut url));
    assert_eq!(url, before);
}

#[test]
fn ruleset_when_rewritten_target_matches_a_later_rule_then_it_is_not_rechained() {
    let set = RuleSet::new([("/a", "/b"), ("/b", "/c")]).unwrap();
    let mut url = url("/a");

    assert!(set.apply(&mut url));
    assert_eq!(url.target(), "/b");

    // idempotence is not guaranteed: a second pass may match again
    assert!(set.apply(&mut url));
    assert_eq!(url.target(), "/c");
}

#[test]
fn ruleset_when_rewrite_reports_then_index_and_original_target_are_returned() {
    let set = RuleSet::new([("/miss", "/nowhere"), ("/from/(.*)", "/to/$1")]).unwrap();
    let mut url = url("/from/1?x=2");

    let report = set.rewrite(&mut url).expect("second rule should fire");
    assert_eq!(report.rule_index, 1);
    assert_eq!(report.original_target, "/from/1?x=2");
    assert_eq!(url.target(), "/to/1?x=2");

    let mut miss = RequestUrl::parse("/other").unwrap();
    assert!(set.rewrite(&mut miss).is_none());
}
