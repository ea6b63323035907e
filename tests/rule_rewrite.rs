use url_rewrite_rs::{RequestUrl, Rule, RuleSet};

#[test]
fn rule_when_replacement_is_absolute_then_only_its_path_is_written_back() {
    let set = RuleSet::new([("/ext/(.*)", "https://cdn.example.com/static/$1")]).unwrap();
    let mut url = RequestUrl::parse("/ext/logo.png").unwrap();

    assert!(set.apply(&mut url));
    assert_eq!(url.path(), "/static/logo.png");
    assert_eq!(url.raw_path(), "/static/logo.png");
}

#[test]
fn rule_when_optional_group_is_unmatched_then_it_expands_empty() {
    let rule = Rule::new("/o/(a)?(.*)", "/x/$1/$2").unwrap();
    let (target, matched) = rule.attempt_rewrite("/o/b");

    assert!(matched);
    assert_eq!(target, "/x//b");
}

#[test]
fn rule_when_zero_group_referenced_then_whole_match_expands() {
    let rule = Rule::new("/w/(.*)", "/prefix$0").unwrap();
    let (target, matched) = rule.attempt_rewrite("/w/z");

    assert!(matched);
    assert_eq!(target, "/prefix/w/z");
}

#[test]
fn rule_when_group_matches_empty_text_then_it_expands_to_nothing() {
    let rule = Rule::new("/a/(.*)", "/bb/$1").unwrap();
    let (target, matched) = rule.attempt_rewrite("/a/");

    assert!(matched);
    assert_eq!(target, "/bb/");
}
