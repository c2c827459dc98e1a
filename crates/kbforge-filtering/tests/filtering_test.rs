use kbforge_core::config::FilteringConfig;
use kbforge_core::models::{relation, Cluster};
use kbforge_filtering::rules::{
    HyponymRule, IgnoreObjectRule, IgnorePredicateObjectRule, IgnorePredicateRule,
    IgnoreRelationRule, NegationRule, ObjectContainsWordRule, RegexRule, RelationObjectWordRule,
};
use kbforge_filtering::{default_pipeline, FilterPipeline, FilterRule, HyponymTable};
use test_fixtures::{cluster, fixture_path};

fn scored(subject: &str, predicate: &str, object: &str, rel: &str, pred_obj: &str) -> Cluster {
    cluster(subject, predicate, object, 5)
        .relation(rel, pred_obj)
        .perplexity(40.0)
        .build()
}

fn hyponyms() -> HyponymTable {
    HyponymTable::load(fixture_path("kb/hyponyms.jsonl")).unwrap()
}

fn pipeline() -> FilterPipeline {
    default_pipeline(&FilteringConfig::default(), Some(hyponyms())).unwrap()
}

#[test]
fn dog_is_alive_is_rejected_by_object_denylist() {
    let c = scored("dog", "be", "alive", relation::HAS_PROPERTY, "alive");
    assert!(!IgnoreObjectRule::default().validate(&c));

    // Even with otherwise perfect scores.
    let c = cluster("dog", "be", "alive", 900)
        .relation(relation::HAS_PROPERTY, "alive")
        .perplexity(1.0)
        .log_freq(1.0)
        .build();
    let p = pipeline();
    let rejected_by = p.evaluate(&c).unwrap().map(|i| p.rule_names()[i].clone());
    assert!(rejected_by.unwrap().starts_with("IgnoreObjectRule"));
}

#[test]
fn raw_object_is_checked_too() {
    let c = scored("dog", "chase", "it", relation::CAPABLE_OF, "chase cats");
    assert!(!IgnoreObjectRule::default().validate(&c));
}

#[test]
fn hyponym_rule_only_constrains_is_a() {
    let rule = HyponymRule::new(hyponyms(), "fixture");
    assert!(rule.validate(&scored("dog", "be", "loyal animal", relation::IS_A, "loyal animal")));
    assert!(rule.validate(&scored("dog", "be", "pets", relation::IS_A, "pets")));
    assert!(!rule.validate(&scored("dog", "be", "good boy", relation::IS_A, "good boy")));
    // Substrings are not tokens.
    assert!(!rule.validate(&scored("dog", "be", "petty", relation::IS_A, "petty")));
    assert!(rule.validate(&scored("dog", "be", "loyal", relation::HAS_PROPERTY, "loyal")));
    // Subjects without a hyponym entry pass.
    assert!(rule.validate(&scored("cow", "be", "big", relation::IS_A, "big")));
}

#[test]
fn predicate_denylists() {
    assert!(!IgnorePredicateRule::default().validate(&scored("dog", "might", "bite", relation::CAPABLE_OF, "bite")));
    assert!(!IgnorePredicateObjectRule::default()
        .validate(&scored("dog", "make", "sense", relation::CAPABLE_OF, "make sense")));
    assert!(IgnorePredicateObjectRule::default()
        .validate(&scored("dog", "make", "noise", relation::CAPABLE_OF, "make noise")));
}

#[test]
fn excluded_relations() {
    let rule = IgnoreRelationRule::default();
    assert!(!rule.validate(&scored("hot", "be opposite of", "cold", relation::ANTONYM, "cold")));
    assert!(rule.validate(&scored("dog", "be", "animal", relation::IS_A, "animal")));
}

#[test]
fn negation_is_token_level() {
    let rule = NegationRule;
    assert!(!rule.validate(&scored("cat", "do not like", "water", relation::DESIRES, "water")));
    assert!(!rule.validate(&scored("cat", "have", "no tail", relation::HAS_A, "no tail")));
    assert!(rule.validate(&scored("cat", "like", "nothing else", relation::DESIRES, "nothing else")));
}

#[test]
fn object_bad_words() {
    let rule = ObjectContainsWordRule::default();
    assert!(!rule.validate(&scored("dog", "love", "its owner", relation::DESIRES, "its owner")));
    assert!(rule.validate(&scored("dog", "love", "bones", relation::DESIRES, "bones")));
}

#[test]
fn regex_global_and_relation_specific() {
    let rule = RegexRule::standard("/r/").unwrap();
    assert!(!rule.validate(&scored("school", "be", "founded in 1990", relation::HAS_PROPERTY, "founded in 1990")));
    assert!(!rule.validate(&scored("dog", "weigh", "12.5", relation::HAS_PROPERTY, "12.5")));
    assert!(!rule.validate(&scored("shop", "be at", "www.shop.com", relation::AT_LOCATION, "www.shop.com")));
    // Relation-specific patterns only under their relation.
    assert!(!rule.validate(&scored("dog", "be in", "the same season", relation::AT_LOCATION, "the same season")));
    assert!(rule.validate(&scored("dog", "love", "summer season", relation::DESIRES, "summer season")));
}

#[test]
fn relation_object_words() {
    let rule = RelationObjectWordRule::default();
    assert!(!rule.validate(&scored("dog", "have", "a chance", relation::HAS_A, "a chance")));
    assert!(rule.validate(&scored("dog", "want", "a chance", relation::DESIRES, "a chance")));
}

#[test]
fn missing_score_is_an_error() {
    let unscored = cluster("dog", "bark", "loudly", 4)
        .relation(relation::CAPABLE_OF, "bark loudly")
        .sentence("Dog bark loudly.")
        .build();
    let err = pipeline().should_keep(&unscored).unwrap_err();
    assert!(err.to_string().contains("perplexity"), "{err}");
}

#[test]
fn cluster_without_sentence_is_rejected_without_failing_batch() {
    let no_sentence = cluster("dog", "chase", "cats", 3)
        .relation(relation::CAPABLE_OF, "chase cats")
        .build();
    let clusters = vec![
        scored("dog", "bark at", "strangers", relation::CAPABLE_OF, "bark at strangers"),
        no_sentence.clone(),
    ];

    let p = pipeline();
    let outcome = p.apply(clusters).unwrap();
    assert_eq!(outcome.report.evaluated, 2);
    assert_eq!(outcome.report.kept, 1);
    assert_eq!(outcome.kept[0].object(), "strangers");
    let perplexity = outcome
        .report
        .rules
        .iter()
        .find(|r| r.rule.starts_with("PerplexityRule"))
        .unwrap();
    assert_eq!(perplexity.rejected, 1);

    // Same verdict in reverse rule order.
    assert!(!p.reversed().should_keep(&no_sentence).unwrap());
}

#[test]
fn perplexity_above_threshold_rejected() {
    let c = cluster("dog", "bark", "loudly", 4)
        .relation(relation::CAPABLE_OF, "bark loudly")
        .perplexity(800.0)
        .build();
    assert!(!pipeline().should_keep(&c).unwrap());
}

#[test]
fn apply_reports_first_rejecting_rule() {
    let clusters = vec![
        scored("dog", "be", "loyal animal", relation::IS_A, "loyal animal"),
        scored("dog", "be", "alive", relation::HAS_PROPERTY, "alive"),
        scored("dog", "do not like", "baths", relation::DESIRES, "baths"),
        scored("dog", "bark at", "strangers", relation::CAPABLE_OF, "bark at strangers"),
    ];
    let outcome = pipeline().apply(clusters).unwrap();
    assert_eq!(outcome.report.evaluated, 4);
    assert_eq!(outcome.report.kept, 2);
    assert_eq!(outcome.report.rejected(), 2);
    assert_eq!(outcome.kept[0].object(), "loyal animal");
    assert_eq!(outcome.kept[1].object(), "strangers");

    let by_rule = |prefix: &str| {
        outcome
            .report
            .rules
            .iter()
            .find(|r| r.rule.starts_with(prefix))
            .map(|r| r.rejected)
            .unwrap()
    };
    assert_eq!(by_rule("IgnoreObjectRule"), 1);
    assert_eq!(by_rule("NegationRule"), 1);
    assert!((outcome.report.fraction_removed_by("NegationRule") - 0.25).abs() < 1e-12);
}

#[test]
fn custom_namespace_rebases_relation_rules() {
    let config = FilteringConfig {
        relation_namespace: "/rel/".to_string(),
        ..FilteringConfig::default()
    };
    let p = default_pipeline(&config, None).unwrap();
    let c = scored("hot", "be opposite of", "cold", "/rel/Antonym", "cold");
    assert!(!p.should_keep(&c).unwrap());
    let c = scored("hot", "be opposite of", "cold", relation::ANTONYM, "cold");
    assert!(p.should_keep(&c).unwrap());
}

#[test]
fn hyponym_rule_registered_from_config_path() {
    let config = FilteringConfig {
        hyponyms_path: Some(fixture_path("kb/hyponyms.jsonl").display().to_string()),
        ..FilteringConfig::default()
    };
    let with_path = default_pipeline(&config, None).unwrap();
    let without = default_pipeline(&FilteringConfig::default(), None).unwrap();
    assert_eq!(with_path.len(), without.len() + 1);
    assert!(with_path.rule_names()[1].starts_with("HyponymRule"));
}

#[test]
fn missing_hyponym_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = FilteringConfig {
        hyponyms_path: Some(dir.path().join("absent.jsonl").display().to_string()),
        ..FilteringConfig::default()
    };
    assert!(default_pipeline(&config, None).is_err());
}
