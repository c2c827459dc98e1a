use kbforge_core::models::relation::{self, strip_namespace};
use kbforge_core::models::*;

fn key(subject: &str, predicate: &str, object: &str) -> TripleKey {
    TripleKey::new(subject, predicate, object, "primary", subject)
}

#[test]
fn assertion_id_orders_by_shard_part_seq() {
    let a = AssertionId::new(1, 0, 99);
    let b = AssertionId::new(1, 1, 0);
    let c = AssertionId::new(2, 0, 0);
    assert!(a < b && b < c);
}

#[test]
fn assertion_id_display_and_parse() {
    let id = AssertionId::new(12, 3, 4567);
    assert_eq!(id.to_string(), "00012-003-0004567");
    let back: AssertionId = "00012-003-0004567".parse().unwrap();
    assert_eq!(back, id);
}

#[test]
fn assertion_id_rejects_wrong_widths() {
    assert!("12-003-0004567".parse::<AssertionId>().is_err());
    assert!("00012-003".parse::<AssertionId>().is_err());
    assert!("0001a-003-0004567".parse::<AssertionId>().is_err());
}

#[test]
fn assertion_id_serializes_as_string() {
    let id = AssertionId::new(0, 1, 2);
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"00000-001-0000002\"");
    let back: AssertionId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

#[test]
fn triple_count_equals_assertion_ids() {
    let ids = vec![AssertionId::new(0, 0, 1), AssertionId::new(0, 0, 2)];
    let t = Triple::new(key("dog", "is", "loyal"), ids);
    assert_eq!(t.count, 2);
    assert!(t.id.is_none());
    assert!(t.cluster_id.is_none());
}

#[test]
fn triple_serializes_flat() {
    let t = Triple::new(key("dog", "is", "loyal"), vec![AssertionId::new(0, 0, 1)]);
    let value = serde_json::to_value(&t).unwrap();
    assert_eq!(value["subject"], "dog");
    assert_eq!(value["subject_type"], "primary");
    assert_eq!(value["count"], 1);
}

#[test]
fn content_hash_separates_fields() {
    let a = key("ab", "c", "d");
    let b = key("a", "bc", "d");
    assert_ne!(a.content_hash(), b.content_hash());
}

#[test]
fn triple_id_is_zero_padded() {
    assert_eq!(TripleId::from_position(3, 42).as_str(), "triple-003-0000042");
}

#[test]
fn cluster_id_is_stable_per_subject_and_rank() {
    let s = SubjectKey::new("dog", "primary", "dog");
    assert_eq!(ClusterId::for_subject(&s, 0), ClusterId::for_subject(&s, 0));
    assert_ne!(ClusterId::for_subject(&s, 0), ClusterId::for_subject(&s, 1));
    let other = SubjectKey::new("dog", "subgroup", "animal");
    assert_ne!(ClusterId::for_subject(&s, 0), ClusterId::for_subject(&other, 0));
}

#[test]
fn subject_type_round_trips_unknown_values() {
    let t = SubjectType::from("hypernym");
    assert_eq!(t, SubjectType::Other("hypernym".into()));
    assert_eq!(t.as_str(), "hypernym");
    assert!(SubjectType::from("aspect").is_aspect());
}

#[test]
fn sentiment_mean_is_componentwise() {
    let items = [Sentiment::new(1.0, 0.0, 0.0), Sentiment::new(0.0, 0.0, 1.0)];
    let mean = Sentiment::mean(items.iter()).unwrap();
    assert_eq!(mean, Sentiment::new(0.5, 0.0, 0.5));
    assert!(Sentiment::mean(std::iter::empty()).is_none());
}

#[test]
fn score_patches_only_add_fields() {
    let mut scores = ClusterScores::default();
    ScorePatch::LogFreq(0.25).apply(&mut scores);
    ScorePatch::Perplexity(31.0).apply(&mut scores);
    assert_eq!(scores.log_freq, Some(0.25));
    assert_eq!(scores.perplexity, Some(31.0));
    assert!(scores.sentiment.is_none());
}

#[test]
fn cluster_predicted_object_falls_back_to_object() {
    let s = SubjectKey::new("dog", "primary", "dog");
    let mut cluster = Cluster {
        id: ClusterId::for_subject(&s, 0),
        key: key("dog", "is", "a loyal animal"),
        count: 4,
        triples: vec![],
        variants: vec![],
        scores: ClusterScores::default(),
    };
    assert_eq!(cluster.predicted_relation(), "");
    assert_eq!(cluster.predicted_object(), "a loyal animal");
    assert!(!cluster.has_score(ScoreField::PredictedRelation));

    ScorePatch::Relation {
        relation: relation::IS_A.into(),
        object: "loyal animal".into(),
    }
    .apply(&mut cluster.scores);
    assert_eq!(cluster.predicted_object(), "loyal animal");
    assert!(cluster.has_score(ScoreField::PredictedRelation));
    assert_eq!(strip_namespace(cluster.predicted_relation(), "/r/"), "IsA");
}

#[test]
fn has_predicate_object_ignores_nul_padding() {
    let a = Assertion {
        id: AssertionId::new(0, 0, 0),
        subject: "dog".into(),
        predicate: "is\0".into(),
        object: "loyal\0\0".into(),
        provenance: Provenance::default(),
        sentiment: None,
    };
    assert!(a.has_predicate_object("is", "loyal"));
    assert!(!a.has_predicate_object("is", "fast"));
}

#[test]
fn provenance_surfaces_use_char_offsets() {
    let p = Provenance {
        sentence: "Café owners love coffee".into(),
        tokens: vec!["Café".into(), "owners".into(), "love".into(), "coffee".into()],
        positions: Positions {
            subj_start: 0,
            subj_end: 2,
            subj_start_char: 0,
            subj_end_char: 11,
            obj_start: 3,
            obj_end: 4,
            obj_start_char: 17,
            obj_end_char: 23,
            pred_positions: vec![TokenSpan { start: 2, end: 3 }],
        },
        ..Provenance::default()
    };
    assert_eq!(p.subject_surface(), "Café owners");
    assert_eq!(p.object_surface(), "coffee");
    assert_eq!(p.predicate_surface(), "love");
}
