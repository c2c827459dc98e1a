use kbforge_core::models::{Assertion, SubjectType};
use kbforge_grouping::relevance::{SubjectRecord, UrlSimilarityRecord};
use kbforge_grouping::*;
use test_fixtures::{assertion, load_jsonl_fixture};

fn catalog() -> SubjectCatalog {
    SubjectCatalog::from_records(load_jsonl_fixture::<SubjectRecord>("kb/subjects.jsonl"))
}

fn urls() -> UrlSimilarityTable {
    UrlSimilarityTable::from_records(
        load_jsonl_fixture::<UrlSimilarityRecord>("kb/url_similarity.jsonl"),
        0.6,
    )
}

#[test]
fn fixture_assertions_aggregate_by_sense() {
    let assertions: Vec<Assertion> = load_jsonl_fixture("kb/assertions.jsonl");
    let outcome = select_relevant(&assertions, &catalog(), &urls(), 5);

    // "cat be alive" fails the validity check three times.
    assert_eq!(outcome.invalid, 3);
    // "dog bark at strangers" comes from an off-topic document.
    assert!(outcome
        .keyed
        .iter()
        .all(|k| k.key.predicate != "bark"));

    let triples = aggregate_shards(vec![outcome.keyed]);
    validate_aggregate(&triples).unwrap();
    let loyal = triples
        .iter()
        .find(|t| t.key.object == "a loyal animal")
        .unwrap();
    assert_eq!(loyal.count, 3);
    assert_eq!(loyal.key.subject_type, SubjectType::Primary);
}

#[test]
fn one_keyed_record_per_relevant_sense() {
    let mut c = SubjectCatalog::new();
    c.add("jaguar", "primary", "jaguar");
    c.add("jaguar", "subgroup", "car");
    let mut u = UrlSimilarityTable::default();
    u.insert("jaguar", "https://zoo.example");
    u.insert("car", "https://zoo.example");

    let a = assertion(1, "jaguar", "hunt", "at night")
        .document("https://zoo.example")
        .build();
    let outcome = select_relevant(&[a], &c, &u, 5);
    assert_eq!(outcome.keyed.len(), 2);
    assert_eq!(outcome.keyed[0].key.super_subject, "jaguar");
    assert_eq!(outcome.keyed[1].key.super_subject, "car");
}

#[test]
fn assertions_without_document_are_not_relevant() {
    let mut c = SubjectCatalog::new();
    c.add("owl", "primary", "owl");
    let a = assertion(1, "owl", "hunt", "at night").build();
    let outcome = select_relevant(&[a], &c, &UrlSimilarityTable::default(), 5);
    assert!(outcome.keyed.is_empty());
    assert_eq!(outcome.no_document, 1);
    assert_eq!(outcome.uncatalogued, 0);
    assert_eq!(outcome.invalid, 0);
}

#[test]
fn uncatalogued_subjects_are_counted() {
    let a = assertion(1, "owl", "hunt", "at night")
        .document("https://zoo.example")
        .build();
    let outcome = select_relevant(&[a], &SubjectCatalog::new(), &UrlSimilarityTable::default(), 5);
    assert_eq!(outcome.uncatalogued, 1);
}

#[test]
fn nul_padding_is_removed_from_keys() {
    let mut c = SubjectCatalog::new();
    c.add("owl", "primary", "owl");
    let mut u = UrlSimilarityTable::default();
    u.insert("owl", "d");
    let mut a = assertion(1, "owl", "hunt", "mice").document("d").build();
    a.object = "mice\0".into();
    let outcome = select_relevant(&[a], &c, &u, 5);
    assert_eq!(outcome.keyed[0].key.object, "mice");
}

#[test]
fn full_grouping_flow_assigns_ids_after_threshold() {
    let assertions: Vec<Assertion> = load_jsonl_fixture("kb/assertions.jsonl");
    let outcome = select_relevant(&assertions, &catalog(), &urls(), 5);
    let shards = route_to_shards(outcome.keyed, 4).unwrap();
    let triples = filter_by_frequency(aggregate_shards(shards), 3);
    assert!(triples.iter().all(|t| t.count >= 3));

    let batches = reshard(triples, 2).unwrap();
    let ids: Vec<String> = batches
        .iter()
        .flatten()
        .map(|t| t.id.as_ref().unwrap().to_string())
        .collect();
    assert!(ids.iter().all(|id| id.starts_with("triple-00")));
    let unique: std::collections::HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
}
