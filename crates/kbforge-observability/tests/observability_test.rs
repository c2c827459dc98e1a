use kbforge_core::config::ObservabilityConfig;
use kbforge_observability::tracing_setup::{
    events, init_from_config, init_tracing, init_tracing_with_filter,
};
use kbforge_observability::PipelineMetrics;

#[test]
fn stages_accumulate_across_batches() {
    let mut metrics = PipelineMetrics::new();
    metrics.record_stage("clustering", 10, 4);
    metrics.record_stage("clustering", 6, 2);
    let counts = metrics.stage("clustering").unwrap();
    assert_eq!(counts.input, 16);
    assert_eq!(counts.output, 6);
    assert!((counts.drop_ratio() - 0.625).abs() < 1e-12);
    assert!(metrics.stage("selection").is_none());
}

#[test]
fn merge_sums_rejections_and_failures() {
    let mut a = PipelineMetrics::new();
    a.record_rejections("negation", 2);
    a.record_write_failures(1);
    let mut b = PipelineMetrics::new();
    b.record_rejections("negation", 3);
    b.record_rejections("perplexity", 1);
    b.record_stage("filtering", 5, 1);
    a.merge(b);
    assert_eq!(a.rejections("negation"), 5);
    assert_eq!(a.rejections("perplexity"), 1);
    assert_eq!(a.rejections("regex"), 0);
    assert_eq!(a.write_failures, 1);
    assert_eq!(a.stage("filtering").unwrap().output, 1);
}

#[test]
fn metrics_serialise_to_json() {
    let mut metrics = PipelineMetrics::new();
    metrics.record_stage("threshold", 3, 2);
    metrics.record_rejections("ignore_object", 1);
    let json = serde_json::to_value(&metrics).unwrap();
    assert_eq!(json["stages"]["threshold"]["input"], 3);
    assert_eq!(json["rule_rejections"]["ignore_object"], 1);
    let back: PipelineMetrics = serde_json::from_value(json).unwrap();
    assert_eq!(back, metrics);
}

#[test]
fn reset_clears_everything() {
    let mut metrics = PipelineMetrics::new();
    metrics.record_stage("selection", 1, 1);
    metrics.reset();
    assert!(metrics.stages().is_empty());
}

#[test]
fn second_subscriber_install_is_refused_and_events_still_emit() {
    let config = ObservabilityConfig {
        log_level: "debug".to_string(),
        json: true,
    };
    init_from_config(&config);
    assert!(!init_from_config(&config));
    assert!(!init_tracing());
    assert!(!init_tracing_with_filter("warn"));
    events::triples_aggregated(10, 2, 1, 1, 5);
    events::bulk_write_completed("clusters", 3, 1);
    events::subject_clustered("dog", 4, 2);
}

#[test]
fn empty_stage_has_zero_drop_ratio() {
    let metrics = PipelineMetrics::new();
    assert_eq!(metrics.stage("x").unwrap_or_default().drop_ratio(), 0.0);
}
