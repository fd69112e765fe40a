use super::*;

#[test]
fn android_plan_covers_all_buckets_and_variants() {
    let plan = OutputPlan::android("app/src/main/res");
    assert_eq!(plan.targets.len(), 10);
    assert_eq!(plan.sizes(), vec![48, 72, 96, 144, 192]);

    let first = &plan.targets[0];
    assert_eq!(first.bucket, DensityBucket::Mdpi);
    assert_eq!(first.variant, IconVariant::Square);
    assert_eq!(
        first.path,
        PathBuf::from("app/src/main/res/mipmap-mdpi/ic_launcher.png")
    );
    assert_eq!(
        plan.targets[1].path,
        PathBuf::from("app/src/main/res/mipmap-mdpi/ic_launcher_round.png")
    );
    assert_eq!(
        plan.targets[9].path,
        PathBuf::from("app/src/main/res/mipmap-xxxhdpi/ic_launcher_round.png")
    );
}

#[test]
fn targets_for_size_returns_both_variants() {
    let plan = OutputPlan::android("res");
    let variants: Vec<IconVariant> = plan.targets_for_size(96).map(|t| t.variant).collect();
    assert_eq!(variants, vec![IconVariant::Square, IconVariant::Round]);
    assert_eq!(plan.targets_for_size(100).count(), 0);
}

#[test]
fn plan_serializes_with_bucket_labels() {
    let plan = OutputPlan::android("res");
    let v = serde_json::to_value(&plan).unwrap();
    assert_eq!(v["targets"][2]["bucket"], "hdpi");
    assert_eq!(v["targets"][3]["variant"], "round");
    assert_eq!(v["targets"][3]["size"], 72);
}
