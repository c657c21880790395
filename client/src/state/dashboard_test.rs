use super::*;

#[test]
fn bucket_count_label_pluralizes() {
    let mut bucket = SAMPLE_BUCKETS[0];
    assert_eq!(bucket.count_label(), "8 tasks");
    bucket.task_count = 1;
    assert_eq!(bucket.count_label(), "1 task");
}

#[test]
fn summary_labels() {
    assert_eq!(SAMPLE_SUMMARY.done_label(), "2 done today");
    assert_eq!(SAMPLE_SUMMARY.open_label(), "5 open");
    assert_eq!(SAMPLE_SUMMARY.streak_label(), "4-day streak");
}

#[test]
fn sample_ids_are_unique() {
    let mut task_ids = SAMPLE_TASKS.iter().map(|t| t.id).collect::<Vec<_>>();
    task_ids.dedup();
    assert_eq!(task_ids.len(), SAMPLE_TASKS.len());

    let mut bucket_ids = SAMPLE_BUCKETS.iter().map(|b| b.id).collect::<Vec<_>>();
    bucket_ids.dedup();
    assert_eq!(bucket_ids.len(), SAMPLE_BUCKETS.len());
}
