//! End-to-end sync tests
//!
//! Each test lays real submission batches out under a temporary root, runs
//! the orchestrator against them through the local storage backend and the
//! JSONL case sink, and inspects the written case file.

use curator::adapters::sink::JsonlCaseSink;
use curator::adapters::storage::LocalFsStore;
use curator::core::loader::LoaderOptions;
use curator::core::sync::SyncOrchestrator;
use curator::domain::case::CaseRecord;
use curator::domain::errors::{CaseError, CuratorError, ResolutionError};
use curator::domain::ids::DatasetId;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

const SUM: &str = "0123456789abcdef0123456789abcdef";

fn manifest_line(name: &str) -> String {
    format!("{}  {}\n", SUM, name)
}

async fn write_batch_file(root: &Path, batch: &str, name: &str, content: &[u8]) {
    let dir = root.join(batch);
    tokio::fs::create_dir_all(&dir).await.unwrap();
    tokio::fs::write(dir.join(name), content).await.unwrap();
}

fn orchestrator(root: &Path, sink: &JsonlCaseSink, dry_run: bool) -> SyncOrchestrator {
    SyncOrchestrator::with_components(
        Arc::new(LocalFsStore::new()),
        Arc::new(sink.clone()),
        LoaderOptions::default(),
        root.to_str().unwrap(),
        dry_run,
    )
}

/// One individual document plus the data file it references
async fn seed_individual_batch(root: &Path, batch: &str) {
    let manifest = manifest_line("p1.json") + &manifest_line("reads.bam");
    write_batch_file(root, batch, "manifest.txt", manifest.as_bytes()).await;
    write_batch_file(
        root,
        batch,
        "p1.json",
        br#"{"id": "pp-1", "subject": {"id": "P1"}, "files": [{"uri": "file:///reads.bam"}]}"#,
    )
    .await;
    write_batch_file(root, batch, "reads.bam", b"BAMBAM").await;
}

#[tokio::test]
async fn test_full_sync_derives_and_writes_cases() {
    let submissions = TempDir::new().unwrap();
    let cases_dir = TempDir::new().unwrap();
    seed_individual_batch(submissions.path(), "2024-01-05").await;

    let manifest = manifest_line("fam1.json") + &manifest_line("pedigree.ped");
    write_batch_file(submissions.path(), "2024-02-10", "manifest.txt", manifest.as_bytes())
        .await;
    write_batch_file(
        submissions.path(),
        "2024-02-10",
        "fam1.json",
        br#"{"id": "FAM1", "proband": {"subject": {"id": "P1"}}, "files": [{"uri": "file:///pedigree.ped"}]}"#,
    )
    .await;
    write_batch_file(submissions.path(), "2024-02-10", "pedigree.ped", b"ped P1\n").await;

    let sink = JsonlCaseSink::new(cases_dir.path());
    let dataset_id = DatasetId::new("AG0001").unwrap();

    let summary = orchestrator(submissions.path(), &sink, false)
        .execute_sync(&dataset_id)
        .await
        .unwrap();

    assert_eq!(summary.batch_count, 2);
    assert_eq!(summary.object_count, 4);
    assert_eq!(summary.resolved_count, 4);
    assert_eq!(summary.tombstone_count, 0);
    assert_eq!(summary.case_count, 2);
    assert!(!summary.dry_run);

    let content = std::fs::read_to_string(sink.output_path(&dataset_id)).unwrap();
    let cases: Vec<CaseRecord> = content
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    // Cases come out in live-object name order: fam1.json before p1.json
    assert_eq!(cases.len(), 2);
    assert_eq!(cases[0].case_id, "FAM1");
    assert_eq!(cases[0].patient_id, "");
    assert!(cases[0].file_names.contains("pedigree.ped"));
    assert_eq!(cases[1].case_id, "");
    assert_eq!(cases[1].patient_id, "P1");
    assert!(cases[1].file_names.contains("reads.bam"));
}

#[tokio::test]
async fn test_reference_to_tombstoned_object_aborts_the_run() {
    let submissions = TempDir::new().unwrap();
    let cases_dir = TempDir::new().unwrap();
    seed_individual_batch(submissions.path(), "2024-01-05").await;

    // A later batch deletes the BAM while the document still references it
    write_batch_file(
        submissions.path(),
        "2024-02-01",
        "manifest.txt",
        manifest_line("reads.bam").as_bytes(),
    )
    .await;
    write_batch_file(submissions.path(), "2024-02-01", "reads.bam", b"").await;

    let sink = JsonlCaseSink::new(cases_dir.path());
    let dataset_id = DatasetId::new("AG0001").unwrap();

    let err = orchestrator(submissions.path(), &sink, false)
        .execute_sync(&dataset_id)
        .await
        .unwrap_err();

    match err {
        CuratorError::Case(CaseError::UnresolvableFileReference { uri, name }) => {
            assert_eq!(uri, "file:///reads.bam");
            assert_eq!(name, "reads.bam");
        }
        other => panic!("unexpected error: {other}"),
    }

    // A failed run leaves no case file behind
    assert!(!sink.output_path(&dataset_id).exists());
}

#[tokio::test]
async fn test_delete_of_unknown_object_aborts_the_run() {
    let submissions = TempDir::new().unwrap();
    let cases_dir = TempDir::new().unwrap();

    write_batch_file(
        submissions.path(),
        "2024-01-05",
        "manifest.txt",
        manifest_line("ghost.bam").as_bytes(),
    )
    .await;
    write_batch_file(submissions.path(), "2024-01-05", "ghost.bam", b"").await;

    let sink = JsonlCaseSink::new(cases_dir.path());
    let dataset_id = DatasetId::new("AG0001").unwrap();

    let err = orchestrator(submissions.path(), &sink, false)
        .execute_sync(&dataset_id)
        .await
        .unwrap_err();

    match err {
        CuratorError::Resolution(ResolutionError::DeleteOfUnknownObject { batch, name }) => {
            assert_eq!(batch, "2024-01-05");
            assert_eq!(name, "ghost.bam");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!sink.output_path(&dataset_id).exists());
}

#[tokio::test]
async fn test_dry_run_derives_cases_but_writes_nothing() {
    let submissions = TempDir::new().unwrap();
    let cases_dir = TempDir::new().unwrap();
    seed_individual_batch(submissions.path(), "2024-01-05").await;

    let sink = JsonlCaseSink::new(cases_dir.path());
    let dataset_id = DatasetId::new("AG0001").unwrap();

    let summary = orchestrator(submissions.path(), &sink, true)
        .execute_sync(&dataset_id)
        .await
        .unwrap();

    assert!(summary.dry_run);
    assert_eq!(summary.case_count, 1);
    assert!(!sink.output_path(&dataset_id).exists());
}

#[tokio::test]
async fn test_rerunning_the_same_root_is_idempotent() {
    let submissions = TempDir::new().unwrap();
    let cases_dir = TempDir::new().unwrap();
    seed_individual_batch(submissions.path(), "2024-01-05").await;

    let sink = JsonlCaseSink::new(cases_dir.path());
    let dataset_id = DatasetId::new("AG0001").unwrap();
    let orchestrator = orchestrator(submissions.path(), &sink, false);

    let first = orchestrator.execute_sync(&dataset_id).await.unwrap();
    let first_content = std::fs::read_to_string(sink.output_path(&dataset_id)).unwrap();

    let second = orchestrator.execute_sync(&dataset_id).await.unwrap();
    let second_content = std::fs::read_to_string(sink.output_path(&dataset_id)).unwrap();

    assert_eq!(first.resolved_count, second.resolved_count);
    assert_eq!(first.case_count, second.case_count);
    assert_eq!(first_content, second_content);
}

#[tokio::test]
async fn test_later_batch_replaces_a_document() {
    let submissions = TempDir::new().unwrap();
    let cases_dir = TempDir::new().unwrap();

    write_batch_file(
        submissions.path(),
        "2024-01-05",
        "manifest.txt",
        manifest_line("p1.json").as_bytes(),
    )
    .await;
    write_batch_file(
        submissions.path(),
        "2024-01-05",
        "p1.json",
        br#"{"subject": {"id": "P1"}}"#,
    )
    .await;

    // Resubmission corrects the subject identifier
    write_batch_file(
        submissions.path(),
        "2024-02-01",
        "manifest.txt",
        manifest_line("p1.json").as_bytes(),
    )
    .await;
    write_batch_file(
        submissions.path(),
        "2024-02-01",
        "p1.json",
        br#"{"subject": {"id": "P9"}}"#,
    )
    .await;

    let sink = JsonlCaseSink::new(cases_dir.path());
    let dataset_id = DatasetId::new("AG0001").unwrap();

    let summary = orchestrator(submissions.path(), &sink, false)
        .execute_sync(&dataset_id)
        .await
        .unwrap();

    assert_eq!(summary.batch_count, 2);
    assert_eq!(summary.resolved_count, 1);
    assert_eq!(summary.case_count, 1);

    let content = std::fs::read_to_string(sink.output_path(&dataset_id)).unwrap();
    let case: CaseRecord = serde_json::from_str(content.lines().next().unwrap()).unwrap();
    assert_eq!(case.patient_id, "P9");
}
