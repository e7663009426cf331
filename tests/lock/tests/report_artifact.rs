//! Report artifact locks: run-to-run determinism, digest format, and
//! directory round-trip with fail-closed verification.

use decant_harness::report::{report_bytes, report_digest};
use decant_harness::report_dir::{
    read_report_dir, write_report_dir, ReportDirError, REPORT_FILENAME,
};
use decant_harness::runner::run;
use lock_tests::classic_problem;

#[test]
fn report_bytes_are_identical_across_runs() {
    let first = report_bytes(&run(classic_problem())).unwrap();
    for _ in 1..5 {
        let other = report_bytes(&run(classic_problem())).unwrap();
        assert_eq!(first, other, "report bytes differ across runs");
    }
}

#[test]
fn report_digest_is_stable_across_runs() {
    let first = report_digest(&report_bytes(&run(classic_problem())).unwrap());
    let second = report_digest(&report_bytes(&run(classic_problem())).unwrap());
    assert_eq!(first, second);
    assert!(first.starts_with("sha256:"));
}

#[test]
fn distinct_problems_produce_distinct_digests() {
    let classic = report_bytes(&run(classic_problem())).unwrap();
    let other = report_bytes(&run(decant_space::problem::ProblemInput::new(7, 2, 6))).unwrap();
    assert_ne!(report_digest(&classic), report_digest(&other));
}

#[test]
fn report_directory_round_trips_and_verifies() {
    let dir = tempfile::tempdir().unwrap();
    let report = report_bytes(&run(classic_problem())).unwrap();

    write_report_dir(dir.path(), &report).unwrap();
    let verified = read_report_dir(dir.path()).unwrap();
    assert_eq!(verified, report);
}

#[test]
fn tampering_is_detected_fail_closed() {
    let dir = tempfile::tempdir().unwrap();
    let report = report_bytes(&run(classic_problem())).unwrap();
    write_report_dir(dir.path(), &report).unwrap();

    std::fs::write(dir.path().join(REPORT_FILENAME), b"{\"version\":\"forged\"}").unwrap();

    let err = read_report_dir(dir.path()).unwrap_err();
    assert!(
        matches!(err, ReportDirError::DigestMismatch { .. }),
        "expected DigestMismatch, got {err:?}"
    );
}
