// crates/annocheck-cli/tests/suite.rs
// ============================================================================
// Module: Suite Runner Tests
// Description: Runner tests against a local mock annotation endpoint.
// ============================================================================
//! ## Overview
//! Validates case independence, one-fetch-per-identifier, report wording for
//! each failure classification, and the exit-relevant pass/fail flags.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::thread;
use std::thread::JoinHandle;

use annocheck_cli::CaseOutcome;
use annocheck_cli::CheckKind;
use annocheck_cli::FailureKind;
use annocheck_cli::SuiteSpec;
use annocheck_cli::run_suite;
use annocheck_client::AnnotationClient;
use annocheck_client::ClientConfig;
use tiny_http::Response;
use tiny_http::Server;

// ============================================================================
// SECTION: Test Helpers
// ============================================================================

/// Body with five pediatric Clopidogrel records at level 1A.
fn healthy_body() -> String {
    let record = r#"{
        "chemicals": [{"name": "Clopidogrel"}],
        "pediatric": true,
        "levelOfEvidence": {"term": "1A"}
    }"#;
    format!(r#"{{"data": [{record},{record},{record},{record},{record}]}}"#)
}

/// Starts a mock endpoint that answers per-symbol, then returns the session.
///
/// Routing: `GOODGENE` gets the healthy body, `MISSINGGENE` a 404, and any
/// other symbol a 500.
fn mock_session(requests: usize) -> (AnnotationClient, JoinHandle<usize>) {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let handle = thread::spawn(move || {
        let mut served = 0;
        for _ in 0..requests {
            let request = server.recv().unwrap();
            served += 1;
            let url = request.url().to_string();
            let response = if url.contains("symbol=GOODGENE") {
                Response::from_string(healthy_body()).with_status_code(200)
            } else if url.contains("symbol=MISSINGGENE") {
                Response::from_string("").with_status_code(404)
            } else {
                Response::from_string("").with_status_code(500)
            };
            request.respond(response).unwrap();
        }
        served
    });
    let config = ClientConfig::with_base_url(format!("http://{addr}"));
    (AnnotationClient::new(&config).unwrap(), handle)
}

/// Suite spec over the given symbols with the default drug and minimum.
fn spec(genes: &[&str]) -> SuiteSpec {
    SuiteSpec {
        genes: genes.iter().map(ToString::to_string).collect(),
        ..SuiteSpec::default()
    }
}

// ============================================================================
// SECTION: Runner Behavior
// ============================================================================

#[test]
fn healthy_identifier_passes_every_check() {
    let (client, handle) = mock_session(1);
    let reports = run_suite(&client, &spec(&["GOODGENE"]));
    handle.join().unwrap();

    assert_eq!(reports.len(), 3);
    assert!(reports.iter().all(annocheck_cli::CaseReport::passed));
    let drug_case = &reports[0];
    assert_eq!(drug_case.check, CheckKind::TargetDrug);
    assert_eq!(
        drug_case.outcome,
        CaseOutcome::Passed("Clopidogrel found with level 1A".to_string())
    );
}

#[test]
fn one_fetch_feeds_all_checks_for_an_identifier() {
    let (client, handle) = mock_session(1);
    let reports = run_suite(&client, &spec(&["GOODGENE"]));
    let served = handle.join().unwrap();

    assert_eq!(reports.len(), 3);
    assert_eq!(served, 1);
}

#[test]
fn unknown_identifier_fails_every_check_without_aborting() {
    let (client, handle) = mock_session(2);
    let reports = run_suite(&client, &spec(&["MISSINGGENE", "GOODGENE"]));
    handle.join().unwrap();

    assert_eq!(reports.len(), 6);
    for report in &reports[..3] {
        assert_eq!(report.outcome, CaseOutcome::Failed {
            kind: FailureKind::UnknownEntity,
            message: "MISSINGGENE: non-existent gene or variant".to_string(),
        });
    }
    assert!(reports[3..].iter().all(annocheck_cli::CaseReport::passed));
}

#[test]
fn server_error_is_classified_as_transport_not_unknown_entity() {
    let (client, handle) = mock_session(1);
    let reports = run_suite(&client, &spec(&["BROKENGENE"]));
    handle.join().unwrap();

    for report in &reports {
        let CaseOutcome::Failed {
            kind, ..
        } = &report.outcome
        else {
            panic!("expected failure, got {:?}", report.outcome);
        };
        assert_eq!(*kind, FailureKind::Transport);
    }
}

#[test]
fn report_lines_name_case_and_expectation() {
    let (client, handle) = mock_session(2);
    let reports = run_suite(&client, &spec(&["GOODGENE", "MISSINGGENE"]));
    handle.join().unwrap();

    let lines: Vec<String> = reports.iter().map(ToString::to_string).collect();
    assert_eq!(lines[0], "PASS GOODGENE has-target-drug: Clopidogrel found with level 1A");
    assert_eq!(lines[1], "PASS GOODGENE min-pediatric-count: 5 pediatric annotations");
    assert_eq!(
        lines[2],
        "PASS GOODGENE evidence-level-validity: 5 records carry valid evidence levels"
    );
    assert_eq!(
        lines[3],
        "FAIL MISSINGGENE has-target-drug: MISSINGGENE: non-existent gene or variant"
    );
}
