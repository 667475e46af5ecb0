use std::fs;

use crate::harness::{TestContext, fixtures};
use predicates::prelude::*;

#[test]
fn run_writes_cleaned_document_under_deterministic_name() {
    let ctx = TestContext::new();
    ctx.write_inputs();

    let mut server = mockito::Server::new();
    let fenced = format!("```latex\n{}\n```", fixtures::TAILORED);
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer sk-test-key")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({ "model": "gpt-4o-mini" })))
        .with_status(200)
        .with_body(fixtures::completion(&fenced))
        .expect(1)
        .create();
    ctx.write_config(&format!("{}/v1/chat/completions", server.url()));

    ctx.cli_with_key()
        .args(["run", "-t", "main.tex", "-c", "Acme Co", "-r", "Backend Dev", "-j", "acme.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("acme_co_backend_dev_resume.tex"));

    mock.assert();
    let written = ctx.read_output("acme_co_backend_dev_resume.tex");
    assert_eq!(written, format!("{}\n", fixtures::TAILORED));
    assert!(!ctx.output_exists("acme_co_backend_dev_email.txt"));
}

#[test]
fn rerunning_the_same_job_overwrites_its_artifacts() {
    let ctx = TestContext::new();
    ctx.write_inputs();

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body(fixtures::completion(fixtures::TAILORED))
        .expect(2)
        .create();
    ctx.write_config(&format!("{}/v1/chat/completions", server.url()));

    for _ in 0..2 {
        ctx.cli_with_key()
            .args(["run", "-t", "main.tex", "-c", "Acme Co", "-r", "Backend Dev", "-j", "acme.txt"])
            .assert()
            .success();
    }

    mock.assert();
    let entries = fs::read_dir(ctx.output_dir()).unwrap().count();
    assert_eq!(entries, 1);
}

#[test]
fn model_flag_overrides_configured_model() {
    let ctx = TestContext::new();
    ctx.write_inputs();

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({ "model": "gpt-4.1" })))
        .with_status(200)
        .with_body(fixtures::completion(fixtures::TAILORED))
        .expect(1)
        .create();
    ctx.write_config(&format!("{}/v1/chat/completions", server.url()));

    ctx.cli_with_key()
        .args([
            "run", "-t", "main.tex", "-c", "Acme Co", "-r", "Backend Dev", "-j", "acme.txt", "-m",
            "gpt-4.1",
        ])
        .assert()
        .success();

    mock.assert();
}

#[test]
fn blank_model_flag_is_rejected_before_any_request() {
    let ctx = TestContext::new();
    ctx.write_inputs();

    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/v1/chat/completions").expect(0).create();
    ctx.write_config(&format!("{}/v1/chat/completions", server.url()));

    ctx.cli_with_key()
        .args([
            "run", "-t", "main.tex", "-c", "Acme Co", "-r", "Backend Dev", "-j", "acme.txt", "-m", "",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--model must not be empty"));

    mock.assert();
    assert!(!ctx.output_dir().exists());
}
