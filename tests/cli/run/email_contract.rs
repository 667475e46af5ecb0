use crate::harness::{TestContext, fixtures};
use predicates::prelude::*;

#[test]
fn email_flag_writes_message_next_to_document() {
    let ctx = TestContext::new();
    ctx.write_inputs();

    let mut server = mockito::Server::new();
    let document = server
        .mock("POST", "/v1/chat/completions")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({ "max_tokens": 4096 })))
        .with_status(200)
        .with_body(fixtures::completion(fixtures::TAILORED))
        .expect(1)
        .create();
    let message = server
        .mock("POST", "/v1/chat/completions")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({ "max_tokens": 2048 })))
        .with_status(200)
        .with_body(fixtures::completion(fixtures::MESSAGE))
        .expect(1)
        .create();
    ctx.write_config(&format!("{}/v1/chat/completions", server.url()));

    ctx.cli_with_key()
        .args([
            "run",
            "-t",
            "main.tex",
            "-c",
            "Acme Co",
            "-r",
            "Backend Dev",
            "-j",
            "acme.txt",
            "--email",
            "--recruiter",
            "Dana",
            "--recruiter-email",
            "dana@acme.test",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("acme_co_backend_dev_email.txt"))
        .stdout(predicate::str::contains("Subject: Backend Developer at Acme Co"));

    document.assert();
    message.assert();
    assert_eq!(ctx.read_output("acme_co_backend_dev_email.txt"), format!("{}\n", fixtures::MESSAGE));
    assert!(ctx.output_exists("acme_co_backend_dev_resume.tex"));
}

#[test]
fn email_without_recruiter_fails_before_any_request() {
    let ctx = TestContext::new();
    ctx.write_inputs();

    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/v1/chat/completions").expect(0).create();
    ctx.write_config(&format!("{}/v1/chat/completions", server.url()));

    ctx.cli_with_key()
        .args([
            "run", "-t", "main.tex", "-c", "Acme Co", "-r", "Backend Dev", "-j", "acme.txt",
            "--email",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("recruiter_name"));

    mock.assert();
    assert!(!ctx.output_dir().exists());
}
