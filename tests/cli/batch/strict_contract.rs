use crate::harness::{TestContext, fixtures};
use predicates::prelude::*;

use super::row_isolation_contract::write_jobs;

#[test]
fn strict_mode_fails_when_any_row_fails() {
    let ctx = TestContext::new();
    write_jobs(&ctx);

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body(fixtures::completion(fixtures::TAILORED))
        .expect(2)
        .create();
    ctx.write_config(&format!("{}/v1/chat/completions", server.url()));

    ctx.cli_with_key()
        .args(["batch", "jobs.csv", "--strict"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("2 succeeded, 1 failed"));

    mock.assert();
    assert!(ctx.output_exists("acme_co_backend_dev_resume.tex"));
}

#[test]
fn strict_mode_passes_when_every_row_succeeds() {
    let ctx = TestContext::new();
    ctx.write_inputs();
    ctx.write_file(
        "jobs.csv",
        "company,role,template,job_description_file\nAcme Co,Backend Dev,main.tex,acme.txt\n",
    );

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body(fixtures::completion(fixtures::TAILORED))
        .expect(1)
        .create();
    ctx.write_config(&format!("{}/v1/chat/completions", server.url()));

    ctx.cli_with_key().args(["batch", "jobs.csv", "--strict"]).assert().success();
    mock.assert();
}
