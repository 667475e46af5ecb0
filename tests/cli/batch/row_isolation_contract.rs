use std::fs;

use crate::harness::{TestContext, fixtures};
use predicates::prelude::*;

pub(super) const JOBS_CSV: &str = "company,role,template,job_description_file\n\
Acme Co,Backend Dev,main.tex,acme.txt\n\
Initech,QA,main.tex,missing.txt\n\
Globex,Ops,main.tex,globex.txt\n";

pub(super) fn write_jobs(ctx: &TestContext) {
    ctx.write_inputs();
    ctx.write_file("globex.txt", "Globex needs an Ops engineer.\n");
    ctx.write_file("jobs.csv", JOBS_CSV);
}

#[test]
fn failing_row_does_not_stop_the_batch() {
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
        .args(["batch", "jobs.csv", "--report", "report.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#1 Acme Co - Backend Dev"))
        .stdout(predicate::str::contains("❌ #2 Initech - QA [missing_input]"))
        .stdout(predicate::str::contains("2 succeeded, 1 failed"));

    mock.assert();
    assert!(ctx.output_exists("acme_co_backend_dev_resume.tex"));
    assert!(ctx.output_exists("globex_ops_resume.tex"));
    assert!(!ctx.output_exists("initech_qa_resume.tex"));

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(ctx.work_dir().join("report.json")).unwrap())
            .unwrap();
    let outcomes = report["outcomes"].as_array().unwrap();
    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[0]["status"], "succeeded");
    assert_eq!(outcomes[1]["status"], "failed");
    assert_eq!(outcomes[1]["kind"], "missing_input");
    assert_eq!(outcomes[1]["job"], "Initech - QA");
    assert_eq!(outcomes[2]["status"], "succeeded");
}

#[test]
fn service_failure_on_one_row_is_isolated() {
    let ctx = TestContext::new();
    ctx.write_inputs();
    ctx.write_file("globex.txt", "Globex needs an Ops engineer.\n");
    ctx.write_file(
        "jobs.csv",
        "company,role,template,job_description_file\n\
         Acme Co,Backend Dev,main.tex,acme.txt\n\
         Globex,Ops,main.tex,globex.txt\n",
    );

    let mut server = mockito::Server::new();
    let failing = server
        .mock("POST", "/v1/chat/completions")
        .match_body(mockito::Matcher::Regex("Acme Co".to_string()))
        .with_status(500)
        .with_body(r#"{"error":{"message":"upstream unavailable"}}"#)
        .expect(1)
        .create();
    let working = server
        .mock("POST", "/v1/chat/completions")
        .match_body(mockito::Matcher::Regex("Globex".to_string()))
        .with_status(200)
        .with_body(fixtures::completion(fixtures::TAILORED))
        .expect(1)
        .create();
    ctx.write_config(&format!("{}/v1/chat/completions", server.url()));

    ctx.cli_with_key()
        .args(["b", "jobs.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("generation:transient_service"))
        .stdout(predicate::str::contains("1 succeeded, 1 failed"));

    failing.assert();
    working.assert();
    assert!(ctx.output_exists("globex_ops_resume.tex"));
}
