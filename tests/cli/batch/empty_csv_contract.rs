use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn header_only_csv_exits_non_zero() {
    let ctx = TestContext::new();
    ctx.write_config("http://127.0.0.1:9/v1/chat/completions");
    ctx.write_file("jobs.csv", "company,role,template,job_description_file\n");

    ctx.cli_with_key()
        .args(["batch", "jobs.csv"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No jobs found"));
}

#[test]
fn missing_csv_exits_non_zero() {
    let ctx = TestContext::new();
    ctx.write_config("http://127.0.0.1:9/v1/chat/completions");

    ctx.cli_with_key()
        .args(["batch", "absent.csv"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid batch input"));
}

#[test]
fn batch_without_api_key_exits_non_zero() {
    let ctx = TestContext::new();
    ctx.write_file("jobs.csv", "company,role,template,job_description_file\nA,B,main.tex,jd.txt\n");

    ctx.cli()
        .args(["batch", "jobs.csv", "-o", "out"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("OPENAI_API_KEY"));
}
