use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn prompt_preview_prints_sections_without_credential_or_output() {
    let ctx = TestContext::new();
    ctx.write_inputs();
    ctx.write_file("pain.txt", "Slow deploys\n");

    ctx.cli()
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
            "-p",
            "pain.txt",
            "-k",
            "Python, AWS",
            "-o",
            "out",
            "--prompt-preview",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== SYSTEM ==="))
        .stdout(predicate::str::contains("=== PROMPT ==="))
        .stdout(predicate::str::contains("scale Python services on AWS"))
        .stdout(predicate::str::contains("Slow deploys"))
        .stdout(predicate::str::contains("Built data pipelines in Python"));

    assert!(!ctx.work_dir().join("out").exists());
}

#[test]
fn alias_r_runs_the_run_command() {
    let ctx = TestContext::new();
    ctx.write_inputs();

    ctx.cli()
        .args(["r", "-t", "main.tex", "-c", "Acme", "-r", "Dev", "-j", "acme.txt", "--prompt-preview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== PROMPT ==="));
}

#[test]
fn missing_template_file_is_reported() {
    let ctx = TestContext::new();
    ctx.write_file("acme.txt", "Backend role\n");

    ctx.cli()
        .args([
            "run",
            "-t",
            "absent.tex",
            "-c",
            "Acme",
            "-r",
            "Dev",
            "-j",
            "acme.txt",
            "--prompt-preview",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("template"));
}

#[test]
fn missing_flags_without_terminal_fail_instead_of_prompting() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["run", "--prompt-preview"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Missing required input 'template'"));
}
