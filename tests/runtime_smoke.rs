#![cfg(test)]
// End-to-end runtime smoke test (headless)
// - Starts coursea::app::run in the background against a temp catalog.
// - COURSEA_TEST_HEADLESS=1 bypasses raw TTY setup/restore and input.
// - The task must not panic; it is aborted after a short wait.

use std::io::Write;
use std::time::Duration;

use coursea::catalog::CatalogSource;
use coursea::theme::Settings;

#[tokio::test(flavor = "multi_thread")]
async fn runtime_smoke_headless_initializes_and_runs_without_panic() {
    unsafe {
        std::env::set_var("COURSEA_TEST_HEADLESS", "1");
    }

    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(br#"{"courses":[{"courseCode":"CS101","title":"Intro","department":"CS","level":100}]}"#)
        .expect("write catalog");
    let source = CatalogSource::File(file.path().to_path_buf());

    let handle = tokio::spawn(async move { coursea::app::run(source, Settings::default()).await });
    tokio::time::sleep(Duration::from_millis(100)).await;

    if handle.is_finished() {
        match handle.await {
            Ok(run_result) => {
                if let Err(e) = run_result {
                    panic!("app::run returned error early: {e:?}");
                }
                return;
            }
            Err(join_err) => panic!("app::run task panicked: {join_err}"),
        }
    }

    handle.abort();
    match handle.await {
        Ok(run_result) => {
            if let Err(e) = run_result {
                panic!("app::run completed with error on abort race: {e:?}");
            }
        }
        Err(join_err) => {
            assert!(
                join_err.is_cancelled(),
                "app::run join error should be cancellation, got: {join_err}"
            );
        }
    }
}
