//! Shutdown Signal Tests
//!
//! 実際のSIGTERMでShutdownAwareTimerが停止することを確認する
//! （シグナルはプロセス全体に届くため、このファイルのテストは1つだけにする）

#![cfg(unix)]

use rpi_uploader::adapter::timer::ShutdownAwareTimer;
use rpi_uploader::application::use_cases::watch_directory::PollTimer;
use std::time::{Duration, Instant};
use tokio::process::Command;

#[tokio::test]
async fn test_sigterm_between_waits_stops_timer() {
    let timer = ShutdownAwareTimer::new().unwrap();

    assert!(timer.wait(Duration::from_millis(10)).await);

    // ポーリング中（待機していない間）にシグナルが届く
    let status = Command::new("kill")
        .args(["-TERM", &std::process::id().to_string()])
        .status()
        .await
        .unwrap();
    assert!(status.success());
    tokio::time::sleep(Duration::from_millis(200)).await;

    let started = Instant::now();
    let keep_running = timer.wait(Duration::from_secs(30)).await;

    assert!(!keep_running);
    assert!(started.elapsed() < Duration::from_secs(5));
}
