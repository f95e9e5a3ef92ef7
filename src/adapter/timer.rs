//! Poll Timer
//!
//! 停止シグナルを受け付けるポーリング間隔の待機

use async_trait::async_trait;
use log::info;
use std::io;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

use crate::application::use_cases::watch_directory::PollTimer;

/// 間隔だけ待機し、SIGINT/SIGTERMを受けていたら停止を返すタイマー
///
/// シグナルは作成時に一度だけ登録され、ポーリング中に届いたものも次の待機で検知される。
pub struct ShutdownAwareTimer {
    shutdown: CancellationToken,
    listener: JoinHandle<()>,
}

impl ShutdownAwareTimer {
    /// シグナルハンドラを登録してタイマーを作成（Tokioランタイム内で呼ぶこと）
    ///
    /// # Errors
    ///
    /// シグナルハンドラを登録できない場合にエラーを返す
    pub fn new() -> io::Result<Self> {
        Self::with_token(CancellationToken::new())
    }

    fn with_token(shutdown: CancellationToken) -> io::Result<Self> {
        let listener = spawn_signal_listener(shutdown.clone())?;
        Ok(Self { shutdown, listener })
    }
}

impl Drop for ShutdownAwareTimer {
    fn drop(&mut self) {
        self.listener.abort();
    }
}

#[cfg(unix)]
fn spawn_signal_listener(shutdown: CancellationToken) -> io::Result<JoinHandle<()>> {
    use tokio::signal::unix::{signal, SignalKind};

    // ストリームはここで作るので、タスクの起動前に届いたシグナルも失われない
    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;

    Ok(tokio::spawn(async move {
        let name = tokio::select! {
            _ = interrupt.recv() => "SIGINT",
            _ = terminate.recv() => "SIGTERM",
        };
        info!("{} received, stopping after the current poll", name);
        shutdown.cancel();
    }))
}

#[cfg(not(unix))]
fn spawn_signal_listener(shutdown: CancellationToken) -> io::Result<JoinHandle<()>> {
    Ok(tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Ctrl+C received, stopping after the current poll");
                shutdown.cancel();
            }
            Err(e) => log::error!("Failed to listen for Ctrl+C: {}", e),
        }
    }))
}

#[async_trait]
impl PollTimer for ShutdownAwareTimer {
    async fn wait(&self, interval: Duration) -> bool {
        if self.shutdown.is_cancelled() {
            return false;
        }

        tokio::select! {
            _ = sleep(interval) => true,
            _ = self.shutdown.cancelled() => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_wait_elapses_interval() {
        let timer = ShutdownAwareTimer::new().unwrap();
        let started = Instant::now();

        let keep_running = timer.wait(Duration::from_millis(20)).await;

        assert!(keep_running);
        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_shutdown_between_waits_is_latched() {
        let token = CancellationToken::new();
        let timer = ShutdownAwareTimer::with_token(token.clone()).unwrap();

        assert!(timer.wait(Duration::from_millis(5)).await);

        // 待機していない間の停止要求
        token.cancel();

        let started = Instant::now();
        assert!(!timer.wait(Duration::from_secs(30)).await);
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_shutdown_interrupts_wait() {
        let token = CancellationToken::new();
        let timer = ShutdownAwareTimer::with_token(token.clone()).unwrap();

        let canceller = tokio::spawn(async move {
            sleep(Duration::from_millis(20)).await;
            token.cancel();
        });

        assert!(!timer.wait(Duration::from_secs(30)).await);
        canceller.await.unwrap();
    }
}
