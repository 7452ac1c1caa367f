use std::io::Write;

use log::{info, warn, LevelFilter};
use env_logger::Builder;
use chrono::Local;

use qrng_acquisition::{Acquisition, RunOutcome};
use qrng_client::QrngClient;
use qrng_config::Settings;
use qrng_error::Result;

/// 로거 세팅
fn setup_logger() {
    #[cfg(debug_assertions)]
    {
        Builder::new()
            .filter(None, LevelFilter::Debug)
            .format(|buf,record| {
                writeln!(
                    buf,
                    "[{} {} {}:{}] {}",
                    Local::now().format("%Y-%m-%d %H:%M:%S"),
                    record.level(),
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0),
                    record.args()
                )
            })
            .init()
    }

    #[cfg(not(debug_assertions))]
    {
        Builder::new()
            .filter(None, LevelFilter::Info)
            .init();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 로거 세팅
    setup_logger();

    println!("Starting QRNG automation (safe mode)…");
    info!("QRNG 수집기 시작");

    // 통합 설정 로드
    let settings = Settings::new()?;
    info!(
        "엔드포인트: {}, 최대 요청: {}, 요청 간격: {:?}",
        settings.qrng.endpoint,
        settings.qrng.max_requests,
        settings.qrng.request_delay()
    );

    // API 클라이언트
    let client = QrngClient::new(&settings.qrng)?;

    // 수집 실행
    let acquisition = Acquisition::new(settings.qrng, client);
    let summary = acquisition.run().await?;

    match summary.outcome {
        RunOutcome::Completed => {
            info!("수집 정상 종료: {}건", summary.requests_succeeded);
        }
        RunOutcome::Halted { request_number, error } => {
            warn!(
                "요청 #{request_number} 에서 중단 ({}건 성공): {error}",
                summary.requests_succeeded
            );
        }
    }

    println!("Automation finished safely.");

    Ok(())
}
