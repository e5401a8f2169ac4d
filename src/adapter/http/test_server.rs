//! Local HTTP server for fetcher tests
//!
//! 決まったステータスを返すローカルサーバーと受信リクエスト数

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub(crate) const BODY: &str = "<html><body><h1>2025 SODA</h1></body></html>";

/// ステータスを順に返すサーバーを起動する（列を使い切ったら最後の値を繰り返す）
///
/// 返り値はプログラムページ風のURLとリクエスト数のカウンタ
pub(crate) async fn serve_statuses(statuses: Vec<u16>) -> (String, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(AtomicUsize::new(0));
    let counter = requests.clone();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = [0u8; 4096];
            if socket.read(&mut buf).await.unwrap_or(0) == 0 {
                continue;
            }
            let n = counter.fetch_add(1, Ordering::SeqCst);
            let status = statuses[n.min(statuses.len() - 1)];
            let response = format!(
                "HTTP/1.1 {} Test\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                BODY.len(),
                BODY
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    (format!("http://{}/program.cfm?CONFCODE=SODA25", addr), requests)
}
