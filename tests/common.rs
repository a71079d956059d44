#![allow(dead_code)]
use std::net::SocketAddr;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use assert_cmd::{Command, cargo_bin_cmd};
use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

pub fn rtt() -> Command {
    cargo_bin_cmd!("rtimetable")
}

/// Fixture timetable for batch F7: two Monday classes and one Tuesday
/// class, in server order.
pub fn f7_rows() -> Value {
    json!([
        {
            "day": "MON",
            "start": "09:00",
            "subject_code": "CS201",
            "room": "B-104",
            "faculty": "Dr. Rao"
        },
        {
            "day": "MON",
            "start": "10:00",
            "subject_code": "MA202",
            "room": "B-104",
            "faculty": "Dr. Iyer"
        },
        {
            "day": "TUES",
            "start": "09:00",
            "subject_code": "PH203",
            "room": "C-210",
            "faculty": "Dr. Sen"
        }
    ])
}

async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

async fn timetable(Path(batch): Path<String>) -> Response {
    // The real server lowercases the batch before matching.
    match batch.to_lowercase().as_str() {
        "f7" => Json(f7_rows()).into_response(),
        "empty" => Json(json!([])).into_response(),
        "boom" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        "garbled" => "this is not json".into_response(),
        "slow" => {
            tokio::time::sleep(Duration::from_secs(3)).await;
            Json(f7_rows()).into_response()
        }
        _ => (StatusCode::NOT_FOUND, Json(json!({"detail": "Batch not found"}))).into_response(),
    }
}

/// In-process timetable server for tests, serving the same routes as the
/// real API on an ephemeral port.
pub struct MockApi {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl MockApi {
    pub fn start() -> Self {
        let (addr_tx, addr_rx) = std::sync::mpsc::channel();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let handle = thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("build runtime");

            rt.block_on(async move {
                let app = Router::new()
                    .route("/", get(health))
                    .route("/timetable/:batch", get(timetable));

                let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
                let addr = listener.local_addr().expect("local addr");
                addr_tx.send(addr).expect("send addr");

                axum::serve(listener, app)
                    .with_graceful_shutdown(async {
                        let _ = shutdown_rx.await;
                    })
                    .await
                    .expect("serve");
            });
        });

        let addr = addr_rx.recv().expect("mock server address");
        Self {
            addr,
            shutdown: Some(shutdown_tx),
            handle: Some(handle),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
