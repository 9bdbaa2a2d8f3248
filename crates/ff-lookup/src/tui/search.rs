//! Background lookup worker thread

use ff_lookup_core::{LookupError, PlayerBundle, PlayerLookup, Uid};
use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Lookup sent to the worker thread
#[derive(Debug, Clone)]
pub struct LookupRequest {
    pub id: u64,
    pub uid: Uid,
}

/// Finished lookup from the worker thread
#[derive(Debug)]
pub struct LookupResponse {
    pub id: u64,
    pub outcome: Result<PlayerBundle, LookupError>,
    pub duration: Duration,
}

/// Spawn the lookup worker thread. It exits once the request sender is dropped.
pub fn spawn_worker(
    lookup: Arc<dyn PlayerLookup>,
    req_rx: Receiver<LookupRequest>,
    resp_tx: Sender<LookupResponse>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        while let Ok(mut req) = req_rx.recv() {
            // Coalesce to the newest queued request
            while let Ok(next) = req_rx.try_recv() {
                log::debug!("skipping superseded lookup #{}", req.id);
                req = next;
            }

            let start = Instant::now();
            let outcome = lookup.lookup(&req.uid);
            let duration = start.elapsed();
            log::debug!("lookup #{} for {} took {:?}", req.id, req.uid, duration);

            if resp_tx
                .send(LookupResponse {
                    id: req.id,
                    outcome,
                    duration,
                })
                .is_err()
            {
                break;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ff_lookup_core::MockLookup;
    use std::sync::mpsc;

    fn request(id: u64, uid: &str) -> LookupRequest {
        LookupRequest {
            id,
            uid: Uid::parse(uid).unwrap(),
        }
    }

    #[test]
    fn test_worker_answers_and_exits() {
        let (req_tx, req_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();
        let handle = spawn_worker(Arc::new(MockLookup::new(Duration::ZERO)), req_rx, resp_tx);

        req_tx.send(request(1, "12345678")).unwrap();
        let resp = resp_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(resp.id, 1);
        assert_eq!(resp.outcome.unwrap().player.uid.as_str(), "12345678");

        req_tx.send(request(2, "99999999")).unwrap();
        let resp = resp_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(resp.id, 2);
        assert!(matches!(resp.outcome, Err(LookupError::NotFound { .. })));

        drop(req_tx);
        handle.join().unwrap();
    }

    #[test]
    fn test_worker_coalesces_queued_requests() {
        let (req_tx, req_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        // queue everything before the worker starts so it sees all three at once
        req_tx.send(request(1, "12345678")).unwrap();
        req_tx.send(request(2, "23456789")).unwrap();
        req_tx.send(request(3, "34567890")).unwrap();
        drop(req_tx);

        let handle = spawn_worker(Arc::new(MockLookup::new(Duration::ZERO)), req_rx, resp_tx);
        handle.join().unwrap();

        let ids: Vec<u64> = resp_rx.try_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3]);
    }
}
