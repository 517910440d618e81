//! End-to-end tests for livepoll.
//!
//! Each test starts an in-process mock of Horizon and Soroban RPC (axum on a
//! random port) and drives the public client API against it over HTTP.
//!
//! ```bash
//! cargo test -p livepoll-integration-tests
//! ```

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    use axum::extract::{Form, Path, State};
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::json;

    use livepoll_client::{fetch_feedback_events, MockTally, TallyReader, VoteSubmitter};
    use livepoll_core::config::{NetworkConfig, TESTNET_PASSPHRASE};
    use livepoll_core::types::{VoteResult, VoteStatus};
    use livepoll_core::xdr::{self, MuxedAccount, Preconditions};
    use livepoll_horizon::HorizonAdapter;
    use livepoll_wallet::{LocalWallet, MockWallet, Wallet};
    use stellar_strkey::ed25519::PublicKey;

    /// State shared by the mock ledger's handlers.
    #[derive(Default)]
    struct Ledger {
        /// Account id -> current sequence (as Horizon renders it).
        accounts: Mutex<HashMap<String, String>>,
        /// Envelopes received by `POST /transactions`.
        submitted: Mutex<Vec<String>>,
        /// Title to reject submissions with, if any.
        reject_with: Mutex<Option<String>>,
        unhealthy: AtomicBool,
    }

    async fn account(State(ledger): State<Arc<Ledger>>, Path(id): Path<String>) -> Response {
        match ledger.accounts.lock().unwrap().get(&id) {
            Some(seq) => Json(json!({ "id": id, "sequence": seq })).into_response(),
            None => (
                StatusCode::NOT_FOUND,
                Json(json!({ "title": "Resource Missing", "status": 404 })),
            )
                .into_response(),
        }
    }

    async fn submit(
        State(ledger): State<Arc<Ledger>>,
        Form(form): Form<HashMap<String, String>>,
    ) -> Response {
        let tx = form.get("tx").cloned().unwrap_or_default();
        ledger.submitted.lock().unwrap().push(tx);
        if let Some(title) = ledger.reject_with.lock().unwrap().clone() {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "title": title, "status": 400 })),
            )
                .into_response();
        }
        Json(json!({ "hash": "abc123", "ledger": 1, "successful": true })).into_response()
    }

    async fn health(State(ledger): State<Arc<Ledger>>) -> Response {
        if ledger.unhealthy.load(Ordering::SeqCst) {
            StatusCode::SERVICE_UNAVAILABLE.into_response()
        } else {
            Json(json!({ "status": "healthy" })).into_response()
        }
    }

    /// Starts the mock ledger and returns a config pointing at it.
    async fn start_ledger(ledger: Arc<Ledger>) -> NetworkConfig {
        let app = Router::new()
            .route("/accounts/:id", get(account))
            .route("/transactions", post(submit))
            .route("/health", get(health))
            .with_state(ledger);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind");
        let addr = listener.local_addr().expect("no local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server failed");
        });

        let base = format!("http://{addr}");
        NetworkConfig::local(base.clone(), base)
    }

    fn submitter<W: Wallet>(
        wallet: W,
        config: &NetworkConfig,
    ) -> VoteSubmitter<W, HorizonAdapter> {
        let network = Arc::new(HorizonAdapter::new(config).expect("adapter"));
        VoteSubmitter::new(Arc::new(wallet), network, config)
    }

    #[tokio::test]
    async fn vote_with_local_wallet_reaches_ledger_signed() {
        let ledger = Arc::new(Ledger::default());
        let config = start_ledger(ledger.clone()).await;

        let wallet = LocalWallet::from_bytes(&[11u8; 32], TESTNET_PASSPHRASE);
        ledger
            .accounts
            .lock()
            .unwrap()
            .insert(wallet.identity().to_string(), "5".into());
        let public_key = PublicKey::from_string(wallet.identity().as_str()).unwrap();

        let result = submitter(wallet, &config).cast_vote(1).await;
        assert_eq!(result, VoteResult::success("abc123"));

        let submitted = ledger.submitted.lock().unwrap().clone();
        assert_eq!(submitted.len(), 1);
        let envelope = xdr::decode_envelope(&submitted[0]).unwrap();
        assert!(matches!(
            &envelope.tx.source_account,
            MuxedAccount::Ed25519(key) if key.0 == public_key.0
        ));
        assert_eq!(envelope.tx.seq_num.0, 6);
        assert_eq!(
            envelope.tx.memo,
            xdr::text_memo("Vote for option 1").unwrap()
        );
        assert_eq!(envelope.signatures.len(), 1);
        let Preconditions::Time(tb) = &envelope.tx.cond else {
            panic!("expected time bounds, got {:?}", envelope.tx.cond);
        };
        assert_eq!(tb.max_time.0 - tb.min_time.0, 300);
    }

    #[tokio::test]
    async fn vote_with_mock_wallet_succeeds_against_echoing_ledger() {
        let ledger = Arc::new(Ledger::default());
        let config = start_ledger(ledger.clone()).await;

        let wallet = MockWallet::new();
        let identity = wallet.public_key().await.unwrap().unwrap();
        ledger
            .accounts
            .lock()
            .unwrap()
            .insert(identity.to_string(), "5".into());

        let result = submitter(wallet, &config).cast_vote(1).await;
        assert_eq!(result.tx_hash, "abc123");
        assert_eq!(result.status, VoteStatus::Success);
    }

    #[tokio::test]
    async fn disconnected_wallet_never_touches_ledger() {
        let ledger = Arc::new(Ledger::default());
        let config = start_ledger(ledger.clone()).await;

        let result = submitter(MockWallet::disconnected(), &config).cast_vote(0).await;
        assert_eq!(result.tx_hash, "");
        assert_eq!(result.status, VoteStatus::Failed);
        assert!(result.error.unwrap().contains("wallet not connected"));
        assert!(ledger.submitted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_account_fails_before_submission() {
        let ledger = Arc::new(Ledger::default());
        let config = start_ledger(ledger.clone()).await;

        let result = submitter(MockWallet::new(), &config).cast_vote(2).await;
        assert_eq!(result.status, VoteStatus::Failed);
        assert!(result.error.unwrap().contains("Resource Missing"));
        assert!(ledger.submitted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejected_submission_reports_title() {
        let ledger = Arc::new(Ledger::default());
        *ledger.reject_with.lock().unwrap() = Some("Transaction Failed".into());
        let config = start_ledger(ledger.clone()).await;

        let wallet = MockWallet::new();
        let identity = wallet.public_key().await.unwrap().unwrap();
        ledger
            .accounts
            .lock()
            .unwrap()
            .insert(identity.to_string(), "5".into());

        let result = submitter(wallet, &config).cast_vote(1).await;
        assert_eq!(result.status, VoteStatus::Failed);
        assert_eq!(
            result.error.as_deref(),
            Some("submission failed: Transaction Failed")
        );
    }

    #[tokio::test]
    async fn unreachable_ledger_is_failed_result() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let config = NetworkConfig::local(base.clone(), base);
        let result = submitter(MockWallet::new(), &config).cast_vote(1).await;
        assert_eq!(result.status, VoteStatus::Failed);
        assert!(result.error.is_some());

        let tally = MockTally::new(Arc::new(HorizonAdapter::new(&config).unwrap()));
        assert_eq!(tally.total_votes().await, 0);
        assert_eq!(tally.vote_counts().await, vec![0, 0, 0]);
    }

    #[tokio::test]
    async fn concurrent_votes_share_a_sequence_number() {
        // Documented limitation: no per-identity coordination, so both
        // in-flight votes build on the same account sequence.
        let ledger = Arc::new(Ledger::default());
        let config = start_ledger(ledger.clone()).await;

        let wallet = LocalWallet::from_bytes(&[12u8; 32], TESTNET_PASSPHRASE);
        ledger
            .accounts
            .lock()
            .unwrap()
            .insert(wallet.identity().to_string(), "9".into());
        let submitter = submitter(wallet, &config);

        let (a, b) = tokio::join!(submitter.cast_vote(0), submitter.cast_vote(1));
        assert!(a.is_success() && b.is_success());

        let submitted = ledger.submitted.lock().unwrap().clone();
        let sequences: Vec<i64> = submitted
            .iter()
            .map(|tx| xdr::decode_envelope(tx).unwrap().tx.seq_num.0)
            .collect();
        assert_eq!(sequences, vec![10, 10]);
    }

    #[tokio::test]
    async fn tally_follows_liveness_without_caching() {
        let ledger = Arc::new(Ledger::default());
        let config = start_ledger(ledger.clone()).await;
        let tally = MockTally::new(Arc::new(HorizonAdapter::new(&config).unwrap()));

        assert_eq!(tally.total_votes().await, 247);
        assert_eq!(tally.vote_counts().await, vec![111, 77, 59]);

        ledger.unhealthy.store(true, Ordering::SeqCst);
        assert_eq!(tally.total_votes().await, 0);
        assert_eq!(tally.vote_counts().await, vec![0, 0, 0]);

        ledger.unhealthy.store(false, Ordering::SeqCst);
        assert_eq!(tally.tally().await.total, 247);
    }

    #[tokio::test]
    async fn feedback_events_follow_liveness() {
        let ledger = Arc::new(Ledger::default());
        let config = start_ledger(ledger.clone()).await;
        let network = HorizonAdapter::new(&config).unwrap();

        assert_eq!(
            fetch_feedback_events(&network, &config.contract_id).await.len(),
            3
        );
        ledger.unhealthy.store(true, Ordering::SeqCst);
        assert!(fetch_feedback_events(&network, &config.contract_id)
            .await
            .is_empty());
    }
}
