//! Observable conversion state with a single writer path.
//!
//! A [`ConversionSession`] owns the current [`ConversionOutcome`] and publishes
//! every transition through a `watch` channel. Each convert action is tagged
//! with a ticket; results from a superseded ticket are dropped instead of
//! overwriting the newer state.

use crate::core::convert;
use crate::core::{ConversionOutcome, ConversionRequest, ConvertError, RateProvider};
use std::sync::Arc;
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

pub struct ConversionSession {
    provider: Arc<dyn RateProvider>,
    state: watch::Sender<ConversionOutcome>,
    latest_ticket: Mutex<u64>,
}

impl ConversionSession {
    pub fn new(provider: Arc<dyn RateProvider>) -> Self {
        let (state, _) = watch::channel(ConversionOutcome::Empty);
        Self {
            provider,
            state,
            latest_ticket: Mutex::new(0),
        }
    }

    /// Read-only view of the outcome. Observers see every state published
    /// after they subscribe, starting from the current one.
    pub fn subscribe(&self) -> watch::Receiver<ConversionOutcome> {
        self.state.subscribe()
    }

    pub fn current(&self) -> ConversionOutcome {
        self.state.borrow().clone()
    }

    /// Runs one conversion in the calling task and returns the outcome it
    /// produced. The returned value is reported even if a newer action has
    /// superseded this one; only the published state is guarded.
    #[instrument(name = "Convert", skip(self))]
    pub async fn convert(&self, amount: &str, from: &str, to: &str) -> ConversionOutcome {
        let request = match ConversionRequest::parse(amount, from, to) {
            Ok(request) => request,
            Err(e) => {
                let ticket = self.next_ticket().await;
                let outcome = ConversionOutcome::Failure(e.to_string());
                self.publish(ticket, outcome.clone()).await;
                return outcome;
            }
        };

        let ticket = self.next_ticket().await;
        self.publish(ticket, ConversionOutcome::Loading).await;

        let result = match self.provider.latest(&request.from).await {
            Ok(snapshot) => convert::convert(&request, &snapshot),
            Err(e) => Err(ConvertError::from(e)),
        };
        let outcome = ConversionOutcome::from(result);

        self.publish(ticket, outcome.clone()).await;
        outcome
    }

    /// Fire-and-forget variant of [`convert`](Self::convert); the outcome is
    /// only observable through [`subscribe`](Self::subscribe).
    pub fn spawn_convert(self: &Arc<Self>, amount: &str, from: &str, to: &str) -> JoinHandle<()> {
        let session = Arc::clone(self);
        let (amount, from, to) = (amount.to_string(), from.to_string(), to.to_string());
        tokio::spawn(async move {
            session.convert(&amount, &from, &to).await;
        })
    }

    async fn next_ticket(&self) -> u64 {
        let mut latest = self.latest_ticket.lock().await;
        *latest += 1;
        *latest
    }

    async fn publish(&self, ticket: u64, outcome: ConversionOutcome) {
        let latest = self.latest_ticket.lock().await;
        if *latest != ticket {
            debug!(ticket, latest = *latest, "Dropping superseded outcome");
            return;
        }
        debug!(ticket, ?outcome, "Publishing outcome");
        self.state.send_replace(outcome);
    }
}
