//! Per-session message ordering for the console transport.

use reg_dialogue::{DialogueController, Inbound, Reply};

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, warn};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinSet;

/// Reply together with the identity it answers
pub type Outbound = (String, Reply);

/// Runs one worker per identity so messages from the same sender are handled
/// in arrival order while different senders proceed concurrently.
///
/// Workers live until [`Dispatcher::finish`]; their number is bounded by the
/// number of distinct senders.
pub struct Dispatcher {
    controller: Arc<DialogueController>,
    queues: HashMap<String, UnboundedSender<Inbound>>,
    workers: JoinSet<()>,
    output: UnboundedSender<Outbound>,
}

impl Dispatcher {
    /// Replies are sent to the returned receiver as they are produced.
    pub fn new(controller: Arc<DialogueController>) -> (Self, UnboundedReceiver<Outbound>) {
        let (output, replies) = mpsc::unbounded_channel();
        let dispatcher = Self {
            controller,
            queues: HashMap::new(),
            workers: JoinSet::new(),
            output,
        };
        (dispatcher, replies)
    }

    pub fn dispatch(&mut self, inbound: Inbound) {
        let identity = inbound.identity.clone();

        if !self.queues.contains_key(&identity) {
            let queue = self.spawn_worker(identity.clone());
            self.queues.insert(identity.clone(), queue);
        }

        let delivered = self
            .queues
            .get(&identity)
            .is_some_and(|queue| queue.send(inbound).is_ok());
        if !delivered {
            warn!("Worker for {identity} is gone, message dropped");
            self.queues.remove(&identity);
        }
    }

    /// Close every queue and wait until queued messages are handled.
    pub async fn finish(mut self) {
        self.queues.clear();
        while let Some(joined) = self.workers.join_next().await {
            if let Err(e) = joined {
                warn!("Session worker failed: {e}");
            }
        }
    }

    fn spawn_worker(&mut self, identity: String) -> UnboundedSender<Inbound> {
        let (queue, mut inbox) = mpsc::unbounded_channel::<Inbound>();
        let controller = Arc::clone(&self.controller);
        let output = self.output.clone();

        debug!("Starting session worker for {identity}");
        self.workers.spawn(async move {
            while let Some(inbound) = inbox.recv().await {
                let reply = controller.on_user_message(&identity, inbound).await;
                if output.send((identity.clone(), reply)).is_err() {
                    break;
                }
            }
        });

        queue
    }
}
