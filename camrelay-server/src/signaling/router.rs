use crate::registry::SessionStore;
use camrelay_core::{Relayed, SessionId, Signal, SignalKind};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    Delivered,
    UnknownTarget,
    SendFailed,
}

/// Forwards a negotiation message to its addressed session, stamping the
/// sender id. The payload is passed through untouched. Failures are logged
/// and never reported back to the sender.
pub fn route<S>(store: &S, sender: SessionId, kind: SignalKind, signal: Signal) -> RouteOutcome
where
    S: SessionStore + ?Sized,
{
    let Signal { target, payload } = signal;

    let Some(session) = store.get(&target) else {
        warn!(
            "Target {} not found for {} from {}",
            target,
            kind.as_str(),
            sender
        );
        return RouteOutcome::UnknownTarget;
    };

    debug!("Forwarding {} from {} to {}", kind.as_str(), sender, target);
    match session.send(kind.relay(Relayed::new(sender, payload))) {
        Ok(()) => RouteOutcome::Delivered,
        Err(e) => {
            warn!("Failed to forward {} to {}: {}", kind.as_str(), target, e);
            RouteOutcome::SendFailed
        }
    }
}
