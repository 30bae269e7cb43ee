use crate::error::ProtocolError;
use crate::model::photo::PhotoEvent;
use crate::model::session::SessionId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Negotiation fields the relay forwards without looking inside.
pub type Payload = serde_json::Map<String, Value>;

/// Addressed negotiation message as sent by a peer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub target: SessionId,
    #[serde(flatten)]
    pub payload: Payload,
}

/// Negotiation message as delivered to its target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relayed {
    pub sender: SessionId,
    #[serde(flatten)]
    pub payload: Payload,
}

impl Relayed {
    /// Keys that would collide with the envelope are dropped from the payload.
    pub fn new(sender: SessionId, mut payload: Payload) -> Self {
        payload.remove("type");
        payload.remove("sender");
        Self { sender, payload }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    Offer,
    Answer,
    IceCandidate,
}

impl SignalKind {
    pub fn relay(self, relayed: Relayed) -> ServerMessage {
        match self {
            SignalKind::Offer => ServerMessage::Offer(relayed),
            SignalKind::Answer => ServerMessage::Answer(relayed),
            SignalKind::IceCandidate => ServerMessage::IceCandidate(relayed),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SignalKind::Offer => "offer",
            SignalKind::Answer => "answer",
            SignalKind::IceCandidate => "ice-candidate",
        }
    }
}

/// Messages a peer sends to the relay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ClientMessage {
    ClientReady,
    AdminReady,
    Offer(Signal),
    Answer(Signal),
    IceCandidate(Signal),
    ClientStopped,
    CameraSwitched {
        #[serde(rename = "cameraName")]
        camera_name: String,
    },
}

impl ClientMessage {
    pub fn decode(text: &str) -> Result<Self, ProtocolError> {
        serde_json::from_str(text).map_err(ProtocolError::Decode)
    }

    pub fn encode(&self) -> Result<String, ProtocolError> {
        serde_json::to_string(self).map_err(ProtocolError::Encode)
    }
}

/// Messages the relay sends to peers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum ServerMessage {
    CameraAvailable { client_id: SessionId },
    CameraDisconnected { client_id: SessionId },
    CameraSwitched { client_id: SessionId, camera_name: String },
    AvailableCameras { cameras: Vec<SessionId> },
    Offer(Relayed),
    Answer(Relayed),
    IceCandidate(Relayed),
    NewPhoto(PhotoEvent),
}

impl ServerMessage {
    pub fn decode(text: &str) -> Result<Self, ProtocolError> {
        serde_json::from_str(text).map_err(ProtocolError::Decode)
    }

    pub fn encode(&self) -> Result<String, ProtocolError> {
        serde_json::to_string(self).map_err(ProtocolError::Encode)
    }
}
