use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

/// The logical ZeroMQ communication pattern under test.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, Default, Hash)]
pub enum SocketPattern {
    #[default]
    #[display("PUSH/PULL")]
    #[serde(rename = "pushpull")]
    PushPull,
    #[display("REQ/REP")]
    #[serde(rename = "reqrep")]
    ReqRep,
    #[display("PUB/SUB PROXY")]
    #[serde(rename = "pubsubproxy")]
    PubSubProxy,
}

impl SocketPattern {
    /// Segment used in results-table file names.
    pub fn file_stem(&self) -> &'static str {
        match self {
            SocketPattern::PushPull => "pushpull",
            SocketPattern::ReqRep => "reqrep",
            SocketPattern::PubSubProxy => "pubsubproxy",
        }
    }
}
