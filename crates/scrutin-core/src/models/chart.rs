use base64::Engine as _;
use serde::{Serialize, Serializer};

/// A rendered chart image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartArtifact {
    pub mime_type: String,
    /// Image bytes; serialized as standard base64.
    #[serde(rename = "binary_data", serialize_with = "as_base64")]
    pub data: Vec<u8>,
}

impl ChartArtifact {
    pub fn new(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data,
        }
    }
}

fn as_base64<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&base64::engine::general_purpose::STANDARD.encode(data))
}
