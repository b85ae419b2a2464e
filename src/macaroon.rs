use std::{fmt, path::Path};

use crate::credentials::read_file;

/// Raw macaroon bytes, as found in `admin.macaroon`.
#[derive(Clone, PartialEq, Eq)]
pub struct Macaroon(Vec<u8>);

impl Macaroon {
    pub fn read(path: impl AsRef<Path>) -> crate::Result<Self> {
        read_file(path.as_ref()).map(Macaroon)
    }

    /// Value of the `Grpc-Metadata-macaroon` header.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl From<Vec<u8>> for Macaroon {
    fn from(bytes: Vec<u8>) -> Self {
        Macaroon(bytes)
    }
}

impl AsRef<[u8]> for Macaroon {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

// Bearer credential: keep it out of logs.
impl fmt::Debug for Macaroon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Macaroon(<{} bytes>)", self.0.len())
    }
}
