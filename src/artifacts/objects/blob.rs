//! Blob object
//!
//! Blobs store file content. Text files keep their content as UTF-8 strings;
//! anything that fails UTF-8 decoding is treated as binary and carried as a
//! hex encoding of the raw bytes.
//!
//! ## Canonical form
//!
//! The digest is always computed over the real file bytes: UTF-8 bytes for
//! text, the hex-decoded bytes for binary. The hex string itself is never
//! hashed, so a binary file and a text file containing its hex dump get
//! distinct digests.

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use bytes::Bytes;

/// File content as stored in the object database
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// UTF-8 text content
    Text(String),
    /// Hex encoding of raw binary content
    Binary(String),
}

/// Blob object representing one file's content
///
/// Each unique file content is stored once, identified by its SHA-1 digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    content: FileContent,
}

impl Blob {
    /// Build a blob from raw workspace bytes, detecting binary content
    pub fn from_workspace_bytes(bytes: Vec<u8>) -> Self {
        match String::from_utf8(bytes) {
            Ok(text) => Blob {
                content: FileContent::Text(text),
            },
            Err(err) => Blob {
                content: FileContent::Binary(hex::encode(err.into_bytes())),
            },
        }
    }

    /// Rebuild a blob from its stored representation and binary flag
    pub fn from_stored(stored: String, is_binary: bool) -> Self {
        let content = if is_binary {
            FileContent::Binary(stored)
        } else {
            FileContent::Text(stored)
        };
        Blob { content }
    }

    pub fn is_binary(&self) -> bool {
        matches!(self.content, FileContent::Binary(_))
    }

    /// The string written to the object file: the text itself, or the hex
    /// encoding for binary content
    pub fn stored_repr(&self) -> &str {
        match &self.content {
            FileContent::Text(text) => text,
            FileContent::Binary(hex) => hex,
        }
    }

    /// The canonical byte form the digest is computed over
    pub fn canonical_bytes(&self) -> anyhow::Result<Bytes> {
        match &self.content {
            FileContent::Text(text) => Ok(Bytes::copy_from_slice(text.as_bytes())),
            FileContent::Binary(encoded) => {
                let raw = hex::decode(encoded).context("Invalid hex encoding in binary blob")?;
                Ok(Bytes::from(raw))
            }
        }
    }

    /// The bytes to write back to the working tree on restore
    pub fn workspace_bytes(&self) -> anyhow::Result<Vec<u8>> {
        Ok(self.canonical_bytes()?.to_vec())
    }

    pub fn object_id(&self) -> anyhow::Result<ObjectId> {
        Ok(ObjectId::hash_bytes(&self.canonical_bytes()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn text_blob_hashes_its_utf8_bytes() {
        let blob = Blob::from_workspace_bytes(b"hello".to_vec());
        assert!(!blob.is_binary());
        assert_eq!(
            blob.object_id().unwrap(),
            ObjectId::hash_bytes(b"hello"),
        );
    }

    #[test]
    fn binary_blob_hashes_decoded_bytes_not_the_hex_string() {
        let raw = vec![0xff, 0x00, 0xfe, 0x01];
        let blob = Blob::from_workspace_bytes(raw.clone());
        assert!(blob.is_binary());
        assert_eq!(blob.stored_repr(), hex::encode(&raw));
        assert_eq!(blob.object_id().unwrap(), ObjectId::hash_bytes(&raw));
        assert_ne!(
            blob.object_id().unwrap(),
            ObjectId::hash_bytes(hex::encode(&raw).as_bytes()),
        );
    }

    #[test]
    fn stored_round_trip_reproduces_workspace_bytes() {
        let raw = vec![0xde, 0xad, 0xbe, 0xef];
        let blob = Blob::from_workspace_bytes(raw.clone());
        let reloaded = Blob::from_stored(blob.stored_repr().to_string(), blob.is_binary());
        assert_eq!(reloaded.workspace_bytes().unwrap(), raw);
    }

    proptest! {
        #[test]
        fn identical_bytes_share_a_digest(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
            let first = Blob::from_workspace_bytes(bytes.clone());
            let second = Blob::from_workspace_bytes(bytes);
            prop_assert_eq!(first.object_id().unwrap(), second.object_id().unwrap());
        }

        #[test]
        fn digest_matches_raw_bytes_regardless_of_encoding(
            bytes in proptest::collection::vec(any::<u8>(), 0..256)
        ) {
            let blob = Blob::from_workspace_bytes(bytes.clone());
            prop_assert_eq!(blob.object_id().unwrap(), ObjectId::hash_bytes(&bytes));
            prop_assert_eq!(blob.workspace_bytes().unwrap(), bytes);
        }
    }
}
