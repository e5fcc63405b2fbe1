use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Result;
use bytes::Bytes;
use sha1::{Digest, Sha1};
use std::io::BufRead;

pub trait Packable {
    fn serialize(&self) -> Result<Bytes>;
}

pub trait Unpackable {
    fn deserialize(reader: impl BufRead) -> Result<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn display(&self) -> String;

    fn object_id(&self) -> Result<ObjectId> {
        let content = self.serialize()?;
        Ok(hash_bytes(&content))
    }
}

/// Content hash of a raw payload, as used for object identity
pub fn hash_bytes(payload: &[u8]) -> ObjectId {
    let mut hasher = Sha1::new();
    hasher.update(payload);

    ObjectId::from_digest(format!("{:x}", hasher.finalize()))
}
