//! Coin ownership proofs.
//!
//! Whoever holds a printed seed redeems the coin by signing the account
//! address the funds should go to. The contract checks the signature
//! against the public key it was initialised with.

use ed25519_dalek::{Signature, Signer, Verifier, VerifyingKey};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::seed::EncodedSeed;

/// A signed account address, all fields lower-case hex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinSignature {
    pub message: String,
    pub pubkey: String,
    pub signature: String,
}

/// Sign the hex-encoded `account` with the key of `seed`.
pub fn sign_account(seed: &EncodedSeed, account: &str) -> Result<CoinSignature, CoreError> {
    let message = hex::decode(account)
        .map_err(|e| CoreError::Account(format!("`{account}` is not hex: {e}")))?;
    let keys = seed.decode()?.key_pair();
    let signature = keys.signing_key().sign(&message);

    Ok(CoinSignature {
        message: account.to_ascii_lowercase(),
        pubkey: keys.public_key_hex(),
        signature: hex::encode(signature.to_bytes()),
    })
}

impl CoinSignature {
    /// Check the signature over `message` under `pubkey`.
    pub fn verify(&self) -> bool {
        let decode = || -> Option<(Vec<u8>, VerifyingKey, Signature)> {
            let message = hex::decode(&self.message).ok()?;
            let pubkey: [u8; 32] = hex::decode(&self.pubkey).ok()?.try_into().ok()?;
            let signature: [u8; 64] = hex::decode(&self.signature).ok()?.try_into().ok()?;
            Some((
                message,
                VerifyingKey::from_bytes(&pubkey).ok()?,
                Signature::from_bytes(&signature),
            ))
        };

        decode().is_some_and(|(message, key, signature)| key.verify(&message, &signature).is_ok())
    }
}
