//! Vote transactions on top of the `stellar-xdr` protocol types.
//!
//! A vote is a v1 envelope with an ed25519 source account, fee, sequence
//! number, time-bound preconditions, a text memo and no operations. This
//! module builds those envelopes, moves them to and from base64, and
//! computes the payload hash that signers sign.

use sha2::{Digest, Sha256};
use stellar_strkey::ed25519::PublicKey;
use stellar_xdr::curr::{
    Hash, Limits, ReadXdr, SequenceNumber, Signature, SignatureHint, StringM, TimePoint,
    TransactionExt, TransactionSignaturePayload, TransactionSignaturePayloadTaggedTransaction,
    Uint256, VecM, WriteXdr,
};
use thiserror::Error;

pub use stellar_xdr::curr::{
    DecoratedSignature, Memo, MuxedAccount, Preconditions, TimeBounds, Transaction,
    TransactionEnvelope, TransactionV1Envelope,
};

/// Maximum byte length of a text memo.
pub const MEMO_TEXT_MAX: usize = 28;

/// Errors from building or decoding envelopes.
#[derive(Debug, Error, PartialEq)]
pub enum XdrError {
    #[error("memo text is {0} bytes, limit is {MEMO_TEXT_MAX}")]
    MemoTooLong(usize),
    #[error("invalid source account: {0}")]
    SourceAccount(#[from] stellar_strkey::DecodeError),
    #[error("unsupported envelope type {0}")]
    UnsupportedEnvelope(&'static str),
    #[error("xdr: {0}")]
    Codec(#[from] stellar_xdr::curr::Error),
}

/// Result alias for XDR operations.
pub type Result<T> = std::result::Result<T, XdrError>;

/// Validity window of `timeout_secs` starting at `now` (unix seconds).
pub fn time_bounds(now: u64, timeout_secs: u64) -> TimeBounds {
    TimeBounds {
        min_time: TimePoint(now),
        max_time: TimePoint(now.saturating_add(timeout_secs)),
    }
}

/// A text memo, rejected when longer than [`MEMO_TEXT_MAX`] bytes.
pub fn text_memo(text: &str) -> Result<Memo> {
    let memo = StringM::<28>::try_from(text).map_err(|_| XdrError::MemoTooLong(text.len()))?;
    Ok(Memo::Text(memo))
}

/// Parses a `G…` account id into a transaction source.
pub fn source_account(account_id: &str) -> Result<MuxedAccount> {
    let key = PublicKey::from_string(account_id)?;
    Ok(MuxedAccount::Ed25519(Uint256(key.0)))
}

/// `G…` account id behind a transaction source.
pub fn account_id(source: &MuxedAccount) -> String {
    let key = match source {
        MuxedAccount::Ed25519(key) => key.0,
        MuxedAccount::MuxedEd25519(muxed) => muxed.ed25519.0,
    };
    PublicKey(key).to_string()
}

/// An operation-less transaction from a `G…` source account.
pub fn transaction(
    source: &str,
    sequence: i64,
    fee: u32,
    time_bounds: Option<TimeBounds>,
    memo: Memo,
) -> Result<Transaction> {
    Ok(Transaction {
        source_account: source_account(source)?,
        fee,
        seq_num: SequenceNumber(sequence),
        cond: time_bounds.map_or(Preconditions::None, Preconditions::Time),
        memo,
        operations: VecM::default(),
        ext: TransactionExt::V0,
    })
}

/// `sha256(passphrase)`, the network id mixed into every signature payload.
pub fn network_id(passphrase: &str) -> Hash {
    Hash(Sha256::digest(passphrase.as_bytes()).into())
}

/// Hash that signers sign: `sha256(network_id || ENVELOPE_TYPE_TX || tx)`.
pub fn transaction_hash(tx: &Transaction, network_passphrase: &str) -> Result<[u8; 32]> {
    let payload = TransactionSignaturePayload {
        network_id: network_id(network_passphrase),
        tagged_transaction: TransactionSignaturePayloadTaggedTransaction::Tx(tx.clone()),
    };
    let bytes = payload.to_xdr(Limits::none())?;
    Ok(Sha256::digest(bytes).into())
}

/// Base64 envelope for `tx` with no signatures, as handed to wallets.
pub fn encode_unsigned(tx: Transaction) -> Result<String> {
    Ok(TransactionEnvelope::from(tx).to_xdr_base64(Limits::none())?)
}

pub fn encode_envelope(envelope: TransactionV1Envelope) -> Result<String> {
    Ok(TransactionEnvelope::Tx(envelope).to_xdr_base64(Limits::none())?)
}

/// Decodes a base64 envelope. Only v1 transaction envelopes are accepted.
pub fn decode_envelope(envelope_xdr: &str) -> Result<TransactionV1Envelope> {
    match TransactionEnvelope::from_xdr_base64(envelope_xdr.trim(), Limits::none())? {
        TransactionEnvelope::Tx(envelope) => Ok(envelope),
        other => Err(XdrError::UnsupportedEnvelope(other.name())),
    }
}

/// A signature plus the last four bytes of the signer's public key.
pub fn decorated_signature(
    public_key: &[u8; 32],
    signature: [u8; 64],
) -> Result<DecoratedSignature> {
    let mut hint = [0u8; 4];
    hint.copy_from_slice(&public_key[28..]);
    Ok(DecoratedSignature {
        hint: SignatureHint(hint),
        signature: Signature(signature.try_into()?),
    })
}

/// Appends `signature`; an envelope holds at most 20.
pub fn with_signature(
    mut envelope: TransactionV1Envelope,
    signature: DecoratedSignature,
) -> Result<TransactionV1Envelope> {
    let mut signatures = envelope.signatures.to_vec();
    signatures.push(signature);
    envelope.signatures = signatures.try_into()?;
    Ok(envelope)
}
