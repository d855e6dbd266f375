//! Payload assembly.
//!
//! A screen hands over the operations it prepared; assembly either keeps
//! them as a direct list (broadcast as-is) or wraps them in a single
//! `proposal_create` for delayed, multi-party approval. Inner fees are
//! zeroed in the proposal form: the wallet that eventually broadcasts
//! computes fees at that moment, not at construction time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{OpsError, OpsResult};
use crate::opcodes::opcode_of;

/// The chain's core asset, in which zeroed placeholder fees are stated.
pub const CORE_ASSET_ID: &str = "1.3.0";

/// Ledger timestamp format (no timezone suffix).
const EXPIRATION_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One operation as prepared by a form: its protocol name and JSON body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationDraft {
    pub name: String,
    pub body: Value,
}

impl OperationDraft {
    pub fn new(name: impl Into<String>, body: Value) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }
}

/// Opcode-tagged name, kept parallel to the body list for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedOperation {
    pub opcode: u8,
    pub name: String,
}

/// The assembled payload: operation bodies in submission order plus
/// their tags. Consumed by the (out-of-scope) delivery layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectPayload {
    pub operations: Vec<Value>,
    pub tags: Vec<TaggedOperation>,
}

/// Caller-supplied proposal parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalParams {
    pub fee_paying_account: String,
    pub expiration_time: DateTime<Utc>,
    pub review_period_seconds: Option<u32>,
}

/// A zeroed fee in the core asset.
pub fn zero_fee() -> Value {
    json!({ "amount": 0, "asset_id": CORE_ASSET_ID })
}

/// Assemble the final payload.
///
/// Without `proposal`, the drafts become a direct list. With it, they
/// become the `proposed_ops` of one synthetic `proposal_create`: each
/// entry an `[opcode, body]` pair with the body's fee replaced by
/// [`zero_fee`]. Either way every name must resolve through the opcode
/// table; an unknown name aborts assembly.
pub fn build_payload(
    drafts: &[OperationDraft],
    proposal: Option<&ProposalParams>,
) -> OpsResult<DirectPayload> {
    match proposal {
        None => build_direct(drafts),
        Some(params) => build_proposal(drafts, params),
    }
}

fn build_direct(drafts: &[OperationDraft]) -> OpsResult<DirectPayload> {
    let mut operations = Vec::with_capacity(drafts.len());
    let mut tags = Vec::with_capacity(drafts.len());
    for draft in drafts {
        let opcode = opcode_of(&draft.name)?;
        operations.push(draft.body.clone());
        tags.push(TaggedOperation {
            opcode,
            name: draft.name.clone(),
        });
    }
    Ok(DirectPayload { operations, tags })
}

fn build_proposal(drafts: &[OperationDraft], params: &ProposalParams) -> OpsResult<DirectPayload> {
    let mut proposed_ops = Vec::with_capacity(drafts.len());
    for draft in drafts {
        let opcode = opcode_of(&draft.name)?;
        let mut body = draft
            .body
            .as_object()
            .cloned()
            .ok_or_else(|| OpsError::InvalidBody(draft.name.clone()))?;
        body.insert("fee".to_string(), zero_fee());
        proposed_ops.push(json!([opcode, body]));
    }

    let mut proposal_body = json!({
        "fee_paying_account": params.fee_paying_account,
        "expiration_time": params
            .expiration_time
            .format(EXPIRATION_FORMAT)
            .to_string(),
        "proposed_ops": proposed_ops,
    });
    if let Some(review) = params.review_period_seconds {
        proposal_body["review_period_seconds"] = review.into();
    }

    Ok(DirectPayload {
        operations: vec![proposal_body],
        tags: vec![TaggedOperation {
            opcode: opcode_of("proposal_create")?,
            name: "proposal_create".to_string(),
        }],
    })
}
