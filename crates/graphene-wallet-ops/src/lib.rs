//! # Graphene Wallet Ops
//!
//! Maps operation names to the ledger's fixed numeric opcodes and
//! assembles prepared operations into the payload handed to the signing
//! tool: either a direct list of bodies, or a single `proposal_create`
//! wrapping them for committee/delayed execution.
//!
//! Assembly is pure construction. Serialization and delivery (deep link,
//! file export) belong to the surrounding application.

pub mod error;
pub mod opcodes;
pub mod payload;

pub use error::{OpsError, OpsResult};
pub use opcodes::{name_of, opcode_of, OPERATION_NAMES};
pub use payload::{
    build_payload, zero_fee, DirectPayload, OperationDraft, ProposalParams, TaggedOperation,
    CORE_ASSET_ID,
};
