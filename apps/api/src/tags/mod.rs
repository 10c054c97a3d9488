// Domain tag tree: sub-tag distillation and incremental revision.
// The ordinal label grammar lives in distiller and is shared by both.

pub mod distiller;
pub mod handlers;
pub mod prompts;
pub mod revision;
