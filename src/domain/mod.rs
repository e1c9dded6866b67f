//! Domain Layer
//!
//! The banner model and the pure logic around it, without I/O.
//!
//! - `entities/` - The campaign context
//! - `value_objects/` - Closed types (Application, CampaignClass, PipelineStep)
//! - `services/` - Escaping, rendering and target resolution
//! - `ports/` - Remote channel, restarts, prompting, host lookup and progress events
//!
//! Remote hosts and the operator are only reached through `ports`.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
