//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene tutti i DTOs usati per la comunicazione client-server.
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod health;
pub mod invitation;
pub mod pagination;
pub mod query;

// Re-exports per facilitare l'import
pub use health::HealthDTO;
pub use invitation::{
    ConfirmInvitationDTO, CreateInvitationDTO, InvitationDTO, InvitationListDTO,
    InvitationResponseDTO, UpdateInvitationDTO,
};
pub use pagination::Pagination;
pub use query::PageQuery;
