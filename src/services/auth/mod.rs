pub mod access_jwt;
pub mod claims;
pub mod permissions;

pub use access_jwt::{AccessJwtError, AuthService};
pub use claims::Claims;
pub use permissions::{PermissionGroup, PermissionSet, Requirement, RequirementError};
