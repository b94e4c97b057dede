/*!
 * Request extractors
 *
 * - AuthClaims: verified token claims placed by the access middleware
 * - JsonBody: JSON body parsing with 400/413 mapped onto AppError
 */
mod auth_claims;
mod json_body;

pub use auth_claims::AuthClaims;
pub use json_body::JsonBody;
