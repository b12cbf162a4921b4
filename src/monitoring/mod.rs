/*!
 * Monitoring
 * Structured logging setup
 */

mod tracer;

pub use tracer::{generate_session_id, init_tracing};
