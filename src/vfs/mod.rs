/*!
 * Virtual File System
 *
 * Filesystem abstraction behind the persistence adapter:
 * - `LocalFS` for the host data directory
 * - `MemFS` for tests and throwaway sessions
 */

mod local;
mod memory;
mod traits;
mod types;

pub use local::LocalFS;
pub use memory::MemFS;
pub use traits::FileSystem;
pub use types::{VfsError, VfsResult};
