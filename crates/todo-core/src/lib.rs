//! Todo Core
//!
//! Framework-free layers of the to-do app:
//! - item: the persisted entity
//! - storage: key-value persistence seam
//! - store: the owned list and its persistence cycle
//! - install: install-prompt bookkeeping

mod clock;
mod config;
mod error;
mod install;
mod item;
mod storage;
mod store;


pub use clock::{Clock, IdGenerator, SystemClock};
pub use config::TodoConfig;
pub use error::{StorageError, StorageResult};
pub use install::{InstallEnvironment, InstallGate};
pub use item::{Item, TodoId};
pub use storage::{KeyValueStore, MemoryStorage};
pub use store::TodoStore;
