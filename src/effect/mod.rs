//! Computational contexts that a fold can run inside.
//!
//! # Base Contexts
//!
//! - [`IO`]: deferred side effects, run in order by `run_unsafe`
//! - [`Reader`]: a shared, read-only environment
//! - [`State`]: a state threaded through each step
//! - [`Writer`]: output accumulated alongside a result
//!
//! # Transformers
//!
//! - [`ReaderT`]: an environment over any inner context
//! - [`StateT`]: a state over `Option`, `Result` or `IO`
//! - [`WriterT`]: output over `Option` or `Result`
//! - [`ExceptT`]: early failure over `IO`
//!
//! Each type carries its own `pure`/`fmap`/`flat_map` style methods. The
//! transformers over concrete inner contexts name them by that context
//! (`flat_map_option`, `fmap_io`, ...).
//!
//! # Examples
//!
//! ```rust
//! use endofold::effect::{State, Writer, IO};
//!
//! let io = IO::pure(10).fmap(|x| x * 2).flat_map(|x| IO::pure(x + 1));
//! assert_eq!(io.run_unsafe(), 21);
//!
//! let counter = State::modify(|count: u32| count + 1).then(State::get());
//! assert_eq!(counter.run(0), (1, 1));
//!
//! let logged = Writer::tell(vec!["start"]).fmap(|()| 42);
//! assert_eq!(logged.into_parts(), (42, vec!["start"]));
//! ```

// =============================================================================
// Base Contexts
// =============================================================================

mod io;
mod reader;
mod state;
mod writer;

pub use io::IO;
pub use reader::Reader;
pub use state::State;
pub use writer::Writer;

// =============================================================================
// Transformers
// =============================================================================

mod except_transformer;
mod reader_transformer;
mod state_transformer;
mod writer_transformer;

pub use except_transformer::ExceptT;
pub use reader_transformer::ReaderT;
pub use state_transformer::StateT;
pub use writer_transformer::WriterT;
