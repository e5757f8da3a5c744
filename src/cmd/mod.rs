//! CLI command implementations.
//!
//! | Module     | Commands handled |
//! |------------|------------------|
//! | `generate` | `Generate`       |
//! | `vocab`    | `Vocab`          |
//! | `config`   | `Config`         |

pub mod config;
pub mod generate;
pub mod vocab;

pub use config::cmd_config;
pub use generate::cmd_generate;
pub use vocab::cmd_vocab;
