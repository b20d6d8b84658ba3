mod as_value;
mod date_functions;
mod expression;
mod transcode;
mod unpack;
mod util;
mod value;

pub use as_value::*;
pub use date_functions::*;
pub use expression::*;
pub use transcode::*;
pub use unpack::*;
pub use util::*;
pub use value::*;

pub use ::anyhow::Context;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
