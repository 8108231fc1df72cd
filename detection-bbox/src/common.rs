pub use getset::CopyGetters;
pub use log::{debug, trace};
pub use noisy_float::prelude::*;
pub use num_traits::ToPrimitive;
pub use serde::{Deserialize, Serialize};
pub use serde_json::{Number, Value};
pub use thiserror::Error;
